use crate::error::{CliError, Result};
use elementary::core::units::TemperatureUnit;
use elementary::settings::Settings;
use elementary::view::color::ColorKey;
use elementary::view::list::{SortDirection, SortField};
use elementary::view::subtext::SubtextField;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileDisplayConfig {
    pub temperature_unit: Option<TemperatureUnit>,
    pub element_colors: Option<ColorKey>,
    pub subtext: Option<SubtextField>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileListConfig {
    pub sort: Option<SortField>,
    pub direction: Option<SortDirection>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub database: Option<PathBuf>,
    pub strings: Option<PathBuf>,
    pub isotopes: Option<PathBuf>,
    pub display: Option<FileDisplayConfig>,
    pub list: Option<FileListConfig>,
}

impl FileConfig {
    /// Reads a config file. Relative resource paths are resolved against the file's directory.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        if let Some(dir) = path.parent() {
            for resource in [&mut config.database, &mut config.strings, &mut config.isotopes] {
                if let Some(p) = resource.as_mut().filter(|p| p.is_relative()) {
                    *p = dir.join(&*p);
                }
            }
        }
        Ok(config)
    }

    /// `base` with every preference this file sets written over it.
    pub fn settings_over(&self, base: Settings) -> Settings {
        let mut settings = base;
        if let Some(display) = &self.display {
            if let Some(unit) = display.temperature_unit {
                settings.temperature_unit = unit;
            }
            if let Some(key) = display.element_colors {
                settings.color_key = key;
            }
            if let Some(field) = display.subtext {
                settings.subtext = field;
            }
        }
        if let Some(list) = &self.list {
            if let Some(field) = list.sort {
                settings.sort.field = field;
            }
            if let Some(direction) = list.direction {
                settings.sort.direction = direction;
            }
        }
        settings
    }
}
