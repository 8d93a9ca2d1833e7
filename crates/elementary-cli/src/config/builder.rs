use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::AppConfig;
use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::ui;
use elementary::settings::{SettingKey, Settings, SettingsStore};
use elementary::workflows::catalog::CatalogConfigBuilder;
use tracing::debug;

/// Resolves the effective configuration: CLI flags over `--set` values over the config file
/// over built-in defaults.
pub fn build_config(cli: &Cli) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = match (&cli.config, &defaults.config_path) {
        (Some(path), _) => FileConfig::from_file(path)?,
        (None, Some(path)) if path.is_file() => FileConfig::from_file(path)?,
        _ => FileConfig::default(),
    };

    let settings = SettingsStore::new(file_config.settings_over(defaults.settings));
    settings.subscribe(log_change);

    apply_set_values(&settings, &cli.set_values)?;
    if let Some(unit) = cli.temperature_unit {
        settings.set_temperature_unit(unit);
    }
    if let Some(key) = cli.colors {
        settings.set_color_key(key);
    }

    let catalog = CatalogConfigBuilder::new()
        .database_path(file_config.database)
        .strings_path(file_config.strings)
        .isotopes_path(file_config.isotopes)
        .build();

    Ok(AppConfig {
        catalog,
        settings,
        color_output: ui::color_enabled(cli.no_color),
    })
}

fn log_change(key: SettingKey, settings: &Settings) {
    let value = match key {
        SettingKey::TemperatureUnits => settings.temperature_unit.key(),
        SettingKey::ElementColors => settings.color_key.key(),
        SettingKey::SubtextValue => settings.subtext.key(),
        SettingKey::SortField => settings.sort.field.key(),
        SettingKey::SortDirection => settings.sort.direction.key(),
    };
    debug!("Setting {} is now '{}'", key, value);
}

fn setting_key(name: &str) -> Option<SettingKey> {
    match name {
        "display.temperature-unit" => Some(SettingKey::TemperatureUnits),
        "display.element-colors" => Some(SettingKey::ElementColors),
        "display.subtext" => Some(SettingKey::SubtextValue),
        "list.sort" => Some(SettingKey::SortField),
        "list.direction" => Some(SettingKey::SortDirection),
        _ => None,
    }
}

fn apply_set_values(settings: &SettingsStore, set_values: &[String]) -> Result<()> {
    for kv_pair in set_values {
        let (name, value) = kv_pair.split_once('=').ok_or_else(|| {
            CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            ))
        })?;
        let key = setting_key(name.trim()).ok_or_else(|| {
            CliError::Config(format!(
                "Unsupported configuration key for --set: '{}'",
                name
            ))
        })?;
        settings
            .set(key, value)
            .map_err(|e| CliError::Config(format!("Invalid value for {}: {}", name, e)))?;
    }
    Ok(())
}
