use crate::core::models::element::{CATEGORY_COUNT, MAX_ATOMIC_NUMBER};
use crate::core::units::TemperatureUnit;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// The bundled English string table.
pub const BUNDLED_TOML: &str = include_str!("../../../data/strings/en.toml");

const BUNDLED_LABEL: &str = "<bundled strings/en.toml>";

/// Number of subtext option labels the table must provide.
pub const SUBTEXT_LABEL_COUNT: usize = 7;

#[derive(Debug, Error)]
pub enum StringsLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("String table '{path}' lists {found} {table}, expected {expected}")]
    WrongLength {
        path: String,
        table: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("String table '{path}' has no {table} entry for element {number:03}")]
    MissingElement {
        path: String,
        table: &'static str,
        number: u32,
    },
}

/// Unit labels appended to detail values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnitLabels {
    pub density: String,
    pub heat: String,
    pub negativity: String,
    pub abundance: String,
    pub kelvin: String,
    pub celsius: String,
    pub fahrenheit: String,
}

impl UnitLabels {
    /// The suffix appended to temperatures shown in `unit`.
    pub fn temperature(&self, unit: TemperatureUnit) -> &str {
        match unit {
            TemperatureUnit::Kelvin => &self.kelvin,
            TemperatureUnit::Celsius => &self.celsius,
            TemperatureUnit::Fahrenheit => &self.fahrenheit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct WikiSection {
    lang: String,
}

/// The localized strings for one locale.
///
/// Element names and Wikipedia page slugs are keyed by the zero-padded atomic number
/// (`"001"` for hydrogen).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Strings {
    unknown: String,
    not_applicable: String,
    categories: Vec<String>,
    subtext_values: Vec<String>,
    units: UnitLabels,
    wiki: WikiSection,
    names: HashMap<String, String>,
    wiki_pages: HashMap<String, String>,
}

impl Strings {
    pub fn bundled() -> Result<Self, StringsLoadError> {
        Self::from_toml_str(BUNDLED_TOML, BUNDLED_LABEL)
    }

    pub fn load(path: &Path) -> Result<Self, StringsLoadError> {
        let label = path.to_string_lossy().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| StringsLoadError::Io {
            path: label.clone(),
            source: e,
        })?;
        Self::from_toml_str(&content, &label)
    }

    /// Parses and validates a string table. `label` names the source in errors.
    pub fn from_toml_str(content: &str, label: &str) -> Result<Self, StringsLoadError> {
        let strings: Strings = toml::from_str(content).map_err(|e| StringsLoadError::Toml {
            path: label.to_string(),
            source: e,
        })?;
        strings.validate(label)?;
        debug!(
            "Loaded string table '{}' ({} names, wiki language '{}')",
            label,
            strings.names.len(),
            strings.wiki.lang
        );
        Ok(strings)
    }

    fn validate(&self, label: &str) -> Result<(), StringsLoadError> {
        let lengths = [
            ("categories", CATEGORY_COUNT, self.categories.len()),
            ("subtext-values", SUBTEXT_LABEL_COUNT, self.subtext_values.len()),
        ];
        for (table, expected, found) in lengths {
            if found != expected {
                return Err(StringsLoadError::WrongLength {
                    path: label.to_string(),
                    table,
                    expected,
                    found,
                });
            }
        }

        for number in 1..=MAX_ATOMIC_NUMBER {
            let key = element_key(number);
            for (table, map) in [("names", &self.names), ("wiki-pages", &self.wiki_pages)] {
                if !map.contains_key(&key) {
                    return Err(StringsLoadError::MissingElement {
                        path: label.to_string(),
                        table,
                        number,
                    });
                }
            }
        }
        Ok(())
    }

    /// The placeholder shown for absent values.
    pub fn unknown(&self) -> &str {
        &self.unknown
    }

    /// The placeholder shown for values that do not apply, such as group 0.
    pub fn not_applicable(&self) -> &str {
        &self.not_applicable
    }

    pub fn element_name(&self, number: u32) -> Option<&str> {
        self.names.get(&element_key(number)).map(String::as_str)
    }

    pub fn category_name(&self, category: usize) -> Option<&str> {
        self.categories.get(category).map(String::as_str)
    }

    /// The localized subtext option labels, in subtext field order.
    pub fn subtext_labels(&self) -> &[String] {
        &self.subtext_values
    }

    pub fn units(&self) -> &UnitLabels {
        &self.units
    }

    pub fn wiki_lang(&self) -> &str {
        &self.wiki.lang
    }

    pub fn wiki_page(&self, number: u32) -> Option<&str> {
        self.wiki_pages
            .get(&element_key(number))
            .map(String::as_str)
    }
}

fn element_key(number: u32) -> String {
    format!("{:03}", number)
}
