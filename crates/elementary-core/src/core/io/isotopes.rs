use crate::core::models::isotope::Isotope;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// The bundled isotope table.
pub const BUNDLED_CSV: &str = include_str!("../../../data/isotopes.csv");

const BUNDLED_LABEL: &str = "<bundled isotopes.csv>";

#[derive(Debug, Error)]
pub enum IsotopeLoadError {
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Isotope {mass_number}{symbol} in '{path}' has composition {value}, expected 0..=1")]
    InvalidComposition {
        path: String,
        symbol: String,
        mass_number: u32,
        value: f64,
    },
}

/// Isotopes indexed by atomic number, each list ordered by mass number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IsotopeTable {
    by_element: BTreeMap<u32, Vec<Isotope>>,
}

impl IsotopeTable {
    pub fn bundled() -> Result<Self, IsotopeLoadError> {
        Self::from_reader(BUNDLED_CSV.as_bytes(), BUNDLED_LABEL)
    }

    pub fn load(path: &Path) -> Result<Self, IsotopeLoadError> {
        let label = path.to_string_lossy().to_string();
        let reader = csv::Reader::from_path(path).map_err(|e| IsotopeLoadError::Csv {
            path: label.clone(),
            source: e,
        })?;
        Self::from_csv(reader, &label)
    }

    pub fn from_reader(reader: impl Read, label: &str) -> Result<Self, IsotopeLoadError> {
        Self::from_csv(csv::Reader::from_reader(reader), label)
    }

    fn from_csv<R: Read>(mut reader: csv::Reader<R>, label: &str) -> Result<Self, IsotopeLoadError> {
        let mut by_element: BTreeMap<u32, Vec<Isotope>> = BTreeMap::new();
        for result in reader.deserialize::<Isotope>() {
            let isotope = result.map_err(|e| IsotopeLoadError::Csv {
                path: label.to_string(),
                source: e,
            })?;
            if let Some(value) = isotope.composition {
                if !(0.0..=1.0).contains(&value) {
                    return Err(IsotopeLoadError::InvalidComposition {
                        path: label.to_string(),
                        symbol: isotope.symbol,
                        mass_number: isotope.mass_number,
                        value,
                    });
                }
            }
            by_element.entry(isotope.element).or_default().push(isotope);
        }

        for isotopes in by_element.values_mut() {
            isotopes.sort_by_key(|i| i.mass_number);
        }
        debug!(
            "Loaded isotopes for {} elements from '{}'",
            by_element.len(),
            label
        );
        Ok(Self { by_element })
    }

    /// The isotopes of an element, lightest first. Empty when none are listed.
    pub fn isotopes(&self, number: u32) -> &[Isotope] {
        self.by_element
            .get(&number)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of elements with at least one isotope listed.
    pub fn element_count(&self) -> usize {
        self.by_element.len()
    }
}
