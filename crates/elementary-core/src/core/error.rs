use super::models::configuration::ConfigurationParseError;
use thiserror::Error;

/// A violation of the invariants the bundled dataset is expected to uphold.
///
/// These are never tolerated per call: a record that fails validation means the dataset
/// itself is corrupt, and the error surfaces as a load failure.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DataError {
    #[error("Atomic number {number} is outside 1..=118")]
    NumberOutOfRange { number: i64 },

    #[error("Element {number} has period {period}, expected 1..=7")]
    PeriodOutOfRange { number: u32, period: i64 },

    #[error("Element {number} has group {group}, expected 0..=18")]
    GroupOutOfRange { number: u32, group: i64 },

    #[error("Element {number} has no group but is not in a lanthanide or actinide row (period {period})")]
    OrphanSeriesElement { number: u32, period: u32 },

    #[error("Element {number} has category index {category}, expected below {count}")]
    CategoryOutOfRange {
        number: u32,
        category: i64,
        count: usize,
    },

    #[error("Element {number} has unknown block '{value}'")]
    InvalidBlock { number: u32, value: String },

    #[error("Element {number} has an invalid electron configuration: {source}")]
    InvalidConfiguration {
        number: u32,
        #[source]
        source: ConfigurationParseError,
    },

    #[error("Element {number} has an invalid electrons-per-shell list '{value}'")]
    InvalidShells { number: u32, value: String },

    #[error("Element {number} lists {found} electrons in its {context}")]
    ElectronCountMismatch {
        number: u32,
        context: &'static str,
        found: u32,
    },

    #[error("Element {number} has a non-positive atomic weight {weight}")]
    InvalidWeight { number: u32, weight: f64 },

    #[error("Atomic number {number} appears more than once in the dataset")]
    DuplicateNumber { number: u32 },

    #[error("Symbol '{symbol}' appears more than once in the dataset")]
    DuplicateSymbol { symbol: String },

    #[error("Atomic number {number} is missing from the dataset")]
    MissingNumber { number: u32 },
}
