//! # Core Module
//!
//! The foundation of the library: element data models, the conversions and formatting
//! primitives every display value is built from, and the read-only data sources.
//!
//! ## Key Components
//!
//! - [`models`] - Element records, electron configurations, orbitals, and isotopes
//! - [`units`] - Temperature conversion from the Kelvin base unit
//! - [`format`] - Decimal trimming and superscript digit rendering
//! - [`palette`] - The fixed colour palette keyed by category or block
//! - [`io`] - The SQLite element source, CSV isotope table, and TOML string table
//! - [`error`] - Data-integrity violations in the bundled dataset
//!
//! Every value here is immutable once loaded. Records are recreated fresh per query rather
//! than shared as mutable singletons.

pub mod error;
pub mod format;
pub mod io;
pub mod models;
pub mod palette;
pub mod units;
