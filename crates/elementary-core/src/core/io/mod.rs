//! Read-only access to the bundled reference data.
//!
//! Element records come from a SQLite table behind the [`traits::ElementSource`] trait,
//! isotopes from a CSV table, and every user-facing string from a TOML string table. All
//! three ship embedded in the library and can be replaced by files on disk.

pub mod database;
pub mod isotopes;
pub mod strings;
pub mod traits;
