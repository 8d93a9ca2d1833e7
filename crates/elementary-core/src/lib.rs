//! # Elementary Core Library
//!
//! Reference data and display logic for the chemical elements: the periodic table grid,
//! a sortable and filterable element list, and a per-element detail view, all backed by a
//! bundled, read-only SQLite dataset.
//!
//! ## Architectural Philosophy
//!
//! The library is split into four layers, each depending only on the ones listed before it.
//!
//! - **[`core`]: The Foundation.** Immutable element records, electron configurations,
//!   isotopes, unit conversion, number formatting, the fixed colour palette, and the
//!   read-only data sources (SQLite elements, CSV isotopes, TOML strings).
//!
//! - **[`view`]: Derived Values.** Pure functions that turn a record plus the current
//!   [`settings::Settings`] snapshot into what a front end displays: grid placement,
//!   colour key, subtext, detail strings, and the filtered/sorted list.
//!
//! - **[`settings`]: Preferences.** The settings snapshot and a store that broadcasts
//!   every change to its subscribers. Nothing derived is ever cached; consumers recompute
//!   from the latest snapshot when notified.
//!
//! - **[`workflows`]: The Public API.** The [`workflows::catalog::Catalog`] ties a data
//!   source, string table and isotope table together and is the usual entry point.

pub mod core;
pub mod settings;
pub mod view;
pub mod workflows;
