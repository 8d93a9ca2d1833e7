//! # Workflows Module
//!
//! The top-level entry point of the library. A [`catalog::Catalog`] ties an element
//! source, the string table and the isotope table together and answers the questions a
//! front end asks: look up one element, list and filter elements, lay out the periodic
//! table, and verify the integrity of the whole dataset.
//!
//! Every resource defaults to the bundled copy and can be replaced by a file on disk through
//! [`catalog::CatalogConfig`].

pub mod catalog;
