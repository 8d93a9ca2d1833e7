//! # View Module
//!
//! Derives every presentation value from an immutable element record plus the current
//! [`Settings`](crate::settings::Settings) snapshot. Nothing here is cached: each accessor
//! recomputes its string on call, so a value read after a settings change always reflects
//! the new preference.
//!
//! ## Key Components
//!
//! - [`grid`] - Row and column placement on the periodic table
//! - [`color`] - The colour key selector and palette lookup
//! - [`subtext`] - The selectable value shown beneath a grid symbol
//! - [`details`] - Full detail strings for one element, including isotope rows
//! - [`list`] - Prefix filtering and stable sorting of the element list
//! - [`links`] - Wikipedia and video URLs

pub mod color;
pub mod details;
pub mod grid;
pub mod links;
pub mod list;
pub mod subtext;
