use crate::core::io::strings::Strings;
use crate::core::models::element::ListEntry;
use crate::core::palette::Rgb;
use crate::view::color::ColorKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Number,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown sort field '{0}'. Expected 'number' or 'name'.")]
pub struct UnknownSortFieldError(pub String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown sort direction '{0}'. Expected 'asc' or 'desc'.")]
pub struct UnknownSortDirectionError(pub String);

impl SortField {
    pub fn key(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Name => "name",
        }
    }
}

impl SortDirection {
    pub fn key(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortField {
    type Err = UnknownSortFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "number" => Ok(Self::Number),
            "name" => Ok(Self::Name),
            _ => Err(UnknownSortFieldError(s.trim().to_string())),
        }
    }
}

impl FromStr for SortDirection {
    type Err = UnknownSortDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(UnknownSortDirectionError(s.trim().to_string())),
        }
    }
}

/// The active list ordering. Defaults to ascending atomic number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// The ordering after the user picks `field`: picking the active field flips the
    /// direction, picking the other field switches to it ascending.
    pub fn select(self, field: SortField) -> Self {
        if field == self.field {
            Self::new(field, self.direction.reversed())
        } else {
            Self::new(field, SortDirection::Ascending)
        }
    }
}

/// A list row: the list projection of an element plus its localized name.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub entry: ListEntry,
    pub name: String,
}

impl ListItem {
    pub fn new(entry: ListEntry, strings: &Strings) -> Self {
        let name = strings
            .element_name(entry.number)
            .unwrap_or(strings.unknown())
            .to_string();
        Self { entry, name }
    }

    pub fn color(&self, key: ColorKey) -> Option<Rgb> {
        key.color(self.entry.block, self.entry.category)
    }

    /// Case-insensitive prefix match against the symbol or the name. An empty filter
    /// matches every item.
    pub fn matches(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.entry.symbol.to_lowercase().starts_with(&filter)
            || self.name.to_lowercase().starts_with(&filter)
    }
}

/// Filters and orders `items` into a new list, leaving `items` untouched.
///
/// The sort is stable. A descending order is the ascending order reversed.
pub fn filter_and_sort(items: &[ListItem], filter: &str, order: SortOrder) -> Vec<ListItem> {
    let mut result: Vec<ListItem> = items
        .iter()
        .filter(|item| item.matches(filter))
        .cloned()
        .collect();

    match order.field {
        SortField::Number => result.sort_by_key(|item| item.entry.number),
        SortField::Name => result.sort_by(|a, b| a.name.cmp(&b.name)),
    }
    if order.direction == SortDirection::Descending {
        result.reverse();
    }
    result
}
