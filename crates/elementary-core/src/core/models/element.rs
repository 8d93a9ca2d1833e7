use super::configuration::Configuration;
use crate::core::error::DataError;
use std::fmt;

/// Highest atomic number present in the dataset.
pub const MAX_ATOMIC_NUMBER: u32 = 118;

/// Number of rows in the main body of the periodic table.
pub const PERIOD_COUNT: u32 = 7;

/// Number of columns in the periodic table.
pub const GROUP_COUNT: u32 = 18;

/// Number of element categories, and so the length of the category name table.
pub const CATEGORY_COUNT: usize = 10;

/// Atomic numbers of the lanthanide row, which has no group.
pub const LANTHANIDES: std::ops::RangeInclusive<u32> = 57..=71;

/// Atomic numbers of the actinide row, which has no group.
pub const ACTINIDES: std::ops::RangeInclusive<u32> = 89..=103;

/// The periodic-table region an element belongs to, named after its outermost subshell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Block {
    S,
    P,
    D,
    F,
}

impl Block {
    pub const ALL: [Block; 4] = [Self::S, Self::P, Self::D, Self::F];

    /// The lowercase letter under which the block is stored (`"s"`, `"p"`, `"d"`, `"f"`).
    pub fn letter(self) -> &'static str {
        match self {
            Self::S => "s",
            Self::P => "p",
            Self::D => "d",
            Self::F => "f",
        }
    }

    pub fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "s" => Some(Self::S),
            "p" => Some(Self::P),
            "d" => Some(Self::D),
            "f" => Some(Self::F),
            _ => None,
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// The optional physical measurements of an element.
///
/// An absent value means the quantity is unmeasured or unknown. It is never stored as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measurements {
    /// Density in g/cm³.
    pub density: Option<f64>,
    /// Melting point in Kelvin.
    pub melt: Option<f64>,
    /// Boiling point in Kelvin.
    pub boil: Option<f64>,
    /// Specific heat capacity in J/g·K.
    pub heat: Option<f64>,
    /// Pauling electronegativity.
    pub negativity: Option<f64>,
    /// Abundance in the Earth's crust in mg/kg.
    pub abundance: Option<f64>,
}

/// A chemical element as stored in the bundled dataset.
///
/// Elements are immutable value objects. They are decoded fresh for each query and are
/// identified by their atomic [`number`](Element::number), which never changes once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// The row identifier in the data source.
    pub id: i64,
    /// The atomic number, unique within `1..=118`.
    pub number: u32,
    /// The chemical symbol (e.g., "He"), unique across the dataset.
    pub symbol: String,
    /// The group (column), or 0 for the lanthanide and actinide rows.
    pub group: u32,
    /// The period (row), within `1..=7`.
    pub period: u32,
    /// The block named after the outermost subshell.
    pub block: Block,
    /// The standard atomic weight, or the mass number of the most stable isotope when
    /// [`unstable`](Element::unstable) is set.
    pub weight: f64,
    /// The optional physical measurements.
    pub measurements: Measurements,
    /// The index into the fixed category name table.
    pub category: usize,
    /// The ground-state electron configuration.
    pub configuration: Configuration,
    /// Electron counts per shell, innermost first and outermost last.
    pub electrons: Vec<u32>,
    /// Whether the element has no stable isotopes.
    pub unstable: bool,
    /// An optional external video identifier.
    pub video: Option<String>,
}

impl Element {
    /// Checks every integrity rule a record of the bundled dataset must satisfy.
    ///
    /// `category_count` is the length of the category name table the record indexes into.
    pub fn validate(&self, category_count: usize) -> Result<(), DataError> {
        check_placement(self.number, self.group, self.period)?;

        if self.category >= category_count {
            return Err(DataError::CategoryOutOfRange {
                number: self.number,
                category: self.category as i64,
                count: category_count,
            });
        }

        check_weight(self.number, self.weight)?;

        let configured = self.configuration.electron_count().unwrap_or(0);
        if configured != self.number {
            return Err(DataError::ElectronCountMismatch {
                number: self.number,
                context: "electron configuration",
                found: configured,
            });
        }

        let shells: u32 = self.electrons.iter().sum();
        if shells != self.number {
            return Err(DataError::ElectronCountMismatch {
                number: self.number,
                context: "electrons per shell",
                found: shells,
            });
        }

        Ok(())
    }
}

/// Atomic weights are finite and positive.
pub fn check_weight(number: u32, weight: f64) -> Result<(), DataError> {
    if weight.is_finite() && weight > 0.0 {
        Ok(())
    } else {
        Err(DataError::InvalidWeight { number, weight })
    }
}

/// Checks that an atomic number, group and period describe a valid table position.
///
/// Group 0 is only valid for the lanthanide row (period 6, numbers 57..=71) and the actinide
/// row (period 7, numbers 89..=103).
pub fn check_placement(number: u32, group: u32, period: u32) -> Result<(), DataError> {
    if !(1..=MAX_ATOMIC_NUMBER).contains(&number) {
        return Err(DataError::NumberOutOfRange {
            number: number as i64,
        });
    }
    if !(1..=PERIOD_COUNT).contains(&period) {
        return Err(DataError::PeriodOutOfRange {
            number,
            period: period as i64,
        });
    }
    if group > GROUP_COUNT {
        return Err(DataError::GroupOutOfRange {
            number,
            group: group as i64,
        });
    }
    if group == 0 {
        let in_series = match period {
            6 => LANTHANIDES.contains(&number),
            7 => ACTINIDES.contains(&number),
            _ => false,
        };
        if !in_series {
            return Err(DataError::OrphanSeriesElement { number, period });
        }
    }
    Ok(())
}

/// The list-view projection of an element.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub id: i64,
    pub number: u32,
    pub symbol: String,
    pub block: Block,
    pub category: usize,
}

/// The grid-view projection of an element, carrying every value a grid cell can show.
#[derive(Debug, Clone, PartialEq)]
pub struct TableEntry {
    pub id: i64,
    pub number: u32,
    pub symbol: String,
    pub group: u32,
    pub period: u32,
    pub block: Block,
    pub weight: f64,
    pub category: usize,
    pub unstable: bool,
    pub measurements: Measurements,
}

impl From<&Element> for ListEntry {
    fn from(element: &Element) -> Self {
        Self {
            id: element.id,
            number: element.number,
            symbol: element.symbol.clone(),
            block: element.block,
            category: element.category,
        }
    }
}

impl From<&Element> for TableEntry {
    fn from(element: &Element) -> Self {
        Self {
            id: element.id,
            number: element.number,
            symbol: element.symbol.clone(),
            group: element.group,
            period: element.period,
            block: element.block,
            weight: element.weight,
            category: element.category,
            unstable: element.unstable,
            measurements: element.measurements,
        }
    }
}
