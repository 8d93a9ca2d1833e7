use crate::core::format::{GRID_DIGITS, format_decimal};
use crate::core::io::strings::Strings;
use crate::core::models::element::TableEntry;
use crate::core::units::TemperatureUnit;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Abundances below this are shown as a bound rather than a value.
pub const TRACE_ABUNDANCE: f64 = 0.001;

/// Rendered for a field that has no value.
pub const MISSING: &str = "?";

/// The value shown beneath an element's symbol on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SubtextField {
    #[default]
    Weight,
    Density,
    Melt,
    Boil,
    Heat,
    Negativity,
    Abundance,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error(
    "Unknown subtext field '{0}'. Expected one of Weight, Density, Melt, Boil, Heat, Negativity, Abundance."
)]
pub struct UnknownSubtextFieldError(pub String);

impl SubtextField {
    /// Every field, in the order of the localized option labels.
    pub const ALL: [SubtextField; 7] = [
        Self::Weight,
        Self::Density,
        Self::Melt,
        Self::Boil,
        Self::Heat,
        Self::Negativity,
        Self::Abundance,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Weight => "Weight",
            Self::Density => "Density",
            Self::Melt => "Melt",
            Self::Boil => "Boil",
            Self::Heat => "Heat",
            Self::Negativity => "Negativity",
            Self::Abundance => "Abundance",
        }
    }

    /// Formats this field of a grid entry.
    pub fn format(self, entry: &TableEntry, unit: TemperatureUnit) -> String {
        let m = &entry.measurements;
        match self {
            Self::Weight => grid_weight(entry.weight, entry.unstable),
            Self::Density => grid_value(m.density),
            Self::Melt => grid_value(m.melt.map(|k| unit.from_kelvin(k))),
            Self::Boil => grid_value(m.boil.map(|k| unit.from_kelvin(k))),
            Self::Heat => grid_value(m.heat),
            Self::Negativity => grid_value(m.negativity),
            Self::Abundance => match m.abundance {
                Some(value) if value < TRACE_ABUNDANCE => format!("<{}", TRACE_ABUNDANCE),
                other => grid_value(other),
            },
        }
    }
}

impl fmt::Display for SubtextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SubtextField {
    type Err = UnknownSubtextFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownSubtextFieldError(wanted.to_string()))
    }
}

/// Formats an atomic weight for a grid cell or the detail view.
///
/// Unstable elements show the rounded mass number of their most stable isotope in
/// brackets (`"[98]"`).
pub fn weight_text(weight: f64, unstable: bool, max_fraction_digits: usize) -> String {
    if unstable {
        format!("[{}]", format_decimal(weight.round(), 0))
    } else {
        format_decimal(weight, max_fraction_digits)
    }
}

fn grid_weight(weight: f64, unstable: bool) -> String {
    weight_text(weight, unstable, GRID_DIGITS)
}

fn grid_value(value: Option<f64>) -> String {
    value
        .map(|v| format_decimal(v, GRID_DIGITS))
        .unwrap_or_else(|| MISSING.to_string())
}

/// One selectable subtext option with its localized label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtextOption {
    pub field: SubtextField,
    pub label: String,
}

/// Lists the subtext options, rewriting the temperature labels' parenthesized unit to the
/// active temperature unit.
pub fn subtext_options(strings: &Strings, unit: TemperatureUnit) -> Vec<SubtextOption> {
    SubtextField::ALL
        .into_iter()
        .zip(strings.subtext_labels())
        .map(|(field, label)| {
            let label = match field {
                SubtextField::Melt | SubtextField::Boil => with_unit(label, unit),
                _ => label.clone(),
            };
            SubtextOption { field, label }
        })
        .collect()
}

fn with_unit(label: &str, unit: TemperatureUnit) -> String {
    match label.rfind('(') {
        Some(open) if label.ends_with(')') => format!("{}({})", &label[..open], unit.label()),
        _ => label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::element::tests::sulfur;

    fn entry() -> TableEntry {
        TableEntry::from(&sulfur())
    }

    #[test]
    fn weight_trims_to_four_digits() {
        let mut e = entry();
        e.weight = 2.34567891;
        assert_eq!(SubtextField::Weight.format(&e, TemperatureUnit::Kelvin), "2.3457");
        e.weight = 32.06;
        assert_eq!(SubtextField::Weight.format(&e, TemperatureUnit::Kelvin), "32.06");
    }

    #[test]
    fn unstable_weight_is_bracketed_integer() {
        let mut e = entry();
        e.unstable = true;
        e.weight = 98.0;
        assert_eq!(SubtextField::Weight.format(&e, TemperatureUnit::Kelvin), "[98]");
        e.weight = 244.0642;
        assert_eq!(SubtextField::Weight.format(&e, TemperatureUnit::Kelvin), "[244]");
        assert_eq!(weight_text(208.9824, true, 8), "[209]");
    }

    #[test]
    fn trace_abundance_is_bounded() {
        let mut e = entry();
        e.measurements.abundance = Some(0.0005);
        assert_eq!(SubtextField::Abundance.format(&e, TemperatureUnit::Kelvin), "<0.001");
        e.measurements.abundance = Some(0.001);
        assert_eq!(SubtextField::Abundance.format(&e, TemperatureUnit::Kelvin), "0.001");
        e.measurements.abundance = Some(2.34567891);
        assert_eq!(SubtextField::Abundance.format(&e, TemperatureUnit::Kelvin), "2.3457");
    }

    #[test]
    fn temperatures_follow_unit() {
        let e = entry();
        assert_eq!(SubtextField::Melt.format(&e, TemperatureUnit::Kelvin), "388.36");
        assert_eq!(SubtextField::Melt.format(&e, TemperatureUnit::Celsius), "115.21");
        assert_eq!(SubtextField::Boil.format(&e, TemperatureUnit::Fahrenheit), "832.496");
    }

    #[test]
    fn absent_values_render_question_mark() {
        let mut e = entry();
        e.measurements = Default::default();
        for field in SubtextField::ALL.into_iter().skip(1) {
            assert_eq!(field.format(&e, TemperatureUnit::Celsius), "?");
        }
    }

    #[test]
    fn parses_field_keys_case_insensitively() {
        assert_eq!("density".parse(), Ok(SubtextField::Density));
        assert_eq!("Negativity".parse(), Ok(SubtextField::Negativity));
        assert!("Colour".parse::<SubtextField>().is_err());
        assert_eq!(SubtextField::default(), SubtextField::Weight);
    }

    #[test]
    fn options_rewrite_temperature_labels() {
        let strings = Strings::bundled().unwrap();
        let options = subtext_options(&strings, TemperatureUnit::Celsius);
        assert_eq!(options.len(), 7);
        assert_eq!(options[0].field, SubtextField::Weight);
        assert_eq!(options[2].label, "Melting point (℃)");
        assert_eq!(options[3].label, "Boiling point (℃)");
        assert_eq!(options[1].label, "Density (g/cm³)");

        let options = subtext_options(&strings, TemperatureUnit::Fahrenheit);
        assert_eq!(options[2].label, "Melting point (℉)");
        let options = subtext_options(&strings, TemperatureUnit::Kelvin);
        assert_eq!(options[3].label, "Boiling point (K)");
    }
}
