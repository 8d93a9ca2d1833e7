use crate::core::error::DataError;
use crate::core::format::{DETAIL_DIGITS, format_decimal};
use crate::core::io::isotopes::IsotopeTable;
use crate::core::io::strings::Strings;
use crate::core::models::element::{CATEGORY_COUNT, Element};
use crate::core::palette::Rgb;
use crate::settings::SettingsStore;
use crate::view::links;
use crate::view::subtext::{TRACE_ABUNDANCE, weight_text};

/// One formatted row of an element's isotope table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsotopeRow {
    /// Superscript mass number plus symbol, e.g. `"¹⁴C"`.
    pub symbol: String,
    pub mass: String,
    /// The isotopic composition, or the "Unknown" placeholder.
    pub composition: String,
}

/// The detail view of one element.
///
/// Every accessor formats on call, reading the store's current snapshot, so a change of
/// temperature unit or colour key shows up on the next access.
pub struct ElementDetails<'a> {
    element: &'a Element,
    strings: &'a Strings,
    isotopes: &'a IsotopeTable,
    settings: &'a SettingsStore,
}

impl<'a> ElementDetails<'a> {
    pub fn new(
        element: &'a Element,
        strings: &'a Strings,
        isotopes: &'a IsotopeTable,
        settings: &'a SettingsStore,
    ) -> Self {
        Self {
            element,
            strings,
            isotopes,
            settings,
        }
    }

    pub fn element(&self) -> &Element {
        self.element
    }

    pub fn name(&self) -> &str {
        self.strings
            .element_name(self.element.number)
            .unwrap_or(self.strings.unknown())
    }

    /// `"{group}, {period}, {block}"`, with group 0 shown as not applicable.
    pub fn group_period_block(&self) -> String {
        let group = match self.element.group {
            0 => self.strings.not_applicable().to_string(),
            g => g.to_string(),
        };
        format!("{}, {}, {}", group, self.element.period, self.element.block)
    }

    pub fn weight(&self) -> String {
        weight_text(self.element.weight, self.element.unstable, DETAIL_DIGITS)
    }

    pub fn density(&self) -> String {
        self.with_unit(self.element.measurements.density, &self.strings.units().density)
    }

    pub fn melt(&self) -> String {
        self.temperature(self.element.measurements.melt)
    }

    pub fn boil(&self) -> String {
        self.temperature(self.element.measurements.boil)
    }

    pub fn heat(&self) -> String {
        self.with_unit(self.element.measurements.heat, &self.strings.units().heat)
    }

    pub fn negativity(&self) -> String {
        self.with_unit(
            self.element.measurements.negativity,
            &self.strings.units().negativity,
        )
    }

    pub fn abundance(&self) -> String {
        let unit = &self.strings.units().abundance;
        match self.element.measurements.abundance {
            Some(value) if value < TRACE_ABUNDANCE => format!("<{} {}", TRACE_ABUNDANCE, unit),
            other => self.with_unit(other, unit),
        }
    }

    /// The localized category name. An index outside the name table is corrupt data.
    pub fn category(&self) -> Result<&str, DataError> {
        self.strings
            .category_name(self.element.category)
            .ok_or(DataError::CategoryOutOfRange {
                number: self.element.number,
                category: self.element.category as i64,
                count: CATEGORY_COUNT,
            })
    }

    /// The electron configuration with superscript electron counts, e.g. `"[Ne] 3s² 3p⁴"`.
    pub fn configuration(&self) -> String {
        self.element.configuration.to_string()
    }

    /// Electrons per shell for inline display, e.g. `"2, 8, 6"`.
    pub fn electrons(&self) -> String {
        self.join_shells(", ")
    }

    /// Electrons per shell, one per line.
    pub fn electrons_vertical(&self) -> String {
        self.join_shells("\n")
    }

    pub fn isotopes(&self) -> Vec<IsotopeRow> {
        self.isotopes
            .isotopes(self.element.number)
            .iter()
            .map(|isotope| IsotopeRow {
                symbol: isotope.display_symbol(),
                mass: format_decimal(isotope.mass, DETAIL_DIGITS),
                composition: isotope
                    .composition
                    .map(|c| format_decimal(c, DETAIL_DIGITS))
                    .unwrap_or_else(|| self.strings.unknown().to_string()),
            })
            .collect()
    }

    pub fn wiki_url(&self) -> Option<String> {
        self.strings
            .wiki_page(self.element.number)
            .map(|page| links::wikipedia_url(self.strings.wiki_lang(), page))
    }

    pub fn video_url(&self) -> Option<String> {
        self.element.video.as_deref().map(links::video_url)
    }

    /// The element's colour under the active colour key.
    pub fn color(&self) -> Option<Rgb> {
        self.settings
            .snapshot()
            .color_key
            .color(self.element.block, self.element.category)
    }

    fn temperature(&self, kelvin: Option<f64>) -> String {
        let unit = self.settings.snapshot().temperature_unit;
        self.with_unit(
            kelvin.map(|k| unit.from_kelvin(k)),
            self.strings.units().temperature(unit),
        )
    }

    fn with_unit(&self, value: Option<f64>, unit: &str) -> String {
        match value {
            Some(v) => format!("{} {}", format_decimal(v, DETAIL_DIGITS), unit),
            None => self.strings.unknown().to_string(),
        }
    }

    fn join_shells(&self, separator: &str) -> String {
        self.element
            .electrons
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(separator)
    }
}
