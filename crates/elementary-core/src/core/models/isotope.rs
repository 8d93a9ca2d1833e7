use crate::core::format::superscript;
use serde::Deserialize;

/// One isotope of an element, as listed in the isotope table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Isotope {
    /// Atomic number of the element this isotope belongs to.
    pub element: u32,
    /// The base symbol used when rendering the isotope (e.g., "C").
    pub symbol: String,
    pub mass_number: u32,
    /// Relative atomic mass.
    pub mass: f64,
    /// Isotopic composition as a fraction in `0..=1`; absent when unmeasured or trace.
    pub composition: Option<f64>,
}

impl Isotope {
    /// The superscript mass number followed by the symbol, e.g. `"¹⁴C"`.
    pub fn display_symbol(&self) -> String {
        format!("{}{}", superscript(self.mass_number), self.symbol)
    }
}
