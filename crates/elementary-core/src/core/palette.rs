use super::models::element::Block;
use phf::{Map, phf_map};
use std::fmt;

/// An opaque 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn from_hex(value: u32) -> Self {
        Self(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }

    /// The `#RRGGBB` form.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

/// Colours for the ten element categories, in category index order.
pub const CATEGORY_COLORS: [Rgb; 10] = [
    Rgb::from_hex(0x2FF12F),
    Rgb::from_hex(0x79B5FF),
    Rgb::from_hex(0xFFAA00),
    Rgb::from_hex(0xF3F300),
    Rgb::from_hex(0x55CC88),
    Rgb::from_hex(0x00DDBB),
    Rgb::from_hex(0x99BBAA),
    Rgb::from_hex(0xDD9999),
    Rgb::from_hex(0xFFB79B),
    Rgb::from_hex(0xDDAACC),
];

static BLOCK_COLORS: Map<&'static str, Rgb> = phf_map! {
    "s" => Rgb::from_hex(0x6699FF),
    "p" => Rgb::from_hex(0xFFCC00),
    "d" => Rgb::from_hex(0xFF9999),
    "f" => Rgb::from_hex(0x00CC33),
};

/// Looks up the colour of a category. `None` signals an index outside the palette.
pub fn category_color(category: usize) -> Option<Rgb> {
    CATEGORY_COLORS.get(category).copied()
}

pub fn block_color(block: Block) -> Option<Rgb> {
    BLOCK_COLORS.get(block.letter()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_renders_uppercase_with_hash() {
        assert_eq!(Rgb::from_hex(0x2FF12F).hex(), "#2FF12F");
        assert_eq!(Rgb(0, 0x0A, 0xFF).to_string(), "#000AFF");
    }

    #[test]
    fn every_block_has_a_color() {
        for block in Block::ALL {
            assert!(block_color(block).is_some());
        }
        assert_eq!(block_color(Block::F), Some(Rgb(0x00, 0xCC, 0x33)));
    }

    #[test]
    fn unknown_category_has_no_color() {
        assert_eq!(category_color(0), Some(Rgb(0x2F, 0xF1, 0x2F)));
        assert_eq!(category_color(9), Some(Rgb(0xDD, 0xAA, 0xCC)));
        assert_eq!(category_color(10), None);
    }
}
