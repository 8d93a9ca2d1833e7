use crate::core::models::element::Block;
use crate::core::palette::{self, Rgb};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which attribute selects an element's colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ColorKey {
    #[default]
    #[serde(rename = "cat")]
    Category,
    #[serde(rename = "block")]
    Block,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown colour key '{0}'. Expected 'cat' or 'block'.")]
pub struct UnknownColorKeyError(pub String);

impl ColorKey {
    pub const ALL: [ColorKey; 2] = [Self::Category, Self::Block];

    pub fn key(self) -> &'static str {
        match self {
            Self::Category => "cat",
            Self::Block => "block",
        }
    }

    /// Looks up the colour for an element under this key.
    ///
    /// `None` means the category or block is missing from the palette, which only happens
    /// with inconsistent data.
    pub fn color(self, block: Block, category: usize) -> Option<Rgb> {
        match self {
            Self::Category => palette::category_color(category),
            Self::Block => palette::block_color(block),
        }
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ColorKey {
    type Err = UnknownColorKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cat" | "category" => Ok(Self::Category),
            "block" => Ok(Self::Block),
            _ => Err(UnknownColorKeyError(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_selects_palette() {
        assert_eq!(
            ColorKey::Category.color(Block::S, 1),
            Some(Rgb::from_hex(0x79B5FF))
        );
        assert_eq!(
            ColorKey::Block.color(Block::S, 1),
            Some(Rgb::from_hex(0x6699FF))
        );
        assert_eq!(ColorKey::Category.color(Block::S, 42), None);
    }

    #[test]
    fn parses_setting_values() {
        assert_eq!("cat".parse(), Ok(ColorKey::Category));
        assert_eq!("Block".parse(), Ok(ColorKey::Block));
        assert_eq!(
            "rainbow".parse::<ColorKey>(),
            Err(UnknownColorKeyError("rainbow".to_string()))
        );
        for key in ColorKey::ALL {
            assert_eq!(key.to_string().parse(), Ok(key));
        }
    }
}
