use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Offset between the Kelvin and Celsius scales.
pub const CELSIUS_OFFSET: f64 = 273.15;

/// Offset applied after scaling Kelvin to the Fahrenheit degree size.
pub const FAHRENHEIT_OFFSET: f64 = 459.67;

/// Converts a temperature in Kelvin to degrees Celsius.
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - CELSIUS_OFFSET
}

/// Converts a temperature in Kelvin to degrees Fahrenheit.
pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    kelvin * 9.0 / 5.0 - FAHRENHEIT_OFFSET
}

/// The unit used to display temperatures. Stored data is always in Kelvin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[default]
    #[serde(rename = "K")]
    Kelvin,
    #[serde(rename = "C")]
    Celsius,
    #[serde(rename = "F")]
    Fahrenheit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown temperature unit '{0}'. Expected 'K', 'C' or 'F'.")]
pub struct UnknownUnitError(pub String);

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [Self::Kelvin, Self::Celsius, Self::Fahrenheit];

    /// Converts a Kelvin value into this unit.
    pub fn from_kelvin(self, kelvin: f64) -> f64 {
        match self {
            Self::Kelvin => kelvin,
            Self::Celsius => kelvin_to_celsius(kelvin),
            Self::Fahrenheit => kelvin_to_fahrenheit(kelvin),
        }
    }

    /// The compact single-glyph label used in option lists (`"K"`, `"℃"`, `"℉"`).
    pub fn label(self) -> &'static str {
        match self {
            Self::Kelvin => "K",
            Self::Celsius => "℃",
            Self::Fahrenheit => "℉",
        }
    }

    /// The key under which this unit is persisted in settings.
    pub fn key(self) -> &'static str {
        match self {
            Self::Kelvin => "K",
            Self::Celsius => "C",
            Self::Fahrenheit => "F",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TemperatureUnit {
    type Err = UnknownUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "K" | "k" => Ok(Self::Kelvin),
            "C" | "c" => Ok(Self::Celsius),
            "F" | "f" => Ok(Self::Fahrenheit),
            other => Err(UnknownUnitError(other.to_string())),
        }
    }
}
