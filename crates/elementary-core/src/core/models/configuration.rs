use crate::core::format::superscript;
use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Atomic numbers of the noble gases usable as a configuration shorthand base.
pub static NOBLE_GAS_NUMBERS: Map<&'static str, u32> = phf_map! {
    "He" => 2,
    "Ne" => 10,
    "Ar" => 18,
    "Kr" => 36,
    "Xe" => 54,
    "Rn" => 86,
    "Og" => 118,
};

/// The subshell type of an orbital.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OrbitalType {
    S,
    P,
    D,
    F,
}

impl OrbitalType {
    /// The maximum number of electrons the subshell can hold.
    pub fn capacity(self) -> u32 {
        match self {
            Self::S => 2,
            Self::P => 6,
            Self::D => 10,
            Self::F => 14,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Self::S => 's',
            Self::P => 'p',
            Self::D => 'd',
            Self::F => 'f',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            's' => Some(Self::S),
            'p' => Some(Self::P),
            'd' => Some(Self::D),
            'f' => Some(Self::F),
            _ => None,
        }
    }
}

/// One term of an electron configuration, such as `3p⁴`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Orbital {
    shell: u32,
    kind: OrbitalType,
    electrons: u32,
}

impl Orbital {
    /// Creates an orbital, rejecting an empty shell number or an electron count outside
    /// `1..=capacity` for the subshell type.
    pub fn new(shell: u32, kind: OrbitalType, electrons: u32) -> Result<Self, ConfigurationParseError> {
        if shell == 0 {
            return Err(ConfigurationParseError::InvalidShell(shell));
        }
        if electrons == 0 || electrons > kind.capacity() {
            return Err(ConfigurationParseError::ElectronsOutOfRange {
                kind: kind.letter(),
                electrons,
            });
        }
        Ok(Self {
            shell,
            kind,
            electrons,
        })
    }

    pub fn shell(&self) -> u32 {
        self.shell
    }

    pub fn kind(&self) -> OrbitalType {
        self.kind
    }

    pub fn electrons(&self) -> u32 {
        self.electrons
    }
}

impl fmt::Display for Orbital {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.shell,
            self.kind.letter(),
            superscript(self.electrons)
        )
    }
}

impl FromStr for Orbital {
    type Err = ConfigurationParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let letter_pos = token
            .find(|c: char| c.is_ascii_alphabetic())
            .ok_or_else(|| ConfigurationParseError::MalformedOrbital(token.to_string()))?;
        let (shell_str, rest) = token.split_at(letter_pos);
        let mut rest_chars = rest.chars();
        let letter = rest_chars
            .next()
            .ok_or_else(|| ConfigurationParseError::MalformedOrbital(token.to_string()))?;
        let electrons_str = rest_chars.as_str();

        let shell = shell_str
            .parse::<u32>()
            .map_err(|_| ConfigurationParseError::MalformedOrbital(token.to_string()))?;
        let kind = OrbitalType::from_letter(letter)
            .ok_or(ConfigurationParseError::UnknownOrbitalType(letter))?;
        let electrons = electrons_str
            .parse::<u32>()
            .map_err(|_| ConfigurationParseError::MalformedOrbital(token.to_string()))?;

        Orbital::new(shell, kind, electrons)
    }
}

/// An electron configuration: an optional noble-gas base plus the orbitals beyond it.
///
/// The stored notation is plain ASCII (`"[Ne] 3s2 3p4"`); [`fmt::Display`] renders the
/// electron counts as superscripts (`"[Ne] 3s² 3p⁴"`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Configuration {
    base_element: Option<String>,
    orbitals: Vec<Orbital>,
}

impl Configuration {
    pub fn new(base_element: Option<String>, orbitals: Vec<Orbital>) -> Self {
        Self {
            base_element,
            orbitals,
        }
    }

    /// The symbol of the noble gas this configuration is built upon, if any.
    pub fn base_element(&self) -> Option<&str> {
        self.base_element.as_deref()
    }

    pub fn orbitals(&self) -> &[Orbital] {
        &self.orbitals
    }

    /// Total electrons described, including those of the base element.
    ///
    /// Returns `None` when the base symbol is not a known noble gas.
    pub fn electron_count(&self) -> Option<u32> {
        let base = match &self.base_element {
            Some(symbol) => *NOBLE_GAS_NUMBERS.get(symbol.as_str())?,
            None => 0,
        };
        Some(base + self.orbitals.iter().map(Orbital::electrons).sum::<u32>())
    }

    /// The plain notation as stored in the data source.
    pub fn notation(&self) -> String {
        let mut parts = Vec::with_capacity(self.orbitals.len() + 1);
        if let Some(base) = &self.base_element {
            parts.push(format!("[{}]", base));
        }
        parts.extend(
            self.orbitals
                .iter()
                .map(|o| format!("{}{}{}", o.shell, o.kind.letter(), o.electrons)),
        );
        parts.join(" ")
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::with_capacity(self.orbitals.len() + 1);
        if let Some(base) = &self.base_element {
            parts.push(format!("[{}]", base));
        }
        parts.extend(self.orbitals.iter().map(Orbital::to_string));
        f.write_str(&parts.join(" "))
    }
}

impl FromStr for Configuration {
    type Err = ConfigurationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace().peekable();
        if tokens.peek().is_none() {
            return Err(ConfigurationParseError::Empty);
        }

        let mut base_element = None;
        if let Some(first) = tokens.peek() {
            if first.starts_with('[') {
                let symbol = first
                    .strip_prefix('[')
                    .and_then(|t| t.strip_suffix(']'))
                    .filter(|t| !t.is_empty() && t.chars().all(|c| c.is_ascii_alphabetic()))
                    .ok_or_else(|| ConfigurationParseError::MalformedBase(first.to_string()))?;
                if !NOBLE_GAS_NUMBERS.contains_key(symbol) {
                    return Err(ConfigurationParseError::UnknownBase(symbol.to_string()));
                }
                base_element = Some(symbol.to_string());
                tokens.next();
            }
        }

        let orbitals = tokens
            .map(str::parse::<Orbital>)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            base_element,
            orbitals,
        })
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationParseError {
    #[error("Electron configuration is empty")]
    Empty,

    #[error("Malformed base element '{0}'. Expected a bracketed symbol such as '[Ne]'.")]
    MalformedBase(String),

    #[error("Base element '{0}' is not a noble gas")]
    UnknownBase(String),

    #[error("Malformed orbital '{0}'. Expected shell, type and electron count such as '3p4'.")]
    MalformedOrbital(String),

    #[error("Unknown orbital type '{0}'. Expected one of s, p, d, f.")]
    UnknownOrbitalType(char),

    #[error("Shell number {0} is invalid")]
    InvalidShell(u32),

    #[error("A {kind} orbital cannot hold {electrons} electrons")]
    ElectronsOutOfRange { kind: char, electrons: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_base_and_superscripts() {
        let config: Configuration = "[Ne] 3s2 3p4".parse().unwrap();
        assert_eq!(config.to_string(), "[Ne] 3s² 3p⁴");
    }

    #[test]
    fn renders_without_base() {
        let config: Configuration = "1s2".parse().unwrap();
        assert_eq!(config.base_element(), None);
        assert_eq!(config.to_string(), "1s²");
    }

    #[test]
    fn renders_multi_digit_counts_digit_by_digit() {
        let config: Configuration = "[Xe] 4f14 5d10 6s2".parse().unwrap();
        assert_eq!(config.to_string(), "[Xe] 4f¹⁴ 5d¹⁰ 6s²");
    }

    #[test]
    fn base_only_has_no_trailing_space() {
        let config = Configuration::new(Some("Ne".to_string()), Vec::new());
        assert_eq!(config.to_string(), "[Ne]");
    }

    #[test]
    fn notation_preserves_internal_form() {
        let config: Configuration = "[Kr] 4d10 5s1".parse().unwrap();
        assert_eq!(config.notation(), "[Kr] 4d10 5s1");
        assert_eq!(config.orbitals().len(), 2);
        assert_eq!(config.orbitals()[0].kind(), OrbitalType::D);
        assert_eq!(config.orbitals()[0].shell(), 4);
        assert_eq!(config.orbitals()[0].electrons(), 10);
    }

    #[test]
    fn electron_count_includes_base() {
        let sulfur: Configuration = "[Ne] 3s2 3p4".parse().unwrap();
        assert_eq!(sulfur.electron_count(), Some(16));
        let hydrogen: Configuration = "1s1".parse().unwrap();
        assert_eq!(hydrogen.electron_count(), Some(1));
    }

    #[test]
    fn rejects_unknown_base() {
        assert_eq!(
            "[Fe] 4s2".parse::<Configuration>(),
            Err(ConfigurationParseError::UnknownBase("Fe".to_string()))
        );
        assert!(matches!(
            "[] 4s2".parse::<Configuration>(),
            Err(ConfigurationParseError::MalformedBase(_))
        ));
    }

    #[test]
    fn rejects_malformed_orbitals() {
        assert_eq!("".parse::<Configuration>(), Err(ConfigurationParseError::Empty));
        assert!(matches!(
            "[Ne] 3x2".parse::<Configuration>(),
            Err(ConfigurationParseError::UnknownOrbitalType('x'))
        ));
        assert!(matches!(
            "[Ne] s2".parse::<Configuration>(),
            Err(ConfigurationParseError::MalformedOrbital(_))
        ));
        assert!(matches!(
            "[Ne] 3s".parse::<Configuration>(),
            Err(ConfigurationParseError::MalformedOrbital(_))
        ));
        assert!(matches!(
            "[Ne] 42".parse::<Configuration>(),
            Err(ConfigurationParseError::MalformedOrbital(_))
        ));
    }

    #[test]
    fn orbital_enforces_capacity() {
        assert!(Orbital::new(2, OrbitalType::S, 2).is_ok());
        assert!(Orbital::new(4, OrbitalType::F, 14).is_ok());
        assert_eq!(
            Orbital::new(2, OrbitalType::S, 3),
            Err(ConfigurationParseError::ElectronsOutOfRange {
                kind: 's',
                electrons: 3
            })
        );
        assert!(Orbital::new(2, OrbitalType::P, 0).is_err());
        assert_eq!(
            Orbital::new(0, OrbitalType::S, 1),
            Err(ConfigurationParseError::InvalidShell(0))
        );
    }
}
