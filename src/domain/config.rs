// ============================================================================
// Numeral System Configuration
// Named presets and serializable descriptions of custom systems
// ============================================================================

use super::numeral_system::{
    NumeralSystem, ALPHABETICAL, BINARY, DECIMAL, HEXADECIMAL, OCTAL, QUATERNARY, QUINARY,
    SENARY, SEPTENARY, TERNARY,
};
use crate::numeric::{DefinitionError, NumericError, NumericResult};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Preset Systems
// ============================================================================

/// The built-in numeral systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Preset {
    Binary,
    Ternary,
    Quaternary,
    Quinary,
    Senary,
    Septenary,
    Octal,
    Decimal,
    /// `0`-`9` then `A`-`F`
    Hexadecimal,
    /// `A`-`Z`, base 26
    Alphabetical,
}

impl Preset {
    /// All presets in ascending base order
    pub const ALL: [Preset; 10] = [
        Preset::Binary,
        Preset::Ternary,
        Preset::Quaternary,
        Preset::Quinary,
        Preset::Senary,
        Preset::Septenary,
        Preset::Octal,
        Preset::Decimal,
        Preset::Hexadecimal,
        Preset::Alphabetical,
    ];

    /// Canonical lower-case name
    pub fn name(self) -> &'static str {
        match self {
            Preset::Binary => "binary",
            Preset::Ternary => "ternary",
            Preset::Quaternary => "quaternary",
            Preset::Quinary => "quinary",
            Preset::Senary => "senary",
            Preset::Septenary => "septenary",
            Preset::Octal => "octal",
            Preset::Decimal => "decimal",
            Preset::Hexadecimal => "hexadecimal",
            Preset::Alphabetical => "alphabetical",
        }
    }

    /// The shared preset system
    pub fn system(self) -> Arc<NumeralSystem> {
        let system = match self {
            Preset::Binary => &BINARY,
            Preset::Ternary => &TERNARY,
            Preset::Quaternary => &QUATERNARY,
            Preset::Quinary => &QUINARY,
            Preset::Senary => &SENARY,
            Preset::Septenary => &SEPTENARY,
            Preset::Octal => &OCTAL,
            Preset::Decimal => &DECIMAL,
            Preset::Hexadecimal => &HEXADECIMAL,
            Preset::Alphabetical => &ALPHABETICAL,
        };
        Arc::clone(system)
    }

    #[inline]
    pub fn base(self) -> usize {
        self.system().base()
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = NumericError;

    /// Parse a preset name or common abbreviation, ignoring case.
    ///
    /// # Examples
    /// - "hex", "hexadecimal" -> Hexadecimal
    /// - "bin", "Binary" -> Binary
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let preset = match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "bin" => Preset::Binary,
            "ternary" => Preset::Ternary,
            "quaternary" => Preset::Quaternary,
            "quinary" => Preset::Quinary,
            "senary" => Preset::Senary,
            "septenary" => Preset::Septenary,
            "octal" | "oct" => Preset::Octal,
            "decimal" | "dec" => Preset::Decimal,
            "hexadecimal" | "hex" => Preset::Hexadecimal,
            "alphabetical" | "alpha" => Preset::Alphabetical,
            _ => return Err(NumericError::UnknownPreset),
        };
        Ok(preset)
    }
}

// ============================================================================
// Custom System Configuration
// ============================================================================

/// Description of a named numeral system
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumeralSystemConfig {
    /// Registry name (e.g., "dozenal", "base58")
    pub name: String,

    /// Ordered alphabet; a symbol's value is its index
    pub symbols: String,
}

impl NumeralSystemConfig {
    /// Create a new configuration
    pub fn new(name: impl Into<String>, symbols: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbols: symbols.into(),
        }
    }

    /// Configuration matching a preset system
    pub fn from_preset(preset: Preset) -> Self {
        Self::new(preset.name(), preset.system().alphabet())
    }

    /// Builder method: Rename the system
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Number of symbols configured
    pub fn base(&self) -> usize {
        self.symbols.chars().count()
    }

    /// Validate the configuration
    ///
    /// # Errors
    /// Returns `InvalidSystemDefinition` for an empty name, fewer than two
    /// symbols or a repeated symbol.
    pub fn validate(&self) -> NumericResult<()> {
        if self.name.trim().is_empty() {
            return Err(DefinitionError::EmptyName.into());
        }

        NumeralSystem::new(self.symbols.chars()).map(|_| ())
    }
}

// ============================================================================
// Well-known Alphabets (Factory Methods)
// ============================================================================

impl NumeralSystemConfig {
    /// Duodecimal with `X` for ten and `E` for eleven
    pub fn dozenal() -> Self {
        Self::new("dozenal", "0123456789XE")
    }

    /// Bitcoin base58 alphabet (no `0`, `O`, `I`, `l`)
    pub fn base58() -> Self {
        Self::new(
            "base58",
            "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz",
        )
    }

    /// Digits followed by lower- then upper-case letters
    pub fn base62() -> Self {
        Self::new(
            "base62",
            "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ",
        )
    }
}
