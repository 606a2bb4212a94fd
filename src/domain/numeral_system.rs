// ============================================================================
// Numeral System Domain Model
// Immutable positional alphabets and the preset systems
// ============================================================================

use crate::numeric::{DefinitionError, NumericError, NumericResult};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, LazyLock};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Alphabets larger than this get a hashed symbol index
const LINEAR_LOOKUP_LIMIT: usize = 36;

/// A positional numeral system.
///
/// The system is fully defined by its ordered alphabet: a symbol's value is
/// its index and the base is the alphabet size. Systems are immutable once
/// built and are shared between numbers through `Arc`.
///
/// # Example
/// ```
/// use radix_numerals::domain::NumeralSystem;
///
/// let dozenal = NumeralSystem::new("0123456789XE".chars()).unwrap();
/// assert_eq!(dozenal.base(), 12);
/// assert_eq!(dozenal.value_of('X'), Some(10));
/// assert_eq!(dozenal.value_of('A'), None);
/// ```
#[derive(Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct NumeralSystem {
    symbols: Vec<char>,
    index: Option<HashMap<char, usize>>,
}

impl NumeralSystem {
    /// Create a system from an ordered list of distinct symbols.
    ///
    /// # Errors
    /// Returns `InvalidSystemDefinition` if fewer than two symbols are given
    /// or a symbol repeats.
    pub fn new<I>(symbols: I) -> NumericResult<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let symbols: Vec<char> = symbols.into_iter().collect();

        if symbols.len() < 2 {
            tracing::debug!(count = symbols.len(), "rejected numeral system: too few symbols");
            return Err(DefinitionError::TooFewSymbols(symbols.len()).into());
        }

        let mut seen = HashMap::with_capacity(symbols.len());
        for (value, &symbol) in symbols.iter().enumerate() {
            if seen.insert(symbol, value).is_some() {
                tracing::debug!(?symbol, "rejected numeral system: duplicate symbol");
                return Err(DefinitionError::DuplicateSymbol(symbol).into());
            }
        }

        let index = (symbols.len() > LINEAR_LOOKUP_LIMIT).then_some(seen);
        Ok(Self { symbols, index })
    }

    /// Build a known-valid preset alphabet.
    fn preset(alphabet: &str) -> Arc<Self> {
        Arc::new(Self {
            symbols: alphabet.chars().collect(),
            index: None,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of symbols in the alphabet.
    #[inline]
    pub fn base(&self) -> usize {
        self.symbols.len()
    }

    /// Base as the divisor type used by the conversion engine.
    ///
    /// Symbols are distinct `char`s, so the alphabet can never outgrow `u32`.
    #[inline]
    pub(crate) fn radix(&self) -> u32 {
        self.symbols.len() as u32
    }

    /// The ordered alphabet.
    #[inline]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Symbol that represents zero.
    #[inline]
    pub fn zero_symbol(&self) -> char {
        self.symbols[0]
    }

    /// Positional value of `symbol`, or `None` if it is not in the alphabet.
    pub fn value_of(&self, symbol: char) -> Option<usize> {
        match &self.index {
            Some(index) => index.get(&symbol).copied(),
            None => self.symbols.iter().position(|&s| s == symbol),
        }
    }

    /// Symbol for the digit `value`, or `None` if `value >= base`.
    #[inline]
    pub fn symbol_at(&self, value: usize) -> Option<char> {
        self.symbols.get(value).copied()
    }

    /// Check if `symbol` belongs to the alphabet.
    #[inline]
    pub fn contains(&self, symbol: char) -> bool {
        self.value_of(symbol).is_some()
    }

    /// Check if this is the decimal system (`0`-`9` in order).
    #[inline]
    pub fn is_decimal(&self) -> bool {
        *self == **DECIMAL
    }

    /// The alphabet as a string.
    pub fn alphabet(&self) -> String {
        self.symbols.iter().collect()
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for NumeralSystem {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl Eq for NumeralSystem {}

impl Hash for NumeralSystem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbols.hash(state);
    }
}

impl fmt::Debug for NumeralSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumeralSystem")
            .field("base", &self.base())
            .field("symbols", &self.alphabet())
            .finish()
    }
}

impl fmt::Display for NumeralSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "base-{} [{}]", self.base(), self.alphabet())
    }
}

impl TryFrom<&str> for NumeralSystem {
    type Error = NumericError;

    fn try_from(alphabet: &str) -> Result<Self, Self::Error> {
        Self::new(alphabet.chars())
    }
}

impl TryFrom<String> for NumeralSystem {
    type Error = NumericError;

    fn try_from(alphabet: String) -> Result<Self, Self::Error> {
        Self::new(alphabet.chars())
    }
}

impl From<NumeralSystem> for String {
    fn from(system: NumeralSystem) -> Self {
        system.alphabet()
    }
}

// ============================================================================
// Preset Systems
// ============================================================================

pub static BINARY: LazyLock<Arc<NumeralSystem>> = LazyLock::new(|| NumeralSystem::preset("01"));

pub static TERNARY: LazyLock<Arc<NumeralSystem>> =
    LazyLock::new(|| NumeralSystem::preset("012"));

pub static QUATERNARY: LazyLock<Arc<NumeralSystem>> =
    LazyLock::new(|| NumeralSystem::preset("0123"));

pub static QUINARY: LazyLock<Arc<NumeralSystem>> =
    LazyLock::new(|| NumeralSystem::preset("01234"));

pub static SENARY: LazyLock<Arc<NumeralSystem>> =
    LazyLock::new(|| NumeralSystem::preset("012345"));

pub static SEPTENARY: LazyLock<Arc<NumeralSystem>> =
    LazyLock::new(|| NumeralSystem::preset("0123456"));

pub static OCTAL: LazyLock<Arc<NumeralSystem>> =
    LazyLock::new(|| NumeralSystem::preset("01234567"));

pub static DECIMAL: LazyLock<Arc<NumeralSystem>> =
    LazyLock::new(|| NumeralSystem::preset("0123456789"));

/// Digits `0`-`9` followed by upper-case `A`-`F`
pub static HEXADECIMAL: LazyLock<Arc<NumeralSystem>> =
    LazyLock::new(|| NumeralSystem::preset("0123456789ABCDEF"));

/// Upper-case `A`-`Z`, base 26 (`A` is zero)
pub static ALPHABETICAL: LazyLock<Arc<NumeralSystem>> =
    LazyLock::new(|| NumeralSystem::preset("ABCDEFGHIJKLMNOPQRSTUVWXYZ"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_bases() {
        assert_eq!(BINARY.base(), 2);
        assert_eq!(TERNARY.base(), 3);
        assert_eq!(QUATERNARY.base(), 4);
        assert_eq!(QUINARY.base(), 5);
        assert_eq!(SENARY.base(), 6);
        assert_eq!(SEPTENARY.base(), 7);
        assert_eq!(OCTAL.base(), 8);
        assert_eq!(DECIMAL.base(), 10);
        assert_eq!(HEXADECIMAL.base(), 16);
        assert_eq!(ALPHABETICAL.base(), 26);
    }

    #[test]
    fn test_presets_are_valid_definitions() {
        for preset in [
            &*BINARY,
            &*TERNARY,
            &*QUATERNARY,
            &*QUINARY,
            &*SENARY,
            &*SEPTENARY,
            &*OCTAL,
            &*DECIMAL,
            &*HEXADECIMAL,
            &*ALPHABETICAL,
        ] {
            let rebuilt = NumeralSystem::new(preset.symbols().iter().copied()).unwrap();
            assert_eq!(&rebuilt, &**preset);
        }
    }

    #[test]
    fn test_value_of() {
        assert_eq!(HEXADECIMAL.value_of('0'), Some(0));
        assert_eq!(HEXADECIMAL.value_of('A'), Some(10));
        assert_eq!(HEXADECIMAL.value_of('F'), Some(15));
        assert_eq!(HEXADECIMAL.value_of('f'), None);
        assert_eq!(ALPHABETICAL.value_of('A'), Some(0));
        assert_eq!(ALPHABETICAL.value_of('Z'), Some(25));
        assert_eq!(BINARY.value_of('2'), None);
    }

    #[test]
    fn test_symbol_at() {
        assert_eq!(HEXADECIMAL.symbol_at(15), Some('F'));
        assert_eq!(HEXADECIMAL.symbol_at(16), None);
        assert_eq!(ALPHABETICAL.zero_symbol(), 'A');
    }

    #[test]
    fn test_hashed_lookup_for_large_alphabets() {
        let alphabet: String = ('a'..='z').chain('A'..='Z').chain('0'..='9').collect();
        let system = NumeralSystem::try_from(alphabet.as_str()).unwrap();

        assert_eq!(system.base(), 62);
        assert!(system.index.is_some());
        assert_eq!(system.value_of('a'), Some(0));
        assert_eq!(system.value_of('A'), Some(26));
        assert_eq!(system.value_of('9'), Some(61));
        assert_eq!(system.value_of('!'), None);
    }

    #[test]
    fn test_too_few_symbols() {
        assert_eq!(
            NumeralSystem::new("".chars()),
            Err(NumericError::InvalidSystemDefinition(
                DefinitionError::TooFewSymbols(0)
            ))
        );
        assert_eq!(
            NumeralSystem::new("0".chars()),
            Err(NumericError::InvalidSystemDefinition(
                DefinitionError::TooFewSymbols(1)
            ))
        );
    }

    #[test]
    fn test_duplicate_symbol() {
        assert_eq!(
            NumeralSystem::new("0120".chars()),
            Err(NumericError::InvalidSystemDefinition(
                DefinitionError::DuplicateSymbol('0')
            ))
        );
    }

    #[test]
    fn test_equality_is_structural() {
        let custom = NumeralSystem::new("0123456789".chars()).unwrap();
        assert_eq!(custom, **DECIMAL);
        assert!(custom.is_decimal());
        assert!(!HEXADECIMAL.is_decimal());

        let reversed = NumeralSystem::new("9876543210".chars()).unwrap();
        assert_ne!(reversed, **DECIMAL);
    }

    #[test]
    fn test_display() {
        assert_eq!(OCTAL.to_string(), "base-8 [01234567]");
        assert_eq!(
            format!("{:?}", &**BINARY),
            "NumeralSystem { base: 2, symbols: \"01\" }"
        );
    }

    #[test]
    fn test_unicode_symbols() {
        let system = NumeralSystem::try_from("○◔◑◕●").unwrap();
        assert_eq!(system.base(), 5);
        assert_eq!(system.value_of('◑'), Some(2));
    }
}
