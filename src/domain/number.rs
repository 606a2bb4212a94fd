// ============================================================================
// Number Domain Model
// A digit string tagged with the numeral system that interprets it
// ============================================================================

use super::numeral_system::{NumeralSystem, DECIMAL};
use crate::engine::conversion;
use crate::numeric::{NumericError, NumericResult};
use num_bigint::BigUint;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A non-negative integer written in a particular numeral system.
///
/// The digit string is stored as given, most significant digit first. It is
/// not checked against the alphabet on construction; invalid digits are
/// reported by the first conversion or arithmetic operation that reads them
/// (or eagerly via [`Number::parse`] / [`Number::validate`]).
///
/// An empty value means "not set yet" and reads as zero.
///
/// # Example
/// ```
/// use radix_numerals::domain::{Number, BINARY, HEXADECIMAL};
/// use std::sync::Arc;
///
/// let a = Number::new(Arc::clone(&BINARY), "1011");
/// let b = Number::new(Arc::clone(&HEXADECIMAL), "F");
/// let sum = a.add(&b).unwrap();
/// assert_eq!(sum.value(), "11010");
/// assert_eq!(sum.to_string(), "11010 b2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Number {
    system: Arc<NumeralSystem>,
    value: String,
}

impl Number {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a number from a system and a digit string (not validated).
    pub fn new(system: Arc<NumeralSystem>, value: impl Into<String>) -> Self {
        Self {
            system,
            value: value.into(),
        }
    }

    /// Create a number in `system` with no value.
    pub fn with_system(system: Arc<NumeralSystem>) -> Self {
        Self::new(system, String::new())
    }

    /// Create a number, rejecting digits outside the system's alphabet.
    ///
    /// # Errors
    /// Returns `InvalidDigit` for the first foreign symbol.
    pub fn parse(system: Arc<NumeralSystem>, value: impl Into<String>) -> NumericResult<Self> {
        let number = Self::new(system, value);
        number.validate()?;
        Ok(number)
    }

    /// Write `value` in `system` using canonical digits.
    pub fn from_biguint(system: Arc<NumeralSystem>, value: &BigUint) -> Self {
        let digits = conversion::from_biguint(&system, value);
        Self::new(system, digits)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[inline]
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    #[inline]
    pub fn into_value(self) -> String {
        self.value
    }

    #[inline]
    pub fn system(&self) -> &Arc<NumeralSystem> {
        &self.system
    }

    #[inline]
    pub fn base(&self) -> usize {
        self.system.base()
    }

    /// Check if no value has been set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Check that every digit belongs to the system's alphabet.
    ///
    /// # Errors
    /// Returns `InvalidDigit` for the first foreign symbol.
    pub fn validate(&self) -> NumericResult<()> {
        match self
            .value
            .chars()
            .enumerate()
            .find(|&(_, symbol)| !self.system.contains(symbol))
        {
            Some((position, symbol)) => Err(NumericError::InvalidDigit { symbol, position }),
            None => Ok(()),
        }
    }

    /// Exact integer value of the digits.
    pub fn to_biguint(&self) -> NumericResult<BigUint> {
        conversion::to_biguint(self)
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Exact sum, written in this number's system.
    ///
    /// `other` may use any numeral system. Neither operand is modified.
    ///
    /// # Errors
    /// Returns `InvalidDigit` if either operand holds a foreign symbol.
    pub fn add(&self, other: &Number) -> NumericResult<Number> {
        let sum = self.to_biguint()? + other.to_biguint()?;
        tracing::trace!(lhs_base = self.base(), rhs_base = other.base(), "add");
        Ok(Self::from_biguint(Arc::clone(&self.system), &sum))
    }

    /// Exact product, written in this number's system.
    ///
    /// # Errors
    /// Returns `InvalidDigit` if either operand holds a foreign symbol.
    pub fn multiply(&self, other: &Number) -> NumericResult<Number> {
        let product = self.to_biguint()? * other.to_biguint()?;
        tracing::trace!(lhs_base = self.base(), rhs_base = other.base(), "multiply");
        Ok(Self::from_biguint(Arc::clone(&self.system), &product))
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Same value written in `target`.
    pub fn convert_to(&self, target: &Arc<NumeralSystem>) -> NumericResult<Number> {
        conversion::convert_to(target, self)
    }

    /// Check if both numbers denote the same integer, whatever their systems.
    pub fn value_eq(&self, other: &Number) -> NumericResult<bool> {
        Ok(self.to_biguint()? == other.to_biguint()?)
    }
}

impl Default for Number {
    /// An empty decimal number.
    fn default() -> Self {
        Self::with_system(Arc::clone(&DECIMAL))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} b{}", self.value, self.system.base())
    }
}
