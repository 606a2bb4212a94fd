// ============================================================================
// rust_decimal Interop
// Exchange whole numbers with rust_decimal at API boundaries
// ============================================================================

use super::errors::{NumericError, NumericResult};
use crate::domain::{Number, NumeralSystem};
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use std::sync::Arc;

impl Number {
    /// Write a `rust_decimal::Decimal` in `system`.
    ///
    /// Trailing fractional zeros are accepted (`12.00` is 12).
    ///
    /// # Errors
    /// - `Negative` if `value` is below zero
    /// - `PrecisionLoss` if `value` has a fractional part
    pub fn from_decimal(system: Arc<NumeralSystem>, value: Decimal) -> NumericResult<Self> {
        if value < Decimal::ZERO {
            return Err(NumericError::Negative);
        }
        if !value.fract().is_zero() {
            return Err(NumericError::PrecisionLoss);
        }

        let raw = value.trunc().to_u128().ok_or(NumericError::Overflow)?;
        Ok(Self::from_biguint(system, &BigUint::from(raw)))
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// - `InvalidDigit` if the value holds a foreign symbol
    /// - `Overflow` if the value exceeds `Decimal::MAX`
    pub fn to_decimal(&self) -> NumericResult<Decimal> {
        let raw = self
            .to_biguint()?
            .to_i128()
            .ok_or(NumericError::Overflow)?;

        Decimal::try_from_i128_with_scale(raw, 0).map_err(|_| NumericError::Overflow)
    }
}

impl TryFrom<&Number> for Decimal {
    type Error = NumericError;

    fn try_from(number: &Number) -> Result<Self, Self::Error> {
        number.to_decimal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BINARY, DECIMAL, HEXADECIMAL};

    #[test]
    fn test_from_decimal() {
        let n = Number::from_decimal(Arc::clone(&HEXADECIMAL), Decimal::from(255)).unwrap();
        assert_eq!(n.value(), "FF");

        // 12.00 is still a whole number
        let scaled = Decimal::new(1200, 2);
        let m = Number::from_decimal(Arc::clone(&BINARY), scaled).unwrap();
        assert_eq!(m.value(), "1100");
    }

    #[test]
    fn test_from_decimal_zero() {
        let n = Number::from_decimal(Arc::clone(&BINARY), Decimal::ZERO).unwrap();
        assert_eq!(n.value(), "0");
    }

    #[test]
    fn test_from_decimal_rejects_fraction_and_sign() {
        assert_eq!(
            Number::from_decimal(Arc::clone(&DECIMAL), Decimal::new(125, 1)),
            Err(NumericError::PrecisionLoss)
        );
        assert_eq!(
            Number::from_decimal(Arc::clone(&DECIMAL), Decimal::from(-3)),
            Err(NumericError::Negative)
        );
    }

    #[test]
    fn test_to_decimal() {
        let n = Number::new(Arc::clone(&HEXADECIMAL), "FF");
        assert_eq!(n.to_decimal().unwrap(), Decimal::from(255));
        assert_eq!(Decimal::try_from(&n).unwrap(), Decimal::from(255));
    }

    #[test]
    fn test_to_decimal_max() {
        let max = Number::from_decimal(Arc::clone(&HEXADECIMAL), Decimal::MAX).unwrap();
        assert_eq!(max.value(), "F".repeat(24));
        assert_eq!(max.to_decimal().unwrap(), Decimal::MAX);
    }

    #[test]
    fn test_to_decimal_overflow() {
        // 2^96 is one past Decimal::MAX
        let n = Number::new(Arc::clone(&HEXADECIMAL), format!("1{}", "0".repeat(24)));
        assert_eq!(n.to_decimal(), Err(NumericError::Overflow));

        let huge = Number::new(Arc::clone(&DECIMAL), "9".repeat(60));
        assert_eq!(huge.to_decimal(), Err(NumericError::Overflow));
    }

    #[test]
    fn test_to_decimal_invalid_digit() {
        let n = Number::new(Arc::clone(&BINARY), "12");
        assert_eq!(
            n.to_decimal(),
            Err(NumericError::InvalidDigit {
                symbol: '2',
                position: 1
            })
        );
    }
}
