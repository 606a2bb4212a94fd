// ============================================================================
// Conversion Engine
// Decimal normalization between arbitrary positional numeral systems
// ============================================================================
//
// Every conversion runs in two steps:
// 1. to decimal: read the digits under the source alphabet into an exact
//    unbounded integer (Horner's scheme, acc = acc * base + digit)
// 2. decimal to target: repeated division by the target base, remainders
//    looked up in the target alphabet, least significant digit first
//
// Output is always canonical: no leading zero symbols, and zero is written as
// the single zero symbol of the target. Empty input reads as zero.

use crate::domain::{Number, NumeralSystem, DECIMAL};
use crate::numeric::{NumericError, NumericResult};
use num_bigint::BigUint;
use num_traits::Zero;
use smallvec::SmallVec;
use std::sync::Arc;

/// Read the digits of `number` as an exact integer.
///
/// # Errors
/// Returns `InvalidDigit` with the symbol and its zero-based position for
/// the first character outside the number's alphabet.
pub fn to_biguint(number: &Number) -> NumericResult<BigUint> {
    let system = number.system();
    let radix = system.radix();
    let mut acc = BigUint::zero();

    for (position, symbol) in number.value().chars().enumerate() {
        let digit = system.value_of(symbol).ok_or_else(|| {
            tracing::debug!(?symbol, position, base = radix, "invalid digit");
            NumericError::InvalidDigit { symbol, position }
        })?;

        acc *= radix;
        // digit < radix, so it fits
        acc += digit as u32;
    }

    Ok(acc)
}

/// Write `value` with the symbols of `target`.
pub fn from_biguint(target: &NumeralSystem, value: &BigUint) -> String {
    if value.is_zero() {
        return target.zero_symbol().to_string();
    }

    let radix = target.radix();
    let symbols = target.symbols();
    let mut remaining = value.clone();
    let mut digits: SmallVec<[char; 64]> = SmallVec::new();

    while !remaining.is_zero() {
        let remainder = (&remaining % radix).iter_u32_digits().next().unwrap_or(0);
        remaining /= radix;
        digits.push(symbols[remainder as usize]);
    }

    digits.iter().rev().collect()
}

/// Convert any number to the decimal system.
///
/// # Errors
/// Returns `InvalidDigit` if the value holds a symbol foreign to its system.
pub fn convert_to_decimal(number: &Number) -> NumericResult<Number> {
    let value = to_biguint(number)?;
    tracing::trace!(from = number.base(), digits = number.value().len(), "to decimal");
    Ok(Number::new(Arc::clone(&DECIMAL), value.to_string()))
}

/// Convert a decimal number to `target`.
///
/// # Errors
/// - `NotDecimal` if `number` is not in the decimal system
/// - `InvalidDigit` if `number` holds a non-decimal symbol
pub fn convert_decimal_to(target: &Arc<NumeralSystem>, number: &Number) -> NumericResult<Number> {
    if !number.system().is_decimal() {
        return Err(NumericError::NotDecimal {
            base: number.base(),
        });
    }

    let value = to_biguint(number)?;
    tracing::trace!(to = target.base(), digits = number.value().len(), "from decimal");
    Ok(Number::new(Arc::clone(target), from_biguint(target, &value)))
}

/// Convert any number to `target`.
///
/// Skips the to-decimal step for decimal sources and the from-decimal step
/// for decimal targets. The result is the same as composing both steps.
///
/// # Example
/// ```
/// use radix_numerals::domain::{Number, DECIMAL, HEXADECIMAL};
/// use radix_numerals::engine::convert_to;
/// use std::sync::Arc;
///
/// let n = Number::new(Arc::clone(&DECIMAL), "255");
/// assert_eq!(convert_to(&HEXADECIMAL, &n).unwrap().value(), "FF");
/// ```
///
/// # Errors
/// Returns `InvalidDigit` if the value holds a symbol foreign to its system.
pub fn convert_to(target: &Arc<NumeralSystem>, number: &Number) -> NumericResult<Number> {
    if target.is_decimal() {
        let decimal = convert_to_decimal(number)?;
        return Ok(Number::new(Arc::clone(target), decimal.into_value()));
    }

    if number.system().is_decimal() {
        return convert_decimal_to(target, number);
    }

    let value = to_biguint(number)?;
    tracing::trace!(
        from = number.base(),
        to = target.base(),
        digits = number.value().len(),
        "convert"
    );
    Ok(Number::new(Arc::clone(target), from_biguint(target, &value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ALPHABETICAL, BINARY, HEXADECIMAL, OCTAL, QUATERNARY, QUINARY, SENARY, SEPTENARY,
        TERNARY,
    };

    fn number(system: &Arc<NumeralSystem>, value: &str) -> Number {
        Number::new(Arc::clone(system), value)
    }

    #[test]
    fn test_decimal_to_hex() {
        let n = number(&DECIMAL, "255");
        assert_eq!(convert_to(&HEXADECIMAL, &n).unwrap().value(), "FF");
    }

    #[test]
    fn test_hex_to_decimal() {
        let n = number(&HEXADECIMAL, "FF");
        let d = convert_to(&DECIMAL, &n).unwrap();
        assert_eq!(d.value(), "255");
        assert!(d.system().is_decimal());
    }

    #[test]
    fn test_zero_policy() {
        let zero = number(&DECIMAL, "0");
        let binary = convert_to(&BINARY, &zero).unwrap();
        assert_eq!(binary.value(), "0");
        assert_eq!(convert_to(&DECIMAL, &binary).unwrap().value(), "0");

        // Alphabetical zero is 'A'
        assert_eq!(convert_to(&ALPHABETICAL, &zero).unwrap().value(), "A");
    }

    #[test]
    fn test_empty_value_reads_as_zero() {
        let empty = Number::with_system(Arc::clone(&HEXADECIMAL));
        assert_eq!(convert_to_decimal(&empty).unwrap().value(), "0");
        assert_eq!(convert_to(&BINARY, &empty).unwrap().value(), "0");
        assert_eq!(to_biguint(&empty).unwrap(), BigUint::zero());
    }

    #[test]
    fn test_invalid_digit() {
        let n = number(&BINARY, "102");
        assert_eq!(
            convert_to(&DECIMAL, &n),
            Err(NumericError::InvalidDigit {
                symbol: '2',
                position: 2
            })
        );
        assert_eq!(
            convert_to(&HEXADECIMAL, &n),
            Err(NumericError::InvalidDigit {
                symbol: '2',
                position: 2
            })
        );
    }

    #[test]
    fn test_invalid_decimal_digit_is_not_passed_through() {
        let n = number(&DECIMAL, "12a");
        assert_eq!(
            convert_to(&DECIMAL, &n),
            Err(NumericError::InvalidDigit {
                symbol: 'a',
                position: 2
            })
        );
    }

    #[test]
    fn test_decimal_to_decimal() {
        let n = number(&DECIMAL, "9001");
        assert_eq!(convert_to(&DECIMAL, &n).unwrap(), n);

        // Leading zeros are dropped, as when composing both steps
        let padded = number(&DECIMAL, "007");
        assert_eq!(convert_to(&DECIMAL, &padded).unwrap().value(), "7");
    }

    #[test]
    fn test_convert_decimal_to_requires_decimal() {
        let n = number(&OCTAL, "17");
        assert_eq!(
            convert_decimal_to(&BINARY, &n),
            Err(NumericError::NotDecimal { base: 8 })
        );
    }

    #[test]
    fn test_small_bases() {
        let n = number(&DECIMAL, "100");
        assert_eq!(convert_to(&BINARY, &n).unwrap().value(), "1100100");
        assert_eq!(convert_to(&TERNARY, &n).unwrap().value(), "10201");
        assert_eq!(convert_to(&QUATERNARY, &n).unwrap().value(), "1210");
        assert_eq!(convert_to(&QUINARY, &n).unwrap().value(), "400");
        assert_eq!(convert_to(&SENARY, &n).unwrap().value(), "244");
        assert_eq!(convert_to(&SEPTENARY, &n).unwrap().value(), "202");
        assert_eq!(convert_to(&OCTAL, &n).unwrap().value(), "144");
    }

    #[test]
    fn test_alphabetical() {
        // 26 = "BA", 27 = "BB", 675 = "ZZ"
        assert_eq!(
            convert_to(&ALPHABETICAL, &number(&DECIMAL, "26")).unwrap().value(),
            "BA"
        );
        assert_eq!(
            convert_to(&ALPHABETICAL, &number(&DECIMAL, "675")).unwrap().value(),
            "ZZ"
        );
        assert_eq!(
            convert_to(&DECIMAL, &number(&ALPHABETICAL, "BB")).unwrap().value(),
            "27"
        );
    }

    #[test]
    fn test_non_decimal_to_non_decimal() {
        let hex = number(&HEXADECIMAL, "1F");
        assert_eq!(convert_to(&OCTAL, &hex).unwrap().value(), "37");
        assert_eq!(convert_to(&BINARY, &hex).unwrap().value(), "11111");
    }

    #[test]
    fn test_custom_target_keeps_callers_system() {
        let custom = Arc::new(NumeralSystem::new("ab".chars()).unwrap());
        let n = number(&DECIMAL, "5");
        let converted = convert_to(&custom, &n).unwrap();
        assert_eq!(converted.value(), "bab");
        assert!(Arc::ptr_eq(converted.system(), &custom));
    }

    #[test]
    fn test_large_base_round_trip() {
        let alphabet: String = (0x4E00u32..0x4E00 + 1000)
            .filter_map(char::from_u32)
            .collect();
        let wide = Arc::new(NumeralSystem::try_from(alphabet.as_str()).unwrap());
        assert_eq!(wide.base(), 1000);

        let n = number(&DECIMAL, "123456789012345678901234567890");
        let converted = convert_to(&wide, &n).unwrap();
        assert_eq!(converted.value().chars().count(), 10);
        assert_eq!(convert_to(&DECIMAL, &converted).unwrap().value(), n.value());
    }

    #[test]
    fn test_beyond_machine_width() {
        let digits = "F".repeat(64);
        let n = number(&HEXADECIMAL, &digits);
        let expected = (BigUint::from(1u32) << 256usize) - 1u32;
        assert_eq!(to_biguint(&n).unwrap(), expected);
        assert_eq!(
            convert_to(&DECIMAL, &n).unwrap().value(),
            expected.to_string()
        );
    }
}
