//! Arbitrary-precision conversion between integers and base-2 text.
//!
//! Unlike the bit-string codec there is no byte framing here: `5` is `"101"`,
//! and negative values carry a leading `-`.

use num_bigint::BigInt;
use num_traits::Num;

use super::errors::{ConvertError, TextFormat};

/// Renders an integer in base 2.
///
/// # Example
/// ```
/// assert_eq!(convkit::int_to_binary_string(10), "1010");
/// assert_eq!(convkit::int_to_binary_string(-5), "-101");
/// ```
pub fn int_to_binary_string(value: impl Into<BigInt>) -> String {
    value.into().to_str_radix(2)
}

/// Parses base-2 text of any length into an integer.
///
/// Accepts one optional leading `+` or `-` followed by at least one `0`/`1`.
pub fn binary_string_to_int(value: &str) -> Result<BigInt, ConvertError> {
    parse_signed(value, 2, TextFormat::Binary)
}

/// Converts base-10 text of any length to base-2 text.
pub fn decimal_to_binary_string(decimal: &str) -> Result<String, ConvertError> {
    let value = parse_signed(decimal, 10, TextFormat::Decimal)?;
    Ok(int_to_binary_string(value))
}

/// Converts base-2 text of any length to base-10 text.
pub fn binary_string_to_decimal(binary: &str) -> Result<String, ConvertError> {
    Ok(binary_string_to_int(binary)?.to_str_radix(10))
}

fn parse_signed(input: &str, radix: u32, format: TextFormat) -> Result<BigInt, ConvertError> {
    let digits = input.strip_prefix(['+', '-']).unwrap_or(input);
    let sign_len = input.len() - digits.len();

    if digits.is_empty() {
        return Err(ConvertError::EmptyInput { format });
    }

    // Checked here rather than by the parser, which also tolerates '_'
    if let Some((index, c)) = digits.chars().enumerate().find(|(_, c)| !c.is_digit(radix)) {
        return Err(ConvertError::invalid_format(format, c, sign_len + index, input));
    }

    BigInt::from_str_radix(input, radix).map_err(|_| {
        ConvertError::invalid_format(format, input.chars().next().unwrap_or('\0'), 0, input)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{One, Zero};

    #[test]
    fn test_int_to_binary_string() {
        assert_eq!(int_to_binary_string(0), "0");
        assert_eq!(int_to_binary_string(172), "10101100");
        assert_eq!(int_to_binary_string(-5), "-101");
        assert_eq!(int_to_binary_string(i64::MAX), "1".repeat(63));
    }

    #[test]
    fn test_binary_string_to_int() {
        assert_eq!(binary_string_to_int("10101100").unwrap(), BigInt::from(172));
        assert_eq!(binary_string_to_int("-101").unwrap(), BigInt::from(-5));
        assert_eq!(binary_string_to_int("+1").unwrap(), BigInt::one());
        assert!(binary_string_to_int("0000").unwrap().is_zero());
    }

    #[test]
    fn test_beyond_native_width() {
        let big = "1".to_string() + &"0".repeat(100);
        let value = binary_string_to_int(&big).unwrap();
        assert_eq!(value, BigInt::one() << 100);
        assert_eq!(int_to_binary_string(value), big);
        assert_eq!(
            binary_string_to_decimal(&big).unwrap(),
            "1267650600228229401496703205376"
        );
        assert_eq!(
            decimal_to_binary_string("1267650600228229401496703205376").unwrap(),
            big
        );
    }

    #[test]
    fn test_rejects_malformed() {
        assert_eq!(
            binary_string_to_int(""),
            Err(ConvertError::EmptyInput {
                format: TextFormat::Binary
            })
        );
        assert!(matches!(
            binary_string_to_int("-"),
            Err(ConvertError::EmptyInput { .. })
        ));
        match binary_string_to_int("-1021") {
            Err(ConvertError::InvalidFormat { char, position, .. }) => {
                assert_eq!(char, '2');
                assert_eq!(position, 3);
            }
            other => panic!("expected InvalidFormat, got {:?}", other),
        }
        assert!(binary_string_to_int("1_0").is_err());
        assert!(binary_string_to_int("--1").is_err());
        assert!(decimal_to_binary_string("12a").is_err());
    }
}
