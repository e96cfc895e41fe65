//! Quark to CCC conversion.
//!
//! Amounts arrive from the indexer as base-10 integer strings in quark, the
//! smallest currency unit. They routinely exceed `u64`, so conversion goes
//! through `BigUint` and never through floating point.

use num_bigint::BigUint;
use thiserror::Error;

use crate::constants::QUARK_DECIMALS;

/// Display unit symbol.
pub const CCC_SYMBOL: &str = "CCC";

/// Error raised for amount strings that are not non-negative integers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The amount string was empty.
    #[error("amount is empty")]
    Empty,
    /// The amount string contained something other than ASCII digits.
    #[error("invalid amount '{0}': expected a non-negative base-10 integer")]
    InvalidDigits(String),
}

/// Converts a quark amount into its CCC decimal representation.
///
/// Trailing zeros of the fraction are stripped and the decimal point is
/// omitted when nothing remains after it.
///
/// # Errors
///
/// Returns [`FormatError`] when `quark` is empty or contains anything other
/// than ASCII digits. Signs, separators and whitespace are rejected.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(quark_to_ccc("1500000000000000000")?, "1.5");
/// assert_eq!(quark_to_ccc("0")?, "0");
/// ```
pub fn quark_to_ccc(quark: &str) -> Result<String, FormatError> {
    if quark.is_empty() {
        return Err(FormatError::Empty);
    }
    if !quark.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::InvalidDigits(quark.to_string()));
    }

    let value = BigUint::parse_bytes(quark.as_bytes(), 10)
        .ok_or_else(|| FormatError::InvalidDigits(quark.to_string()))?;
    let scale = BigUint::from(10u32).pow(QUARK_DECIMALS);

    let whole = &value / &scale;
    let fraction = &value % &scale;

    let fraction = format!(
        "{:0>width$}",
        fraction.to_str_radix(10),
        width = QUARK_DECIMALS as usize
    );
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        Ok(whole.to_str_radix(10))
    } else {
        Ok(format!("{whole}.{fraction}"))
    }
}

/// Formats a quark amount with the CCC unit suffix.
///
/// # Errors
///
/// Propagates [`FormatError`] from [`quark_to_ccc`].
pub fn format_ccc(quark: &str) -> Result<String, FormatError> {
    quark_to_ccc(quark).map(|ccc| format!("{ccc} {CCC_SYMBOL}"))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::one_ccc("1000000000000000000", "1")]
    #[case::one_and_a_half("1500000000000000000", "1.5")]
    #[case::zero("0", "0")]
    #[case::many_zeros("0000", "0")]
    #[case::one_quark("1", "0.000000000000000001")]
    #[case::fee("100000", "0.0000000000001")]
    #[case::leading_zeros("0002500000000000000000", "2.5")]
    #[case::beyond_u64("123456789012345678901234567890", "123456789012.34567890123456789")]
    #[case::beyond_u128(
        "999999999999999999999999999999999999999999000000000000000000",
        "999999999999999999999999999999999999999999"
    )]
    fn test_quark_to_ccc(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(quark_to_ccc(input).unwrap(), expected, "input={input}");
    }

    #[rstest]
    #[case::empty("", FormatError::Empty)]
    #[case::letters("abc", FormatError::InvalidDigits("abc".to_string()))]
    #[case::negative("-1", FormatError::InvalidDigits("-1".to_string()))]
    #[case::plus_sign("+1", FormatError::InvalidDigits("+1".to_string()))]
    #[case::decimal("1.5", FormatError::InvalidDigits("1.5".to_string()))]
    #[case::underscore("1_000", FormatError::InvalidDigits("1_000".to_string()))]
    #[case::whitespace(" 1", FormatError::InvalidDigits(" 1".to_string()))]
    fn test_quark_to_ccc_rejects(#[case] input: &str, #[case] expected: FormatError) {
        assert_eq!(quark_to_ccc(input), Err(expected));
    }

    #[test]
    fn test_format_ccc_appends_unit() {
        assert_eq!(format_ccc("2000000000000000000").unwrap(), "2 CCC");
        assert!(format_ccc("x").is_err());
    }
}
