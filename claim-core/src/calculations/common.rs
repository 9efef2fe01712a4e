//! Common helpers shared by every calculator.
//!
//! Rounding to whole dollars, the `max` used by floors, and the lenient
//! whole-number parsing applied to free-text answers.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};

static LEADING_WHOLE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?\d+").expect("leading whole number pattern is valid")
});

/// Rounds a decimal value to whole dollars using half-up rounding.
///
/// Values at exactly 0.5 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use claim_core::calculations::common::round_to_dollar;
///
/// assert_eq!(round_to_dollar(dec!(23335937.5)), dec!(23335938));
/// assert_eq!(round_to_dollar(dec!(1234.49)), dec!(1234));
/// assert_eq!(round_to_dollar(dec!(-10.5)), dec!(-11)); // Away from zero
/// ```
pub fn round_to_dollar(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use claim_core::calculations::common::max;
///
/// assert_eq!(max(dec!(30000), dec!(25000)), dec!(30000));
/// assert_eq!(max(dec!(25000), dec!(30000)), dec!(30000));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Strips whitespace, a leading `$`, and comma thousands separators.
fn normalize_number_input(s: &str) -> String {
    let trimmed = s.trim();
    let unsigned = trimmed.strip_prefix('$').unwrap_or(trimmed);
    unsigned.replace(',', "")
}

/// Parses the leading whole number of a free-text answer.
///
/// Anything after the leading digits is ignored, so `"12.7"` reads as `12`
/// and `"45 years"` as `45`. Returns `None` when the input has no leading
/// digits or does not fit an `i64`.
///
/// # Examples
///
/// ```
/// use claim_core::calculations::common::parse_whole_number;
///
/// assert_eq!(parse_whole_number("$100,000"), Some(100000));
/// assert_eq!(parse_whole_number("45 years"), Some(45));
/// assert_eq!(parse_whole_number("-3"), Some(-3));
/// assert_eq!(parse_whole_number("abc"), None);
/// ```
pub fn parse_whole_number(s: &str) -> Option<i64> {
    let normalized = normalize_number_input(s);
    let digits = LEADING_WHOLE_NUMBER.find(&normalized)?;
    digits.as_str().parse().ok()
}

/// Parses a free-text dollar amount or count.
///
/// Like [`parse_whole_number`], but negative numbers are rejected so a stray
/// minus sign cannot turn damages into credits.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    parse_whole_number(s)
        .filter(|n| *n >= 0)
        .map(Decimal::from)
}
