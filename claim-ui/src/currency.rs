//! en-US dollar formatting with no cents, as shown on every results page.

use claim_core::EstimateRange;
use claim_core::calculations::common::round_to_dollar;
use rust_decimal::Decimal;

/// Formats `amount` as whole US dollars with thousands separators.
///
/// ```
/// use claim_ui::currency::format_usd;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_usd(Decimal::from(1_234_567)), "$1,234,567");
/// ```
pub fn format_usd(amount: Decimal) -> String {
    let rounded = round_to_dollar(amount);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// `"$low - $high"`.
pub fn format_range(range: &EstimateRange) -> String {
    format!("{} - {}", format_usd(range.low), format_usd(range.high))
}
