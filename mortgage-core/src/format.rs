//! Display formatting for currency and percentage values.
//!
//! Pure functions producing en-US style strings for the results view.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;

/// Formats a value as US currency with thousands separators: `$1,860.00`.
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some(parts) => parts,
        None => (text.as_str(), "00"),
    };

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${}.{frac_part}", group_thousands(int_part))
}

/// Formats a percentage with at most two fraction digits: `8.33%`, `31%`.
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", round_half_up(value).normalize())
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
