use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

pub const RUPEE_SYMBOL: &str = "₹";

#[derive(Debug, Error, PartialEq)]
pub enum FormatError {
    #[error("Cannot format non-finite amount: {0}")]
    NonFinite(f64),

    #[error("Amount out of range for display: {0}")]
    OutOfRange(f64),
}

/// Renders an amount as `₹ 1,234,567.89`.
///
/// Rounds half-to-even on the exact binary value, then groups the integer
/// part in threes. Negative amounts keep the sign after the symbol.
pub fn format_currency(amount: f64) -> Result<String, FormatError> {
    let rounded = round_to_paise(amount)?;

    let fixed = format!("{:.2}", rounded.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    Ok(format!(
        "{} {}{}.{}",
        RUPEE_SYMBOL,
        sign,
        group_thousands(integer),
        fraction
    ))
}

/// Rounds to two decimals, half-to-even on the exact binary value.
pub fn round_to_paise(amount: f64) -> Result<Decimal, FormatError> {
    if !amount.is_finite() {
        return Err(FormatError::NonFinite(amount));
    }
    let value = Decimal::from_f64_retain(amount).ok_or(FormatError::OutOfRange(amount))?;
    Ok(value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
