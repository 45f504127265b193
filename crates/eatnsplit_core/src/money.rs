//! Amounts are `i64` cents. Text input allows up to two decimals ("12", "12.5", "12.", ".5").

use crate::error::AmountError;

/// Parse an amount field into cents. Empty text means "not entered".
pub fn parse_amount(text: &str) -> Result<Option<i64>, AmountError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let invalid = || AmountError::Invalid(text.to_string());
    let (whole, frac) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    let digits_only = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && frac.is_empty()) || frac.len() > 2 || !digits_only(whole) || !digits_only(frac) {
        return Err(invalid());
    }

    let too_large = || AmountError::TooLarge(text.to_string());
    let whole: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| too_large())?
    };
    let frac: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
        _ => frac.parse().map_err(|_| invalid())?,
    };
    whole
        .checked_mul(100)
        .and_then(|c| c.checked_add(frac))
        .map(Some)
        .ok_or_else(too_large)
}

/// Cents as display text: "53", "12.50", "-0.05".
pub fn format_amount(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    format!("{}{}", sign, format_magnitude(cents))
}

/// Like `format_amount` without the sign.
pub fn format_magnitude(cents: i64) -> String {
    let abs = cents.unsigned_abs();
    let (whole, frac) = (abs / 100, abs % 100);
    if frac == 0 {
        whole.to_string()
    } else {
        format!("{}.{:02}", whole, frac)
    }
}
