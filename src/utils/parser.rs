use crate::error::{E2eError, Result};
use regex::Regex;
use std::sync::LazyLock;

static NON_NUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9.\-]").unwrap());

// Leading float literal, the part `parseFloat` would consume.
static LEADING_FLOAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)").unwrap());

/// Turns displayed price text into a number.
/// Examples: "1,234,000 ₫" -> 1234000, "$12.50" -> 12.5, "-" -> NaN
///
/// Everything except digits, `.` and `-` is dropped, then the longest leading
/// number is read. Text with no number in it gives `NaN`.
pub fn normalize_price(text: &str) -> f64 {
    let cleaned = NON_NUMERIC.replace_all(text, "");

    LEADING_FLOAT
        .find(&cleaned)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Like `normalize_price`, but malformed text is an error.
pub fn parse_price(text: &str) -> Result<f64> {
    let value = normalize_price(text);
    if value.is_nan() {
        return Err(E2eError::MalformedPrice(text.to_string()));
    }
    Ok(value)
}
