//! One-decimal numeric normalization.
//!
//! Every threshold, dose level and volume that reaches the output document
//! passes through here. Non-numeric input yields `None`; callers decide
//! whether that drops the row or just the value.

use dose_model::NumericValue;

/// Parse trimmed text as a finite number.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Round a value to one decimal place.
///
/// Formats with a single fractional digit and parses back, so the result is
/// the nearest representable value to the printed decimal.
pub fn round_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse::<f64>().unwrap_or(value)
}

/// Parse and round to one decimal place.
pub fn round1(raw: &str) -> Option<f64> {
    parse_number(raw).map(round_tenth)
}

/// Parse and round up to the next 0.1 increment.
pub fn ceil1(raw: &str) -> Option<f64> {
    parse_number(raw).map(|value| (value * 10.0).ceil() / 10.0)
}

/// Integer when the value is whole, decimal otherwise.
pub fn collapse_whole(value: f64) -> NumericValue {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        NumericValue::Integer(value as i64)
    } else {
        NumericValue::Decimal(value)
    }
}
