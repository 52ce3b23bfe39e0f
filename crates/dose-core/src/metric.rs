//! DVH objective expression parsing.
//!
//! Recognized forms (case-insensitive, whitespace between parts allowed):
//!
//! - `Mean [Gy]`, `Max [%]`, `Min [Gy]`: point dose statistics
//! - `V20Gy[%]`, `V30Gy[cc]`: volume receiving a dose level
//! - `D2cc[Gy]`, `D95%[%]`: dose covering a volume
//!
//! Composite indices (CI, HI, GI, CV) are never translated.

use std::sync::LazyLock;

use dose_model::{MetricDescriptor, MetricName, NumericValue, ValueTransform};
use regex::Regex;

use crate::numeric::{ceil1, round1};

static COMPOSITE_INDEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(CI|HI|GI|CV)\b").expect("composite index pattern"));

static POINT_DOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(Mean|Max|Min)\s*\[(Gy|%)\]$").expect("point dose pattern")
});

static VOLUME_AT_DOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^V\s*([0-9]+(?:\.[0-9]+)?)\s*Gy\s*\[(%|cc)\]$").expect("volume pattern")
});

static DOSE_AT_VOLUME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^D\s*([0-9]+(?:\.[0-9]+)?)\s*(cc|%)\s*\[(Gy|%)\]$").expect("dose pattern")
});

/// Parse a DVH objective into its vendor encoding.
///
/// Returns `None` for anything outside the recognized forms; the row is
/// dropped by the caller.
pub fn parse_metric(text: &str) -> Option<MetricDescriptor> {
    let text = text.trim();
    if text.is_empty() || COMPOSITE_INDEX.is_match(text) {
        return None;
    }
    parse_point_dose(text)
        .or_else(|| parse_volume_at_dose(text))
        .or_else(|| parse_dose_at_volume(text))
}

fn is_gy(unit: &str) -> bool {
    unit.eq_ignore_ascii_case("gy")
}

fn is_cc(unit: &str) -> bool {
    unit.eq_ignore_ascii_case("cc")
}

fn parse_point_dose(text: &str) -> Option<MetricDescriptor> {
    let captures = POINT_DOSE.captures(text)?;
    let name = match captures[1].to_ascii_lowercase().as_str() {
        "max" => MetricName::Dmax,
        "min" => MetricName::Dmin,
        _ => MetricName::Dmean,
    };
    let absolute = is_gy(&captures[2]);
    let specifier = if absolute { 0 } else { 100 };
    Some(MetricDescriptor::new(
        name,
        NumericValue::Integer(specifier),
        absolute,
    ))
}

fn parse_volume_at_dose(text: &str) -> Option<MetricDescriptor> {
    let captures = VOLUME_AT_DOSE.captures(text)?;
    let dose = round1(&captures[1])?;
    let descriptor = if is_cc(&captures[2]) {
        MetricDescriptor::new(MetricName::V, NumericValue::Decimal(dose), true)
            .with_transform(ValueTransform::CcToMm3)
    } else {
        MetricDescriptor::new(MetricName::V, NumericValue::Decimal(dose), false)
    };
    Some(descriptor)
}

fn parse_dose_at_volume(text: &str) -> Option<MetricDescriptor> {
    let captures = DOSE_AT_VOLUME.captures(text)?;
    // The volume unit must be written exactly `cc` or `%`.
    let (name, volume) = match &captures[2] {
        "cc" => (MetricName::DAtCc, ceil1(&captures[1])?),
        "%" => (MetricName::DAtPercent, round1(&captures[1])?),
        _ => return None,
    };
    let absolute = is_gy(&captures[3]);
    Some(MetricDescriptor::new(
        name,
        NumericValue::Decimal(volume),
        absolute,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_indices_are_excluded() {
        assert!(parse_metric("CI").is_none());
        assert!(parse_metric("hi [%]").is_none());
        assert!(parse_metric("Mean [Gy] CV").is_none());
    }

    #[test]
    fn composite_tokens_need_word_boundaries() {
        assert!(parse_metric("Min [Gy]").is_some());
        assert!(parse_metric("V20Gy[cc]").is_some());
    }

    #[test]
    fn blank_is_no_match() {
        assert!(parse_metric("").is_none());
        assert!(parse_metric("   ").is_none());
    }
}
