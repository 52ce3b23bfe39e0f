//! Structured form of a DVH objective expression.
//!
//! The vendor type codes are a protocol constant:
//!
//! | Name           | Kind | Type code |
//! |----------------|------|-----------|
//! | `V`            | V    | 3         |
//! | `D_at_percent` | DV   | 4         |
//! | `D_at_cc`      | DV   | 5         |
//! | `Dmax`         | D    | 6         |
//! | `Dmin`         | D    | 7         |
//! | `Dmean`        | D    | 8         |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::NumericValue;

/// Metric family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    /// Point dose statistic (mean, max, min).
    D,
    /// Volume receiving at least a dose level.
    V,
    /// Dose covering a volume.
    DV,
}

impl MetricKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::D => "D",
            MetricKind::V => "V",
            MetricKind::DV => "DV",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricName {
    Dmean,
    Dmax,
    Dmin,
    V,
    DAtCc,
    DAtPercent,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::Dmean => "Dmean",
            MetricName::Dmax => "Dmax",
            MetricName::Dmin => "Dmin",
            MetricName::V => "V",
            MetricName::DAtCc => "D_at_cc",
            MetricName::DAtPercent => "D_at_percent",
        }
    }

    pub const fn kind(self) -> MetricKind {
        match self {
            MetricName::Dmean | MetricName::Dmax | MetricName::Dmin => MetricKind::D,
            MetricName::V => MetricKind::V,
            MetricName::DAtCc | MetricName::DAtPercent => MetricKind::DV,
        }
    }

    /// Vendor `Type` code for this metric.
    pub const fn type_code(self) -> u8 {
        match self {
            MetricName::V => 3,
            MetricName::DAtPercent => 4,
            MetricName::DAtCc => 5,
            MetricName::Dmax => 6,
            MetricName::Dmin => 7,
            MetricName::Dmean => 8,
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rescaling applied to a measure item's value and variation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueTransform {
    #[default]
    None,
    /// Spreadsheet volumes are in cc, the target system expects mm³.
    CcToMm3,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricDescriptor {
    pub name: MetricName,
    /// Dose level (V metrics), volume threshold (DV metrics), or 0/100 for
    /// absolute/relative point doses.
    pub type_specifier: Option<NumericValue>,
    pub absolute_units: bool,
    pub value_transform: ValueTransform,
}

impl MetricDescriptor {
    pub fn new(name: MetricName, type_specifier: NumericValue, absolute_units: bool) -> Self {
        Self {
            name,
            type_specifier: Some(type_specifier),
            absolute_units,
            value_transform: ValueTransform::None,
        }
    }

    #[must_use]
    pub fn with_transform(mut self, transform: ValueTransform) -> Self {
        self.value_transform = transform;
        self
    }

    pub fn kind(&self) -> MetricKind {
        self.name.kind()
    }

    pub fn type_code(&self) -> u8 {
        self.name.type_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_codes_follow_name() {
        let names = [
            MetricName::Dmean,
            MetricName::Dmax,
            MetricName::Dmin,
            MetricName::V,
            MetricName::DAtCc,
            MetricName::DAtPercent,
        ];
        let codes: Vec<u8> = names.iter().map(|name| name.type_code()).collect();
        assert_eq!(codes, vec![8, 6, 7, 3, 5, 4]);
    }

    #[test]
    fn kind_follows_name() {
        assert_eq!(MetricName::Dmax.kind(), MetricKind::D);
        assert_eq!(MetricName::V.kind(), MetricKind::V);
        assert_eq!(MetricName::DAtPercent.kind(), MetricKind::DV);
    }
}
