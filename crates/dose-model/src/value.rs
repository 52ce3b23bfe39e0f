use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric leaf value of a measure item.
///
/// Decimals always carry a fractional digit when rendered (`30.0`), integers
/// never do (`2000`). The target system reads both forms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NumericValue {
    Integer(i64),
    Decimal(f64),
}

impl NumericValue {
    pub fn as_f64(self) -> f64 {
        match self {
            NumericValue::Integer(value) => value as f64,
            NumericValue::Decimal(value) => value,
        }
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericValue::Integer(value) => write!(f, "{value}"),
            NumericValue::Decimal(value) if value.fract() == 0.0 && value.is_finite() => {
                write!(f, "{value:.1}")
            }
            NumericValue::Decimal(value) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_whole_decimals_with_fraction() {
        assert_eq!(NumericValue::Decimal(30.0).to_string(), "30.0");
        assert_eq!(NumericValue::Decimal(2.5).to_string(), "2.5");
        assert_eq!(NumericValue::Decimal(-0.1).to_string(), "-0.1");
    }

    #[test]
    fn renders_integers_bare() {
        assert_eq!(NumericValue::Integer(2000).to_string(), "2000");
        assert_eq!(NumericValue::Integer(0).to_string(), "0");
    }
}
