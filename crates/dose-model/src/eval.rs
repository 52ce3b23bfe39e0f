use std::fmt;

use serde::{Deserialize, Serialize};

/// Comparison operator applied to an evaluation threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    Equal,
    LessOrEqual,
    GreaterOrEqual,
}

impl Modifier {
    /// Vendor `Modifier` code.
    pub const fn code(self) -> u8 {
        match self {
            Modifier::Equal => 2,
            Modifier::LessOrEqual => 3,
            Modifier::GreaterOrEqual => 4,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Modifier::Equal => "=",
            Modifier::LessOrEqual => "<=",
            Modifier::GreaterOrEqual => ">=",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvalPoint {
    pub modifier: Modifier,
    pub value: f64,
}

impl EvalPoint {
    pub fn new(modifier: Modifier, value: f64) -> Self {
        Self { modifier, value }
    }
}
