use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a row produced no measure items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    UnrecognizedMetric(String),
    UnrecognizedEvalPoint(String),
    NoAlias,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnrecognizedMetric(text) => write!(f, "unrecognized metric '{text}'"),
            SkipReason::UnrecognizedEvalPoint(text) => {
                write!(f, "unrecognized evaluation point '{text}'")
            }
            SkipReason::NoAlias => f.write_str("no structure alias"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRow {
    pub line: usize,
    pub reason: SkipReason,
}

/// Per-document conversion counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionReport {
    pub rows_seen: usize,
    pub items_emitted: usize,
    pub skipped: Vec<SkippedRow>,
}

impl ConversionReport {
    pub fn record_emitted(&mut self, items: usize) {
        self.rows_seen += 1;
        self.items_emitted += items;
    }

    pub fn record_skipped(&mut self, line: usize, reason: SkipReason) {
        self.rows_seen += 1;
        self.skipped.push(SkippedRow { line, reason });
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}
