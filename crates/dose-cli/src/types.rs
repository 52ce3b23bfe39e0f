use std::path::PathBuf;

use chrono::NaiveDateTime;
use dose_model::{ConversionReport, MeasureItem, SkipReason};

/// Result of converting one input file.
#[derive(Debug)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub preview_id: String,
    pub report: ConversionReport,
    /// Stamp used for LastModified and the description.
    pub generated_at: NaiveDateTime,
    /// Written document; `None` on a dry run.
    pub output: Option<PathBuf>,
}

/// Files converted by one command, plus per-file failures.
#[derive(Debug, Default)]
pub struct RunResult {
    pub files: Vec<FileOutcome>,
    pub errors: Vec<String>,
}

impl RunResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// How a single row translated, for `inspect`.
#[derive(Debug)]
pub struct RowOutcome {
    pub line: usize,
    pub objective: String,
    pub evaluation_point: String,
    pub result: Result<Vec<MeasureItem>, SkipReason>,
}
