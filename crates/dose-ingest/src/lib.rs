//! Constraint table ingestion.
//!
//! Reads the constraint worksheet of a workbook (or a CSV export of it) into
//! [`Row`]s. Only lines with a non-blank `DVH Objective` are yielded.

pub mod csv_rows;
pub mod discovery;
pub mod error;
pub mod table;
pub mod workbook;

use std::path::Path;

use dose_model::Row;
use dose_model::options::DEFAULT_SHEET_NAME;

pub use csv_rows::read_csv_rows;
pub use discovery::discover_templates;
pub use error::{IngestError, Result};
pub use table::{HeaderMap, normalize_header};
pub use workbook::read_workbook_rows;

/// Options for reading a constraint table.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Worksheet to read from workbooks; ignored for CSV.
    pub sheet_name: String,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }
}

impl IngestOptions {
    pub fn with_sheet_name(mut self, sheet: impl Into<String>) -> Self {
        self.sheet_name = sheet.into();
        self
    }
}

/// Supported input formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Workbook,
    Csv,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(InputFormat::Workbook),
            "csv" => Some(InputFormat::Csv),
            _ => None,
        }
    }
}

/// Read the constraint rows of an input file.
pub fn read_rows(path: &Path, options: &IngestOptions) -> Result<Vec<Row>> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    match InputFormat::from_path(path) {
        Some(InputFormat::Workbook) => read_workbook_rows(path, &options.sheet_name),
        Some(InputFormat::Csv) => read_csv_rows(path),
        None => Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}
