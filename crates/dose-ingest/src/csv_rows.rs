//! CSV exports of the constraint worksheet.

use std::path::Path;

use csv::ReaderBuilder;
use dose_model::{CellValue, Row};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::table::{HeaderMap, normalize_header};

pub fn read_csv_rows(path: &Path) -> Result<Vec<Row>> {
    let csv_error = |source| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;

    let mut records = reader.records();
    let Some(header_record) = records.next().transpose().map_err(csv_error)? else {
        debug!(path = %path.display(), "csv file is empty");
        return Ok(Vec::new());
    };
    let headers: Vec<String> = header_record.iter().map(normalize_header).collect();
    let header_map = HeaderMap::from_headers(&headers);

    let mut rows = Vec::new();
    for (offset, record) in records.enumerate() {
        let record = record.map_err(csv_error)?;
        let cells: Vec<CellValue> = record
            .iter()
            .map(|cell| CellValue::from(cell.trim()))
            .collect();
        let line = record
            .position()
            .map_or(offset + 2, |position| position.line() as usize);
        if let Some(row) = header_map.row(line, &cells) {
            rows.push(row);
        }
    }
    debug!(
        path = %path.display(),
        row_count = rows.len(),
        "read constraint rows from csv"
    );
    Ok(rows)
}
