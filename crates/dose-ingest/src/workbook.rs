//! Workbook reader (xlsx, xlsm, xlsb, xls, ods).

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use dose_model::{CellValue, Row};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::table::{HeaderMap, normalize_header};

/// Read constraint rows from the named worksheet.
pub fn read_workbook_rows(path: &Path, sheet: &str) -> Result<Vec<Row>> {
    let workbook_error = |source| IngestError::Workbook {
        path: path.to_path_buf(),
        source,
    };
    let mut workbook = open_workbook_auto(path).map_err(workbook_error)?;
    let sheet_names = workbook.sheet_names();
    if !sheet_names.iter().any(|name| name == sheet) {
        return Err(IngestError::MissingSheet {
            sheet: sheet.to_string(),
            path: path.to_path_buf(),
            available: sheet_names.join(", "),
        });
    }
    let range = workbook.worksheet_range(sheet).map_err(workbook_error)?;
    // Range coordinates are relative to the first used cell.
    let first_row = range.start().map_or(0, |(row, _)| row as usize);

    let mut rows_iter = range.rows();
    let Some(header_cells) = rows_iter.next() else {
        debug!(sheet, "worksheet is empty");
        return Ok(Vec::new());
    };
    let headers: Vec<String> = header_cells
        .iter()
        .map(|cell| normalize_header(&cell.to_string()))
        .collect();
    let header_map = HeaderMap::from_headers(&headers);

    let mut rows = Vec::new();
    for (offset, raw) in rows_iter.enumerate() {
        let cells: Vec<CellValue> = raw.iter().map(cell_value).collect();
        // Header is on sheet line first_row + 1, data starts one below.
        let line = first_row + offset + 2;
        if let Some(row) = header_map.row(line, &cells) {
            rows.push(row);
        }
    }
    debug!(
        sheet,
        row_count = rows.len(),
        "read constraint rows from workbook"
    );
    Ok(rows)
}

/// Convert a workbook cell, turning whole floats into integers.
pub fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::Int(value) => CellValue::Int(*value),
        Data::Float(value) => float_cell(*value),
        Data::String(text) => CellValue::from(text.as_str()),
        Data::Bool(value) => CellValue::Text(if *value { "True" } else { "False" }.to_string()),
        other => CellValue::from(other.to_string()),
    }
}

fn float_cell(value: f64) -> CellValue {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        CellValue::Int(value as i64)
    } else {
        CellValue::Float(value)
    }
}
