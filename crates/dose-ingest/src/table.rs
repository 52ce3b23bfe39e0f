//! Header mapping shared by the workbook and CSV readers.

use std::collections::BTreeMap;

use dose_model::columns::{self, DVH_OBJECTIVE};
use dose_model::{CellValue, Row};
use tracing::debug;

/// Normalize a header cell: trim, drop a byte-order mark.
pub fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Column positions of the recognized headers.
#[derive(Debug, Clone, Default)]
pub struct HeaderMap {
    positions: BTreeMap<&'static str, usize>,
}

impl HeaderMap {
    /// Map known columns to their positions; the first matching header wins.
    pub fn from_headers(headers: &[String]) -> Self {
        let mut by_name: BTreeMap<&str, usize> = BTreeMap::new();
        for (idx, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            by_name.entry(header.as_str()).or_insert(idx);
        }
        let mut positions = BTreeMap::new();
        for column in columns::ALL {
            let found = columns::header_candidates(column)
                .iter()
                .find_map(|candidate| by_name.get(candidate).copied());
            if let Some(idx) = found {
                positions.insert(column, idx);
            }
        }
        let missing: Vec<&str> = columns::ALL
            .iter()
            .copied()
            .filter(|column| !positions.contains_key(column))
            .collect();
        if !missing.is_empty() {
            debug!(missing = ?missing, "constraint columns not present");
        }
        Self { positions }
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.positions.get(column).copied()
    }

    /// Build a row from raw cells; `None` when the DVH objective is blank.
    pub fn row(&self, line: usize, cells: &[CellValue]) -> Option<Row> {
        let mut values = BTreeMap::new();
        for column in columns::ALL {
            let value = self
                .position(column)
                .and_then(|idx| cells.get(idx))
                .cloned()
                .unwrap_or_default();
            values.insert(column.to_string(), value);
        }
        let objective_blank = values
            .get(DVH_OBJECTIVE)
            .is_none_or(CellValue::is_blank);
        if objective_blank {
            return None;
        }
        Some(Row::new(line, values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| normalize_header(name)).collect()
    }

    #[test]
    fn maps_known_headers() {
        let map = HeaderMap::from_headers(&headers(&[
            "\u{feff}Structure IDs",
            " DVH Objective ",
            "Unrelated",
            "Zusatzinfo",
        ]));
        assert_eq!(map.position(columns::STRUCTURE_IDS), Some(0));
        assert_eq!(map.position(columns::DVH_OBJECTIVE), Some(1));
        assert_eq!(map.position(columns::ZUSATZINFO), Some(3));
        assert_eq!(map.position(columns::PRIORITY), None);
    }

    #[test]
    fn exact_zusatzinfo_header_preferred() {
        let map = HeaderMap::from_headers(&headers(&["Zusatzinfo", "ZusatzInfo"]));
        assert_eq!(map.position(columns::ZUSATZINFO), Some(1));
    }

    #[test]
    fn skips_blank_objectives() {
        let map = HeaderMap::from_headers(&headers(&["DVH Objective", "Priority"]));
        assert!(map.row(2, &[CellValue::from("  "), CellValue::Int(1)]).is_none());
        assert!(map.row(3, &[]).is_none());

        let row = map
            .row(4, &[CellValue::from("Max [Gy]"), CellValue::Int(1)])
            .unwrap();
        assert_eq!(row.line, 4);
        assert_eq!(row.text(columns::PRIORITY), "1");
        assert_eq!(row.text(columns::VARIATION), "");
    }
}
