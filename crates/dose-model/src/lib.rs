pub mod alias;
pub mod columns;
pub mod document;
pub mod error;
pub mod eval;
pub mod metric;
pub mod options;
pub mod report;
pub mod row;
pub mod tree;
pub mod value;

pub use alias::AliasMode;
pub use document::{MeasureItem, OutputDocument, Prescription, Preview, StructureCode};
pub use error::{DoseError, Result};
pub use eval::{EvalPoint, Modifier};
pub use metric::{MetricDescriptor, MetricKind, MetricName, ValueTransform};
pub use options::ConversionOptions;
pub use report::{ConversionReport, SkipReason, SkippedRow};
pub use row::{CellValue, Row};
pub use tree::{Element, Node};
pub use value::NumericValue;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_report_counts() {
        let mut report = ConversionReport::default();
        report.record_emitted(2);
        report.record_emitted(1);
        report.record_skipped(7, SkipReason::NoAlias);
        assert_eq!(report.rows_seen, 3);
        assert_eq!(report.items_emitted, 3);
        assert_eq!(report.skipped_count(), 1);
        assert_eq!(report.skipped[0].line, 7);
    }

    #[test]
    fn options_deserialize_from_toml() {
        let options: ConversionOptions = toml::from_str(
            r#"
alias_mode = "idalias_all"
assigned_users = "domain\\planner"
"#,
        )
        .expect("parse options");
        assert_eq!(options.alias_mode, AliasMode::IdAliasAll);
        assert_eq!(options.assigned_users, "domain\\planner");
        assert!(!options.add_preview_id_alias);
        assert_eq!(options.sheet_name, "Constraints");
    }
}
