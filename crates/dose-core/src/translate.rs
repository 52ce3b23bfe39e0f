//! Row translation: one constraint row into measure items, one per alias.

use dose_model::columns::{
    DVH_OBJECTIVE, EVALUATION_POINT, ID_ALIASES, PRIORITY, STRUCTURE_CODES, STRUCTURE_IDS,
    VARIATION,
};
use dose_model::document::DEFAULT_PRIORITY;
use dose_model::{
    ConversionOptions, EvalPoint, MeasureItem, MetricDescriptor, NumericValue, Row, SkipReason,
    StructureCode, ValueTransform,
};
use tracing::{debug, trace};

use crate::alias::resolve_aliases;
use crate::eval_point::parse_eval_point;
use crate::metric::parse_metric;
use crate::numeric::{collapse_whole, parse_number, round_tenth, round1};

/// Translates rows under one set of options and one preview ID.
#[derive(Debug, Clone)]
pub struct RowTranslator<'a> {
    options: &'a ConversionOptions,
    preview_id: &'a str,
}

impl<'a> RowTranslator<'a> {
    pub fn new(options: &'a ConversionOptions, preview_id: &'a str) -> Self {
        Self {
            options,
            preview_id,
        }
    }

    /// Translate a row into its measure items.
    ///
    /// Rows with an unrecognized metric or evaluation point, or without any
    /// structure alias, are skipped and the reason is returned.
    pub fn translate(&self, row: &Row) -> Result<Vec<MeasureItem>, SkipReason> {
        let metric_text = row.text(DVH_OBJECTIVE);
        let Some(metric) = parse_metric(&metric_text) else {
            return Err(skip(row, SkipReason::UnrecognizedMetric(metric_text)));
        };
        let eval_text = row.text(EVALUATION_POINT);
        let Some(eval_point) = parse_eval_point(&eval_text) else {
            return Err(skip(row, SkipReason::UnrecognizedEvalPoint(eval_text)));
        };

        let preview_alias = self
            .options
            .add_preview_id_alias
            .then_some(self.preview_id);
        let aliases = resolve_aliases(
            &row.text(STRUCTURE_IDS),
            &row.text(ID_ALIASES),
            self.options.alias_mode,
            preview_alias,
        );
        if aliases.is_empty() {
            return Err(skip(row, SkipReason::NoAlias));
        }

        let shared = SharedFields::from_row(row, &metric, eval_point);
        trace!(
            line = row.line,
            metric = %metric.name,
            alias_count = aliases.len(),
            "translated row"
        );
        Ok(aliases
            .into_iter()
            .map(|alias| shared.measure_item(alias))
            .collect())
    }
}

fn skip(row: &Row, reason: SkipReason) -> SkipReason {
    debug!(line = row.line, reason = %reason, "skipping row");
    reason
}

/// Values computed once per row and copied into every item.
struct SharedFields {
    structure_code: Option<StructureCode>,
    type_code: u8,
    modifier: u8,
    value: NumericValue,
    type_specifier: Option<NumericValue>,
    absolute_units: bool,
    priority: i64,
    variation: Option<NumericValue>,
}

impl SharedFields {
    fn from_row(row: &Row, metric: &MetricDescriptor, eval_point: EvalPoint) -> Self {
        let transform = metric.value_transform;
        let variation_text = row.text(VARIATION);
        let variation = if variation_text.is_empty() {
            None
        } else {
            round1(&variation_text).map(|value| scale_value(value, transform))
        };
        Self {
            structure_code: first_numeric_code(&row.text(STRUCTURE_CODES)).map(StructureCode::fma),
            type_code: metric.type_code(),
            modifier: eval_point.modifier.code(),
            value: scale_value(eval_point.value, transform),
            type_specifier: metric.type_specifier,
            absolute_units: metric.absolute_units,
            priority: parse_priority(&row.text(PRIORITY)),
            variation,
        }
    }

    fn measure_item(&self, id: String) -> MeasureItem {
        MeasureItem {
            id,
            structure_code: self.structure_code.clone(),
            type_code: self.type_code,
            modifier: self.modifier,
            value: self.value,
            type_specifier: self.type_specifier,
            absolute_units: self.absolute_units,
            priority: self.priority,
            variation_acceptable: self.variation,
            primary_clinical_goal: false,
        }
    }
}

/// Apply the metric's unit transform to a value or variation.
pub fn scale_value(value: f64, transform: ValueTransform) -> NumericValue {
    match transform {
        ValueTransform::None => NumericValue::Decimal(value),
        ValueTransform::CcToMm3 => collapse_whole(round_tenth(value * 1000.0)),
    }
}

/// First strictly positive integer token of a pipe-delimited code list.
///
/// The token is returned verbatim, leading zeros included.
pub fn first_numeric_code(raw: &str) -> Option<String> {
    raw.split('|')
        .map(str::trim)
        .find(|token| {
            !token.is_empty()
                && token.bytes().all(|byte| byte.is_ascii_digit())
                && token.bytes().any(|byte| byte != b'0')
        })
        .map(str::to_string)
}

/// Priority from its cell text; fractional values are truncated.
pub fn parse_priority(raw: &str) -> i64 {
    parse_number(raw)
        .map(|value| value.trunc() as i64)
        .unwrap_or(DEFAULT_PRIORITY)
}
