//! DoseObjectives document assembly.

use chrono::NaiveDateTime;
use dose_model::document::{
    APPROVAL_STATUS, DOSE_OBJECTIVES_VERSION, PRESCRIPTION_VERSION, PREVIEW_TYPE,
    PREVIEW_VERSION, XSI_NS,
};
use dose_model::{
    ConversionOptions, ConversionReport, Element, MeasureItem, OutputDocument, Preview, Row,
};
use tracing::info;

use crate::translate::RowTranslator;

/// Name recorded as the generating script in the preview description.
pub const GENERATOR_NAME: &str = "dose-objectives";

/// Per-document metadata supplied by the caller.
#[derive(Debug, Clone)]
pub struct DocumentContext {
    /// Template ID, usually the input file stem.
    pub preview_id: String,
    /// File name of the source spreadsheet.
    pub source_name: String,
    /// Local generation time.
    pub generated_at: NaiveDateTime,
}

impl DocumentContext {
    pub fn new(
        preview_id: impl Into<String>,
        source_name: impl Into<String>,
        generated_at: NaiveDateTime,
    ) -> Self {
        Self {
            preview_id: preview_id.into(),
            source_name: source_name.into(),
            generated_at,
        }
    }

    /// `LastModified` stamp, e.g. `" October 19 2026 14:03:05:123"`.
    pub fn last_modified(&self) -> String {
        self.generated_at
            .format(" %B %d %Y %H:%M:%S:%3f")
            .to_string()
    }

    pub fn description(&self) -> String {
        format!(
            "Source Excel: {} | Script: {GENERATOR_NAME} | Converted: {}",
            self.source_name,
            self.generated_at.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

/// Builds one document from a sequence of rows.
#[derive(Debug, Clone, Default)]
pub struct DocumentAssembler {
    options: ConversionOptions,
}

impl DocumentAssembler {
    pub fn new(options: ConversionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    pub fn build(&self, rows: &[Row], context: &DocumentContext) -> OutputDocument {
        self.build_with_report(rows, context).0
    }

    /// Build the document and report which rows were skipped.
    pub fn build_with_report(
        &self,
        rows: &[Row],
        context: &DocumentContext,
    ) -> (OutputDocument, ConversionReport) {
        let mut document = OutputDocument::new(self.preview(context));
        let mut report = ConversionReport::default();
        let translator = RowTranslator::new(&self.options, &context.preview_id);
        for row in rows {
            match translator.translate(row) {
                Ok(items) => {
                    report.record_emitted(items.len());
                    for item in items {
                        document.prescription.push(item);
                    }
                }
                Err(reason) => report.record_skipped(row.line, reason),
            }
        }
        info!(
            preview_id = %context.preview_id,
            rows = report.rows_seen,
            items = report.items_emitted,
            skipped = report.skipped_count(),
            "assembled dose objectives"
        );
        (document, report)
    }

    fn preview(&self, context: &DocumentContext) -> Preview {
        let last_modified = context.last_modified();
        Preview {
            id: context.preview_id.clone(),
            diagnosis: String::new(),
            treatment_site: String::new(),
            description: context.description(),
            assigned_users: self.options.assigned_users.clone(),
            approval_history: format!("Created [ {last_modified} ]"),
            last_modified,
        }
    }
}

/// Convert a document into the element tree the serializer writes.
pub fn document_tree(document: &OutputDocument) -> Element {
    let preview = &document.preview;
    let preview_element = Element::new("Preview")
        .with_attribute("Version", PREVIEW_VERSION)
        .with_attribute("ID", preview.id.as_str())
        .with_attribute("Type", PREVIEW_TYPE)
        .with_attribute("ApprovalStatus", APPROVAL_STATUS)
        .with_attribute("Diagnosis", preview.diagnosis.as_str())
        .with_attribute("TreatmentSite", preview.treatment_site.as_str())
        .with_attribute("Description", preview.description.as_str())
        .with_attribute("AssignedUsers", preview.assigned_users.as_str())
        .with_attribute("LastModified", preview.last_modified.as_str())
        .with_attribute("ApprovalHistory", preview.approval_history.as_str());

    let mut prescription =
        Element::new("Prescription").with_attribute("Version", PRESCRIPTION_VERSION);
    for item in document.items() {
        prescription.push(measure_item_element(item));
    }

    Element::new("DoseObjectives")
        .with_attribute("Version", DOSE_OBJECTIVES_VERSION)
        .with_attribute("xmlns:xsi", XSI_NS)
        .with_child(preview_element)
        .with_child(prescription)
}

fn bool_text(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn measure_item_element(item: &MeasureItem) -> Element {
    let mut element = Element::new("MeasureItem").with_attribute("ID", item.id.as_str());
    if let Some(code) = &item.structure_code {
        element.push(
            Element::new("StructureCode")
                .with_attribute("Code", code.code.as_str())
                .with_attribute("CodeScheme", code.scheme.as_str())
                .with_attribute("CodeSchemeVersion", code.scheme_version.as_str()),
        );
    }
    element.push(Element::text("Type", item.type_code.to_string()));
    element.push(Element::text("Modifier", item.modifier.to_string()));
    element.push(Element::text("Value", item.value.to_string()));
    if let Some(specifier) = item.type_specifier {
        element.push(Element::text("TypeSpecifier", specifier.to_string()));
    }
    element.push(Element::text(
        "ReportDQPValueInAbsoluteUnits",
        bool_text(item.absolute_units),
    ));
    element.push(Element::text("Priority", item.priority.to_string()));
    if let Some(variation) = item.variation_acceptable {
        element.push(Element::text("VariationAcceptable", variation.to_string()));
    }
    element.push(Element::text(
        "PrimaryClinicalGoal",
        bool_text(item.primary_clinical_goal),
    ));
    element
}
