//! The DoseObjectives document consumed by the treatment-planning system.

use serde::{Deserialize, Serialize};

use crate::value::NumericValue;

/// `DoseObjectives/@Version`.
pub const DOSE_OBJECTIVES_VERSION: &str = "1.0";

/// XML Schema instance namespace declared on the root.
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// `Preview/@Version`.
pub const PREVIEW_VERSION: &str = "1.2";

/// `Preview/@Type`.
pub const PREVIEW_TYPE: &str = "DoseObjectives";

/// Approval status of every freshly generated template.
pub const APPROVAL_STATUS: &str = "Unapproved";

/// `Prescription/@Version`.
pub const PRESCRIPTION_VERSION: &str = "1.10";

/// Coding scheme of numeric structure codes (Foundational Model of Anatomy).
pub const CODE_SCHEME: &str = "FMA";
pub const CODE_SCHEME_VERSION: &str = "3.2";

/// Default priority when the cell is empty or not numeric.
pub const DEFAULT_PRIORITY: i64 = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputDocument {
    pub preview: Preview,
    pub prescription: Prescription,
}

impl OutputDocument {
    pub fn new(preview: Preview) -> Self {
        Self {
            preview,
            prescription: Prescription::default(),
        }
    }

    pub fn items(&self) -> &[MeasureItem] {
        &self.prescription.items
    }
}

/// Header block carrying approval and provenance metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preview {
    pub id: String,
    pub diagnosis: String,
    pub treatment_site: String,
    pub description: String,
    pub assigned_users: String,
    pub last_modified: String,
    pub approval_history: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub items: Vec<MeasureItem>,
}

impl Prescription {
    pub fn push(&mut self, item: MeasureItem) {
        self.items.push(item);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureCode {
    pub code: String,
    pub scheme: String,
    pub scheme_version: String,
}

impl StructureCode {
    /// An FMA code.
    pub fn fma(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            scheme: CODE_SCHEME.to_string(),
            scheme_version: CODE_SCHEME_VERSION.to_string(),
        }
    }
}

/// One clinical goal for one structure alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureItem {
    pub id: String,
    pub structure_code: Option<StructureCode>,
    pub type_code: u8,
    pub modifier: u8,
    pub value: NumericValue,
    pub type_specifier: Option<NumericValue>,
    pub absolute_units: bool,
    pub priority: i64,
    pub variation_acceptable: Option<NumericValue>,
    pub primary_clinical_goal: bool,
}
