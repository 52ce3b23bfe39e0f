//! Column headers of the constraints worksheet.

pub const STRUCTURE_IDS: &str = "Structure IDs";
pub const STRUCTURE_CODES: &str = "Structure Codes";
pub const ID_ALIASES: &str = "IDAliases";
pub const DVH_OBJECTIVE: &str = "DVH Objective";
pub const EVALUATION_POINT: &str = "Evaluation Point";
pub const VARIATION: &str = "Variation";
pub const PRIORITY: &str = "Priority";

// Informational columns, read but not exported.
pub const SOURCE: &str = "Source";
pub const TEMPLATE_ID: &str = "TemplateID";
pub const ZUSATZINFO: &str = "ZusatzInfo";
/// Lowercase spelling accepted for [`ZUSATZINFO`].
pub const ZUSATZINFO_VARIANT: &str = "Zusatzinfo";
pub const ENDPOINT_GRADE_3: &str = "Endpoint (grade >= 3)";

/// Every column copied from the worksheet into a [`crate::Row`].
pub const ALL: [&str; 11] = [
    STRUCTURE_IDS,
    STRUCTURE_CODES,
    ID_ALIASES,
    DVH_OBJECTIVE,
    EVALUATION_POINT,
    VARIATION,
    PRIORITY,
    SOURCE,
    TEMPLATE_ID,
    ZUSATZINFO,
    ENDPOINT_GRADE_3,
];

/// Header spellings accepted for a column, in lookup order.
pub fn header_candidates(column: &str) -> &'static [&'static str] {
    match column {
        ZUSATZINFO => &[ZUSATZINFO, ZUSATZINFO_VARIANT],
        STRUCTURE_IDS => &[STRUCTURE_IDS],
        STRUCTURE_CODES => &[STRUCTURE_CODES],
        ID_ALIASES => &[ID_ALIASES],
        DVH_OBJECTIVE => &[DVH_OBJECTIVE],
        EVALUATION_POINT => &[EVALUATION_POINT],
        VARIATION => &[VARIATION],
        PRIORITY => &[PRIORITY],
        SOURCE => &[SOURCE],
        TEMPLATE_ID => &[TEMPLATE_ID],
        ENDPOINT_GRADE_3 => &[ENDPOINT_GRADE_3],
        _ => &[],
    }
}
