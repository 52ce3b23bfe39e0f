//! Configuration options for dose objective conversion.

use serde::{Deserialize, Serialize};

use crate::alias::AliasMode;

/// Worksheet holding the constraint table.
pub const DEFAULT_SHEET_NAME: &str = "Constraints";

/// Options controlling how rows become measure items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Which structure columns provide measure item IDs.
    pub alias_mode: AliasMode,

    /// Also publish every goal under the template (preview) ID.
    ///
    /// Off by default; it produces duplicate-looking items in the planning system.
    pub add_preview_id_alias: bool,

    /// Planning-system users who see the goals (comma-separated, e.g.
    /// `domain\user1,domain\user2`). Empty leaves assignment to the importer.
    pub assigned_users: String,

    /// Worksheet name to read from workbooks.
    pub sheet_name: String,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            alias_mode: AliasMode::default(),
            add_preview_id_alias: false,
            assigned_users: String::new(),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }
}

impl ConversionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_alias_mode(mut self, mode: AliasMode) -> Self {
        self.alias_mode = mode;
        self
    }

    #[must_use]
    pub fn with_preview_id_alias(mut self, enable: bool) -> Self {
        self.add_preview_id_alias = enable;
        self
    }

    #[must_use]
    pub fn with_assigned_users(mut self, users: impl Into<String>) -> Self {
        self.assigned_users = users.into();
        self
    }

    #[must_use]
    pub fn with_sheet_name(mut self, sheet: impl Into<String>) -> Self {
        self.sheet_name = sheet.into();
        self
    }
}
