//! Conversion settings from a TOML file with command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dose_model::{AliasMode, ConversionOptions};
use tracing::debug;

/// Load conversion options from a TOML file; missing keys keep their defaults.
pub fn load_options(path: &Path) -> Result<ConversionOptions> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let options: ConversionOptions =
        toml::from_str(&text).with_context(|| format!("parse config {}", path.display()))?;
    debug!(
        path = %path.display(),
        alias_mode = %options.alias_mode,
        sheet = %options.sheet_name,
        "loaded conversion config"
    );
    Ok(options)
}

/// Values given on the command line. Unset fields keep the file value.
#[derive(Debug, Clone, Default)]
pub struct OptionOverrides {
    pub sheet_name: Option<String>,
    pub alias_mode: Option<AliasMode>,
    pub add_preview_id_alias: bool,
    pub assigned_users: Option<String>,
}

impl OptionOverrides {
    #[must_use]
    pub fn apply(&self, mut options: ConversionOptions) -> ConversionOptions {
        if let Some(sheet) = &self.sheet_name {
            options.sheet_name.clone_from(sheet);
        }
        if let Some(mode) = self.alias_mode {
            options.alias_mode = mode;
        }
        if self.add_preview_id_alias {
            options.add_preview_id_alias = true;
        }
        if let Some(users) = &self.assigned_users {
            options.assigned_users.clone_from(users);
        }
        options
    }
}

/// File settings (or defaults) with the overrides applied.
pub fn resolve_options(
    config: Option<&Path>,
    overrides: &OptionOverrides,
) -> Result<ConversionOptions> {
    let base = match config {
        Some(path) => load_options(path)?,
        None => ConversionOptions::default(),
    };
    Ok(overrides.apply(base))
}
