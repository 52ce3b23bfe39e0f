//! Measure item ID resolution from the Structure IDs and IDAliases columns.

use std::collections::BTreeSet;

use dose_model::AliasMode;

/// Split a pipe-delimited cell into trimmed, non-empty tokens.
pub fn split_tokens(raw: &str) -> Vec<String> {
    raw.split('|')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Resolve the ordered, unique measure item IDs for one row.
///
/// `preview_alias` is appended when set, but only to a non-empty selection:
/// a row without structure tokens stays skipped.
pub fn resolve_aliases(
    structure_ids: &str,
    id_aliases: &str,
    mode: AliasMode,
    preview_alias: Option<&str>,
) -> Vec<String> {
    let structure_tokens = split_tokens(structure_ids);
    let alias_tokens = split_tokens(id_aliases);

    let mut selected = select_tokens(structure_tokens, alias_tokens, mode);
    if selected.is_empty() {
        return selected;
    }
    if let Some(preview) = preview_alias.map(str::trim).filter(|id| !id.is_empty()) {
        selected.push(preview.to_string());
    }
    dedupe_preserving_order(selected)
}

fn select_tokens(
    structure_tokens: Vec<String>,
    alias_tokens: Vec<String>,
    mode: AliasMode,
) -> Vec<String> {
    match mode {
        AliasMode::IdAliasFirst => alias_tokens
            .into_iter()
            .next()
            .or_else(|| structure_tokens.into_iter().next())
            .into_iter()
            .collect(),
        AliasMode::IdAliasAll => {
            if alias_tokens.is_empty() {
                structure_tokens
            } else {
                alias_tokens
            }
        }
        AliasMode::All => {
            let mut combined = structure_tokens;
            combined.extend(alias_tokens);
            combined
        }
        AliasMode::StructureIds => {
            if structure_tokens.is_empty() {
                alias_tokens.into_iter().take(1).collect()
            } else {
                structure_tokens
            }
        }
    }
}

fn dedupe_preserving_order(tokens: Vec<String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    tokens
        .into_iter()
        .filter(|token| seen.insert(token.clone()))
        .collect()
}
