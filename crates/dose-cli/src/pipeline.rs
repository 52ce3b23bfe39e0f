//! Per-file conversion steps shared by the commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use dose_core::{DocumentAssembler, DocumentContext, RowTranslator, document_tree};
use dose_ingest::{IngestOptions, read_rows};
use dose_model::columns::{DVH_OBJECTIVE, EVALUATION_POINT};
use dose_model::{ConversionOptions, Row};
use dose_output::write_xml_file;
use tracing::{info, info_span, warn};

use crate::types::{FileOutcome, RowOutcome, RunResult};

/// Template ID derived from the input file stem.
pub fn preview_id_for(input: &Path) -> String {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Explicit template ID, or the input stem when it is missing or blank.
pub fn resolve_preview_id(explicit: Option<&str>, input: &Path) -> String {
    explicit
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map_or_else(|| preview_id_for(input), str::to_string)
}

/// Output path for a batch input: `<stem>.xml` in `output_dir`, or beside the input.
pub fn batch_output_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    match output_dir {
        Some(dir) => dir.join(format!("{}.xml", preview_id_for(input))),
        None => input.with_extension("xml"),
    }
}

pub fn load_rows(input: &Path, options: &ConversionOptions) -> Result<Vec<Row>> {
    let ingest_options = IngestOptions::default().with_sheet_name(options.sheet_name.clone());
    read_rows(input, &ingest_options).with_context(|| format!("read {}", input.display()))
}

/// Convert one file. With `output` unset the document is built but not written.
pub fn convert_file(
    input: &Path,
    output: Option<&Path>,
    preview_id: &str,
    options: &ConversionOptions,
    generated_at: NaiveDateTime,
) -> Result<FileOutcome> {
    let rows = load_rows(input, options)?;
    let source_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let context = DocumentContext::new(preview_id, source_name, generated_at);
    let (document, report) =
        DocumentAssembler::new(options.clone()).build_with_report(&rows, &context);

    if let Some(path) = output {
        write_xml_file(path, &document_tree(&document))?;
        info!(
            output = %path.display(),
            items = report.items_emitted,
            "wrote dose objectives"
        );
    }

    Ok(FileOutcome {
        input: input.to_path_buf(),
        preview_id: preview_id.to_string(),
        report,
        generated_at,
        output: output.map(Path::to_path_buf),
    })
}

/// Convert each template in turn, stamping every document with `now()`.
///
/// Failures are recorded and the remaining files are still converted.
pub fn convert_templates(
    templates: &[PathBuf],
    output_dir: Option<&Path>,
    options: &ConversionOptions,
    dry_run: bool,
    mut now: impl FnMut() -> NaiveDateTime,
) -> RunResult {
    let mut result = RunResult::default();
    for input in templates {
        let preview_id = preview_id_for(input);
        let span = info_span!("convert", file = %input.display(), preview_id = %preview_id);
        let _guard = span.enter();
        let output_path = batch_output_path(input, output_dir);
        let output = (!dry_run).then_some(output_path.as_path());
        match convert_file(input, output, &preview_id, options, now()) {
            Ok(outcome) => result.files.push(outcome),
            Err(error) => {
                warn!(error = %format!("{error:#}"), "conversion failed");
                result.errors.push(format!("{}: {error:#}", input.display()));
            }
        }
    }
    result
}

/// Translate every row of a file without assembling a document.
pub fn inspect_rows(
    input: &Path,
    preview_id: &str,
    options: &ConversionOptions,
) -> Result<Vec<RowOutcome>> {
    let rows = load_rows(input, options)?;
    let translator = RowTranslator::new(options, preview_id);
    Ok(rows
        .iter()
        .map(|row| RowOutcome {
            line: row.line,
            objective: row.text(DVH_OBJECTIVE),
            evaluation_point: row.text(EVALUATION_POINT),
            result: translator.translate(row),
        })
        .collect())
}
