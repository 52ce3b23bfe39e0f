use anyhow::{Context, Result};
use chrono::Local;
use dose_cli::config::resolve_options;
use dose_cli::pipeline::{convert_file, convert_templates, inspect_rows, resolve_preview_id};
use dose_cli::types::{RowOutcome, RunResult};
use dose_ingest::discover_templates;
use tracing::{info, info_span};

use crate::cli::{BatchArgs, ConvertArgs, InspectArgs};

pub fn run_convert(args: &ConvertArgs) -> Result<RunResult> {
    let options = resolve_options(args.converter.config.as_deref(), &args.converter.overrides())?;
    let preview_id = resolve_preview_id(args.preview_id.as_deref(), &args.input);
    let span = info_span!("convert", file = %args.input.display(), preview_id = %preview_id);
    let _guard = span.enter();

    let output = (!args.dry_run).then_some(args.output.as_path());
    let outcome = convert_file(
        &args.input,
        output,
        &preview_id,
        &options,
        Local::now().naive_local(),
    )?;
    Ok(RunResult {
        files: vec![outcome],
        errors: Vec::new(),
    })
}

pub fn run_batch(args: &BatchArgs) -> Result<RunResult> {
    let options = resolve_options(args.converter.config.as_deref(), &args.converter.overrides())?;
    let templates = discover_templates(&args.dir)
        .with_context(|| format!("scan {}", args.dir.display()))?;
    if templates.is_empty() {
        println!("No .xlsx templates found in {}", args.dir.display());
        return Ok(RunResult::default());
    }
    info!(dir = %args.dir.display(), count = templates.len(), "converting templates");

    let result = convert_templates(
        &templates,
        args.output_dir.as_deref(),
        &options,
        args.dry_run,
        || Local::now().naive_local(),
    );
    Ok(result)
}

pub fn run_inspect(args: &InspectArgs) -> Result<Vec<RowOutcome>> {
    let options = resolve_options(args.converter.config.as_deref(), &args.converter.overrides())?;
    let preview_id = resolve_preview_id(args.preview_id.as_deref(), &args.input);
    inspect_rows(&args.input, &preview_id, &options)
}
