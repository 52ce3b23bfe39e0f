//! Integration tests for the conversion pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Duration, NaiveDate};
use dose_cli::config::{OptionOverrides, load_options, resolve_options};
use dose_cli::pipeline::{
    batch_output_path, convert_file, convert_templates, inspect_rows, preview_id_for,
    resolve_preview_id,
};
use dose_model::{AliasMode, ConversionOptions, SkipReason};
use tempfile::TempDir;

const CONSTRAINTS: &str = "\
Structure IDs,Structure Codes,IDAliases,DVH Objective,Evaluation Point,Variation,Priority
PTV,12345,,Max [Gy],<=60,,2
Rectum,,Rect,V20Gy[cc],<=2,0.5,1
PTV,,,CI,>=0.8,,
,,,Mean [Gy],<=20,,
";

fn write_constraints(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, CONSTRAINTS).unwrap();
    path
}

fn generated_at() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .and_then(|date| date.and_hms_milli_opt(9, 30, 0, 0))
        .unwrap()
}

// ============================================================================
// Paths
// ============================================================================

#[test]
fn test_preview_id_from_stem() {
    assert_eq!(preview_id_for(Path::new("templates/Prostate_SIB.xlsx")), "Prostate_SIB");
}

#[test]
fn test_blank_preview_id_falls_back_to_stem() {
    let input = Path::new("templates/Prostate.xlsx");
    assert_eq!(resolve_preview_id(None, input), "Prostate");
    assert_eq!(resolve_preview_id(Some(""), input), "Prostate");
    assert_eq!(resolve_preview_id(Some("  "), input), "Prostate");
    assert_eq!(resolve_preview_id(Some("Custom"), input), "Custom");
}

#[test]
fn test_batch_output_path() {
    let input = Path::new("templates/Lung.xlsx");
    assert_eq!(
        batch_output_path(input, None),
        PathBuf::from("templates/Lung.xml")
    );
    assert_eq!(
        batch_output_path(input, Some(Path::new("out"))),
        PathBuf::from("out/Lung.xml")
    );
}

// ============================================================================
// Conversion
// ============================================================================

#[test]
fn test_convert_file_writes_document() {
    let dir = TempDir::new().unwrap();
    let input = write_constraints(&dir, "Prostate.csv");
    let output = dir.path().join("xml").join("Prostate.xml");

    let outcome = convert_file(
        &input,
        Some(&output),
        "Prostate",
        &ConversionOptions::default(),
        generated_at(),
    )
    .unwrap();

    assert_eq!(outcome.preview_id, "Prostate");
    assert_eq!(outcome.report.rows_seen, 4);
    assert_eq!(outcome.report.items_emitted, 2);
    assert_eq!(outcome.report.skipped_count(), 2);
    assert_eq!(outcome.output.as_deref(), Some(output.as_path()));

    let xml = fs::read_to_string(&output).unwrap();
    assert!(xml.contains("ID=\"Prostate\""));
    assert!(xml.contains("Description=\"Source Excel: Prostate.csv | Script: dose-objectives"));
    assert!(xml.contains("<MeasureItem ID=\"PTV\">"));
    assert!(xml.contains("<MeasureItem ID=\"Rectum\">"));
    assert!(xml.contains("<VariationAcceptable>500</VariationAcceptable>"));
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_constraints(&dir, "Prostate.csv");

    let outcome = convert_file(
        &input,
        None,
        "Prostate",
        &ConversionOptions::default(),
        generated_at(),
    )
    .unwrap();

    assert!(outcome.output.is_none());
    assert_eq!(outcome.report.items_emitted, 2);
    assert!(!dir.path().join("Prostate.xml").exists());
}

#[test]
fn test_alias_mode_changes_item_ids() {
    let dir = TempDir::new().unwrap();
    let input = write_constraints(&dir, "Prostate.csv");
    let output = dir.path().join("Prostate.xml");
    let options = ConversionOptions::default().with_alias_mode(AliasMode::All);

    let outcome = convert_file(&input, Some(&output), "Prostate", &options, generated_at())
        .unwrap();

    assert_eq!(outcome.report.items_emitted, 3);
    let xml = fs::read_to_string(&output).unwrap();
    assert!(xml.contains("<MeasureItem ID=\"Rect\">"));
}

#[test]
fn test_batch_stamps_each_file_separately() {
    let dir = TempDir::new().unwrap();
    let templates = vec![
        write_constraints(&dir, "Brain.csv"),
        dir.path().join("missing.xlsx"),
        write_constraints(&dir, "Lung.csv"),
    ];
    let out_dir = dir.path().join("out");
    let mut tick = generated_at();
    let clock = || {
        tick += Duration::seconds(1);
        tick
    };

    let result = convert_templates(
        &templates,
        Some(&out_dir),
        &ConversionOptions::default(),
        false,
        clock,
    );

    assert_eq!(result.files.len(), 2);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("missing.xlsx"));
    assert_eq!(result.files[0].preview_id, "Brain");
    assert_eq!(result.files[1].preview_id, "Lung");
    assert!(result.files[0].generated_at < result.files[1].generated_at);
    assert!(out_dir.join("Brain.xml").is_file());
    assert!(out_dir.join("Lung.xml").is_file());

    let lung = fs::read_to_string(out_dir.join("Lung.xml")).unwrap();
    assert!(lung.contains("LastModified=\" October 19 2026 09:30:03:000\""));
}

#[test]
fn test_missing_input_is_fatal() {
    let dir = TempDir::new().unwrap();
    let error = convert_file(
        &dir.path().join("absent.xlsx"),
        None,
        "absent",
        &ConversionOptions::default(),
        generated_at(),
    )
    .unwrap_err();
    assert!(format!("{error:#}").contains("absent.xlsx"));
}

#[test]
fn test_inspect_rows_reports_outcomes() {
    let dir = TempDir::new().unwrap();
    let input = write_constraints(&dir, "Prostate.csv");

    let rows = inspect_rows(&input, "Prostate", &ConversionOptions::default()).unwrap();

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].line, 2);
    assert_eq!(rows[0].objective, "Max [Gy]");
    assert_eq!(rows[0].result.as_ref().map(Vec::len), Ok(1));
    assert_eq!(
        rows[2].result.as_ref().unwrap_err(),
        &SkipReason::UnrecognizedMetric("CI".to_string())
    );
    assert_eq!(rows[3].result.as_ref().unwrap_err(), &SkipReason::NoAlias);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_file_with_overrides() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("dose.toml");
    fs::write(
        &config,
        "alias_mode = \"all\"\nadd_preview_id_alias = true\nassigned_users = \"clinic\\\\planner\"\n",
    )
    .unwrap();

    let loaded = load_options(&config).unwrap();
    assert_eq!(loaded.alias_mode, AliasMode::All);
    assert!(loaded.add_preview_id_alias);
    assert_eq!(loaded.assigned_users, "clinic\\planner");

    let overrides = OptionOverrides {
        alias_mode: Some(AliasMode::IdAliasFirst),
        ..OptionOverrides::default()
    };
    let resolved = resolve_options(Some(&config), &overrides).unwrap();
    assert_eq!(resolved.alias_mode, AliasMode::IdAliasFirst);
    assert!(resolved.add_preview_id_alias);
}

#[test]
fn test_invalid_config_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("dose.toml");
    fs::write(&config, "alias_mode = \"first\"\n").unwrap();

    let error = resolve_options(Some(&config), &OptionOverrides::default()).unwrap_err();
    assert!(format!("{error:#}").contains("dose.toml"));
}

#[test]
fn test_no_config_uses_defaults() {
    let options = resolve_options(None, &OptionOverrides::default()).unwrap();
    assert_eq!(options, ConversionOptions::default());
}
