//! Tests for reading constraint tables from workbooks and CSV files.

use std::fs;
use std::path::{Path, PathBuf};

use dose_ingest::{IngestError, IngestOptions, discover_templates, read_rows};
use dose_model::CellValue;
use dose_model::columns::{
    DVH_OBJECTIVE, EVALUATION_POINT, PRIORITY, STRUCTURE_CODES, STRUCTURE_IDS, ZUSATZINFO,
};
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

const HEADERS: [&str; 8] = [
    "Structure IDs",
    "Structure Codes",
    "IDAliases",
    "DVH Objective",
    "Evaluation Point",
    "Variation",
    "Priority",
    "Zusatzinfo",
];

fn write_workbook(path: &Path, sheet: &str) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet).unwrap();
    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).unwrap();
    }
    // Row 2: complete constraint
    worksheet.write_string(1, 0, "PTV").unwrap();
    worksheet.write_number(1, 1, 12345.0).unwrap();
    worksheet.write_string(1, 3, "Max [Gy]").unwrap();
    worksheet.write_string(1, 4, "<=60").unwrap();
    worksheet.write_number(1, 6, 2.0).unwrap();
    worksheet.write_string(1, 7, "boost").unwrap();
    // Row 3: blank objective, dropped
    worksheet.write_string(2, 0, "Rectum").unwrap();
    worksheet.write_string(2, 3, "   ").unwrap();
    // Row 4: second constraint
    worksheet.write_string(3, 0, "Rectum").unwrap();
    worksheet.write_string(3, 3, "V60Gy[%]").unwrap();
    worksheet.write_string(3, 4, "<=35").unwrap();
    let buffer = workbook.save_to_buffer().unwrap();
    fs::write(path, buffer).unwrap();
}

fn workbook_in(dir: &TempDir, name: &str, sheet: &str) -> PathBuf {
    let path = dir.path().join(name);
    write_workbook(&path, sheet);
    path
}

#[test]
fn test_reads_constraints_sheet() {
    let dir = TempDir::new().unwrap();
    let path = workbook_in(&dir, "Prostate.xlsx", "Constraints");

    let rows = read_rows(&path, &IngestOptions::default()).unwrap();

    assert_eq!(rows.len(), 2);
    let first = &rows[0];
    assert_eq!(first.line, 2);
    assert_eq!(first.text(STRUCTURE_IDS), "PTV");
    assert_eq!(first.get(STRUCTURE_CODES), Some(&CellValue::Int(12345)));
    assert_eq!(first.text(DVH_OBJECTIVE), "Max [Gy]");
    assert_eq!(first.text(EVALUATION_POINT), "<=60");
    assert_eq!(first.text(PRIORITY), "2");
    assert_eq!(first.text(ZUSATZINFO), "boost");

    let second = &rows[1];
    assert_eq!(second.line, 4);
    assert_eq!(second.text(DVH_OBJECTIVE), "V60Gy[%]");
    assert_eq!(second.get(PRIORITY), Some(&CellValue::Empty));
}

#[test]
fn test_missing_sheet_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = workbook_in(&dir, "Wrong.xlsx", "Sheet1");

    let error = read_rows(&path, &IngestOptions::default()).unwrap_err();
    match error {
        IngestError::MissingSheet {
            sheet, available, ..
        } => {
            assert_eq!(sheet, "Constraints");
            assert_eq!(available, "Sheet1");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_custom_sheet_name() {
    let dir = TempDir::new().unwrap();
    let path = workbook_in(&dir, "Custom.xlsx", "Goals");
    let options = IngestOptions::default().with_sheet_name("Goals");
    assert_eq!(read_rows(&path, &options).unwrap().len(), 2);
}

#[test]
fn test_reads_csv_export() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Lung.csv");
    fs::write(
        &path,
        "\u{feff}Structure IDs,DVH Objective,Evaluation Point,Priority\n\
         Lung_Total,V20Gy[%],<=30,1\n\
         Heart,,<=26,2\n\
         Heart,Mean [Gy],<=26\n",
    )
    .unwrap();

    let rows = read_rows(&path, &IngestOptions::default()).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].text(STRUCTURE_IDS), "Lung_Total");
    assert_eq!(rows[0].line, 2);
    assert_eq!(rows[1].text(DVH_OBJECTIVE), "Mean [Gy]");
    assert_eq!(rows[1].text(PRIORITY), "");
    assert_eq!(rows[1].line, 4);
}

#[test]
fn test_unsupported_and_missing_files() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "hello").unwrap();
    assert!(matches!(
        read_rows(&path, &IngestOptions::default()),
        Err(IngestError::UnsupportedFormat { .. })
    ));
    assert!(matches!(
        read_rows(&dir.path().join("absent.xlsx"), &IngestOptions::default()),
        Err(IngestError::FileNotFound { .. })
    ));
}

#[test]
fn test_discover_templates() {
    let dir = TempDir::new().unwrap();
    workbook_in(&dir, "b_Lung.xlsx", "Constraints");
    workbook_in(&dir, "a_Brain.XLSX", "Constraints");
    fs::write(dir.path().join("~$b_Lung.xlsx"), "lock").unwrap();
    fs::write(dir.path().join("readme.csv"), "x").unwrap();
    fs::create_dir(dir.path().join("nested.xlsx")).unwrap();

    let files = discover_templates(dir.path()).unwrap();
    let names: Vec<String> = files
        .iter()
        .filter_map(|path| path.file_name()?.to_str().map(str::to_string))
        .collect();
    assert_eq!(names, vec!["a_Brain.XLSX", "b_Lung.xlsx"]);

    assert!(matches!(
        discover_templates(&dir.path().join("missing")),
        Err(IngestError::DirectoryNotFound { .. })
    ));
}
