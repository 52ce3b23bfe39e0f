use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use dose_cli::types::{RowOutcome, RunResult};

pub fn print_summary(result: &RunResult) {
    if !result.files.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("File"),
            header_cell("Preview ID"),
            header_cell("Rows"),
            header_cell("Items"),
            header_cell("Skipped"),
            header_cell("Output"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 2, CellAlignment::Right);
        align_column(&mut table, 3, CellAlignment::Right);
        align_column(&mut table, 4, CellAlignment::Right);

        let mut total_rows = 0usize;
        let mut total_items = 0usize;
        let mut total_skipped = 0usize;
        for outcome in &result.files {
            let report = &outcome.report;
            total_rows += report.rows_seen;
            total_items += report.items_emitted;
            total_skipped += report.skipped_count();
            table.add_row(vec![
                Cell::new(file_label(&outcome.input)),
                Cell::new(&outcome.preview_id),
                Cell::new(report.rows_seen),
                Cell::new(report.items_emitted),
                count_cell(report.skipped_count(), Color::Yellow),
                output_cell(outcome.output.as_deref()),
            ]);
        }
        if result.files.len() > 1 {
            table.add_row(vec![
                Cell::new("TOTAL")
                    .fg(Color::Cyan)
                    .add_attribute(Attribute::Bold),
                dim_cell("-"),
                Cell::new(total_rows).add_attribute(Attribute::Bold),
                Cell::new(total_items).add_attribute(Attribute::Bold),
                count_cell(total_skipped, Color::Yellow).add_attribute(Attribute::Bold),
                dim_cell("-"),
            ]);
        }
        println!("{table}");
    }
    if result.has_errors() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

pub fn print_inspection(rows: &[RowOutcome]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("DVH Objective"),
        header_cell("Evaluation Point"),
        header_cell("Outcome"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for row in rows {
        let outcome = match &row.result {
            Ok(items) => {
                let ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
                Cell::new(format!("{} item(s): {}", items.len(), ids.join(", ")))
                    .fg(Color::Green)
            }
            Err(reason) => Cell::new(format!("skipped: {reason}")).fg(Color::Yellow),
        };
        table.add_row(vec![
            Cell::new(row.line),
            Cell::new(&row.objective),
            Cell::new(&row.evaluation_point),
            outcome,
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn file_label(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

fn output_cell(path: Option<&Path>) -> Cell {
    match path {
        Some(path) => Cell::new(path.display()).fg(Color::Green),
        None => dim_cell("dry run"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
