//! Batch summary table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::BatchResult;

pub fn print_summary(result: &BatchResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Records"),
        header_cell("Columns"),
        header_cell("Output"),
        header_cell("Status"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    for outcome in &result.files {
        let file = outcome
            .input
            .file_name()
            .map_or_else(|| outcome.input.display().to_string(), |name| {
                name.to_string_lossy().into_owned()
            });
        let output = outcome
            .output
            .as_ref()
            .map_or_else(|| "-".to_string(), |path| path.display().to_string());
        table.add_row(vec![
            Cell::new(file),
            Cell::new(outcome.records),
            Cell::new(outcome.columns),
            Cell::new(output),
            status_cell(outcome.error.as_deref()),
        ]);
    }
    println!("{table}");

    let failures: Vec<&crate::types::FileOutcome> =
        result.files.iter().filter(|f| !f.succeeded()).collect();
    if !failures.is_empty() {
        eprintln!("Errors:");
        for outcome in failures {
            if let Some(error) = &outcome.error {
                eprintln!("- {}: {error}", outcome.input.display());
            }
        }
    }
    println!("Done, see output in \"{}\".", result.outdir.display());
}

fn status_cell(error: Option<&str>) -> Cell {
    match error {
        None => Cell::new("ok")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Some(_) => Cell::new("failed")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
