//! Console rendering of candidate listings and dataset profiles.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use datapick_ingest::{CsvCandidate, DatasetSummary};

/// Prints the candidate listing as an indexed table with sizes in KB.
pub fn print_candidates(candidates: &[CsvCandidate]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("File"),
        header_cell("Size"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (idx, candidate) in candidates.iter().enumerate() {
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(candidate.file_name()),
            Cell::new(format!("{:.1} KB", candidate.size_kb())),
        ]);
    }
    println!("{table}");
}

/// Prints the dataset profile: shape, columns, head rows, dtypes, and
/// missing-value counts.
pub fn print_report(summary: &DatasetSummary) {
    println!(
        "Shape: {} rows x {} columns",
        summary.rows,
        summary.width()
    );
    println!("Columns: {}", summary.column_names().join(", "));

    println!();
    println!("First {} rows:", summary.head.len());
    print_head_table(summary);

    println!();
    println!("Column types:");
    print_columns_table(summary);

    println!();
    print_missing(summary);
}

fn print_head_table(summary: &DatasetSummary) {
    let mut table = Table::new();
    table.set_header(
        summary
            .column_names()
            .iter()
            .map(|name| header_cell(name))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for row in &summary.head {
        table.add_row(
            row.iter()
                .map(|value| {
                    if value.is_empty() {
                        dim_cell("null")
                    } else {
                        Cell::new(value)
                    }
                })
                .collect::<Vec<_>>(),
        );
    }
    println!("{table}");
}

fn print_columns_table(summary: &DatasetSummary) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Dtype")]);
    apply_table_style(&mut table);
    for column in &summary.columns {
        table.add_row(vec![Cell::new(&column.name), Cell::new(&column.dtype)]);
    }
    println!("{table}");
}

fn print_missing(summary: &DatasetSummary) {
    let missing = summary.missing_columns();
    if missing.is_empty() {
        println!("No missing values.");
        return;
    }
    println!("Missing values:");
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Missing")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for column in missing {
        table.add_row(vec![
            Cell::new(&column.name),
            Cell::new(column.missing).fg(Color::Yellow),
        ]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
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
