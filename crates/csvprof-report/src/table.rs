//! Summary table with one row per column.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use csvprof_model::{ColumnReport, ProfileReport};

/// Builds a summary table of the report.
pub fn render_table(report: &ProfileReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Rows"),
        header_cell("Missing"),
        header_cell("Non-missing"),
        header_cell("Missing %"),
        header_cell("Unique"),
        header_cell("Top values"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for column in report {
        table.add_row(vec![
            Cell::new(&column.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(column.total_rows),
            missing_cell(column),
            Cell::new(column.non_missing_count),
            percent_cell(column.missing_percent),
            Cell::new(column.unique_count),
            top_values_cell(column),
        ]);
    }
    table
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
    table.set_constraints(vec![
        ColumnConstraint::UpperBoundary(Width::Percentage(25)),
        ColumnConstraint::LowerBoundary(Width::Fixed(6)),
        ColumnConstraint::LowerBoundary(Width::Fixed(9)),
        ColumnConstraint::LowerBoundary(Width::Fixed(13)),
        ColumnConstraint::LowerBoundary(Width::Fixed(11)),
        ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ColumnConstraint::UpperBoundary(Width::Percentage(45)),
    ]);
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

fn missing_cell(column: &ColumnReport) -> Cell {
    match column.missing_count {
        0 => dim_cell(0),
        count if column.is_all_missing() => Cell::new(count).fg(Color::Red),
        count => Cell::new(count).fg(Color::Yellow),
    }
}

fn percent_cell(percent: f64) -> Cell {
    Cell::new(format!("{percent:.1}%"))
}

fn top_values_cell(column: &ColumnReport) -> Cell {
    if column.top_values.is_empty() {
        return dim_cell("-");
    }
    let joined = column
        .top_values
        .iter()
        .map(|top| format!("{} ({})", top.value, top.count))
        .collect::<Vec<_>>()
        .join(", ");
    Cell::new(joined)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
