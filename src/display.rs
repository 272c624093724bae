use comfy_table::{Cell, Table as ComfyTable, presets::UTF8_FULL};
use crate::executor::QueryResult;

/// Renders a query result as a text table followed by a row count.
///
/// The header is printed even when there are no rows, so an empty result
/// reads differently from an error.
pub fn format_result(result: &QueryResult) -> String {
    let mut table = ComfyTable::new();
    table.load_preset(UTF8_FULL);

    table.set_header(result.header.names().iter().map(|c| Cell::new(c)));

    for row in &result.rows {
        table.add_row(row.to_strings().into_iter().map(Cell::new));
    }

    let count = result.rows.len();
    let noun = if count == 1 { "row" } else { "rows" };
    format!("{table}\n({count} {noun})\n")
}
