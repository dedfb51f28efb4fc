use console::measure_text_width;

use crate::models::ReportTable;

const MIN_COLUMN_WIDTH: usize = 3;

fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|")
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(measure_text_width(cell));
    format!("{}{}", cell, " ".repeat(fill))
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, width)| pad(cells.get(i).map(String::as_str).unwrap_or(""), *width))
        .collect();
    format!("| {} |", padded.join(" | "))
}

/// Render a report table as a GitHub-flavored markdown table with aligned
/// columns.
pub fn render_markdown(table: &ReportTable) -> String {
    let rows: Vec<Vec<String>> = table
        .to_rows()
        .iter()
        .map(|row| row.iter().map(|cell| escape_cell(cell)).collect())
        .collect();

    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|i| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| measure_text_width(cell))
                .max()
                .unwrap_or(0)
                .max(MIN_COLUMN_WIDTH)
        })
        .collect();

    let delimiter: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    let mut iter = rows.iter();
    if let Some(header) = iter.next() {
        lines.push(render_row(header, &widths));
        lines.push(format!("| {} |", delimiter.join(" | ")));
    }
    for row in iter {
        lines.push(render_row(row, &widths));
    }
    lines.join("\n")
}
