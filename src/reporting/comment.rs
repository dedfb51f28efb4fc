use crate::models::{ReportTable, Snapshot};

use super::markdown::render_markdown;
use super::significance::has_size_changes;

/// Heading that opens every report comment. Hosts match on it to find a
/// report they already posted.
pub const REPORT_HEADING: &str = "## size-limit report 📦 ";

/// Full comment body: heading line followed by the markdown table.
pub fn render_comment(heading: &str, table: &ReportTable) -> String {
    [heading.to_string(), render_markdown(table)].join("\r\n")
}

pub fn is_report_comment(body: &str, heading: &str) -> bool {
    body.starts_with(heading)
}

/// Whether the host should post or refresh the report.
///
/// A missing (non-numeric) threshold always notifies, as does an existing
/// report, which is kept up to date regardless of the size delta.
pub fn should_notify(
    base: Option<&Snapshot>,
    current: &Snapshot,
    threshold: Option<f64>,
    existing_report: bool,
) -> bool {
    match threshold {
        None => true,
        Some(threshold) => existing_report || has_size_changes(base, current, threshold),
    }
}
