use crate::models::{union_names, MeasurementRecord, ReportMode, ReportTable, Snapshot};
use crate::utils::{format_bytes, format_percent, format_time, signed_ceil};

use super::mode::determine_mode;

const ADDED: &str = "added 🆕";
const REMOVED: &str = "removed 🚮";
const INCREASE: &str = "🔺";
const DECREASE: &str = "🔽";

/// Describe the change from `base` to `current`.
///
/// A zero base reads as an addition and a zero current as a removal.
/// Otherwise the percentage is shown with its magnitude rounded up to two
/// decimals, and a direction marker is appended only when the change
/// strictly exceeds `highlight_threshold` percent.
pub fn format_change(base: f64, current: f64, highlight_threshold: f64) -> String {
    if base == 0.0 {
        return ADDED.to_string();
    }
    if current == 0.0 {
        return REMOVED.to_string();
    }

    let value = (current - base) / base * 100.0;
    let formatted = format_percent(signed_ceil(value, 2));

    if value > 0.0 {
        if value - highlight_threshold > 0.0 {
            format!("+{} {}", formatted, INCREASE)
        } else {
            format!("+{}", formatted)
        }
    } else if value == 0.0 {
        formatted
    } else if value + highlight_threshold < 0.0 {
        format!("{} {}", formatted, DECREASE)
    } else {
        formatted
    }
}

fn format_line(value: &str, change: &str) -> String {
    format!("{} ({})", value, change)
}

fn size_cell(
    base: &MeasurementRecord,
    current: &MeasurementRecord,
    highlight_threshold: f64,
) -> String {
    format_line(
        &format_bytes(current.size),
        &format_change(base.size as f64, current.size as f64, highlight_threshold),
    )
}

fn format_size_row(
    name: &str,
    base: &MeasurementRecord,
    current: &MeasurementRecord,
    highlight_threshold: f64,
) -> Vec<String> {
    vec![name.to_string(), size_cell(base, current, highlight_threshold)]
}

// A side without timing (e.g. a size-only baseline) reads as zero, which
// renders as an addition.
fn format_time_row(
    name: &str,
    base: &MeasurementRecord,
    current: &MeasurementRecord,
    highlight_threshold: f64,
) -> Vec<String> {
    let base_loading = base.loading().unwrap_or(0.0);
    let base_running = base.running().unwrap_or(0.0);
    let loading = current.loading().unwrap_or(0.0);
    let running = current.running().unwrap_or(0.0);
    let total = current.total().unwrap_or(0.0);

    vec![
        name.to_string(),
        size_cell(base, current, highlight_threshold),
        format_line(
            &format_time(loading),
            &format_change(base_loading, loading, highlight_threshold),
        ),
        format_line(
            &format_time(running),
            &format_change(base_running, running, highlight_threshold),
        ),
        format_time(total),
    ]
}

/// Build the comparison table for `current` against an optional `base`.
///
/// Rows follow base order, then artifacts new in `current`. Inputs are not
/// modified.
pub fn format_results(
    base: Option<&Snapshot>,
    current: &Snapshot,
    highlight_threshold: f64,
) -> ReportTable {
    let mode = determine_mode(current);
    let mut table = ReportTable::new(mode);

    for name in union_names(base, current) {
        let base_record = base.map_or_else(MeasurementRecord::empty, |b| b.lookup(name));
        let current_record = current.lookup(name);

        let row = match mode {
            ReportMode::Size => {
                format_size_row(name, &base_record, &current_record, highlight_threshold)
            }
            ReportMode::Time => {
                format_time_row(name, &base_record, &current_record, highlight_threshold)
            }
        };
        table.rows.push(row);
    }

    table
}
