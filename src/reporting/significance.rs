use crate::models::{union_names, ReportMode, Snapshot};

use super::mode::determine_mode;

/// Decide whether a comparison is worth surfacing.
///
/// Timed reports are always significant. For size-only reports an artifact
/// counts when both sides are zero-sized, or when its relative size change
/// strictly exceeds `threshold` percent. An absent base behaves as empty.
pub fn has_size_changes(base: Option<&Snapshot>, current: &Snapshot, threshold: f64) -> bool {
    if determine_mode(current) == ReportMode::Time {
        return true;
    }

    union_names(base, current).into_iter().any(|name| {
        let base_size = base.map_or(0, |b| b.lookup(name).size) as f64;
        let current_size = current.lookup(name).size as f64;

        if base_size == 0.0 && current_size == 0.0 {
            return true;
        }

        ((current_size - base_size) / base_size).abs() * 100.0 > threshold
    })
}
