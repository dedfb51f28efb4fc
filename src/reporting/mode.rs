use crate::models::{ReportMode, Snapshot};

/// Pick the report shape from the current snapshot alone: a single untimed
/// current record forces a size-only report. The base never influences the
/// outcome.
pub fn determine_mode(current: &Snapshot) -> ReportMode {
    if current.records().any(|record| record.total().is_none()) {
        ReportMode::Size
    } else {
        ReportMode::Time
    }
}
