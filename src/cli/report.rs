use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cli::commands::ReportArgs;
use crate::config::{ReportSettings, SettingOverrides};
use crate::errors::SizeLimitError;
use crate::models::{ReportTable, Snapshot};
use crate::reporting::{format_results, read_input, read_snapshot, render_comment, should_notify};

use super::common::{check_tool_status, load_config, parse_tool_output};
use super::output::{append_step_outputs, emit};

/// Machine-readable result of a report run, printed with `--json`.
#[derive(Debug, Serialize)]
pub struct ReportSummary<'a> {
    pub should_comment: bool,
    pub threshold: Option<f64>,
    pub table: &'a ReportTable,
    pub body: Option<String>,
}

pub async fn handle_report(args: ReportArgs) -> Result<(), SizeLimitError> {
    let config = load_config(args.config.as_deref()).await?;
    let settings = ReportSettings::resolve(
        &config,
        &SettingOverrides {
            threshold: args.threshold.clone(),
            highlight_threshold: args.highlight_threshold,
            results_file: args.base.clone(),
        },
    );

    let raw = read_input(&args.input).await?;
    let current = parse_tool_output(&raw)?;
    let base = load_base(Path::new(&settings.results_file)).await;

    let notify = should_notify(base.as_ref(), &current, settings.threshold, args.existing_comment);
    let table = format_results(base.as_ref(), &current, settings.highlight_threshold);
    info!(
        mode = %table.mode,
        artifacts = table.rows.len(),
        should_comment = notify,
        "Comparison complete"
    );

    let body = notify.then(|| render_comment(&settings.heading, &table));

    if args.json {
        let summary = ReportSummary {
            should_comment: notify,
            threshold: settings.threshold,
            table: &table,
            body,
        };
        emit(args.output.as_deref(), &serde_json::to_string_pretty(&summary)?).await?;
    } else if let Some(body) = &body {
        emit(args.output.as_deref(), body).await?;
    } else {
        info!("No significant size changes, skipping report");
    }

    if let Some(path) = &args.github_output {
        append_step_outputs(
            Path::new(path),
            &[
                ("should-comment", notify.to_string()),
                ("mode", table.mode.to_string()),
            ],
        )
        .await?;
    }

    check_tool_status(args.tool_status)
}

/// An unreadable baseline downgrades to "no baseline" rather than failing
/// the run.
async fn load_base(path: &Path) -> Option<Snapshot> {
    match read_snapshot(path).await {
        Ok(base) => base,
        Err(e) => {
            warn!(path = %path.display(), "Unable to read base results, comparing against an empty baseline");
            debug!(error = %e, "Base results read failed");
            None
        }
    }
}
