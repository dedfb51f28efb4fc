use std::path::Path;

use tracing::info;

use crate::cli::commands::BaselineArgs;
use crate::config::{ReportSettings, SettingOverrides};
use crate::errors::SizeLimitError;
use crate::reporting::{read_input, write_snapshot};

use super::common::{check_tool_status, load_config, parse_tool_output};

pub async fn handle_baseline(args: BaselineArgs) -> Result<(), SizeLimitError> {
    let config = load_config(args.config.as_deref()).await?;
    let settings = ReportSettings::resolve(
        &config,
        &SettingOverrides {
            results_file: args.results.clone(),
            ..Default::default()
        },
    );

    let raw = read_input(&args.input).await?;
    let snapshot = parse_tool_output(&raw)?;
    info!(artifacts = snapshot.len(), "Parsed baseline results");

    write_snapshot(Path::new(&settings.results_file), &snapshot).await?;

    check_tool_status(args.tool_status)
}
