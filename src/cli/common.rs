use std::path::Path;

use tracing::{error, warn};

use crate::config::{parse_config, ReportConfig};
use crate::errors::SizeLimitError;
use crate::models::Snapshot;
use crate::reporting::parse_results;
use crate::utils::truncate_output;

pub async fn load_config(path: Option<&str>) -> Result<ReportConfig, SizeLimitError> {
    match path {
        Some(path) => parse_config(Path::new(path)).await,
        None => Ok(ReportConfig::default()),
    }
}

/// Parse raw tool output, logging it when it is not the expected JSON.
pub fn parse_tool_output(raw: &str) -> Result<Snapshot, SizeLimitError> {
    parse_results(raw).map_err(|e| {
        error!(output = %truncate_output(raw), "Error parsing size-limit output. The output should be a json.");
        e
    })
}

/// A non-zero tool status fails the run once everything else is done.
pub fn check_tool_status(status: i32) -> Result<(), SizeLimitError> {
    if status > 0 {
        warn!(status, "Measurement tool reported a failure");
        return Err(SizeLimitError::LimitExceeded(status));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_status_zero_passes() {
        assert!(check_tool_status(0).is_ok());
    }

    #[test]
    fn test_tool_status_nonzero_fails() {
        assert!(matches!(check_tool_status(1), Err(SizeLimitError::LimitExceeded(1))));
    }

    #[test]
    fn test_parse_tool_output_propagates_error() {
        assert!(matches!(parse_tool_output("oops"), Err(SizeLimitError::Parse(_))));
    }

    #[tokio::test]
    async fn test_load_config_without_path_is_default() {
        let config = load_config(None).await.unwrap();
        assert!(config.heading.is_none());
    }
}
