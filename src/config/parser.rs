use std::path::Path;
use crate::errors::SizeLimitError;
use super::types::ReportConfig;
use super::schema::CONFIG_SCHEMA;
use tracing::warn;

const MAX_CONFIG_BYTES: u64 = 1_048_576;

pub async fn parse_config(path: &Path) -> Result<ReportConfig, SizeLimitError> {
    if !path.exists() {
        return Err(SizeLimitError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(SizeLimitError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    parse_config_str(&content)
}

/// Parse and validate settings from YAML text.
pub fn parse_config_str(content: &str) -> Result<ReportConfig, SizeLimitError> {
    // An empty document is a valid, empty config
    if content.trim().is_empty() {
        return Ok(ReportConfig::default());
    }

    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;

    validate_schema(&yaml)?;

    let config: ReportConfig = serde_yaml::from_value(yaml)?;

    validate_values(&config)?;

    Ok(config)
}

/// Check the config against the JSON schema. Violations are logged, not fatal.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), SizeLimitError> {
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| SizeLimitError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| SizeLimitError::Config(format!("Schema compilation error: {}", e)))?;

    if let Err(errors) = compiled.validate(&json_value) {
        for e in errors {
            warn!(validation_error = %format!("{} at {}", e, e.instance_path), "Config schema warning");
        }
    }

    Ok(())
}

fn validate_values(config: &ReportConfig) -> Result<(), SizeLimitError> {
    if let Some(highlight) = config.highlight_threshold {
        if !highlight.is_finite() || highlight < 0.0 {
            return Err(SizeLimitError::Config(format!(
                "highlight_threshold must be a non-negative number, got {}",
                highlight
            )));
        }
    }

    if let Some(heading) = &config.heading {
        if heading.trim().is_empty() {
            return Err(SizeLimitError::Config("heading must not be empty".into()));
        }
    }

    if let Some(threshold) = &config.threshold {
        if threshold.value().is_none() {
            warn!(threshold = ?threshold, "Threshold is not numeric; every run will be reported");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThresholdInput;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config_str(
            "threshold: \"5\"\nhighlight_threshold: 2\nheading: \"## sizes\"\nresults_file: out.json\n",
        )
        .unwrap();
        assert_eq!(config.threshold, Some(ThresholdInput::Text("5".into())));
        assert_eq!(config.highlight_threshold, Some(2.0));
        assert_eq!(config.heading.as_deref(), Some("## sizes"));
        assert_eq!(config.results_file.as_deref(), Some("out.json"));
    }

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config_str("").unwrap();
        assert!(config.threshold.is_none());
    }

    #[test]
    fn test_negative_highlight_rejected() {
        let err = parse_config_str("highlight_threshold: -1\n").unwrap_err();
        assert!(matches!(err, SizeLimitError::Config(_)));
    }

    #[test]
    fn test_empty_heading_rejected() {
        assert!(parse_config_str("heading: \"  \"\n").is_err());
    }

    #[test]
    fn test_unknown_key_is_only_a_warning() {
        let config = parse_config_str("threshold: 1\nextra: true\n").unwrap();
        assert_eq!(config.threshold, Some(ThresholdInput::Number(1.0)));
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        assert!(matches!(parse_config_str("threshold: [1"), Err(SizeLimitError::Yaml(_))));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = parse_config(Path::new("/nonexistent/sizelimit.yml")).await.unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }
}
