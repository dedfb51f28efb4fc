use serde::{Deserialize, Serialize};

use crate::reporting::REPORT_HEADING;

pub const DEFAULT_RESULTS_FILE: &str = "size-limit-results.json";

/// Contents of the optional YAML settings file. Every key may be omitted.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ReportConfig {
    pub threshold: Option<ThresholdInput>,
    pub highlight_threshold: Option<f64>,
    pub heading: Option<String>,
    pub results_file: Option<String>,
}

/// A threshold as written by a user: a number, or text that may or may not
/// hold one.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ThresholdInput {
    Number(f64),
    Text(String),
}

impl ThresholdInput {
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Number(_) => None,
            Self::Text(s) => parse_threshold(s),
        }
    }
}

/// Parse a threshold input. Empty or non-numeric text yields `None`, which
/// means every run is significant.
pub fn parse_threshold(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Effective settings after layering CLI flags over the settings file.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSettings {
    pub threshold: Option<f64>,
    pub highlight_threshold: f64,
    pub heading: String,
    pub results_file: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            threshold: None,
            highlight_threshold: 0.0,
            heading: REPORT_HEADING.to_string(),
            results_file: DEFAULT_RESULTS_FILE.to_string(),
        }
    }
}

/// Values given on the command line (or through `INPUT_*` variables).
#[derive(Debug, Clone, Default)]
pub struct SettingOverrides {
    pub threshold: Option<String>,
    pub highlight_threshold: Option<f64>,
    pub results_file: Option<String>,
}

impl ReportSettings {
    pub fn resolve(config: &ReportConfig, overrides: &SettingOverrides) -> Self {
        let defaults = Self::default();
        let threshold = match &overrides.threshold {
            Some(text) => parse_threshold(text),
            None => config.threshold.as_ref().and_then(ThresholdInput::value),
        };

        Self {
            threshold,
            highlight_threshold: overrides
                .highlight_threshold
                .or(config.highlight_threshold)
                .unwrap_or(defaults.highlight_threshold),
            heading: config.heading.clone().unwrap_or(defaults.heading),
            results_file: overrides
                .results_file
                .clone()
                .or_else(|| config.results_file.clone())
                .unwrap_or(defaults.results_file),
        }
    }
}
