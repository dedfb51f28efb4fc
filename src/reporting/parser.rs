use serde::Deserialize;
use serde_json::Value;

use crate::errors::SizeLimitError;
use crate::models::{MeasurementRecord, Snapshot, Timing};

/// One entry of the measurement tool's JSON output. Unknown keys such as
/// `passed` or `limit` are ignored.
#[derive(Debug, Deserialize)]
struct RawMeasurement {
    name: String,
    size: RawNumber,
    #[serde(default)]
    loading: Option<RawNumber>,
    #[serde(default)]
    running: Option<RawNumber>,
}

/// The tool emits numbers either as JSON numbers or as decimal strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    /// Coerce to a number the way unary plus does on a string: surrounding
    /// whitespace is ignored and empty text is zero.
    fn to_f64(&self) -> Option<f64> {
        match self {
            RawNumber::Number(n) => Some(*n),
            RawNumber::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    Some(0.0)
                } else {
                    trimmed.parse::<f64>().ok()
                }
            }
        }
    }
}

/// Parse raw measurement tool output into a canonical snapshot.
///
/// The input must be a JSON array of `{name, size, loading?, running?}`
/// objects. Timing is attached only when both `loading` and `running` are
/// present on an entry. A repeated name overwrites the earlier entry.
pub fn parse_results(output: &str) -> Result<Snapshot, SizeLimitError> {
    let value: Value = serde_json::from_str(output)
        .map_err(|e| SizeLimitError::Parse(format!("output is not valid JSON: {}", e)))?;

    let entries = match value {
        Value::Array(entries) => entries,
        Value::Object(ref obj) => {
            let detail = obj
                .get("error")
                .and_then(Value::as_str)
                .map(|msg| format!(": {}", msg))
                .unwrap_or_default();
            return Err(SizeLimitError::Parse(format!(
                "expected a JSON array of results, got an object{}",
                detail
            )));
        }
        other => {
            return Err(SizeLimitError::Parse(format!(
                "expected a JSON array of results, got {}",
                json_kind(&other)
            )));
        }
    };

    let mut snapshot = Snapshot::new();
    for (index, entry) in entries.into_iter().enumerate() {
        let raw: RawMeasurement = serde_json::from_value(entry)
            .map_err(|e| SizeLimitError::Parse(format!("invalid result at index {}: {}", index, e)))?;
        snapshot.insert(to_record(raw)?);
    }

    Ok(snapshot)
}

fn to_record(raw: RawMeasurement) -> Result<MeasurementRecord, SizeLimitError> {
    let size = coerce(&raw.name, "size", &raw.size)?;
    if size.fract() != 0.0 || size >= u64::MAX as f64 {
        return Err(SizeLimitError::Parse(format!(
            "size of '{}' is not a whole number of bytes: {}",
            raw.name, size
        )));
    }

    let timing = match (&raw.loading, &raw.running) {
        (Some(loading), Some(running)) => Some(Timing::new(
            coerce(&raw.name, "loading", loading)?,
            coerce(&raw.name, "running", running)?,
        )),
        _ => None,
    };

    Ok(MeasurementRecord {
        name: raw.name,
        size: size as u64,
        timing,
    })
}

fn coerce(name: &str, field: &str, raw: &RawNumber) -> Result<f64, SizeLimitError> {
    match raw.to_f64() {
        Some(n) if n.is_finite() && n >= 0.0 => Ok(n),
        _ => Err(SizeLimitError::Parse(format!(
            "{} of '{}' is not a non-negative number: {:?}",
            field, name, raw
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
