use serde::{Deserialize, Serialize};

/// Name given to the placeholder record that stands in for an artifact
/// missing from one side of a comparison.
pub const EMPTY_RECORD_NAME: &str = "-";

/// Timing estimates reported alongside a size, in seconds.
///
/// The three values travel together: a record is either fully timed or has
/// no timing at all.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Timing {
    pub loading: f64,
    pub running: f64,
    pub total: f64,
}

impl Timing {
    /// Build a timing triple; `total` is the plain floating-point sum.
    pub fn new(loading: f64, running: f64) -> Self {
        Self {
            loading,
            running,
            total: loading + running,
        }
    }
}

/// Canonical measurement of one build artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    #[serde(flatten)]
    pub timing: Option<Timing>,
}

impl MeasurementRecord {
    pub fn sized(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            timing: None,
        }
    }

    pub fn timed(name: impl Into<String>, size: u64, loading: f64, running: f64) -> Self {
        Self {
            name: name.into(),
            size,
            timing: Some(Timing::new(loading, running)),
        }
    }

    /// The zero-valued placeholder used for added/removed artifacts.
    /// A fresh value on every call.
    pub fn empty() -> Self {
        Self {
            name: EMPTY_RECORD_NAME.to_string(),
            size: 0,
            timing: Some(Timing::default()),
        }
    }

    pub fn is_timed(&self) -> bool {
        self.timing.is_some()
    }

    pub fn loading(&self) -> Option<f64> {
        self.timing.map(|t| t.loading)
    }

    pub fn running(&self) -> Option<f64> {
        self.timing.map(|t| t.running)
    }

    pub fn total(&self) -> Option<f64> {
        self.timing.map(|t| t.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_total_is_exact_sum() {
        let timing = Timing::new(2.1658984375, 0.10210999999999999);
        assert_eq!(timing.total, 2.1658984375 + 0.10210999999999999);
    }

    #[test]
    fn test_empty_record_is_zeroed() {
        let empty = MeasurementRecord::empty();
        assert_eq!(empty.name, "-");
        assert_eq!(empty.size, 0);
        assert_eq!(empty.loading(), Some(0.0));
        assert_eq!(empty.total(), Some(0.0));
    }

    #[test]
    fn test_sized_record_serializes_without_timing_keys() {
        let record = MeasurementRecord::sized("dist/index.js", 110894);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({"name": "dist/index.js", "size": 110894}));
    }

    #[test]
    fn test_timed_record_serializes_flat() {
        let record = MeasurementRecord::timed("dist/index.js", 10, 1.5, 0.25);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["loading"], 1.5);
        assert_eq!(json["running"], 0.25);
        assert_eq!(json["total"], 1.75);
    }

    #[test]
    fn test_record_without_timing_deserializes_as_untimed() {
        let record: MeasurementRecord =
            serde_json::from_str(r#"{"name":"a.js","size":12}"#).unwrap();
        assert!(!record.is_timed());
        assert_eq!(record.total(), None);
    }

    #[test]
    fn test_record_with_timing_deserializes_as_timed() {
        let record: MeasurementRecord = serde_json::from_str(
            r#"{"name":"a.js","size":12,"loading":1,"running":0.5,"total":1.5}"#,
        )
        .unwrap();
        assert_eq!(record.timing, Some(Timing { loading: 1.0, running: 0.5, total: 1.5 }));
    }
}
