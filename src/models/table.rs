use serde::Serialize;

pub const SIZE_RESULTS_HEADER: [&str; 2] = ["Path", "Size"];

pub const TIME_RESULTS_HEADER: [&str; 5] = [
    "Path",
    "Size",
    "Loading time (3g)",
    "Running time (snapdragon)",
    "Total time",
];

/// Shape of a comparison report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    /// Sizes only.
    Size,
    /// Sizes plus loading/running/total time estimates.
    Time,
}

impl ReportMode {
    pub fn header(&self) -> Vec<String> {
        let cells: &[&str] = match self {
            Self::Size => &SIZE_RESULTS_HEADER,
            Self::Time => &TIME_RESULTS_HEADER,
        };
        cells.iter().map(|c| c.to_string()).collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Size => "size",
            Self::Time => "time",
        }
    }
}

impl std::fmt::Display for ReportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A header row followed by one row per artifact, every cell already
/// rendered as text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportTable {
    pub mode: ReportMode,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    pub fn new(mode: ReportMode) -> Self {
        Self {
            mode,
            header: mode.header(),
            rows: Vec::new(),
        }
    }

    /// Header first, then data rows.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        std::iter::once(self.header.clone())
            .chain(self.rows.iter().cloned())
            .collect()
    }
}
