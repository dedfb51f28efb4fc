use std::path::Path;

use tokio::io::AsyncReadExt;
use tracing::{debug, info, warn};

use crate::errors::SizeLimitError;
use crate::models::Snapshot;

/// Load a previously persisted snapshot.
///
/// A missing file is not an error: the comparison then runs against an
/// empty base and every current artifact reads as added.
pub async fn read_snapshot(path: &Path) -> Result<Option<Snapshot>, SizeLimitError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "Unable to find base results, comparing against an empty baseline");
            debug!(error = %e, "Base results read failed");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let snapshot: Snapshot = serde_json::from_str(&content)?;
    debug!(path = %path.display(), count = snapshot.len(), "Loaded base results");
    Ok(Some(snapshot))
}

/// Persist a snapshot as compact JSON for use as a future baseline.
pub async fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<(), SizeLimitError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    let json = serde_json::to_string(snapshot)?;
    tokio::fs::write(path, json).await?;
    info!(path = %path.display(), count = snapshot.len(), "Results written");
    Ok(())
}

/// Read raw tool output from a file, or from stdin when `source` is `-`.
pub async fn read_input(source: &str) -> Result<String, SizeLimitError> {
    if source == "-" {
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        Ok(buf)
    } else {
        Ok(tokio::fs::read_to_string(source).await?)
    }
}
