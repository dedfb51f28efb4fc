use std::path::Path;

use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::errors::SizeLimitError;

/// Append `key=value` lines to a GitHub Actions step output file.
pub async fn append_step_outputs(path: &Path, outputs: &[(&str, String)]) -> Result<(), SizeLimitError> {
    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;

    let mut text = String::new();
    for (key, value) in outputs {
        text.push_str(&format!("{}={}\n", key, value));
    }
    file.write_all(text.as_bytes()).await?;
    file.flush().await?;

    debug!(path = %path.display(), count = outputs.len(), "Step outputs written");
    Ok(())
}

/// Write `content` to `path`, or to stdout when no path is given.
pub async fn emit(path: Option<&str>, content: &str) -> Result<(), SizeLimitError> {
    match path {
        Some(path) => {
            tokio::fs::write(path, content).await?;
            debug!(path, "Report written");
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(content.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_append_step_outputs_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("github_output");
        tokio::fs::write(&path, "existing=1\n").await.unwrap();

        append_step_outputs(&path, &[("should-comment", "true".into()), ("mode", "size".into())])
            .await
            .unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, "existing=1\nshould-comment=true\nmode=size\n");
    }

    #[tokio::test]
    async fn test_emit_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("body.md");
        emit(path.to_str(), "## report").await.unwrap();
        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), "## report");
    }
}
