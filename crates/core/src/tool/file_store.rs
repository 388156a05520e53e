//! Writing extracted documents to disk

use std::path::Path;
use tracing::{debug, info};

use super::model::OutputArtifact;
use crate::{Error, Result};

/// Write `document` as UTF-8 to `path` and report where it landed.
///
/// Relative paths resolve against the current directory. Missing parent
/// directories are not created.
pub async fn write_document(path: impl AsRef<Path>, document: &str) -> Result<OutputArtifact> {
    let path = path.as_ref();
    let absolute = std::path::absolute(path)?;

    debug!("Writing {} bytes to {:?}", document.len(), absolute);

    tokio::fs::write(&absolute, document.as_bytes())
        .await
        .map_err(|e| Error::write_failed(&absolute, e))?;

    info!("Wrote document to {:?}", absolute);

    Ok(OutputArtifact {
        path: absolute,
        size: document.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_document_reports_absolute_path_and_size() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tool.html");
        let html = "<!DOCTYPE html><html><body>Hi</body></html>";

        let artifact = write_document(&path, html).await.unwrap();

        assert!(artifact.path.is_absolute());
        assert_eq!(artifact.path, path);
        assert_eq!(artifact.size, html.len());
        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), html);
    }

    #[tokio::test]
    async fn test_size_counts_utf8_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("emoji.html");
        let html = "<!DOCTYPE html><html><body>🚀 café</body></html>";

        let artifact = write_document(&path, html).await.unwrap();

        assert_eq!(artifact.size, html.as_bytes().len());
        assert!(artifact.size > html.chars().count());
        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), html);
    }

    #[tokio::test]
    async fn test_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tool.html");
        tokio::fs::write(&path, "old contents that are longer").await.unwrap();

        write_document(&path, "<html></html>").await.unwrap();

        assert_eq!(tokio::fs::read_to_string(&path).await.unwrap(), "<html></html>");
    }

    #[tokio::test]
    async fn test_missing_parent_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("tool.html");

        let err = write_document(&path, "<html></html>").await.unwrap_err();

        match err {
            Error::WriteFailed { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("Expected WriteFailed, got {:?}", other),
        }
        assert!(!path.exists());
    }
}
