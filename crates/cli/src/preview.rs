//! Opening generated tools in the default browser

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;
use url::Url;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("Cannot build a file URL for {path}")]
    InvalidPath { path: PathBuf },

    #[error("Failed to open {url}: {source}")]
    Launch {
        url: Url,
        #[source]
        source: std::io::Error,
    },
}

/// `file://` URL for an absolute path
pub fn file_url(path: &Path) -> Result<Url, PreviewError> {
    Url::from_file_path(path).map_err(|_| PreviewError::InvalidPath {
        path: path.to_path_buf(),
    })
}

/// Ask the host to open `path` in its default browser
pub fn open_in_browser(path: &Path) -> Result<Url, PreviewError> {
    let url = file_url(path)?;
    info!("Opening {} in browser", url);
    open::that(url.as_str()).map_err(|source| PreviewError::Launch {
        url: url.clone(),
        source,
    })?;
    Ok(url)
}
