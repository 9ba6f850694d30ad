//! Manifest output: rendering and writing to disk.

pub mod json;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::models::Manifest;

pub use json::JsonRenderer;

/// Errors while writing the manifest.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Render `manifest` and write it to `path`, creating missing parent
/// directories. An existing file is overwritten.
pub fn write_manifest(
    manifest: &Manifest<'_>,
    path: &Path,
    renderer: &JsonRenderer,
) -> Result<(), OutputError> {
    let rendered = renderer.render(manifest)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    std::fs::write(path, &rendered).map_err(|e| OutputError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), bytes = rendered.len(), "wrote manifest");

    Ok(())
}
