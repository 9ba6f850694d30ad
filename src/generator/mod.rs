//! End-to-end manifest generation: load → flatten → assemble → write.
//!
//! Returns a structured result instead of exiting; the binary maps
//! [`GenerateError::exit_code`] onto the process status.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::config::Settings;
use crate::constants::{EXIT_FAILURE, EXIT_MISSING_INPUT};
use crate::document::{self, DocumentError};
use crate::flatten::{self, FlattenError, FlattenOptions};
use crate::models::{Manifest, Node};
use crate::output::{self, JsonRenderer, OutputError};

/// Errors from any generation step.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("cannot flatten {}: {source}", path.display())]
    Flatten {
        path: PathBuf,
        source: FlattenError,
    },

    #[error(transparent)]
    Output(#[from] OutputError),
}

impl GenerateError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            GenerateError::Document(DocumentError::MissingInput { .. }) => EXIT_MISSING_INPUT,
            _ => EXIT_FAILURE,
        }
    }
}

/// Assemble the manifest record for an already decoded document.
pub fn build_manifest<'a>(
    source: &Path,
    document: &'a Node,
    options: &FlattenOptions,
) -> Result<Manifest<'a>, FlattenError> {
    let flat = flatten::flatten_with(document, options)?;
    Ok(Manifest::new(source, document, flat))
}

/// Generate the manifest for `config_path` and write it to `out_path`.
///
/// Nothing is written when the input is missing or cannot be decoded or
/// flattened. Returns the path that was written.
pub fn generate(
    config_path: &Path,
    out_path: &Path,
    settings: &Settings,
) -> Result<PathBuf, GenerateError> {
    let document = document::load_document(config_path)?;
    debug!(kind = %document.kind(), "decoded config");

    let manifest = build_manifest(config_path, &document, &settings.flatten_options())
        .map_err(|e| GenerateError::Flatten {
            path: config_path.to_path_buf(),
            source: e,
        })?;
    debug!(entries = manifest.flat.len(), "flattened config");

    output::write_manifest(
        &manifest,
        out_path,
        &JsonRenderer::new(settings.output.indent),
    )?;
    info!(
        source = %config_path.display(),
        out = %out_path.display(),
        entries = manifest.flat.len(),
        "manifest written"
    );

    Ok(out_path.to_path_buf())
}
