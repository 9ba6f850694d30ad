//! YAML input decoding.
//!
//! Uses `serde_yaml_ng` to parse the file into its generic value tree, then
//! converts that into a [`Node`] with string keys. Merge keys (`<<: *base`)
//! are resolved first. An empty document (or a bare `null`) decodes to an
//! empty mapping.

use std::path::{Path, PathBuf};

use serde_yaml_ng::Value;
use thiserror::Error;
use tracing::debug;

use crate::models::{Mapping, Node, NodeKind, Scalar};

/// Errors while loading the input document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Config not found: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: serde_yaml_ng::Error,
    },

    #[error("unsupported {kind} used as a mapping key in {}", path.display())]
    UnsupportedKey { path: PathBuf, kind: NodeKind },

    #[error("duplicate key {key:?} in {}", path.display())]
    DuplicateKey { path: PathBuf, key: String },
}

/// Conversion failures, before the path is attached.
#[derive(Debug)]
enum ConvertError {
    UnsupportedKey(NodeKind),
    DuplicateKey(String),
}

impl ConvertError {
    fn at(self, path: &Path) -> DocumentError {
        let path = path.to_path_buf();
        match self {
            Self::UnsupportedKey(kind) => DocumentError::UnsupportedKey { path, kind },
            Self::DuplicateKey(key) => DocumentError::DuplicateKey { path, key },
        }
    }
}

/// Read and decode the YAML document at `path`.
pub fn load_document(path: &Path) -> Result<Node, DocumentError> {
    if !path.exists() {
        return Err(DocumentError::MissingInput {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| DocumentError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "read config");

    parse_document(&content, path)
}

/// Decode YAML `content`. `path` is only used in error messages.
pub fn parse_document(content: &str, path: &Path) -> Result<Node, DocumentError> {
    let malformed = |e: serde_yaml_ng::Error| DocumentError::Malformed {
        path: path.to_path_buf(),
        source: e,
    };
    let mut value: Value = serde_yaml_ng::from_str(content).map_err(malformed)?;
    value.apply_merge().map_err(malformed)?;

    match value {
        Value::Null => Ok(Node::empty_mapping()),
        other => convert(other).map_err(|e| e.at(path)),
    }
}

/// Convert a YAML value into a node. Keys that only become equal once
/// stringified (`1` and `"1"`) are rejected.
fn convert(value: Value) -> Result<Node, ConvertError> {
    let node = match value {
        Value::Null => Node::Scalar(Scalar::Null),
        Value::Bool(b) => Node::Scalar(Scalar::Bool(b)),
        Value::Number(n) => Node::Scalar(number(&n)),
        Value::String(s) => Node::Scalar(Scalar::String(s)),
        Value::Sequence(items) => Node::List(
            items
                .into_iter()
                .map(convert)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Mapping(entries) => {
            let mut mapping = Mapping::with_capacity(entries.len());
            for (key, value) in entries {
                let key = key_string(key)?;
                if mapping.contains_key(&key) {
                    return Err(ConvertError::DuplicateKey(key));
                }
                mapping.insert(key, convert(value)?);
            }
            Node::Mapping(mapping)
        }
        // Tags carry no meaning for the manifest; keep the tagged value.
        Value::Tagged(tagged) => convert(tagged.value)?,
    };
    Ok(node)
}

fn number(n: &serde_yaml_ng::Number) -> Scalar {
    if let Some(i) = n.as_i64() {
        Scalar::Integer(i)
    } else if let Some(u) = n.as_u64() {
        Scalar::Unsigned(u)
    } else {
        Scalar::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

/// Scalar keys are spelled the way a JSON object key would be.
fn key_string(key: Value) -> Result<String, ConvertError> {
    match key {
        Value::String(s) => Ok(s),
        Value::Null => Ok("null".to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Tagged(tagged) => key_string(tagged.value),
        Value::Sequence(_) => Err(ConvertError::UnsupportedKey(NodeKind::List)),
        Value::Mapping(_) => Err(ConvertError::UnsupportedKey(NodeKind::Mapping)),
    }
}
