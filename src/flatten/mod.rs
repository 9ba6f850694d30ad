//! Key-path flattening of configuration trees.
//!
//! Walks nested mappings depth-first and records every leaf under the path
//! of keys leading to it, joined by a separator:
//!
//! ```text
//! a:                 a.b: 1
//!   b: 1      ──▶    a.c: 2
//!   c: 2             d: 3
//! d: 3
//! ```
//!
//! Lists are leaves. A list of mappings shows up verbatim under a single
//! key rather than being descended into.

use clap::ValueEnum;
use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::constants::DEFAULT_SEPARATOR;
use crate::models::{Mapping, Node, NodeKind};

/// Flattened view of a document: dotted path to borrowed leaf.
///
/// Entries appear in depth-first, insertion order of the source tree.
pub type FlatMap<'a> = IndexMap<String, &'a Node>;

/// Errors produced while flattening.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlattenError {
    #[error("document root must be a mapping, found a {kind}")]
    InvalidRootKind { kind: NodeKind },
}

/// What to do when the document root is not a mapping.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum,
    strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RootPolicy {
    /// Fail with [`FlattenError::InvalidRootKind`].
    #[default]
    Reject,
    /// Record the whole document as one leaf under the empty key.
    Leaf,
}

/// Flattening parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenOptions {
    pub separator: String,
    pub root_policy: RootPolicy,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            root_policy: RootPolicy::Reject,
        }
    }
}

/// Flatten `root` with the default separator, rejecting non-mapping roots.
pub fn flatten(root: &Node) -> Result<FlatMap<'_>, FlattenError> {
    flatten_with(root, &FlattenOptions::default())
}

/// Flatten `root` according to `options`.
pub fn flatten_with<'a>(
    root: &'a Node,
    options: &FlattenOptions,
) -> Result<FlatMap<'a>, FlattenError> {
    let mut flat = FlatMap::new();
    match root {
        Node::Mapping(mapping) => flatten_into(mapping, "", &options.separator, &mut flat),
        other => match options.root_policy {
            RootPolicy::Reject => {
                return Err(FlattenError::InvalidRootKind { kind: other.kind() });
            }
            RootPolicy::Leaf => {
                flat.insert(String::new(), other);
            }
        },
    }
    Ok(flat)
}

/// Record every leaf below `mapping` into `flat`, prefixing paths with
/// `prefix` (no prefix when empty).
///
/// A path already present in `flat` is overwritten in place.
pub fn flatten_into<'a>(
    mapping: &'a Mapping,
    prefix: &str,
    separator: &str,
    flat: &mut FlatMap<'a>,
) {
    for (key, value) in mapping {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}{separator}{key}")
        };

        match value {
            Node::Mapping(child) => flatten_into(child, &path, separator, flat),
            leaf => {
                flat.insert(path, leaf);
            }
        }
    }
}

/// Rebuild a nested tree from a flat map by splitting keys on `separator`.
///
/// Inverse of [`flatten`] for trees whose keys do not contain the separator
/// and that have no empty nested mappings (those produce no flat entries).
/// When a path runs through an existing leaf, the leaf is replaced by a
/// mapping.
pub fn unflatten(flat: &FlatMap<'_>, separator: &str) -> Node {
    let mut root = Mapping::new();

    for (path, leaf) in flat {
        let mut parts: Vec<&str> = if separator.is_empty() {
            vec![path.as_str()]
        } else {
            path.split(separator).collect()
        };
        let Some(last) = parts.pop() else {
            continue;
        };

        let mut cursor = &mut root;
        for part in parts {
            let slot = cursor
                .entry(part.to_string())
                .or_insert_with(Node::empty_mapping);
            if !slot.is_mapping() {
                *slot = Node::empty_mapping();
            }
            cursor = match slot {
                Node::Mapping(child) => child,
                _ => unreachable!("slot was just made a mapping"),
            };
        }
        cursor.insert(last.to_string(), (*leaf).clone());
    }

    Node::Mapping(root)
}
