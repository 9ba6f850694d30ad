//! The manifest record written to disk.

use std::path::Path;

use serde::Serialize;

use crate::flatten::FlatMap;
use crate::models::Node;

/// Output record: where the config came from, what it contained, and its
/// flattened form.
///
/// Borrows the decoded document; both `generated_from` and the values of
/// `flat` point into the same tree.
#[derive(Debug, Serialize)]
pub struct Manifest<'a> {
    /// The input path as given on the command line.
    pub source_config: String,
    /// The decoded document, unmodified.
    pub generated_from: &'a Node,
    /// Dotted-path view of every leaf in `generated_from`.
    pub flat: FlatMap<'a>,
}

impl<'a> Manifest<'a> {
    pub fn new(source: &Path, document: &'a Node, flat: FlatMap<'a>) -> Self {
        Self {
            source_config: source.display().to_string(),
            generated_from: document,
            flat,
        }
    }
}
