//! The decoded configuration tree.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered string-keyed children of a mapping node.
pub type Mapping = IndexMap<String, Node>;

/// A node of a configuration document.
///
/// Interior nodes are always [`Node::Mapping`]. Lists are leaves: they are
/// never descended into by the flattener, even when they hold mappings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Mapping(Mapping),
    List(Vec<Node>),
    Scalar(Scalar),
}

/// A scalar leaf value.
///
/// Serializes to the matching JSON primitive. Non-finite floats become
/// `null` on the way out, since JSON has no spelling for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    String(String),
}

/// Shape of a node, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum NodeKind {
    Mapping,
    List,
    Scalar,
}

impl Node {
    /// An empty mapping, the decoded form of an empty document.
    pub fn empty_mapping() -> Self {
        Node::Mapping(Mapping::new())
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Mapping(_) => NodeKind::Mapping,
            Node::List(_) => NodeKind::List,
            Node::Scalar(_) => NodeKind::Scalar,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Node::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Node::Mapping(_))
    }
}

impl From<Scalar> for Node {
    fn from(scalar: Scalar) -> Self {
        Node::Scalar(scalar)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Scalar(Scalar::String(value.to_string()))
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Scalar(Scalar::Integer(value))
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Scalar(Scalar::Bool(value))
    }
}
