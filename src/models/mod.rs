//! Shared types used across all modules.
//!
//! The configuration tree ([`Node`]) and the manifest record that wraps it.
//! Other modules import from here rather than reaching into each other's
//! internals.

pub mod manifest;
pub mod node;

pub use manifest::Manifest;
pub use node::{Mapping, Node, NodeKind, Scalar};
