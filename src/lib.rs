//! config-manifest: flatten a YAML configuration into a JSON manifest
//! (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod document;
pub mod env;
pub mod flatten;
pub mod generator;
pub mod logging;
pub mod models;
pub mod output;
