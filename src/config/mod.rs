//! Settings loading and layering.
//!
//! Handles the global and explicit settings files, environment variable
//! resolution, and validation once CLI flags are merged in.

pub mod loader;

pub use loader::{ConfigError, FlattenSettings, OutputSettings, Settings};
