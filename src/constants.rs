//! App-wide constants.
//!
//! Centralises the tool name, settings paths, environment variable names,
//! defaults and exit codes so a rename only requires changing this file.

/// Display name of the tool.
pub const APP_NAME: &str = "config-manifest";

/// Crate version, reported by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory name under `~/.config/` for global settings.
pub const CONFIG_DIR: &str = "config-manifest";

/// Settings filename inside the settings directory.
pub const SETTINGS_FILENAME: &str = "config.toml";

/// Path separator used when joining nested keys.
pub const DEFAULT_SEPARATOR: &str = ".";

/// Spaces per indentation level in the written manifest.
pub const DEFAULT_INDENT: usize = 2;

/// Upper bound accepted for `indent`.
pub const MAX_INDENT: usize = 16;

// ── Exit codes ──────────────────────────────────────────────────────

/// Any failure other than a missing input file.
pub const EXIT_FAILURE: u8 = 1;

/// The input configuration file does not exist.
pub const EXIT_MISSING_INPUT: u8 = 2;

// ── Environment variable names ──────────────────────────────────────

pub const ENV_LOG: &str = "CONFIG_MANIFEST_LOG";
pub const ENV_CONFIG_HOME: &str = "CONFIG_MANIFEST_CONFIG_HOME";
pub const ENV_SEPARATOR: &str = "CONFIG_MANIFEST_SEPARATOR";
pub const ENV_ROOT: &str = "CONFIG_MANIFEST_ROOT";
pub const ENV_INDENT: &str = "CONFIG_MANIFEST_INDENT";
