//! Settings struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags (applied by the binary)
//! 2. Environment variables
//! 3. `--settings <file>`
//! 4. `~/.config/config-manifest/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::constants::{self, DEFAULT_INDENT, DEFAULT_SEPARATOR, MAX_INDENT};
use crate::env::Env;
use crate::flatten::{FlattenOptions, RootPolicy};

/// Errors during settings loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse settings file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("separator must not be empty")]
    EmptySeparator,

    #[error("indent must be between 1 and {max}, got {0}", max = MAX_INDENT)]
    InvalidIndent(usize),
}

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub flatten: FlattenSettings,
    pub output: OutputSettings,
}

/// How keys are joined and how odd roots are handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenSettings {
    pub separator: String,
    pub root: RootPolicy,
}

impl Default for FlattenSettings {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            root: RootPolicy::default(),
        }
    }
}

/// Manifest formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    pub indent: usize,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }
}

/// One settings file as written on disk. Only keys that are present
/// override lower layers.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SettingsFile {
    flatten: FlattenLayer,
    output: OutputLayer,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FlattenLayer {
    separator: Option<String>,
    root: Option<RootPolicy>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct OutputLayer {
    indent: Option<usize>,
}

impl Settings {
    /// Load settings with proper layering.
    ///
    /// Reads the global settings file, then `explicit` (which must exist
    /// when given), then applies environment variable overrides. The result
    /// is not validated; call [`Settings::validate`] once CLI flags are in.
    pub fn load(explicit: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut settings = Settings::default();

        // Layer 4: global settings
        if let Some(global_path) = Self::global_settings_path(env) {
            if global_path.exists() {
                debug!(path = %global_path.display(), "loading global settings");
                settings.merge(Self::load_file(&global_path)?);
            }
        }

        // Layer 3: explicit settings file
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading settings");
            settings.merge(Self::load_file(path)?);
        }

        // Layer 2: environment variables
        settings.apply_env_vars(env);

        Ok(settings)
    }

    /// Check invariants that every layer could have broken.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.flatten.separator.is_empty() {
            return Err(ConfigError::EmptySeparator);
        }
        if self.output.indent == 0 || self.output.indent > MAX_INDENT {
            return Err(ConfigError::InvalidIndent(self.output.indent));
        }
        Ok(())
    }

    /// Flattener parameters derived from these settings.
    pub fn flatten_options(&self) -> FlattenOptions {
        FlattenOptions {
            separator: self.flatten.separator.clone(),
            root_policy: self.flatten.root,
        }
    }

    fn load_file(path: &Path) -> Result<SettingsFile, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Global settings path: `$CONFIG_MANIFEST_CONFIG_HOME/config.toml` if
    /// set, otherwise under the platform config directory.
    fn global_settings_path(env: &Env) -> Option<PathBuf> {
        let dir = match env.var(constants::ENV_CONFIG_HOME) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => dirs::config_dir()?.join(constants::CONFIG_DIR),
        };
        Some(dir.join(constants::SETTINGS_FILENAME))
    }

    fn merge(&mut self, layer: SettingsFile) {
        if let Some(separator) = layer.flatten.separator {
            self.flatten.separator = separator;
        }
        if let Some(root) = layer.flatten.root {
            self.flatten.root = root;
        }
        if let Some(indent) = layer.output.indent {
            self.output.indent = indent;
        }
    }

    /// Apply environment variable overrides. Unparseable values are
    /// ignored with a warning.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(constants::ENV_SEPARATOR) {
            self.flatten.separator = val;
        }
        if let Ok(val) = env.var(constants::ENV_ROOT) {
            match val.parse::<RootPolicy>() {
                Ok(root) => self.flatten.root = root,
                Err(_) => warn!("ignoring invalid {} value: {val}", constants::ENV_ROOT),
            }
        }
        if let Ok(val) = env.var(constants::ENV_INDENT) {
            match val.trim().parse::<usize>() {
                Ok(indent) => self.output.indent = indent,
                Err(_) => warn!("ignoring invalid {} value: {val}", constants::ENV_INDENT),
            }
        }
    }
}
