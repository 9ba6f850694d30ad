//! Clap argument types and settings overrides.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use config_manifest::config::Settings;
use config_manifest::flatten::RootPolicy;

/// Flatten a YAML configuration into a reusable JSON manifest.
#[derive(Parser, Debug)]
#[command(
    name = config_manifest::constants::APP_NAME,
    version = config_manifest::constants::VERSION,
)]
pub struct Cli {
    /// YAML configuration file to read.
    #[arg(long, value_name = "PATH")]
    pub config: PathBuf,

    /// Where to write the JSON manifest. Parent directories are created.
    #[arg(long, value_name = "PATH")]
    pub out: PathBuf,

    /// String placed between nested keys (default: ".").
    #[arg(long)]
    pub separator: Option<String>,

    /// How to treat a document whose root is not a mapping (default: reject).
    #[arg(long, value_enum)]
    pub root: Option<RootPolicy>,

    /// Spaces per indentation level in the manifest (default: 2).
    #[arg(long)]
    pub indent: Option<usize>,

    /// Additional settings file (TOML).
    #[arg(long, value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Log more detail to stderr (repeatable).
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

impl Cli {
    /// Apply flags that were given on top of the loaded settings.
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(ref separator) = self.separator {
            settings.flatten.separator = separator.clone();
        }
        if let Some(root) = self.root {
            settings.flatten.root = root;
        }
        if let Some(indent) = self.indent {
            settings.output.indent = indent;
        }
    }
}
