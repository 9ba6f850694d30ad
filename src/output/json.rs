//! JSON manifest renderer.
//!
//! Pretty-prints with a configurable number of spaces per level and a
//! trailing newline.

use serde::{Serialize, ser::Error as _};
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::constants::DEFAULT_INDENT;
use crate::models::Manifest;

/// Indented JSON renderer.
#[derive(Debug, Clone, Copy)]
pub struct JsonRenderer {
    indent: usize,
}

impl JsonRenderer {
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }

    pub fn render(&self, manifest: &Manifest<'_>) -> Result<String, serde_json::Error> {
        let indent = vec![b' '; self.indent];
        let mut buf = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
        manifest.serialize(&mut serializer)?;
        buf.push(b'\n');

        String::from_utf8(buf).map_err(serde_json::Error::custom)
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT)
    }
}
