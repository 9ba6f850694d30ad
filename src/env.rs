//! Environment variable access for testability.
//!
//! Production code reads the process environment through [`Env::real()`].
//! Tests build an [`Env::mock()`] from explicit pairs so settings layering
//! can be exercised without mutating global process state.

use std::collections::HashMap;
use std::env::VarError;

/// Environment variable reader.
#[derive(Clone, Debug, Default)]
pub struct Env {
    vars: Option<HashMap<String, String>>,
}

impl Env {
    /// Read from the real process environment.
    pub fn real() -> Self {
        Self { vars: None }
    }

    /// Read only from the given pairs.
    #[cfg(test)]
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            vars: Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        }
    }

    /// Look up `name`. Empty values count as unset, so `FOO=` on the
    /// command line never overrides a lower settings layer.
    pub fn var(&self, name: &str) -> Result<String, VarError> {
        let value = match &self.vars {
            Some(map) => map.get(name).cloned().ok_or(VarError::NotPresent)?,
            None => std::env::var(name)?,
        };
        if value.is_empty() {
            return Err(VarError::NotPresent);
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_env_reads_cargo_manifest_dir() {
        assert!(Env::real().var("CARGO_MANIFEST_DIR").is_ok());
    }

    #[test]
    fn mock_env_only_sees_given_pairs() {
        let env = Env::mock([("CONFIG_MANIFEST_INDENT", "4")]);
        assert_eq!(env.var("CONFIG_MANIFEST_INDENT").unwrap(), "4");
        assert!(env.var("CARGO_MANIFEST_DIR").is_err());
    }

    #[test]
    fn empty_value_counts_as_unset() {
        let env = Env::mock([("CONFIG_MANIFEST_SEPARATOR", "")]);
        assert_eq!(
            env.var("CONFIG_MANIFEST_SEPARATOR"),
            Err(VarError::NotPresent)
        );
    }
}
