// Registry configuration

use crate::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Environment variable toggling the built-in validators
pub const ENV_BUILTINS: &str = "PURIFY_BUILTINS";

/// Environment variable toggling warnings for unknown rules
pub const ENV_WARN_UNKNOWN_RULES: &str = "PURIFY_WARN_UNKNOWN_RULES";

/// How a [`crate::Registry`] is bootstrapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Register the built-in validators
    pub builtins: bool,

    /// Log skipped unknown rules at `warn` instead of `trace`
    pub warn_unknown_rules: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            builtins: true,
            warn_unknown_rules: false,
        }
    }
}

impl ValidationConfig {
    /// Create config from environment variables.
    ///
    /// Unset or unrecognized values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Create config from a variable lookup
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            builtins: flag(&lookup, ENV_BUILTINS).unwrap_or(defaults.builtins),
            warn_unknown_rules: flag(&lookup, ENV_WARN_UNKNOWN_RULES)
                .unwrap_or(defaults.warn_unknown_rules),
        }
    }

    /// Parse config from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::LoadError(format!(
                "File not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

fn flag<F>(lookup: &F, key: &str) -> Option<bool>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key)?;
    match value.to_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        other => {
            tracing::warn!(key, value = other, "Ignoring unrecognized boolean");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ValidationConfig::default();
        assert!(config.builtins);
        assert!(!config.warn_unknown_rules);
        assert_eq!(ValidationConfig::from_vars(vars(&[])), config);
    }

    #[test]
    fn test_from_vars() {
        let config = ValidationConfig::from_vars(vars(&[
            ("PURIFY_BUILTINS", "0"),
            ("PURIFY_WARN_UNKNOWN_RULES", "TRUE"),
        ]));
        assert!(!config.builtins);
        assert!(config.warn_unknown_rules);
    }

    #[test]
    fn test_unrecognized_value_keeps_default() {
        let config = ValidationConfig::from_vars(vars(&[("PURIFY_BUILTINS", "maybe")]));
        assert!(config.builtins);
    }

    #[test]
    fn test_from_toml_str() {
        let config = ValidationConfig::from_toml_str("warn_unknown_rules = true").unwrap();
        assert!(config.builtins);
        assert!(config.warn_unknown_rules);
    }

    #[test]
    fn test_from_toml_str_rejects_bad_types() {
        let err = ValidationConfig::from_toml_str("builtins = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ValidationConfig::load("/nonexistent/purify.toml").unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }

    #[test]
    fn test_load_file() {
        let path =
            std::env::temp_dir().join(format!("purify-config-{}.toml", std::process::id()));
        std::fs::write(&path, "builtins = false\n").unwrap();

        let config = ValidationConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(!config.builtins);
    }
}
