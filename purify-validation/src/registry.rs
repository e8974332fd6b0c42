//! Validator registry
//!
//! Maps rule names to validator functions. A [`Registry`] can be built in
//! isolation (handy in tests), and one process-wide instance backs
//! [`crate::validate`] and [`crate::Validate::validate`].

use crate::{ValidationConfig, validators};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A validator: `(value, param)` to an error message, empty when valid.
pub type ValidatorFn = Arc<dyn Fn(&str, &str) -> String + Send + Sync>;

/// Process-wide registry, bootstrapped from the environment on first use.
static GLOBAL: Lazy<Registry> =
    Lazy::new(|| Registry::from_config(&ValidationConfig::from_env()));

/// Registry of named validators.
///
/// Registration and lookup may overlap across threads; the map sits behind a
/// read-write lock and validators are cloned out before they run.
pub struct Registry {
    validators: RwLock<HashMap<String, ValidatorFn>>,
    pub(crate) warn_unknown_rules: bool,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            validators: RwLock::new(HashMap::new()),
            warn_unknown_rules: false,
        }
    }

    /// Create a registry holding the built-in validators
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        validators::register_builtins(&registry);
        registry
    }

    /// Create a registry as described by a configuration
    pub fn from_config(config: &ValidationConfig) -> Self {
        let mut registry = Self::new();
        registry.warn_unknown_rules = config.warn_unknown_rules;
        if config.builtins {
            validators::register_builtins(&registry);
        }
        registry
    }

    /// Register a validator under `name`.
    ///
    /// An existing validator with the same name is replaced.
    pub fn register<F>(&self, name: impl Into<String>, validator: F)
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        let name = name.into();
        let previous = self
            .validators
            .write()
            .insert(name.clone(), Arc::new(validator));
        if previous.is_some() {
            tracing::debug!(rule = %name, "Replaced registered validator");
        }
    }

    /// Look up the validator registered under `name`
    pub fn lookup(&self, name: &str) -> Option<ValidatorFn> {
        self.validators.read().get(name).cloned()
    }

    /// Check if a validator is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.validators.read().contains_key(name)
    }

    /// Number of registered validators
    pub fn len(&self) -> usize {
        self.validators.read().len()
    }

    /// Check if no validators are registered
    pub fn is_empty(&self) -> bool {
        self.validators.read().is_empty()
    }

    /// Registered rule names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.validators.read().keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("validators", &self.names())
            .field("warn_unknown_rules", &self.warn_unknown_rules)
            .finish()
    }
}

/// Get the process-wide registry
pub fn global() -> &'static Registry {
    &GLOBAL
}

/// Initialize the process-wide registry.
///
/// This happens on first use anyway; call it to bootstrap eagerly, e.g.
/// before spawning worker threads.
pub fn init() {
    Lazy::force(&GLOBAL);
}

/// Register a validator in the process-wide registry
pub fn register_validator<F>(name: impl Into<String>, validator: F)
where
    F: Fn(&str, &str) -> String + Send + Sync + 'static,
{
    GLOBAL.register(name, validator);
}
