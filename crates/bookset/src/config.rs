//! Engine configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BooksetError, Result};

/// Class that keeps the plain "(Core)" suffix for every subject.
pub const DEFAULT_TERMINAL_CLASS: &str = "PG";

/// Prefix that namespaces manual option ids away from catalogue ids.
pub const DEFAULT_MANUAL_PREFIX: &str = "manual-";

/// Configuration for derivation and manual subject handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Class exempt from the Skill Book and unsuffixed naming rules.
    pub terminal_class: String,

    /// Prefix given to the type id of every manually added option.
    pub manual_prefix: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            terminal_class: DEFAULT_TERMINAL_CLASS.to_string(),
            manual_prefix: DEFAULT_MANUAL_PREFIX.to_string(),
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the terminal class name.
    pub fn with_terminal_class(mut self, class_name: impl Into<String>) -> Self {
        self.terminal_class = class_name.into();
        self
    }

    /// Set the manual option prefix.
    pub fn with_manual_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.manual_prefix = prefix.into();
        self
    }

    /// Whether `class_name` is the terminal class.
    pub fn is_terminal_class(&self, class_name: &str) -> bool {
        self.terminal_class == class_name
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| BooksetError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: EngineConfig = serde_json::from_str(&content).map_err(|e| {
            BooksetError::Config(format!("Failed to parse '{}': {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the naming rules cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.manual_prefix.trim().is_empty() {
            return Err(BooksetError::Config(
                "manual_prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
