//! Configuration system for Parafam.
//!
//! Load factory configuration from TOML or YAML files to control the
//! default handling of construction calls without code changes. The
//! defaults mirror the protocol: condition checking on, dry-run off,
//! diagnostics emitted.
//!
//! Explicit per-call control options always override configured defaults.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use parafam_config::FactoryConfig;
//!
//! let config = FactoryConfig::from_toml_str(r#"
//!     [construction]
//!     conditioncheck = false
//!
//!     [diagnostics]
//!     enabled = false
//! "#).unwrap();
//!
//! assert!(!config.construction.conditioncheck);
//! assert!(!config.diagnostics.enabled);
//! ```
//!
//! Use default config when the file is missing:
//!
//! ```
//! use parafam_config::FactoryConfig;
//!
//! let config = FactoryConfig::load("factory.toml").unwrap_or_default();
//! assert!(config.construction.conditioncheck);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Main factory configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FactoryConfig {
    /// Default control options for construction calls.
    #[serde(default)]
    pub construction: ConstructionDefaults,

    /// Classification diagnostics configuration.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl FactoryConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the default for condition checking.
    pub fn with_conditioncheck(mut self, enabled: bool) -> Self {
        self.construction.conditioncheck = enabled;
        self
    }

    /// Sets the default for dry-run construction.
    pub fn with_compute_args_only(mut self, enabled: bool) -> Self {
        self.construction.compute_args_only = enabled;
        self
    }

    /// Enables or disables classification diagnostics.
    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics.enabled = enabled;
        self
    }
}

/// Default control options applied when a call does not pass them
/// explicitly.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ConstructionDefaults {
    /// Whether domain parameters are classified before construction.
    #[serde(default = "default_true")]
    pub conditioncheck: bool,

    /// Whether calls short-circuit to normalized parameters.
    #[serde(default)]
    pub compute_args_only: bool,
}

impl Default for ConstructionDefaults {
    fn default() -> Self {
        Self {
            conditioncheck: true,
            compute_args_only: false,
        }
    }
}

/// Classification diagnostics configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DiagnosticsConfig {
    /// Whether advisory classification messages are emitted at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_true() -> bool {
    true
}
