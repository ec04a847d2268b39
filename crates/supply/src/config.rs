//! Deployment configuration: which code the RC lock and sUDT scripts run.

use rc_lock_types::ScriptTemplate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// The scripts an [`RcSupplyLockHelper`][crate::RcSupplyLockHelper] fills in.
///
/// ```yaml
/// rc_lock:
///   code_hash: "0x..."
///   hash_type: type
/// sudt_type:
///   code_hash: "0x..."
///   hash_type: type
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HelperConfig {
    /// The RC lock script code.
    pub rc_lock: ScriptTemplate,
    /// The sUDT type script code.
    pub sudt_type: ScriptTemplate,
}

/// Failed to load a [`HelperConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The config is not valid YAML or is missing fields.
    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl HelperConfig {
    /// Parse a config from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read and parse a YAML config file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Render the config as YAML.
    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}
