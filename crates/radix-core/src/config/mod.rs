pub mod defaults;
mod observability_config;
mod packing_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use observability_config::ObservabilityConfig;
pub use packing_config::{PackingConfig, Strategy};

use crate::errors::{ConfigError, RadixResult};

/// Top-level configuration, one section per subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RadixConfig {
    pub packing: PackingConfig,
    pub observability: ObservabilityConfig,
}

impl RadixConfig {
    /// Parse from a TOML string. Missing sections and fields take defaults.
    pub fn from_toml(input: &str) -> RadixResult<Self> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> RadixResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    pub fn validate(&self) -> RadixResult<()> {
        if self.packing.capacity().is_err() {
            return Err(ConfigError::InvalidValue {
                field: "packing.word_bits".to_string(),
                reason: format!("must be in 1..=64, got {}", self.packing.word_bits),
            }
            .into());
        }
        Ok(())
    }
}
