use serde::{Deserialize, Serialize};

use crate::base::Capacity;
use crate::constants::WORD_BITS;
use crate::errors::RadixResult;

/// Which packer drives a [`PackingConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Longest chunks, single streaming pass.
    Max,
    /// Highest-density prefix at every step.
    #[default]
    Dense,
}

/// Packing subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PackingConfig {
    /// Target word width; chunk products stay below `2^word_bits`.
    pub word_bits: u32,
    /// Packer used by the engine.
    pub strategy: Strategy,
}

impl PackingConfig {
    pub fn capacity(&self) -> RadixResult<Capacity> {
        Capacity::new(self.word_bits)
    }
}

impl Default for PackingConfig {
    fn default() -> Self {
        Self {
            word_bits: WORD_BITS,
            strategy: Strategy::default(),
        }
    }
}
