use radix_core::config::{PackingConfig, Strategy};
use radix_core::errors::RadixResult;
use radix_core::{validate_bases, Capacity, IPacker, Packing};
use radix_observability::events;

use crate::dense::DenseStrategy;
use crate::max::MaxStrategy;

/// Packs finite base sequences with the strategy and word width from config.
///
/// Runs the strategy through [`IPacker`] to completion and logs one event per
/// chunk plus a summary per packing.
pub struct PackingEngine {
    strategy: Strategy,
    capacity: Capacity,
}

impl PackingEngine {
    pub fn new(config: &PackingConfig) -> RadixResult<Self> {
        Ok(Self {
            strategy: config.strategy,
            capacity: config.capacity()?,
        })
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// The configured strategy, bound to this engine's capacity.
    pub fn packer(&self) -> Box<dyn IPacker> {
        match self.strategy {
            Strategy::Max => Box::new(MaxStrategy::new(self.capacity)),
            Strategy::Dense => Box::new(DenseStrategy::new(self.capacity)),
        }
    }

    /// Validate and pack `bases` with the configured strategy.
    pub fn pack(&self, bases: &[u128]) -> RadixResult<Packing> {
        let packer = self.packer();
        self.pack_with(packer.as_ref(), bases)
    }

    /// Validate and pack `bases` with an explicit strategy.
    pub fn pack_with(&self, packer: &dyn IPacker, bases: &[u128]) -> RadixResult<Packing> {
        events::packing_started(packer.name(), bases.len(), self.capacity.word_bits());

        let validated = validate_bases(bases, self.capacity).inspect_err(|e| {
            events::input_rejected(packer.name(), &e.to_string());
        })?;
        let packing = packer.pack_all(&validated)?;

        let mut offset = 0;
        for chunk in &packing {
            events::chunk_emitted(
                packer.name(),
                offset,
                chunk.len(),
                chunk.product(),
                chunk.bit_cost(),
            );
            offset += chunk.len();
        }
        events::packing_completed(
            packer.name(),
            packing.len(),
            packing.coverage(),
            packing.total_bits(),
        );
        Ok(packing)
    }
}

impl Default for PackingEngine {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            capacity: Capacity::default(),
        }
    }
}
