use serde::{Deserialize, Serialize};

use radix_core::constants::MIN_BASE;
use radix_core::errors::{RadixError, RadixResult};
use radix_core::IPacker;
use radix_observability::events;
use radix_packing::{DenseStrategy, PackingEngine};

use crate::bits::{baseline_bits, total_bits};
use crate::boundary::self_describing_bits;

/// Bit costs of one base sequence under three storage models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostComparison {
    /// Packer that produced the chunks.
    pub strategy: String,
    /// Number of chunks in the packing.
    pub chunks: usize,
    /// Every base in its own word.
    pub baseline: u64,
    /// Every chunk stored in `bit_length(product)` bits.
    pub packed: u64,
    /// Every chunk stored with its own length encoded alongside its value.
    pub self_describing: u64,
}

impl CostComparison {
    /// `(baseline, packed, self_describing)`.
    pub fn as_tuple(&self) -> (u64, u64, u64) {
        (self.baseline, self.packed, self.self_describing)
    }

    /// Bits saved by packing over the baseline.
    pub fn savings(&self) -> u64 {
        self.baseline.saturating_sub(self.packed)
    }

    /// Extra bits spent when chunks describe their own length.
    pub fn length_overhead(&self) -> i64 {
        self.self_describing as i64 - self.packed as i64
    }
}

/// Compare costs for the bases `start..=end`, packed densely into 64-bit words.
pub fn compare(start: u64, end: u64) -> RadixResult<CostComparison> {
    if start > end {
        return Err(RadixError::InvalidRange {
            start,
            end,
            reason: "start after end".to_string(),
        });
    }
    // Rejected before the range is materialized.
    if (start as u128) < MIN_BASE {
        return Err(RadixError::InvalidBase {
            index: 0,
            base: start as u128,
        });
    }
    let bases: Vec<u128> = (start as u128..=end as u128).collect();
    let engine = PackingEngine::default();
    compare_with(&engine, &DenseStrategy::new(engine.capacity()), &bases)
}

/// Compare costs for `bases` under any packer and word width.
pub fn compare_with(
    engine: &PackingEngine,
    packer: &dyn IPacker,
    bases: &[u128],
) -> RadixResult<CostComparison> {
    let packing = engine.pack_with(packer, bases)?;

    let comparison = CostComparison {
        strategy: packer.name().to_string(),
        chunks: packing.len(),
        baseline: baseline_bits(&packing.bases()),
        packed: total_bits(&packing),
        self_describing: self_describing_bits(&packing),
    };
    events::comparison_completed(
        packer.name(),
        comparison.baseline,
        comparison.packed,
        comparison.self_describing,
    );
    Ok(comparison)
}
