use std::iter::FusedIterator;

use radix_core::errors::RadixResult;
use radix_core::{density, validate_bases, Capacity, Chunk, Density, IPacker};
use radix_observability::events;

use crate::max::leading_base_error;
use crate::prefix::fitting_prefixes;

const NAME: &str = "dense";

/// Validate `bases` and pack them into highest-density 64-bit chunks.
pub fn pack_dense(bases: &[u128]) -> RadixResult<DensePacker> {
    DensePacker::with_capacity(bases, Capacity::WORD64)
}

/// Among all fitting prefixes of `remaining`, the length whose product has the
/// greatest density. Ties keep the shorter prefix. Returns `(len, product)`,
/// with `len == 0` only when not even the first base fits.
fn densest_prefix(remaining: &[u64], capacity: Capacity) -> (usize, u64) {
    let mut best = (Density::ZERO, 0, 0);
    for (len, product) in fitting_prefixes(remaining, capacity) {
        // A zero product never wins against the sentinel.
        let candidate = density(product).unwrap_or(Density::ZERO);
        if candidate > best.0 {
            best = (candidate, len, product);
        }
    }
    (best.1, best.2)
}

/// Density-optimal packer over a finite, fully validated base sequence.
///
/// Holds the whole sequence and a start offset; each step rescans the
/// remaining suffix for its densest fitting prefix and advances past it.
/// An error ends the packing: it is yielded once and the packer is then
/// exhausted.
#[derive(Debug, Clone)]
pub struct DensePacker {
    bases: Vec<u64>,
    offset: usize,
    capacity: Capacity,
}

impl DensePacker {
    /// Validate every base before packing begins.
    pub fn with_capacity(bases: &[u128], capacity: Capacity) -> RadixResult<Self> {
        let bases = validate_bases(bases, capacity).inspect_err(|e| {
            events::input_rejected(NAME, &e.to_string());
        })?;
        Ok(Self {
            bases,
            offset: 0,
            capacity,
        })
    }

    /// Bases not yet emitted.
    pub fn remaining(&self) -> &[u64] {
        &self.bases[self.offset..]
    }
}

impl Iterator for DensePacker {
    type Item = RadixResult<Chunk>;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.remaining();
        if remaining.is_empty() {
            return None;
        }

        let step = DenseStrategy::new(self.capacity)
            .next_chunk(remaining)
            .map(|(chunk, _)| chunk);
        match step {
            Ok(chunk) => {
                events::chunk_emitted(
                    NAME,
                    self.offset,
                    chunk.len(),
                    chunk.product(),
                    chunk.bit_cost(),
                );
                self.offset += chunk.len();
                Some(Ok(chunk))
            }
            Err(e) => {
                self.offset = self.bases.len();
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for DensePacker {}

/// [`IPacker`] form of the density rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenseStrategy {
    capacity: Capacity,
}

impl DenseStrategy {
    pub fn new(capacity: Capacity) -> Self {
        Self { capacity }
    }
}

impl IPacker for DenseStrategy {
    fn name(&self) -> &'static str {
        NAME
    }

    fn next_chunk<'a>(&self, remaining: &'a [u64]) -> RadixResult<(Chunk, &'a [u64])> {
        let (len, _) = densest_prefix(remaining, self.capacity);
        if len == 0 {
            return Err(leading_base_error(remaining, self.capacity));
        }
        let (head, rest) = remaining.split_at(len);
        Ok((Chunk::with_capacity(head.to_vec(), self.capacity)?, rest))
    }
}
