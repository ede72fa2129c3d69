use serde::{Deserialize, Serialize};

use crate::base::{bit_length, Capacity};
use crate::density::{density, Density};
use crate::errors::{RadixError, RadixResult};

/// A contiguous, non-empty run of bases whose product fits one word.
///
/// Serialized as the plain list of its bases; deserialization re-checks the
/// 64-bit bound. A base of 1 is accepted here (it multiplies nothing) so that
/// hand-built baselines can include it; the packers never emit one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u64>", into = "Vec<u64>")]
pub struct Chunk {
    bases: Vec<u64>,
    product: u64,
}

impl Chunk {
    /// Build a chunk bounded by a 64-bit word.
    pub fn new(bases: Vec<u64>) -> RadixResult<Self> {
        Self::with_capacity(bases, Capacity::WORD64)
    }

    pub fn with_capacity(bases: Vec<u64>, capacity: Capacity) -> RadixResult<Self> {
        if bases.is_empty() {
            return Err(RadixError::EmptyChunk);
        }
        let mut product: u128 = 1;
        for (index, &base) in bases.iter().enumerate() {
            if base == 0 {
                return Err(RadixError::InvalidBase {
                    index,
                    base: 0,
                });
            }
            // product < 2^64 and base < 2^64, so this never overflows.
            product *= base as u128;
            if !capacity.fits(product) {
                return Err(RadixError::ChunkOverflow {
                    product,
                    word_bits: capacity.word_bits(),
                });
            }
        }
        Ok(Self {
            bases,
            product: product as u64,
        })
    }

    pub fn bases(&self) -> &[u64] {
        &self.bases
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Size of the chunk's value space.
    pub fn product(&self) -> u64 {
        self.product
    }

    /// Bits needed to store the chunk: `bit_length(product)`.
    pub fn bit_cost(&self) -> u32 {
        bit_length(self.product)
    }

    pub fn density(&self) -> Density {
        // Zero bases are rejected on construction, so product >= 1.
        density(self.product).unwrap_or(Density::ZERO)
    }

    pub fn into_bases(self) -> Vec<u64> {
        self.bases
    }
}

impl TryFrom<Vec<u64>> for Chunk {
    type Error = RadixError;

    fn try_from(bases: Vec<u64>) -> RadixResult<Self> {
        Chunk::new(bases)
    }
}

impl From<Chunk> for Vec<u64> {
    fn from(chunk: Chunk) -> Self {
        chunk.bases
    }
}

impl AsRef<[u64]> for Chunk {
    fn as_ref(&self) -> &[u64] {
        &self.bases
    }
}
