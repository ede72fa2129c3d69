use num_bigint::BigUint;

use crate::constants::{MIN_BASE, WORD_BITS};
use crate::errors::{RadixError, RadixResult};

/// Upper bound on a chunk's value space: products must stay below `2^word_bits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capacity {
    word_bits: u32,
}

impl Capacity {
    /// The 64-bit word.
    pub const WORD64: Capacity = Capacity {
        word_bits: WORD_BITS,
    };

    /// Capacity for a word of `word_bits` bits (1..=64).
    pub fn new(word_bits: u32) -> RadixResult<Self> {
        if word_bits == 0 || word_bits > WORD_BITS {
            return Err(RadixError::InvalidWordBits { word_bits });
        }
        Ok(Self { word_bits })
    }

    pub fn word_bits(&self) -> u32 {
        self.word_bits
    }

    /// `2^word_bits`, the first value that no longer fits.
    pub fn limit(&self) -> u128 {
        1u128 << self.word_bits
    }

    /// Whether a value space of `product` states fits one word.
    #[inline]
    pub fn fits(&self, product: u128) -> bool {
        product < self.limit()
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self::WORD64
    }
}

/// Check a single caller-supplied base and narrow it to `u64`.
///
/// `index` is only used to locate the offending base in the error.
pub fn validate_base(index: usize, base: u128, capacity: Capacity) -> RadixResult<u64> {
    if base < MIN_BASE {
        return Err(RadixError::InvalidBase { index, base });
    }
    if !capacity.fits(base) {
        return Err(RadixError::CapacityViolation {
            index,
            base,
            word_bits: capacity.word_bits(),
        });
    }
    // fits() guarantees base < 2^64.
    Ok(base as u64)
}

/// Validate a whole finite base sequence before any packing begins.
pub fn validate_bases(bases: &[u128], capacity: Capacity) -> RadixResult<Vec<u64>> {
    bases
        .iter()
        .enumerate()
        .map(|(index, &base)| validate_base(index, base, capacity))
        .collect()
}

/// Minimal number of bits needed to represent `n` (0 for 0).
#[inline]
pub fn bit_length(n: u64) -> u32 {
    u64::BITS - n.leading_zeros()
}

/// [`bit_length`] for arbitrary-precision values.
pub fn bit_length_big(n: &BigUint) -> u64 {
    n.bits()
}
