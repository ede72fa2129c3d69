use radix_core::{bit_length, Chunk};

/// Sum of each chunk's `bit_length(product)`.
pub fn total_bits<'a>(chunks: impl IntoIterator<Item = &'a Chunk>) -> u64 {
    chunks.into_iter().map(|c| c.bit_cost() as u64).sum()
}

/// Cost of storing every base as its own chunk.
pub fn baseline_bits(bases: &[u64]) -> u64 {
    bases.iter().map(|&b| bit_length(b) as u64).sum()
}
