/// Width of the target word. Chunk products must stay below `2^WORD_BITS`.
pub const WORD_BITS: u32 = 64;

/// Smallest radix a digit position may have.
pub const MIN_BASE: u128 = 2;
