use super::ConfigError;

/// Crate-wide result alias.
pub type RadixResult<T> = Result<T, RadixError>;

/// Errors surfaced by validation, packing, encoding, and cost analysis.
#[derive(Debug, thiserror::Error)]
pub enum RadixError {
    #[error("invalid base {base} at index {index}: a base must be at least 2")]
    InvalidBase { index: usize, base: u128 },

    #[error("base {base} at index {index} does not fit a {word_bits}-bit word on its own")]
    CapacityViolation {
        index: usize,
        base: u128,
        word_bits: u32,
    },

    #[error("density is undefined for zero")]
    ZeroDensity,

    #[error("a chunk must contain at least one base")]
    EmptyChunk,

    #[error("chunk product {product} does not fit a {word_bits}-bit word")]
    ChunkOverflow { product: u128, word_bits: u32 },

    #[error("digit {digit} at position {position} is out of range for base {base}")]
    DigitOutOfRange {
        position: usize,
        digit: u64,
        base: u64,
    },

    #[error("expected {expected} digits, got {actual}")]
    DigitCountMismatch { expected: usize, actual: usize },

    #[error("invalid range {start}..={end}: {reason}")]
    InvalidRange {
        start: u64,
        end: u64,
        reason: String,
    },

    #[error("word width must be between 1 and 64 bits, got {word_bits}")]
    InvalidWordBits { word_bits: u32 },

    #[error(transparent)]
    ConfigError(#[from] ConfigError),
}
