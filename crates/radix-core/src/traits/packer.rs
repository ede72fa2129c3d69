use crate::errors::RadixResult;
use crate::models::{Chunk, Packing};

/// A chunk-boundary strategy over a validated base sequence.
pub trait IPacker: Send + Sync {
    /// Short strategy name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Split the next chunk off the front of `remaining`.
    ///
    /// `remaining` must be non-empty and hold only validated bases. The
    /// returned suffix is exactly `remaining[chunk.len()..]`.
    fn next_chunk<'a>(&self, remaining: &'a [u64]) -> RadixResult<(Chunk, &'a [u64])>;

    /// Run [`IPacker::next_chunk`] until the sequence is consumed.
    fn pack_all(&self, bases: &[u64]) -> RadixResult<Packing> {
        let mut chunks = Vec::new();
        let mut remaining = bases;
        while !remaining.is_empty() {
            let (chunk, rest) = self.next_chunk(remaining)?;
            chunks.push(chunk);
            remaining = rest;
        }
        Ok(Packing::new(chunks))
    }
}
