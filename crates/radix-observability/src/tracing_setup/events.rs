//! Structured log events for packing and cost analysis.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log the start of a packing pass.
pub fn packing_started(strategy: &str, bases: usize, word_bits: u32) {
    tracing::debug!(
        event = "packing_started",
        strategy = %strategy,
        bases = bases,
        word_bits = word_bits,
        "packing started"
    );
}

/// Log one emitted chunk.
pub fn chunk_emitted(strategy: &str, offset: usize, len: usize, product: u64, bit_cost: u32) {
    tracing::trace!(
        event = "chunk_emitted",
        strategy = %strategy,
        offset = offset,
        len = len,
        product = product,
        bit_cost = bit_cost,
        "chunk emitted"
    );
}

/// Log a finished packing pass.
pub fn packing_completed(strategy: &str, chunks: usize, bases: usize, total_bits: u64) {
    tracing::info!(
        event = "packing_completed",
        strategy = %strategy,
        chunks = chunks,
        bases = bases,
        total_bits = total_bits,
        "packing completed"
    );
}

/// Log a base sequence rejected before packing.
pub fn input_rejected(strategy: &str, reason: &str) {
    tracing::warn!(
        event = "input_rejected",
        strategy = %strategy,
        reason = %reason,
        "input rejected"
    );
}

/// Log a cost comparison result.
pub fn comparison_completed(strategy: &str, baseline: u64, packed: u64, self_describing: u64) {
    tracing::info!(
        event = "comparison_completed",
        strategy = %strategy,
        baseline = baseline,
        packed = packed,
        self_describing = self_describing,
        "cost comparison completed"
    );
}
