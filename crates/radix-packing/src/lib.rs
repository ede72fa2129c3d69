//! # radix-packing
//!
//! Groups a mixed-radix base sequence into chunks whose value space fits one word.
//! Max: longest chunks, streamed lazily over possibly unbounded input.
//! Dense: at each step the fitting prefix with the highest density.
//! Both validate bases up front (Dense) or as they are pulled (Max), so an
//! oversized base is an error instead of a stalled loop.

pub mod dense;
pub mod engine;
pub mod max;
mod prefix;
pub mod word;

pub use dense::{pack_dense, DensePacker, DenseStrategy};
pub use engine::PackingEngine;
pub use max::{pack_max, MaxPacker, MaxStrategy};
pub use word::{encode_chunk, encode_packing};
