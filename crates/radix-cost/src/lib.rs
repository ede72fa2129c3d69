//! # radix-cost
//!
//! Bits needed to store a packing, the one-word-per-base baseline, and the
//! boundary weight ("Saxby sum") used to estimate the cost of chunks that
//! describe their own length.

pub mod bits;
pub mod boundary;
pub mod compare;

pub use bits::{baseline_bits, total_bits};
pub use boundary::{boundary_weight, chunk_boundary_weight, self_describing_bits};
pub use compare::{compare, compare_with, CostComparison};
