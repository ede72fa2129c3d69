//! # radix-core
//!
//! Foundation crate for mixed-radix word packing.
//! Defines bases and capacity, the density metric, chunk and packing models,
//! the packer trait, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod base;
pub mod config;
pub mod constants;
pub mod density;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use base::{bit_length, bit_length_big, validate_base, validate_bases, Capacity};
pub use config::RadixConfig;
pub use density::{density, Density};
pub use errors::{RadixError, RadixResult};
pub use models::{Chunk, Packing};
pub use traits::IPacker;
