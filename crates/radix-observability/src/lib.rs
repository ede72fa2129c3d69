//! # radix-observability
//!
//! Structured tracing for the packers and the cost analyzer: subscriber
//! setup driven by `RADIX_LOG` or [`ObservabilityConfig`], and one helper per
//! structured event.
//!
//! [`ObservabilityConfig`]: radix_core::config::ObservabilityConfig

pub mod tracing_setup;

pub use tracing_setup::events;
pub use tracing_setup::{init_from_config, init_tracing, try_init_tracing_with_filter};
