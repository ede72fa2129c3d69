mod config_error;
mod radix_error;

pub use config_error::ConfigError;
pub use radix_error::{RadixError, RadixResult};
