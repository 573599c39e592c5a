//! Error types.
//!
//! Table operations never fail: a missing key is `None` or `false`. Errors
//! only come from out-of-range sort bounds and from loading configuration.

use thiserror::Error;

/// Failure of a bounded quicksort call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// The inclusive range `[low, high]` does not lie inside the slice.
    #[error("sort range [{low}, {high}] is outside a slice of length {len}")]
    OutOfBounds { low: isize, high: isize, len: usize },
}

/// Failure to load or validate a [`Config`](crate::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
