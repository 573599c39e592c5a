//! # chainsort
//!
//! Two self-contained building blocks:
//!
//! - [`HashTable`], a map with chained buckets that doubles its bucket count
//!   once the load factor goes above 0.7 and rehashes every entry.
//! - [`quicksort`], an in-place randomized quicksort over an inclusive index
//!   range, plus a first-element-pivot variant for comparison.
//!
//! Both are single-threaded and synchronous. Timing harnesses live in
//! `benches/`.
pub mod config;
pub mod error;
pub mod hash_table;
pub mod quicksort;
pub mod types;
pub mod utils;

#[cfg(feature = "node")]
pub mod node;

// Re-export main types
pub use config::{Config, SortConfig, TableConfig};
pub use error::{ConfigError, SortError};
pub use hash_table::HashTable;
pub use types::{Bucket, TableStats};

// Re-export for advanced usage
pub use quicksort::{
    deterministic_partition, deterministic_quicksort, partition, randomized_partition,
    randomized_quicksort, randomized_quicksort_with, sort, sort_with,
};
pub use utils::key_hash::{polynomial_hash, TableKey};
pub use utils::pivot_rng::PivotRng;
