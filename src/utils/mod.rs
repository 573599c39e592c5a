//! # Utility Modules
//!
//! Low-level primitives shared by the table and the sorter: the key-to-bucket
//! hash and the seedable pivot generator.

/// Canonical key text and the base-31 polynomial hash over it.
///
/// This module provides `TableKey`, the capability every hash table key type
/// implements, and `polynomial_hash`, the capacity-relative bucket function.
pub mod key_hash;

/// A seedable XOROSHIRO128+ generator used to draw quicksort pivots.
///
/// `PivotRng` plugs into the `rand` traits, so pivots are drawn with `rand`'s
/// unbiased inclusive-range sampling.
pub mod pivot_rng;
