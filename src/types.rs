//! Core types shared by the hash table and its observers.

use std::fmt;

use smallvec::SmallVec;

/// Entries a chain holds inline before spilling to the heap.
pub const INLINE_BUCKET_SIZE: usize = 4;

/// One chain of the table. Order within a chain is insertion order until a
/// delete reshuffles it; callers must not rely on it.
pub type Bucket<K, V> = SmallVec<[(K, V); INLINE_BUCKET_SIZE]>;

/// Occupancy snapshot of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStats {
    pub capacity: usize,
    pub entries: usize,
    pub empty_buckets: usize,
    pub occupied_buckets: usize,
    /// Length of the longest chain.
    pub longest_chain: usize,
    /// Chains that outgrew their inline storage.
    pub spilled_buckets: usize,
}

impl TableStats {
    pub fn load_factor(&self) -> f64 {
        self.entries as f64 / self.capacity as f64
    }
}

impl fmt::Display for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HashTable: entries {} capacity {} load {:.2} empty {} occupied {} longest_chain {} spilled {}",
            self.entries,
            self.capacity,
            self.load_factor(),
            self.empty_buckets,
            self.occupied_buckets,
            self.longest_chain,
            self.spilled_buckets
        )
    }
}
