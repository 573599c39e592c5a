//! # Chained Hash Table
//!
//! A map from keys to values that resolves collisions by chaining: every
//! bucket holds a short sequence of `(key, value)` pairs and lookups scan the
//! chain linearly.
//!
//! The bucket of a key is [`polynomial_hash`](crate::utils::key_hash::polynomial_hash)
//! of its text modulo the current capacity. Before an insert places its entry,
//! the table checks its load factor; above the configured threshold (0.7 by
//! default) it rebuilds itself with a larger bucket vector and rehashes every
//! entry against the new capacity.

use std::borrow::Borrow;
use std::fmt;
use std::mem;

use log::debug;
use smallvec::SmallVec;

use crate::config::TableConfig;
use crate::error::ConfigError;
use crate::types::{Bucket, TableStats};
use crate::utils::key_hash::TableKey;

#[derive(Debug, Clone)]
pub struct HashTable<K, V> {
    buckets: Vec<Bucket<K, V>>,
    count: usize,
    max_load_factor: f64,
    growth_factor: usize,
}

impl<K, V> HashTable<K, V>
where
    K: TableKey,
{
    /// Creates a table with `capacity` buckets and the default resize policy.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be positive");
        let defaults = TableConfig::default();
        Self::build(capacity, defaults.max_load_factor, defaults.growth_factor)
    }

    /// Creates a table from a validated [`TableConfig`].
    pub fn with_config(config: &TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(
            config.initial_capacity,
            config.max_load_factor,
            config.growth_factor,
        ))
    }

    fn build(capacity: usize, max_load_factor: f64, growth_factor: usize) -> Self {
        HashTable {
            buckets: empty_buckets(capacity),
            count: 0,
            max_load_factor,
            growth_factor,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Current number of buckets.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.buckets.len() as f64
    }

    /// Inserts `value` under `key`.
    ///
    /// If the table is over its load threshold it is resized first, so the
    /// new entry is placed with the grown capacity. When `key` is already
    /// present its value is replaced in place and the previous value is
    /// returned; the entry count does not change.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if self.load_factor() > self.max_load_factor {
            self.resize();
        }

        let index = key.bucket_index(self.buckets.len());
        let bucket = &mut self.buckets[index];

        for entry in bucket.iter_mut() {
            if entry.0 == key {
                return Some(mem::replace(&mut entry.1, value));
            }
        }

        bucket.push((key, value));
        self.count += 1;
        None
    }

    /// Returns the value stored under `key`, or `None` when the key is absent.
    pub fn search<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        let index = key.bucket_index(self.buckets.len());
        self.buckets[index]
            .iter()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
    }

    pub fn search_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        let index = key.bucket_index(self.buckets.len());
        self.buckets[index]
            .iter_mut()
            .find(|(k, _)| k.borrow() == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        self.search(key).is_some()
    }

    /// Removes `key` and returns its value, or `None` when it was absent.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        let index = key.bucket_index(self.buckets.len());
        let bucket = &mut self.buckets[index];
        let pos = bucket.iter().position(|(k, _)| k.borrow() == key)?;
        let (_, value) = bucket.swap_remove(pos);
        self.count -= 1;
        Some(value)
    }

    /// Removes `key`. Returns `true` if it was present; otherwise the table is
    /// left untouched and `false` is returned.
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: TableKey + ?Sized,
    {
        self.remove(key).is_some()
    }

    /// Drops every entry. The capacity is kept.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.count = 0;
    }

    /// Every bucket in index order, paired with its chain.
    pub fn display(&self) -> Vec<(usize, &[(K, V)])> {
        self.buckets
            .iter()
            .enumerate()
            .map(|(i, bucket)| (i, bucket.as_slice()))
            .collect()
    }

    /// Iterates over all entries, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.iter().map(|(k, v)| (k, v)))
    }

    pub fn stats(&self) -> TableStats {
        let mut stats = TableStats {
            capacity: self.buckets.len(),
            entries: self.count,
            empty_buckets: 0,
            occupied_buckets: 0,
            longest_chain: 0,
            spilled_buckets: 0,
        };
        for bucket in &self.buckets {
            if bucket.is_empty() {
                stats.empty_buckets += 1;
            } else {
                stats.occupied_buckets += 1;
            }
            if bucket.spilled() {
                stats.spilled_buckets += 1;
            }
            stats.longest_chain = stats.longest_chain.max(bucket.len());
        }
        stats
    }

    /// Rebuilds the table with `capacity * growth_factor` buckets, moving every
    /// entry into the bucket its key hashes to under the new capacity.
    fn resize(&mut self) {
        let old_capacity = self.buckets.len();
        let new_capacity = old_capacity * self.growth_factor;
        let mut new_buckets = empty_buckets(new_capacity);

        for bucket in mem::take(&mut self.buckets) {
            for (key, value) in bucket {
                let index = key.bucket_index(new_capacity);
                new_buckets[index].push((key, value));
            }
        }

        debug!(
            "resized hash table from {} to {} buckets, rehashed {} entries",
            old_capacity, new_capacity, self.count
        );
        self.buckets = new_buckets;
    }
}

impl<K, V> Default for HashTable<K, V>
where
    K: TableKey,
{
    fn default() -> Self {
        Self::new(TableConfig::default().initial_capacity)
    }
}

impl<K, V> Extend<(K, V)> for HashTable<K, V>
where
    K: TableKey,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for HashTable<K, V>
where
    K: TableKey,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = HashTable::default();
        table.extend(iter);
        table
    }
}

/// One line per bucket: `Index {i}: [(key, value), ...]`.
impl<K, V> fmt::Display for HashTable<K, V>
where
    K: TableKey + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chain) in self.display() {
            writeln!(f, "Index {}: {:?}", i, chain)?;
        }
        Ok(())
    }
}

fn empty_buckets<K, V>(capacity: usize) -> Vec<Bucket<K, V>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, SmallVec::new);
    buckets
}
