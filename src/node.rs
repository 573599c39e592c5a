//! N-API bindings.
//!
//! Exposes a string-keyed, number-valued `HashTable` class and the two
//! quicksorts to Node.js. JavaScript arrays cross the boundary by copy, so the
//! sort functions return the sorted array.

use napi_derive::napi;

use crate::config::DEFAULT_CAPACITY;
use crate::hash_table::HashTable;
use crate::quicksort;
use crate::utils::pivot_rng::PivotRng;

#[napi(js_name = "HashTable")]
pub struct JsHashTable {
    inner: HashTable<String, f64>,
}

#[napi]
impl JsHashTable {
    /// A zero or missing capacity falls back to the default of 10 buckets.
    #[napi(constructor)]
    pub fn new(capacity: Option<u32>) -> Self {
        let capacity = match capacity {
            Some(c) if c > 0 => c as usize,
            _ => DEFAULT_CAPACITY,
        };
        JsHashTable {
            inner: HashTable::new(capacity),
        }
    }

    #[napi]
    pub fn insert(&mut self, key: String, value: f64) {
        self.inner.insert(key, value);
    }

    #[napi]
    pub fn search(&self, key: String) -> Option<f64> {
        self.inner.search(key.as_str()).copied()
    }

    #[napi]
    pub fn delete(&mut self, key: String) -> bool {
        self.inner.delete(key.as_str())
    }

    /// One `Index {i}: [...]` line per bucket.
    #[napi]
    pub fn display(&self) -> Vec<String> {
        self.inner
            .display()
            .into_iter()
            .map(|(i, chain)| format!("Index {}: {:?}", i, chain))
            .collect()
    }

    #[napi(getter)]
    pub fn length(&self) -> u32 {
        self.inner.len() as u32
    }

    #[napi(getter)]
    pub fn capacity(&self) -> u32 {
        self.inner.capacity() as u32
    }

    #[napi(getter)]
    pub fn load_factor(&self) -> f64 {
        self.inner.load_factor()
    }
}

#[napi]
pub fn randomized_quicksort(mut values: Vec<f64>, seed: Option<u32>) -> Vec<f64> {
    match seed {
        Some(seed) => quicksort::sort_with(&mut values, &mut PivotRng::new(seed as u64)),
        None => quicksort::sort(&mut values),
    }
    values
}

#[napi]
pub fn deterministic_quicksort(mut values: Vec<f64>) -> Vec<f64> {
    let high = values.len() as isize - 1;
    // whole-slice bounds are always in range
    let _ = quicksort::deterministic_quicksort(&mut values, 0, high);
    values
}
