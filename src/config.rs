//! # Configuration
//!
//! Tunables for the hash table and the quicksort. Every field has a default,
//! so an empty TOML document (or no file at all) yields the textbook setup:
//! ten buckets, resize above a 0.7 load factor, double on resize, and an
//! entropy-seeded pivot generator.
//!
//! ```toml
//! [table]
//! initial_capacity = 64
//! max_load_factor = 0.75
//! growth_factor = 2
//!
//! [sort]
//! seed = 42
//! ```

use std::fs;
use std::path::Path;

use rand::SeedableRng;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::utils::pivot_rng::PivotRng;

pub const DEFAULT_CAPACITY: usize = 10;
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.7;
pub const DEFAULT_GROWTH_FACTOR: usize = 2;

/// Settings that shape a [`HashTable`](crate::HashTable).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Number of buckets the table starts with.
    pub initial_capacity: usize,

    /// An insert that finds `len / capacity` strictly above this value resizes
    /// the table first.
    pub max_load_factor: f64,

    /// Multiplier applied to the capacity on every resize.
    pub growth_factor: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::Invalid(
                "table.initial_capacity must be at least 1".to_string(),
            ));
        }
        if !self.max_load_factor.is_finite() || self.max_load_factor <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "table.max_load_factor must be a positive number, got {}",
                self.max_load_factor
            )));
        }
        if self.growth_factor < 2 {
            return Err(ConfigError::Invalid(format!(
                "table.growth_factor must be at least 2, got {}",
                self.growth_factor
            )));
        }
        Ok(())
    }
}

/// Settings for the randomized quicksort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// Fixed pivot seed. `None` draws a fresh seed from the OS.
    pub seed: Option<u64>,
}

impl SortConfig {
    /// Builds the pivot generator this configuration describes.
    pub fn pivot_rng(&self) -> PivotRng {
        match self.seed {
            Some(seed) => PivotRng::new(seed),
            None => PivotRng::from_entropy(),
        }
    }
}

/// Top-level configuration document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub table: TableConfig,
    pub sort: SortConfig,
}

impl Config {
    /// Loads and validates a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates a TOML configuration document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.table.validate()?;
        Ok(config)
    }
}
