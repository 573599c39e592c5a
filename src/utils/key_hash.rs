//! # Key Hashing
//!
//! Keys are hashed through their canonical text form. A key type opts in by
//! implementing [`TableKey`], which hands the table a deterministic string; the
//! table then reduces that string with a base-31 polynomial modulo its current
//! capacity.
//!
//! The polynomial is weak on purpose: it is reduced by the table size directly
//! rather than a large prime, so patterned keys collide often and the spread
//! shifts after every resize. Callers must not assume uniformity.

use std::borrow::Cow;

/// Multiplier of the polynomial hash.
pub const POLY_BASE: u128 = 31;

// =============================================================================
// TRAIT
// =============================================================================

/// A key that can be stored in a [`HashTable`](crate::HashTable).
///
/// `key_text` must be deterministic, and two keys that compare equal must
/// produce the same text.
pub trait TableKey: Eq {
    /// The canonical text form the hash is computed over.
    fn key_text(&self) -> Cow<'_, str>;

    /// Bucket index of this key in a table of `capacity` buckets.
    #[inline]
    fn bucket_index(&self, capacity: usize) -> usize {
        polynomial_hash(&self.key_text(), capacity)
    }
}

// =============================================================================
// IMPLS FOR STRING TYPES
// =============================================================================

impl TableKey for str {
    fn key_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl TableKey for String {
    fn key_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl TableKey for char {
    fn key_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl TableKey for bool {
    fn key_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(if *self { "True" } else { "False" })
    }
}

impl<T: TableKey + ?Sized> TableKey for &T {
    fn key_text(&self) -> Cow<'_, str> {
        (**self).key_text()
    }
}

// =============================================================================
// NUMERIC TYPES
// =============================================================================

// Integers hash through their decimal text.
macro_rules! impl_table_key_numeric {
    ($($t:ty),*) => {
        $(
            impl TableKey for $t {
                fn key_text(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_table_key_numeric!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

// =============================================================================
// HASH
// =============================================================================

/// Computes `(Σ code(char_i) * 31^i) mod capacity` over the Unicode scalar
/// values of `text`.
///
/// Each term is reduced as it is accumulated, with 128-bit intermediates, so
/// the result equals the reduction of the unbounded sum.
///
/// # Panics
/// Panics if `capacity` is zero.
#[inline]
pub fn polynomial_hash(text: &str, capacity: usize) -> usize {
    assert!(capacity > 0, "capacity must be positive");
    let modulus = capacity as u128;
    if modulus == 1 {
        return 0;
    }

    let mut acc: u128 = 0;
    let mut power: u128 = 1;
    for ch in text.chars() {
        let code = ch as u128 % modulus;
        acc = (acc + code * power) % modulus;
        power = power * POLY_BASE % modulus;
    }
    acc as usize
}
