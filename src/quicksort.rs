//! # Randomized Quicksort
//!
//! In-place quicksort over an inclusive index range of a slice. The pivot of
//! every partition step is drawn uniformly at random from the range, which
//! keeps already-sorted and reverse-sorted inputs at O(n log n) expected time.
//! A first-element-pivot variant is kept alongside as a reference for timing
//! comparisons; it sorts just as correctly but degrades to O(n²) on ordered
//! input.
//!
//! Neither driver recurses. After each partition the larger side is pushed on
//! an explicit stack and the loop carries on with the smaller side, so the
//! stack holds at most ⌈log₂ n⌉ ranges whatever the pivots turn out to be.
//!
//! Neither sort is stable. Elements are only ever moved with
//! [`slice::swap`], never cloned.

use log::{debug, trace};
use rand::{Rng, SeedableRng};
use smallvec::{smallvec, SmallVec};

use crate::error::SortError;
use crate::utils::pivot_rng::PivotRng;

/// Ranges the explicit stack holds inline. 64 covers any slice that fits in
/// memory.
const INLINE_STACK_DEPTH: usize = 64;

type RangeStack = SmallVec<[(usize, usize); INLINE_STACK_DEPTH]>;

// =============================================================================
// PARTITION SCHEMES
// =============================================================================

/// Lomuto partition of `seq[low..=high]` around `seq[high]`.
///
/// Elements `<=` the pivot are moved to the front of the range, then the pivot
/// is swapped in right after them. Returns the pivot's final index.
///
/// # Panics
/// Panics if `low > high` or `high` is out of bounds.
pub fn partition<T: PartialOrd>(seq: &mut [T], low: usize, high: usize) -> usize {
    assert!(low <= high, "partition range [{}, {}] is empty", low, high);
    let mut store = low;
    for j in low..high {
        if seq[j] <= seq[high] {
            seq.swap(store, j);
            store += 1;
        }
    }
    seq.swap(store, high);
    store
}

/// Swaps a uniformly drawn element of `seq[low..=high]` into `high` and then
/// runs [`partition`].
pub fn randomized_partition<T, R>(seq: &mut [T], low: usize, high: usize, rng: &mut R) -> usize
where
    T: PartialOrd,
    R: Rng + ?Sized,
{
    let pivot = rng.gen_range(low..=high);
    seq.swap(pivot, high);
    partition(seq, low, high)
}

/// Partition of `seq[low..=high]` around its first element.
///
/// Elements strictly less than the pivot are gathered right after it, then the
/// pivot is swapped to the end of that run. Returns the pivot's final index.
///
/// # Panics
/// Panics if `low > high` or `high` is out of bounds.
pub fn deterministic_partition<T: PartialOrd>(seq: &mut [T], low: usize, high: usize) -> usize {
    assert!(low <= high, "partition range [{}, {}] is empty", low, high);
    let mut boundary = low + 1;
    for j in (low + 1)..=high {
        if seq[j] < seq[low] {
            seq.swap(boundary, j);
            boundary += 1;
        }
    }
    seq.swap(low, boundary - 1);
    boundary - 1
}

// =============================================================================
// SORT DRIVERS
// =============================================================================

/// Sorts `seq[low..=high]` ascending with random pivots from an
/// entropy-seeded [`PivotRng`].
///
/// `low >= high` is a no-op (so `(0, -1)` on an empty slice is fine).
/// Otherwise the range must lie inside the slice or
/// [`SortError::OutOfBounds`] is returned and the slice is left untouched.
pub fn randomized_quicksort<T: PartialOrd>(
    seq: &mut [T],
    low: isize,
    high: isize,
) -> Result<(), SortError> {
    let mut rng = PivotRng::from_entropy();
    randomized_quicksort_with(seq, low, high, &mut rng)
}

/// [`randomized_quicksort`] with a caller-supplied pivot source. The same
/// generator state always produces the same sequence of swaps.
pub fn randomized_quicksort_with<T, R>(
    seq: &mut [T],
    low: isize,
    high: isize,
    rng: &mut R,
) -> Result<(), SortError>
where
    T: PartialOrd,
    R: Rng + ?Sized,
{
    match checked_range(seq.len(), low, high)? {
        Some((lo, hi)) => {
            sort_range(seq, lo, hi, |s, l, h| randomized_partition(s, l, h, &mut *rng));
            Ok(())
        }
        None => Ok(()),
    }
}

/// First-element-pivot quicksort over `seq[low..=high]`. Same bounds
/// contract as [`randomized_quicksort`].
pub fn deterministic_quicksort<T: PartialOrd>(
    seq: &mut [T],
    low: isize,
    high: isize,
) -> Result<(), SortError> {
    if let Some((lo, hi)) = checked_range(seq.len(), low, high)? {
        sort_range(seq, lo, hi, deterministic_partition);
    }
    Ok(())
}

/// Sorts the whole slice with an entropy-seeded pivot source.
pub fn sort<T: PartialOrd>(seq: &mut [T]) {
    let mut rng = PivotRng::from_entropy();
    sort_with(seq, &mut rng);
}

/// Sorts the whole slice with the given pivot source.
pub fn sort_with<T, R>(seq: &mut [T], rng: &mut R)
where
    T: PartialOrd,
    R: Rng + ?Sized,
{
    if seq.len() > 1 {
        sort_range(seq, 0, seq.len() - 1, |s, l, h| randomized_partition(s, l, h, &mut *rng));
    }
}

/// Maps signed inclusive bounds to a non-empty `usize` range, `None` for an
/// empty one.
fn checked_range(len: usize, low: isize, high: isize) -> Result<Option<(usize, usize)>, SortError> {
    if low >= high {
        return Ok(None);
    }
    if low < 0 || high as usize >= len {
        debug!("rejected sort range [{}, {}] for slice of length {}", low, high, len);
        return Err(SortError::OutOfBounds { low, high, len });
    }
    Ok(Some((low as usize, high as usize)))
}

/// Explicit-stack quicksort loop over `seq[low..=high]`, `low < high`.
/// Returns the deepest the stack got.
fn sort_range<T, P>(seq: &mut [T], low: usize, high: usize, mut partition_fn: P) -> usize
where
    P: FnMut(&mut [T], usize, usize) -> usize,
{
    let mut stack: RangeStack = smallvec![(low, high)];
    let mut peak = stack.len();

    while let Some((mut lo, mut hi)) = stack.pop() {
        while lo < hi {
            let p = partition_fn(seq, lo, hi);
            let left_len = p - lo;
            let right_len = hi - p;

            if left_len < right_len {
                if right_len > 1 {
                    stack.push((p + 1, hi));
                }
                if left_len < 2 {
                    break;
                }
                hi = p - 1;
            } else {
                if left_len > 1 {
                    stack.push((lo, p - 1));
                }
                if right_len < 2 {
                    break;
                }
                lo = p + 1;
            }
            peak = peak.max(stack.len());
        }
        peak = peak.max(stack.len());
    }

    trace!("sorted {} elements, stack peak {}", high - low + 1, peak);
    peak
}
