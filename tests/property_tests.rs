//! Property-based tests for the table and the sorts using proptest.
//!
//! The sorts are checked against `slice::sort` on the same input; the table is
//! checked against a `std::collections::HashMap` driven by the same script of
//! operations.

use std::collections::HashMap;

use chainsort::{
    deterministic_quicksort, randomized_quicksort_with, HashTable, PivotRng,
};
use proptest::prelude::*;

// ============================================================================
// Sort properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn randomized_sort_matches_std(input in prop::collection::vec(any::<i32>(), 0..400), seed in any::<u64>()) {
        let mut expected = input.clone();
        expected.sort();

        let mut actual = input.clone();
        let high = actual.len() as isize - 1;
        randomized_quicksort_with(&mut actual, 0, high, &mut PivotRng::new(seed)).unwrap();

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn deterministic_sort_matches_std(input in prop::collection::vec(0u8..16, 0..300)) {
        let mut expected = input.clone();
        expected.sort();

        let mut actual = input.clone();
        let high = actual.len() as isize - 1;
        deterministic_quicksort(&mut actual, 0, high).unwrap();

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn subrange_sort_leaves_outside_untouched(
        input in prop::collection::vec(any::<i16>(), 2..200),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let (x, y) = (a.index(input.len()), b.index(input.len()));
        let (low, high) = (x.min(y), x.max(y));

        let mut actual = input.clone();
        randomized_quicksort_with(&mut actual, low as isize, high as isize, &mut PivotRng::new(0)).unwrap();

        prop_assert_eq!(&actual[..low], &input[..low]);
        prop_assert_eq!(&actual[high + 1..], &input[high + 1..]);

        let mut expected_mid = input[low..=high].to_vec();
        expected_mid.sort();
        prop_assert_eq!(&actual[low..=high], &expected_mid[..]);
    }
}

// ============================================================================
// Table properties
// ============================================================================

#[derive(Debug, Clone)]
enum Op {
    Insert(u16, u32),
    Search(u16),
    Delete(u16),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    // a narrow key space keeps overwrites and hits on delete frequent
    prop_oneof![
        (0u16..64, any::<u32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        (0u16..64).prop_map(Op::Search),
        (0u16..64).prop_map(Op::Delete),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn table_agrees_with_hashmap(ops in prop::collection::vec(op_strategy(), 0..300), capacity in 1usize..16) {
        let mut table = HashTable::new(capacity);
        let mut model: HashMap<u16, u32> = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(k, v) => {
                    prop_assert_eq!(table.insert(k, v), model.insert(k, v));
                }
                Op::Search(k) => {
                    prop_assert_eq!(table.search(&k), model.get(&k));
                }
                Op::Delete(k) => {
                    prop_assert_eq!(table.delete(&k), model.remove(&k).is_some());
                }
            }
            prop_assert_eq!(table.len(), model.len());
        }

        let chained: usize = table.display().iter().map(|(_, chain)| chain.len()).sum();
        prop_assert_eq!(chained, model.len());
        for (k, v) in &model {
            prop_assert_eq!(table.search(k), Some(v));
        }
    }

    #[test]
    fn inserted_string_keys_round_trip(keys in prop::collection::hash_set("[a-z0-9]{0,12}", 0..150)) {
        let mut table = HashTable::default();
        for (i, key) in keys.iter().enumerate() {
            table.insert(key.clone(), i);
        }
        for (i, key) in keys.iter().enumerate() {
            prop_assert_eq!(table.search(key.as_str()), Some(&i));
        }
        prop_assert!(table.load_factor() <= 0.7 + 1.0 / table.capacity() as f64 + 1e-9);
    }
}
