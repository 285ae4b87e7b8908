#![no_main]

use std::collections::BTreeSet;
use std::fmt::Debug;
use std::iter::FromIterator;

use libfuzzer_sys::{arbitrary::Arbitrary, fuzz_target};

use collectix::OrderedSet;

#[derive(Arbitrary, Debug)]
enum SetMethod<T: Ord + Debug> {
    Clear,
    Contains { value: T },
    First,
    Insert { value: T },
    IsDisjoint { other: Vec<T> },
    IsEmpty,
    IsSubset { other: Vec<T> },
    IsSuperset { other: Vec<T> },
    Iter,
    Last,
    Len,
    New,
    Remove { value: T },
    Debug,
}

fn checked_get_len(set: &OrderedSet<usize>, bt_set: &BTreeSet<usize>) -> usize {
    let len = set.len();
    assert_eq!(len, bt_set.len());
    len
}

fn assert_len_unchanged(set: &OrderedSet<usize>, bt_set: &BTreeSet<usize>, old_len: usize) {
    assert_eq!(checked_get_len(set, bt_set), old_len);
}

// Differential fuzzing harness: collectix's OrderedSet against std's BTreeSet.
fuzz_target!(|methods: Vec<SetMethod<usize>>| {
    let mut set = OrderedSet::<usize>::new();
    let mut bt_set = BTreeSet::new();

    for m in methods {
        match m {
            SetMethod::Clear => {
                set.clear();
                bt_set.clear();

                assert!(set.is_empty());
                assert!(bt_set.is_empty());
            }
            SetMethod::Contains { value } => {
                assert_eq!(set.contains(&value), bt_set.contains(&value));
            }
            SetMethod::First => {
                let len_old = checked_get_len(&set, &bt_set);
                assert_eq!(set.first(), bt_set.first());
                assert_len_unchanged(&set, &bt_set, len_old);
            }
            SetMethod::Insert { value } => {
                let len_old = checked_get_len(&set, &bt_set);
                assert_eq!(set.insert(value), bt_set.insert(value));
                assert!(checked_get_len(&set, &bt_set) >= len_old);
            }
            SetMethod::IsDisjoint { other } => {
                let set_other = OrderedSet::from_iter(other.clone());
                let bt_other = BTreeSet::from_iter(other);
                assert_eq!(set.is_disjoint(&set_other), bt_set.is_disjoint(&bt_other));
            }
            SetMethod::IsEmpty => {
                assert_eq!(set.is_empty(), bt_set.is_empty());
            }
            SetMethod::IsSubset { other } => {
                let set_other = OrderedSet::from_iter(other.clone());
                let bt_other = BTreeSet::from_iter(other);
                assert_eq!(set.is_subset(&set_other), bt_set.is_subset(&bt_other));
            }
            SetMethod::IsSuperset { other } => {
                let set_other = OrderedSet::from_iter(other.clone());
                let bt_other = BTreeSet::from_iter(other);
                assert_eq!(set.is_superset(&set_other), bt_set.is_superset(&bt_other));
            }
            SetMethod::Iter => {
                assert!(set.iter().eq(bt_set.iter()));
            }
            SetMethod::Last => {
                let len_old = checked_get_len(&set, &bt_set);
                assert_eq!(set.last(), bt_set.last());
                assert_len_unchanged(&set, &bt_set, len_old);
            }
            SetMethod::Len => {
                assert_eq!(set.len(), bt_set.len());
            }
            SetMethod::New => {
                set = OrderedSet::new();
                bt_set = BTreeSet::new();
            }
            SetMethod::Remove { value } => {
                let len_old = checked_get_len(&set, &bt_set);
                assert_eq!(set.remove(&value), bt_set.remove(&value));
                assert!(checked_get_len(&set, &bt_set) <= len_old);
            }
            SetMethod::Debug => {
                assert_eq!(format!("{:?}", set), format!("{:?}", bt_set));
            }
        }
    }
});
