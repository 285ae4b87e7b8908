#![no_main]

use std::collections::BTreeMap;
use std::fmt::Debug;

use libfuzzer_sys::{arbitrary::Arbitrary, fuzz_target};

use collectix::OrderedMap;

#[derive(Arbitrary, Debug)]
enum MapMethod<K: Ord + Debug, V: Debug> {
    Clear,
    ContainsKey { key: K },
    FirstKeyValue,
    Get { key: K },
    GetMut { key: K },
    Insert { key: K, val: V },
    IsEmpty,
    Iter,
    LastKeyValue,
    Len,
    New,
    PopFirst,
    PopLast,
    Remove { key: K },
    Debug,
}

fn checked_get_len(map: &OrderedMap<usize, usize>, bt_map: &BTreeMap<usize, usize>) -> usize {
    let len = map.len();
    assert_eq!(len, bt_map.len());
    len
}

fn assert_len_unchanged(
    map: &OrderedMap<usize, usize>,
    bt_map: &BTreeMap<usize, usize>,
    old_len: usize,
) {
    assert_eq!(checked_get_len(map, bt_map), old_len);
}

// Differential fuzzing harness: collectix's OrderedMap against std's BTreeMap.
fuzz_target!(|methods: Vec<MapMethod<usize, usize>>| {
    let mut map = OrderedMap::<usize, usize>::new();
    let mut bt_map = BTreeMap::new();

    for m in methods {
        match m {
            MapMethod::Clear => {
                map.clear();
                bt_map.clear();

                assert!(map.is_empty());
                assert!(bt_map.is_empty());
            }
            MapMethod::ContainsKey { key } => {
                assert_eq!(map.contains_key(&key), bt_map.contains_key(&key));
            }
            MapMethod::FirstKeyValue => {
                let len_old = checked_get_len(&map, &bt_map);
                assert_eq!(map.first(), bt_map.first_key_value());
                assert_len_unchanged(&map, &bt_map, len_old);
            }
            MapMethod::Get { key } => {
                let len_old = checked_get_len(&map, &bt_map);
                assert_eq!(map.get(&key), bt_map.get(&key));
                assert_len_unchanged(&map, &bt_map, len_old);
            }
            MapMethod::GetMut { key } => {
                let len_old = checked_get_len(&map, &bt_map);
                assert_eq!(map.get_mut(&key), bt_map.get_mut(&key));
                assert_len_unchanged(&map, &bt_map, len_old);
            }
            MapMethod::Insert { key, val } => {
                let len_old = checked_get_len(&map, &bt_map);
                assert_eq!(map.insert(key, val), bt_map.insert(key, val));
                assert!(checked_get_len(&map, &bt_map) >= len_old);
            }
            MapMethod::IsEmpty => {
                assert_eq!(map.is_empty(), bt_map.is_empty());
            }
            MapMethod::Iter => {
                assert!(map.iter().eq(bt_map.iter()));
            }
            MapMethod::LastKeyValue => {
                let len_old = checked_get_len(&map, &bt_map);
                assert_eq!(map.last(), bt_map.last_key_value());
                assert_len_unchanged(&map, &bt_map, len_old);
            }
            MapMethod::Len => {
                assert_eq!(map.len(), bt_map.len());
            }
            MapMethod::New => {
                map = OrderedMap::new();
                bt_map = BTreeMap::new();
            }
            MapMethod::PopFirst => {
                let len_old = checked_get_len(&map, &bt_map);
                assert_eq!(map.pop_first(), bt_map.pop_first());
                assert!(checked_get_len(&map, &bt_map) <= len_old);
            }
            MapMethod::PopLast => {
                let len_old = checked_get_len(&map, &bt_map);
                assert_eq!(map.pop_last(), bt_map.pop_last());
                assert!(checked_get_len(&map, &bt_map) <= len_old);
            }
            MapMethod::Remove { key } => {
                let len_old = checked_get_len(&map, &bt_map);
                assert_eq!(map.remove(&key), bt_map.remove(&key));
                assert!(checked_get_len(&map, &bt_map) <= len_old);
            }
            MapMethod::Debug => {
                assert_eq!(format!("{:?}", map), format!("{:?}", bt_map));
            }
        }
    }
});
