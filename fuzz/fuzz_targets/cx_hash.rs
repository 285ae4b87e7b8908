#![no_main]

use std::collections::BTreeMap;
use std::fmt;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use collectix::HashMap;

#[derive(Arbitrary, Debug)]
enum HashMethod<K: Ord + fmt::Debug, V: fmt::Debug> {
    New,
    Insert { key: K, val: V },
    Get { key: K },
    Remove { key: K },
    Reserve { n: usize },
    Len,
    Clear,
}

fn checked_get_len(table: &HashMap<usize, usize>, bt_map: &BTreeMap<usize, usize>) -> usize {
    let len = table.len();
    assert_eq!(len, bt_map.len());
    len
}

// Differential fuzzing harness: collectix's chained HashMap against std's BTreeMap.
// Exercises bucket growth/rehashing, not just the Option-returning surface.
fuzz_target!(|methods: Vec<HashMethod<usize, usize>>| {
    let mut table = HashMap::<usize, usize>::new();
    let mut bt_map = BTreeMap::new();

    for m in methods {
        match m {
            HashMethod::New => {
                table = HashMap::new();
                bt_map.clear();
            }
            HashMethod::Insert { key, val } => {
                let len_old = checked_get_len(&table, &bt_map);
                assert_eq!(table.insert(key, val), bt_map.insert(key, val));
                assert!(checked_get_len(&table, &bt_map) >= len_old);
                assert!(table.load_factor() <= table.max_load_factor() + f64::EPSILON);
            }
            HashMethod::Get { key } => {
                let len_old = checked_get_len(&table, &bt_map);
                assert_eq!(table.get(&key), bt_map.get(&key));
                assert_eq!(checked_get_len(&table, &bt_map), len_old);
            }
            HashMethod::Remove { key } => {
                let len_old = checked_get_len(&table, &bt_map);
                assert_eq!(table.remove(&key), bt_map.remove(&key));
                assert!(checked_get_len(&table, &bt_map) <= len_old);
            }
            HashMethod::Reserve { n } => {
                if n <= 4096 {
                    table.reserve(n);
                    assert!(table.capacity() >= n || table.len() as f64 / table.capacity() as f64 <= table.max_load_factor());
                }
            }
            HashMethod::Len => {
                assert_eq!(table.len(), bt_map.len());
            }
            HashMethod::Clear => {
                table.clear();
                bt_map.clear();

                assert!(table.is_empty());
                assert!(bt_map.is_empty());
            }
        }
    }
});
