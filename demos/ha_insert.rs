use collectix::OrderedMap;

// Identity permutation fill: (0, 0), (1, 1), (2, 2), ... , (n, n)
fn id_perm_fill<K, V>(map: &mut OrderedMap<K, V>, n: usize)
where
    K: From<usize> + Ord + Clone,
    V: From<usize>,
{
    map.clear();
    for i in 0..n {
        assert!(map.insert(K::from(i), V::from(i)).is_none());
    }
    assert_eq!(map.len(), n);
}

// Unlike a fixed-capacity arena, collectix's tree engine is backed by a
// growable arena (see src/tree/arena.rs), so filling past any particular
// size is just another allocation, never a capacity error.
fn main() {
    let mut map: OrderedMap<usize, usize> = OrderedMap::new();
    id_perm_fill(&mut map, 1_024);

    assert_eq!(map.insert(usize::MAX, usize::MAX), None);
    assert_eq!(map.len(), 1_025);

    // Keep growing past the point a stack-only arena would have refused.
    id_perm_fill(&mut map, 8_192);
    assert_eq!(map.len(), 8_192);
}
