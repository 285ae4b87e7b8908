//! Ordered Map / MultiMap: a thin policy layer selecting duplicate
//! handling over the tree engine. A wrapper interface over [`Engine`],
//! the same shape as scapegoat's `SgMap` wrapping `SGTree` (`map.rs`),
//! generalized over which [`RebalancePolicy`] backs the tree instead of
//! always being a scapegoat tree.

use core::borrow::Borrow;
use core::fmt::{self, Debug};
use core::ops::Index;

use allocator_api2::alloc::{Allocator, Global};

use crate::tree::{ConsumingIter, Engine, Iter, IterMut, Plain, RebalancePolicy, RejectDuplicates};
use crate::tree::{AllowDuplicates, DuplicatePolicy};

/// An ordered map from `K` to `V`, rejecting duplicate keys, backed by
/// a tree rebalanced according to `P` (`Plain`, `Avl`,
/// or `Splay`).
///
/// ```
/// use collectix::ordered_map::OrderedMap;
///
/// let mut m: OrderedMap<i32, &str> = OrderedMap::new();
/// m.insert(1, "a");
/// m.insert(2, "b");
/// assert_eq!(m[&1], "a");
/// assert_eq!(m.len(), 2);
/// ```
pub struct OrderedMap<K: Ord, V, P: RebalancePolicy<K, V> = Plain, A: Allocator + Clone = Global> {
    tree: Engine<K, V, P, RejectDuplicates, A>,
}

/// An ordered multimap: like [`OrderedMap`], but duplicate keys are
/// chained rather than rejected.
pub struct OrderedMultiMap<K: Ord, V, P: RebalancePolicy<K, V> = Plain, A: Allocator + Clone = Global> {
    tree: Engine<K, V, P, AllowDuplicates, A>,
}

macro_rules! ordered_map_impl {
    ($name:ident, $dup:ty) => {
        impl<K: Ord, V, P: RebalancePolicy<K, V>> $name<K, V, P, Global> {
            /// An empty map using the global allocator.
            pub fn new() -> Self {
                $name { tree: Engine::new() }
            }
        }

        impl<K: Ord, V, P: RebalancePolicy<K, V>> Default for $name<K, V, P, Global> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<K: Ord, V, P: RebalancePolicy<K, V>, A: Allocator + Clone> $name<K, V, P, A> {
            /// An empty map using the given allocator.
            pub fn new_in(alloc: A) -> Self {
                $name { tree: Engine::new_in(alloc) }
            }

            /// Number of entries.
            pub fn len(&self) -> usize {
                self.tree.len()
            }

            /// `true` iff the map holds no entries.
            pub fn is_empty(&self) -> bool {
                self.tree.is_empty()
            }

            /// Removes every entry.
            pub fn clear(&mut self) {
                self.tree.clear();
            }

            /// Borrows the value for `key`, without triggering splay
            /// reorganisation on a hit ("`const` lookups do
            /// not splay").
            pub fn get<Q>(&self, key: &Q) -> Option<&V>
            where
                K: Borrow<Q>,
                Q: Ord + ?Sized,
            {
                self.tree.find(key).map(|idx| self.tree.val_at(idx))
            }

            /// Mutably borrows the value for `key`. Fires the splay policy's
            /// search hook on a hit, same as [`find_mut`](Engine::find_mut).
            pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
            where
                K: Borrow<Q>,
                Q: Ord + ?Sized,
            {
                let idx = self.tree.find_mut(key)?;
                Some(self.tree.val_at_mut(idx))
            }

            /// `true` iff some entry's key equals `key`.
            pub fn contains_key<Q>(&self, key: &Q) -> bool
            where
                K: Borrow<Q>,
                Q: Ord + ?Sized,
            {
                self.tree.find(key).is_some()
            }

            /// Removes the entry for `key`, returning its value.
            pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
            where
                K: Borrow<Q>,
                Q: Ord + ?Sized,
            {
                self.tree.remove(key).map(|(_, v)| v)
            }

            /// The entry with the smallest key.
            pub fn first(&self) -> Option<(&K, &V)> {
                let idx = self.tree.min_idx()?;
                Some((self.tree.key_at(idx), self.tree.val_at(idx)))
            }

            /// The entry with the largest key.
            pub fn last(&self) -> Option<(&K, &V)> {
                let idx = self.tree.max_idx()?;
                Some((self.tree.key_at(idx), self.tree.val_at(idx)))
            }

            /// Removes and returns the entry with the smallest key.
            pub fn pop_first(&mut self) -> Option<(K, V)> {
                let idx = self.tree.min_idx()?;
                Some(self.tree.remove_idx(idx))
            }

            /// Removes and returns the entry with the largest key.
            pub fn pop_last(&mut self) -> Option<(K, V)> {
                let idx = self.tree.max_idx()?;
                Some(self.tree.remove_idx(idx))
            }

            /// In-order iterator over `(&K, &V)` pairs.
            pub fn iter(&self) -> Iter<'_, K, V, P, $dup, A> {
                Iter::new(&self.tree, crate::tree::Order::InOrder)
            }

            /// In-order iterator over `(&K, &mut V)` pairs.
            pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
                IterMut::new(&mut self.tree, crate::tree::Order::InOrder)
            }

            /// Consuming in-order iterator over `(K, V)` pairs.
            pub fn into_iter(self) -> ConsumingIter<K, V, P, $dup, A> {
                ConsumingIter::new(self.tree)
            }

            /// An adapter for read-only structural navigation of the
            /// backing tree (`tree_adapter`).
            pub fn as_tree_adapter(&self) -> crate::facade::TreeAdapter<'_, K, V, P, $dup, A> {
                crate::facade::TreeAdapter::new(&self.tree)
            }
        }

        impl<K: Ord, V, P: RebalancePolicy<K, V>, Q, A: Allocator + Clone> Index<&Q> for $name<K, V, P, A>
        where
            K: Borrow<Q>,
            Q: Ord + ?Sized,
        {
            type Output = V;

            fn index(&self, key: &Q) -> &V {
                self.get(key).expect("key not present in map")
            }
        }

        impl<K: Ord + Debug, V: Debug, P: RebalancePolicy<K, V>, A: Allocator + Clone> Debug for $name<K, V, P, A> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_map().entries(self.iter()).finish()
            }
        }

        impl<K: Ord, V, P: RebalancePolicy<K, V>> FromIterator<(K, V)> for $name<K, V, P, Global> {
            fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
                let mut map = Self::new();
                for (k, v) in iter {
                    map.insert(k, v);
                }
                map
            }
        }

        impl<K: Ord + Clone, V: Clone, P: RebalancePolicy<K, V>, A: Allocator + Clone> Clone
            for $name<K, V, P, A>
        {
            fn clone(&self) -> Self {
                $name { tree: self.tree.clone() }
            }
        }
    };
}

use core::iter::FromIterator;

ordered_map_impl!(OrderedMap, RejectDuplicates);
ordered_map_impl!(OrderedMultiMap, AllowDuplicates);

impl<K: Ord, V, P: RebalancePolicy<K, V>, A: Allocator + Clone> OrderedMap<K, V, P, A> {
    /// Inserts `key`/`val`, overwriting and returning any prior value
    /// for an equal key.
    pub fn insert(&mut self, key: K, val: V) -> Option<V> {
        match self.tree.find(&key) {
            Some(idx) => Some(core::mem::replace(self.tree.val_at_mut(idx), val)),
            None => {
                self.tree.insert(key, val);
                None
            }
        }
    }
}

impl<K: Ord, V, P: RebalancePolicy<K, V>, A: Allocator + Clone> OrderedMultiMap<K, V, P, A> {
    /// Inserts `key`/`val`, chaining alongside any existing entries with
    /// an equal key rather than overwriting them.
    pub fn insert(&mut self, key: K, val: V) {
        self.tree.insert(key, val);
    }

    /// Number of entries whose key equals `key`.
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(mut idx) = self.tree.lower_bound(key) else {
            return 0;
        };
        let mut n = 0;
        loop {
            if self.tree.key_at(idx).borrow() != key {
                break;
            }
            n += 1;
            match self.tree.successor_inorder(idx) {
                Some(next) => idx = next,
                None => break,
            }
        }
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Avl, Splay};
    use alloc::vec::Vec;

    #[test]
    fn insert_get_remove_roundtrip() {
        let mut m: OrderedMap<i32, &str> = OrderedMap::new();
        assert_eq!(m.insert(1, "a"), None);
        assert_eq!(m.insert(2, "b"), None);
        assert_eq!(m.insert(1, "aa"), Some("a"));
        assert_eq!(m.get(&1), Some(&"aa"));
        assert_eq!(m.len(), 2);
        assert_eq!(m.remove(&1), Some("aa"));
        assert_eq!(m.get(&1), None);
    }

    #[test]
    fn iter_is_in_order() {
        let mut m: OrderedMap<i32, i32, Avl> = OrderedMap::new();
        for k in [5, 2, 8, 1, 9] {
            m.insert(k, k * 10);
        }
        let keys: Vec<i32> = m.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, alloc::vec![1, 2, 5, 8, 9]);
    }

    #[test]
    fn index_operator_panics_absent_key_but_works_present() {
        let mut m: OrderedMap<i32, &str, Splay> = OrderedMap::new();
        m.insert(1, "one");
        assert_eq!(m[&1], "one");
    }

    #[test]
    fn multimap_keeps_all_duplicates() {
        let mut m: OrderedMultiMap<i32, i32> = OrderedMultiMap::new();
        m.insert(1, 10);
        m.insert(1, 20);
        m.insert(2, 30);
        assert_eq!(m.len(), 3);
        assert_eq!(m.count(&1), 2);
        assert_eq!(m.count(&2), 1);
        assert_eq!(m.count(&3), 0);
    }

    #[test]
    fn pop_first_and_last() {
        let mut m: OrderedMap<i32, &str> = OrderedMap::new();
        m.insert(3, "c");
        m.insert(1, "a");
        m.insert(2, "b");
        assert_eq!(m.pop_first(), Some((1, "a")));
        assert_eq!(m.pop_last(), Some((3, "c")));
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn clone_is_deep() {
        let mut m: OrderedMap<i32, &str> = OrderedMap::new();
        m.insert(1, "a");
        m.insert(2, "b");
        let cloned = m.clone();
        m.clear();
        assert_eq!(cloned.len(), 2);
        assert_eq!(cloned.get(&1), Some(&"a"));
        assert!(m.is_empty());
    }
}
