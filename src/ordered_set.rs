//! Ordered Set / MultiSet, wrapping [`OrderedMap`] with a
//! `()` value the same way scapegoat's `SgSet` wraps `SGTree<T, ()>`
//! (`set.rs`: `pub struct SgSet<T: Ord> { map: SgMap<T, ()> }`).

use core::borrow::Borrow;
use core::fmt::{self, Debug};

use allocator_api2::alloc::{Allocator, Global};

use crate::ordered_map::{OrderedMap, OrderedMultiMap};
use crate::tree::{Plain, RebalancePolicy};

/// An ordered set of unique elements, backed by a tree rebalanced
/// according to `P`.
pub struct OrderedSet<T: Ord, P: RebalancePolicy<T, ()> = Plain, A: Allocator + Clone = Global> {
    map: OrderedMap<T, (), P, A>,
}

/// An ordered multiset, allowing duplicate elements.
pub struct OrderedMultiSet<T: Ord, P: RebalancePolicy<T, ()> = Plain, A: Allocator + Clone = Global> {
    map: OrderedMultiMap<T, (), P, A>,
}

macro_rules! ordered_set_impl {
    ($name:ident, $inner:ident) => {
        impl<T: Ord, P: RebalancePolicy<T, ()>> $name<T, P, Global> {
            /// An empty set using the global allocator.
            pub fn new() -> Self {
                $name { map: $inner::new() }
            }
        }

        impl<T: Ord, P: RebalancePolicy<T, ()>> Default for $name<T, P, Global> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T: Ord, P: RebalancePolicy<T, ()>, A: Allocator + Clone> $name<T, P, A> {
            /// An empty set using the given allocator.
            pub fn new_in(alloc: A) -> Self {
                $name { map: $inner::new_in(alloc) }
            }

            /// Number of elements.
            pub fn len(&self) -> usize {
                self.map.len()
            }

            /// `true` iff the set holds no elements.
            pub fn is_empty(&self) -> bool {
                self.map.is_empty()
            }

            /// Removes every element.
            pub fn clear(&mut self) {
                self.map.clear();
            }

            /// `true` iff some stored element equals `value`.
            pub fn contains<Q>(&self, value: &Q) -> bool
            where
                T: Borrow<Q>,
                Q: Ord + ?Sized,
            {
                self.map.contains_key(value)
            }

            /// Removes `value`, returning whether it was present.
            pub fn remove<Q>(&mut self, value: &Q) -> bool
            where
                T: Borrow<Q>,
                Q: Ord + ?Sized,
            {
                self.map.remove(value).is_some()
            }

            /// The smallest element.
            pub fn first(&self) -> Option<&T> {
                self.map.first().map(|(k, _)| k)
            }

            /// The largest element.
            pub fn last(&self) -> Option<&T> {
                self.map.last().map(|(k, _)| k)
            }

            /// Iterator over elements in ascending order.
            pub fn iter(&self) -> impl Iterator<Item = &T> {
                self.map.iter().map(|(k, _)| k)
            }

            /// Removes and returns the smallest element.
            pub fn pop_first(&mut self) -> Option<T> {
                self.map.pop_first().map(|(k, _)| k)
            }

            /// Removes and returns the largest element.
            pub fn pop_last(&mut self) -> Option<T> {
                self.map.pop_last().map(|(k, _)| k)
            }

            /// Consumes the set, yielding elements in ascending order.
            pub fn into_iter(self) -> impl Iterator<Item = T> {
                self.map.into_iter().map(|(k, _)| k)
            }
        }

        impl<T: Ord + Debug, P: RebalancePolicy<T, ()>, A: Allocator + Clone> Debug for $name<T, P, A> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_set().entries(self.iter()).finish()
            }
        }

        impl<T: Ord, P: RebalancePolicy<T, ()>> FromIterator<T> for $name<T, P, Global> {
            fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
                let mut set = Self::new();
                for v in iter {
                    set.insert(v);
                }
                set
            }
        }

        impl<T: Ord + Clone, P: RebalancePolicy<T, ()>, A: Allocator + Clone> Clone for $name<T, P, A> {
            fn clone(&self) -> Self {
                $name { map: self.map.clone() }
            }
        }
    };
}

ordered_set_impl!(OrderedSet, OrderedMap);
ordered_set_impl!(OrderedMultiSet, OrderedMultiMap);

impl<T: Ord, P: RebalancePolicy<T, ()>, A: Allocator + Clone> OrderedSet<T, P, A> {
    /// Inserts `value`, returning `true` if it was newly added (`false`
    /// if an equal element was already present, which is left
    /// unchanged).
    pub fn insert(&mut self, value: T) -> bool {
        self.map.insert(value, ()).is_none()
    }

    /// `true` iff `self` and `other` share no elements.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.iter().all(|v| !other.contains(v))
    }

    /// `true` iff every element of `self` is in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|v| other.contains(v))
    }

    /// `true` iff every element of `other` is in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }
}

impl<T: Ord, P: RebalancePolicy<T, ()>, A: Allocator + Clone> OrderedMultiSet<T, P, A> {
    /// Inserts `value`, always adding a new element even if an equal
    /// one is already present.
    pub fn insert(&mut self, value: T) {
        self.map.insert(value, ());
    }

    /// Number of stored elements equal to `value`.
    pub fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map.count(value)
    }
}

use core::iter::FromIterator;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Avl;

    #[test]
    fn insert_reports_newly_added() {
        let mut s: OrderedSet<i32> = OrderedSet::new();
        assert!(s.insert(1));
        assert!(!s.insert(1));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn set_algebra() {
        let a: OrderedSet<i32, Avl> = [1, 2, 3].into_iter().collect();
        let b: OrderedSet<i32, Avl> = [2, 3, 4].into_iter().collect();
        assert!(!a.is_disjoint(&b));
        let c: OrderedSet<i32, Avl> = [1, 2].into_iter().collect();
        assert!(c.is_subset(&a));
        assert!(a.is_superset(&c));
    }

    #[test]
    fn multiset_counts_duplicates() {
        let mut s: OrderedMultiSet<i32> = OrderedMultiSet::new();
        s.insert(1);
        s.insert(1);
        s.insert(2);
        assert_eq!(s.len(), 3);
        assert_eq!(s.count(&1), 2);
    }

    #[test]
    fn clone_is_deep() {
        let mut s: OrderedSet<i32> = OrderedSet::new();
        s.insert(1);
        s.insert(2);
        let cloned = s.clone();
        s.clear();
        assert_eq!(cloned.len(), 2);
        assert!(cloned.contains(&1));
        assert!(s.is_empty());
    }
}
