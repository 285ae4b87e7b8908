//! Node storage arena, generalized from scapegoat's `NodeArena`
//! (`tree/arena.rs`) to an allocator-generic `Vec<Option<Node<K,V>>, A>`
//! instead of a fixed-capacity `SmallVec`.
//!
//! The removal trick is unchanged from scapegoat: push a placeholder
//! `None`, swap it into the vacated slot, and pop the real node off the
//! end. That means *no other occupied index ever moves* — every other
//! stored `left`/`right`/`parent` link in the tree stays valid across a
//! removal, which is exactly what lets [`super::node::Node`] store parent
//! back-links directly instead of re-deriving them by re-descending from
//! the root the way scapegoat does.

use allocator_api2::alloc::{Allocator, Global};
use allocator_api2::vec::Vec as AVec;

use super::node::Node;

type OptNode<K, V> = Option<Node<K, V>>;

/// A free-list-backed slab of tree nodes, generic over an allocator `A`.
pub struct NodeArena<K: Ord, V, A: Allocator + Clone = Global> {
    slots: AVec<OptNode<K, V>, A>,
    free: AVec<usize, A>,
}

impl<K: Ord, V> NodeArena<K, V, Global> {
    /// An empty arena using the global allocator.
    pub fn new() -> Self {
        NodeArena {
            slots: AVec::new(),
            free: AVec::new(),
        }
    }
}

impl<K: Ord, V> Default for NodeArena<K, V, Global> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V, A: Allocator + Clone> NodeArena<K, V, A> {
    /// An empty arena using the given allocator.
    pub fn new_in(alloc: A) -> Self {
        NodeArena {
            slots: AVec::new_in(alloc.clone()),
            free: AVec::new_in(alloc),
        }
    }

    /// Stores `node`, growing if necessary, returning its index.
    pub fn insert(&mut self, node: Node<K, V>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                debug_assert!(self.slots[idx].is_none(), "overwrite of occupied slot");
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    /// Removes and returns the node at `idx`. No other occupied index is
    /// disturbed (see module docs).
    pub fn remove(&mut self, idx: usize) -> Node<K, V> {
        debug_assert!(idx < self.slots.len(), "removal past last index");
        self.slots.push(None);
        let last = self.slots.len() - 1;
        self.slots.swap(idx, last);
        self.free.push(idx);
        self.slots
            .pop()
            .flatten()
            .expect("removal of a vacant slot")
    }

    /// Borrows the node at `idx`.
    pub fn get(&self, idx: usize) -> &Node<K, V> {
        self.slots[idx].as_ref().expect("access to a vacant slot")
    }

    /// Mutably borrows the node at `idx`.
    pub fn get_mut(&mut self, idx: usize) -> &mut Node<K, V> {
        self.slots[idx].as_mut().expect("access to a vacant slot")
    }

    /// Total number of slots, including vacant ones left by removals.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Reference to the allocator backing this arena's storage.
    pub fn allocator(&self) -> &A {
        self.slots.allocator()
    }

    /// `true` iff the arena holds no slots at all (not even vacant ones).
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drops every slot and free-list entry.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    /// Iterates over occupied slots' indices and nodes, in arena order
    /// (not tree order).
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Node<K, V>)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, n)| n.as_ref().map(|n| (i, n)))
    }

    /// The raw backing slots, for callers that need a single safe pass to
    /// collect disjoint `&mut` borrows in bulk (see
    /// `tree::iter::IterMut`).
    pub fn as_mut_slice(&mut self) -> &mut [Option<Node<K, V>>] {
        self.slots.as_mut_slice()
    }
}
