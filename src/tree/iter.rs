//! Tree iterators, one per traversal order.
//!
//! Scapegoat's `Iter`/`IterMut`/`ConsumingIter` (`tree/iter.rs`) walk an
//! explicit index stack because scapegoat's nodes don't carry parent
//! back-links. Since [`super::node::Node`] does carry one here, in-order
//! (and the other three orders scapegoat's own `// TODO: add pre-order
//! and post-order iterators` flagged as missing) reduce to repeated calls
//! to a successor function with no stack at all.
//!
//! `IterMut` keeps scapegoat's idea of collecting references via a
//! single pass over the arena's backing slice rather than scapegoat's
//! own unfinished attempt at incremental `split_at_mut` bookkeeping (its
//! `next()` left a `// TODO: clever splitting and manipulation here` and
//! a slice it could never merge back): one pass over `iter_mut()`, safely
//! yielding one disjoint `&mut Node` at a time, sorts each into a slot
//! keyed by traversal rank.

use allocator_api2::alloc::{Allocator, Global};

use super::engine::Engine;
use super::node::Node;
use super::policy::{DuplicatePolicy, RebalancePolicy};

/// Which order a tree walk visits nodes in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    InOrder,
    PreOrder,
    PostOrder,
    LevelOrder,
}

fn first_idx<K: Ord, V, P: RebalancePolicy<K, V>, D: DuplicatePolicy, A: Allocator + Clone>(
    engine: &Engine<K, V, P, D, A>,
    order: Order,
) -> Option<usize> {
    match order {
        Order::InOrder => engine.min_idx(),
        Order::PreOrder => engine.first_preorder(),
        Order::PostOrder => engine.first_postorder(),
        Order::LevelOrder => engine.root_idx(),
    }
}

fn next_idx<K: Ord, V, P: RebalancePolicy<K, V>, D: DuplicatePolicy, A: Allocator + Clone>(
    engine: &Engine<K, V, P, D, A>,
    order: Order,
    idx: usize,
) -> Option<usize> {
    match order {
        Order::InOrder => engine.successor_inorder(idx),
        Order::PreOrder => engine.preorder_successor(idx),
        Order::PostOrder => engine.postorder_successor(idx),
        Order::LevelOrder => engine.level_order_successor(idx),
    }
}

/// Borrowing iterator over `(&K, &V)` pairs in the given [`Order`].
pub struct Iter<'a, K: Ord, V, P: RebalancePolicy<K, V>, D: DuplicatePolicy, A: Allocator + Clone = Global> {
    engine: &'a Engine<K, V, P, D, A>,
    order: Order,
    cur: Option<usize>,
}

impl<'a, K: Ord, V, P: RebalancePolicy<K, V>, D: DuplicatePolicy, A: Allocator + Clone> Iter<'a, K, V, P, D, A> {
    pub(crate) fn new(engine: &'a Engine<K, V, P, D, A>, order: Order) -> Self {
        let cur = first_idx(engine, order);
        Iter { engine, order, cur }
    }
}

impl<'a, K: Ord, V, P: RebalancePolicy<K, V>, D: DuplicatePolicy, A: Allocator + Clone> Iterator
    for Iter<'a, K, V, P, D, A>
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cur?;
        let item = (self.engine.key_at(idx), self.engine.val_at(idx));
        self.cur = next_idx(self.engine, self.order, idx);
        Some(item)
    }
}

/// Splits a `&'a mut Node` into its key (shared) and value (mutable)
/// fields — an ordinary disjoint-field reborrow, not aliasing.
fn split_key_val<'a, K: Ord, V>(node: &'a mut Node<K, V>) -> (&'a K, &'a mut V) {
    (&node.key, &mut node.val)
}

/// Mutable iterator over `(&K, &mut V)` pairs in the given [`Order`].
///
/// Built eagerly: the traversal order is computed first (an immutable
/// pass), then a single mutable pass over the arena's backing slice
/// collects every `&mut V` the order needs, keyed by traversal rank, so
/// they can be handed back out in rank order.
pub struct IterMut<'a, K: Ord, V> {
    inner: alloc::vec::IntoIter<(&'a K, &'a mut V)>,
}

impl<'a, K: Ord, V> IterMut<'a, K, V> {
    pub(crate) fn new<P, D, A>(engine: &'a mut Engine<K, V, P, D, A>, order: Order) -> Self
    where
        P: RebalancePolicy<K, V>,
        D: DuplicatePolicy,
        A: Allocator + Clone,
    {
        let mut order_seq = alloc::vec::Vec::new();
        if let Some(start) = first_idx(engine, order) {
            let mut cur = Some(start);
            while let Some(idx) = cur {
                order_seq.push(idx);
                cur = next_idx(engine, order, idx);
            }
        }

        let arena_len = engine.arena().len().max(1);
        let mut rank_of: alloc::vec::Vec<Option<usize>> = alloc::vec![None; arena_len];
        for (rank, &idx) in order_seq.iter().enumerate() {
            rank_of[idx] = Some(rank);
        }

        let mut slots: alloc::vec::Vec<Option<(&'a K, &'a mut V)>> =
            (0..order_seq.len()).map(|_| None).collect();

        for (pos, slot) in engine.arena_mut().as_mut_slice().iter_mut().enumerate() {
            if let Some(node) = slot {
                if let Some(rank) = rank_of.get(pos).copied().flatten() {
                    slots[rank] = Some(split_key_val(node));
                }
            }
        }

        let pairs: alloc::vec::Vec<(&'a K, &'a mut V)> =
            slots.into_iter().map(|s| s.expect("every rank filled")).collect();

        IterMut {
            inner: pairs.into_iter(),
        }
    }
}

impl<'a, K: Ord, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// Consuming in-order iterator: repeatedly removes the current minimum.
pub struct ConsumingIter<K: Ord, V, P: RebalancePolicy<K, V>, D: DuplicatePolicy, A: Allocator + Clone = Global> {
    engine: Engine<K, V, P, D, A>,
}

impl<K: Ord, V, P: RebalancePolicy<K, V>, D: DuplicatePolicy, A: Allocator + Clone> ConsumingIter<K, V, P, D, A> {
    pub(crate) fn new(engine: Engine<K, V, P, D, A>) -> Self {
        ConsumingIter { engine }
    }
}

impl<K: Ord, V, P: RebalancePolicy<K, V>, D: DuplicatePolicy, A: Allocator + Clone> Iterator
    for ConsumingIter<K, V, P, D, A>
{
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.engine.min_idx()?;
        Some(self.engine.remove_idx(idx))
    }
}
