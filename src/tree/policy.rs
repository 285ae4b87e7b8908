//! Rebalancing and duplicate-key policies.
//!
//! Scapegoat's tree has exactly one rebalancing strategy (scapegoat,
//! alpha-weight-balanced — see `tree/tree.rs`'s `should_rebalance`/
//! `rebuild` pair) wired directly into `SGTree`. This crate supports
//! three interchangeable strategies instead, so this module pulls the
//! hook points scapegoat's tree already calls at the right moments
//! (after insert, after remove, after search) out into a trait,
//! [`RebalancePolicy`], and gives each strategy its own implementation.
//! This keeps the engine's insert/remove/search control flow exactly
//! shaped like scapegoat's, generalized over *which* rebalancing runs
//! at each hook rather than hardcoding scapegoat's.

use allocator_api2::alloc::Allocator;

use super::engine::Engine;

/// Governs whether a tree accepts a second element comparing equal to one
/// already present ("Set/map variants reject duplicates
/// ... Multi-variants accept duplicates").
pub trait DuplicatePolicy: Default {
    /// `true` for multi-variants.
    const ALLOW: bool;
}

/// Set/Map policy: a duplicate key leaves the tree unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct RejectDuplicates;
impl DuplicatePolicy for RejectDuplicates {
    const ALLOW: bool = false;
}

/// Multiset/Multimap policy: a duplicate key descends left, producing a
/// stable left-leaning chain whose in-order traversal preserves insertion
/// order.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllowDuplicates;
impl DuplicatePolicy for AllowDuplicates {
    const ALLOW: bool = true;
}

/// A rebalancing strategy: hooks fired by [`Engine`] at insert, remove,
/// and search, with the freedom to do nothing ([`Plain`]), locally
/// rebalance ([`Avl`]), or globally restructure ([`Splay`]).
pub trait RebalancePolicy<K: Ord, V>: Default {
    /// Fires once for the node just inserted.
    fn on_insert<D: DuplicatePolicy, A: Allocator + Clone>(
        engine: &mut Engine<K, V, Self, D, A>,
        inserted: usize,
    ) where
        Self: Sized;

    /// Fires with the parent of the physically removed slot (`None` if
    /// the tree is now empty).
    fn on_remove<D: DuplicatePolicy, A: Allocator + Clone>(
        engine: &mut Engine<K, V, Self, D, A>,
        parent_of_removed: Option<usize>,
    ) where
        Self: Sized;

    /// Fires for a *non-const* search that found `found`. Const lookups
    /// never call this ("`const` lookups do not splay, to
    /// preserve the const contract").
    fn on_search<D: DuplicatePolicy, A: Allocator + Clone>(
        engine: &mut Engine<K, V, Self, D, A>,
        found: usize,
    ) where
        Self: Sized;
}

/// No rebalancing at all: a textbook unbalanced BST. Degrades to O(n) per
/// operation on adversarial (e.g. sorted) insertion order, same as the
/// teacher's tree would without its scapegoat hook.
#[derive(Clone, Copy, Debug, Default)]
pub struct Plain;

impl<K: Ord, V> RebalancePolicy<K, V> for Plain {
    fn on_insert<D: DuplicatePolicy, A: Allocator + Clone>(
        _engine: &mut Engine<K, V, Self, D, A>,
        _inserted: usize,
    ) {
    }

    fn on_remove<D: DuplicatePolicy, A: Allocator + Clone>(
        _engine: &mut Engine<K, V, Self, D, A>,
        _parent_of_removed: Option<usize>,
    ) {
    }

    fn on_search<D: DuplicatePolicy, A: Allocator + Clone>(
        _engine: &mut Engine<K, V, Self, D, A>,
        _found: usize,
    ) {
    }
}

/// Height-balanced rebalancing: `onInsert` walks up from
/// the inserted node, stopping at (and fixing) the first ancestor whose
/// balance factor leaves `[-1, +1]`; `onRemove` continues all the way to
/// the root, since a single rotation after a removal does not guarantee
/// the ancestors above it are still balanced.
#[derive(Clone, Copy, Debug, Default)]
pub struct Avl;

impl Avl {
    fn height<K: Ord, V, D: DuplicatePolicy, A: Allocator + Clone>(
        engine: &Engine<K, V, Self, D, A>,
        idx: Option<usize>,
    ) -> i32 {
        idx.map(|i| engine.arena().get(i).height).unwrap_or(0)
    }

    fn update_height<K: Ord, V, D: DuplicatePolicy, A: Allocator + Clone>(
        engine: &mut Engine<K, V, Self, D, A>,
        idx: usize,
    ) {
        let (l, r) = {
            let node = engine.arena().get(idx);
            (node.left, node.right)
        };
        let h = 1 + Self::height(engine, l).max(Self::height(engine, r));
        engine.arena_mut().get_mut(idx).height = h;
    }

    fn balance_factor<K: Ord, V, D: DuplicatePolicy, A: Allocator + Clone>(
        engine: &Engine<K, V, Self, D, A>,
        idx: usize,
    ) -> i32 {
        let node = engine.arena().get(idx);
        Self::height(engine, node.left) - Self::height(engine, node.right)
    }

    fn rebalance_at<K: Ord, V, D: DuplicatePolicy, A: Allocator + Clone>(
        engine: &mut Engine<K, V, Self, D, A>,
        idx: usize,
    ) {
        let bf = Self::balance_factor(engine, idx);
        if bf > 1 {
            let left = engine.arena().get(idx).left.expect("left-heavy has left child");
            if Self::balance_factor(engine, left) < 0 {
                let new_left = engine.rotate_left(left);
                Self::update_height(engine, left);
                Self::update_height(engine, new_left);
            }
            let new_root = engine.rotate_right(idx);
            Self::update_height(engine, idx);
            Self::update_height(engine, new_root);
        } else if bf < -1 {
            let right = engine.arena().get(idx).right.expect("right-heavy has right child");
            if Self::balance_factor(engine, right) > 0 {
                let new_right = engine.rotate_right(right);
                Self::update_height(engine, right);
                Self::update_height(engine, new_right);
            }
            let new_root = engine.rotate_left(idx);
            Self::update_height(engine, idx);
            Self::update_height(engine, new_root);
        }
    }
}

impl<K: Ord, V> RebalancePolicy<K, V> for Avl {
    fn on_insert<D: DuplicatePolicy, A: Allocator + Clone>(
        engine: &mut Engine<K, V, Self, D, A>,
        inserted: usize,
    ) {
        let mut cur = engine.arena().get(inserted).parent;
        while let Some(idx) = cur {
            Self::update_height(engine, idx);
            let bf = Self::balance_factor(engine, idx);
            let next = engine.arena().get(idx).parent;
            if bf > 1 || bf < -1 {
                Self::rebalance_at(engine, idx);
                break;
            }
            cur = next;
        }
    }

    fn on_remove<D: DuplicatePolicy, A: Allocator + Clone>(
        engine: &mut Engine<K, V, Self, D, A>,
        parent_of_removed: Option<usize>,
    ) {
        let mut cur = parent_of_removed;
        while let Some(idx) = cur {
            Self::update_height(engine, idx);
            let bf = Self::balance_factor(engine, idx);
            if bf > 1 || bf < -1 {
                Self::rebalance_at(engine, idx);
            }
            cur = engine.arena().get(idx).parent;
        }
    }

    fn on_search<D: DuplicatePolicy, A: Allocator + Clone>(
        _engine: &mut Engine<K, V, Self, D, A>,
        _found: usize,
    ) {
    }
}

/// Move-to-root rebalancing: every insert, removal, and
/// successful non-const search ends by splaying the accessed node (for
/// removal, the parent of the vacated slot) to the root via zig / zig-zig
/// / zig-zag steps.
#[derive(Clone, Copy, Debug, Default)]
pub struct Splay;

impl Splay {
    fn is_left_child<K: Ord, V, D: DuplicatePolicy, A: Allocator + Clone>(
        engine: &Engine<K, V, Self, D, A>,
        idx: usize,
    ) -> bool {
        let parent = engine.arena().get(idx).parent.expect("has a parent");
        engine.arena().get(parent).left == Some(idx)
    }

    fn splay<K: Ord, V, D: DuplicatePolicy, A: Allocator + Clone>(
        engine: &mut Engine<K, V, Self, D, A>,
        idx: usize,
    ) {
        while let Some(parent) = engine.arena().get(idx).parent {
            match engine.arena().get(parent).parent {
                None => {
                    // zig
                    if Self::is_left_child(engine, idx) {
                        engine.rotate_right(parent);
                    } else {
                        engine.rotate_left(parent);
                    }
                }
                Some(grand) => {
                    let parent_is_left = Self::is_left_child(engine, parent);
                    let idx_is_left = Self::is_left_child(engine, idx);
                    if parent_is_left == idx_is_left {
                        // zig-zig
                        if idx_is_left {
                            engine.rotate_right(grand);
                            engine.rotate_right(parent);
                        } else {
                            engine.rotate_left(grand);
                            engine.rotate_left(parent);
                        }
                    } else {
                        // zig-zag
                        if idx_is_left {
                            engine.rotate_right(parent);
                            engine.rotate_left(grand);
                        } else {
                            engine.rotate_left(parent);
                            engine.rotate_right(grand);
                        }
                    }
                }
            }
        }
    }
}

impl<K: Ord, V> RebalancePolicy<K, V> for Splay {
    fn on_insert<D: DuplicatePolicy, A: Allocator + Clone>(
        engine: &mut Engine<K, V, Self, D, A>,
        inserted: usize,
    ) {
        Self::splay(engine, inserted);
    }

    fn on_remove<D: DuplicatePolicy, A: Allocator + Clone>(
        engine: &mut Engine<K, V, Self, D, A>,
        parent_of_removed: Option<usize>,
    ) {
        if let Some(idx) = parent_of_removed {
            Self::splay(engine, idx);
        }
    }

    fn on_search<D: DuplicatePolicy, A: Allocator + Clone>(
        engine: &mut Engine<K, V, Self, D, A>,
        found: usize,
    ) {
        Self::splay(engine, found);
    }
}
