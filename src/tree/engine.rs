//! The unified binary-search-tree engine, generalized
//! from scapegoat's `SGTree` (`tree/tree.rs`). Control flow — iterative
//! descent, fast-path insertion at the ends, a hook fired after each
//! structural change — mirrors scapegoat almost exactly; what's
//! pluggable is *which* rebalancing policy consumes those hooks
//! ([`RebalancePolicy`]) and whether duplicate keys are rejected or
//! chained ([`DuplicatePolicy`]).

use core::cmp::Ordering;

use alloc::collections::VecDeque;
use allocator_api2::alloc::{Allocator, Global};

use super::arena::NodeArena;
use super::node::Node;
use super::policy::{DuplicatePolicy, Plain, RebalancePolicy, RejectDuplicates};

/// The shared binary-tree engine backing every set/map variant in this
/// crate. Parameterized over the rebalancing policy `P`, the duplicate
/// policy `D`, and the allocator `A`.
pub struct Engine<K: Ord, V, P: RebalancePolicy<K, V> = Plain, D: DuplicatePolicy = RejectDuplicates, A: Allocator + Clone = Global>
{
    arena: NodeArena<K, V, A>,
    root: Option<usize>,
    min: Option<usize>,
    max: Option<usize>,
    len: usize,
    _policy: core::marker::PhantomData<P>,
    _dup: core::marker::PhantomData<D>,
}

impl<K: Ord, V, P: RebalancePolicy<K, V>, D: DuplicatePolicy> Engine<K, V, P, D, Global> {
    /// An empty tree using the global allocator.
    pub fn new() -> Self {
        Engine {
            arena: NodeArena::new(),
            root: None,
            min: None,
            max: None,
            len: 0,
            _policy: core::marker::PhantomData,
            _dup: core::marker::PhantomData,
        }
    }
}

impl<K: Ord, V, P: RebalancePolicy<K, V>, D: DuplicatePolicy> Default for Engine<K, V, P, D, Global> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V, P: RebalancePolicy<K, V>, D: DuplicatePolicy, A: Allocator + Clone> Engine<K, V, P, D, A> {
    /// An empty tree using the given allocator.
    pub fn new_in(alloc: A) -> Self {
        Engine {
            arena: NodeArena::new_in(alloc),
            root: None,
            min: None,
            max: None,
            len: 0,
            _policy: core::marker::PhantomData,
            _dup: core::marker::PhantomData,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` iff the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the root, if any.
    pub fn root_idx(&self) -> Option<usize> {
        self.root
    }

    /// Index of the leftmost node, if any.
    pub fn min_idx(&self) -> Option<usize> {
        self.min
    }

    /// Index of the rightmost node, if any.
    pub fn max_idx(&self) -> Option<usize> {
        self.max
    }

    pub(crate) fn arena(&self) -> &NodeArena<K, V, A> {
        &self.arena
    }

    pub(crate) fn arena_mut(&mut self) -> &mut NodeArena<K, V, A> {
        &mut self.arena
    }

    /// Reference to the allocator backing this tree's node storage.
    pub fn allocator(&self) -> &A {
        self.arena.allocator()
    }

    /// Exchanges the entire contents (and allocator) of `self` and
    /// `other` in O(1) ("swap"). Since every field here is
    /// owned in place (no external aliasing), a plain field swap is
    /// always correct regardless of allocator identity — the interesting
    /// allocator-propagation branch only matters when storage itself must
    /// stay behind with one side, which [`crate::dynamic_array::DynamicArray::swap`]
    /// demonstrates for a container where that distinction is observable.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Borrows the key at `idx`.
    pub fn key_at(&self, idx: usize) -> &K {
        &self.arena.get(idx).key
    }

    /// Borrows the value at `idx`.
    pub fn val_at(&self, idx: usize) -> &V {
        &self.arena.get(idx).val
    }

    /// Mutably borrows the value at `idx`.
    pub fn val_at_mut(&mut self, idx: usize) -> &mut V {
        &mut self.arena.get_mut(idx).val
    }

    /// Parent index of `idx`, if any.
    pub fn parent_of(&self, idx: usize) -> Option<usize> {
        self.arena.get(idx).parent
    }

    /// Left child index of `idx`, if any.
    pub fn left_of(&self, idx: usize) -> Option<usize> {
        self.arena.get(idx).left
    }

    /// Right child index of `idx`, if any.
    pub fn right_of(&self, idx: usize) -> Option<usize> {
        self.arena.get(idx).right
    }

    fn is_left_child(&self, idx: usize) -> bool {
        match self.arena.get(idx).parent {
            Some(p) => self.arena.get(p).left == Some(idx),
            None => false,
        }
    }

    /// Rotates `x` left: `x`'s right child `y` takes `x`'s place, `x`
    /// becomes `y`'s left child, and `y`'s old left subtree becomes `x`'s
    /// new right subtree. Returns `y`, the new subtree root.
    pub(crate) fn rotate_left(&mut self, x: usize) -> usize {
        let y = self.arena.get(x).right.expect("rotate_left needs a right child");
        let y_left = self.arena.get(y).left;

        self.arena.get_mut(x).right = y_left;
        if let Some(yl) = y_left {
            self.arena.get_mut(yl).parent = Some(x);
        }

        let x_parent = self.arena.get(x).parent;
        self.arena.get_mut(y).parent = x_parent;
        match x_parent {
            None => self.root = Some(y),
            Some(p) => {
                if self.arena.get(p).left == Some(x) {
                    self.arena.get_mut(p).left = Some(y);
                } else {
                    self.arena.get_mut(p).right = Some(y);
                }
            }
        }

        self.arena.get_mut(y).left = Some(x);
        self.arena.get_mut(x).parent = Some(y);
        y
    }

    /// Mirror of [`rotate_left`](Self::rotate_left).
    pub(crate) fn rotate_right(&mut self, x: usize) -> usize {
        let y = self.arena.get(x).left.expect("rotate_right needs a left child");
        let y_right = self.arena.get(y).right;

        self.arena.get_mut(x).left = y_right;
        if let Some(yr) = y_right {
            self.arena.get_mut(yr).parent = Some(x);
        }

        let x_parent = self.arena.get(x).parent;
        self.arena.get_mut(y).parent = x_parent;
        match x_parent {
            None => self.root = Some(y),
            Some(p) => {
                if self.arena.get(p).left == Some(x) {
                    self.arena.get_mut(p).left = Some(y);
                } else {
                    self.arena.get_mut(p).right = Some(y);
                }
            }
        }

        self.arena.get_mut(y).right = Some(x);
        self.arena.get_mut(x).parent = Some(y);
        y
    }

    fn attach_left(&mut self, parent: usize, key: K, val: V) -> usize {
        let mut node = Node::new(key, val);
        node.parent = Some(parent);
        let idx = self.arena.insert(node);
        self.arena.get_mut(parent).left = Some(idx);
        idx
    }

    fn attach_right(&mut self, parent: usize, key: K, val: V) -> usize {
        let mut node = Node::new(key, val);
        node.parent = Some(parent);
        let idx = self.arena.insert(node);
        self.arena.get_mut(parent).right = Some(idx);
        idx
    }

    /// Inserts `key`/`val` (empty fast path; `< min`/`> max` fast paths;
    /// standard descent with the duplicate policy `D` consulted on an
    /// equal key). Returns the index of the relevant node and `true` iff
    /// a new node was created.
    pub fn insert(&mut self, key: K, val: V) -> (usize, bool) {
        self.insert_with_hint(None, key, val)
    }

    /// As [`insert`](Self::insert), but consults `hint` first: if `hint`
    /// is a correct neighbour of the insertion point (its in-order
    /// predecessor or successor brackets `key`), attaches in O(1)
    /// ( step 3).
    pub fn insert_with_hint(&mut self, hint: Option<usize>, key: K, val: V) -> (usize, bool) {
        if self.root.is_none() {
            let idx = self.arena.insert(Node::new(key, val));
            self.root = Some(idx);
            self.min = Some(idx);
            self.max = Some(idx);
            self.len = 1;
            P::on_insert(self, idx);
            return (idx, true);
        }

        if let Some(min_idx) = self.min {
            if key < self.arena.get(min_idx).key {
                let idx = self.attach_left(min_idx, key, val);
                self.min = Some(idx);
                self.len += 1;
                P::on_insert(self, idx);
                return (idx, true);
            }
        }
        if let Some(max_idx) = self.max {
            if key > self.arena.get(max_idx).key {
                let idx = self.attach_right(max_idx, key, val);
                self.max = Some(idx);
                self.len += 1;
                P::on_insert(self, idx);
                return (idx, true);
            }
        }

        if let Some(h) = hint {
            if Some(h) != self.root {
                if let Some(idx) = self.try_hinted_attach(h, &key) {
                    let new_idx = match idx {
                        HintedAttach::Left(parent) => self.attach_left(parent, key, val),
                        HintedAttach::Right(parent) => self.attach_right(parent, key, val),
                    };
                    self.len += 1;
                    P::on_insert(self, new_idx);
                    return (new_idx, true);
                }
            }
        }

        let mut cur = self.root.expect("checked non-empty above");
        loop {
            match key.cmp(&self.arena.get(cur).key) {
                Ordering::Equal => {
                    if D::ALLOW {
                        match self.arena.get(cur).left {
                            Some(l) => cur = l,
                            None => {
                                let idx = self.attach_left(cur, key, val);
                                self.len += 1;
                                P::on_insert(self, idx);
                                return (idx, true);
                            }
                        }
                    } else {
                        return (cur, false);
                    }
                }
                Ordering::Less => match self.arena.get(cur).left {
                    Some(l) => cur = l,
                    None => {
                        let idx = self.attach_left(cur, key, val);
                        self.len += 1;
                        P::on_insert(self, idx);
                        return (idx, true);
                    }
                },
                Ordering::Greater => match self.arena.get(cur).right {
                    Some(r) => cur = r,
                    None => {
                        let idx = self.attach_right(cur, key, val);
                        self.len += 1;
                        P::on_insert(self, idx);
                        return (idx, true);
                    }
                },
            }
        }
    }

    /// Checks whether `hint` is a correct in-order neighbour of `key`
    /// (i.e. `hint`'s predecessor/successor brackets it), returning where
    /// to attach if so.
    fn try_hinted_attach(&self, hint: usize, key: &K) -> Option<HintedAttach> {
        let hint_key = &self.arena.get(hint).key;
        match key.cmp(hint_key) {
            Ordering::Greater => {
                if self.arena.get(hint).right.is_none() {
                    if let Some(succ) = self.successor_inorder(hint) {
                        if key >= &self.arena.get(succ).key {
                            return None;
                        }
                    }
                    Some(HintedAttach::Right(hint))
                } else {
                    None
                }
            }
            Ordering::Less => {
                if self.arena.get(hint).left.is_none() {
                    if let Some(pred) = self.predecessor_inorder(hint) {
                        if key <= &self.arena.get(pred).key {
                            return None;
                        }
                    }
                    Some(HintedAttach::Left(hint))
                } else {
                    None
                }
            }
            Ordering::Equal => None,
        }
    }

    /// Finds the node equal to `key`, without firing the search hook
    /// ("`const` lookups do not splay").
    pub fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        K: core::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cur = self.root;
        while let Some(idx) = cur {
            match key.cmp(self.arena.get(idx).key.borrow()) {
                Ordering::Equal => return Some(idx),
                Ordering::Less => cur = self.arena.get(idx).left,
                Ordering::Greater => cur = self.arena.get(idx).right,
            }
        }
        None
    }

    /// As [`find`](Self::find), but fires `P::on_search` on a hit
    /// (splay variant moves the found node to the root).
    pub fn find_mut<Q>(&mut self, key: &Q) -> Option<usize>
    where
        K: core::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let found = self.find(key);
        if let Some(idx) = found {
            P::on_search(self, idx);
        }
        found
    }

    /// First node whose key is not less than `k` (/// multi-variant `lowerBound`).
    pub fn lower_bound<Q>(&self, k: &Q) -> Option<usize>
    where
        K: core::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cur = self.root;
        let mut best = None;
        while let Some(idx) = cur {
            if self.arena.get(idx).key.borrow() < k {
                cur = self.arena.get(idx).right;
            } else {
                best = Some(idx);
                cur = self.arena.get(idx).left;
            }
        }
        best
    }

    /// First node strictly greater than `k` (/// multi-variant `upperBound`).
    pub fn upper_bound<Q>(&self, k: &Q) -> Option<usize>
    where
        K: core::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut cur = self.root;
        let mut best = None;
        while let Some(idx) = cur {
            if self.arena.get(idx).key.borrow() <= k {
                cur = self.arena.get(idx).right;
            } else {
                best = Some(idx);
                cur = self.arena.get(idx).left;
            }
        }
        best
    }

    /// In-order successor of `idx` ( table: "right
    /// subtree's leftmost, else first ancestor of which we are a left
    /// descendant").
    pub fn successor_inorder(&self, idx: usize) -> Option<usize> {
        if let Some(r) = self.arena.get(idx).right {
            return Some(self.leftmost_from(r));
        }
        let mut cur = idx;
        while !self.is_left_child(cur) {
            cur = self.arena.get(cur).parent?;
        }
        self.arena.get(cur).parent
    }

    /// In-order predecessor of `idx` (symmetric to
    /// [`successor_inorder`](Self::successor_inorder)).
    pub fn predecessor_inorder(&self, idx: usize) -> Option<usize> {
        if let Some(l) = self.arena.get(idx).left {
            return Some(self.rightmost_from(l));
        }
        let mut cur = idx;
        while self.is_left_child(cur) {
            cur = self.arena.get(cur).parent?;
        }
        self.arena.get(cur).parent
    }

    fn leftmost_from(&self, mut idx: usize) -> usize {
        while let Some(l) = self.arena.get(idx).left {
            idx = l;
        }
        idx
    }

    fn rightmost_from(&self, mut idx: usize) -> usize {
        while let Some(r) = self.arena.get(idx).right {
            idx = r;
        }
        idx
    }

    /// Removes the node matching `key`, returning its element (the
    /// standard degree-0/1/2 removal algorithm).
    pub fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: core::borrow::Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let idx = self.find(key)?;
        Some(self.remove_idx(idx))
    }

    /// Removes the node at `idx` directly, returning its element.
    pub fn remove_idx(&mut self, idx: usize) -> (K, V) {
        let (left, right) = (self.arena.get(idx).left, self.arena.get(idx).right);

        let (key, val, removed_slot_parent) = match (left, right) {
            (None, None) | (Some(_), None) | (None, Some(_)) => {
                // degree 0 or 1: splice the single child (if any) into idx's slot
                let child = left.or(right);
                let parent = self.arena.get(idx).parent;
                self.replace_child_in_parent(parent, idx, child);
                if let Some(c) = child {
                    self.arena.get_mut(c).parent = parent;
                }
                let node = self.arena.remove(idx);
                (node.key, node.val, parent)
            }
            (Some(_), Some(_)) => {
                // degree 2: splice out the in-order predecessor, then move
                // its element into idx's still-occupied slot.
                let pred = self.predecessor_inorder(idx).expect("degree-2 node has a predecessor");
                let pred_parent = self.arena.get(pred).parent;
                let pred_left = self.arena.get(pred).left;

                self.replace_child_in_parent(pred_parent, pred, pred_left);
                if let Some(c) = pred_left {
                    self.arena.get_mut(c).parent = pred_parent;
                }

                let pred_node = self.arena.remove(pred);
                let old_key = core::mem::replace(&mut self.arena.get_mut(idx).key, pred_node.key);
                let old_val = core::mem::replace(&mut self.arena.get_mut(idx).val, pred_node.val);

                // The hook walks up from wherever the slab actually shrank.
                let hook_parent = if pred_parent == Some(idx) {
                    Some(idx)
                } else {
                    pred_parent
                };
                (old_key, old_val, hook_parent)
            }
        };

        self.len -= 1;
        self.recompute_min_max();
        P::on_remove(self, removed_slot_parent);
        (key, val)
    }

    fn replace_child_in_parent(&mut self, parent: Option<usize>, old: usize, new: Option<usize>) {
        match parent {
            None => self.root = new,
            Some(p) => {
                if self.arena.get(p).left == Some(old) {
                    self.arena.get_mut(p).left = new;
                } else {
                    self.arena.get_mut(p).right = new;
                }
            }
        }
    }

    fn recompute_min_max(&mut self) {
        match self.root {
            None => {
                self.min = None;
                self.max = None;
            }
            Some(r) => {
                self.min = Some(self.leftmost_from(r));
                self.max = Some(self.rightmost_from(r));
            }
        }
    }

    /// First node in pre-order (root, then left subtree, then right
    /// subtree): always the root itself.
    pub(crate) fn first_preorder(&self) -> Option<usize> {
        self.root
    }

    /// Pre-order successor of `idx`: its left child if any, else its
    /// right child if any, else the right child of the nearest ancestor
    /// reached by ascending a left edge ( traversal table).
    pub(crate) fn preorder_successor(&self, idx: usize) -> Option<usize> {
        let node = self.arena.get(idx);
        if let Some(l) = node.left {
            return Some(l);
        }
        if let Some(r) = node.right {
            return Some(r);
        }
        let mut cur = idx;
        loop {
            let parent = self.arena.get(cur).parent?;
            if self.arena.get(parent).left == Some(cur) {
                if let Some(r) = self.arena.get(parent).right {
                    return Some(r);
                }
            }
            cur = parent;
        }
    }

    /// First node in post-order: descend preferring left, falling back to
    /// right, until a leaf.
    pub(crate) fn first_postorder(&self) -> Option<usize> {
        self.root.map(|r| self.deepest_leftward(r))
    }

    fn deepest_leftward(&self, mut idx: usize) -> usize {
        loop {
            let node = self.arena.get(idx);
            match node.left.or(node.right) {
                Some(next) => idx = next,
                None => return idx,
            }
        }
    }

    /// Post-order successor of `idx`: if `idx` is a left child with a
    /// right sibling, the sibling's own first-post-order node; otherwise
    /// the parent ( traversal table).
    pub(crate) fn postorder_successor(&self, idx: usize) -> Option<usize> {
        let parent = self.arena.get(idx).parent?;
        if self.arena.get(parent).left == Some(idx) {
            if let Some(sibling) = self.arena.get(parent).right {
                return Some(self.deepest_leftward(sibling));
            }
        }
        Some(parent)
    }

    /// Level-order successor of `idx`: rebuilds a breadth-first queue from
    /// the root each call. O(n) per step, acceptable since level-order
    /// iteration is rare ( traversal table).
    pub(crate) fn level_order_successor(&self, idx: usize) -> Option<usize> {
        let root = self.root?;
        let mut queue: VecDeque<usize> = VecDeque::new();
        queue.push_back(root);
        let mut found = false;
        while let Some(n) = queue.pop_front() {
            if found {
                return Some(n);
            }
            if n == idx {
                found = true;
            }
            let node = self.arena.get(n);
            if let Some(l) = node.left {
                queue.push_back(l);
            }
            if let Some(r) = node.right {
                queue.push_back(r);
            }
        }
        None
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.min = None;
        self.max = None;
        self.len = 0;
    }
}

/// Deep copy. Rebuilds a fresh tree from an in-order walk of `self`
/// rather than cloning the arena slot-for-slot, so the clone carries no
/// vacated free-list slots and goes through the same
/// `P::on_insert`/`D::ALLOW` machinery as any other insertion — the
/// result satisfies every container invariant, not just a byte-for-byte
/// mirror of `self`'s internal layout.
impl<K: Ord + Clone, V: Clone, P: RebalancePolicy<K, V>, D: DuplicatePolicy, A: Allocator + Clone> Clone
    for Engine<K, V, P, D, A>
{
    fn clone(&self) -> Self {
        let mut out = Engine::new_in(self.arena.allocator().clone());
        if let Some(mut cur) = self.min {
            loop {
                let key = self.arena.get(cur).key.clone();
                let val = self.arena.get(cur).val.clone();
                out.insert(key, val);
                match self.successor_inorder(cur) {
                    Some(next) => cur = next,
                    None => break,
                }
            }
        }
        out
    }
}

enum HintedAttach {
    Left(usize),
    Right(usize),
}
