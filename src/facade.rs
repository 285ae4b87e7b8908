//! Facade adapters: `Queue`, `Stack`, and `TreeAdapter`, restricted
//! interfaces over the other containers. Each is a
//! thin wrapper narrowing a general-purpose container down to the few
//! operations its name promises, the way scapegoat's own `SgMap`
//! wraps `SGTree` to hide the tree's internal index addressing
//! (`map.rs`: `pub struct SgMap<K, V, ...> { pub(crate) bst: SGTree<...>
//! }`).

use allocator_api2::alloc::{Allocator, Global};

use crate::dynamic_array::DynamicArray;
use crate::linked_list::LinkedList;

/// FIFO adapter over a [`LinkedList`]: push at the back, pop from the
/// front, both O(1) (`Queue`).
pub struct Queue<T, A: Allocator + Clone = Global> {
    inner: LinkedList<T, A>,
}

impl<T> Queue<T, Global> {
    /// An empty queue using the global allocator.
    pub fn new() -> Self {
        Queue { inner: LinkedList::new() }
    }
}

impl<T> Default for Queue<T, Global> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A: Allocator + Clone> Queue<T, A> {
    /// An empty queue using the given allocator.
    pub fn new_in(alloc: A) -> Self {
        Queue { inner: LinkedList::new_in(alloc) }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// `true` iff the queue holds no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Enqueues `v` at the back.
    pub fn push(&mut self, v: T) {
        self.inner.push_back(v);
    }

    /// Dequeues and returns the front element, if any.
    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    /// Borrows the front element without removing it.
    pub fn front(&self) -> Option<&T> {
        let begin = self.inner.begin();
        self.inner.get(begin)
    }
}

/// LIFO adapter over a [`DynamicArray`]: push/pop at the same end, both
/// amortized O(1) (`Stack`).
pub struct Stack<T, A: Allocator + Clone = Global> {
    inner: DynamicArray<T, A>,
}

impl<T> Stack<T, Global> {
    /// An empty stack using the global allocator.
    pub fn new() -> Self {
        Stack { inner: DynamicArray::new() }
    }
}

impl<T> Default for Stack<T, Global> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A: Allocator + Clone> Stack<T, A> {
    /// An empty stack using the given allocator.
    pub fn new_in(alloc: A) -> Self {
        Stack { inner: DynamicArray::new_in(alloc) }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// `true` iff the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Pushes `v` onto the top.
    pub fn push(&mut self, v: T) {
        self.inner.push(v);
    }

    /// Pops and returns the top element, if any.
    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop()
    }

    /// Borrows the top element without removing it.
    pub fn top(&self) -> Option<&T> {
        self.inner.get(self.inner.len().checked_sub(1)?)
    }
}

/// A narrowed view over a [`crate::tree::Engine`] exposing only
/// navigation (root/left/right/parent, plus key/value access) and no
/// insertion or removal — for callers that want to walk a tree's shape
/// without being able to mutate its structure (/// `tree_adapter`).
pub struct TreeAdapter<'a, K: Ord, V, P, D, A>
where
    P: crate::tree::RebalancePolicy<K, V>,
    D: crate::tree::DuplicatePolicy,
    A: Allocator + Clone,
{
    engine: &'a crate::tree::Engine<K, V, P, D, A>,
}

impl<'a, K: Ord, V, P, D, A> TreeAdapter<'a, K, V, P, D, A>
where
    P: crate::tree::RebalancePolicy<K, V>,
    D: crate::tree::DuplicatePolicy,
    A: Allocator + Clone,
{
    /// Wraps `engine` for read-only structural navigation.
    pub fn new(engine: &'a crate::tree::Engine<K, V, P, D, A>) -> Self {
        TreeAdapter { engine }
    }

    /// The root node's index, if the tree is non-empty.
    pub fn root(&self) -> Option<usize> {
        self.engine.root_idx()
    }

    /// `idx`'s left child, if any.
    pub fn left(&self, idx: usize) -> Option<usize> {
        self.engine.left_of(idx)
    }

    /// `idx`'s right child, if any.
    pub fn right(&self, idx: usize) -> Option<usize> {
        self.engine.right_of(idx)
    }

    /// `idx`'s parent, if any.
    pub fn parent(&self, idx: usize) -> Option<usize> {
        self.engine.parent_of(idx)
    }

    /// The key stored at `idx`.
    pub fn key(&self, idx: usize) -> &K {
        self.engine.key_at(idx)
    }

    /// The value stored at `idx`.
    pub fn value(&self, idx: usize) -> &V {
        self.engine.val_at(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Engine, Plain, RejectDuplicates};

    #[test]
    fn queue_is_fifo() {
        let mut q: Queue<i32> = Queue::new();
        q.push(1);
        q.push(2);
        q.push(3);
        assert_eq!(q.front(), Some(&1));
        assert_eq!(q.pop(), Some(1));
        assert_eq!(q.pop(), Some(2));
        assert_eq!(q.pop(), Some(3));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn stack_is_lifo() {
        let mut s: Stack<i32> = Stack::new();
        s.push(1);
        s.push(2);
        s.push(3);
        assert_eq!(s.top(), Some(&3));
        assert_eq!(s.pop(), Some(3));
        assert_eq!(s.pop(), Some(2));
        assert_eq!(s.pop(), Some(1));
        assert_eq!(s.pop(), None);
    }

    #[test]
    fn tree_adapter_navigates_without_mutating() {
        let mut e: Engine<i32, &str, Plain, RejectDuplicates> = Engine::new();
        e.insert(5, "five");
        e.insert(2, "two");
        e.insert(8, "eight");
        let adapter = TreeAdapter::new(&e);
        let root = adapter.root().unwrap();
        assert_eq!(*adapter.key(root), 5);
        let left = adapter.left(root).unwrap();
        assert_eq!(*adapter.key(left), 2);
        assert_eq!(adapter.parent(left), Some(root));
    }
}
