//! K-ary heap, adapting a random-access backing
//! container (default: [`DynamicArray`]) the way scapegoat adapts its
//! arena: a flat buffer plus index arithmetic, no node allocations.
//!
//! The degree `D` is a const generic fixed at the type level; the
//! ordering is a separate generic, [`HeapOrder`],
//! following the same "hook trait consumed generically" shape as
//! [`crate::tree::RebalancePolicy`] — a min-heap and a max-heap are just
//! two implementations of the same comparison hook rather than a runtime
//! branch.

use core::cmp::Ordering;
use core::marker::PhantomData;

use allocator_api2::alloc::{Allocator, Global};

use crate::dynamic_array::DynamicArray;

/// Defines the ordering a [`KaryHeap`] maintains: the element compared
/// least by [`compare`](Self::compare) always sits at index 0.
pub trait HeapOrder<T> {
    fn compare(a: &T, b: &T) -> Ordering;
}

/// Smallest element on top ("by default a min-heap").
#[derive(Clone, Copy, Debug, Default)]
pub struct MinHeap;
impl<T: Ord> HeapOrder<T> for MinHeap {
    fn compare(a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Largest element on top.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxHeap;
impl<T: Ord> HeapOrder<T> for MaxHeap {
    fn compare(a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// A `D`-ary heap over `T`, ordered by `O`. `D` must be at least 2; this
/// is checked with a `debug_assert!` at construction rather than a
/// (currently unstable) const-generic bound.
pub struct KaryHeap<T, const D: usize, O: HeapOrder<T> = MinHeap, A: Allocator + Clone = Global> {
    data: DynamicArray<T, A>,
    _order: PhantomData<O>,
}

impl<T, const D: usize, O: HeapOrder<T>> KaryHeap<T, D, O, Global> {
    /// An empty heap using the global allocator.
    pub fn new() -> Self {
        debug_assert!(D >= 2, "heap degree must be at least 2");
        KaryHeap {
            data: DynamicArray::new(),
            _order: PhantomData,
        }
    }
}

impl<T, const D: usize, O: HeapOrder<T>> Default for KaryHeap<T, D, O, Global> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const D: usize, O: HeapOrder<T>, A: Allocator + Clone> KaryHeap<T, D, O, A> {
    /// An empty heap using the given allocator.
    pub fn new_in(alloc: A) -> Self {
        debug_assert!(D >= 2, "heap degree must be at least 2");
        KaryHeap {
            data: DynamicArray::new_in(alloc),
            _order: PhantomData,
        }
    }

    /// Builds a heap in place from an already-populated backing array,
    /// in linear time: percolates down from the last internal node
    /// toward the root (`heapify`).
    pub fn heapify(mut data: DynamicArray<T, A>) -> Self {
        debug_assert!(D >= 2, "heap degree must be at least 2");
        let len = data.len();
        let mut heap = KaryHeap {
            data,
            _order: PhantomData,
        };
        if len >= 2 {
            let last_internal = (len - 2) / D;
            for i in (0..=last_internal).rev() {
                heap.percolate_down(i);
            }
        }
        heap
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` iff the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The element least by `O`'s ordering (`top`).
    pub fn top(&self) -> Option<&T> {
        self.data.get(0)
    }

    /// Borrows the element at backing-array slot `i`, exposing the raw
    /// heap layout for callers that need to inspect structure rather
    /// than just the top.
    pub fn get(&self, i: usize) -> Option<&T> {
        self.data.get(i)
    }

    /// Appends `v` and percolates it up to restore the heap property.
    pub fn push(&mut self, v: T) {
        self.data.push(v);
        self.percolate_up(self.data.len() - 1);
    }

    /// Removes and returns the top element: swaps it with the last
    /// element, truncates, then percolates the new root down.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.data.len().checked_sub(1)?;
        self.data.as_mut_slice().swap(0, last);
        let top = self.data.pop();
        if !self.data.is_empty() {
            self.percolate_down(0);
        }
        top
    }

    /// Overwrites the element at `pos`, then restores the heap property
    /// by percolating in whichever direction is needed, returning the
    /// element's new position (`changePriority`).
    pub fn change_priority(&mut self, pos: usize, v: T) -> Option<usize> {
        if pos >= self.data.len() {
            return None;
        }
        *self.data.get_mut(pos).expect("checked bound above") = v;
        if pos > 0 {
            let parent = (pos - 1) / D;
            if O::compare(self.data.get(pos).unwrap(), self.data.get(parent).unwrap()) == Ordering::Less {
                return Some(self.percolate_up(pos));
            }
        }
        Some(self.percolate_down(pos))
    }

    fn percolate_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let parent = (i - 1) / D;
            if O::compare(self.data.get(i).unwrap(), self.data.get(parent).unwrap()) == Ordering::Less {
                self.data.as_mut_slice().swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
        i
    }

    fn percolate_down(&mut self, mut i: usize) -> usize {
        let len = self.data.len();
        loop {
            let first_child = D * i + 1;
            if first_child >= len {
                break;
            }
            let last_child = (first_child + D).min(len);
            let mut best = first_child;
            for c in (first_child + 1)..last_child {
                if O::compare(self.data.get(c).unwrap(), self.data.get(best).unwrap()) == Ordering::Less {
                    best = c;
                }
            }
            if O::compare(self.data.get(best).unwrap(), self.data.get(i).unwrap()) == Ordering::Less {
                self.data.as_mut_slice().swap(i, best);
                i = best;
            } else {
                break;
            }
        }
        i
    }

    /// Drains the heap in `O`'s order, consuming it.
    pub fn into_sorted_vec(mut self) -> alloc::vec::Vec<T> {
        let mut out = alloc::vec::Vec::with_capacity(self.len());
        while let Some(v) = self.pop() {
            out.push(v);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_heap_pops_in_ascending_order() {
        let mut h: KaryHeap<i32, 2, MinHeap> = KaryHeap::new();
        for v in [5, 1, 8, 2, 9, 3] {
            h.push(v);
        }
        let mut out = alloc::vec::Vec::new();
        while let Some(v) = h.pop() {
            out.push(v);
        }
        assert_eq!(out, alloc::vec![1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn max_heap_pops_in_descending_order() {
        let mut h: KaryHeap<i32, 4, MaxHeap> = KaryHeap::new();
        for v in [5, 1, 8, 2, 9, 3] {
            h.push(v);
        }
        let mut out = alloc::vec::Vec::new();
        while let Some(v) = h.pop() {
            out.push(v);
        }
        assert_eq!(out, alloc::vec![9, 8, 5, 3, 2, 1]);
    }

    #[test]
    fn heapify_builds_valid_heap_from_arbitrary_order() {
        let mut arr: DynamicArray<i32> = DynamicArray::new();
        for v in [9, 3, 7, 1, 8, 2, 6, 4, 5] {
            arr.push(v);
        }
        let mut h: KaryHeap<i32, 3, MinHeap> = KaryHeap::heapify(arr);
        assert_eq!(*h.top().unwrap(), 1);
        let out = h.into_sorted_vec();
        assert_eq!(out, alloc::vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn change_priority_moves_element_to_correct_slot() {
        let mut h: KaryHeap<i32, 2, MinHeap> = KaryHeap::new();
        for v in [5, 1, 8, 2, 9, 3] {
            h.push(v);
        }
        h.change_priority(0, 100);
        assert_eq!(*h.top().unwrap(), 2);
    }
}
