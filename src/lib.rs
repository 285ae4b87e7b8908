/*!
A generic in-memory container library: a dynamic array, singly- and
doubly-linked lists, a unified binary-search-tree engine (plain, AVL, or
splay rebalancing), a k-ary heap, and a chained hash table, all sharing
one iterator-tier protocol and one allocator-propagation discipline.

* Embedded-friendly: `!#[no_std]` by default, `alloc`-only.
* Safe: `#![forbid(unsafe_code)]`.
* Generic over allocators via [`allocator_api2`]'s stable backport of
  `core::alloc::Allocator`.

### About

This crate descends from [`scapegoat`](https://crates.io/crates/scapegoat),
a `!#[no_std]` scapegoat-tree map/set. Where `scapegoat` hardcodes one
rebalancing strategy behind a fixed-capacity stack array, this crate
generalizes the tree into a pluggable-rebalancing [`tree::Engine`] (plain
BST, AVL, or splay — see [`tree::RebalancePolicy`]) over an
allocator-generic arena, and surrounds it with the rest of a
general-purpose container toolbox: [`dynamic_array`], [`forward_list`],
[`linked_list`], [`heap`], and [`hash`].

### Containers

| Container | Module | Notes |
|-----------|--------|-------|
| Dynamic array | [`dynamic_array`] | Amortized O(1) append; `trim`, `resize`, `insert_unstable`. |
| Forward list | [`forward_list`] | Singly-linked; stable iterators; `splice_after`. |
| Doubly-linked list | [`linked_list`] | Sentinel ring; O(1) end ops; `splice`. |
| Tree engine | [`tree`] | Plain BST, AVL, or splay; in/pre/post/level order. |
| K-ary heap | [`heap`] | Generic degree (const generic) and ordering. |
| Hash table | [`hash`] | Chained buckets; load-factor-driven resize/rehash. |
| Ordered Set/Map | [`ordered_set`], [`ordered_map`] | Thin duplicate-policy layer over [`tree::Engine`]. |
| Hash Set/Map | [`hash_set`], [`hash`] | Thin duplicate-policy layer over [`hash::HashTable`]. |
| `Queue`/`Stack`/`TreeAdapter` | [`facade`] | Restricted interfaces over the above. |

### Safety and error handling

No `unsafe` anywhere in this crate (`#![forbid(unsafe_code)]`); cyclic
node structures (the linked lists' sentinel ring, the tree's parent
back-links) are expressed as indices into a `Vec`-backed arena with a
free list, not raw pointers (see [`tree::Engine`]'s module docs).
Fallible operations that can actually fail at runtime (an out-of-range
index, an inverted [`tags::IndexRange`], a malformed external stream)
return a typed [`error`] variant rather than panicking; `debug_assert!`
checks internal invariants in debug builds the way scapegoat's own
`SGTree` does.

### Dependencies

* [`allocator_api2`] — stable backport of the nightly `Allocator` trait,
  letting every container above be generic over a custom allocator.

Because this library is `#![forbid(unsafe_code)]`, no `unsafe` is
introduced by the crate itself; its dependencies are standard,
widely-used crates rather than hand-audited zero-dependency forks.
*/

#![forbid(unsafe_code)]
#![cfg_attr(not(any(test, fuzzing)), no_std)]

extern crate alloc;

pub mod tags;
pub mod error;
pub mod alloc_traits;
pub mod iter_traits;
pub mod algorithms;
pub mod stream;

pub mod dynamic_array;
pub mod forward_list;
pub mod linked_list;
pub mod heap;
pub mod tree;
pub mod hash;

pub mod ordered_map;
pub mod ordered_set;
pub mod hash_set;
pub mod facade;

pub use crate::dynamic_array::DynamicArray;
pub use crate::forward_list::ForwardList;
pub use crate::linked_list::LinkedList;
pub use crate::heap::{KaryHeap, MaxHeap, MinHeap};
pub use crate::hash::{HashMap, HashMultiMap, HashTable};
pub use crate::ordered_map::{OrderedMap, OrderedMultiMap};
pub use crate::ordered_set::{OrderedMultiSet, OrderedSet};
pub use crate::hash_set::{HashMultiSet, HashSet};
pub use crate::facade::{Queue, Stack, TreeAdapter};
