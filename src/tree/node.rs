//! Tree node storage: each node carries an element, a parent back-link,
//! and left/right child links.
//!
//! Unlike scapegoat's `Node` — which deliberately omits a parent
//! pointer and instead re-derives ancestry by re-descending from the root
//! (`NodeGetHelper`) to keep nodes small under a fixed stack-array budget
//! — splay rotations need the back-link directly, so every node here
//! carries one. `height` is AVL-specific bookkeeping; it costs a few
//! bytes on the plain and splay variants too, the same trade scapegoat
//! itself makes elsewhere (e.g. `SGErr` reserving unused variants) in
//! favor of a single node shape.

/// A binary-tree node: element plus the three links a rebalancing policy
/// needs.
pub struct Node<K: Ord, V> {
    pub key: K,
    pub val: V,
    pub parent: Option<usize>,
    pub left: Option<usize>,
    pub right: Option<usize>,
    /// Subtree height, maintained only by the AVL policy; the other
    /// policies never read or update it.
    pub height: i32,
}

impl<K: Ord, V> Node<K, V> {
    /// A freshly inserted leaf: no links, height 1 (a lone node's subtree
    /// height).
    pub fn new(key: K, val: V) -> Self {
        Node {
            key,
            val,
            parent: None,
            left: None,
            right: None,
            height: 1,
        }
    }
}
