//! The binary-search-tree engine and its pluggable policies, replacing
//! scapegoat's single hardcoded scapegoat tree (`tree/tree.rs`).
//!
//! Layout mirrors scapegoat's own `tree/` module: a node type, an arena,
//! and iterators are each their own file; what's new is [`policy`], which
//! pulls scapegoat's insert/remove/search rebalancing hooks out into a
//! trait so [`engine::Engine`] can be generic over which rebalancing
//! strategy (or none) backs it.

mod node;

mod arena;

mod policy;
pub use policy::{AllowDuplicates, Avl, DuplicatePolicy, Plain, RebalancePolicy, RejectDuplicates, Splay};

mod engine;
pub use engine::Engine;

mod iter;
pub use iter::{ConsumingIter, Iter, IterMut, Order};
