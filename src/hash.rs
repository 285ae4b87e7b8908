//! Chained hash table: a fixed-capacity bucket array
//! whose buckets are themselves sub-containers — here, [`ForwardList`]
//! for small buckets — generic over a [`DuplicatePolicy`] the same way
//! [`crate::tree::Engine`] is, so a single table backs both the
//! reject-duplicate (map/set) and allow-duplicate (multimap/multiset)
//! variants.
//!
//! Grounded on scapegoat's arena-of-slots shape generalized the same
//! way `tree::arena::NodeArena` was, and on
//! `other_examples/55aafc88_Ellipsis-Labs-sokoban__src-hash_table.rs.rs`
//! for the bucket-chaining structure itself (an array of per-bucket
//! chains, walked linearly within a bucket). Since this crate has no
//! `std::hash::Hasher` available in `no_std`, the default prehash is a
//! small hand-rolled FNV-1a `Hasher` impl — the same non-cryptographic,
//! dependency-free default hashing strategy crates like `hashbrown` fall
//! back to outside of `std`.

use core::hash::{Hash, Hasher};

use allocator_api2::alloc::{Allocator, Global};
use allocator_api2::vec::Vec as AVec;

use crate::forward_list::ForwardList;
use crate::tree::{AllowDuplicates, DuplicatePolicy, RejectDuplicates};

/// FNV-1a, chosen only because it is small enough to hand-write without
/// pulling in a `no_std`-incompatible crate; `prehash` just needs *a*
/// raw hash code, not a cryptographic one.
struct FnvHasher(u64);

impl Default for FnvHasher {
    fn default() -> Self {
        FnvHasher(0xcbf29ce484222325)
    }
}

impl Hasher for FnvHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 ^= b as u64;
            self.0 = self.0.wrapping_mul(0x0000_0100_0000_01b3);
        }
    }
}

/// The default `prehash`: hashes `key` via [`Hash`] through [`FnvHasher`].
pub fn default_prehash<K: Hash + ?Sized>(key: &K) -> u64 {
    let mut hasher = FnvHasher::default();
    key.hash(&mut hasher);
    hasher.finish()
}

/// The default `hash`: `prehashed mod capacity`.
pub fn default_hash(prehashed: u64, capacity: usize) -> usize {
    debug_assert!(capacity > 0, "hash table must have at least one bucket");
    (prehashed % capacity as u64) as usize
}

/// One slot of the bucket array: a small singly-linked chain of
/// colliding `(K, V)` pairs, walked with the native [`ForwardList`]
/// operations — O(m) in the chain length.
type Bucket<K, V, A> = ForwardList<(K, V), A>;

/// Default starting capacity and default `max_load_factor`, generated
/// by `build.rs` from the `CT_DEFAULT_CAPACITY` / `CT_MAX_LOAD_NUM` /
/// `CT_MAX_LOAD_DENOM` environment variables.
include!(concat!(env!("OUT_DIR"), "/consts.rs"));

/// A chained hash table over `K`/`V`, generic over a [`DuplicatePolicy`]
/// `D`. `prehash`/`hash` are boxed closures rather than additional type
/// parameters: swapping either function out *at runtime* (via
/// `rehash_with_prehash`/`rehash_with_hash`) is something a type
/// parameter cannot express without monomorphizing a different table
/// type per hash function.
pub struct HashTable<K, V, D: DuplicatePolicy = RejectDuplicates, A: Allocator + Clone = Global> {
    buckets: AVec<Bucket<K, V, A>, A>,
    len: usize,
    max_load_factor: f64,
    /// Added to every raw prehash before `hash()` is applied; the knob
    /// `rehash_with_offset` turns.
    offset: u64,
    /// `Arc` rather than `Box` so the table stays [`Clone`] without
    /// cloning the closure's captured state — reference-counted sharing
    /// of the function itself
    /// is fine because `rehash_with_prehash`/`rehash_with_hash` always
    /// replace the whole `Arc`, never mutate through it.
    prehash: alloc::sync::Arc<dyn Fn(&K) -> u64 + Send + Sync>,
    hash: alloc::sync::Arc<dyn Fn(u64, usize) -> usize + Send + Sync>,
    _dup: core::marker::PhantomData<D>,
}

impl<K: Hash + PartialEq, V, D: DuplicatePolicy> HashTable<K, V, D, Global> {
    /// An empty table with `CT_DEFAULT_CAPACITY` buckets (a `build.rs`
    /// tunable, default 8), the default FNV-1a prehash, and the
    /// `build.rs`-tunable default `max_load_factor`
    /// (`CT_MAX_LOAD_NUM`/`CT_MAX_LOAD_DENOM`, default `1/1`).
    pub fn new() -> Self {
        Self::with_capacity(CT_DEFAULT_CAPACITY)
    }

    /// An empty table with at least `capacity` buckets.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut buckets = AVec::with_capacity(capacity);
        for _ in 0..capacity {
            buckets.push(ForwardList::new());
        }
        HashTable {
            buckets,
            len: 0,
            max_load_factor: CT_MAX_LOAD_NUM as f64 / CT_MAX_LOAD_DENOM as f64,
            offset: 0,
            prehash: alloc::sync::Arc::new(|k: &K| default_prehash(k)),
            hash: alloc::sync::Arc::new(default_hash),
            _dup: core::marker::PhantomData,
        }
    }
}

impl<K: Hash + PartialEq, V, D: DuplicatePolicy> Default for HashTable<K, V, D, Global> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + PartialEq, V, D: DuplicatePolicy, A: Allocator + Clone> HashTable<K, V, D, A> {
    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` iff the table holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// `size / capacity`.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// The current maximum load factor (default 1.0).
    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    /// Sets the maximum load factor. Does not itself trigger a regrow;
    /// the next insertion that would exceed it does.
    pub fn set_max_load_factor(&mut self, factor: f64) {
        debug_assert!(factor > 0.0, "max load factor must be positive");
        self.max_load_factor = factor;
    }

    fn bucket_index_for(&self, key: &K) -> usize {
        let raw = (self.prehash)(key).wrapping_add(self.offset);
        (self.hash)(raw, self.buckets.len())
    }

    /// Inserts `key`/`val`. Under [`RejectDuplicates`], an existing
    /// entry with an equal key has its value overwritten in place and
    /// the old value is returned; under [`AllowDuplicates`], the pair is
    /// always appended and `None` is returned.
    pub fn insert(&mut self, key: K, val: V) -> Option<V> {
        let idx = self.bucket_index_for(&key);
        let old = if D::ALLOW {
            self.buckets[idx].insert_after(self.buckets[idx].stable_begin(), (key, val));
            self.len += 1;
            None
        } else if let Some(slot) = self.buckets[idx].find_mut(|(k, _)| *k == key) {
            Some(core::mem::replace(&mut slot.1, val))
        } else {
            let begin = self.buckets[idx].stable_begin();
            self.buckets[idx].insert_after(begin, (key, val));
            self.len += 1;
            None
        };
        self.maybe_grow();
        old
    }

    /// Borrows the value for `key`, if present.
    pub fn get(&self, key: &K) -> Option<&V> {
        let idx = self.bucket_index_for(key);
        self.buckets[idx].iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Mutably borrows the value for `key`, if present.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.bucket_index_for(key);
        self.buckets[idx].find_mut(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// `true` iff some entry's key equals `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries whose key equals `key` (always 0 or 1 under
    /// [`RejectDuplicates`]).
    pub fn count(&self, key: &K) -> usize {
        let idx = self.bucket_index_for(key);
        self.buckets[idx].iter().filter(|(k, _)| k == key).count()
    }

    /// Removes one entry whose key equals `key`, returning its value.
    /// Under [`AllowDuplicates`] this removes a single matching entry,
    /// not every one.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.bucket_index_for(key);
        let removed = self.buckets[idx].remove_where(|(k, _)| k == key);
        if removed.is_some() {
            self.len -= 1;
        }
        removed.map(|(_, v)| v)
    }

    fn maybe_grow(&mut self) {
        if self.load_factor() > self.max_load_factor {
            let new_capacity = (self.buckets.len() * 2).max(1);
            self.rebuild(new_capacity);
        }
    }

    /// Attempts to set capacity to `n`; a no-op (not an error) if the
    /// resulting load factor would exceed `max_load_factor`.
    pub fn reserve(&mut self, n: usize) {
        let n = n.max(1);
        if self.len as f64 / n as f64 > self.max_load_factor {
            return;
        }
        self.rebuild(n);
    }

    /// Alias of [`reserve`](Self::reserve).
    pub fn resize(&mut self, n: usize) {
        self.reserve(n);
    }

    /// Replaces the prehash function and redistributes every element;
    /// capacity is unchanged (`rehash`).
    pub fn rehash_with_prehash(&mut self, prehash: alloc::sync::Arc<dyn Fn(&K) -> u64 + Send + Sync>) {
        self.prehash = prehash;
        self.offset = 0;
        let capacity = self.buckets.len();
        self.rebuild(capacity);
    }

    /// Replaces the `hash` function (prehash-to-bucket-index mapping)
    /// and redistributes every element; capacity is unchanged.
    pub fn rehash_with_hash(&mut self, hash: alloc::sync::Arc<dyn Fn(u64, usize) -> usize + Send + Sync>) {
        self.hash = hash;
        let capacity = self.buckets.len();
        self.rebuild(capacity);
    }

    /// Exchanges the entire contents (and allocator) of `self` and
    /// `other` in O(1) ("swap").
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Adds `offset` to every raw prehash before bucketing and
    /// redistributes every element; capacity is unchanged. Every element
    /// relocates to `hash(prehash(k)+offset, cap) mod cap`.
    pub fn rehash_with_offset(&mut self, offset: u64) {
        self.offset = offset;
        let capacity = self.buckets.len();
        self.rebuild(capacity);
    }

    /// Rebuilds the bucket array at `new_capacity`, redistributing every
    /// stored element according to the current `prehash`/`hash`/`offset`.
    fn rebuild(&mut self, new_capacity: usize) {
        let new_capacity = new_capacity.max(1);
        let mut old_buckets = AVec::with_capacity(new_capacity);
        for _ in 0..new_capacity {
            old_buckets.push(ForwardList::new());
        }
        core::mem::swap(&mut self.buckets, &mut old_buckets);

        for mut bucket in old_buckets {
            while let Some((k, v)) = bucket.remove_after(bucket.stable_begin()) {
                let raw = (self.prehash)(&k).wrapping_add(self.offset);
                let idx = (self.hash)(raw, self.buckets.len());
                let begin = self.buckets[idx].stable_begin();
                self.buckets[idx].insert_after(begin, (k, v));
            }
        }
    }

    /// Removes every element, keeping the current capacity.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.len = 0;
    }

    /// A local iterator over bucket `i`'s elements, for inspecting
    /// collisions ("`begin(i)`/`end(i)` yield a local
    /// iterator over bucket `i`").
    pub fn bucket_iter(&self, i: usize) -> impl Iterator<Item = (&K, &V)> {
        self.buckets[i].iter().map(|(k, v)| (k, v))
    }

    /// Number of elements in bucket `i`.
    pub fn bucket_len(&self, i: usize) -> usize {
        self.buckets[i].len()
    }

    /// Iterates over every stored `(&K, &V)` pair, in bucket order
    /// (hashed containers "do not guarantee that a
    /// round-trip... reproduce the same bucket order", but within a
    /// single table a pass is still well defined).
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.buckets.iter().flat_map(|b| b.iter().map(|(k, v)| (k, v)))
    }
}

/// Deep copy: clones every bucket's chain independently; `prehash`/`hash`
/// are shared by reference count rather than re-captured, which is
/// observably identical since neither is ever mutated in place.
impl<K: Hash + PartialEq + Clone, V: Clone, D: DuplicatePolicy, A: Allocator + Clone> Clone for HashTable<K, V, D, A> {
    fn clone(&self) -> Self {
        HashTable {
            buckets: self.buckets.clone(),
            len: self.len,
            max_load_factor: self.max_load_factor,
            offset: self.offset,
            prehash: self.prehash.clone(),
            hash: self.hash.clone(),
            _dup: core::marker::PhantomData,
        }
    }
}

/// A reject-duplicate-keys hash table (Hash Map).
pub type HashMap<K, V, A = Global> = HashTable<K, V, RejectDuplicates, A>;

/// An allow-duplicate-keys hash table (Hash MultiMap).
pub type HashMultiMap<K, V, A = Global> = HashTable<K, V, AllowDuplicates, A>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_roundtrip() {
        let mut t: HashMap<alloc::string::String, i32> = HashMap::new();
        t.insert(alloc::string::String::from("a"), 1);
        t.insert(alloc::string::String::from("b"), 2);
        assert_eq!(t.get(&alloc::string::String::from("a")), Some(&1));
        assert_eq!(t.get(&alloc::string::String::from("b")), Some(&2));
        assert_eq!(t.get(&alloc::string::String::from("c")), None);
    }

    #[test]
    fn reject_duplicates_overwrites_value() {
        let mut t: HashMap<i32, i32> = HashMap::new();
        assert_eq!(t.insert(1, 10), None);
        assert_eq!(t.insert(1, 20), Some(10));
        assert_eq!(t.len(), 1);
        assert_eq!(t.get(&1), Some(&20));
    }

    #[test]
    fn allow_duplicates_keeps_every_insert() {
        let mut t: HashMultiMap<i32, i32> = HashMultiMap::new();
        t.insert(1, 10);
        t.insert(1, 20);
        assert_eq!(t.len(), 2);
        assert_eq!(t.count(&1), 2);
    }

    #[test]
    fn remove_deletes_one_matching_entry() {
        let mut t: HashMultiMap<i32, i32> = HashMultiMap::new();
        t.insert(1, 10);
        t.insert(1, 20);
        let removed = t.remove(&1);
        assert!(removed == Some(10) || removed == Some(20));
        assert_eq!(t.len(), 1);
        assert_eq!(t.count(&1), 1);
    }

    #[test]
    fn load_factor_never_exceeds_max_after_growth() {
        let mut t: HashMap<i32, i32> = HashMap::with_capacity(4);
        t.set_max_load_factor(0.5);
        for k in 0..20 {
            t.insert(k, k);
            assert!(t.load_factor() <= t.max_load_factor());
        }
        assert!(t.capacity() > 4);
        for k in 0..20 {
            assert_eq!(t.get(&k), Some(&k));
        }
    }

    #[test]
    fn hash_grows_on_third_distinct_key_at_half_load() {
        // capacity 4, max-load 0.5, insert three distinct keys ->
        // capacity must exceed 4.
        let mut t: HashMap<i32, i32> = HashMap::with_capacity(4);
        t.set_max_load_factor(0.5);
        t.insert(1, 1);
        t.insert(2, 2);
        assert_eq!(t.capacity(), 4);
        t.insert(3, 3);
        assert!(t.capacity() > 4);
        assert!(t.load_factor() <= 0.5);
    }

    #[test]
    fn reserve_is_a_noop_when_it_would_exceed_max_load() {
        let mut t: HashMap<i32, i32> = HashMap::with_capacity(8);
        for k in 0..4 {
            t.insert(k, k);
        }
        t.reserve(2); // would make load factor 4/2 = 2.0 > 1.0
        assert_eq!(t.capacity(), 8);
        t.reserve(16); // satisfies the constraint, allowed
        assert_eq!(t.capacity(), 16);
    }

    #[test]
    fn rehash_with_offset_relocates_every_element() {
        let mut t: HashMap<i32, i32> = HashMap::with_capacity(8);
        for k in 0..8 {
            t.insert(k, k);
        }
        t.rehash_with_offset(3);
        for k in 0..8 {
            let raw = default_prehash(&k).wrapping_add(3);
            let expected_bucket = default_hash(raw, t.capacity());
            let found = t.bucket_iter(expected_bucket).any(|(&key, _)| key == k);
            assert!(found, "key {k} not in expected bucket after offset rehash");
        }
        assert_eq!(t.len(), 8);
    }

    #[test]
    fn clone_is_deep() {
        let mut t: HashMap<i32, i32> = HashMap::new();
        t.insert(1, 10);
        t.insert(2, 20);
        let cloned = t.clone();
        t.clear();
        assert_eq!(t.len(), 0);
        assert_eq!(cloned.get(&1), Some(&10));
        assert_eq!(cloned.get(&2), Some(&20));
    }

    #[test]
    fn swap_exchanges_contents() {
        let mut a: HashMap<i32, i32> = HashMap::new();
        a.insert(1, 10);
        let mut b: HashMap<i32, i32> = HashMap::new();
        b.insert(2, 20);
        b.insert(3, 30);

        a.swap(&mut b);
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 1);
        assert_eq!(a.get(&2), Some(&20));
        assert_eq!(b.get(&1), Some(&10));
    }

    #[test]
    fn clear_empties_every_bucket() {
        let mut t: HashMap<i32, i32> = HashMap::new();
        for k in 0..10 {
            t.insert(k, k);
        }
        t.clear();
        assert_eq!(t.len(), 0);
        assert!(t.get(&0).is_none());
    }
}
