//! Semantic tag types that disambiguate constructors and algorithm overloads
//! which would otherwise collide on a bare integral argument.
//!
//! Mirrors scapegoat's habit of wrapping a raw index/size in a small,
//! `Copy`, invariant-carrying struct (see `tree::node::NodeGetHelper`) rather
//! than passing a naked `usize` around and hoping callers get the meaning right.

use core::fmt;

use crate::error::ArgumentError;

/// A zero-based positional index into a sequential container.
///
/// Distinct from [`Size`] and [`Reserve`] purely at the type level: a
/// constructor or algorithm that takes `Index(n)` means "the `n`-th slot",
/// one that takes `Size(n)` means "`n` elements".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(pub usize);

impl Index {
    /// Unwraps to the raw `usize`.
    pub fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for Index {
    fn from(n: usize) -> Self {
        Index(n)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A count of elements, as opposed to a position (see [`Index`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Size(pub usize);

impl Size {
    /// Unwraps to the raw `usize`.
    pub fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for Size {
    fn from(n: usize) -> Self {
        Size(n)
    }
}

/// A capacity request: "grow to hold at least this many elements without
/// touching `size`". Distinguished from [`Size`] so that
/// `with_capacity(Reserve(8))` and `with_len(Size(8))` cannot be confused
/// at a call site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reserve(pub usize);

impl From<usize> for Reserve {
    fn from(n: usize) -> Self {
        Reserve(n)
    }
}

/// A half-open index range `[begin, end)`.
///
/// Construction validates `begin <= end`; a caller that wants the raw,
/// unchecked struct can still build one via the public fields, but every
/// algorithm in this crate that accepts a `IndexRange` goes through
/// [`IndexRange::new`] at its boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IndexRange {
    pub begin: usize,
    pub end: usize,
}

impl IndexRange {
    /// Builds `[begin, end)`. Returns [`ArgumentError`] if `begin > end`.
    pub fn new(begin: usize, end: usize) -> Result<Self, ArgumentError> {
        if begin > end {
            Err(ArgumentError::InvertedRange { begin, end })
        } else {
            Ok(IndexRange { begin, end })
        }
    }

    /// Number of indices covered by this range.
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    /// `true` iff the range covers no indices.
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }
}

impl IntoIterator for IndexRange {
    type Item = usize;
    type IntoIter = core::ops::Range<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.begin..self.end
    }
}

/// Disambiguates a range-of-ranges copy constructor from an
/// initializer-list constructor when the element type is itself a range
/// (e.g. building a `DynamicArray<DynamicArray<T>>` from an iterator of
/// ranges rather than from a single flat element list).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FromRange;
