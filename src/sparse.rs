//! Map-backed sparse storage accessed through the element protocol.

use std::collections::HashMap;

use crate::accessor::{Indexable, IndexableMut};

/// A fixed-length vector storing only explicitly written elements, with a
/// fill value standing in for the holes.
///
/// Reads of unwritten positions return the fill value, as do reads past
/// `len` — a sparse container absorbs out-of-bounds access instead of
/// panicking, and writes past `len` are dropped. This makes it the
/// permissive backing store for callers that traverse asymmetric-length
/// arrays and rely on holes reading as a sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVec<T> {
    len: usize,
    fill: T,
    elems: HashMap<usize, T>,
}

impl<T: Copy> SparseVec<T> {
    /// A sparse vector of `len` holes, all reading as `fill`.
    pub fn new(len: usize, fill: T) -> Self {
        Self {
            len,
            fill,
            elems: HashMap::new(),
        }
    }

    /// Builds a sparse vector from `(index, value)` pairs; indices at or
    /// past `len` are dropped.
    pub fn from_pairs(len: usize, fill: T, pairs: &[(usize, T)]) -> Self {
        let mut v = Self::new(len, fill);
        for &(i, value) in pairs {
            v.set(i, value);
        }
        v
    }

    /// The fill value holes read as.
    #[inline]
    pub fn fill_value(&self) -> T {
        self.fill
    }

    /// Returns `true` if position `idx` has been explicitly written.
    #[inline]
    pub fn is_set(&self, idx: usize) -> bool {
        self.elems.contains_key(&idx)
    }

    /// Number of explicitly written positions.
    pub fn count_set(&self) -> usize {
        self.elems.len()
    }

    /// Densifies into a `Vec`, holes becoming the fill value.
    pub fn to_vec(&self) -> Vec<T> {
        (0..self.len).map(|i| self.get(i)).collect()
    }
}

impl<T: Copy> Indexable for SparseVec<T> {
    type Elem = T;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn get(&self, idx: usize) -> T {
        self.elems.get(&idx).copied().unwrap_or(self.fill)
    }
}

impl<T: Copy> IndexableMut for SparseVec<T> {
    #[inline]
    fn set(&mut self, idx: usize, value: T) {
        if idx < self.len {
            self.elems.insert(idx, value);
        }
    }
}
