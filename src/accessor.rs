//! Element-access protocol for traversable buffers.
//!
//! The traversal kernels never index a buffer directly; every read goes
//! through [`Indexable::get`] and every write through [`IndexableMut::set`].
//! Plain contiguous storage (`[T]`, `Vec<T>`, fixed-size arrays) implements
//! the protocol by direct indexing, while "exotic" containers implement it
//! with whatever element encoding they need — an interleaved complex buffer
//! materializes `Complex<T>` values from re/im pairs, a sparse vector
//! substitutes its fill value for missing entries.
//!
//! Access strategy is resolved per buffer at monomorphization time, so the
//! hot loops contain no per-element capability checks.
//!
//! # Out-of-bounds behavior
//!
//! The kernels do not bounds-check physical indices; what happens on a bad
//! index is defined by the implementing container. Slice-backed containers
//! panic. [`SparseVec`](crate::SparseVec) yields its fill value on any read
//! and drops writes past its length.

/// Read access to an array-like buffer by physical index.
///
/// Implementors define how a logical element is materialized from storage.
/// `get` takes `&self` and returns the element by value, so element types
/// are required to be `Copy` (the kernels move elements through operation
/// callbacks many times per traversal).
pub trait Indexable {
    /// The element type produced by `get`.
    type Elem: Copy;

    /// Number of addressable elements.
    fn len(&self) -> usize;

    /// Returns the element at physical index `idx`.
    fn get(&self, idx: usize) -> Self::Elem;

    /// Returns `true` if the buffer holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Write access to an array-like buffer by physical index.
pub trait IndexableMut: Indexable {
    /// Stores `value` at physical index `idx`.
    fn set(&mut self, idx: usize, value: Self::Elem);
}

impl<T: Copy> Indexable for [T] {
    type Elem = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, idx: usize) -> T {
        self[idx]
    }
}

impl<T: Copy> IndexableMut for [T] {
    #[inline]
    fn set(&mut self, idx: usize, value: T) {
        self[idx] = value;
    }
}

impl<T: Copy> Indexable for Vec<T> {
    type Elem = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, idx: usize) -> T {
        self[idx]
    }
}

impl<T: Copy> IndexableMut for Vec<T> {
    #[inline]
    fn set(&mut self, idx: usize, value: T) {
        self[idx] = value;
    }
}

impl<T: Copy, const N: usize> Indexable for [T; N] {
    type Elem = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, idx: usize) -> T {
        self[idx]
    }
}

impl<T: Copy, const N: usize> IndexableMut for [T; N] {
    #[inline]
    fn set(&mut self, idx: usize, value: T) {
        self[idx] = value;
    }
}
