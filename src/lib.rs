//! 1-D strided-array traversal kernels with accessor dispatch.
//!
//! This crate implements the strided-array calling convention: a family of
//! kernels that traverse one or more array-like buffers with arbitrary
//! strides and offsets, applying a pure element operation at each logical
//! index. It is the iteration layer element-wise numeric routines are built
//! on — the kernels own the index arithmetic and access dispatch, the
//! callers own the math.
//!
//! # Core Pieces
//!
//! - [`Indexable`] / [`IndexableMut`]: the element-access protocol. Plain
//!   slices, `Vec`s, and fixed-size arrays access by direct indexing;
//!   accessor-backed containers ([`InterleavedComplex`], [`SparseVec`])
//!   define their own element encoding. Dispatch is resolved per buffer at
//!   compile time, never per element.
//! - Fixed-arity kernels ([`nullary`] through [`quinary`]): one traversal
//!   function per operation arity, each with a `*_ndarray` twin taking
//!   explicit per-array offsets. The default entries derive offsets from the
//!   strides ([`stride_offset`]), so a negative-stride traversal ends at
//!   index `0`.
//! - General N-ary kernel ([`apply_nary`] / [`apply_nary_ndarray`]): a
//!   runtime-length list of input buffers driven through an [`ElementFn`]
//!   adapter ([`UnaryFn`], [`BinaryFn`], …, [`VariadicFn`]); bit-identical
//!   to the fixed-arity kernels for the same inputs.
//! - Masked and broker variants ([`masked_unary`], [`unary_by`],
//!   [`binary_by`]): skip the operation and the write for masked or
//!   broker-rejected elements.
//!
//! # Calling Convention
//!
//! Every kernel takes `shape: [n]`, per-array `strides` ordered
//! inputs-then-output, and (for `*_ndarray` entries) matching `offsets`. The
//! physical index visited for logical index `i` is `offset + i*stride`,
//! computed in exact signed arithmetic. `n <= 0` is an exact no-op. Strides
//! may be negative (backward traversal) or zero (single-element broadcast).
//! Iteration is strictly sequential and single-threaded; kernels never
//! allocate output storage and never retain buffer references past the call.
//!
//! The kernels trust the caller: no bounds checking happens in the loops,
//! and an out-of-range physical index surfaces as the backing container's
//! own behavior (slices panic, [`SparseVec`] absorbs). Validating callers
//! can reject a bad `(n, stride, offset)` combination up front with
//! [`validate_span`].
//!
//! # Example
//!
//! ```rust
//! use strided_map::{binary, unary_ndarray};
//!
//! // Element-wise abs over every other element.
//! let x = vec![-1.0, -2.0, -3.0, -4.0, -5.0];
//! let mut y = vec![0.0; 5];
//! unary_ndarray(&x, &mut y, [3], [2, 1], [0, 0], f64::abs);
//! assert_eq!(y, vec![1.0, 3.0, 5.0, 0.0, 0.0]);
//!
//! // Strided sum of two inputs.
//! let a = vec![1.0, 2.0, 3.0];
//! let b = vec![10.0, 20.0, 30.0];
//! let mut out = vec![0.0; 3];
//! binary(&a, &b, &mut out, [3], [1, 1, 1], |p, q| p + q);
//! assert_eq!(out, vec![11.0, 22.0, 33.0]);
//! ```
//!
//! # Accessor Buffers
//!
//! ```rust
//! use num_complex::Complex64;
//! use strided_map::{unary, InterleavedComplex};
//!
//! let x = InterleavedComplex::from_interleaved(vec![3.0, 4.0, 5.0, 12.0]).unwrap();
//! let mut y = vec![0.0; 2];
//! unary(&x, &mut y, [2], [1, 1], |z: Complex64| z.norm());
//! assert_eq!(y, vec![5.0, 13.0]);
//! ```

mod accessor;
mod adapter;
mod complex;
mod kernel;
mod map;
mod map_by;
mod mask;
mod sparse;
mod stride;

// ============================================================================
// Element-access protocol and accessor-backed containers
// ============================================================================
pub use accessor::{Indexable, IndexableMut};
pub use complex::InterleavedComplex;
pub use sparse::SparseVec;

// ============================================================================
// Element-operation adapters
// ============================================================================
pub use adapter::{
    BinaryFn, ElementFn, NullaryFn, QuaternaryFn, QuinaryFn, TernaryFn, UnaryFn, VariadicFn,
};

// ============================================================================
// Fixed-arity kernels
// ============================================================================
pub use map::{
    binary, binary_ndarray, nullary, nullary_ndarray, quaternary, quaternary_ndarray, quinary,
    quinary_ndarray, ternary, ternary_ndarray, unary, unary_ndarray,
};

// ============================================================================
// Masked and broker variants
// ============================================================================
pub use map_by::{binary_by, binary_by_ndarray, unary_by, unary_by_ndarray};
pub use mask::{masked_unary, masked_unary_ndarray};

// ============================================================================
// General N-ary kernel and traversal plumbing
// ============================================================================
pub use kernel::{apply_nary, apply_nary_ndarray};
pub use stride::{span_bounds, stride_offset, validate_span};

// ============================================================================
// Constants
// ============================================================================

/// Highest operation arity with a dedicated fixed-arity kernel and adapter.
///
/// Operations of higher arity go through [`apply_nary`] with a
/// [`VariadicFn`] adapter.
pub const MAX_FIXED_ARITY: usize = 5;

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur constructing accessor containers or validating
/// traversals.
#[derive(Debug, thiserror::Error)]
pub enum StridedError {
    /// Interleaved component buffer does not hold whole re/im pairs.
    #[error("interleaved buffer length {0} is not a whole number of re/im pairs")]
    OddInterleavedLength(usize),

    /// A traversal would visit a physical index outside the buffer.
    #[error("physical index {index} out of bounds for buffer of length {len}")]
    OutOfBounds { index: isize, len: usize },
}

/// Result type for strided traversal operations.
pub type Result<T> = std::result::Result<T, StridedError>;
