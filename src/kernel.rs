//! General N-ary strided traversal over a runtime-length list of inputs.
//!
//! The fixed-arity kernels in [`crate::map`] are the hot path; this module is
//! the general form they must stay observably equivalent to. It drives any
//! number of input buffers (as trait objects over a common element type) plus
//! one output buffer, gathering one value per input each iteration and
//! handing the gathered slice to an [`ElementFn`] adapter.
//!
//! Iteration is strictly sequential from logical index `0` to `n - 1`; each
//! buffer advances by its own stride after every iteration. The kernel
//! performs no bounds checking — a physical index outside a buffer surfaces
//! as whatever that buffer's [`Indexable`] implementation does (slices panic,
//! [`SparseVec`](crate::SparseVec) absorbs).

use smallvec::SmallVec;

use crate::accessor::{Indexable, IndexableMut};
use crate::adapter::ElementFn;
use crate::stride::stride_offset;

/// Inline capacity for gather/cursor scratch; covers every fixed arity
/// (up to [`MAX_FIXED_ARITY`](crate::MAX_FIXED_ARITY) inputs plus output)
/// without heap allocation.
const INLINE_ARRAYS: usize = 6;

/// Applies `op` element-wise across `inputs` into `out`, offsets derived
/// from the strides.
///
/// `strides` is ordered inputs-then-output and must hold
/// `inputs.len() + 1` entries. Each array's starting offset is derived by
/// [`stride_offset`]: `0` for a non-negative stride, `(1 - n) * stride` for
/// a negative one.
///
/// `shape` is `[n]`; `n <= 0` is an exact no-op (no reads, no writes).
pub fn apply_nary<T, Op>(
    inputs: &[&dyn Indexable<Elem = T>],
    out: &mut dyn IndexableMut<Elem = T>,
    shape: [isize; 1],
    strides: &[isize],
    op: &mut Op,
) where
    T: Copy,
    Op: ElementFn<T> + ?Sized,
{
    let n = shape[0];
    let offsets: SmallVec<[usize; INLINE_ARRAYS]> =
        strides.iter().map(|&s| stride_offset(n, s)).collect();
    apply_nary_ndarray(inputs, out, shape, strides, &offsets, op);
}

/// Applies `op` element-wise across `inputs` into `out` with explicit
/// per-array starting offsets.
///
/// `strides` and `offsets` are ordered inputs-then-output and must each hold
/// `inputs.len() + 1` entries. The physical index visited for array `j` at
/// logical index `i` is `offsets[j] + i * strides[j]`.
pub fn apply_nary_ndarray<T, Op>(
    inputs: &[&dyn Indexable<Elem = T>],
    out: &mut dyn IndexableMut<Elem = T>,
    shape: [isize; 1],
    strides: &[isize],
    offsets: &[usize],
    op: &mut Op,
) where
    T: Copy,
    Op: ElementFn<T> + ?Sized,
{
    debug_assert_eq!(strides.len(), inputs.len() + 1);
    debug_assert_eq!(offsets.len(), inputs.len() + 1);
    debug_assert!(op.arity() <= inputs.len());

    let n = shape[0];
    if n <= 0 {
        return;
    }

    let mut cursors: SmallVec<[isize; INLINE_ARRAYS]> =
        offsets.iter().map(|&o| o as isize).collect();
    let mut args: SmallVec<[T; INLINE_ARRAYS]> = SmallVec::with_capacity(inputs.len());

    for _ in 0..n {
        args.clear();
        for (input, &cursor) in inputs.iter().zip(cursors.iter()) {
            args.push(input.get(cursor as usize));
        }
        let value = op.invoke(&args);
        out.set(cursors[inputs.len()] as usize, value);
        for (cursor, &stride) in cursors.iter_mut().zip(strides.iter()) {
            *cursor += stride;
        }
    }
}
