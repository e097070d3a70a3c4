//! Masked traversal kernels.
//!
//! A masked kernel takes an extra `u8` mask array traversed with its own
//! stride and offset. Where the mask element is nonzero the iteration is
//! skipped entirely: the operation is not invoked and the output element is
//! left untouched. Array order is `(input, mask, output)`, matching the
//! stride and offset order.

use crate::accessor::{Indexable, IndexableMut};
use crate::stride::stride_offset;

/// Applies a unary operation to each unmasked indexed element of `x`,
/// writing into `y`.
///
/// # Example
/// ```rust
/// use strided_map::masked_unary;
///
/// let x = vec![-1.0, -2.0, -3.0, -4.0, -5.0];
/// let m = vec![0u8, 0, 1, 0, 0];
/// let mut y = vec![0.0; 5];
/// masked_unary(&x, &m, &mut y, [5], [1, 1, 1], f64::abs);
/// assert_eq!(y, vec![1.0, 2.0, 0.0, 4.0, 5.0]);
/// ```
pub fn masked_unary<X, M, Y, F>(
    x: &X,
    mask: &M,
    y: &mut Y,
    shape: [isize; 1],
    strides: [isize; 3],
    f: F,
) where
    X: Indexable + ?Sized,
    M: Indexable<Elem = u8> + ?Sized,
    Y: IndexableMut + ?Sized,
    F: FnMut(X::Elem) -> Y::Elem,
{
    let n = shape[0];
    let offsets = [
        stride_offset(n, strides[0]),
        stride_offset(n, strides[1]),
        stride_offset(n, strides[2]),
    ];
    masked_unary_ndarray(x, mask, y, shape, strides, offsets, f);
}

/// [`masked_unary`] with explicit per-array offsets.
#[allow(clippy::too_many_arguments)]
pub fn masked_unary_ndarray<X, M, Y, F>(
    x: &X,
    mask: &M,
    y: &mut Y,
    shape: [isize; 1],
    strides: [isize; 3],
    offsets: [usize; 3],
    mut f: F,
) where
    X: Indexable + ?Sized,
    M: Indexable<Elem = u8> + ?Sized,
    Y: IndexableMut + ?Sized,
    F: FnMut(X::Elem) -> Y::Elem,
{
    let n = shape[0];
    if n <= 0 {
        return;
    }
    let [sx, sm, sy] = strides;
    let mut ix = offsets[0] as isize;
    let mut im = offsets[1] as isize;
    let mut iy = offsets[2] as isize;
    for _ in 0..n {
        if mask.get(im as usize) == 0 {
            y.set(iy as usize, f(x.get(ix as usize)));
        }
        ix += sx;
        im += sm;
        iy += sy;
    }
}
