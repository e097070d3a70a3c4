//! Traversal kernels with a broker callback ahead of the element operation.
//!
//! A `-by` kernel fetches the indexed input value(s), hands them to a broker
//! callback, and only runs the element operation when the broker returns
//! `Some`. `None` suppresses the iteration entirely — the operation is not
//! invoked and the output element is left untouched. The broker may also
//! transform the values it passes through, so a single operation can be
//! reused over inputs that need per-call adjustment (unit scaling, hole
//! filtering over sparse inputs, extracting a component of a composite
//! element).

use crate::accessor::{Indexable, IndexableMut};
use crate::stride::stride_offset;

/// Applies a unary operation to each indexed element of `x` accepted by
/// `broker`, writing into `y`.
///
/// # Example
/// ```rust
/// use strided_map::unary_by;
///
/// // Double on the way in; abs is the operation.
/// let x = vec![-1.0, -2.0, -3.0];
/// let mut y = vec![0.0; 3];
/// unary_by(&x, &mut y, [3], [1, 1], f64::abs, |v| Some(v * 2.0));
/// assert_eq!(y, vec![2.0, 4.0, 6.0]);
/// ```
pub fn unary_by<X, Y, A, F, B>(
    x: &X,
    y: &mut Y,
    shape: [isize; 1],
    strides: [isize; 2],
    f: F,
    broker: B,
) where
    X: Indexable + ?Sized,
    Y: IndexableMut + ?Sized,
    F: FnMut(A) -> Y::Elem,
    B: FnMut(X::Elem) -> Option<A>,
{
    let n = shape[0];
    let offsets = [stride_offset(n, strides[0]), stride_offset(n, strides[1])];
    unary_by_ndarray(x, y, shape, strides, offsets, f, broker);
}

/// [`unary_by`] with explicit per-array offsets.
pub fn unary_by_ndarray<X, Y, A, F, B>(
    x: &X,
    y: &mut Y,
    shape: [isize; 1],
    strides: [isize; 2],
    offsets: [usize; 2],
    mut f: F,
    mut broker: B,
) where
    X: Indexable + ?Sized,
    Y: IndexableMut + ?Sized,
    F: FnMut(A) -> Y::Elem,
    B: FnMut(X::Elem) -> Option<A>,
{
    let n = shape[0];
    if n <= 0 {
        return;
    }
    let [sx, sy] = strides;
    let mut ix = offsets[0] as isize;
    let mut iy = offsets[1] as isize;
    for _ in 0..n {
        if let Some(v) = broker(x.get(ix as usize)) {
            y.set(iy as usize, f(v));
        }
        ix += sx;
        iy += sy;
    }
}

/// Applies a binary operation to each pair of indexed elements of `x1` and
/// `x2` accepted by `broker`, writing into `y`.
pub fn binary_by<X1, X2, Y, A, B2, F, B>(
    x1: &X1,
    x2: &X2,
    y: &mut Y,
    shape: [isize; 1],
    strides: [isize; 3],
    f: F,
    broker: B,
) where
    X1: Indexable + ?Sized,
    X2: Indexable + ?Sized,
    Y: IndexableMut + ?Sized,
    F: FnMut(A, B2) -> Y::Elem,
    B: FnMut(X1::Elem, X2::Elem) -> Option<(A, B2)>,
{
    let n = shape[0];
    let offsets = [
        stride_offset(n, strides[0]),
        stride_offset(n, strides[1]),
        stride_offset(n, strides[2]),
    ];
    binary_by_ndarray(x1, x2, y, shape, strides, offsets, f, broker);
}

/// [`binary_by`] with explicit per-array offsets.
#[allow(clippy::too_many_arguments)]
pub fn binary_by_ndarray<X1, X2, Y, A, B2, F, B>(
    x1: &X1,
    x2: &X2,
    y: &mut Y,
    shape: [isize; 1],
    strides: [isize; 3],
    offsets: [usize; 3],
    mut f: F,
    mut broker: B,
) where
    X1: Indexable + ?Sized,
    X2: Indexable + ?Sized,
    Y: IndexableMut + ?Sized,
    F: FnMut(A, B2) -> Y::Elem,
    B: FnMut(X1::Elem, X2::Elem) -> Option<(A, B2)>,
{
    let n = shape[0];
    if n <= 0 {
        return;
    }
    let [s1, s2, sy] = strides;
    let mut i1 = offsets[0] as isize;
    let mut i2 = offsets[1] as isize;
    let mut iy = offsets[2] as isize;
    for _ in 0..n {
        if let Some((a, b)) = broker(x1.get(i1 as usize), x2.get(i2 as usize)) {
            y.set(iy as usize, f(a, b));
        }
        i1 += s1;
        i2 += s2;
        iy += sy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sparse::SparseVec;

    #[test]
    fn test_unary_by_transforms() {
        let x = vec![-1.0, -2.0, -3.0, -4.0, -5.0];
        let mut y = vec![0.0; 5];
        unary_by(&x, &mut y, [5], [1, 1], f64::abs, |v| Some(v * 2.0));
        assert_eq!(y, vec![2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn test_unary_by_none_skips_write() {
        let x = SparseVec::from_pairs(5, f64::NAN, &[(2, -3.0)]);
        let mut y = vec![0.0; 5];
        unary_by(&x, &mut y, [5], [1, 1], f64::abs, |v| {
            if v.is_nan() {
                None
            } else {
                Some(v * 2.0)
            }
        });
        assert_eq!(y, vec![0.0, 0.0, 6.0, 0.0, 0.0]);
    }

    #[test]
    fn test_unary_by_skips_operation_too() {
        let x = vec![1.0, -1.0, 2.0];
        let mut y = vec![0.0; 3];
        let mut op_calls = 0;
        unary_by(
            &x,
            &mut y,
            [3],
            [1, 1],
            |v| {
                op_calls += 1;
                v
            },
            |v| if v < 0.0 { None } else { Some(v) },
        );
        assert_eq!(op_calls, 2);
        assert_eq!(y, vec![1.0, 0.0, 2.0]);
    }

    #[test]
    fn test_binary_by_pairs() {
        let x1 = vec![1.0, 2.0, 3.0];
        let x2 = vec![10.0, 20.0, 30.0];
        let mut y = vec![0.0; 3];
        binary_by(&x1, &x2, &mut y, [3], [1, 1, 1], |a, b| a + b, |a, b| {
            Some((a * 2.0, b))
        });
        assert_eq!(y, vec![12.0, 24.0, 36.0]);
    }

    #[test]
    fn test_binary_by_none_leaves_output() {
        let x1 = vec![1.0, 2.0, 3.0];
        let x2 = vec![1.0, 0.0, 1.0];
        let mut y = vec![9.0; 3];
        binary_by(&x1, &x2, &mut y, [3], [1, 1, 1], |a, b| a / b, |a, b| {
            if b == 0.0 {
                None
            } else {
                Some((a, b))
            }
        });
        assert_eq!(y, vec![1.0, 9.0, 3.0]);
    }

    #[test]
    fn test_unary_by_ndarray_negative_stride() {
        let x = vec![1.0, 2.0, 3.0];
        let mut y = vec![0.0; 3];
        unary_by_ndarray(&x, &mut y, [3], [-1, 1], [2, 0], |v| v, Some);
        assert_eq!(y, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_unary_by_empty_noop() {
        let x = vec![1.0];
        let mut y = vec![5.0];
        unary_by(&x, &mut y, [-2], [1, 1], f64::abs, |v| Some(v));
        assert_eq!(y, vec![5.0]);
    }
}
