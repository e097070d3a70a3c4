//! Fixed-arity strided traversal kernels.
//!
//! One kernel per operation arity, from `nullary` (no inputs, output-filling)
//! through `quinary` (five inputs), each in two call conventions:
//!
//! - the default entry takes `(inputs…, output, shape, strides, op)` and
//!   derives each array's starting offset from its stride
//!   ([`stride_offset`]: `0` for a non-negative stride, `(1 - n) * stride`
//!   for a negative one, so a backward traversal ends at index `0`);
//! - the `*_ndarray` entry additionally takes explicit per-array offsets,
//!   for views that begin mid-buffer.
//!
//! `shape` is the one-element `[n]`; `n <= 0` is an exact no-op that leaves
//! the output byte-for-byte untouched. `strides` and `offsets` are ordered
//! inputs-then-output. Iteration is strictly sequential in logical index
//! order, which is what makes negative strides and stateful operations
//! well defined; there is no reordering or batching.
//!
//! Input and output element types are independent, so a kernel can map an
//! accessor-backed complex buffer to a plain real one in a single pass. No
//! bounds are checked beyond what the backing containers themselves do.
//!
//! For the same arrays, strides, and offsets, each kernel here produces
//! bit-identical output to [`apply_nary`](crate::apply_nary) driven by the
//! matching adapter.

use crate::accessor::{Indexable, IndexableMut};
use crate::stride::stride_offset;

/// Fills a strided output with values from a generator.
///
/// # Example
/// ```rust
/// use strided_map::nullary;
///
/// let mut y = vec![0.0; 4];
/// nullary(&mut y, [4], [1], || 3.0);
/// assert_eq!(y, vec![3.0; 4]);
/// ```
pub fn nullary<Y, F>(y: &mut Y, shape: [isize; 1], strides: [isize; 1], f: F)
where
    Y: IndexableMut + ?Sized,
    F: FnMut() -> Y::Elem,
{
    let n = shape[0];
    let offsets = [stride_offset(n, strides[0])];
    nullary_ndarray(y, shape, strides, offsets, f);
}

/// [`nullary`] with an explicit output offset.
pub fn nullary_ndarray<Y, F>(
    y: &mut Y,
    shape: [isize; 1],
    strides: [isize; 1],
    offsets: [usize; 1],
    mut f: F,
) where
    Y: IndexableMut + ?Sized,
    F: FnMut() -> Y::Elem,
{
    let n = shape[0];
    if n <= 0 {
        return;
    }
    let [sy] = strides;
    let mut iy = offsets[0] as isize;
    for _ in 0..n {
        y.set(iy as usize, f());
        iy += sy;
    }
}

/// Applies a unary operation to each indexed element of `x`, writing into
/// `y`.
///
/// # Example
/// ```rust
/// use strided_map::unary;
///
/// let x = vec![-1.0, -2.0, -3.0, -4.0, -5.0];
/// let mut y = vec![0.0; 5];
/// unary(&x, &mut y, [5], [1, 1], f64::abs);
/// assert_eq!(y, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn unary<X, Y, F>(x: &X, y: &mut Y, shape: [isize; 1], strides: [isize; 2], f: F)
where
    X: Indexable + ?Sized,
    Y: IndexableMut + ?Sized,
    F: FnMut(X::Elem) -> Y::Elem,
{
    let n = shape[0];
    let offsets = [stride_offset(n, strides[0]), stride_offset(n, strides[1])];
    unary_ndarray(x, y, shape, strides, offsets, f);
}

/// [`unary`] with explicit per-array offsets.
///
/// # Example
/// ```rust
/// use strided_map::unary_ndarray;
///
/// // Reverse x into y: stride -1 starting from the last element.
/// let x = vec![1.0, 2.0, 3.0];
/// let mut y = vec![0.0; 3];
/// unary_ndarray(&x, &mut y, [3], [-1, 1], [2, 0], |v| v);
/// assert_eq!(y, vec![3.0, 2.0, 1.0]);
/// ```
pub fn unary_ndarray<X, Y, F>(
    x: &X,
    y: &mut Y,
    shape: [isize; 1],
    strides: [isize; 2],
    offsets: [usize; 2],
    mut f: F,
) where
    X: Indexable + ?Sized,
    Y: IndexableMut + ?Sized,
    F: FnMut(X::Elem) -> Y::Elem,
{
    let n = shape[0];
    if n <= 0 {
        return;
    }
    let [sx, sy] = strides;
    let mut ix = offsets[0] as isize;
    let mut iy = offsets[1] as isize;
    for _ in 0..n {
        y.set(iy as usize, f(x.get(ix as usize)));
        ix += sx;
        iy += sy;
    }
}

/// Applies a binary operation to pairs of indexed elements of `x1` and `x2`,
/// writing into `y`.
pub fn binary<X1, X2, Y, F>(
    x1: &X1,
    x2: &X2,
    y: &mut Y,
    shape: [isize; 1],
    strides: [isize; 3],
    f: F,
) where
    X1: Indexable + ?Sized,
    X2: Indexable + ?Sized,
    Y: IndexableMut + ?Sized,
    F: FnMut(X1::Elem, X2::Elem) -> Y::Elem,
{
    let n = shape[0];
    let offsets = [
        stride_offset(n, strides[0]),
        stride_offset(n, strides[1]),
        stride_offset(n, strides[2]),
    ];
    binary_ndarray(x1, x2, y, shape, strides, offsets, f);
}

/// [`binary`] with explicit per-array offsets.
pub fn binary_ndarray<X1, X2, Y, F>(
    x1: &X1,
    x2: &X2,
    y: &mut Y,
    shape: [isize; 1],
    strides: [isize; 3],
    offsets: [usize; 3],
    mut f: F,
) where
    X1: Indexable + ?Sized,
    X2: Indexable + ?Sized,
    Y: IndexableMut + ?Sized,
    F: FnMut(X1::Elem, X2::Elem) -> Y::Elem,
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
        y.set(iy as usize, f(x1.get(i1 as usize), x2.get(i2 as usize)));
        i1 += s1;
        i2 += s2;
        iy += sy;
    }
}

/// Applies a ternary operation to triples of indexed elements, writing into
/// `y`.
pub fn ternary<X1, X2, X3, Y, F>(
    x1: &X1,
    x2: &X2,
    x3: &X3,
    y: &mut Y,
    shape: [isize; 1],
    strides: [isize; 4],
    f: F,
) where
    X1: Indexable + ?Sized,
    X2: Indexable + ?Sized,
    X3: Indexable + ?Sized,
    Y: IndexableMut + ?Sized,
    F: FnMut(X1::Elem, X2::Elem, X3::Elem) -> Y::Elem,
{
    let n = shape[0];
    let offsets = [
        stride_offset(n, strides[0]),
        stride_offset(n, strides[1]),
        stride_offset(n, strides[2]),
        stride_offset(n, strides[3]),
    ];
    ternary_ndarray(x1, x2, x3, y, shape, strides, offsets, f);
}

/// [`ternary`] with explicit per-array offsets.
#[allow(clippy::too_many_arguments)]
pub fn ternary_ndarray<X1, X2, X3, Y, F>(
    x1: &X1,
    x2: &X2,
    x3: &X3,
    y: &mut Y,
    shape: [isize; 1],
    strides: [isize; 4],
    offsets: [usize; 4],
    mut f: F,
) where
    X1: Indexable + ?Sized,
    X2: Indexable + ?Sized,
    X3: Indexable + ?Sized,
    Y: IndexableMut + ?Sized,
    F: FnMut(X1::Elem, X2::Elem, X3::Elem) -> Y::Elem,
{
    let n = shape[0];
    if n <= 0 {
        return;
    }
    let [s1, s2, s3, sy] = strides;
    let mut i1 = offsets[0] as isize;
    let mut i2 = offsets[1] as isize;
    let mut i3 = offsets[2] as isize;
    let mut iy = offsets[3] as isize;
    for _ in 0..n {
        y.set(
            iy as usize,
            f(x1.get(i1 as usize), x2.get(i2 as usize), x3.get(i3 as usize)),
        );
        i1 += s1;
        i2 += s2;
        i3 += s3;
        iy += sy;
    }
}

/// Applies a quaternary operation to quadruples of indexed elements, writing
/// into `y`.
#[allow(clippy::too_many_arguments)]
pub fn quaternary<X1, X2, X3, X4, Y, F>(
    x1: &X1,
    x2: &X2,
    x3: &X3,
    x4: &X4,
    y: &mut Y,
    shape: [isize; 1],
    strides: [isize; 5],
    f: F,
) where
    X1: Indexable + ?Sized,
    X2: Indexable + ?Sized,
    X3: Indexable + ?Sized,
    X4: Indexable + ?Sized,
    Y: IndexableMut + ?Sized,
    F: FnMut(X1::Elem, X2::Elem, X3::Elem, X4::Elem) -> Y::Elem,
{
    let n = shape[0];
    let offsets = [
        stride_offset(n, strides[0]),
        stride_offset(n, strides[1]),
        stride_offset(n, strides[2]),
        stride_offset(n, strides[3]),
        stride_offset(n, strides[4]),
    ];
    quaternary_ndarray(x1, x2, x3, x4, y, shape, strides, offsets, f);
}

/// [`quaternary`] with explicit per-array offsets.
#[allow(clippy::too_many_arguments)]
pub fn quaternary_ndarray<X1, X2, X3, X4, Y, F>(
    x1: &X1,
    x2: &X2,
    x3: &X3,
    x4: &X4,
    y: &mut Y,
    shape: [isize; 1],
    strides: [isize; 5],
    offsets: [usize; 5],
    mut f: F,
) where
    X1: Indexable + ?Sized,
    X2: Indexable + ?Sized,
    X3: Indexable + ?Sized,
    X4: Indexable + ?Sized,
    Y: IndexableMut + ?Sized,
    F: FnMut(X1::Elem, X2::Elem, X3::Elem, X4::Elem) -> Y::Elem,
{
    let n = shape[0];
    if n <= 0 {
        return;
    }
    let [s1, s2, s3, s4, sy] = strides;
    let mut i1 = offsets[0] as isize;
    let mut i2 = offsets[1] as isize;
    let mut i3 = offsets[2] as isize;
    let mut i4 = offsets[3] as isize;
    let mut iy = offsets[4] as isize;
    for _ in 0..n {
        y.set(
            iy as usize,
            f(
                x1.get(i1 as usize),
                x2.get(i2 as usize),
                x3.get(i3 as usize),
                x4.get(i4 as usize),
            ),
        );
        i1 += s1;
        i2 += s2;
        i3 += s3;
        i4 += s4;
        iy += sy;
    }
}

/// Applies a quinary operation to quintuples of indexed elements, writing
/// into `y`.
#[allow(clippy::too_many_arguments)]
pub fn quinary<X1, X2, X3, X4, X5, Y, F>(
    x1: &X1,
    x2: &X2,
    x3: &X3,
    x4: &X4,
    x5: &X5,
    y: &mut Y,
    shape: [isize; 1],
    strides: [isize; 6],
    f: F,
) where
    X1: Indexable + ?Sized,
    X2: Indexable + ?Sized,
    X3: Indexable + ?Sized,
    X4: Indexable + ?Sized,
    X5: Indexable + ?Sized,
    Y: IndexableMut + ?Sized,
    F: FnMut(X1::Elem, X2::Elem, X3::Elem, X4::Elem, X5::Elem) -> Y::Elem,
{
    let n = shape[0];
    let offsets = [
        stride_offset(n, strides[0]),
        stride_offset(n, strides[1]),
        stride_offset(n, strides[2]),
        stride_offset(n, strides[3]),
        stride_offset(n, strides[4]),
        stride_offset(n, strides[5]),
    ];
    quinary_ndarray(x1, x2, x3, x4, x5, y, shape, strides, offsets, f);
}

/// [`quinary`] with explicit per-array offsets.
#[allow(clippy::too_many_arguments)]
pub fn quinary_ndarray<X1, X2, X3, X4, X5, Y, F>(
    x1: &X1,
    x2: &X2,
    x3: &X3,
    x4: &X4,
    x5: &X5,
    y: &mut Y,
    shape: [isize; 1],
    strides: [isize; 6],
    offsets: [usize; 6],
    mut f: F,
) where
    X1: Indexable + ?Sized,
    X2: Indexable + ?Sized,
    X3: Indexable + ?Sized,
    X4: Indexable + ?Sized,
    X5: Indexable + ?Sized,
    Y: IndexableMut + ?Sized,
    F: FnMut(X1::Elem, X2::Elem, X3::Elem, X4::Elem, X5::Elem) -> Y::Elem,
{
    let n = shape[0];
    if n <= 0 {
        return;
    }
    let [s1, s2, s3, s4, s5, sy] = strides;
    let mut i1 = offsets[0] as isize;
    let mut i2 = offsets[1] as isize;
    let mut i3 = offsets[2] as isize;
    let mut i4 = offsets[3] as isize;
    let mut i5 = offsets[4] as isize;
    let mut iy = offsets[5] as isize;
    for _ in 0..n {
        y.set(
            iy as usize,
            f(
                x1.get(i1 as usize),
                x2.get(i2 as usize),
                x3.get(i3 as usize),
                x4.get(i4 as usize),
                x5.get(i5 as usize),
            ),
        );
        i1 += s1;
        i2 += s2;
        i3 += s3;
        i4 += s4;
        i5 += s5;
        iy += sy;
    }
}
