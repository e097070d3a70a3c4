//! Index arithmetic shared by the traversal kernels.
//!
//! A 1-D traversal of `n` elements over a buffer visits the physical indices
//! `offset + i*stride` for `i` in `0..n`. All arithmetic here is exact signed
//! integer arithmetic; the element type never participates.

use crate::{Result, StridedError};

/// Derives the starting offset the default (offset-less) entry points use.
///
/// For a non-negative stride the traversal starts at the buffer's beginning,
/// so the offset is `0`. For a negative stride the traversal must *end* at
/// index `0`, so it starts at `(1 - n) * stride` and walks backward from
/// there. This is the rule every default entry point applies; the `*_ndarray`
/// entry points take offsets explicitly instead.
///
/// Returns `0` for `n <= 0` (the kernels touch no element in that case).
///
/// # Example
/// ```rust
/// use strided_map::stride_offset;
///
/// assert_eq!(stride_offset(5, 1), 0);
/// assert_eq!(stride_offset(5, -1), 4);
/// assert_eq!(stride_offset(3, -2), 4);
/// ```
#[inline]
pub fn stride_offset(n: isize, stride: isize) -> usize {
    if stride >= 0 {
        0
    } else {
        ((1 - n) * stride).max(0) as usize
    }
}

/// The lowest and highest physical index a traversal visits, or `None` when
/// the traversal visits nothing (`n <= 0`).
#[inline]
pub fn span_bounds(n: isize, stride: isize, offset: usize) -> Option<(isize, isize)> {
    if n <= 0 {
        return None;
    }
    let first = offset as isize;
    let last = first + (n - 1) * stride;
    if stride >= 0 {
        Some((first, last))
    } else {
        Some((last, first))
    }
}

/// Checks that every physical index of a traversal lands inside a buffer of
/// length `len`.
///
/// The kernels themselves never perform this check; it is offered to
/// validating callers that want to reject a bad `(n, stride, offset)`
/// combination up front instead of panicking mid-loop.
///
/// # Errors
/// Returns [`StridedError::OutOfBounds`] with the offending index if the
/// traversal would leave the buffer.
pub fn validate_span(len: usize, n: isize, stride: isize, offset: usize) -> Result<()> {
    let Some((lo, hi)) = span_bounds(n, stride, offset) else {
        return Ok(());
    };
    if lo < 0 {
        return Err(StridedError::OutOfBounds { index: lo, len });
    }
    if hi as usize >= len {
        return Err(StridedError::OutOfBounds { index: hi, len });
    }
    Ok(())
}
