//! Interleaved complex storage accessed through the element protocol.

use num_complex::Complex;
use num_traits::Zero;

use crate::accessor::{Indexable, IndexableMut};
use crate::{Result, StridedError};

/// A complex-valued buffer stored as interleaved `[re, im, re, im, …]`
/// components.
///
/// This is the canonical accessor-backed container: element `i` lives at
/// component positions `2*i` and `2*i + 1`, so plain indexing cannot produce
/// a `Complex<T>` and every access goes through [`Indexable::get`] /
/// [`IndexableMut::set`]. A kernel traversing this container with stride `s`
/// steps `s` complex elements, i.e. `2*s` component positions.
///
/// # Example
/// ```rust
/// use num_complex::Complex;
/// use strided_map::{Indexable, InterleavedComplex};
///
/// let z = InterleavedComplex::from_interleaved(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(z.len(), 2);
/// assert_eq!(z.get(1), Complex::new(3.0, 4.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InterleavedComplex<T> {
    buf: Vec<T>,
}

impl<T: Copy> InterleavedComplex<T> {
    /// Wraps an interleaved component buffer.
    ///
    /// # Errors
    /// Returns [`StridedError::OddInterleavedLength`] if `buf` does not hold
    /// a whole number of re/im pairs.
    pub fn from_interleaved(buf: Vec<T>) -> Result<Self> {
        if buf.len() % 2 != 0 {
            return Err(StridedError::OddInterleavedLength(buf.len()));
        }
        Ok(Self { buf })
    }

    /// Builds an interleaved buffer from complex values.
    pub fn from_complex(values: &[Complex<T>]) -> Self {
        let mut buf = Vec::with_capacity(values.len() * 2);
        for v in values {
            buf.push(v.re);
            buf.push(v.im);
        }
        Self { buf }
    }

    /// A zero-filled buffer holding `len` complex elements.
    pub fn zeros(len: usize) -> Self
    where
        T: Zero,
    {
        Self {
            buf: vec![T::zero(); len * 2],
        }
    }

    /// The raw interleaved component storage.
    #[inline]
    pub fn as_interleaved(&self) -> &[T] {
        &self.buf
    }

    /// Consumes the container, returning the interleaved component storage.
    pub fn into_interleaved(self) -> Vec<T> {
        self.buf
    }

    /// Collects the elements into a dense complex vector.
    pub fn to_complex_vec(&self) -> Vec<Complex<T>> {
        (0..Indexable::len(self)).map(|i| self.get(i)).collect()
    }
}

impl<T: Copy> Indexable for InterleavedComplex<T> {
    type Elem = Complex<T>;

    #[inline]
    fn len(&self) -> usize {
        self.buf.len() / 2
    }

    #[inline]
    fn get(&self, idx: usize) -> Complex<T> {
        Complex::new(self.buf[idx * 2], self.buf[idx * 2 + 1])
    }
}

impl<T: Copy> IndexableMut for InterleavedComplex<T> {
    #[inline]
    fn set(&mut self, idx: usize, value: Complex<T>) {
        self.buf[idx * 2] = value.re;
        self.buf[idx * 2 + 1] = value.im;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn test_from_interleaved() {
        let z = InterleavedComplex::from_interleaved(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(Indexable::len(&z), 2);
        assert_eq!(z.get(0), Complex64::new(1.0, 2.0));
        assert_eq!(z.get(1), Complex64::new(3.0, 4.0));
    }

    #[test]
    fn test_odd_length_rejected() {
        let err = InterleavedComplex::from_interleaved(vec![1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, StridedError::OddInterleavedLength(3)));
    }

    #[test]
    fn test_set_writes_components() {
        let mut z = InterleavedComplex::<f64>::zeros(3);
        z.set(1, Complex64::new(-1.0, 5.0));
        assert_eq!(z.as_interleaved(), &[0.0, 0.0, -1.0, 5.0, 0.0, 0.0]);
    }

    #[test]
    fn test_from_complex_round_trip() {
        let values = vec![Complex64::new(1.0, -1.0), Complex64::new(2.0, -2.0)];
        let z = InterleavedComplex::from_complex(&values);
        assert_eq!(z.to_complex_vec(), values);
    }
}
