//! Element-operation adapters bridging fixed-arity closures to the general
//! N-ary kernel.
//!
//! The fixed-arity kernels in [`crate::map`] take closures directly and cost
//! nothing. The general kernel ([`crate::apply_nary`]) gathers one value per
//! input array into a slice and hands that slice to an [`ElementFn`]; the
//! wrapper types here adapt an ordinary closure of arity 0 through 5 to that
//! calling convention, each as a distinct monomorphized type. [`VariadicFn`]
//! covers any arity beyond the fixed set.
//!
//! An adapter consumes exactly the first `arity()` gathered values and
//! ignores the rest, so an operation never observes how many arrays the
//! kernel is actually driving.

/// An element operation invokable with a slice of gathered input values.
///
/// Implementors declare their arity once; [`invoke`](ElementFn::invoke) is
/// called with at least that many values and must read only the first
/// `arity()` of them.
pub trait ElementFn<T> {
    /// Number of input values the operation consumes per call.
    fn arity(&self) -> usize;

    /// Applies the operation to the first `arity()` values of `args`.
    fn invoke(&mut self, args: &[T]) -> T;
}

/// Adapts a zero-argument closure (a generator) to [`ElementFn`].
pub struct NullaryFn<F>(F);

impl<F> NullaryFn<F> {
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<T, F: FnMut() -> T> ElementFn<T> for NullaryFn<F> {
    fn arity(&self) -> usize {
        0
    }

    #[inline]
    fn invoke(&mut self, _args: &[T]) -> T {
        (self.0)()
    }
}

/// Adapts a one-argument closure to [`ElementFn`].
pub struct UnaryFn<F>(F);

impl<F> UnaryFn<F> {
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<T: Copy, F: FnMut(T) -> T> ElementFn<T> for UnaryFn<F> {
    fn arity(&self) -> usize {
        1
    }

    #[inline]
    fn invoke(&mut self, args: &[T]) -> T {
        (self.0)(args[0])
    }
}

/// Adapts a two-argument closure to [`ElementFn`].
pub struct BinaryFn<F>(F);

impl<F> BinaryFn<F> {
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<T: Copy, F: FnMut(T, T) -> T> ElementFn<T> for BinaryFn<F> {
    fn arity(&self) -> usize {
        2
    }

    #[inline]
    fn invoke(&mut self, args: &[T]) -> T {
        (self.0)(args[0], args[1])
    }
}

/// Adapts a three-argument closure to [`ElementFn`].
pub struct TernaryFn<F>(F);

impl<F> TernaryFn<F> {
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<T: Copy, F: FnMut(T, T, T) -> T> ElementFn<T> for TernaryFn<F> {
    fn arity(&self) -> usize {
        3
    }

    #[inline]
    fn invoke(&mut self, args: &[T]) -> T {
        (self.0)(args[0], args[1], args[2])
    }
}

/// Adapts a four-argument closure to [`ElementFn`].
pub struct QuaternaryFn<F>(F);

impl<F> QuaternaryFn<F> {
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<T: Copy, F: FnMut(T, T, T, T) -> T> ElementFn<T> for QuaternaryFn<F> {
    fn arity(&self) -> usize {
        4
    }

    #[inline]
    fn invoke(&mut self, args: &[T]) -> T {
        (self.0)(args[0], args[1], args[2], args[3])
    }
}

/// Adapts a five-argument closure to [`ElementFn`].
pub struct QuinaryFn<F>(F);

impl<F> QuinaryFn<F> {
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<T: Copy, F: FnMut(T, T, T, T, T) -> T> ElementFn<T> for QuinaryFn<F> {
    fn arity(&self) -> usize {
        5
    }

    #[inline]
    fn invoke(&mut self, args: &[T]) -> T {
        (self.0)(args[0], args[1], args[2], args[3], args[4])
    }
}

/// Adapts a slice-consuming closure of any declared arity to [`ElementFn`].
///
/// The fallback for arities above [`MAX_FIXED_ARITY`](crate::MAX_FIXED_ARITY);
/// the closure receives exactly the first `arity` gathered values.
pub struct VariadicFn<F> {
    arity: usize,
    f: F,
}

impl<F> VariadicFn<F> {
    pub fn new(arity: usize, f: F) -> Self {
        Self { arity, f }
    }
}

impl<T, F: FnMut(&[T]) -> T> ElementFn<T> for VariadicFn<F> {
    fn arity(&self) -> usize {
        self.arity
    }

    #[inline]
    fn invoke(&mut self, args: &[T]) -> T {
        (self.f)(&args[..self.arity])
    }
}
