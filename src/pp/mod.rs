//! Piecewise-cubic representation and its evaluation routines.
//!
//! A [`CubicPP`] is built once by one of the builders and is read-only afterwards;
//! it has no interior mutability, so a shared reference can be evaluated from
//! any number of threads.
pub mod coefficients;

use alloc::vec::Vec;
use num_traits::Float;

use crate::error::PpError;

/// Machine epsilon of the value type, used to detect coincident knots
/// in the two-point fallback.
#[inline(always)]
pub fn machine_epsilon<T: Float>() -> T {
    T::epsilon()
}

/// Extrapolation flag
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Extrap {
    Inside,
    OutsideLow,
    OutsideHigh,
}

/// Piecewise-cubic polynomial on a set of knots.
///
/// On `[x[i], x[i+1])` the interpolant is `a[i] + h*(b[i] + h*(c[i] + h*d[i]))`
/// with `h = z - x[i]`. Below the first knot and above the last one it is
/// extended linearly with slope `b[0]` and `b[n-1]` respectively.
#[derive(Clone, Debug, PartialEq)]
pub struct CubicPP<T> {
    /// Knots, size n
    x: Vec<T>,
    /// Values at knots, size n
    a: Vec<T>,
    /// First derivative at knots, size n
    b: Vec<T>,
    /// Quadratic term per interval, size n-1 (0 when n <= 1)
    c: Vec<T>,
    /// Cubic term per interval, size n-1 (0 when n <= 1)
    d: Vec<T>,
}

impl<T: Float> CubicPP<T> {
    pub(crate) fn from_parts(x: Vec<T>, a: Vec<T>, b: Vec<T>, c: Vec<T>, d: Vec<T>) -> Self {
        let n = x.len();
        debug_assert!(a.len() == n && b.len() == n);
        debug_assert!(c.len() == n.saturating_sub(1) && d.len() == c.len());
        Self { x, a, b, c, d }
    }

    /// Number of knots
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Knot locations
    #[inline]
    pub fn knots(&self) -> &[T] {
        &self.x
    }

    /// First and last knot, if there are any
    #[inline]
    pub fn domain(&self) -> Option<(T, T)> {
        Some((*self.x.first()?, *self.x.last()?))
    }

    #[cfg(test)]
    pub(crate) fn coefs(&self) -> (&[T], &[T], &[T], &[T]) {
        (&self.a, &self.b, &self.c, &self.d)
    }

    /// Get the index of the interval containing `z` and whether `z` is
    /// outside the knots. At or beyond either end, the index is that of the
    /// end knot.
    ///
    /// Requires at least one knot.
    #[inline]
    pub(crate) fn index(&self, z: T) -> (usize, Extrap) {
        let n = self.x.len();
        if z <= self.x[0] {
            return (0, Extrap::OutsideLow);
        }
        if z >= self.x[n - 1] {
            return (n - 1, Extrap::OutsideHigh);
        }

        // n >= 2 here, since x[0] < z < x[n-1]
        let i = (self.x.partition_point(|v| v <= &z).saturating_sub(1)).min(n - 2);

        (i, Extrap::Inside)
    }

    /// Value of the interpolant at `z`, extrapolating linearly outside the knots.
    ///
    /// Returns NaN for an interpolant with no knots.
    #[inline]
    pub fn evaluate(&self, z: T) -> T {
        if self.x.is_empty() {
            return T::nan();
        }
        match self.index(z) {
            (i, Extrap::Inside) => {
                let h = z - self.x[i];
                self.a[i] + h * (self.b[i] + h * (self.c[i] + h * self.d[i]))
            }
            (i, _) => self.a[i] + self.b[i] * (z - self.x[i]),
        }
    }

    /// First derivative at `z`; the end slope outside the knots.
    #[inline]
    pub fn evaluate_derivative(&self, z: T) -> T {
        if self.x.is_empty() {
            return T::nan();
        }
        let two = T::one() + T::one();
        let three = two + T::one();
        match self.index(z) {
            (i, Extrap::Inside) => {
                let h = z - self.x[i];
                self.b[i] + h * (two * self.c[i] + h * three * self.d[i])
            }
            (i, _) => self.b[i],
        }
    }

    /// Second derivative at `z`.
    ///
    /// Outside the knots this returns the end *slope* `b[0]` or `b[n-1]`,
    /// the same value as [`CubicPP::evaluate_derivative`], rather than the zero
    /// curvature of the linear extension. Callers that need the curvature of the
    /// extension should test against [`CubicPP::domain`] first.
    #[inline]
    pub fn evaluate_second_derivative(&self, z: T) -> T {
        if self.x.is_empty() {
            return T::nan();
        }
        let two = T::one() + T::one();
        let six = two * (two + T::one());
        match self.index(z) {
            (i, Extrap::Inside) => {
                let h = z - self.x[i];
                two * self.c[i] + h * six * self.d[i]
            }
            (i, _) => self.b[i],
        }
    }

    /// View for batch evaluation of the first derivative
    #[inline]
    pub fn derivative(&self) -> Derivative<'_, T> {
        Derivative(self)
    }

    /// View for batch evaluation of the second derivative
    #[inline]
    pub fn second_derivative(&self) -> SecondDerivative<'_, T> {
        SecondDerivative(self)
    }
}

/// A one-dimensional interpolator.
pub trait Interp1D<T: Float> {
    /// Evaluate at an observation point.
    fn eval_one(&self, loc: T) -> T;

    /// Evaluate at a set of observation points.
    ///
    /// # Errors
    /// * If `out` and `locs` differ in length
    #[inline]
    fn eval(&self, locs: &[T], out: &mut [T]) -> Result<(), PpError> {
        if locs.len() != out.len() {
            return Err(PpError::OutputLength {
                expected: locs.len(),
                got: out.len(),
            });
        }

        for i in 0..locs.len() {
            out[i] = self.eval_one(locs[i]);
        }

        Ok(())
    }

    /// Evaluate at a set of observation points, allocating
    /// for the output values for convenience.
    #[inline]
    fn eval_alloc(&self, locs: &[T]) -> Vec<T> {
        locs.iter().map(|&z| self.eval_one(z)).collect()
    }
}

impl<T: Float> Interp1D<T> for CubicPP<T> {
    #[inline]
    fn eval_one(&self, loc: T) -> T {
        self.evaluate(loc)
    }
}

/// First derivative of a [`CubicPP`]
#[derive(Clone, Copy, Debug)]
pub struct Derivative<'a, T>(&'a CubicPP<T>);

impl<T: Float> Interp1D<T> for Derivative<'_, T> {
    #[inline]
    fn eval_one(&self, loc: T) -> T {
        self.0.evaluate_derivative(loc)
    }
}

/// Second derivative of a [`CubicPP`]
#[derive(Clone, Copy, Debug)]
pub struct SecondDerivative<'a, T>(&'a CubicPP<T>);

impl<T: Float> Interp1D<T> for SecondDerivative<'_, T> {
    #[inline]
    fn eval_one(&self, loc: T) -> T {
        self.0.evaluate_second_derivative(loc)
    }
}
