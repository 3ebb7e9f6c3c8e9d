//! Secant slopes and Hermite coefficient finalization, shared by every
//! slope construction once the knot derivatives `b` are known.
use alloc::vec::Vec;
use num_traits::Float;

use super::CubicPP;

/// Interval widths `dx[i] = x[i+1] - x[i]` and secant slopes
/// `s[i] = (y[i+1] - y[i]) / dx[i]`, each of size n-1.
///
/// Coincident knots are not guarded here and give non-finite slopes.
pub fn secants<T: Float>(x: &[T], y: &[T]) -> (Vec<T>, Vec<T>) {
    let m = x.len().saturating_sub(1);
    let mut dx = Vec::with_capacity(m);
    let mut s = Vec::with_capacity(m);
    for i in 0..m {
        let h = x[i + 1] - x[i];
        dx.push(h);
        s.push((y[i + 1] - y[i]) / h);
    }
    (dx, s)
}

/// Quadratic and cubic terms of the Hermite cubic on each interval,
/// given the knot derivatives `b`:
///
/// ```text
/// c[i] = (3 s[i] - b[i+1] - 2 b[i]) / dx[i]
/// d[i] = (b[i+1] + b[i] - 2 s[i]) / dx[i]^2
/// ```
pub fn hermite<T: Float>(dx: &[T], s: &[T], b: &[T]) -> (Vec<T>, Vec<T>) {
    let two = T::one() + T::one();
    let three = two + T::one();

    let m = dx.len();
    let mut c = Vec::with_capacity(m);
    let mut d = Vec::with_capacity(m);
    for i in 0..m {
        c.push((three * s[i] - b[i + 1] - two * b[i]) / dx[i]);
        d.push((b[i + 1] + b[i] - two * s[i]) / (dx[i] * dx[i]));
    }
    (c, d)
}

/// Assemble the interpolant from knots, values, knot derivatives,
/// and the interval data they were built from.
pub(crate) fn finalize<T: Float>(x: &[T], y: &[T], b: Vec<T>, dx: &[T], s: &[T]) -> CubicPP<T> {
    let (c, d) = hermite(dx, s, &b);
    CubicPP::from_parts(x.to_vec(), y.to_vec(), b, c, d)
}
