//! Degree-one interpolants: constant and two-point fallbacks for the cubic
//! builders, and plain piecewise-linear interpolation.
use alloc::vec;
use alloc::vec::Vec;
use num_traits::Float;

use crate::error::{check_samples, PpError};
use crate::pp::coefficients::secants;
use crate::pp::{machine_epsilon, CubicPP};

/// Interpolant for fewer than three points.
///
/// * With zero or one point, the interpolant is the constant `y[0]`
///   (and undefined with zero points).
/// * With two points, it is the line through them. When the two knots
///   coincide to within machine epsilon, the slope is 0 instead of a
///   non-finite quotient.
pub(crate) fn degenerate<T: Float>(x: &[T], y: &[T]) -> CubicPP<T> {
    let n = x.len();
    debug_assert!(n <= 2);
    log::trace!("degree-one fallback for {n} knot(s)");

    match n {
        0 | 1 => CubicPP::from_parts(x.to_vec(), y.to_vec(), vec![T::zero(); n], vec![], vec![]),
        _ => {
            let h = x[1] - x[0];
            let slope = if h.abs() < machine_epsilon() {
                T::zero()
            } else {
                (y[1] - y[0]) / h
            };
            CubicPP::from_parts(
                x.to_vec(),
                y.to_vec(),
                vec![slope; 2],
                vec![T::zero()],
                vec![T::zero()],
            )
        }
    }
}

/// Piecewise-linear interpolant through `(x, y)`, extended linearly beyond
/// the end knots with the first and last secant slope.
///
/// Preconditions are not checked: `x` must be strictly increasing and the
/// same length as `y`. See [`try_make_linear_cubic_pp`] for a checked version.
///
/// ```rust
/// use cubicpp::make_linear_cubic_pp;
///
/// let pp = make_linear_cubic_pp(&[0.0_f64, 1.0, 3.0], &[0.0, 2.0, 1.0]);
/// assert_eq!(pp.evaluate(0.5), 1.0);
/// assert_eq!(pp.evaluate(2.0), 1.5);
/// assert_eq!(pp.evaluate(5.0), 0.0);
/// ```
pub fn make_linear_cubic_pp<T: Float>(x: &[T], y: &[T]) -> CubicPP<T> {
    let n = x.len();
    if n <= 2 {
        return degenerate(x, y);
    }

    let (_dx, s) = secants(x, y);
    let mut b: Vec<T> = Vec::with_capacity(n);
    b.extend_from_slice(&s);
    b.push(s[n - 2]);

    CubicPP::from_parts(
        x.to_vec(),
        y.to_vec(),
        b,
        vec![T::zero(); n - 1],
        vec![T::zero(); n - 1],
    )
}

/// [`make_linear_cubic_pp`] with its preconditions checked.
///
/// # Errors
/// * If `x` and `y` differ in length
/// * If any input is non-finite
/// * If `x` is not strictly increasing
pub fn try_make_linear_cubic_pp<T: Float>(x: &[T], y: &[T]) -> Result<CubicPP<T>, PpError> {
    check_samples(x, y)?;
    Ok(make_linear_cubic_pp(x, y))
}
