//! Interpolant builders and the strategy seam between the two slope families.
//!
//! Every builder goes through the same steps:
//!
//! 1. Fewer than three knots take the degree-one fallback.
//! 2. Interval widths and secants are computed once.
//! 3. The [`Scheme`] selected by the [`DerivativeKind`] produces the knot slopes,
//!    including any shape filtering.
//! 4. The cubic terms are filled in from the slopes.
use alloc::vec::Vec;
use num_traits::Float;

use crate::c2::{GlobalC2, ShapeFilter};
use crate::error::{check_samples, PpError};
use crate::kind::{Boundary, DerivativeKind};
use crate::linear::degenerate;
use crate::local::{Limiter, LocalLimiter};
use crate::pp::coefficients::{finalize, secants};
use crate::pp::CubicPP;

/// Produces the first derivative at every knot of a sample with at least
/// three knots.
///
/// Implementors receive the values `y`, interval widths `dx`, and secant
/// slopes `s`, and return a vector with one slope per knot.
pub trait SlopeScheme<T: Float> {
    fn slopes(
        &self,
        y: &[T],
        dx: &[T],
        s: &[T],
        left: Boundary<T>,
        right: Boundary<T>,
    ) -> Vec<T>;
}

/// Slope strategy selected by a [`DerivativeKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// C2 tridiagonal solve, then the filter if there is one
    GlobalC2 { filter: Option<ShapeFilter> },
    /// Limiter on the flanking secants of each knot
    LocalLimiter { limiter: Limiter },
}

impl<T: Float> SlopeScheme<T> for Scheme {
    #[inline]
    fn slopes(
        &self,
        y: &[T],
        dx: &[T],
        s: &[T],
        left: Boundary<T>,
        right: Boundary<T>,
    ) -> Vec<T> {
        match *self {
            Scheme::GlobalC2 { filter } => GlobalC2 { filter }.slopes(y, dx, s, left, right),
            Scheme::LocalLimiter { limiter } => {
                LocalLimiter { limiter }.slopes(y, dx, s, left, right)
            }
        }
    }
}

/// Cubic interpolant through `(x, y)` with slopes from `kind` and the given
/// end conditions, extended linearly outside the knots.
///
/// Preconditions are not checked: `x` must be strictly increasing and the
/// same length as `y`. Violations give non-finite or meaningless coefficients.
/// See [`try_make_cubic_pp`] for a checked version.
///
/// With fewer than three knots, the boundaries and kind are ignored and the
/// result is constant (one knot) or linear (two knots).
///
/// ```rust
/// use cubicpp::{make_cubic_pp, Boundary, DerivativeKind};
///
/// let x = [0.0_f64, 1.0, 2.0, 3.0];
/// let y = [0.0_f64, 1.0, 8.0, 27.0];
/// let pp = make_cubic_pp(&x, &y, Boundary::NotAKnot, Boundary::NotAKnot, DerivativeKind::VanLeer);
///
/// assert_eq!(pp.evaluate(2.0), 8.0);
/// assert!(pp.evaluate(2.5) > 8.0 && pp.evaluate(2.5) < 27.0);
/// ```
pub fn make_cubic_pp<T: Float>(
    x: &[T],
    y: &[T],
    left: Boundary<T>,
    right: Boundary<T>,
    kind: DerivativeKind,
) -> CubicPP<T> {
    let n = x.len();
    if n <= 2 {
        return degenerate(x, y);
    }

    let (dx, s) = secants(x, y);
    log::debug!("building {} interpolant on {n} knots", kind.name());
    let b = kind.scheme().slopes(y, &dx, &s, left, right);

    finalize(x, y, b, &dx, &s)
}

/// [`make_cubic_pp`] with its preconditions checked.
///
/// # Errors
/// * If `x` and `y` differ in length
/// * If any knot or value is non-finite
/// * If `x` is not strictly increasing
pub fn try_make_cubic_pp<T: Float>(
    x: &[T],
    y: &[T],
    left: Boundary<T>,
    right: Boundary<T>,
    kind: DerivativeKind,
) -> Result<CubicPP<T>, PpError> {
    check_samples(x, y)?;
    Ok(make_cubic_pp(x, y, left, right, kind))
}
