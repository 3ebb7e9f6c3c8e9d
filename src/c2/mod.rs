//! Global slope construction: C2 cubic splines.
//!
//! The knot derivatives are the unknowns of a tridiagonal system whose
//! interior rows enforce continuity of the second derivative and whose first
//! and last rows encode the boundary conditions. Once solved, the slopes may be
//! passed through a [`ShapeFilter`] before the cubic coefficients are computed.
//!
//! Unlike a local scheme, every slope depends on every sample, and the
//! unfiltered result is twice continuously differentiable.
//!
//! ```rust
//! use cubicpp::{make_cubic_pp, Boundary, DerivativeKind};
//!
//! let x = [0.0_f64, 1.0, 2.5, 3.0, 4.0];
//! let y = [0.0_f64, 0.5, 3.0, 3.1, 5.0];
//!
//! let natural = make_cubic_pp(
//!     &x,
//!     &y,
//!     Boundary::SecondDerivative(0.0),
//!     Boundary::SecondDerivative(0.0),
//!     DerivativeKind::C2,
//! );
//! assert!(natural.evaluate_second_derivative(0.0 + 1e-12).abs() < 1e-9);
//!
//! // Same system, then clamped to keep the interpolant monotone
//! let nak = Boundary::NotAKnot;
//! let monotone = make_cubic_pp(&x, &y, nak, nak, DerivativeKind::C2MP);
//! assert!(monotone.evaluate_derivative(3.5) >= 0.0);
//! ```
pub mod filter;
pub mod tridiagonal;

use alloc::vec::Vec;
use num_traits::Float;

use crate::build::SlopeScheme;
use crate::kind::Boundary;
pub use filter::ShapeFilter;
pub use tridiagonal::Tridiagonal;

/// Tridiagonal C2 solve, optionally followed by a shape filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GlobalC2 {
    pub filter: Option<ShapeFilter>,
}

impl<T: Float> SlopeScheme<T> for GlobalC2 {
    fn slopes(
        &self,
        y: &[T],
        dx: &[T],
        s: &[T],
        left: Boundary<T>,
        right: Boundary<T>,
    ) -> Vec<T> {
        let (tri, mut b) = system(dx, s, left, right);
        tri.solve(&mut b);

        if let Some(filter) = self.filter {
            filter.apply(&mut b, y, dx, s);
        }

        b
    }
}

/// Assemble the slope system `tri * b = alpha` for n = dx.len() + 1 >= 3 knots,
/// returning the matrix and the right-hand side.
pub fn system<T: Float>(
    dx: &[T],
    s: &[T],
    left: Boundary<T>,
    right: Boundary<T>,
) -> (Tridiagonal<T>, Vec<T>) {
    let n = dx.len() + 1;
    debug_assert!(n >= 3 && s.len() == n - 1);

    let zero = T::zero();
    let one = T::one();
    let two = one + one;
    let three = two + one;

    let mut tri = Tridiagonal::zeros(n);
    let mut alpha = alloc::vec![zero; n];

    // Interior: second-derivative continuity
    for i in 1..n - 1 {
        tri.lower[i - 1] = dx[i];
        tri.upper[i] = dx[i - 1];
        tri.diag[i] = two * (dx[i] + dx[i - 1]);
        alpha[i] = three * (dx[i] * s[i - 1] + dx[i - 1] * s[i]);
    }

    match left {
        Boundary::NotAKnot => {
            let w = dx[1] + dx[0];
            tri.diag[0] = dx[1] * w;
            tri.upper[0] = w * w;
            alpha[0] = s[0] * dx[1] * (two * dx[1] + three * dx[0]) + s[1] * dx[0] * dx[0];
        }
        Boundary::FirstDerivative(v) => {
            tri.diag[0] = one;
            tri.upper[0] = zero;
            alpha[0] = v;
        }
        Boundary::FirstDifference => {
            tri.diag[0] = one;
            tri.upper[0] = zero;
            alpha[0] = s[0];
        }
        Boundary::SecondDerivative(v) => {
            tri.diag[0] = two;
            tri.upper[0] = one;
            alpha[0] = three * s[0] - v * dx[0] / two;
        }
    }

    let (m, l) = (n - 2, n - 3);
    match right {
        // With three knots, two not-a-knot rows ask for the same single cubic
        // and leave the system singular; take the end slope of the
        // interpolating parabola instead, which satisfies both.
        Boundary::NotAKnot if n == 3 && left.is_not_a_knot() => {
            tri.diag[n - 1] = one;
            tri.lower[m] = zero;
            alpha[n - 1] = s[1] + dx[1] * (s[1] - s[0]) / (dx[0] + dx[1]);
        }
        Boundary::NotAKnot => {
            let w = dx[m] + dx[l];
            tri.lower[m] = -(w * w);
            tri.diag[n - 1] = -dx[l] * w;
            alpha[n - 1] = -s[l] * dx[m] * dx[m] - s[m] * dx[l] * (three * dx[m] + two * dx[l]);
        }
        Boundary::FirstDerivative(v) => {
            tri.diag[n - 1] = one;
            tri.lower[m] = zero;
            alpha[n - 1] = v;
        }
        Boundary::FirstDifference => {
            tri.diag[n - 1] = one;
            tri.lower[m] = zero;
            alpha[n - 1] = s[m];
        }
        Boundary::SecondDerivative(v) => {
            tri.diag[n - 1] = two;
            tri.lower[m] = one;
            alpha[n - 1] = three * s[m] + v * dx[m] / two;
        }
    }

    (tri, alpha)
}
