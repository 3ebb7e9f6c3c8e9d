//! Local slope construction.
//!
//! Each interior slope is a [`Limiter`] applied to the two flanking secants,
//! so no system is solved and a change to one sample only moves the slopes
//! of its neighbors. End slopes follow the same [`Boundary`] policies as the
//! global solve, written in closed form in terms of the nearest interior slope.
pub mod limiter;

use alloc::vec;
use alloc::vec::Vec;
use num_traits::Float;

use crate::build::SlopeScheme;
use crate::kind::Boundary;
pub use limiter::Limiter;

/// Interior slopes from a limiter, ends in closed form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LocalLimiter {
    pub limiter: Limiter,
}

impl<T: Float> SlopeScheme<T> for LocalLimiter {
    fn slopes(
        &self,
        _y: &[T],
        dx: &[T],
        s: &[T],
        left: Boundary<T>,
        right: Boundary<T>,
    ) -> Vec<T> {
        let n = dx.len() + 1;
        debug_assert!(n >= 3 && s.len() == n - 1);

        let mut b = vec![T::zero(); n];
        for i in 1..n - 1 {
            b[i] = self.limiter.slope(s[i - 1], s[i], dx[i - 1], dx[i]);
        }

        b[0] = left_end(dx, s, b[1], left);
        b[n - 1] = right_end(dx, s, b[n - 2], right);
        b
    }
}

/// First slope, given the second one `b1`
fn left_end<T: Float>(dx: &[T], s: &[T], b1: T, bc: Boundary<T>) -> T {
    let two = T::one() + T::one();
    let three = two + T::one();

    match bc {
        Boundary::NotAKnot => {
            let w = dx[0] + dx[1];
            (s[0] * dx[1] * (two * dx[1] + three * dx[0]) + s[1] * dx[0] * dx[0] - w * w * b1)
                / (dx[1] * w)
        }
        Boundary::FirstDerivative(v) => v,
        Boundary::FirstDifference => s[0],
        Boundary::SecondDerivative(v) => (-v / two * dx[0] - b1 + three * s[0]) / two,
    }
}

/// Last slope, given the one before it `bm`
fn right_end<T: Float>(dx: &[T], s: &[T], bm: T, bc: Boundary<T>) -> T {
    let two = T::one() + T::one();
    let three = two + T::one();
    let n = dx.len() + 1;
    let (m, l) = (n - 2, n - 3);

    match bc {
        Boundary::NotAKnot => {
            let w = dx[m] + dx[l];
            (s[m] * dx[l] * (three * dx[m] + two * dx[l]) + s[l] * dx[m] * dx[m] - w * w * bm)
                / (dx[l] * w)
        }
        Boundary::FirstDerivative(v) => v,
        Boundary::FirstDifference => s[m],
        Boundary::SecondDerivative(v) => (v / two * dx[m] - bm + three * s[m]) / two,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::pp::coefficients::{finalize, secants};
    use crate::pp::CubicPP;
    use approx::assert_abs_diff_eq;

    const LIMITERS: [Limiter; 6] = [
        Limiter::Bessel,
        Limiter::HuynRational,
        Limiter::VanLeer,
        Limiter::VanAlbada,
        Limiter::FritschButland,
        Limiter::Brodlie,
    ];

    fn build(
        x: &[f64],
        y: &[f64],
        limiter: Limiter,
        left: Boundary<f64>,
        right: Boundary<f64>,
    ) -> CubicPP<f64> {
        let (dx, s) = secants(x, y);
        let b = LocalLimiter { limiter }.slopes(y, &dx, &s, left, right);
        finalize(x, y, b, &dx, &s)
    }

    #[test]
    fn test_zero_at_extrema() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [0.0, 1.0, 0.0, 1.0, 0.0];
        let gated = [
            Limiter::HuynRational,
            Limiter::VanLeer,
            Limiter::FritschButland,
            Limiter::Brodlie,
        ];
        let nak = Boundary::NotAKnot;
        for limiter in gated {
            let pp = build(&x, &y, limiter, nak, nak);
            let (_, b, _, _) = pp.coefs();
            assert_eq!(&b[1..4], &[0.0, 0.0, 0.0]);

            // Flat tangents at the peaks keep the curve within the data range
            for i in 0..40 {
                let z = 1.0 + 0.05 * i as f64;
                let v = pp.evaluate(z);
                assert!(
                    (-1e-12..=1.0 + 1e-12).contains(&v),
                    "{limiter:?} at {z}: {v}"
                );
            }

            // Single peak on equal widths
            let pp = build(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0], limiter, nak, nak);
            let (_, b, _, _) = pp.coefs();
            assert_eq!(b, &[2.0, 0.0, -2.0]);
            for i in 0..=40 {
                let z = 0.05 * i as f64;
                let v = pp.evaluate(z);
                assert!(
                    (-1e-12..=1.0 + 1e-12).contains(&v),
                    "{limiter:?} at {z}: {v}"
                );
            }

            // Skewed peak
            let pp = build(&[0.0, 1.0, 3.0], &[1.0, 2.0, 0.0], limiter, nak, nak);
            let (_, b, _, _) = pp.coefs();
            assert_eq!(b[1], 0.0);
            assert!(pp.evaluate(2.0) <= 2.0, "{limiter:?}");
        }
    }

    /// Bessel slopes and not-a-knot ends are exact for parabolas
    #[test]
    fn test_bessel_parabola() {
        let x = [0.0, 1.0, 3.0, 4.0, 4.5];
        let y: Vec<f64> = x.iter().map(|&v| v * v).collect();
        let nak = Boundary::NotAKnot;
        let pp = build(&x, &y, Limiter::Bessel, nak, nak);

        let (_, b, c, d) = pp.coefs();
        (0..x.len()).for_each(|i| assert_abs_diff_eq!(b[i], 2.0 * x[i], epsilon = 1e-12));
        c.iter().for_each(|&v| assert_abs_diff_eq!(v, 1.0, epsilon = 1e-12));
        d.iter().for_each(|&v| assert_abs_diff_eq!(v, 0.0, epsilon = 1e-12));
    }

    #[test]
    fn test_end_conditions() {
        let x = [0.0, 1.0, 3.0, 4.0];
        let y = [0.0, 1.0, 9.0, 16.0];
        let n = x.len();

        for limiter in LIMITERS {
            let pp = build(
                &x,
                &y,
                limiter,
                Boundary::FirstDerivative(-1.0),
                Boundary::FirstDifference,
            );
            let (_, b, _, _) = pp.coefs();
            assert_eq!((b[0], b[n - 1]), (-1.0, 7.0));

            // Curvature imposed at each end, read just inside the domain
            let pp = build(
                &x,
                &y,
                limiter,
                Boundary::SecondDerivative(0.5),
                Boundary::SecondDerivative(-3.0),
            );
            assert_abs_diff_eq!(pp.evaluate_second_derivative(1e-12), 0.5, epsilon = 1e-9);
            assert_abs_diff_eq!(
                pp.evaluate_second_derivative(4.0 - 1e-12),
                -3.0,
                epsilon = 1e-9
            );
        }
    }

    /// Given the exact neighboring slope, the not-a-knot ends are exact for a cubic
    #[test]
    fn test_not_a_knot_ends() {
        let p = |z: f64| 1.0 - 2.0 * z + 0.5 * z * z + 0.25 * z * z * z;
        let dp = |z: f64| -2.0 + z + 0.75 * z * z;

        let x = [0.0, 0.6, 1.5, 2.0, 3.2];
        let y: Vec<f64> = x.iter().map(|&z| p(z)).collect();
        let (dx, s) = secants(&x, &y);
        let n = x.len();

        let b0 = left_end(&dx, &s, dp(x[1]), Boundary::NotAKnot);
        let bn = right_end(&dx, &s, dp(x[n - 2]), Boundary::NotAKnot);
        assert_abs_diff_eq!(b0, dp(x[0]), epsilon = 1e-12);
        assert_abs_diff_eq!(bn, dp(x[n - 1]), epsilon = 1e-12);
    }

    #[test]
    fn test_flat_data() {
        let x = [0.0, 1.0, 2.5, 3.0];
        let y = [2.0; 4];
        for limiter in LIMITERS {
            let pp = build(
                &x,
                &y,
                limiter,
                Boundary::NotAKnot,
                Boundary::SecondDerivative(0.0),
            );
            let (_, b, c, d) = pp.coefs();
            b.iter().chain(c).chain(d).for_each(|&v| assert_eq!(v, 0.0));
            assert_eq!(pp.evaluate(1.7), 2.0);
        }
    }
}
