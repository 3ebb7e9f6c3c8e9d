//! Shape filters applied to solved knot derivatives.
//!
//! Each filter overwrites the slope array `b` in place, using only the secant
//! slopes `s`, the interval widths `dx`, and (for the non-negative variant)
//! the sample values `y`. All are O(n) and assume n >= 3.
//!
//! References
//! * Fritsch, F. N. and Carlson, R. E. (1980), Monotone piecewise cubic interpolation
//! * Hyman, J. M. (1983), Accurate monotonicity preserving cubic interpolation
//! * Dougherty, R. L., Edelman, A. and Hyman, J. M. (1989), Nonnegativity-,
//!   monotonicity-, or convexity-preserving cubic and quintic Hermite interpolation
use num_traits::Float;

/// Post-solve slope filter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeFilter {
    /// Clamp each slope into `[0, 3 min(S)]` (or its mirror for decreasing data),
    /// zero at local extrema
    MonotonePreserving,
    /// Minmod lower bound with a relaxed `min(max|S|, 3 min|S|)` upper bound
    MonotonePreserving2,
    /// Hyman's bound `3 min(|S|, |pm|)`, relaxed at inflections using the
    /// one-sided parabolic estimates
    Hyman89,
    /// Value-based bounds that keep a non-negative (or non-positive) sample
    /// sequence from crossing zero
    HymanNonNegative,
}

/// Sign of `v`, with `sign(0) = 0`
#[inline]
pub(crate) fn sign<T: Float>(v: T) -> T {
    if v > T::zero() {
        T::one()
    } else if v < T::zero() {
        -T::one()
    } else {
        T::zero()
    }
}

/// `0` if `s` and `t` differ in sign or either is zero, otherwise the one
/// of smaller magnitude
#[inline]
pub(crate) fn minmod<T: Float>(s: T, t: T) -> T {
    if s * t <= T::zero() {
        T::zero()
    } else {
        sign(s) * s.abs().min(t.abs())
    }
}

/// Clamp `v` between `lo` and `hi`, in whichever order they fall
#[inline]
fn clamp_between<T: Float>(v: T, lo: T, hi: T) -> T {
    v.max(lo.min(hi)).min(lo.max(hi))
}

impl ShapeFilter {
    /// Adjust the knot derivatives `b` in place.
    pub fn apply<T: Float>(self, b: &mut [T], y: &[T], dx: &[T], s: &[T]) {
        let n = b.len();
        debug_assert!(n >= 3 && y.len() == n);
        debug_assert!(dx.len() == n - 1 && s.len() == n - 1);

        // End slopes are counted here; interior ones by each filter
        let (first, last) = (b[0], b[n - 1]);
        let changed = match self {
            ShapeFilter::MonotonePreserving => monotone_preserving(b, s),
            ShapeFilter::MonotonePreserving2 => monotone_preserving2(b, s),
            ShapeFilter::Hyman89 => hyman89(b, dx, s),
            ShapeFilter::HymanNonNegative => hyman_non_negative(b, y, dx),
        } + usize::from(first != b[0])
            + usize::from(last != b[n - 1]);

        log::trace!("{self:?} adjusted {changed} of {n} slopes");
    }
}

/// Set `*v` to `new`, reporting whether it changed
#[inline]
fn update<T: Float>(v: &mut T, new: T) -> usize {
    let changed = usize::from(*v != new);
    *v = new;
    changed
}

/// Returns the number of interior slopes changed.
fn monotone_preserving<T: Float>(b: &mut [T], s: &[T]) -> usize {
    let n = b.len();
    let zero = T::zero();
    let three = T::one() + T::one() + T::one();

    let clamp_end = |v: T, s: T| -> T {
        if s > zero {
            v.max(zero).min(three * s)
        } else {
            v.min(zero).max(three * s)
        }
    };
    b[0] = clamp_end(b[0], s[0]);
    b[n - 1] = clamp_end(b[n - 1], s[n - 2]);

    let mut changed = 0;
    for i in 1..n - 1 {
        let (sl, sr) = (s[i - 1], s[i]);
        let v = if sl * sr <= zero {
            // Local extremum
            zero
        } else if sl > zero {
            b[i].max(zero).min(three * sl.min(sr))
        } else {
            b[i].min(zero).max(three * sl.max(sr))
        };
        changed += update(&mut b[i], v);
    }
    changed
}

/// Returns the number of interior slopes changed.
fn monotone_preserving2<T: Float>(b: &mut [T], s: &[T]) -> usize {
    let n = b.len();
    let two = T::one() + T::one();
    let three = two + T::one();

    b[0] = minmod(b[0], three * s[0]);
    b[n - 1] = minmod(b[n - 1], three * s[n - 2]);

    let mut changed = 0;
    for i in 1..n - 1 {
        let (sl, sr) = (s[i - 1], s[i]);
        let (al, ar) = (sl.abs(), sr.abs());
        let lower = minmod(sl, sr);
        let upper = (sign(sl) + sign(sr)) / two * al.max(ar).min(three * al.min(ar));
        let v = clamp_between(b[i], lower, upper);
        changed += update(&mut b[i], v);
    }
    changed
}

/// Returns the number of interior slopes changed.
fn hyman89<T: Float>(b: &mut [T], dx: &[T], s: &[T]) -> usize {
    let n = b.len();
    let zero = T::zero();
    let two = T::one() + T::one();
    let three = two + T::one();
    let three_halves = three / two;

    let clamp_end = |v: T, s: T| -> T {
        if v * s > zero {
            sign(v) * v.abs().min(three * s.abs())
        } else {
            zero
        }
    };
    b[0] = clamp_end(b[0], s[0]);
    b[n - 1] = clamp_end(b[n - 1], s[n - 2]);

    let mut changed = 0;
    for i in 1..n - 1 {
        // Centered parabolic estimate of the slope at knot i
        let pm = (s[i - 1] * dx[i] + s[i] * dx[i - 1]) / (dx[i - 1] + dx[i]);
        let mut m = three * s[i - 1].abs().min(s[i].abs()).min(pm.abs());

        if i > 1 && (s[i - 1] - s[i - 2]) * (s[i] - s[i - 1]) > zero {
            // Parabola through knots i-2, i-1, i
            let pd = (s[i - 1] * (two * dx[i - 1] + dx[i - 2]) - s[i - 2] * dx[i - 1])
                / (dx[i - 2] + dx[i - 1]);
            if pm * pd > zero && pm * (s[i - 1] - s[i - 2]) > zero {
                m = m.max(three_halves * pm.abs().min(pd.abs()));
            }
        }
        if i < n - 2 && (s[i] - s[i - 1]) * (s[i + 1] - s[i]) > zero {
            // Parabola through knots i, i+1, i+2
            let pu = (s[i] * (two * dx[i] + dx[i + 1]) - s[i + 1] * dx[i]) / (dx[i] + dx[i + 1]);
            if pm * pu > zero && -pm * (s[i] - s[i - 1]) > zero {
                m = m.max(three_halves * pm.abs().min(pu.abs()));
            }
        }

        let v = if b[i] * pm > zero {
            sign(b[i]) * b[i].abs().min(m)
        } else {
            zero
        };
        changed += update(&mut b[i], v);
    }
    changed
}

/// Returns the number of interior slopes changed.
///
/// With `tau = sign(y[i])`, `tau * b[i]` is kept within
/// `[-3 tau y[i] / dx[i], 3 tau y[i] / dx[i-1]]`. The end knots only see the
/// bound from their single adjacent interval. These end bounds deliberately
/// differ from the closed form printed in the 1989 paper, which does not
/// satisfy the paper's own constraint.
fn hyman_non_negative<T: Float>(b: &mut [T], y: &[T], dx: &[T]) -> usize {
    let n = b.len();
    let three = T::one() + T::one() + T::one();

    let tau = sign(y[0]);
    b[0] = tau * (-three * tau * y[0] / dx[0]).max(tau * b[0]);

    let mut changed = 0;
    for i in 1..n - 1 {
        let tau = sign(y[i]);
        let lo = -three * tau * y[i] / dx[i];
        let hi = three * tau * y[i] / dx[i - 1];
        let v = tau * hi.min(lo.max(tau * b[i]));
        changed += update(&mut b[i], v);
    }

    let tau = sign(y[n - 1]);
    b[n - 1] = tau * (three * tau * y[n - 1] / dx[n - 2]).min(tau * b[n - 1]);

    changed
}
