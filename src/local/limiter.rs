//! Closed-form slope estimates from the two secants flanking a knot.
use num_traits::Float;

/// Rule combining the left secant `s` and right secant `t` at an interior knot.
///
/// `HuynRational`, `VanLeer`, `FritschButland` and `Brodlie` return exactly zero at a
/// local extremum of the data (`s * t <= 0`), which keeps the interpolant
/// from overshooting there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Limiter {
    /// Width-weighted average of the secants; the slope of the parabola
    /// through the three surrounding points
    Bessel,
    HuynRational,
    VanLeer,
    /// Smooth limiter without a sign gate
    VanAlbada,
    FritschButland,
    /// Width-weighted harmonic mean
    Brodlie,
}

impl Limiter {
    /// Slope at a knot with secant `s` and width `dx_left` on its left,
    /// secant `t` and width `dx_right` on its right.
    #[inline]
    pub fn slope<T: Float>(self, s: T, t: T, dx_left: T, dx_right: T) -> T {
        let zero = T::zero();
        let one = T::one();
        let two = one + one;
        let three = two + one;
        let four = two + two;

        let st = s * t;
        match self {
            Limiter::Bessel => (dx_left * t + dx_right * s) / (dx_left + dx_right),
            Limiter::HuynRational => {
                if st <= zero {
                    zero
                } else {
                    three * st * (s + t) / (s * s + four * st + t * t)
                }
            }
            Limiter::VanLeer => {
                if st <= zero {
                    zero
                } else {
                    two * st / (s + t)
                }
            }
            Limiter::VanAlbada => {
                if s == zero && t == zero {
                    zero
                } else {
                    st * (s + t) / (s * s + t * t)
                }
            }
            Limiter::FritschButland => {
                if st <= zero {
                    zero
                } else if s.abs() <= t.abs() {
                    three * st / (two * s + t)
                } else {
                    three * st / (s + two * t)
                }
            }
            Limiter::Brodlie => {
                if st <= zero {
                    zero
                } else {
                    let w = (dx_left + two * dx_right) / (three * (dx_left + dx_right));
                    st / (w * t + (one - w) * s)
                }
            }
        }
    }
}
