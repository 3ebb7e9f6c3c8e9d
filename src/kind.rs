//! Selectors for boundary treatment and slope construction.
use num_traits::Float;

use crate::build::Scheme;
use crate::c2::filter::ShapeFilter;
use crate::local::limiter::Limiter;

/// End condition, applied independently at the left and right end of the knots.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Boundary<T> {
    /// Third derivative continuous across the first (resp. last) two intervals
    #[default]
    NotAKnot,
    /// Exact first derivative at the end
    FirstDerivative(T),
    /// Exact second derivative at the end
    SecondDerivative(T),
    /// End slope pinned to the first (resp. last) secant slope
    FirstDifference,
}

impl<T: Float> Boundary<T> {
    /// Whether this condition requires third-derivative continuity at the end
    #[inline]
    pub fn is_not_a_knot(&self) -> bool {
        matches!(self, Boundary::NotAKnot)
    }
}

/// Slope construction algorithm.
///
/// The `C2*` kinds solve a tridiagonal system for C2 continuity, followed by
/// an optional shape filter. The remaining kinds estimate each interior slope
/// locally from its two flanking secants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DerivativeKind {
    #[default]
    C2,
    C2MP,
    C2MP2,
    C2Hyman89,
    C2HymanNonNegative,
    Bessel,
    HuynRational,
    VanLeer,
    VanAlbada,
    FritschButland,
    Brodlie,
}

impl DerivativeKind {
    /// Every supported kind, global family first
    pub const ALL: [DerivativeKind; 11] = [
        DerivativeKind::C2,
        DerivativeKind::C2MP,
        DerivativeKind::C2MP2,
        DerivativeKind::C2Hyman89,
        DerivativeKind::C2HymanNonNegative,
        DerivativeKind::Bessel,
        DerivativeKind::HuynRational,
        DerivativeKind::VanLeer,
        DerivativeKind::VanAlbada,
        DerivativeKind::FritschButland,
        DerivativeKind::Brodlie,
    ];

    /// The slope construction strategy for this kind.
    #[inline]
    pub fn scheme(self) -> Scheme {
        use DerivativeKind::*;
        match self {
            C2 => Scheme::GlobalC2 { filter: None },
            C2MP => Scheme::GlobalC2 {
                filter: Some(ShapeFilter::MonotonePreserving),
            },
            C2MP2 => Scheme::GlobalC2 {
                filter: Some(ShapeFilter::MonotonePreserving2),
            },
            C2Hyman89 => Scheme::GlobalC2 {
                filter: Some(ShapeFilter::Hyman89),
            },
            C2HymanNonNegative => Scheme::GlobalC2 {
                filter: Some(ShapeFilter::HymanNonNegative),
            },
            Bessel => Scheme::LocalLimiter {
                limiter: Limiter::Bessel,
            },
            HuynRational => Scheme::LocalLimiter {
                limiter: Limiter::HuynRational,
            },
            VanLeer => Scheme::LocalLimiter {
                limiter: Limiter::VanLeer,
            },
            VanAlbada => Scheme::LocalLimiter {
                limiter: Limiter::VanAlbada,
            },
            FritschButland => Scheme::LocalLimiter {
                limiter: Limiter::FritschButland,
            },
            Brodlie => Scheme::LocalLimiter {
                limiter: Limiter::Brodlie,
            },
        }
    }

    /// Whether this kind solves the global tridiagonal system
    #[inline]
    pub fn is_global(self) -> bool {
        matches!(self.scheme(), Scheme::GlobalC2 { .. })
    }

    /// Human-readable label, used in log messages and bench ids
    pub fn name(self) -> &'static str {
        use DerivativeKind::*;
        match self {
            C2 => "C2",
            C2MP => "C2 monotone-preserving",
            C2MP2 => "C2 monotone-preserving (minmod)",
            C2Hyman89 => "C2 Hyman89",
            C2HymanNonNegative => "C2 Hyman non-negative",
            Bessel => "Bessel",
            HuynRational => "Huynh rational",
            VanLeer => "Van Leer",
            VanAlbada => "Van Albada",
            FritschButland => "Fritsch-Butland",
            Brodlie => "Brodlie",
        }
    }
}
