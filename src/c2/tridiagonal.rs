//! Tridiagonal linear systems, solved by the Thomas algorithm in O(n).
use alloc::vec;
use alloc::vec::Vec;
use num_traits::Float;

/// An n x n tridiagonal matrix.
///
/// Row `i` reads `lower[i-1] * u[i-1] + diag[i] * u[i] + upper[i] * u[i+1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tridiagonal<T> {
    /// Subdiagonal, size n-1
    pub lower: Vec<T>,
    /// Main diagonal, size n
    pub diag: Vec<T>,
    /// Superdiagonal, size n-1
    pub upper: Vec<T>,
}

impl<T: Float> Tridiagonal<T> {
    /// All-zero system of size n
    pub fn zeros(n: usize) -> Self {
        let m = n.saturating_sub(1);
        Self {
            lower: vec![T::zero(); m],
            diag: vec![T::zero(); n],
            upper: vec![T::zero(); m],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.diag.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.diag.is_empty()
    }

    /// Solve `self * u = rhs`, overwriting `rhs` with `u`.
    ///
    /// No pivoting is done. The systems built for spline slopes are either
    /// diagonally dominant or have a boundary row whose elimination leaves a
    /// nonzero pivot for strictly increasing knots; a zero pivot propagates
    /// as non-finite output.
    pub fn solve(&self, rhs: &mut [T]) {
        let n = self.len();
        debug_assert_eq!(rhs.len(), n);
        if n == 0 {
            return;
        }

        // Forward sweep; `c[i]` is the eliminated superdiagonal of row i
        let mut c = vec![T::zero(); n];
        let mut pivot = self.diag[0];
        rhs[0] = rhs[0] / pivot;
        for i in 1..n {
            c[i - 1] = self.upper[i - 1] / pivot;
            pivot = self.diag[i] - self.lower[i - 1] * c[i - 1];
            rhs[i] = (rhs[i] - self.lower[i - 1] * rhs[i - 1]) / pivot;
        }

        // Back substitution
        for i in (0..n - 1).rev() {
            rhs[i] = rhs[i] - c[i] * rhs[i + 1];
        }
    }

    /// Matrix-vector product, for checking residuals
    pub fn mul(&self, u: &[T]) -> Vec<T> {
        let n = self.len();
        (0..n)
            .map(|i| {
                let mut v = self.diag[i] * u[i];
                if i > 0 {
                    v = v + self.lower[i - 1] * u[i - 1];
                }
                if i + 1 < n {
                    v = v + self.upper[i] * u[i + 1];
                }
                v
            })
            .collect()
    }
}
