//! Convenience methods for building observation grids around a set of knots
//! in a way that echoes, but does not exactly match, methods common in
//! scripting languages.
use itertools::Itertools;
use num_traits::Float;

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    if n <= 1 {
        return vec![start; n];
    }
    let cast = |i: usize| T::from(i).unwrap_or_else(T::nan);
    let dx: T = (stop - start) / cast(n - 1);
    (0..n).map(|i| start + cast(i) * dx).collect()
}

/// Splits every interval between consecutive knots into `k` equal parts,
/// returning the knots themselves together with the `k - 1` points between
/// each pair, in order.
///
/// ```rust
/// use cubicpp::utils::refine;
///
/// assert_eq!(refine(&[0.0_f64, 1.0, 3.0], 2), [0.0, 0.5, 1.0, 2.0, 3.0]);
/// ```
pub fn refine<T>(x: &[T], k: usize) -> Vec<T>
where
    T: Float,
{
    let k = k.max(1);
    let mut out: Vec<T> = x
        .iter()
        .tuple_windows()
        .flat_map(|(&lo, &hi)| {
            let mut part = linspace(lo, hi, k + 1);
            part.pop();
            part
        })
        .collect();
    out.extend(x.last());
    out
}
