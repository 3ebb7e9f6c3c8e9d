use rand::Rng;
use rand::SeedableRng;
use rand::distr::StandardUniform;
use rand::rngs::StdRng;

/// Fixed random seed to support repeatable testing
const SEED: [u8; 32] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6,
    5, 4, 3, 2, 1,
];

/// Get a random number generator with a const seed for repeatable testing
pub fn rng_fixed_seed() -> StdRng {
    StdRng::from_seed(SEED)
}

/// Generate `n` random numbers using provided generator
pub fn randn<T>(rng: &mut StdRng, n: usize) -> Vec<T>
where
    StandardUniform: rand::distr::Distribution<T>,
{
    std::iter::repeat_with(|| rng.random::<T>())
        .take(n)
        .collect()
}

/// `n` strictly increasing knots starting at zero, with gaps of at least
/// `min_gap` and at most `min_gap + 1`
pub fn random_knots(rng: &mut StdRng, n: usize, min_gap: f64) -> Vec<f64> {
    let mut x = 0.0;
    (0..n)
        .map(|i| {
            if i > 0 {
                x += min_gap + rng.random::<f64>();
            }
            x
        })
        .collect()
}

/// `n` non-decreasing values, with about one step in five flat
pub fn random_increasing(rng: &mut StdRng, n: usize) -> Vec<f64> {
    let mut y = 0.0;
    (0..n)
        .map(|i| {
            if i > 0 && rng.random::<f64>() < 0.8 {
                y += rng.random::<f64>();
            }
            y
        })
        .collect()
}
