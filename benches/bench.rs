#![allow(clippy::all)] // Clippy will attempt to remove black_box() internals

use criterion::*;
use cubicpp::{make_cubic_pp, Boundary, DerivativeKind, Interp1D};
use gridgen::*;

enum Kind {
    Interp,
    Extrap,
}

fn bench_build(c: &mut Criterion) {
    for nknots in [10, 1_000, 100_000] {
        let mut group = c.benchmark_group(format!("Build_{nknots}-knots"));
        group.throughput(Throughput::Elements(nknots as u64));
        let (x, y) = gen_knots(nknots, 0.5);

        for kind in DerivativeKind::ALL {
            group.bench_with_input(BenchmarkId::new(kind.name(), nknots), &nknots, |b, _| {
                b.iter(|| {
                    black_box(make_cubic_pp(
                        black_box(&x[..]),
                        black_box(&y[..]),
                        Boundary::NotAKnot,
                        Boundary::NotAKnot,
                        kind,
                    ))
                })
            });
        }
        group.finish();
    }
}

fn bench_eval_specific(c: &mut Criterion, kind: Kind) {
    let label = match kind {
        Kind::Interp => "Interp",
        Kind::Extrap => "Extrap",
    };

    for nknots in [10, 1_000] {
        let mut group = c.benchmark_group(format!("{label}_Shuffled_{nknots}-knots"));
        let (x, y) = gen_knots(nknots, 0.5);

        // Slopes do not affect evaluation cost, so one kind per family is enough
        for dkind in [DerivativeKind::C2, DerivativeKind::FritschButland] {
            let pp = make_cubic_pp(&x, &y, Boundary::NotAKnot, Boundary::NotAKnot, dkind);

            for size in [1, 100, 1_000_000].iter() {
                group.throughput(Throughput::Elements(*size as u64));
                let obs = match kind {
                    Kind::Interp => gen_interp_obs(&x, *size, true),
                    Kind::Extrap => gen_extrap_obs(&x, *size, true),
                };
                let mut out = vec![0.0; *size];

                group.bench_with_input(BenchmarkId::new(dkind.name(), size), size, |b, _| {
                    b.iter(|| {
                        black_box(pp.eval(black_box(&obs[..]), black_box(&mut out[..])))
                    })
                });
            }
        }
        group.finish();
    }
}

fn bench_interp(c: &mut Criterion) {
    bench_eval_specific(c, Kind::Interp);
}

fn bench_extrap(c: &mut Criterion) {
    bench_eval_specific(c, Kind::Extrap);
}

criterion_group!(benches_build, bench_build);
criterion_group!(benches_interp, bench_interp);
criterion_group!(benches_extrap, bench_extrap);
criterion_main!(benches_build, benches_interp, benches_extrap,);

mod randn {
    use rand::distr::{Distribution, StandardUniform};
    use rand::rngs::StdRng;
    use rand::Rng;
    use rand::SeedableRng;

    /// Fixed random seed to support repeatable testing
    const SEED: [u8; 32] = [
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7,
        6, 5, 4, 3, 2, 1,
    ];

    /// Get a random number generator with a const seed for repeatable testing
    pub fn rng_fixed_seed() -> StdRng {
        StdRng::from_seed(SEED)
    }

    /// Generate `n` random numbers using provided generator
    pub fn randn<T>(rng: &mut StdRng, n: usize) -> Vec<T>
    where
        StandardUniform: Distribution<T>,
    {
        (0..n).map(|_| rng.random::<T>()).collect()
    }
}

mod gridgen {
    use super::randn::*;
    use cubicpp::utils::*;
    use rand::seq::SliceRandom;

    /// Knots on [0, 100], jittered by up to `noise` of a cell width,
    /// and some fake data values.
    pub fn gen_knots(n: usize, noise: f64) -> (Vec<f64>, Vec<f64>) {
        let mut rng = rng_fixed_seed();
        let mut x = linspace(0.0, 100.0, n);
        let h = 100.0 / (n - 1) as f64;
        let dx = randn::<f64>(&mut rng, n);
        (1..n - 1).for_each(|i| x[i] = x[i] + (dx[i] - 0.5) * noise * h);
        let y = randn::<f64>(&mut rng, n);
        (x, y)
    }

    /// Observation points spread over the knots, optionally shuffled
    pub fn gen_interp_obs(x: &[f64], m: usize, shuffle: bool) -> Vec<f64> {
        let (lo, hi) = (x[0], x[x.len() - 1]);
        let mut obs = linspace(lo, hi, m);
        if shuffle {
            obs.shuffle(&mut rng_fixed_seed());
        }
        obs
    }

    /// Observation points spanning twice the knot interval, so half land
    /// outside it
    pub fn gen_extrap_obs(x: &[f64], m: usize, shuffle: bool) -> Vec<f64> {
        let (lo, hi) = (x[0], x[x.len() - 1]);
        let pad = (hi - lo) / 2.0;
        let mut obs = linspace(lo - pad, hi + pad, m);
        if shuffle {
            obs.shuffle(&mut rng_fixed_seed());
        }
        obs
    }
}
