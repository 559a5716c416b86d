//! Shared fixtures for integration tests
#![allow(dead_code)]

use perfdelta_bca::BcaBootstrap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, LogNormal};

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

/// Control run of the monotonicity scenario
pub const SLOW_RUN: [f64; 8] = [10.0, 12.0, 11.0, 13.0, 9.0, 11.5, 10.5, 12.5];

/// Variant run of the monotonicity scenario, clearly faster than [`SLOW_RUN`]
pub const FAST_RUN: [f64; 8] = [8.0, 9.0, 7.5, 8.5, 7.0, 8.0, 9.5, 8.2];

/// Engine at 95% confidence with a reduced resample count
pub fn quick_engine(resamples: usize) -> BcaBootstrap {
    BcaBootstrap::new()
        .with_confidence_level(0.95)
        .with_resamples(resamples)
}

/// Right-skewed benchmark timings around `median`
pub fn timings(median: f64, sigma: f64, n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dist = LogNormal::new(median.ln(), sigma).unwrap();
    (0..n).map(|_| dist.sample(&mut rng)).collect()
}

/// Every bootstrap delta lies between these bounds, so the interval must too
pub fn delta_envelope(control: &[f64], variant: &[f64]) -> (f64, f64) {
    let min = |s: &[f64]| s.iter().copied().fold(f64::INFINITY, f64::min);
    let max = |s: &[f64]| s.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (min(variant) - max(control), max(variant) - min(control))
}
