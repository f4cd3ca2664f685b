//! Shared inputs for the slidft benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic white noise in `[-1, 1)`.
pub fn noise(seed: u64, len: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

/// Direct evaluation of every line over the last `fractions.len()` samples.
///
/// Baseline the sliding update is measured against: O(N²) per window
/// position instead of O(N) per sample.
pub fn direct_lines(window: &[f64], fractions: &[f64]) -> Vec<(f64, f64)> {
    fractions
        .iter()
        .map(|f| {
            let step = 2.0 * std::f64::consts::PI * f;
            window
                .iter()
                .enumerate()
                .fold((0.0, 0.0), |(re, im), (j, &x)| {
                    let (s, c) = (step * j as f64).sin_cos();
                    (re + x * c, im - x * s)
                })
        })
        .collect()
}
