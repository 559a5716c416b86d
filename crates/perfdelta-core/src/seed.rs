//! Deterministic seeding from sample contents
//!
//! A comparison seeds its generator from the values it compares, so running it
//! twice on the same data yields bit-identical results without any global
//! random state.

use fnv::FnvHasher;
use std::hash::Hasher;

/// FNV-1a hash of two samples, usable as a PRNG seed
///
/// Each sample is prefixed with its length, so moving a value from one sample
/// to the other changes the seed. `-0.0` and `0.0` hash alike.
///
/// # Examples
///
/// ```rust
/// use perfdelta_core::seed::seed_from_samples;
///
/// let a = seed_from_samples(&[1.0, 2.0], &[3.0]);
/// let b = seed_from_samples(&[1.0, 2.0], &[3.0]);
/// assert_eq!(a, b);
/// assert_ne!(a, seed_from_samples(&[1.0], &[2.0, 3.0]));
/// ```
pub fn seed_from_samples(control: &[f64], variant: &[f64]) -> u64 {
    let mut hasher = FnvHasher::default();
    for sample in [control, variant] {
        hasher.write(&(sample.len() as u64).to_le_bytes());
        for &value in sample {
            let value = if value == 0.0 { 0.0 } else { value };
            hasher.write(&value.to_bits().to_le_bytes());
        }
    }
    hasher.finish()
}
