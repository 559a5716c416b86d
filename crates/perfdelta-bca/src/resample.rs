//! Bootstrap resampling with a content-seeded generator

use perfdelta_core::seed_from_samples;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generator type used for bootstrap replicates
pub type BootstrapRng = ChaCha8Rng;

/// Build the generator for comparing `control` against `variant`
///
/// The seed is a hash of both samples, so identical inputs replay the same
/// sequence of replicates.
pub fn seeded_rng(control: &[f64], variant: &[f64]) -> BootstrapRng {
    BootstrapRng::seed_from_u64(seed_from_samples(control, variant))
}

/// Draws bootstrap replicates into a reusable buffer
///
/// The source slice is never modified; each draw overwrites the previous
/// replicate.
#[derive(Debug, Clone)]
pub struct Resampler<R> {
    rng: R,
    buffer: Vec<f64>,
}

impl<R: Rng> Resampler<R> {
    /// Create a resampler around an explicit generator
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            buffer: Vec::new(),
        }
    }

    /// Draw `source.len()` values uniformly with replacement
    ///
    /// The returned slice may be reordered freely by the caller.
    pub fn draw(&mut self, source: &[f64]) -> &mut [f64] {
        let n = source.len();
        self.buffer.clear();
        if n > 0 {
            let rng = &mut self.rng;
            self.buffer.extend((0..n).map(|_| source[rng.gen_range(0..n)]));
        }
        &mut self.buffer
    }
}

/// Draw a single replicate into a fresh vector
pub fn resample<R: Rng + ?Sized>(source: &[f64], rng: &mut R) -> Vec<f64> {
    let n = source.len();
    if n == 0 {
        return Vec::new();
    }
    (0..n).map(|_| source[rng.gen_range(0..n)]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replicate_has_source_length_and_members() {
        let source = [1.0, 2.0, 3.0, 4.0, 5.0];
        let mut rng = BootstrapRng::seed_from_u64(7);
        let replicate = resample(&source, &mut rng);

        assert_eq!(replicate.len(), source.len());
        assert!(replicate.iter().all(|x| source.contains(x)));
    }

    #[test]
    fn test_source_is_untouched() {
        let source = vec![3.0, 1.0, 2.0];
        let mut resampler = Resampler::new(BootstrapRng::seed_from_u64(1));
        resampler.draw(&source).sort_by(|a, b| b.total_cmp(a));
        assert_eq!(source, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_empty_source() {
        let mut rng = BootstrapRng::seed_from_u64(0);
        assert!(resample(&[], &mut rng).is_empty());

        let mut resampler = Resampler::new(rng);
        assert!(resampler.draw(&[]).is_empty());
    }

    #[test]
    fn test_seeded_rng_replays() {
        let control = [10.0, 11.0, 12.0];
        let variant = [9.0, 9.5];

        let mut a = Resampler::new(seeded_rng(&control, &variant));
        let mut b = Resampler::new(seeded_rng(&control, &variant));
        for _ in 0..20 {
            assert_eq!(a.draw(&control).to_vec(), b.draw(&control).to_vec());
            assert_eq!(a.draw(&variant).to_vec(), b.draw(&variant).to_vec());
        }
    }

    #[test]
    fn test_draws_are_uniform() {
        let source = [0.0, 1.0, 2.0, 3.0];
        let mut rng = BootstrapRng::seed_from_u64(99);
        let mut counts = [0usize; 4];
        for _ in 0..2_000 {
            for x in resample(&source, &mut rng) {
                counts[x as usize] += 1;
            }
        }
        // 8000 draws, 2000 expected per value
        for count in counts {
            assert!((1_700..2_300).contains(&count), "count {count}");
        }
    }
}
