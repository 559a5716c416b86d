//! BCa bootstrap comparison engine
//!
//! This module ties the pieces of a comparison together:
//! - seeds a generator from the sample contents
//! - draws paired bootstrap replicates and records their deltas
//! - estimates bias correction and jackknife acceleration
//! - maps adjusted percentiles onto the sorted deltas
//! - applies the significance policy
//!
//! The engine is a pure function of its configuration and inputs. It holds no
//! mutable state, so one instance can serve many threads.

use crate::{
    acceleration::acceleration,
    api::{DEFAULT_CONFIDENCE, DEFAULT_RESAMPLES},
    bias::bias_correction,
    percentile::BcaAdjustment,
    resample::{seeded_rng, Resampler},
    ConfidenceLevel, Report, SignificancePolicy,
};
use perfdelta_core::{utils, CentralTendencyEstimator, Error, Median, Result};
use tracing::{debug, instrument, trace};

/// BCa bootstrap comparison of a variant sample against a control sample
///
/// The estimator `E` summarizes every sample, replicate and jackknife omission
/// of a comparison; it defaults to the median.
///
/// # Example
///
/// ```rust
/// use perfdelta_bca::BcaBootstrap;
///
/// let control = [10.0, 12.0, 11.0, 13.0, 9.0, 11.5, 10.5, 12.5];
/// let variant = [8.0, 9.0, 7.5, 8.5, 7.0, 8.0, 9.5, 8.2];
///
/// let report = BcaBootstrap::new()
///     .with_confidence_level(0.95)
///     .with_resamples(2_000)
///     .compare(&control, &variant);
///
/// assert!(report.delta < 0.0);
/// assert!(report.is_improvement());
/// ```
#[derive(Debug, Clone)]
pub struct BcaBootstrap<E = Median> {
    estimator: E,
    confidence_level: ConfidenceLevel,
    n_resamples: usize,
    policy: SignificancePolicy,
}

impl BcaBootstrap<Median> {
    /// Create an engine with default settings
    pub fn new() -> Self {
        Self {
            estimator: Median,
            confidence_level: ConfidenceLevel::new(DEFAULT_CONFIDENCE),
            n_resamples: DEFAULT_RESAMPLES,
            policy: SignificancePolicy::default(),
        }
    }

    /// Create an engine with validated confidence level and resample count
    pub fn try_new(confidence_level: f64, n_resamples: usize) -> Result<Self> {
        if n_resamples == 0 {
            return Err(Error::invalid_resamples(n_resamples));
        }
        Ok(Self {
            confidence_level: ConfidenceLevel::try_new(confidence_level)?,
            n_resamples,
            ..Self::new()
        })
    }
}

impl Default for BcaBootstrap<Median> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CentralTendencyEstimator> BcaBootstrap<E> {
    /// Set the number of bootstrap resamples
    pub fn with_resamples(mut self, n_resamples: usize) -> Self {
        assert!(n_resamples > 0, "Number of resamples must be positive");
        self.n_resamples = n_resamples;
        self
    }

    /// Set the confidence level
    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = ConfidenceLevel::new(confidence_level);
        self
    }

    /// Set the significance policy
    pub fn with_policy(mut self, policy: SignificancePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the central tendency estimator
    pub fn with_estimator<F: CentralTendencyEstimator>(self, estimator: F) -> BcaBootstrap<F> {
        BcaBootstrap {
            estimator,
            confidence_level: self.confidence_level,
            n_resamples: self.n_resamples,
            policy: self.policy,
        }
    }

    /// The central tendency estimator
    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    /// The confidence level
    pub fn confidence_level(&self) -> ConfidenceLevel {
        self.confidence_level
    }

    /// The number of bootstrap resamples
    pub fn n_resamples(&self) -> usize {
        self.n_resamples
    }

    /// The significance policy
    pub fn policy(&self) -> &SignificancePolicy {
        &self.policy
    }

    /// Compare `variant` against `control`
    ///
    /// Returns `Report::default()` if either sample is empty. Any other input
    /// produces a full report; degenerate samples (single values, constant
    /// values, zero centers) are handled without failing.
    #[instrument(
        skip(self, control, variant),
        fields(
            estimator = self.estimator.name(),
            n_control = control.len(),
            n_variant = variant.len(),
            n_resamples = self.n_resamples,
        )
    )]
    pub fn compare(&self, control: &[f64], variant: &[f64]) -> Report {
        if control.is_empty() || variant.is_empty() {
            trace!("empty sample; no comparison possible");
            return Report::default();
        }

        let control_center = self.estimator.estimate(control);
        let variant_center = self.estimator.estimate(variant);
        let delta = variant_center - control_center;

        let mut deltas = self.bootstrap_deltas(control, variant);

        let z0 = bias_correction(delta, &deltas);
        let a = acceleration(
            &self.estimator,
            control,
            variant,
            control_center,
            variant_center,
        );
        debug!(delta, z0, a, "BCa parameters");

        utils::sort(&mut deltas);
        let interval = BcaAdjustment::new(z0, a).interval(&deltas, self.confidence_level);

        let significant =
            self.policy.is_significant(&interval, delta, control_center, variant_center);
        debug!(
            lower = interval.lower,
            upper = interval.upper,
            significant,
            "comparison complete"
        );

        Report {
            delta,
            interval,
            control_center,
            variant_center,
            confidence: self.confidence_level.value(),
            significant,
            resamples: self.n_resamples,
        }
    }

    /// Compare after checking that every value is finite
    ///
    /// Empty samples still yield the sentinel report rather than an error.
    pub fn try_compare(&self, control: &[f64], variant: &[f64]) -> Result<Report> {
        if !utils::all_finite(control) {
            return Err(Error::non_finite("control sample"));
        }
        if !utils::all_finite(variant) {
            return Err(Error::non_finite("variant sample"));
        }
        Ok(self.compare(control, variant))
    }

    /// Compare many independent `(control, variant)` pairs
    ///
    /// Reports come back in input order. With the `parallel` feature the
    /// comparisons run on the rayon pool; each one is still computed exactly
    /// as [`compare`](Self::compare) would.
    pub fn compare_batch(&self, pairs: &[(&[f64], &[f64])]) -> Vec<Report> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            pairs
                .par_iter()
                .map(|(control, variant)| self.compare(control, variant))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            pairs
                .iter()
                .map(|(control, variant)| self.compare(control, variant))
                .collect()
        }
    }

    /// Deltas of `n_resamples` paired bootstrap replicates
    ///
    /// Each iteration draws the control replicate, then the variant replicate,
    /// from the content-seeded generator.
    fn bootstrap_deltas(&self, control: &[f64], variant: &[f64]) -> Vec<f64> {
        let mut resampler = Resampler::new(seeded_rng(control, variant));

        (0..self.n_resamples)
            .map(|_| {
                let control_boot = self.estimator.estimate_in_place(resampler.draw(control));
                let variant_boot = self.estimator.estimate_in_place(resampler.draw(variant));
                variant_boot - control_boot
            })
            .collect()
    }
}
