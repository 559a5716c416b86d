//! BCa percentile mapping
//!
//! Maps the nominal two-sided tail quantiles through the bias and acceleration
//! adjustment and reads the resulting positions off the sorted bootstrap
//! distribution.

use crate::{ConfidenceInterval, ConfidenceLevel};
use perfdelta_core::math::distributions::normal;
use tracing::{debug, trace};

/// Bias and acceleration parameters of a BCa interval
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BcaAdjustment {
    /// Bias correction z₀
    pub bias_correction: f64,
    /// Acceleration â
    pub acceleration: f64,
}

impl BcaAdjustment {
    /// Create a new adjustment
    pub fn new(bias_correction: f64, acceleration: f64) -> Self {
        Self {
            bias_correction,
            acceleration,
        }
    }

    /// Adjusted percentile for the nominal normal quantile `z`
    ///
    /// `Φ(z₀ + (z₀ + z) / (1 − â·(z₀ + z)))`, clamped to `[0, 1]`. An
    /// undefined adjustment falls back to the unadjusted `Φ(z)`.
    pub fn adjusted_probability(&self, z: f64) -> f64 {
        let shifted = self.bias_correction + z;
        let p = normal::cdf(
            self.bias_correction + shifted / (1.0 - self.acceleration * shifted),
        );
        if p.is_nan() {
            normal::cdf(z)
        } else {
            p.clamp(0.0, 1.0)
        }
    }

    /// Adjusted lower and upper percentiles for a confidence level
    pub fn adjusted_percentiles(&self, level: ConfidenceLevel) -> (f64, f64) {
        let tail = level.tail_probability();
        let z_lower = normal::quantile(tail);
        let z_upper = normal::quantile(1.0 - tail);
        (
            self.adjusted_probability(z_lower),
            self.adjusted_probability(z_upper),
        )
    }

    /// Confidence interval from bootstrap deltas sorted ascending
    ///
    /// Bounds that the adjustment inverted are swapped back so that
    /// `lower <= upper`. An empty distribution yields the zero interval.
    pub fn interval(&self, sorted_deltas: &[f64], level: ConfidenceLevel) -> ConfidenceInterval {
        if sorted_deltas.is_empty() {
            return ConfidenceInterval::default();
        }

        let (alpha1, alpha2) = self.adjusted_percentiles(level);
        let lower_idx = percentile_index(alpha1, sorted_deltas.len());
        let upper_idx = percentile_index(alpha2, sorted_deltas.len());

        debug!(alpha1, alpha2, lower_idx, upper_idx, "BCa percentile positions");

        let mut lower = sorted_deltas[lower_idx];
        let mut upper = sorted_deltas[upper_idx];
        if lower > upper {
            trace!(lower, upper, "adjustment inverted the bounds; swapping");
            std::mem::swap(&mut lower, &mut upper);
        }

        ConfidenceInterval::new(lower, upper)
    }
}

/// Index of percentile `p` in a sorted sequence of `len` values
///
/// `floor(p · len)` clamped into `[0, len − 1]`. `len` must be positive.
pub fn percentile_index(p: f64, len: usize) -> usize {
    let idx = (p * len as f64).floor();
    // Float-to-int casts saturate, so negatives and NaN land on 0.
    (idx as usize).min(len - 1)
}
