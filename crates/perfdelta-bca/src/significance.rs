//! Significance policy
//!
//! An interval that merely excludes zero flags shifts of a few nanoseconds on
//! millisecond timings. The policy therefore requires the interval to clear
//! zero by a minimum detectable effect:
//!
//! ```text
//! tolerance = max(min_relative_effect · |control|, min_delta_fraction · |delta|)
//! ```

use crate::ConfidenceInterval;
use perfdelta_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Thresholds a confidence interval must clear to count as significant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignificancePolicy {
    /// Minimum effect as a fraction of the control center
    pub min_relative_effect: f64,
    /// Minimum margin as a fraction of the observed delta
    pub min_delta_fraction: f64,
}

impl Default for SignificancePolicy {
    fn default() -> Self {
        Self {
            min_relative_effect: 0.05,
            min_delta_fraction: 0.10,
        }
    }
}

impl SignificancePolicy {
    /// Create a policy with explicit thresholds
    ///
    /// # Panics
    /// Panics if either threshold is negative or not finite
    pub fn new(min_relative_effect: f64, min_delta_fraction: f64) -> Self {
        match Self::try_new(min_relative_effect, min_delta_fraction) {
            Ok(policy) => policy,
            Err(e) => panic!("{e}"),
        }
    }

    /// Create a policy, rejecting negative or non-finite thresholds
    pub fn try_new(min_relative_effect: f64, min_delta_fraction: f64) -> Result<Self> {
        for (name, value) in [
            ("min_relative_effect", min_relative_effect),
            ("min_delta_fraction", min_delta_fraction),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidParameter(format!(
                    "{name} must be a non-negative finite number, got {value}"
                )));
            }
        }
        Ok(Self {
            min_relative_effect,
            min_delta_fraction,
        })
    }

    /// Plain zero exclusion with no practical-effect floor
    pub const fn zero_exclusion() -> Self {
        Self {
            min_relative_effect: 0.0,
            min_delta_fraction: 0.0,
        }
    }

    /// Margin by which the interval must clear zero
    pub fn tolerance(&self, delta: f64, control_center: f64) -> f64 {
        (control_center * self.min_relative_effect)
            .abs()
            .max(delta.abs() * self.min_delta_fraction)
    }

    /// Significance verdict for a comparison
    ///
    /// A zero center on either side is never significant; relative changes
    /// against it are undefined.
    pub fn is_significant(
        &self,
        interval: &ConfidenceInterval,
        delta: f64,
        control_center: f64,
        variant_center: f64,
    ) -> bool {
        if control_center == 0.0 || variant_center == 0.0 {
            return false;
        }
        interval.excludes(0.0, self.tolerance(delta, control_center))
    }
}
