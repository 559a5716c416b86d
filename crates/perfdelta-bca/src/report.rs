//! Comparison report

use crate::ConfidenceInterval;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of comparing a variant sample against a control sample
///
/// Metrics are assumed smaller-is-better (time per operation): a negative
/// `delta` means the variant is faster.
///
/// `Report::default()` is the empty sentinel returned when either sample is
/// empty. It has zero centers, a zero interval, zero resamples and is never
/// significant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Variant center minus control center
    pub delta: f64,
    /// Confidence interval for `delta`, `lower <= upper`
    pub interval: ConfidenceInterval,
    /// Central tendency of the control sample
    pub control_center: f64,
    /// Central tendency of the variant sample
    pub variant_center: f64,
    /// Requested confidence level
    pub confidence: f64,
    /// Whether the difference is statistically and practically significant
    pub significant: bool,
    /// Number of bootstrap resamples used
    pub resamples: usize,
}

impl Report {
    /// Whether this is the sentinel for an impossible comparison
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Significant and the variant is larger (slower)
    pub fn is_regression(&self) -> bool {
        self.significant && self.delta > 0.0
    }

    /// Significant and the variant is smaller (faster)
    pub fn is_improvement(&self) -> bool {
        self.significant && self.delta < 0.0
    }

    /// Delta as a fraction of the control center
    ///
    /// `None` when the control center is zero.
    pub fn relative_change(&self) -> Option<f64> {
        if self.control_center == 0.0 {
            None
        } else {
            Some(self.delta / self.control_center)
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "delta {:.4} {} at {:.1}% ({} resamples, {})",
            self.delta,
            self.interval,
            self.confidence * 100.0,
            self.resamples,
            if self.significant {
                "significant"
            } else {
                "not significant"
            }
        )
    }
}
