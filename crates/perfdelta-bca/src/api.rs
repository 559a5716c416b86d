//! High-level API for benchmark comparisons
//!
//! One-call entry points for the common case of comparing two runs with the
//! default estimator and significance policy.

use crate::{BcaBootstrap, Report};
use perfdelta_core::Result;

/// Default number of bootstrap resamples
pub const DEFAULT_RESAMPLES: usize = 10_000;

/// Default confidence level
pub const DEFAULT_CONFIDENCE: f64 = 0.999;

/// Compare a variant run against a control run
///
/// Uses the median as the center and the default significance policy.
///
/// # Arguments
/// * `control` - Baseline measurements
/// * `variant` - Candidate measurements
/// * `confidence_level` - Confidence level in (0, 1), e.g. `0.999`
/// * `n_resamples` - Number of bootstrap resamples, must be positive
///
/// # Errors
/// Returns an error for an invalid confidence level, a zero resample count,
/// or samples containing NaN or infinite values. An empty sample is not an
/// error; it yields `Report::default()`.
///
/// # Example
/// ```rust
/// use perfdelta_bca::api::compare;
///
/// let control = [100.0, 101.0, 99.0, 100.5, 99.5, 100.2, 99.8, 100.1];
/// let variant = [90.0, 91.0, 89.0, 90.5, 89.5, 90.2, 89.8, 90.1];
///
/// let report = compare(&control, &variant, 0.99, 2_000).unwrap();
/// assert!(report.is_improvement());
/// ```
pub fn compare(
    control: &[f64],
    variant: &[f64],
    confidence_level: f64,
    n_resamples: usize,
) -> Result<Report> {
    BcaBootstrap::try_new(confidence_level, n_resamples)?.try_compare(control, variant)
}

/// Compare with [`DEFAULT_CONFIDENCE`] and [`DEFAULT_RESAMPLES`]
pub fn compare_default(control: &[f64], variant: &[f64]) -> Result<Report> {
    compare(control, variant, DEFAULT_CONFIDENCE, DEFAULT_RESAMPLES)
}
