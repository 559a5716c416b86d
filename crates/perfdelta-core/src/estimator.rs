//! Central tendency estimators
//!
//! A comparison summarizes each sample, each bootstrap replicate and each
//! jackknife omission with the same statistic, so the estimator is a type
//! parameter of the engine rather than a per-call choice.

use crate::utils::{mean, median_sorted, nan_last, sorted};

/// Base trait for the statistic a comparison is built on
///
/// Implementations are infallible: an empty slice yields 0.0. Callers that need
/// to distinguish "no data" check emptiness before estimating.
///
/// # API Convention
///
/// - `estimate` leaves its input untouched
/// - `estimate_in_place` may reorder its input, which lets the bootstrap loop
///   reuse a scratch buffer
pub trait CentralTendencyEstimator: Send + Sync + Clone {
    /// Estimate the central tendency of a sample
    fn estimate(&self, data: &[f64]) -> f64;

    /// Estimate the central tendency, possibly reordering `data`
    fn estimate_in_place(&self, data: &mut [f64]) -> f64 {
        self.estimate(data)
    }

    /// Leave-one-out estimates
    ///
    /// Element `i` of the result is the statistic of `data` with element `i`
    /// removed. Samples shorter than two elements have no meaningful omission
    /// and yield an empty vector.
    fn leave_one_out(&self, data: &[f64]) -> Vec<f64> {
        if data.len() < 2 {
            return Vec::new();
        }
        let mut scratch = Vec::with_capacity(data.len() - 1);
        (0..data.len())
            .map(|i| {
                scratch.clear();
                scratch.extend(
                    data.iter()
                        .enumerate()
                        .filter(|&(j, _)| j != i)
                        .map(|(_, &x)| x),
                );
                self.estimate_in_place(&mut scratch)
            })
            .collect()
    }

    /// Human-readable name of the estimator
    fn name(&self) -> &str;
}

/// Arithmetic mean
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mean;

impl CentralTendencyEstimator for Mean {
    fn estimate(&self, data: &[f64]) -> f64 {
        mean(data)
    }

    /// Uses the running total, so each omission costs O(1)
    fn leave_one_out(&self, data: &[f64]) -> Vec<f64> {
        if data.len() < 2 {
            return Vec::new();
        }
        let total: f64 = data.iter().sum();
        let m = (data.len() - 1) as f64;
        data.iter().map(|&x| (total - x) / m).collect()
    }

    fn name(&self) -> &str {
        "Mean"
    }
}

/// Sample median
///
/// Even-length samples average the two middle order statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Median;

impl CentralTendencyEstimator for Median {
    fn estimate(&self, data: &[f64]) -> f64 {
        median_sorted(&sorted(data))
    }

    fn estimate_in_place(&self, data: &mut [f64]) -> f64 {
        let n = data.len();
        if n == 0 {
            return 0.0;
        }
        let mid = n / 2;
        let (below, &mut upper, _) = data.select_nth_unstable_by(mid, nan_last);
        if n % 2 == 1 {
            upper
        } else {
            let lower = below.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            (lower + upper) / 2.0
        }
    }

    /// Reads each omission's median off the sorted sample instead of
    /// re-sorting n times
    fn leave_one_out(&self, data: &[f64]) -> Vec<f64> {
        let n = data.len();
        if n < 2 {
            return Vec::new();
        }
        let s = sorted(data);
        let m = n - 1;

        data.iter()
            .map(|x| {
                // Any copy of a tied value leaves the same multiset behind.
                let k = s.partition_point(|v| nan_last(v, x).is_lt());
                let nth = |j: usize| if j < k { s[j] } else { s[j + 1] };
                if m % 2 == 1 {
                    nth(m / 2)
                } else {
                    (nth(m / 2 - 1) + nth(m / 2)) / 2.0
                }
            })
            .collect()
    }

    fn name(&self) -> &str {
        "Median"
    }
}
