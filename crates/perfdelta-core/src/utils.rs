//! Utility functions for working with sample slices

use std::cmp::Ordering;

/// Order two floats with NaN placed after every number
#[inline]
pub fn nan_last(a: &f64, b: &f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}

/// Sort data in place, NaN values last
#[inline]
pub fn sort(data: &mut [f64]) {
    data.sort_by(nan_last);
}

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end.
///
/// # Examples
///
/// ```rust
/// use perfdelta_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sort(&mut sorted);
    sorted
}

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use perfdelta_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Median of already-sorted data
///
/// Even lengths average the two middle values. Returns 0.0 for empty slices.
pub fn median_sorted(sorted_data: &[f64]) -> f64 {
    let n = sorted_data.len();
    if n == 0 {
        return 0.0;
    }
    let mid = n / 2;
    if n % 2 == 1 {
        sorted_data[mid]
    } else {
        (sorted_data[mid - 1] + sorted_data[mid]) / 2.0
    }
}

/// Whether every value is finite
pub fn all_finite(data: &[f64]) -> bool {
    data.iter().all(|x| x.is_finite())
}
