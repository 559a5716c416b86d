//! Bias correction (z₀) for BCa intervals

use perfdelta_core::math::distributions::normal;

/// Bias-correction parameter z₀
///
/// The share of bootstrap deltas strictly below the observed delta, mapped
/// through Φ⁻¹. The share is clamped into `[1/(2B), 1 − 1/(2B)]` so a
/// degenerate bootstrap distribution never reaches the poles of Φ⁻¹. An empty
/// distribution carries no evidence of bias and yields 0.
pub fn bias_correction(observed: f64, bootstrap_deltas: &[f64]) -> f64 {
    let b = bootstrap_deltas.len();
    if b == 0 {
        return 0.0;
    }

    let below = bootstrap_deltas.iter().filter(|&&d| d < observed).count();
    let floor = 1.0 / (2.0 * b as f64);
    let proportion = (below as f64 / b as f64).clamp(floor, 1.0 - floor);

    normal::quantile(proportion)
}
