//! Jackknife acceleration (â) for BCa intervals
//!
//! Each sample is jackknifed independently. An omission from the control is
//! paired with the variant's full-sample center and vice versa, so a two-sample
//! comparison produces `n₁ + n₂` jackknife deltas. The acceleration is the
//! standardized third moment of those deltas about their center:
//!
//! ```text
//! â = Σ(c − dᵢ)³ / (6 · (Σ(c − dᵢ)²)^1.5)
//! ```

use perfdelta_core::CentralTendencyEstimator;
use tracing::trace;

/// Jackknife deltas for a two-sample comparison
///
/// The first `n₁` entries come from control omissions
/// (`variant_center − control₋ᵢ`), the rest from variant omissions
/// (`variant₋ⱼ − control_center`). A single-element sample has no omission
/// and contributes nothing.
pub fn jackknife_deltas<E: CentralTendencyEstimator>(
    estimator: &E,
    control: &[f64],
    variant: &[f64],
    control_center: f64,
    variant_center: f64,
) -> Vec<f64> {
    let control_loo = estimator.leave_one_out(control);
    let variant_loo = estimator.leave_one_out(variant);

    let mut deltas = Vec::with_capacity(control_loo.len() + variant_loo.len());
    deltas.extend(control_loo.iter().map(|&c| variant_center - c));
    deltas.extend(variant_loo.iter().map(|&v| v - control_center));
    deltas
}

/// Acceleration from precomputed jackknife deltas
///
/// Returns 0 when the deltas carry no spread: fewer than two of them, all
/// identical up to rounding, or non-finite moments.
pub fn acceleration_from_deltas<E: CentralTendencyEstimator>(
    estimator: &E,
    jackknife: &[f64],
) -> f64 {
    if jackknife.len() < 2 {
        return 0.0;
    }

    let center = estimator.estimate(jackknife);
    let (sum_squared, sum_cubed) = jackknife.iter().fold((0.0, 0.0), |(sq, cu), &d| {
        let dev = center - d;
        (sq + dev * dev, cu + dev * dev * dev)
    });

    // Deviations within a few ulps of the data scale are rounding, not spread.
    let scale = jackknife.iter().fold(0.0_f64, |m, d| m.max(d.abs()));
    let noise = 4.0 * f64::EPSILON * scale;
    if sum_squared <= noise * noise * jackknife.len() as f64 {
        trace!(sum_squared, "jackknife deltas have no spread; acceleration is 0");
        return 0.0;
    }

    let acceleration = sum_cubed / (6.0 * sum_squared.powf(1.5));
    if acceleration.is_finite() {
        acceleration
    } else {
        0.0
    }
}

/// Acceleration parameter â for `control` vs `variant`
pub fn acceleration<E: CentralTendencyEstimator>(
    estimator: &E,
    control: &[f64],
    variant: &[f64],
    control_center: f64,
    variant_center: f64,
) -> f64 {
    let jackknife = jackknife_deltas(estimator, control, variant, control_center, variant_center);
    acceleration_from_deltas(estimator, &jackknife)
}
