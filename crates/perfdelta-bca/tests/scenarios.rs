//! End-to-end comparison scenarios

mod common;

use common::*;
use perfdelta_bca::{
    compare, BcaBootstrap, Change, ConfidenceInterval, Error, Mean, Report, SignificancePolicy,
};

#[test]
fn test_faster_variant_is_significant() {
    let report = quick_engine(5_000).compare(&SLOW_RUN, &FAST_RUN);

    assert!(report.delta < 0.0);
    assert!(report.significant);
    assert!(report.is_improvement());
    assert!(!report.is_regression());
    assert!(report.interval.lower <= report.interval.upper);
    assert!(report.interval.upper < 0.0);
}

#[test]
fn test_sample_against_itself_is_not_significant() {
    let report = BcaBootstrap::new().compare(&SLOW_RUN, &SLOW_RUN);

    assert_abs_diff_eq!(report.delta, 0.0);
    assert!(!report.significant);
    assert!(report.interval.contains(0.0));
}

#[test]
fn test_three_percent_shift_is_below_practical_floor() {
    let control = [100.0, 100.1, 99.9, 100.0];
    let variant = [103.0, 103.1, 102.9, 103.0];
    let report = BcaBootstrap::new().compare(&control, &variant);

    assert_relative_eq!(report.delta, 3.0, epsilon = 1e-9);
    assert!(!report.significant);
    assert!(Change::from_report(&report).is_similar());

    // Without the floor the same interval clears zero
    let strict = BcaBootstrap::new()
        .with_policy(SignificancePolicy::zero_exclusion())
        .compare(&control, &variant);
    assert!(strict.significant);
}

#[test]
fn test_ten_percent_shift_is_significant() {
    let control = [100.0, 100.1, 99.9, 100.0];
    let variant = [90.0, 90.1, 89.9, 90.0];
    let report = BcaBootstrap::new().compare(&control, &variant);

    assert_relative_eq!(report.delta, -10.0, epsilon = 1e-9);
    assert!(report.significant);
    assert_eq!(Change::from_report(&report).to_string().chars().next(), Some('✅'));
}

#[test]
fn test_slower_variant_is_a_regression() {
    let control = [100.0, 100.2, 99.8, 100.1, 99.9];
    let variant = [110.0, 110.2, 109.8, 110.1, 109.9];
    let report = BcaBootstrap::new().compare(&control, &variant);

    assert!(report.is_regression());
    match Change::from_report(&report) {
        Change::Regressed { percent, .. } => assert!(percent < -8.0 && percent > -10.0),
        other => panic!("expected a regression, got {other:?}"),
    }
}

#[test]
fn test_empty_inputs_yield_sentinel() {
    let engine = BcaBootstrap::new();
    assert_eq!(engine.compare(&[], &FAST_RUN), Report::default());
    assert_eq!(engine.compare(&SLOW_RUN, &[]), Report::default());
}

#[test]
fn test_single_values() {
    let report = quick_engine(1_000).compare(&[5.0], &[10.0]);

    assert_eq!(report.delta, 5.0);
    assert_eq!(report.confidence, 0.95);
    assert_eq!(report.resamples, 1_000);
    assert_eq!(report.interval, ConfidenceInterval::new(5.0, 5.0));
}

#[test]
fn test_constant_samples() {
    let report = quick_engine(1_000).compare(&[5.0; 6], &[5.0; 4]);
    assert_eq!(report.delta, 0.0);
    assert_eq!(report.interval, ConfidenceInterval::new(0.0, 0.0));
    assert!(!report.significant);

    let shifted = quick_engine(1_000).compare(&[5.0; 6], &[7.0; 4]);
    assert_eq!(shifted.interval, ConfidenceInterval::new(2.0, 2.0));
    assert!(shifted.significant);
}

#[test]
fn test_zero_center_is_never_significant() {
    let report = quick_engine(1_000).compare(&[0.0, 0.0, 0.0], &[1.0, 1.0, 1.1]);
    assert!(!report.significant);

    let report = quick_engine(1_000).compare(&[1.0, 1.0, 1.1], &[0.0, 0.0, 0.0]);
    assert!(!report.significant);
}

#[test]
fn test_reports_are_deterministic() {
    let control = timings(1_000.0, 0.05, 40, 1);
    let variant = timings(1_020.0, 0.05, 40, 2);
    let engine = quick_engine(2_000);

    let first = engine.compare(&control, &variant);
    let second = engine.compare(&control, &variant);
    assert_eq!(first.delta.to_bits(), second.delta.to_bits());
    assert_eq!(first.interval.lower.to_bits(), second.interval.lower.to_bits());
    assert_eq!(first.interval.upper.to_bits(), second.interval.upper.to_bits());
    assert_eq!(first, second);
}

#[test]
fn test_outlier_does_not_flip_median_verdict() {
    let control = timings(1_000.0, 0.02, 30, 11);
    let mut variant = control.clone();
    variant[7] = 50_000.0;

    let median = quick_engine(2_000).compare(&control, &variant);
    assert!(!median.significant);

    let mean = quick_engine(2_000).with_estimator(Mean).compare(&control, &variant);
    assert!(mean.delta > median.delta);
}

#[test]
fn test_realistic_speedup() {
    let control = timings(1_000.0, 0.05, 50, 21);
    let variant = timings(700.0, 0.05, 50, 22);
    let report = BcaBootstrap::new().compare(&control, &variant);

    assert!(report.is_improvement());
    let relative = report.relative_change().unwrap();
    assert!(relative < -0.2 && relative > -0.4, "relative change {relative}");
}

#[test]
fn test_batch_preserves_order() {
    let a = timings(500.0, 0.05, 20, 31);
    let b = timings(400.0, 0.05, 20, 32);
    let pairs: Vec<(&[f64], &[f64])> = vec![(&a[..], &b[..]), (&b[..], &a[..]), (&a[..], &a[..])];

    let engine = quick_engine(1_000);
    let reports = engine.compare_batch(&pairs);
    assert!(reports[0].is_improvement());
    assert!(reports[1].is_regression());
    assert!(!reports[2].significant);
}

#[test]
fn test_checked_entry_point() -> anyhow::Result<()> {
    let report = compare(&SLOW_RUN, &FAST_RUN, 0.99, 2_000)?;
    assert_eq!(report.confidence, 0.99);
    assert_eq!(report.resamples, 2_000);

    assert!(matches!(
        compare(&SLOW_RUN, &[1.0, f64::INFINITY], 0.99, 100),
        Err(Error::InvalidInput(_))
    ));
    Ok(())
}

#[test]
fn test_report_serializes() {
    let report = quick_engine(500).compare(&SLOW_RUN, &FAST_RUN);
    let json = serde_json::to_value(report).unwrap();
    assert_eq!(json["resamples"], 500);
    assert_eq!(json["significant"], true);

    let back: Report = serde_json::from_value(json).unwrap();
    assert_eq!(back, report);
}
