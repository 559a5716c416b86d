//! BCa bootstrap comparison of benchmark runs
//!
//! This crate decides whether two sets of performance measurements differ in a
//! way that is both statistically and practically meaningful. It builds a
//! bias-corrected and accelerated (BCa) bootstrap confidence interval for the
//! difference of central tendencies and classifies the result.
//!
//! # Overview
//!
//! A comparison proceeds in five steps:
//!
//! 1. Paired bootstrap replicates of both samples give a distribution of deltas
//! 2. The share of replicates below the observed delta gives the bias z₀
//! 3. Jackknife omissions give the acceleration â
//! 4. Adjusted percentiles of the sorted deltas give the interval
//! 5. The [`SignificancePolicy`] decides whether the interval clears zero by a
//!    practical margin
//!
//! The generator is seeded from the sample contents, so the same inputs always
//! produce the same [`Report`].
//!
//! # Examples
//!
//! ```rust
//! use perfdelta_bca::{BcaBootstrap, Change};
//!
//! let control = vec![100.0, 101.0, 99.0, 100.5, 99.5, 100.2, 99.8, 100.1];
//! let variant = vec![80.0, 81.0, 79.0, 80.5, 79.5, 80.2, 79.8, 80.1];
//!
//! let report = BcaBootstrap::new()
//!     .with_confidence_level(0.99)
//!     .with_resamples(2_000)
//!     .compare(&control, &variant);
//!
//! assert!(report.significant);
//! assert!(matches!(Change::from_report(&report), Change::Improved { .. }));
//! ```

pub mod acceleration;
pub mod api;
pub mod bias;
mod bootstrap;
pub mod percentile;
mod report;
pub mod resample;
mod significance;
mod summary;
mod types;

// Re-exports
pub use api::{compare, compare_default, DEFAULT_CONFIDENCE, DEFAULT_RESAMPLES};
pub use bootstrap::BcaBootstrap;
pub use percentile::BcaAdjustment;
pub use report::Report;
pub use significance::SignificancePolicy;
pub use summary::Change;
pub use types::{ConfidenceInterval, ConfidenceLevel};

pub use perfdelta_core::{CentralTendencyEstimator, Error, Mean, Median, Result};
