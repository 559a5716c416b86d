//! Statistically sound comparison of benchmark runs
//!
//! `perfdelta` answers one question: did the variant run get faster, slower,
//! or stay the same compared with the control run? It builds a BCa bootstrap
//! confidence interval for the difference of medians and only calls a change
//! significant when the interval clears zero by a practical margin.
//!
//! The functionality lives in two crates re-exported here:
//!
//! - [`perfdelta_core`]: errors, normal-distribution math and central
//!   tendency estimators
//! - [`perfdelta_bca`]: the bootstrap engine, [`Report`] and [`Change`]
//!   summaries
//!
//! # Example
//!
//! ```rust
//! use perfdelta::{compare, Change};
//!
//! let control = [1_210.0, 1_195.0, 1_230.0, 1_205.0, 1_190.0, 1_250.0, 1_215.0, 1_200.0];
//! let variant = [1_050.0, 1_070.0, 1_040.0, 1_065.0, 1_055.0, 1_100.0, 1_045.0, 1_060.0];
//!
//! let report = compare(&control, &variant, 0.99, 2_000)?;
//! assert!(report.is_improvement());
//! println!("{}", Change::from_report(&report));
//! # Ok::<(), perfdelta::Error>(())
//! ```

pub use perfdelta_bca;
pub use perfdelta_core;

pub use perfdelta_bca::{
    compare, compare_default, BcaBootstrap, Change, ConfidenceInterval, ConfidenceLevel, Report,
    SignificancePolicy, DEFAULT_CONFIDENCE, DEFAULT_RESAMPLES,
};
pub use perfdelta_core::{CentralTendencyEstimator, Error, Mean, Median, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BcaBootstrap, CentralTendencyEstimator, Change, Error, Mean, Median, Report, Result,
        SignificancePolicy,
    };
}
