//! Core types for statistical performance comparison
//!
//! This crate holds the pieces every comparison builds on:
//!
//! - **Error handling**: a single [`Error`] enum and [`Result`] alias
//! - **Normal distribution math**: Φ and Φ⁻¹ for bootstrap interval construction
//! - **Central tendency estimators**: [`Mean`] and [`Median`], including
//!   fast leave-one-out recomputation for the jackknife
//! - **Deterministic seeding**: a stable hash of the compared samples
//!
//! # Example
//!
//! ```rust
//! use perfdelta_core::{CentralTendencyEstimator, Median};
//!
//! let timings = vec![102.0, 99.0, 101.0, 5_000.0, 100.0];
//! assert_eq!(Median.estimate(&timings), 101.0);
//! assert_eq!(Median.leave_one_out(&timings).len(), timings.len());
//! ```

pub mod error;
pub mod estimator;
pub mod math;
pub mod seed;
pub mod utils;

// Re-export core types
pub use error::{Error, Result};
pub use estimator::{CentralTendencyEstimator, Mean, Median};
pub use seed::seed_from_samples;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{CentralTendencyEstimator, Error, Mean, Median, Result};
}
