//! Mathematical utilities for bootstrap inference
//!
//! The BCa interval needs the standard normal CDF and its inverse. Both are
//! expressed through the complementary error function from `statrs`, which
//! keeps the tails accurate where the bias correction evaluates them.

/// Distribution-related mathematical functions
pub mod distributions {
    /// Standard normal distribution utilities
    pub mod normal {
        use statrs::function::erf::{erfc, erfc_inv};
        use std::f64::consts::SQRT_2;

        /// Cumulative distribution function Φ of the standard normal distribution
        pub fn cdf(x: f64) -> f64 {
            if x.is_nan() {
                return f64::NAN;
            }
            0.5 * erfc(-x / SQRT_2)
        }

        /// Inverse cumulative distribution function Φ⁻¹ (quantile function)
        ///
        /// Returns `-inf` for `p <= 0` and `+inf` for `p >= 1`.
        pub fn ppf(p: f64) -> f64 {
            if p.is_nan() {
                return f64::NAN;
            }
            if p <= 0.0 {
                return f64::NEG_INFINITY;
            }
            if p >= 1.0 {
                return f64::INFINITY;
            }
            -SQRT_2 * erfc_inv(2.0 * p)
        }

        /// Alias for ppf (percent point function) that matches common naming
        #[inline]
        pub fn quantile(p: f64) -> f64 {
            ppf(p)
        }

    }
}
