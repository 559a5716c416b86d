//! Common types for confidence intervals

use perfdelta_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A confidence interval with lower and upper bounds
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
}

impl ConfidenceInterval {
    /// Create a new confidence interval
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Check if intervals overlap
    pub fn overlaps(&self, other: &ConfidenceInterval) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }

    /// Whether the whole interval lies more than `tolerance` away from `value`
    ///
    /// With a zero tolerance this is plain exclusion.
    pub fn excludes(&self, value: f64, tolerance: f64) -> bool {
        self.lower > value + tolerance || self.upper < value - tolerance
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.4}, {:.4}]", self.lower, self.upper)
    }
}

/// Confidence level type with validation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Create a new confidence level
    ///
    /// # Panics
    /// Panics if level is not in (0, 1)
    pub fn new(level: f64) -> Self {
        assert!(
            level > 0.0 && level < 1.0,
            "Confidence level must be in (0, 1)"
        );
        Self(level)
    }

    /// Create a new confidence level, rejecting values outside (0, 1)
    pub fn try_new(level: f64) -> Result<Self> {
        if level > 0.0 && level < 1.0 {
            Ok(Self(level))
        } else {
            Err(Error::invalid_confidence(level))
        }
    }

    /// Get the confidence level value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Get the alpha level (1 - confidence level)
    pub fn alpha(&self) -> f64 {
        1.0 - self.0
    }

    /// Get the tail probability (alpha/2 for two-tailed)
    pub fn tail_probability(&self) -> f64 {
        self.alpha() / 2.0
    }

    /// Common confidence levels
    pub const NINETY: Self = Self(0.90);
    pub const NINETY_FIVE: Self = Self(0.95);
    pub const NINETY_NINE: Self = Self(0.99);
    pub const NINETY_NINE_NINE: Self = Self(0.999);
}

impl Default for ConfidenceLevel {
    fn default() -> Self {
        Self::NINETY_NINE_NINE
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = Error;

    fn try_from(level: f64) -> Result<Self> {
        Self::try_new(level)
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_interval() {
        let ci = ConfidenceInterval::new(2.0, 8.0);

        assert_eq!(ci.width(), 6.0);
        assert!(ci.contains(5.0));
        assert!(!ci.contains(1.0));
        assert!(!ci.contains(9.0));
    }

    #[test]
    fn test_overlap() {
        let ci1 = ConfidenceInterval::new(2.0, 6.0);
        let ci2 = ConfidenceInterval::new(4.0, 8.0);
        let ci3 = ConfidenceInterval::new(7.0, 9.0);

        assert!(ci1.overlaps(&ci2));
        assert!(ci2.overlaps(&ci1));
        assert!(!ci1.overlaps(&ci3));
    }

    #[test]
    fn test_excludes_with_tolerance() {
        let ci = ConfidenceInterval::new(-3.2, -2.8);
        assert!(ci.excludes(0.0, 0.0));
        assert!(ci.excludes(0.0, 2.5));
        assert!(!ci.excludes(0.0, 5.0));

        let straddling = ConfidenceInterval::new(-1.0, 1.0);
        assert!(!straddling.excludes(0.0, 0.0));

        let nan = ConfidenceInterval::new(f64::NAN, f64::NAN);
        assert!(!nan.excludes(0.0, 0.0));
    }

    #[test]
    fn test_confidence_level() {
        let level = ConfidenceLevel::new(0.95);
        assert_eq!(level.value(), 0.95);
        assert!((level.alpha() - 0.05).abs() < 1e-10);
        assert!((level.tail_probability() - 0.025).abs() < 1e-10);
    }

    #[test]
    #[should_panic]
    fn test_invalid_confidence_level() {
        ConfidenceLevel::new(1.5);
    }

    #[test]
    fn test_try_new_confidence_level() {
        assert!(ConfidenceLevel::try_new(0.999).is_ok());
        assert!(ConfidenceLevel::try_new(0.0).is_err());
        assert!(ConfidenceLevel::try_new(1.0).is_err());
        assert!(ConfidenceLevel::try_new(f64::NAN).is_err());
        assert!(ConfidenceLevel::try_from(-0.5).is_err());
    }

    #[test]
    fn test_confidence_interval_display() {
        let ci = ConfidenceInterval::new(2.5, 7.5);
        assert_eq!(format!("{}", ci), "[2.5000, 7.5000]");
    }

    #[test]
    fn test_confidence_level_display() {
        assert_eq!(format!("{}", ConfidenceLevel::new(0.95)), "95.0%");
        assert_eq!(format!("{}", ConfidenceLevel::NINETY_NINE_NINE), "99.9%");
    }
}
