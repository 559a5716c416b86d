//! Human-readable change summaries
//!
//! Turns a [`Report`] into the one-cell verdict a benchmark table shows, for
//! example `✅ +12% [8%,16%]` or `🟰 similar`. Percentages are speedups of the
//! variant relative to the control, so positive means faster.

use crate::{ConfidenceInterval, Report};
use std::fmt;

/// Variant/control ratios beyond these bounds are treated as measurement
/// error rather than a real change.
const MAX_RATIO: f64 = 1000.0;
const MIN_RATIO: f64 = 0.001;

/// Interval bounds are only shown when they stay within these limits.
const MAX_SHOWN_WIDTH: f64 = 100.0;
const MAX_SHOWN_PERCENT: f64 = 1000.0;

/// Verdict of a comparison in speedup terms
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Change {
    /// No significant difference, or no meaningful ratio
    Similar,
    /// Variant is significantly faster
    Improved {
        /// Speedup in percent, `(control / variant − 1) · 100`
        percent: f64,
        /// Speedup interval in percent
        interval: ConfidenceInterval,
    },
    /// Variant is significantly slower
    Regressed {
        /// Speedup in percent, negative for a slowdown
        percent: f64,
        /// Speedup interval in percent
        interval: ConfidenceInterval,
    },
    /// Centers differ by more than three orders of magnitude
    Uncomparable {
        /// Whether the variant is the faster side
        faster: bool,
    },
}

impl Change {
    /// Summarize a report
    pub fn from_report(report: &Report) -> Self {
        let control = report.control_center;
        let variant = report.variant_center;
        if control == 0.0 || variant == 0.0 {
            return Change::Similar;
        }

        let ratio = variant / control;
        if ratio > MAX_RATIO {
            return Change::Uncomparable { faster: false };
        }
        if ratio < MIN_RATIO {
            return Change::Uncomparable { faster: true };
        }

        if !report.significant {
            return Change::Similar;
        }

        let speedup = control / variant;
        let percent = (speedup - 1.0) * 100.0;
        let interval = speedup_interval(control, &report.interval);

        if speedup > 1.0 {
            Change::Improved { percent, interval }
        } else {
            Change::Regressed { percent, interval }
        }
    }

    /// Whether the summary reports no change
    pub fn is_similar(&self) -> bool {
        matches!(self, Change::Similar)
    }
}

impl From<&Report> for Change {
    fn from(report: &Report) -> Self {
        Self::from_report(report)
    }
}

/// Convert a delta interval to speedup percentages
///
/// A delta bound `b` means the variant ran at `control + b`, a speedup of
/// `control / (control + b) − 1`. The conversion is decreasing in `b`, so the
/// bounds are reordered.
fn speedup_interval(control: f64, delta_interval: &ConfidenceInterval) -> ConfidenceInterval {
    let convert = |bound: f64| (control / (control + bound) - 1.0) * 100.0;
    let a = convert(delta_interval.lower);
    let b = convert(delta_interval.upper);
    if a <= b {
        ConfidenceInterval::new(a, b)
    } else {
        ConfidenceInterval::new(b, a)
    }
}

fn format_change(
    f: &mut fmt::Formatter<'_>,
    percent: f64,
    interval: &ConfidenceInterval,
) -> fmt::Result {
    if percent >= 1000.0 {
        return write!(f, "+{:.0}x", percent / 100.0 + 1.0);
    }
    if percent > 100.0 {
        return write!(f, "+{:.1}x", percent / 100.0 + 1.0);
    }

    let sign = if percent > 0.0 { "+" } else { "" };
    write!(f, "{sign}{percent:.0}%")?;
    if shows_interval(interval) {
        write!(f, " [{:.0}%,{:.0}%]", interval.lower, interval.upper)?;
    }
    Ok(())
}

fn shows_interval(interval: &ConfidenceInterval) -> bool {
    interval.lower.is_finite()
        && interval.upper.is_finite()
        && interval.width().abs() <= MAX_SHOWN_WIDTH
        && interval.lower.abs() <= MAX_SHOWN_PERCENT
        && interval.upper.abs() <= MAX_SHOWN_PERCENT
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::Similar => write!(f, "🟰 similar"),
            Change::Uncomparable { faster: true } => write!(f, "✅ uncomparable"),
            Change::Uncomparable { faster: false } => write!(f, "❌ uncomparable"),
            Change::Improved { percent, interval } => {
                write!(f, "✅ ")?;
                format_change(f, *percent, interval)
            }
            Change::Regressed { percent, interval } => {
                write!(f, "❌ ")?;
                format_change(f, *percent, interval)
            }
        }
    }
}
