use std::fmt;
use std::str::FromStr;

use crate::error::{RecoveryError, Result};

/// Largest accepted gap between a point's value and the interpolated one.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Inputs read when none are given on the command line.
pub const DEFAULT_INPUTS: [&str; 2] = ["testcase1.json", "testcase2.json"];

/// Which test cases of a run get checked for inconsistent points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutlierScope {
    None,
    /// Only the final case, as in the classic two-case run.
    #[default]
    Last,
    All,
}

impl OutlierScope {
    /// Whether case `index` out of `total` should be checked.
    #[inline]
    pub const fn applies_to(self, index: usize, total: usize) -> bool {
        match self {
            OutlierScope::None => false,
            OutlierScope::Last => index + 1 == total,
            OutlierScope::All => true,
        }
    }
}

impl FromStr for OutlierScope {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(Self::None),
            "last" => Ok(Self::Last),
            "all" => Ok(Self::All),
            other => Err(format!(
                "unknown outlier scope '{other}', expected none, last or all"
            )),
        }
    }
}

impl fmt::Display for OutlierScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutlierScope::None => "none",
            OutlierScope::Last => "last",
            OutlierScope::All => "all",
        })
    }
}

/// Arithmetic used for evaluating the interpolant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Precision {
    /// Double precision, compared against a tolerance.
    #[default]
    Float,
    /// Rationals over big integers, compared for equality.
    Exact,
}

/// Knobs for a recovery run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecoveryParams {
    pub tolerance: f64,
    pub outliers: OutlierScope,
    pub precision: Precision,
}

impl Default for RecoveryParams {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            outliers: OutlierScope::default(),
            precision: Precision::default(),
        }
    }
}

impl RecoveryParams {
    pub fn validate(&self) -> Result<()> {
        validate_tolerance(self.tolerance)
    }
}

pub fn validate_tolerance(tolerance: f64) -> Result<()> {
    if tolerance.is_finite() && tolerance >= 0.0 {
        Ok(())
    } else {
        Err(RecoveryError::InvalidTolerance(tolerance))
    }
}

/// Validate the declared threshold of a test case.
pub fn validate_threshold(k: usize) -> Result<()> {
    if k == 0 {
        return Err(RecoveryError::InvalidThreshold(k));
    }
    Ok(())
}
