use std::fmt;

use serde::Serialize;

/// Outcome of recovering one test case.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CaseReport {
    pub label: String,
    pub n: usize,
    pub k: usize,
    /// Points actually present, which may differ from `n`.
    pub provided: usize,
    pub constant_term: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact_constant_term: Option<String>,
    /// `None` when the case was not checked for outliers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outliers: Option<Vec<u64>>,
}

impl CaseReport {
    pub fn has_outliers(&self) -> bool {
        self.outliers.as_ref().is_some_and(|o| !o.is_empty())
    }
}

impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Constant term ({}): {}", self.label, self.constant_term)?;
        if let Some(exact) = &self.exact_constant_term {
            write!(f, "\nExact constant term ({}): {exact}", self.label)?;
        }
        if let Some(outliers) = &self.outliers {
            write!(f, "\nWrong points in {}: ", self.label)?;
            if outliers.is_empty() {
                f.write_str("None")?;
            } else {
                let xs: Vec<String> =
                    outliers.iter().map(u64::to_string).collect();
                f.write_str(&xs.join(" "))?;
            }
        }
        Ok(())
    }
}

/// A whole run, as emitted in JSON mode.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RunReport {
    pub cases: Vec<CaseReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<CaseFailure>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CaseFailure {
    pub label: String,
    pub error: String,
}
