use std::path::Path;

use tracing::{info, instrument};

use crate::consistency::{find_outliers, find_outliers_exact};
use crate::error::Result;
use crate::input::TestCase;
use crate::interpolate::Interpolator;
use crate::params::{Precision, RecoveryParams};
use crate::points::PointStore;
use crate::report::{CaseFailure, CaseReport, RunReport};

/// Recover the constant term of one store and, if asked, its outliers.
pub fn recover_store(
    label: &str,
    store: &PointStore,
    params: &RecoveryParams,
    check_outliers: bool,
) -> Result<CaseReport> {
    params.validate()?;
    let interpolator = Interpolator::new(store)?;
    let constant_term = interpolator.constant_term()?;

    let exact_constant_term = match params.precision {
        Precision::Float => None,
        Precision::Exact => Some(interpolator.exact_constant_term()?.to_string()),
    };

    let outliers = if check_outliers {
        Some(match params.precision {
            Precision::Float => find_outliers(store, params.tolerance)?,
            Precision::Exact => find_outliers_exact(store)?,
        })
    } else {
        None
    };

    info!(
        label,
        constant_term,
        outliers = ?outliers,
        "test case recovered"
    );

    Ok(CaseReport {
        label: label.to_string(),
        n: store.n(),
        k: store.k(),
        provided: store.len(),
        constant_term,
        exact_constant_term,
        outliers,
    })
}

/// Build a fresh store for `case` and recover it.
pub fn recover_case(
    label: &str,
    case: &TestCase,
    params: &RecoveryParams,
    check_outliers: bool,
) -> Result<CaseReport> {
    let store = case.to_store()?;
    recover_store(label, &store, params, check_outliers)
}

/// Recover each file independently. A failing case is recorded and the run
/// moves on to the next one.
#[instrument(skip_all, fields(cases = paths.len()))]
pub fn recover_files<P: AsRef<Path>>(
    paths: &[P],
    params: &RecoveryParams,
) -> RunReport {
    let mut run = RunReport::default();

    for (index, path) in paths.iter().enumerate() {
        let path = path.as_ref();
        let label = path.display().to_string();
        let check = params.outliers.applies_to(index, paths.len());

        let outcome = TestCase::load(path)
            .and_then(|case| recover_case(&label, &case, params, check));
        match outcome {
            Ok(report) => run.cases.push(report),
            Err(e) => {
                tracing::error!(%label, error = %e, "test case failed");
                run.failures.push(CaseFailure {
                    label,
                    error: e.to_string(),
                });
            }
        }
    }

    run
}
