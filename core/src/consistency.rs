//! Detection of shares that do not lie on the recovered polynomial.
//!
//! Every point is compared with the interpolant built from the first `k`
//! points. Those `k` points agree with it by construction, so only points
//! past the basis can ever be reported.

use num_bigint::BigInt;
use num_rational::BigRational;
use tracing::debug;

use crate::error::Result;
use crate::interpolate::{finite_y, Interpolator};
use crate::params::validate_tolerance;
use crate::points::PointStore;

pub use crate::params::DEFAULT_TOLERANCE;

/// Verdict for a single point.
#[derive(Clone, Debug, PartialEq)]
pub struct PointCheck {
    pub x: u64,
    pub actual: f64,
    pub predicted: f64,
    pub deviation: f64,
    pub consistent: bool,
}

/// Compare every point of `store` with the interpolant in double precision.
pub fn check(store: &PointStore, tolerance: f64) -> Result<Vec<PointCheck>> {
    validate_tolerance(tolerance)?;
    let interpolator = Interpolator::new(store)?;

    store
        .points()
        .map(|point| {
            let actual = finite_y(point)?;
            let predicted = interpolator.evaluate(point.x() as f64)?;
            let deviation = (predicted - actual).abs();
            let consistent = deviation <= tolerance;
            debug!(x = point.x(), actual, predicted, deviation, consistent);
            Ok(PointCheck {
                x: point.x(),
                actual,
                predicted,
                deviation,
                consistent,
            })
        })
        .collect()
}

/// The `x` of every point whose value deviates from the interpolant by more
/// than `tolerance`, in ascending order.
pub fn find_outliers(store: &PointStore, tolerance: f64) -> Result<Vec<u64>> {
    Ok(check(store, tolerance)?
        .into_iter()
        .filter(|c| !c.consistent)
        .map(|c| c.x)
        .collect())
}

/// Like [`find_outliers`], but over the rationals: a point is an outlier iff
/// its value differs from the interpolant at all.
pub fn find_outliers_exact(store: &PointStore) -> Result<Vec<u64>> {
    let interpolator = Interpolator::new(store)?;
    let mut outliers = Vec::new();

    for point in store {
        let predicted = interpolator.evaluate_exact(&BigInt::from(point.x()))?;
        if predicted != BigRational::from_integer(point.y().clone()) {
            debug!(
                x = point.x(),
                %predicted,
                actual = %point.y(),
                "point is off the polynomial"
            );
            outliers.push(point.x());
        }
    }

    Ok(outliers)
}
