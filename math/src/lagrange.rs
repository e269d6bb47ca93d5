//! Lagrange evaluation of the unique interpolating polynomial.
//!
//! Given `k` points with distinct abscissae, the polynomial of degree at most
//! `k - 1` through them is evaluated directly from the basis form
//!
//! ```text
//! P(t) = Σ_i y_i · Π_{j≠i} (t − x_j) / (x_i − x_j)
//! ```
//!
//! without recovering coefficients.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::error::LagrangeError;

/// Evaluate the interpolating polynomial through `points` at `at`.
///
/// Every point takes part in the basis; callers select the subset.
/// Repeated abscissae are rejected before any division happens, so the
/// result is never `NaN` or infinite because of them.
///
/// ```
/// use math::{lagrange::evaluate, samples};
///
/// // y = 3x + 7
/// let points = samples![(1, 10), (2, 13)];
/// assert!((evaluate(&points, 0.0).unwrap() - 7.0).abs() < 1e-9);
/// ```
pub fn evaluate(points: &[(f64, f64)], at: f64) -> Result<f64, LagrangeError> {
    if points.is_empty() {
        return Err(LagrangeError::Empty);
    }

    let mut result = 0.0;
    for (i, &(xi, yi)) in points.iter().enumerate() {
        let mut term = yi;
        for (j, &(xj, _)) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            if xi == xj {
                return Err(LagrangeError::DuplicateAbscissa(xi.to_string()));
            }
            term *= (at - xj) / (xi - xj);
        }
        result += term;
    }

    Ok(result)
}

/// Lagrange interpolate over `points` and return `P(0)`.
#[inline]
pub fn constant_term(points: &[(f64, f64)]) -> Result<f64, LagrangeError> {
    evaluate(points, 0.0)
}

/// Evaluate the interpolating polynomial through `points` at `at` exactly.
///
/// Same basis as [`evaluate`], over rationals with unbounded integers.
pub fn evaluate_exact(
    points: &[(BigInt, BigInt)],
    at: &BigInt,
) -> Result<BigRational, LagrangeError> {
    if points.is_empty() {
        return Err(LagrangeError::Empty);
    }

    let mut result = BigRational::zero();
    for (i, (xi, yi)) in points.iter().enumerate() {
        let mut numerator = BigInt::one();
        let mut denominator = BigInt::one();
        for (j, (xj, _)) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            if xi == xj {
                return Err(LagrangeError::DuplicateAbscissa(xi.to_string()));
            }
            numerator *= at - xj;
            denominator *= xi - xj;
        }
        result += BigRational::new(yi * numerator, denominator);
    }

    Ok(result)
}
