use math::lagrange;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use tracing::debug;

use crate::error::{RecoveryError, Result};
use crate::points::{Point, PointStore};

/// The degree-(k-1) polynomial through the first `k` points of a store.
///
/// Only the basis points take part. Anything past the first `k` is ignored
/// here, which is what lets the consistency checker judge those points
/// against the rest.
#[derive(Clone, Debug)]
pub struct Interpolator<'a> {
    store: &'a PointStore,
    samples: Vec<(f64, f64)>,
}

impl<'a> Interpolator<'a> {
    pub fn new(store: &'a PointStore) -> Result<Self> {
        let samples = store
            .basis()?
            .into_iter()
            .map(|point| Ok((point.x() as f64, finite_y(point)?)))
            .collect::<Result<Vec<(f64, f64)>>>()?;
        debug!(k = store.k(), basis = ?samples, "interpolation basis selected");

        Ok(Self { store, samples })
    }

    /// Number of points in the basis, i.e. `k`.
    pub fn basis_len(&self) -> usize {
        self.samples.len()
    }

    /// Evaluate the interpolant at `at` in double precision.
    pub fn evaluate(&self, at: f64) -> Result<f64> {
        Ok(lagrange::evaluate(&self.samples, at)?)
    }

    /// The polynomial's constant term, `P(0)`.
    pub fn constant_term(&self) -> Result<f64> {
        self.evaluate(0.0)
    }

    /// Evaluate the interpolant at `at` over the rationals.
    pub fn evaluate_exact(&self, at: &BigInt) -> Result<BigRational> {
        let basis: Vec<(BigInt, BigInt)> = self
            .store
            .basis()?
            .into_iter()
            .map(|point| (BigInt::from(point.x()), point.y().clone()))
            .collect();
        Ok(lagrange::evaluate_exact(&basis, at)?)
    }

    pub fn exact_constant_term(&self) -> Result<BigRational> {
        self.evaluate_exact(&BigInt::zero())
    }
}

/// The value of `point` as a finite double.
pub(crate) fn finite_y(point: &Point) -> Result<f64> {
    point
        .y_f64()
        .ok_or(RecoveryError::ValueOutOfRange { x: point.x() })
}

/// Evaluate the polynomial through the first `k` points of `store` at `at_x`.
pub fn interpolate(store: &PointStore, at_x: f64) -> Result<f64> {
    Interpolator::new(store)?.evaluate(at_x)
}

/// Recover the constant term of the polynomial behind `store`.
pub fn constant_term(store: &PointStore) -> Result<f64> {
    let value = Interpolator::new(store)?.constant_term()?;
    debug!(value, "constant term recovered");
    Ok(value)
}

/// Recover the constant term exactly, as a reduced fraction.
pub fn exact_constant_term(store: &PointStore) -> Result<BigRational> {
    Interpolator::new(store)?.exact_constant_term()
}
