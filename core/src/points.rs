use std::collections::btree_map::{self, BTreeMap};

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use tracing::warn;

use crate::error::{RecoveryError, Result};
use crate::params::validate_threshold;

/// One share: an abscissa and its decoded value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    x: u64,
    y: BigInt,
}

impl Point {
    pub fn new(x: u64, y: impl Into<BigInt>) -> Self {
        Self { x, y: y.into() }
    }

    #[inline]
    pub fn x(&self) -> u64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> &BigInt {
        &self.y
    }

    /// The value as a double, rounded once values pass 2^53. `None` when
    /// the magnitude is beyond the finite `f64` range.
    pub fn y_f64(&self) -> Option<f64> {
        self.y.to_f64().filter(|v| v.is_finite())
    }
}

/// Points of one test case keyed by ascending `x`, plus its declared
/// `n` (total shares) and `k` (shares needed, degree + 1).
///
/// The store is immutable once built. `n` is informational only and is not
/// checked against the number of points actually present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointStore {
    points: BTreeMap<u64, Point>,
    n: usize,
    k: usize,
}

impl PointStore {
    pub fn builder(n: usize, k: usize) -> PointStoreBuilder {
        PointStoreBuilder {
            points: BTreeMap::new(),
            n,
            k,
        }
    }

    /// Build a store from already decoded points.
    pub fn from_points<I>(n: usize, k: usize, points: I) -> Result<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut builder = Self::builder(n, k);
        for point in points {
            builder.insert(point)?;
        }
        builder.build()
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of points actually present.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, x: u64) -> Option<&Point> {
        self.points.get(&x)
    }

    /// All points in ascending `x` order.
    pub fn points(&self) -> btree_map::Values<'_, u64, Point> {
        self.points.values()
    }

    /// The first `k` points by ascending `x`: the interpolation basis.
    pub fn basis(&self) -> Result<Vec<&Point>> {
        if self.points.len() < self.k {
            return Err(RecoveryError::InsufficientPoints {
                required: self.k,
                provided: self.points.len(),
            });
        }
        Ok(self.points.values().take(self.k).collect())
    }
}

impl<'a> IntoIterator for &'a PointStore {
    type Item = &'a Point;
    type IntoIter = btree_map::Values<'a, u64, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points()
    }
}

/// Collects points for a [`PointStore`], rejecting repeated abscissae.
#[derive(Debug)]
pub struct PointStoreBuilder {
    points: BTreeMap<u64, Point>,
    n: usize,
    k: usize,
}

impl PointStoreBuilder {
    pub fn insert(&mut self, point: Point) -> Result<&mut Self> {
        if self.points.contains_key(&point.x) {
            return Err(RecoveryError::DuplicatePoint(point.x));
        }
        self.points.insert(point.x, point);
        Ok(self)
    }

    pub fn build(self) -> Result<PointStore> {
        validate_threshold(self.k)?;
        if self.points.len() != self.n {
            warn!(
                declared = self.n,
                provided = self.points.len(),
                "declared point count does not match the points provided"
            );
        }
        Ok(PointStore {
            points: self.points,
            n: self.n,
            k: self.k,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(k: usize, points: &[(u64, i64)]) -> Result<PointStore> {
        PointStore::from_points(
            points.len(),
            k,
            points.iter().map(|&(x, y)| Point::new(x, y)),
        )
    }

    #[test]
    fn orders_points_by_ascending_x() {
        let store = store(2, &[(3, 30), (1, 10), (2, 20)]).unwrap();
        let xs: Vec<u64> = store.points().map(Point::x).collect();
        assert_eq!(xs, vec![1, 2, 3]);
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(2).map(Point::y), Some(&BigInt::from(20)));
    }

    #[test]
    fn basis_is_first_k_points() {
        let store = store(2, &[(9, 90), (4, 40), (6, 60)]).unwrap();
        let basis: Vec<u64> =
            store.basis().unwrap().into_iter().map(Point::x).collect();
        assert_eq!(basis, vec![4, 6]);
    }

    #[test]
    fn basis_requires_k_points() {
        let store = store(4, &[(1, 1), (2, 2)]).unwrap();
        assert!(matches!(
            store.basis(),
            Err(RecoveryError::InsufficientPoints {
                required: 4,
                provided: 2
            })
        ));
    }

    #[test]
    fn rejects_duplicate_x() {
        let result = store(1, &[(1, 5), (2, 6), (1, 7)]);
        assert!(matches!(result, Err(RecoveryError::DuplicatePoint(1))));
    }

    #[test]
    fn rejects_zero_threshold() {
        assert!(matches!(
            store(0, &[(1, 5)]),
            Err(RecoveryError::InvalidThreshold(0))
        ));
    }

    #[test]
    fn declared_n_is_not_enforced() {
        let store = PointStore::from_points(
            10,
            1,
            [Point::new(1, 1), Point::new(2, 2)],
        )
        .unwrap();
        assert_eq!(store.n(), 10);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn large_values_convert_to_f64() {
        let y = BigInt::from(i64::MAX) * 1024;
        let point = Point::new(1, y);
        let y = point.y_f64().unwrap();
        assert!((y - 9.444732965739290e21).abs() < 1e7);
    }

    #[test]
    fn values_past_f64_range_have_no_double() {
        let y: BigInt = "9".repeat(400).parse().unwrap();
        assert_eq!(Point::new(1, -&y).y_f64(), None);
        assert_eq!(Point::new(1, y).y_f64(), None);
    }
}
