//! Shared macros for building sample points in tests and examples.

/// Create a [`Vec`] of `(f64, f64)` sample points from numeric pairs.
///
/// ```
/// use math::samples;
///
/// let points = samples![(1, 10), (2, 13)];
/// assert_eq!(points, vec![(1.0, 10.0), (2.0, 13.0)]);
/// ```
#[macro_export]
macro_rules! samples {
    ($(($x:expr, $y:expr)),* $(,)?) => {
        vec![$(($x as f64, $y as f64)),*]
    };
}
