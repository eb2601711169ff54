//! Absolute-tolerance comparison of vectors and matrices.
//!
//! Two values are almost equal when every pair of corresponding components
//! differs by no more than `tolerance`. The tolerance is absolute, not
//! relative; picking it is the caller's job. These helpers exist for checking
//! computed results against reference values and never panic.
//!
//! A NaN component compares unequal to everything, itself included, because
//! `NaN <= tolerance` is false.

use super::{Matrix3, Vector3};

#[inline]
fn within(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

/// True iff `|a[i] - b[i]| <= tolerance` for `i` in 0..3.
///
/// ```
/// use srreal_core::r3::{vectors_almost_equal, Vector3};
///
/// let a = Vector3::new(1.0, 2.0, 3.0);
/// let b = Vector3::new(1.0, 2.0, 3.0 + 1e-13);
/// assert!(vectors_almost_equal(&a, &b, 1e-12));
/// assert!(!vectors_almost_equal(&a, &b, 0.0));
/// ```
pub fn vectors_almost_equal(a: &Vector3, b: &Vector3, tolerance: f64) -> bool {
    a.to_array()
        .iter()
        .zip(b.to_array().iter())
        .all(|(&x, &y)| within(x, y, tolerance))
}

/// True iff all nine corresponding entries satisfy `|A[i][j] - B[i][j]| <= tolerance`.
pub fn matrices_almost_equal(a: &Matrix3, b: &Matrix3, tolerance: f64) -> bool {
    a.elements()
        .iter()
        .flatten()
        .zip(b.elements().iter().flatten())
        .all(|(&x, &y)| within(x, y, tolerance))
}
