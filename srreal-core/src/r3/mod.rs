//! Fixed-dimension linear algebra in real 3D space.
//!
//! - [`Vector3`]: 3-component real vector
//! - [`Matrix3`]: 3x3 real matrix, row-major
//! - [`vectors_almost_equal`], [`matrices_almost_equal`]: absolute-tolerance comparison
//!
//! The free functions mirror the methods for callers that prefer
//! `r3::dot(&a, &b)` over `a.dot(&b)`. The two matrix-vector products carry
//! their orientation in the name: [`product_mv`] is `M · v`, [`product_vm`]
//! is `v · M`.
//!
//! ```
//! use srreal_core::r3::{self, Matrix3, Vector3};
//!
//! let a = Vector3::new(1.0, 0.0, 0.0);
//! let b = Vector3::new(0.0, 1.0, 0.0);
//! assert_eq!(r3::cross(&a, &b), Vector3::new(0.0, 0.0, 1.0));
//! assert_eq!(r3::product_mv(&Matrix3::identity(), &a), a);
//! ```

mod compare;
mod matrix3;
mod vector3;

pub use compare::{matrices_almost_equal, vectors_almost_equal};
pub use matrix3::Matrix3;
pub use vector3::Vector3;

/// Number of spatial dimensions.
pub const NDIM: usize = 3;

/// Euclidean length of `v`.
#[inline]
pub fn norm(v: &Vector3) -> f64 {
    v.norm()
}

/// Dot product of `a` and `b`.
#[inline]
pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
    a.dot(b)
}

/// Right-handed cross product `a × b`.
#[inline]
pub fn cross(a: &Vector3, b: &Vector3) -> Vector3 {
    a.cross(b)
}

/// Distance between points `a` and `b`.
#[inline]
pub fn distance(a: &Vector3, b: &Vector3) -> f64 {
    a.distance(b)
}

/// `M · v`, treating `v` as a column vector.
#[inline]
pub fn product_mv(m: &Matrix3, v: &Vector3) -> Vector3 {
    m.product_vector(v)
}

/// `v · M`, treating `v` as a row vector.
#[inline]
pub fn product_vm(v: &Vector3, m: &Matrix3) -> Vector3 {
    v.product_matrix(m)
}

/// Matrix product `a · b`.
#[inline]
pub fn product_mm(a: &Matrix3, b: &Matrix3) -> Matrix3 {
    a.multiply(b)
}

#[inline]
pub fn transpose(m: &Matrix3) -> Matrix3 {
    m.transpose()
}

#[inline]
pub fn determinant(m: &Matrix3) -> f64 {
    m.determinant()
}

/// Inverse of `m`; fails for a singular matrix.
#[inline]
pub fn inverse(m: &Matrix3) -> crate::SrRealResult<Matrix3> {
    m.inverse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_functions_match_methods() {
        let a = Vector3::new(0.3, -1.2, 2.5);
        let b = Vector3::new(-0.7, 0.4, 1.1);
        let m = Matrix3::new(1.0, 2.0, 3.0, 0.5, -1.0, 0.25, 4.0, 0.0, 1.5);

        assert_eq!(norm(&a), a.norm());
        assert_eq!(dot(&a, &b), a.dot(&b));
        assert_eq!(cross(&a, &b), a.cross(&b));
        assert_eq!(distance(&a, &b), (a - b).norm());
        assert_eq!(product_mv(&m, &a), m * a);
        assert_eq!(product_vm(&a, &m), a * m);
        assert_eq!(product_vm(&a, &m), product_mv(&transpose(&m), &a));
        assert_eq!(product_mm(&m, &m), m * m);
        assert_eq!(determinant(&m), m.determinant());
        assert_eq!(inverse(&m).unwrap(), m.inverse().unwrap());
    }

    #[test]
    fn test_ndim() {
        assert_eq!(NDIM, Vector3::zeros().to_array().len());
        assert_eq!(NDIM, Matrix3::zeros().elements().len());
    }
}
