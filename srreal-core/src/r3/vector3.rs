//! Three-component Cartesian vectors.
//!
//! Atom positions, lattice translations, bond directions and reciprocal-space
//! vectors are all [`Vector3`] values. The type is a thin wrapper around
//! `[f64; 3]`: it is `Copy`, never allocates, and has no identity beyond its
//! components.
//!
//! # Construction
//!
//! The component count is part of the signature, so a wrong arity is a
//! compile error:
//!
//! ```
//! use srreal_core::Vector3;
//!
//! let v = Vector3::new(3.0, 4.0, 0.0);
//! assert_eq!(v.norm(), 5.0);
//! ```
//!
//! When the values come from a runtime buffer, [`Vector3::from_slice`] checks
//! the length and reports [`ArgumentCount`](crate::SrRealError::ArgumentCount):
//!
//! ```
//! use srreal_core::Vector3;
//!
//! assert!(Vector3::from_slice(&[1.0, 2.0, 3.0]).is_ok());
//! assert!(Vector3::from_slice(&[1.0, 2.0, 3.0, 4.0]).is_err());
//! ```
//!
//! # Dot and Cross Products
//!
//! The cross product follows the right-hand rule, so `x × y = z`:
//!
//! ```
//! use srreal_core::Vector3;
//!
//! let c = Vector3::x_axis().cross(&Vector3::y_axis());
//! assert_eq!(c, Vector3::z_axis());
//! assert_eq!(Vector3::x_axis().dot(&Vector3::y_axis()), 0.0);
//! ```
use super::Matrix3;
use crate::{MathErrorKind, SrRealError, SrRealResult};
use std::fmt;

/// A 3D real vector, components indexed 0, 1, 2.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Vector3 {
    components: [f64; 3],
}

impl Vector3 {
    /// Creates a vector from its three components, in order.
    #[inline]
    pub fn new(x0: f64, x1: f64, x2: f64) -> Self {
        Self {
            components: [x0, x1, x2],
        }
    }

    /// Returns the zero vector `[0, 0, 0]`.
    #[inline]
    pub fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Returns the unit vector `[1, 0, 0]`.
    #[inline]
    pub fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Returns the unit vector `[0, 1, 0]`.
    #[inline]
    pub fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// Returns the unit vector `[0, 0, 1]`.
    #[inline]
    pub fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Creates a vector from a `[f64; 3]` array.
    #[inline]
    pub fn from_array(components: [f64; 3]) -> Self {
        Self { components }
    }

    /// Creates a vector from a slice that must hold exactly 3 values.
    ///
    /// Any other length is rejected with
    /// [`ArgumentCount`](SrRealError::ArgumentCount).
    pub fn from_slice(values: &[f64]) -> SrRealResult<Self> {
        let components: [f64; 3] = values.try_into().map_err(|_| {
            tracing::debug!(
                target_type = "Vector3",
                expected = 3,
                found = values.len(),
                "rejected initializer slice"
            );
            SrRealError::argument_count("Vector3", 3, values.len())
        })?;
        Ok(Self::from_array(components))
    }

    /// Returns the components as a `[f64; 3]` array.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        self.components
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.components[0]
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.components[1]
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.components[2]
    }

    /// Returns the component at `index`, or an error for indices outside 0-2.
    ///
    /// For unchecked access use `v[i]`.
    pub fn get(&self, index: usize) -> SrRealResult<f64> {
        self.components.get(index).copied().ok_or_else(|| {
            SrRealError::math_error(
                "Vector3::get",
                MathErrorKind::InvalidInput,
                &format!("index {} out of bounds (valid range: 0-2)", index),
            )
        })
    }

    /// Sets the component at `index`, or returns an error for indices outside 0-2.
    pub fn set(&mut self, index: usize, value: f64) -> SrRealResult<()> {
        match self.components.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(SrRealError::math_error(
                "Vector3::set",
                MathErrorKind::InvalidInput,
                &format!("index {} out of bounds (valid range: 0-2)", index),
            )),
        }
    }

    /// Euclidean length `sqrt(v0² + v1² + v2²)`.
    ///
    /// Zero only for the zero vector. Overflowing inputs give `inf`.
    #[inline]
    pub fn norm(&self) -> f64 {
        libm::sqrt(self.norm_squared())
    }

    /// Squared length, without the square root.
    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Dot product `a0*b0 + a1*b1 + a2*b2`.
    ///
    /// The terms are always summed in index order, so `a.dot(&b)` and
    /// `b.dot(&a)` agree bit for bit.
    ///
    /// ```
    /// use srreal_core::Vector3;
    ///
    /// let c = Vector3::new(1.0, 2.0, 3.0);
    /// let d = Vector3::new(4.0, 5.0, 6.0);
    /// assert_eq!(c.dot(&d), 32.0);
    /// ```
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        let a = &self.components;
        let b = &other.components;
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    /// Right-handed cross product
    /// `(a1*b2 - a2*b1, a2*b0 - a0*b2, a0*b1 - a1*b0)`.
    pub fn cross(&self, other: &Self) -> Self {
        let a = &self.components;
        let b = &other.components;
        Self::new(
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        )
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(&self, other: &Self) -> f64 {
        (*self - *other).norm()
    }

    /// Returns a unit vector in the same direction.
    ///
    /// The zero vector is returned unchanged.
    pub fn normalize(&self) -> Self {
        let n = self.norm();
        if n == 0.0 {
            *self
        } else {
            *self / n
        }
    }

    /// Row-vector product `v · M`: component `j` is `Σᵢ v[i] * M[i][j]`.
    ///
    /// Same as `M.transpose().product_vector(self)` without building the
    /// transpose. Also available as `v * m`.
    ///
    /// ```
    /// use srreal_core::{Matrix3, Vector3};
    ///
    /// let m = Matrix3::new(
    ///     1.0, 2.0, 0.0,
    ///     0.0, 1.0, 0.0,
    ///     0.0, 0.0, 1.0,
    /// );
    /// let v = Vector3::new(1.0, 1.0, 1.0);
    /// assert_eq!(v.product_matrix(&m), Vector3::new(1.0, 3.0, 1.0));
    /// assert_eq!(m.product_vector(&v), Vector3::new(3.0, 1.0, 1.0));
    /// ```
    pub fn product_matrix(&self, matrix: &Matrix3) -> Self {
        let v = &self.components;
        let m = matrix.elements();
        Self::new(
            v[0] * m[0][0] + v[1] * m[1][0] + v[2] * m[2][0],
            v[0] * m[0][1] + v[1] * m[1][1] + v[2] * m[2][1],
            v[0] * m[0][2] + v[1] * m[1][2] + v[2] * m[2][2],
        )
    }

    /// True when every component differs from `other` by at most `tolerance`.
    ///
    /// See [`vectors_almost_equal`](super::vectors_almost_equal).
    #[inline]
    pub fn almost_equal(&self, other: &Self, tolerance: f64) -> bool {
        super::vectors_almost_equal(self, other, tolerance)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(components: [f64; 3]) -> Self {
        Self::from_array(components)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        v.components
    }
}

impl TryFrom<&[f64]> for Vector3 {
    type Error = SrRealError;

    fn try_from(values: &[f64]) -> SrRealResult<Self> {
        Self::from_slice(values)
    }
}

/// Vector + Vector
impl std::ops::Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self[0] + rhs[0], self[1] + rhs[1], self[2] + rhs[2])
    }
}

impl std::ops::AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Vector - Vector
impl std::ops::Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self[0] - rhs[0], self[1] - rhs[1], self[2] - rhs[2])
    }
}

impl std::ops::SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Vector * scalar
impl std::ops::Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self[0] * scalar, self[1] * scalar, self[2] * scalar)
    }
}

/// scalar * Vector
impl std::ops::Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        vec * self
    }
}

impl std::ops::MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, scalar: f64) {
        *self = *self * scalar;
    }
}

/// Vector * Matrix (row vector on the left)
impl std::ops::Mul<Matrix3> for Vector3 {
    type Output = Vector3;

    fn mul(self, matrix: Matrix3) -> Vector3 {
        self.product_matrix(&matrix)
    }
}

impl std::ops::Mul<&Matrix3> for Vector3 {
    type Output = Vector3;

    fn mul(self, matrix: &Matrix3) -> Vector3 {
        self.product_matrix(matrix)
    }
}

/// Vector / scalar
impl std::ops::Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self[0] / scalar, self[1] / scalar, self[2] / scalar)
    }
}

impl std::ops::DivAssign<f64> for Vector3 {
    fn div_assign(&mut self, scalar: f64) {
        *self = *self / scalar;
    }
}

/// -Vector
impl std::ops::Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self[0], -self[1], -self[2])
    }
}

/// v[i] indexing (panics if i > 2)
impl std::ops::Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match self.components.get(index) {
            Some(value) => value,
            None => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

/// v[i] = value (panics if i > 2)
impl std::ops::IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match self.components.get_mut(index) {
            Some(value) => value,
            None => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({:.9}, {:.9}, {:.9})", self[0], self[1], self[2])
    }
}
