//! 3x3 real matrices.
//!
//! [`Matrix3`] holds lattice bases, metric tensors and the rotational part of
//! symmetry operations. Unlike a rotation-only type it places no constraint on
//! its entries: orthogonality, symmetry or invertibility are properties of
//! particular matrices, not of the type.
//!
//! # Storage Layout
//!
//! Elements are stored row-major as `[[f64; 3]; 3]`, zero-indexed. The nine
//! arguments of [`Matrix3::new`] fill row 0, then row 1, then row 2.
//!
//! # Two Products With Vectors
//!
//! A matrix acts on a [`Vector3`] from either side, and the two orientations are
//! separate named operations:
//!
//! ```text
//! M * v  (column vector)          v * M  (row vector)
//! r_i = Σ_j M[i][j] * v[j]        r_j = Σ_i v[i] * M[i][j]
//! ```
//!
//! ```
//! use srreal_core::{Matrix3, Vector3};
//!
//! let m = Matrix3::new(
//!     0.0, 1.0, 0.0,
//!     0.0, 0.0, 1.0,
//!     1.0, 0.0, 0.0,
//! );
//! let v = Vector3::new(1.0, 2.0, 3.0);
//!
//! assert_eq!(m * v, Vector3::new(2.0, 3.0, 1.0));
//! assert_eq!(v * m, Vector3::new(3.0, 1.0, 2.0));
//! assert_eq!(v * m, m.transpose() * v);
//! ```
//!
//! # Inversion
//!
//! [`Matrix3::inverse`] works for any non-singular matrix. For a rotation the
//! transpose is the inverse and is cheaper and exact.
use super::Vector3;
use crate::{MathErrorKind, SrRealError, SrRealResult};
use std::fmt;

/// A 3x3 real matrix in row-major order.
///
/// ```
/// use srreal_core::Matrix3;
///
/// let m = Matrix3::new(
///     1.0, 2.0, 3.0,
///     4.0, 5.0, 6.0,
///     7.0, 8.0, 10.0,
/// );
/// assert_eq!(m[(1, 2)], 6.0);
/// assert_eq!(m.row(2).to_array(), [7.0, 8.0, 10.0]);
/// assert_eq!(m.determinant(), -3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Matrix3 {
    elements: [[f64; 3]; 3],
}

impl Matrix3 {
    /// Creates a matrix from nine values in row-major order.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub fn new(
        m00: f64, m01: f64, m02: f64,
        m10: f64, m11: f64, m12: f64,
        m20: f64, m21: f64, m22: f64,
    ) -> Self {
        Self::from_rows([
            [m00, m01, m02],
            [m10, m11, m12],
            [m20, m21, m22],
        ])
    }

    /// Creates a matrix from a row-major 3x3 array: `rows[i][j]` is row `i`, column `j`.
    #[inline]
    pub fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { elements: rows }
    }

    /// Creates a matrix from a row-major slice that must hold exactly 9 values.
    ///
    /// Any other length is rejected with
    /// [`ArgumentCount`](SrRealError::ArgumentCount).
    ///
    /// ```
    /// use srreal_core::{Matrix3, SrRealError};
    ///
    /// let flat = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
    /// assert_eq!(Matrix3::from_slice(&flat).unwrap(), Matrix3::identity());
    ///
    /// let err = Matrix3::from_slice(&flat[..8]).unwrap_err();
    /// assert_eq!(err, SrRealError::argument_count("Matrix3", 9, 8));
    /// ```
    pub fn from_slice(values: &[f64]) -> SrRealResult<Self> {
        if values.len() != 9 {
            tracing::debug!(
                target_type = "Matrix3",
                expected = 9,
                found = values.len(),
                "rejected initializer slice"
            );
            return Err(SrRealError::argument_count("Matrix3", 9, values.len()));
        }

        let mut elements = [[0.0; 3]; 3];
        for (row, chunk) in elements.iter_mut().zip(values.chunks_exact(3)) {
            row.copy_from_slice(chunk);
        }
        Ok(Self::from_rows(elements))
    }

    /// The identity matrix.
    pub fn identity() -> Self {
        Self::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// The all-zero matrix.
    pub fn zeros() -> Self {
        Self::from_rows([[0.0; 3]; 3])
    }

    /// Returns the element at `row`, `col`. Panics if either is `>= 3`.
    ///
    /// Matrix indices are nearly always loop counters or literals, so the
    /// plain accessor panics like `m[(row, col)]`. Use
    /// [`try_get`](Self::try_get) for indices from outside input, the
    /// counterpart of [`Vector3::get`].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    /// Sets the element at `row`, `col`. Panics if either is `>= 3`.
    ///
    /// See [`try_set`](Self::try_set) for the checked form.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.elements[row][col] = value;
    }

    /// Returns the element at `row`, `col`, or an error if either is outside 0-2.
    ///
    /// ```
    /// use srreal_core::Matrix3;
    ///
    /// let m = Matrix3::identity();
    /// assert_eq!(m.try_get(2, 2).unwrap(), 1.0);
    /// assert!(m.try_get(0, 3).is_err());
    /// ```
    pub fn try_get(&self, row: usize, col: usize) -> SrRealResult<f64> {
        self.elements
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or_else(|| Self::index_error("Matrix3::try_get", row, col))
    }

    /// Sets the element at `row`, `col`, or returns an error if either is
    /// outside 0-2. The matrix is untouched on error.
    pub fn try_set(&mut self, row: usize, col: usize, value: f64) -> SrRealResult<()> {
        match self.elements.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Self::index_error("Matrix3::try_set", row, col)),
        }
    }

    fn index_error(operation: &str, row: usize, col: usize) -> SrRealError {
        SrRealError::math_error(
            operation,
            MathErrorKind::InvalidInput,
            &format!(
                "index ({}, {}) out of bounds (valid range: 0-2)",
                row, col
            ),
        )
    }

    /// Returns a reference to the underlying row-major array.
    #[inline]
    pub fn elements(&self) -> &[[f64; 3]; 3] {
        &self.elements
    }

    /// Row `i` as a vector. Panics if `i >= 3`.
    #[inline]
    pub fn row(&self, i: usize) -> Vector3 {
        Vector3::from_array(self.elements[i])
    }

    /// Column `j` as a vector. Panics if `j >= 3`.
    #[inline]
    pub fn column(&self, j: usize) -> Vector3 {
        let m = &self.elements;
        Vector3::new(m[0][j], m[1][j], m[2][j])
    }

    /// Column-vector product `M · v`: component `i` is `Σⱼ M[i][j] * v[j]`.
    ///
    /// Also available as `m * v`.
    pub fn product_vector(&self, vector: &Vector3) -> Vector3 {
        let m = &self.elements;
        let v = vector.to_array();
        Vector3::new(
            m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
            m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
            m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
        )
    }

    /// Matrix product `self · other`.
    ///
    /// Applying the result to a vector is the same as applying `other` first,
    /// then `self`.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0; 3]; 3];

        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += self.elements[i][k] * other.elements[k][j];
                }
            }
        }

        Self::from_rows(result)
    }

    /// Determinant by cofactor expansion along row 0.
    pub fn determinant(&self) -> f64 {
        let m = &self.elements;

        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self {
        let m = &self.elements;
        Self::from_rows([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Inverse via the adjugate divided by the determinant.
    ///
    /// Fails with [`MathErrorKind::DivisionByZero`] when the determinant is
    /// exactly zero. Nearly singular matrices are inverted as-is; check
    /// [`determinant`](Self::determinant) first if conditioning matters.
    ///
    /// ```
    /// use srreal_core::Matrix3;
    ///
    /// let m = Matrix3::new(
    ///     2.0, 0.0, 0.0,
    ///     0.0, 4.0, 0.0,
    ///     0.0, 0.0, 0.5,
    /// );
    /// let inv = m.inverse().unwrap();
    /// assert_eq!(inv, Matrix3::new(0.5, 0.0, 0.0, 0.0, 0.25, 0.0, 0.0, 0.0, 2.0));
    ///
    /// assert!(Matrix3::zeros().inverse().is_err());
    /// ```
    pub fn inverse(&self) -> SrRealResult<Self> {
        let det = self.determinant();
        if det == 0.0 {
            tracing::debug!(determinant = det, "refusing to invert singular matrix");
            return Err(SrRealError::math_error(
                "Matrix3::inverse",
                MathErrorKind::DivisionByZero,
                "matrix is singular (determinant is zero)",
            ));
        }

        let m = &self.elements;
        let adjugate = [
            [
                m[1][1] * m[2][2] - m[1][2] * m[2][1],
                m[0][2] * m[2][1] - m[0][1] * m[2][2],
                m[0][1] * m[1][2] - m[0][2] * m[1][1],
            ],
            [
                m[1][2] * m[2][0] - m[1][0] * m[2][2],
                m[0][0] * m[2][2] - m[0][2] * m[2][0],
                m[0][2] * m[1][0] - m[0][0] * m[1][2],
            ],
            [
                m[1][0] * m[2][1] - m[1][1] * m[2][0],
                m[0][1] * m[2][0] - m[0][0] * m[2][1],
                m[0][0] * m[1][1] - m[0][1] * m[1][0],
            ],
        ];

        let mut result = adjugate;
        for cell in result.iter_mut().flatten() {
            *cell /= det;
        }
        Ok(Self::from_rows(result))
    }

    /// Largest absolute difference between corresponding elements.
    pub fn max_difference(&self, other: &Self) -> f64 {
        self.elements
            .iter()
            .flatten()
            .zip(other.elements.iter().flatten())
            .fold(0.0_f64, |acc, (a, b)| acc.max((a - b).abs()))
    }

    /// True when all nine entries differ from `other` by at most `tolerance`.
    ///
    /// See [`matrices_almost_equal`](super::matrices_almost_equal).
    #[inline]
    pub fn almost_equal(&self, other: &Self, tolerance: f64) -> bool {
        super::matrices_almost_equal(self, other, tolerance)
    }
}

impl From<[[f64; 3]; 3]> for Matrix3 {
    fn from(rows: [[f64; 3]; 3]) -> Self {
        Self::from_rows(rows)
    }
}

impl TryFrom<&[f64]> for Matrix3 {
    type Error = SrRealError;

    fn try_from(values: &[f64]) -> SrRealResult<Self> {
        Self::from_slice(values)
    }
}

impl std::ops::Add for Matrix3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut result = self.elements;
        for (cell, other) in result.iter_mut().flatten().zip(rhs.elements.iter().flatten()) {
            *cell += other;
        }
        Self::from_rows(result)
    }
}

impl std::ops::Sub for Matrix3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut result = self.elements;
        for (cell, other) in result.iter_mut().flatten().zip(rhs.elements.iter().flatten()) {
            *cell -= other;
        }
        Self::from_rows(result)
    }
}

/// Matrix * scalar
impl std::ops::Mul<f64> for Matrix3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        let mut result = self.elements;
        for cell in result.iter_mut().flatten() {
            *cell *= scalar;
        }
        Self::from_rows(result)
    }
}

impl std::ops::Mul for Matrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&Matrix3> for &Matrix3 {
    type Output = Matrix3;

    fn mul(self, rhs: &Matrix3) -> Matrix3 {
        self.multiply(rhs)
    }
}

/// Matrix * Vector (column vector on the right)
impl std::ops::Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        self.product_vector(&vec)
    }
}

impl std::ops::Mul<Vector3> for &Matrix3 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        self.product_vector(&vec)
    }
}

impl std::ops::Index<(usize, usize)> for Matrix3 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.elements[row][col]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Matrix3 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.elements[row][col]
    }
}

impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix3:")?;
        for row in &self.elements {
            writeln!(f, "  [{:12.9} {:12.9} {:12.9}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRECISION: f64 = 1.0e-12;

    fn sample() -> Matrix3 {
        Matrix3::new(
            0.459631856585519,
            0.726448904209060,
            0.085844209317482,
            0.806838095807669,
            0.240116998848762,
            0.305032463662873,
            0.019487235483683,
            0.580605953831255,
            0.726077578738676,
        )
    }

    #[test]
    fn test_new_is_row_major() {
        let m = Matrix3::new(0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m.get(i, j), (3 * i + j) as f64);
            }
        }
        assert_eq!(m.row(1), Vector3::new(3.0, 4.0, 5.0));
        assert_eq!(m.column(1), Vector3::new(1.0, 4.0, 7.0));
    }

    #[test]
    fn test_from_slice_arity() {
        let values: Vec<f64> = (0..9u8).map(f64::from).collect();
        let m = Matrix3::try_from(values.as_slice()).unwrap();
        assert_eq!(m, Matrix3::new(0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0));

        for n in [0, 3, 8, 10] {
            let values = vec![1.0; n];
            let err = Matrix3::from_slice(&values).unwrap_err();
            assert_eq!(err, SrRealError::argument_count("Matrix3", 9, n));
        }
    }

    #[test]
    fn test_identity_and_set() {
        let mut m = Matrix3::identity();
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(0, 1), 0.0);
        m.set(0, 1, 0.5);
        assert_eq!(m[(0, 1)], 0.5);
        m[(2, 0)] = -1.0;
        assert_eq!(m.elements()[2][0], -1.0);
        assert_eq!(Matrix3::zeros(), Matrix3::default());
    }

    #[test]
    fn test_checked_access() {
        let mut m = Matrix3::new(0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0);
        assert_eq!(m.try_get(1, 2).unwrap(), 5.0);
        m.try_set(2, 0, -6.0).unwrap();
        assert_eq!(m.get(2, 0), -6.0);

        for (row, col) in [(3, 0), (0, 3), (7, 7)] {
            let err = m.try_get(row, col).unwrap_err();
            assert!(matches!(
                err,
                SrRealError::MathError {
                    kind: MathErrorKind::InvalidInput,
                    ..
                }
            ));
            assert!(err
                .to_string()
                .contains(&format!("index ({}, {}) out of bounds", row, col)));
        }

        let before = m;
        let err = m.try_set(0, 9, 1.0).unwrap_err();
        assert!(err.to_string().contains("Matrix3::try_set"));
        assert_eq!(m, before);
    }

    #[test]
    #[should_panic]
    fn test_get_panics_out_of_range() {
        let _ = Matrix3::identity().get(3, 0);
    }

    #[test]
    fn test_product_vector() {
        let v = Vector3::new(0.608652521912322, 0.519716469261062, 0.842577887601566);
        let expected = Vector3::new(0.729633980805669, 0.872890409522479, 0.925388343907868);
        assert!(expected.almost_equal(&sample().product_vector(&v), PRECISION));
        assert_eq!(sample() * v, sample().product_vector(&v));
        assert_eq!(&sample() * v, sample().product_vector(&v));
    }

    #[test]
    fn test_row_product_matches_transpose() {
        let v = Vector3::new(0.608652521912322, 0.519716469261062, 0.842577887601566);
        let m = sample();
        assert_eq!(v * m, m.transpose() * v);
        assert_ne!(v * m, m * v);

        let symmetric = m + m.transpose();
        assert_eq!(v * symmetric, symmetric * v);
    }

    #[test]
    fn test_elementwise_arithmetic() {
        let a = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(a + Matrix3::identity(), Matrix3::new(2.0, 2.0, 3.0, 4.0, 6.0, 6.0, 7.0, 8.0, 10.0));
        assert_eq!(a - a, Matrix3::zeros());
        assert_eq!(a * 2.0, a + a);
    }

    #[test]
    fn test_multiply() {
        let a = Matrix3::new(1.0, 2.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 3.0);
        let b = Matrix3::new(0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0);
        assert_eq!(a * b, Matrix3::new(2.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 3.0));
        assert_eq!(&a * &b, a.multiply(&b));
        assert_eq!(a * Matrix3::identity(), a);

        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!((a * b) * v, a * (b * v));
    }

    #[test]
    fn test_determinant_and_transpose() {
        assert_eq!(Matrix3::identity().determinant(), 1.0);
        let m = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(m.determinant(), 0.0);
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().row(0), m.column(0));
        assert!((sample().determinant() - sample().transpose().determinant()).abs() < PRECISION);
    }

    #[test]
    fn test_inverse() {
        let m = sample();
        let inv = m.inverse().unwrap();
        assert!((m * inv).almost_equal(&Matrix3::identity(), PRECISION));
        assert!((inv * m).almost_equal(&Matrix3::identity(), PRECISION));
    }

    #[test]
    fn test_inverse_singular() {
        let m = Matrix3::new(1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 0.0, 0.0, 1.0);
        match m.inverse() {
            Err(SrRealError::MathError { kind, .. }) => {
                assert_eq!(kind, MathErrorKind::DivisionByZero)
            }
            other => panic!("expected singular matrix error, got {:?}", other),
        }
    }

    #[test]
    fn test_max_difference() {
        let a = Matrix3::identity();
        let b = Matrix3::new(1.0, 0.1, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.75);
        assert!((a.max_difference(&b) - 0.25).abs() < 1e-15);
        assert_eq!(a.max_difference(&a), 0.0);
    }

    #[test]
    fn test_display() {
        let s = format!("{}", Matrix3::identity());
        assert!(s.starts_with("Matrix3:\n"));
        assert_eq!(s.lines().count(), 4);
        assert!(s.contains("[ 1.000000000  0.000000000  0.000000000]"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let original = sample();
        let json = serde_json::to_string(&original).unwrap();
        assert!(json.starts_with("[["));
        let back: Matrix3 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }
}
