//! Error types for the R3 linear-algebra core.
//!
//! Everything in [`r3`](crate::r3) is closed-form arithmetic on three or nine
//! scalars, so almost nothing can fail at runtime. The two exceptions are:
//!
//! | Variant | Use Case | Recoverable? |
//! |---------|----------|--------------|
//! | [`ArgumentCount`](SrRealError::ArgumentCount) | Slice of the wrong length passed to a runtime constructor | No |
//! | [`MathError`](SrRealError::MathError) | Checked index out of range, singular matrix inversion | No |
//!
//! Both are usage errors. Fix the call site rather than retrying.
//!
//! ```
//! use srreal_core::{SrRealError, Vector3};
//!
//! let err = Vector3::from_slice(&[1.0, 2.0]).unwrap_err();
//! assert!(matches!(
//!     err,
//!     SrRealError::ArgumentCount { expected: 3, found: 2, .. }
//! ));
//! ```

use thiserror::Error;

/// Classification of numerical failures.
///
/// Used with [`SrRealError::MathError`] to tell apart the ways an operation can
/// refuse its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathErrorKind {
    /// Attempted division by an exactly-zero value (singular matrix).
    DivisionByZero,
    /// Input value is invalid for the operation.
    InvalidInput,
}

/// Unified error type for the R3 core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SrRealError {
    /// A runtime constructor received the wrong number of initializer values.
    #[error("{target} requires exactly {expected} values, got {found}")]
    ArgumentCount {
        target: &'static str,
        expected: usize,
        found: usize,
    },

    /// Numerical computation failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },
}

/// Convenience alias for `Result<T, SrRealError>`.
pub type SrRealResult<T> = Result<T, SrRealError>;

impl SrRealError {
    /// Creates an [`ArgumentCount`](Self::ArgumentCount) error.
    pub fn argument_count(target: &'static str, expected: usize, found: usize) -> Self {
        Self::ArgumentCount {
            target,
            expected,
            found,
        }
    }

    /// Creates a [`MathError`](Self::MathError) with the given kind.
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_count_message() {
        let err = SrRealError::argument_count("Matrix3", 9, 4);
        assert_eq!(err.to_string(), "Matrix3 requires exactly 9 values, got 4");
    }

    #[test]
    fn test_math_error_with_kind() {
        let err = SrRealError::math_error(
            "Matrix3::inverse",
            MathErrorKind::DivisionByZero,
            "matrix is singular",
        );
        assert!(err.to_string().contains("Math error in Matrix3::inverse"));
        assert!(err.to_string().contains("DivisionByZero"));
        assert!(err.to_string().contains("matrix is singular"));
    }

    #[test]
    fn test_argument_count_fields() {
        match SrRealError::argument_count("Vector3", 3, 0) {
            SrRealError::ArgumentCount {
                target,
                expected,
                found,
            } => {
                assert_eq!(target, "Vector3");
                assert_eq!(expected, 3);
                assert_eq!(found, 0);
            }
            other => panic!("unexpected variant {:?}", other),
        }
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<SrRealError>();
        _assert_sync::<SrRealError>();
    }
}
