//! Error types for vector and matrix operations.
//!
//! Almost everything in this crate is a total function. The exceptions are
//! collected in [`AttitudeError`]:
//!
//! | Variant | Raised by | Meaning |
//! |---------|-----------|---------|
//! | [`SingularMatrix`](AttitudeError::SingularMatrix) | `inverse`, `checked_div` | Determinant is zero within tolerance |
//! | [`MathError`](AttitudeError::MathError) | `from_slice`, `get`, `set` | Bad index or too few input values |
//!
//! Normalizing a zero vector is deliberately *not* an error; see
//! [`Vector3::normalize`](crate::Vector3::normalize).
//!
//! # Usage
//!
//! ```
//! use attitude_core::{AttitudeError, Matrix33};
//!
//! let err = Matrix33::zeros().inverse().unwrap_err();
//! assert!(err.is_singular());
//! assert!(matches!(err, AttitudeError::SingularMatrix { .. }));
//! ```

use thiserror::Error;

/// Classification of non-singular math errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathErrorKind {
    /// Component or element index outside the valid range.
    IndexOutOfBounds,
    /// Slice constructor received fewer values than the type holds.
    InsufficientLength,
}

/// Unified error type for vector and matrix operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AttitudeError {
    /// The matrix has no inverse.
    #[error("Singular matrix in {operation}: determinant {determinant:e} is within tolerance of zero")]
    SingularMatrix {
        operation: String,
        determinant: f64,
    },

    /// Invalid input to an otherwise total operation.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },
}

/// Alias for `Result<T, AttitudeError>`.
pub type AttitudeResult<T> = Result<T, AttitudeError>;

impl AttitudeError {
    /// Creates a [`SingularMatrix`](Self::SingularMatrix) error.
    pub fn singular_matrix(operation: &str, determinant: f64) -> Self {
        Self::SingularMatrix {
            operation: operation.to_string(),
            determinant,
        }
    }

    /// Creates a [`MathError`](Self::MathError).
    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Returns `true` if this error came from inverting a singular matrix.
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::SingularMatrix { .. })
    }

    /// Returns the [`MathErrorKind`] for math errors, `None` otherwise.
    pub fn math_kind(&self) -> Option<MathErrorKind> {
        match self {
            Self::MathError { kind, .. } => Some(*kind),
            Self::SingularMatrix { .. } => None,
        }
    }
}

// No From impls: every error is constructed where it happens.
