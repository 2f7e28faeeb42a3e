//! Free-function forms of the vector and matrix utilities.
//!
//! Each function forwards to the corresponding method on [`Vector3`] or
//! [`Matrix33`]. They read naturally in formula-heavy code:
//!
//! ```
//! use attitude_core::linalg::{cross, dot, norm, unit};
//! use attitude_core::Vector3;
//!
//! let a = Vector3::new(1.0, 2.0, 2.0);
//! let b = Vector3::new(0.0, 0.0, 1.0);
//! assert_eq!(norm(&a), 3.0);
//! assert_eq!(dot(&a, &b), 2.0);
//! assert_eq!(cross(&unit(&b), &b), Vector3::zeros());
//! ```
//!
//! [`diag`] works in both directions through the [`Diagonal`] trait: a matrix
//! yields its diagonal as a vector, and a vector yields a diagonal matrix.
//!
//! ```
//! use attitude_core::linalg::diag;
//! use attitude_core::{Matrix33, Vector3};
//!
//! let v = Vector3::new(1.0, 2.0, 3.0);
//! let m: Matrix33 = diag(&v);
//! assert_eq!(diag(&m), v);
//! ```

use crate::{AttitudeResult, Matrix33, Vector3};

/// Euclidean length of `v`.
#[inline]
pub fn norm(v: &Vector3) -> f64 {
    v.norm()
}

/// Scales `v` to unit length in place; a zero vector is left unchanged.
#[inline]
pub fn normalize(v: &mut Vector3) {
    v.normalize();
}

/// Returns a unit-length copy of `v`; a zero vector is returned unchanged.
#[inline]
pub fn unit(v: &Vector3) -> Vector3 {
    v.unit()
}

#[inline]
pub fn dot(lhs: &Vector3, rhs: &Vector3) -> f64 {
    lhs.dot(rhs)
}

#[inline]
pub fn cross(lhs: &Vector3, rhs: &Vector3) -> Vector3 {
    lhs.cross(rhs)
}

/// Conversion between a matrix diagonal and a diagonal matrix.
pub trait Diagonal {
    type Output;

    fn diag(&self) -> Self::Output;
}

/// The main diagonal `[m11, m22, m33]`.
impl Diagonal for Matrix33 {
    type Output = Vector3;

    fn diag(&self) -> Vector3 {
        self.diagonal()
    }
}

/// A matrix with this vector on the diagonal and zeros elsewhere.
impl Diagonal for Vector3 {
    type Output = Matrix33;

    fn diag(&self) -> Matrix33 {
        Matrix33::from_diagonal(self)
    }
}

/// Extracts a diagonal ([`Matrix33`] → [`Vector3`]) or builds a diagonal
/// matrix ([`Vector3`] → [`Matrix33`]).
#[inline]
pub fn diag<T: Diagonal>(value: &T) -> T::Output {
    value.diag()
}

#[inline]
pub fn transpose(m: &Matrix33) -> Matrix33 {
    m.transpose()
}

#[inline]
pub fn determinant(m: &Matrix33) -> f64 {
    m.determinant()
}

/// Inverse of `m`, or [`SingularMatrix`](crate::AttitudeError::SingularMatrix).
#[inline]
pub fn inverse(m: &Matrix33) -> AttitudeResult<Matrix33> {
    m.inverse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_functions_match_methods() {
        let v = Vector3::new(3.0, 4.0, 12.0);
        assert_eq!(norm(&v), 13.0);
        assert_eq!(unit(&v), v.unit());

        let mut w = v;
        normalize(&mut w);
        assert_eq!(w, v.unit());
        assert_eq!(v, Vector3::new(3.0, 4.0, 12.0));

        let a = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(dot(&a, &v), a.dot(&v));
        assert_eq!(cross(&a, &v), a.cross(&v));
    }

    #[test]
    fn test_diag_both_directions() {
        let m = Matrix33::from_rows([[1.0, 9.0, 9.0], [9.0, 2.0, 9.0], [9.0, 9.0, 3.0]]);
        assert_eq!(diag(&m), Vector3::new(1.0, 2.0, 3.0));

        let d = diag(&diag(&m));
        assert_eq!(
            d,
            Matrix33::from_rows([[1.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 3.0]])
        );
    }

    #[test]
    fn test_matrix_functions_match_methods() {
        let m = Matrix33::from_rows([[2.0, 1.0, 0.0], [0.0, 1.0, 0.0], [1.0, 0.0, 1.0]]);
        assert_eq!(transpose(&m), m.transpose());
        assert_eq!(determinant(&m), 2.0);
        assert_eq!(inverse(&m).unwrap(), m.inverse().unwrap());
        assert!(inverse(&Matrix33::zeros()).is_err());
    }
}
