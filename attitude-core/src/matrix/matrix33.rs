//! General 3×3 matrices for attitude and frame-transform math.
//!
//! Rotation matrices, direction-cosine matrices, inertia tensors and frame
//! transforms all fit in a [`Matrix33`]. The type itself imposes no structure:
//! it need not be orthogonal, symmetric or invertible.
//!
//! # Storage Layout
//!
//! Elements are stored row-major as `[[f64; 3]; 3]`. The same nine slots can be
//! reached three ways:
//!
//! - named elements [`m11`](Matrix33::m11) .. [`m33`](Matrix33::m33), where
//!   `mRC` is row `R`, column `C` (1-based, as written on paper)
//! - row-major indexing `m[row][col]` or `m[(row, col)]` (0-based)
//! - columns as vectors through [`column`](Matrix33::column) and
//!   [`set_column`](Matrix33::set_column)
//!
//! ```
//! use attitude_core::{Matrix33, Vector3};
//!
//! let mut m = Matrix33::zeros();
//! m[1][0] = 4.0;
//! assert_eq!(m.m21(), 4.0);
//!
//! m.set_column(2, &Vector3::new(7.0, 8.0, 9.0));
//! assert_eq!(m[(0, 2)], 7.0);
//! assert_eq!(m.m33(), 9.0);
//! ```
//!
//! # Operators
//!
//! `+` and `-` between matrices are element-wise. `*` between matrices is the
//! row-by-column product, and `/` multiplies by the inverse of the right-hand
//! side:
//!
//! ```text
//! (A * B)[i][j] = Σk A[i][k] · B[k][j]
//! A / B         = A * inverse(B)
//! ```
//!
//! Matrix division panics when the divisor is singular, the same way integer
//! division by zero panics. Use [`checked_div`](Matrix33::checked_div) or
//! [`inverse`](Matrix33::inverse) to get an error instead.
//!
//! Scalars apply element-wise on either side. `2.0 / m` divides 2 by each
//! element; it is not an inversion.
//!
//! A matrix times a [`Vector3`] is the linear map `r[i] = Σk m[i][k] · v[k]`
//! and yields a [`Vector3`].
//!
//! # Rotations
//!
//! [`rotation_x`](Matrix33::rotation_x), [`rotation_y`](Matrix33::rotation_y) and
//! [`rotation_z`](Matrix33::rotation_z) build elementary frame rotations. They
//! rotate the coordinate frame rather than the vector, so a positive rotation of
//! 90° about Z takes `[1, 0, 0]` to `[0, -1, 0]`. Compose them by multiplication;
//! the rightmost matrix acts first.
//!
//! ```
//! use attitude_core::{Matrix33, Vector3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let r = Matrix33::rotation_z(FRAC_PI_2);
//! let v = r * Vector3::x_axis();
//! assert!((v - Vector3::new(0.0, -1.0, 0.0)).norm() < 1e-15);
//!
//! // The inverse of a rotation is its transpose.
//! let back = r.transpose() * v;
//! assert!((back - Vector3::x_axis()).norm() < 1e-15);
//! ```

use super::{write_row, Vector3};
use crate::constants::SINGULAR_RELATIVE_EPSILON;
use crate::{AttitudeError, AttitudeResult, MathErrorKind};
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// A 3×3 matrix of `f64` elements in row-major order.
///
/// # Construction
///
/// ```
/// use attitude_core::{Matrix33, Vector3};
///
/// let zero = Matrix33::zeros();
/// let fives = Matrix33::splat(5.0);
/// let eye = Matrix33::identity();
///
/// let m = Matrix33::from_row_major([
///     1.0, 2.0, 3.0,
///     4.0, 5.0, 6.0,
///     7.0, 8.0, 9.0,
/// ]);
/// assert_eq!(m, Matrix33::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]));
///
/// // Vectors become columns.
/// let cols = Matrix33::from_columns(&Vector3::x_axis(), &Vector3::y_axis(), &Vector3::z_axis());
/// assert_eq!(cols, eye);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Matrix33 {
    elements: [[f64; 3]; 3],
}

impl Matrix33 {
    /// Returns the zero matrix.
    pub fn zeros() -> Self {
        Self::splat(0.0)
    }

    /// Returns a matrix with all nine elements set to `val`.
    pub fn splat(val: f64) -> Self {
        Self {
            elements: [[val; 3]; 3],
        }
    }

    /// Creates the 3×3 identity matrix.
    ///
    /// Every call builds a new value.
    pub fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Creates a matrix from rows: `rows[i][j]` is row `i`, column `j`.
    pub fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { elements: rows }
    }

    /// Creates a matrix from nine values in row-major order.
    pub fn from_row_major(values: [f64; 9]) -> Self {
        let [a, b, c, d, e, f, g, h, i] = values;
        Self::from_rows([[a, b, c], [d, e, f], [g, h, i]])
    }

    /// Creates a matrix from the first nine values of a slice, row-major.
    ///
    /// Returns an error if the slice holds fewer than nine values.
    pub fn from_slice(values: &[f64]) -> AttitudeResult<Self> {
        let head: [f64; 9] = values
            .get(..9)
            .and_then(|s| s.try_into().ok())
            .ok_or_else(|| {
                AttitudeError::math_error(
                    "Matrix33::from_slice",
                    MathErrorKind::InsufficientLength,
                    &format!("expected at least 9 values, got {}", values.len()),
                )
            })?;
        Ok(Self::from_row_major(head))
    }

    /// Creates a matrix whose columns are `c1`, `c2`, `c3`.
    ///
    /// `c1` fills `m11, m21, m31`, `c2` fills `m12, m22, m32`, and so on. In
    /// attitude work this builds a direction-cosine matrix from the basis vectors
    /// of one frame expressed in another.
    pub fn from_columns(c1: &Vector3, c2: &Vector3, c3: &Vector3) -> Self {
        Self::from_rows([
            [c1.x(), c2.x(), c3.x()],
            [c1.y(), c2.y(), c3.y()],
            [c1.z(), c2.z(), c3.z()],
        ])
    }

    /// Creates a diagonal matrix with `diagonal` on the main diagonal.
    pub fn from_diagonal(diagonal: &Vector3) -> Self {
        Self::from_rows([
            [diagonal.x(), 0.0, 0.0],
            [0.0, diagonal.y(), 0.0],
            [0.0, 0.0, diagonal.z()],
        ])
    }

    /// Elementary frame rotation about the X axis by `phi` radians.
    ///
    /// ```text
    /// Rx(phi) = | 1    0         0       |
    ///           | 0    cos(phi)  sin(phi) |
    ///           | 0   -sin(phi)  cos(phi) |
    /// ```
    pub fn rotation_x(phi: f64) -> Self {
        let (s, c) = libm::sincos(phi);
        Self::from_rows([[1.0, 0.0, 0.0], [0.0, c, s], [0.0, -s, c]])
    }

    /// Elementary frame rotation about the Y axis by `theta` radians.
    ///
    /// ```text
    /// Ry(theta) = | cos(theta)  0  -sin(theta) |
    ///             |     0       1       0      |
    ///             | sin(theta)  0   cos(theta) |
    /// ```
    pub fn rotation_y(theta: f64) -> Self {
        let (s, c) = libm::sincos(theta);
        Self::from_rows([[c, 0.0, -s], [0.0, 1.0, 0.0], [s, 0.0, c]])
    }

    /// Elementary frame rotation about the Z axis by `psi` radians.
    ///
    /// ```text
    /// Rz(psi) = | cos(psi)  sin(psi)  0 |
    ///           |-sin(psi)  cos(psi)  0 |
    ///           |    0         0      1 |
    /// ```
    pub fn rotation_z(psi: f64) -> Self {
        let (s, c) = libm::sincos(psi);
        Self::from_rows([[c, s, 0.0], [-s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Returns a reference to the underlying row-major array.
    pub fn elements(&self) -> &[[f64; 3]; 3] {
        &self.elements
    }

    /// Returns the nine elements in row-major order.
    pub fn to_row_major(&self) -> [f64; 9] {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.elements;
        [a, b, c, d, e, f, g, h, i]
    }

    /// Returns the element at `row`, `col` (0-based).
    ///
    /// Returns an error for indices outside 0-2. For unchecked access, use
    /// `m[(row, col)]` or `m[row][col]`.
    pub fn get(&self, row: usize, col: usize) -> AttitudeResult<f64> {
        self.elements
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .ok_or_else(|| out_of_bounds("Matrix33::get", row, col))
    }

    /// Sets the element at `row`, `col` (0-based).
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> AttitudeResult<()> {
        let slot = self
            .elements
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or_else(|| out_of_bounds("Matrix33::set", row, col))?;
        *slot = value;
        Ok(())
    }

    /// Returns row `i` as a vector. Panics if `i > 2`.
    pub fn row(&self, i: usize) -> Vector3 {
        Vector3::from_array(self[i])
    }

    /// Returns column `j` as a vector. Panics if `j > 2`.
    pub fn column(&self, j: usize) -> Vector3 {
        Vector3::new(self[0][j], self[1][j], self[2][j])
    }

    /// Overwrites column `j` with `v`. Panics if `j > 2`.
    pub fn set_column(&mut self, j: usize, v: &Vector3) {
        for (i, row) in self.elements.iter_mut().enumerate() {
            row[j] = v[i];
        }
    }

    /// Returns the three columns, the inverse of [`from_columns`](Self::from_columns).
    pub fn columns(&self) -> [Vector3; 3] {
        [self.column(0), self.column(1), self.column(2)]
    }

    /// Returns the main diagonal `[m11, m22, m33]`.
    pub fn diagonal(&self) -> Vector3 {
        Vector3::new(self.elements[0][0], self.elements[1][1], self.elements[2][2])
    }

    /// Sum of the diagonal elements.
    pub fn trace(&self) -> f64 {
        self.elements[0][0] + self.elements[1][1] + self.elements[2][2]
    }

    /// Multiplies this matrix by another, returning `self * other`.
    ///
    /// Matrix multiplication is associative but not commutative.
    ///
    /// ```
    /// use attitude_core::Matrix33;
    ///
    /// let a = Matrix33::from_rows([[1.0, 2.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
    /// let b = Matrix33::from_rows([[1.0, 0.0, 0.0], [3.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
    /// assert_eq!(a.multiply(&b).m11(), 7.0);
    /// assert_eq!(b.multiply(&a).m11(), 1.0);
    /// ```
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

    /// Applies this matrix to a vector, returning `self * v`.
    pub fn apply(&self, v: &Vector3) -> Vector3 {
        let m = &self.elements;
        Vector3::new(
            m[0][0] * v.x() + m[0][1] * v.y() + m[0][2] * v.z(),
            m[1][0] * v.x() + m[1][1] * v.y() + m[1][2] * v.z(),
            m[2][0] * v.x() + m[2][1] * v.y() + m[2][2] * v.z(),
        )
    }

    /// Returns the transpose: `result[i][j] = self[j][i]`.
    pub fn transpose(&self) -> Self {
        let m = &self.elements;
        Self::from_rows([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Computes the determinant by cofactor expansion along the first row.
    ///
    /// +1 for a proper rotation, -1 for a reflection, 0 for a singular matrix.
    pub fn determinant(&self) -> f64 {
        let m = &self.elements;

        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Computes the inverse using the adjugate divided by the determinant.
    ///
    /// Returns [`AttitudeError::SingularMatrix`] when `|det|` is at or below
    /// [`SINGULAR_RELATIVE_EPSILON`] times the product of the row norms, so
    /// `1e-6 * I` inverts while a rank-deficient matrix with large entries does not.
    ///
    /// ```
    /// use attitude_core::Matrix33;
    ///
    /// let m = Matrix33::from_rows([[2.0, 0.0, 0.0], [0.0, 4.0, 0.0], [0.0, 0.0, 8.0]]);
    /// let inv = m.inverse().unwrap();
    /// assert_eq!(inv.m22(), 0.25);
    ///
    /// assert!(Matrix33::zeros().inverse().unwrap_err().is_singular());
    /// ```
    pub fn inverse(&self) -> AttitudeResult<Self> {
        self.inverse_within("Matrix33::inverse", self.singular_threshold())
    }

    /// Like [`inverse`](Self::inverse) with an absolute threshold on `|det|`.
    pub fn try_inverse_with_tolerance(&self, epsilon: f64) -> AttitudeResult<Self> {
        self.inverse_within("Matrix33::try_inverse_with_tolerance", epsilon)
    }

    // Hadamard: |det| <= |r1| |r2| |r3|, zero for a zero row.
    fn singular_threshold(&self) -> f64 {
        let scale: f64 = (0..3).map(|i| self.row(i).norm()).product();
        SINGULAR_RELATIVE_EPSILON * scale
    }

    fn inverse_within(&self, operation: &str, threshold: f64) -> AttitudeResult<Self> {
        let det = self.determinant();
        if det.is_nan() || det.abs() <= threshold {
            tracing::debug!(operation, determinant = det, threshold, "rejecting singular matrix");
            return Err(AttitudeError::singular_matrix(operation, det));
        }

        let m = &self.elements;
        let adjugate = Self::from_rows([
            [
                m[1][1] * m[2][2] - m[1][2] * m[2][1],
                -(m[0][1] * m[2][2] - m[0][2] * m[2][1]),
                m[0][1] * m[1][2] - m[0][2] * m[1][1],
            ],
            [
                -(m[1][0] * m[2][2] - m[1][2] * m[2][0]),
                m[0][0] * m[2][2] - m[0][2] * m[2][0],
                -(m[0][0] * m[1][2] - m[0][2] * m[1][0]),
            ],
            [
                m[1][0] * m[2][1] - m[1][1] * m[2][0],
                -(m[0][0] * m[2][1] - m[0][1] * m[2][0]),
                m[0][0] * m[1][1] - m[0][1] * m[1][0],
            ],
        ]);

        Ok(adjugate / det)
    }

    /// Returns `self * inverse(rhs)`, or an error if `rhs` is singular.
    pub fn checked_div(&self, rhs: &Self) -> AttitudeResult<Self> {
        let inv = rhs.inverse_within("Matrix33::checked_div", rhs.singular_threshold())?;
        Ok(self.multiply(&inv))
    }

    /// Checks whether this is a proper rotation within `tolerance`.
    ///
    /// Requires determinant +1 and `M * Mᵀ = I`.
    pub fn is_rotation(&self, tolerance: f64) -> bool {
        if (self.determinant() - 1.0).abs() > tolerance {
            return false;
        }

        self.multiply(&self.transpose())
            .max_difference(&Self::identity())
            <= tolerance
    }

    /// Returns the largest absolute difference between corresponding elements.
    pub fn max_difference(&self, other: &Self) -> f64 {
        self.to_row_major()
            .iter()
            .zip(other.to_row_major().iter())
            .fold(0.0_f64, |acc, (a, b)| acc.max((a - b).abs()))
    }

    #[inline]
    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            elements: self.elements.map(|row| row.map(&f)),
        }
    }

    #[inline]
    fn zip_with(self, rhs: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        let mut result = self.elements;
        for (row, rhs_row) in result.iter_mut().zip(rhs.elements.iter()) {
            for (cell, b) in row.iter_mut().zip(rhs_row.iter()) {
                *cell = f(*cell, *b);
            }
        }
        Self::from_rows(result)
    }
}

fn out_of_bounds(operation: &str, row: usize, col: usize) -> AttitudeError {
    AttitudeError::math_error(
        operation,
        MathErrorKind::IndexOutOfBounds,
        &format!("index ({}, {}) out of bounds (valid range: 0-2)", row, col),
    )
}

/// Generates `mRC()` getters and `set_mRC()` setters over the backing array.
macro_rules! named_elements {
    ($($get:ident, $set:ident => [$r:literal][$c:literal];)*) => {
        impl Matrix33 {
            $(
                #[inline]
                pub fn $get(&self) -> f64 {
                    self.elements[$r][$c]
                }

                #[inline]
                pub fn $set(&mut self, value: f64) {
                    self.elements[$r][$c] = value;
                }
            )*
        }
    };
}

named_elements! {
    m11, set_m11 => [0][0];
    m12, set_m12 => [0][1];
    m13, set_m13 => [0][2];
    m21, set_m21 => [1][0];
    m22, set_m22 => [1][1];
    m23, set_m23 => [1][2];
    m31, set_m31 => [2][0];
    m32, set_m32 => [2][1];
    m33, set_m33 => [2][2];
}

/// Element-wise matrix⊕scalar and scalar⊕matrix, plus the scalar compound form.
macro_rules! impl_scalar_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sym:tt) => {
        impl $Op<f64> for Matrix33 {
            type Output = Self;

            fn $op(self, scalar: f64) -> Self {
                self.map(|a| a $sym scalar)
            }
        }

        impl $Op<Matrix33> for f64 {
            type Output = Matrix33;

            fn $op(self, m: Matrix33) -> Matrix33 {
                m.map(|a| self $sym a)
            }
        }

        impl $OpAssign<f64> for Matrix33 {
            fn $op_assign(&mut self, scalar: f64) {
                *self = $Op::$op(*self, scalar);
            }
        }
    };
}

impl_scalar_op!(Add, add, AddAssign, add_assign, +);
impl_scalar_op!(Sub, sub, SubAssign, sub_assign, -);
impl_scalar_op!(Mul, mul, MulAssign, mul_assign, *);
impl_scalar_op!(Div, div, DivAssign, div_assign, /);

impl Add for Matrix33 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Sub for Matrix33 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl AddAssign for Matrix33 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Matrix33 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Neg for Matrix33 {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

impl Mul for Matrix33 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl Mul<&Matrix33> for Matrix33 {
    type Output = Matrix33;

    fn mul(self, rhs: &Matrix33) -> Matrix33 {
        self.multiply(rhs)
    }
}

impl Mul<Matrix33> for &Matrix33 {
    type Output = Matrix33;

    fn mul(self, rhs: Matrix33) -> Matrix33 {
        self.multiply(&rhs)
    }
}

impl Mul<&Matrix33> for &Matrix33 {
    type Output = Matrix33;

    fn mul(self, rhs: &Matrix33) -> Matrix33 {
        self.multiply(rhs)
    }
}

impl MulAssign for Matrix33 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

/// Matrix / Matrix (panics if `rhs` is singular)
impl Div for Matrix33 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        match self.checked_div(&rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{}", err),
        }
    }
}

/// Matrix /= Matrix (panics if `rhs` is singular)
impl DivAssign for Matrix33 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Mul<Vector3> for Matrix33 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        self.apply(&vec)
    }
}

impl Mul<Vector3> for &Matrix33 {
    type Output = Vector3;

    fn mul(self, vec: Vector3) -> Vector3 {
        self.apply(&vec)
    }
}

/// m[row] yields the row, so m[row][col] reads row-major (panics if row > 2)
impl Index<usize> for Matrix33 {
    type Output = [f64; 3];

    fn index(&self, row: usize) -> &[f64; 3] {
        match self.elements.get(row) {
            Some(r) => r,
            None => panic!("Matrix33 row index out of bounds: {}", row),
        }
    }
}

impl IndexMut<usize> for Matrix33 {
    fn index_mut(&mut self, row: usize) -> &mut [f64; 3] {
        match self.elements.get_mut(row) {
            Some(r) => r,
            None => panic!("Matrix33 row index out of bounds: {}", row),
        }
    }
}

impl Index<(usize, usize)> for Matrix33 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self[row][col]
    }
}

impl IndexMut<(usize, usize)> for Matrix33 {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self[row][col]
    }
}

impl From<[[f64; 3]; 3]> for Matrix33 {
    fn from(rows: [[f64; 3]; 3]) -> Self {
        Self::from_rows(rows)
    }
}

/// One row per line, each as `[a, b, c]`.
impl fmt::Display for Matrix33 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write_row(f, row)?;
        }
        Ok(())
    }
}
