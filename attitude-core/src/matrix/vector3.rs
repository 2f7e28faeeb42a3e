//! 3D Cartesian vectors for attitude and frame-transform math.
//!
//! A [`Vector3`] is three `f64` components in one backing array. The components
//! can be reached by name ([`x`](Vector3::x), [`set_y`](Vector3::set_y), ...) or
//! by index (`v[0]`, `v[2] = 1.0`); both paths read and write the same storage.
//!
//! ```
//! use attitude_core::Vector3;
//!
//! let mut v = Vector3::new(1.0, 2.0, 3.0);
//! v[0] = 10.0;
//! assert_eq!(v.x(), 10.0);
//! v.set_z(30.0);
//! assert_eq!(v[2], 30.0);
//! ```
//!
//! # Arithmetic
//!
//! All four arithmetic operators work component-wise, including `*` and `/`
//! between two vectors (the Hadamard product and quotient). Use
//! [`dot`](Vector3::dot) and [`cross`](Vector3::cross) for the products with
//! geometric meaning.
//!
//! Scalars may appear on either side. For `-` and `/` the order matters:
//! `2.0 - v` is `[2 - x, 2 - y, 2 - z]`, and `2.0 / v` is `[2 / x, 2 / y, 2 / z]`.
//!
//! ```
//! use attitude_core::Vector3;
//!
//! let a = Vector3::new(1.0, 2.0, 4.0);
//! assert_eq!(a * a, Vector3::new(1.0, 4.0, 16.0));
//! assert_eq!(8.0 / a, Vector3::new(8.0, 4.0, 2.0));
//! assert_eq!(1.0 - a, Vector3::new(0.0, -1.0, -3.0));
//! ```
//!
//! # Unit Vectors
//!
//! [`normalize`](Vector3::normalize) scales a vector to unit length in place and
//! [`unit`](Vector3::unit) returns a scaled copy. A zero vector has no direction,
//! so both leave it untouched instead of producing NaNs:
//!
//! ```
//! use attitude_core::Vector3;
//!
//! let v = Vector3::new(3.0, 4.0, 0.0);
//! assert_eq!(v.unit(), Vector3::new(0.6, 0.8, 0.0));
//! assert_eq!(Vector3::zeros().unit(), Vector3::zeros());
//! ```

use super::write_row;
use crate::{AttitudeError, AttitudeResult, MathErrorKind};
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// A 3D Cartesian vector of `f64` components.
///
/// # Construction
///
/// ```
/// use attitude_core::Vector3;
///
/// let v = Vector3::new(1.0, 2.0, 3.0);
/// let zero = Vector3::zeros();
/// let ones = Vector3::splat(1.0);
/// let x = Vector3::x_axis();
/// let from_arr = Vector3::from_array([1.0, 2.0, 3.0]);
/// let from_slice = Vector3::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(from_arr, from_slice);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Vector3 {
    data: [f64; 3],
}

impl Vector3 {
    /// Creates a new vector from x, y, z components.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { data: [x, y, z] }
    }

    /// Returns the zero vector `[0, 0, 0]`.
    #[inline]
    pub fn zeros() -> Self {
        Self::splat(0.0)
    }

    /// Returns a vector with all three components set to `val`.
    #[inline]
    pub fn splat(val: f64) -> Self {
        Self { data: [val; 3] }
    }

    /// Returns the unit vector along the X axis `[1, 0, 0]`.
    #[inline]
    pub fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Returns the unit vector along the Y axis `[0, 1, 0]`.
    #[inline]
    pub fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// Returns the unit vector along the Z axis `[0, 0, 1]`.
    #[inline]
    pub fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Creates a vector from a `[f64; 3]` array.
    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self { data: arr }
    }

    /// Creates a vector from the first three elements of a slice.
    ///
    /// Extra elements are ignored. Returns an error if the slice holds fewer
    /// than three values.
    pub fn from_slice(values: &[f64]) -> AttitudeResult<Self> {
        match values {
            [x, y, z, ..] => Ok(Self::new(*x, *y, *z)),
            _ => Err(AttitudeError::math_error(
                "Vector3::from_slice",
                MathErrorKind::InsufficientLength,
                &format!("expected at least 3 values, got {}", values.len()),
            )),
        }
    }

    /// Returns the components as a `[f64; 3]` array.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        self.data
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.data[0]
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.data[1]
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.data[2]
    }

    #[inline]
    pub fn set_x(&mut self, value: f64) {
        self.data[0] = value;
    }

    #[inline]
    pub fn set_y(&mut self, value: f64) {
        self.data[1] = value;
    }

    #[inline]
    pub fn set_z(&mut self, value: f64) {
        self.data[2] = value;
    }

    /// Returns the component at the given index (0=x, 1=y, 2=z).
    ///
    /// Returns an error for indices outside 0-2. For unchecked access, use
    /// indexing syntax `v[i]`.
    pub fn get(&self, index: usize) -> AttitudeResult<f64> {
        self.data
            .get(index)
            .copied()
            .ok_or_else(|| out_of_bounds("Vector3::get", index))
    }

    /// Sets the component at the given index (0=x, 1=y, 2=z).
    ///
    /// Returns an error for indices outside 0-2. For unchecked access, use
    /// indexing syntax `v[i] = value`.
    pub fn set(&mut self, index: usize, value: f64) -> AttitudeResult<()> {
        let slot = self
            .data
            .get_mut(index)
            .ok_or_else(|| out_of_bounds("Vector3::set", index))?;
        *slot = value;
        Ok(())
    }

    /// Returns the Euclidean length `sqrt(x² + y² + z²)`.
    ///
    /// Never negative; zero only for the zero vector.
    #[inline]
    pub fn norm(&self) -> f64 {
        libm::sqrt(self.norm_squared())
    }

    /// Returns the squared length.
    ///
    /// Cheaper than [`norm`](Self::norm) when only comparing lengths.
    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Scales this vector to unit length in place.
    ///
    /// A vector whose norm is exactly zero is left unchanged.
    ///
    /// ```
    /// use attitude_core::Vector3;
    ///
    /// let mut v = Vector3::new(0.0, 0.0, 2.0);
    /// v.normalize();
    /// assert_eq!(v, Vector3::z_axis());
    ///
    /// let mut zero = Vector3::zeros();
    /// zero.normalize();
    /// assert_eq!(zero, Vector3::zeros());
    /// ```
    pub fn normalize(&mut self) {
        let mag = self.norm();
        if mag != 0.0 {
            *self /= mag;
        }
    }

    /// Returns a unit vector pointing in the same direction.
    ///
    /// If the vector has zero length it is returned unchanged.
    pub fn unit(&self) -> Self {
        let mut v = *self;
        v.normalize();
        v
    }

    /// Computes the dot (inner) product.
    ///
    /// ```
    /// use attitude_core::Vector3;
    ///
    /// let c = Vector3::new(1.0, 2.0, 3.0);
    /// let d = Vector3::new(4.0, 5.0, 6.0);
    /// assert_eq!(c.dot(&d), 32.0);
    /// ```
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.data[0] * other.data[0] + self.data[1] * other.data[1] + self.data[2] * other.data[2]
    }

    /// Computes the cross product `self × other`.
    ///
    /// The result is perpendicular to both inputs with direction given by the
    /// right-hand rule. Anti-commutative: `a × b = -(b × a)`, and `a × a = 0`.
    ///
    /// ```
    /// use attitude_core::Vector3;
    ///
    /// let z = Vector3::x_axis().cross(&Vector3::y_axis());
    /// assert_eq!(z, Vector3::z_axis());
    /// ```
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Returns the largest absolute difference between corresponding components.
    pub fn max_difference(&self, other: &Self) -> f64 {
        self.data
            .iter()
            .zip(other.data.iter())
            .fold(0.0_f64, |acc, (a, b)| acc.max((a - b).abs()))
    }

    #[inline]
    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            data: self.data.map(f),
        }
    }

    #[inline]
    fn zip_with(self, rhs: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        let [a0, a1, a2] = self.data;
        let [b0, b1, b2] = rhs.data;
        Self::new(f(a0, b0), f(a1, b1), f(a2, b2))
    }
}

fn out_of_bounds(operation: &str, index: usize) -> AttitudeError {
    AttitudeError::math_error(
        operation,
        MathErrorKind::IndexOutOfBounds,
        &format!("index {} out of bounds (valid range: 0-2)", index),
    )
}

/// Implements a component-wise operator for vector⊕vector, vector⊕scalar and
/// scalar⊕vector, plus both compound-assignment forms.
macro_rules! impl_componentwise_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sym:tt) => {
        impl $Op for Vector3 {
            type Output = Self;

            fn $op(self, rhs: Self) -> Self {
                self.zip_with(rhs, |a, b| a $sym b)
            }
        }

        impl $Op<f64> for Vector3 {
            type Output = Self;

            fn $op(self, scalar: f64) -> Self {
                self.map(|a| a $sym scalar)
            }
        }

        impl $Op<Vector3> for f64 {
            type Output = Vector3;

            fn $op(self, vec: Vector3) -> Vector3 {
                vec.map(|a| self $sym a)
            }
        }

        impl $OpAssign for Vector3 {
            fn $op_assign(&mut self, rhs: Self) {
                *self = $Op::$op(*self, rhs);
            }
        }

        impl $OpAssign<f64> for Vector3 {
            fn $op_assign(&mut self, scalar: f64) {
                *self = $Op::$op(*self, scalar);
            }
        }
    };
}

impl_componentwise_op!(Add, add, AddAssign, add_assign, +);
impl_componentwise_op!(Sub, sub, SubAssign, sub_assign, -);
impl_componentwise_op!(Mul, mul, MulAssign, mul_assign, *);
impl_componentwise_op!(Div, div, DivAssign, div_assign, /);

/// -Vector
impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

/// v[i] indexing (panics if i > 2)
impl Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match self.data.get(index) {
            Some(value) => value,
            None => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

/// v[i] = value mutable indexing (panics if i > 2)
impl IndexMut<usize> for Vector3 {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match self.data.get_mut(index) {
            Some(value) => value,
            None => panic!("Vector3 index out of bounds: {}", index),
        }
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        v.data
    }
}

/// Renders as `[x, y, z]`. A precision (`{:.3}`) applies to every component.
impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_row(f, &self.data)
    }
}
