//! Fixed-size linear algebra for attitude and orientation math.
//!
//! `attitude-core` provides the two value types that rotation matrices, frame
//! transforms and direction-cosine work are built from: a 3-component vector and
//! a 3×3 matrix of `f64`. Both are `Copy`, hold no heap data, and expose the full
//! set of arithmetic operators plus the usual linear-algebra utilities.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`matrix`] | [`Vector3`] and [`Matrix33`] with their operators |
//! | [`linalg`] | Free functions: `norm`, `unit`, `cross`, `diag`, `inverse`, ... |
//! | [`errors`] | [`AttitudeError`] and [`AttitudeResult`] |
//! | [`constants`] | Numerical tolerances |
//!
//! # Example
//!
//! ```
//! use attitude_core::{Matrix33, Vector3};
//!
//! // Body axes expressed in the reference frame become the columns of a DCM.
//! let dcm = Matrix33::from_columns(&Vector3::y_axis(), &-Vector3::x_axis(), &Vector3::z_axis());
//! assert_eq!(dcm.determinant(), 1.0);
//!
//! let v = dcm * Vector3::new(1.0, 0.0, 0.0);
//! assert_eq!(v, Vector3::new(0.0, 1.0, 0.0));
//!
//! let back = dcm.inverse()? * v;
//! assert_eq!(back, Vector3::x_axis());
//! # Ok::<(), attitude_core::AttitudeError>(())
//! ```
//!
//! # Design Notes
//!
//! - **One backing array**: named accessors (`x()`, `m23()`) and indexing
//!   (`v[0]`, `m[1][2]`) read and write the same storage.
//!
//! - **Operators are component-wise** except `Matrix33 * Matrix33`,
//!   `Matrix33 / Matrix33` and `Matrix33 * Vector3`, which follow linear algebra.
//!
//! - **Failures are explicit**: inverting a singular matrix returns
//!   [`AttitudeError::SingularMatrix`]. Normalizing a zero vector is a defined
//!   no-op.

pub mod constants;
pub mod errors;
pub mod linalg;
pub mod matrix;

pub use errors::{AttitudeError, AttitudeResult, MathErrorKind};
pub use linalg::Diagonal;
pub use matrix::{Matrix33, Vector3};

pub mod test_helpers;
