//! 3D vectors and 3×3 matrices.
//!
//! - [`Vector3`]: 3D Cartesian vector
//! - [`Matrix33`]: general 3×3 matrix, also used for rotations

mod matrix33;
mod vector3;

pub use matrix33::Matrix33;
pub use vector3::Vector3;

use std::fmt;

/// Writes `[a, b, c]`, forwarding the formatter's precision to each value.
pub(crate) fn write_row(f: &mut fmt::Formatter<'_>, row: &[f64; 3]) -> fmt::Result {
    f.write_str("[")?;
    for (i, value) in row.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        match f.precision() {
            Some(precision) => write!(f, "{:.*}", precision, value)?,
            None => write!(f, "{}", value)?,
        }
    }
    f.write_str("]")
}
