/// Relative determinant magnitude at or below which a matrix is treated as singular.
///
/// [`Matrix33::inverse`](crate::Matrix33::inverse) compares `|det|` against this
/// value times the product of the row norms, which bounds `|det|` from above.
/// The test is therefore independent of the matrix's scale. Use
/// [`Matrix33::try_inverse_with_tolerance`](crate::Matrix33::try_inverse_with_tolerance)
/// for an absolute threshold.
pub const SINGULAR_RELATIVE_EPSILON: f64 = 1e-12;
