//! Tolerance assertions for floating-point vectors and matrices.
//!
//! Exact equality is right for values produced by exact arithmetic (axis
//! vectors, identity products); anything that goes through `sqrt`, `sincos` or a
//! division needs a tolerance. These helpers report the offending component and
//! both values on failure.

use crate::{Matrix33, Vector3};

/// Maps an `f64` onto a `u64` whose ordering matches the float ordering.
#[inline]
pub fn f64_to_ordered_u64(x: f64) -> u64 {
    let bits = x.to_bits();
    if bits & 0x8000_0000_0000_0000 != 0 {
        !bits
    } else {
        bits | 0x8000_0000_0000_0000
    }
}

/// Distance between two floats in units of least precision.
#[inline]
pub fn ulp_diff(a: f64, b: f64) -> u64 {
    f64_to_ordered_u64(a).abs_diff(f64_to_ordered_u64(b))
}

#[track_caller]
pub fn assert_ulp_le(a: f64, b: f64, max_ulp: u64, ctx: &str) {
    if a == 0.0 && b == 0.0 {
        return;
    }
    assert!(a.is_finite() && b.is_finite(), "non-finite value in {}", ctx);
    let d = ulp_diff(a, b);
    assert!(
        d <= max_ulp,
        "{}: ULP={} exceeds {}, a={} (0x{:016x}) b={} (0x{:016x})",
        ctx,
        d,
        max_ulp,
        a,
        a.to_bits(),
        b,
        b.to_bits()
    );
}

/// Asserts every component of `actual` is within `tolerance` of `expected`.
#[track_caller]
pub fn assert_vector_near(actual: &Vector3, expected: &Vector3, tolerance: f64) {
    for i in 0..3 {
        let diff = (actual[i] - expected[i]).abs();
        assert!(
            diff <= tolerance,
            "component {} differs by {:e} (tolerance {:e}): actual {} expected {}",
            i,
            diff,
            tolerance,
            actual,
            expected
        );
    }
}

/// Asserts every element of `actual` is within `tolerance` of `expected`.
#[track_caller]
pub fn assert_matrix_near(actual: &Matrix33, expected: &Matrix33, tolerance: f64) {
    for row in 0..3 {
        for col in 0..3 {
            let diff = (actual[row][col] - expected[row][col]).abs();
            assert!(
                diff <= tolerance,
                "element ({}, {}) differs by {:e} (tolerance {:e})\nactual:\n{}\nexpected:\n{}",
                row,
                col,
                diff,
                tolerance,
                actual,
                expected
            );
        }
    }
}

#[macro_export]
macro_rules! assert_ulp_lt {
    ($a:expr, $b:expr, $max_ulp:expr) => {
        $crate::test_helpers::assert_ulp_le(
            $a,
            $b,
            $max_ulp,
            &format!(
                "ULP check failed: {} vs {} (max_ulp={})",
                stringify!($a),
                stringify!($b),
                $max_ulp
            ),
        )
    };
    ($a:expr, $b:expr, $max_ulp:expr, $($arg:tt)*) => {
        $crate::test_helpers::assert_ulp_le($a, $b, $max_ulp, &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ulp_diff_adjacent_floats() {
        let a = 1.0_f64;
        let b = f64::from_bits(a.to_bits() + 1);
        assert_eq!(ulp_diff(a, b), 1);
        assert_eq!(ulp_diff(b, a), 1);
        assert_eq!(ulp_diff(-0.0, 0.0), 1);
    }

    #[test]
    fn test_assert_ulp_lt_macro() {
        crate::assert_ulp_lt!(0.1 + 0.2, 0.3, 1);
    }

    #[test]
    #[should_panic(expected = "component 1 differs")]
    fn test_assert_vector_near_reports_component() {
        assert_vector_near(
            &Vector3::new(1.0, 2.0, 3.0),
            &Vector3::new(1.0, 2.1, 3.0),
            1e-3,
        );
    }

    #[test]
    #[should_panic(expected = "element (2, 0) differs")]
    fn test_assert_matrix_near_reports_element() {
        let mut m = Matrix33::identity();
        m[2][0] = 0.5;
        assert_matrix_near(&m, &Matrix33::identity(), 1e-3);
    }
}
