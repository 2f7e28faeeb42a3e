use approx::assert_abs_diff_eq;
use attitude_core::linalg::{cross, determinant, diag, dot, inverse, norm, normalize, transpose, unit};
use attitude_core::test_helpers::{assert_matrix_near, assert_vector_near};
use attitude_core::{Matrix33, Vector3};

fn sample_vectors() -> Vec<Vector3> {
    vec![
        Vector3::zeros(),
        Vector3::x_axis(),
        Vector3::new(3.0, 4.0, 0.0),
        Vector3::new(-1.5, 2.25, 7.0),
        Vector3::new(1e-3, -2e3, 0.5),
        Vector3::new(0.1, 0.2, 0.3),
        Vector3::splat(-4.0),
        Vector3::new(123.456, -0.001, 42.0),
    ]
}

fn sample_matrices() -> Vec<Matrix33> {
    vec![
        Matrix33::identity(),
        Matrix33::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]]),
        Matrix33::from_rows([[2.0, -1.0, 0.0], [-1.0, 2.0, -1.0], [0.0, -1.0, 2.0]]),
        Matrix33::from_rows([[0.5, 3.0, -2.0], [1.0, 0.0, 4.0], [-3.0, 1.5, 1.0]]),
        Matrix33::rotation_z(0.7) * Matrix33::rotation_y(-0.2) * Matrix33::rotation_x(1.1),
        Matrix33::from_diagonal(&Vector3::new(10.0, 0.1, -3.0)),
    ]
}

// --- Vector3 ---

#[test]
fn cross_is_anticommutative() {
    for a in sample_vectors() {
        for b in sample_vectors() {
            assert_eq!(cross(&a, &b), -cross(&b, &a), "a={} b={}", a, b);
        }
    }
}

#[test]
fn cross_with_self_is_zero() {
    for a in sample_vectors() {
        assert_eq!(cross(&a, &a).norm(), 0.0, "a={}", a);
    }
}

#[test]
fn cross_is_perpendicular_to_inputs() {
    let a = Vector3::new(-1.5, 2.25, 7.0);
    let b = Vector3::new(0.1, 0.2, 0.3);
    let c = cross(&a, &b);
    assert_abs_diff_eq!(dot(&c, &a), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(dot(&c, &b), 0.0, epsilon = 1e-12);
}

#[test]
fn dot_is_symmetric() {
    for a in sample_vectors() {
        for b in sample_vectors() {
            assert_eq!(dot(&a, &b), dot(&b, &a));
        }
    }
}

#[test]
fn unit_has_length_one_and_is_parallel() {
    for v in sample_vectors().into_iter().filter(|v| norm(v) > 0.0) {
        let u = unit(&v);
        assert_abs_diff_eq!(norm(&u), 1.0, epsilon = 1e-14);
        assert_vector_near(&cross(&u, &v), &Vector3::zeros(), 1e-12 * norm(&v));
        assert!(dot(&u, &v) > 0.0);
    }
}

#[test]
fn zero_vector_normalizes_to_itself() {
    let mut zero = Vector3::zeros();
    normalize(&mut zero);
    assert_eq!(zero, Vector3::zeros());
    assert_eq!(unit(&Vector3::zeros()), Vector3::zeros());
}

#[test]
fn x_cross_y_is_z() {
    assert_eq!(
        cross(&Vector3::new(1.0, 0.0, 0.0), &Vector3::new(0.0, 1.0, 0.0)),
        Vector3::new(0.0, 0.0, 1.0)
    );
}

#[test]
fn three_four_five() {
    assert_eq!(norm(&Vector3::new(3.0, 4.0, 0.0)), 5.0);
}

#[test]
fn vector_display() {
    assert_eq!(Vector3::new(1.0, 2.5, -3.0).to_string(), "[1, 2.5, -3]");
}

// --- Matrix33 ---

#[test]
fn identity_is_neutral() {
    for m in sample_matrices() {
        assert_eq!(Matrix33::identity() * m, m);
        assert_eq!(m * Matrix33::identity(), m);
    }
}

#[test]
fn inverse_times_matrix_is_identity() {
    for m in sample_matrices() {
        let inv = inverse(&m).unwrap();
        assert_matrix_near(&(m * inv), &Matrix33::identity(), 1e-12);
        assert_matrix_near(&(inv * m), &Matrix33::identity(), 1e-12);
    }
}

#[test]
fn inverse_of_rotation_is_transpose() {
    let r = Matrix33::rotation_z(0.7) * Matrix33::rotation_x(-0.4);
    assert_matrix_near(&inverse(&r).unwrap(), &transpose(&r), 1e-14);
}

#[test]
fn transpose_is_an_involution() {
    for m in sample_matrices() {
        assert_eq!(transpose(&transpose(&m)), m);
    }
}

#[test]
fn determinant_of_identity_is_one() {
    assert_eq!(determinant(&Matrix33::identity()), 1.0);
}

#[test]
fn determinant_is_multiplicative() {
    let mats = sample_matrices();
    for a in &mats {
        for b in &mats {
            let expected = determinant(a) * determinant(b);
            assert_abs_diff_eq!(
                determinant(&(a * b)),
                expected,
                epsilon = 1e-10 * expected.abs().max(1.0)
            );
        }
    }
}

#[test]
fn diag_round_trip() {
    for v in sample_vectors() {
        let m: Matrix33 = diag(&v);
        assert_eq!(diag(&m), v);
        for row in 0..3 {
            for col in 0..3 {
                if row != col {
                    assert_eq!(m[row][col], 0.0);
                }
            }
        }
    }
}

#[test]
fn axis_columns_form_identity() {
    let m = Matrix33::from_columns(&Vector3::x_axis(), &Vector3::y_axis(), &Vector3::z_axis());
    assert_eq!(m, Matrix33::identity());
}

#[test]
fn invertibility_does_not_depend_on_scale() {
    for m in sample_matrices() {
        for scale in [1e-6, 1e-3, 1e3, 1e6] {
            let inv = inverse(&(m * scale)).unwrap();
            assert_matrix_near(&(m * scale * inv), &Matrix33::identity(), 1e-10);
        }
    }

    let rank_two = Matrix33::from_rows([[1e6, 2e6, 3e6], [4e6, 5e6, 6e6], [5e6, 7e6, 9e6 + 1e-5]]);
    assert!(inverse(&rank_two).unwrap_err().is_singular());
    assert!((rank_two * 1e-9).checked_div(&rank_two).is_err());
}

#[test]
fn inverting_zero_matrix_fails() {
    let err = inverse(&Matrix33::zeros()).unwrap_err();
    assert!(err.is_singular());
}

#[test]
fn compound_add_combines_with_rhs() {
    let mut m = Matrix33::splat(5.0);
    m += Matrix33::splat(5.0);
    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(m[(row, col)], 10.0);
        }
    }
}

#[test]
fn product_is_associative_but_not_commutative() {
    let mats = sample_matrices();
    let (a, b, c) = (mats[1], mats[3], mats[2]);
    assert_matrix_near(&((a * b) * c), &(a * (b * c)), 1e-10);
    assert!((a * b).max_difference(&(b * a)) > 1.0);
}

#[test]
fn division_undoes_multiplication() {
    let a = sample_matrices()[3];
    let b = sample_matrices()[2];
    assert_matrix_near(&((a * b) / b), &a, 1e-12);
    assert_matrix_near(&a.checked_div(&a).unwrap(), &Matrix33::identity(), 1e-12);
}

#[test]
fn matrix_vector_product_is_linear() {
    let m = sample_matrices()[3];
    let a = Vector3::new(1.0, -2.0, 0.5);
    let b = Vector3::new(0.25, 4.0, -1.0);
    assert_vector_near(&(m * (a + b)), &(m * a + m * b), 1e-12);
    assert_vector_near(&(m * (a * 3.0)), &((m * a) * 3.0), 1e-12);
}

#[test]
fn columns_are_images_of_axes() {
    let m = sample_matrices()[3];
    assert_eq!(m * Vector3::x_axis(), m.column(0));
    assert_eq!(m * Vector3::y_axis(), m.column(1));
    assert_eq!(m * Vector3::z_axis(), m.column(2));
}

#[test]
fn elementary_rotations_are_rotations() {
    for angle in [-2.5, -0.3, 0.0, 0.9, 3.0] {
        for r in [
            Matrix33::rotation_x(angle),
            Matrix33::rotation_y(angle),
            Matrix33::rotation_z(angle),
        ] {
            assert!(r.is_rotation(1e-14), "angle {}", angle);
        }
        assert_matrix_near(
            &(Matrix33::rotation_y(angle) * Matrix33::rotation_y(-angle)),
            &Matrix33::identity(),
            1e-14,
        );
    }
}

#[test]
fn rotation_preserves_length_and_angles() {
    let r = sample_matrices()[4];
    let a = Vector3::new(-1.5, 2.25, 7.0);
    let b = Vector3::new(0.1, 0.2, 0.3);
    assert_abs_diff_eq!(norm(&(r * a)), norm(&a), epsilon = 1e-12);
    assert_abs_diff_eq!(dot(&(r * a), &(r * b)), dot(&a, &b), epsilon = 1e-12);
    assert_vector_near(&(r * cross(&a, &b)), &cross(&(r * a), &(r * b)), 1e-12);
}

#[test]
fn slice_constructors_validate_length() {
    assert!(Vector3::from_slice(&[]).is_err());
    assert!(Matrix33::from_slice(&[0.0; 4]).is_err());
    assert_eq!(
        Matrix33::from_slice(&[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 99.0]).unwrap(),
        Matrix33::identity()
    );
}
