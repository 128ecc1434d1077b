use std::f64::consts::FRAC_PI_2;

use affine_math::{Column, Row, Transform, TransformError, Vector3, Vector4};
use approx::{abs_diff_eq, assert_abs_diff_eq};

const TEST_EPSILON: f64 = 1e-15;

fn vec(x: f64, y: f64, z: f64) -> Vector3 {
    Vector3::new(x, y, z)
}

#[test]
fn test_identity() {
    let identity = Transform::identity();
    for v in [vec(0.0, 0.0, 0.0), vec(1.0, -2.0, 3.5), vec(-1e6, 1e-6, 42.0)] {
        assert_eq!(identity.applied_to(v), v);
    }
    let v = Vector4::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(identity.applied_to_vec4(v), v);
}

#[test]
fn test_translate() {
    let t = Transform::translation(1.0, 2.0, 3.0);
    assert_eq!(t.applied_to(vec(0.0, 0.0, 0.0)), vec(1.0, 2.0, 3.0));
    assert_abs_diff_eq!(
        t.inverse().applied_to(vec(1.0, 2.0, 3.0)),
        vec(0.0, 0.0, 0.0),
        epsilon = TEST_EPSILON
    );
    assert_eq!(Transform::translation_by(vec(1.0, 2.0, 3.0)), t);
}

#[test]
fn test_translation_lives_in_last_row() {
    let t = Transform::translation(1.0, 2.0, 3.0);
    assert_eq!(t.row_vector(Row::Four), Vector4::new(1.0, 2.0, 3.0, 1.0));
    assert_eq!(t.column_vector(Column::W), Vector4::new(0.0, 0.0, 0.0, 1.0));
}

#[test]
fn test_rotate_around_z() {
    let t = Transform::rotation_z(FRAC_PI_2);
    assert_abs_diff_eq!(
        t.applied_to(vec(1.0, 0.0, 0.0)),
        vec(0.0, 1.0, 0.0),
        epsilon = TEST_EPSILON
    );
    assert_abs_diff_eq!(
        t.inverse().applied_to(vec(0.0, 1.0, 0.0)),
        vec(1.0, 0.0, 0.0),
        epsilon = TEST_EPSILON
    );
}

#[test]
fn test_rotate_around_y() {
    let t = Transform::rotation_y(FRAC_PI_2);
    assert_abs_diff_eq!(
        t.applied_to(vec(1.0, 0.0, 0.0)),
        vec(0.0, 0.0, -1.0),
        epsilon = TEST_EPSILON
    );
    assert_abs_diff_eq!(
        t.inverse().applied_to(vec(0.0, 0.0, -1.0)),
        vec(1.0, 0.0, 0.0),
        epsilon = TEST_EPSILON
    );
}

#[test]
fn test_rotate_around_x() {
    let t = Transform::rotation_x(FRAC_PI_2);
    assert_abs_diff_eq!(
        t.applied_to(vec(0.0, 1.0, 0.0)),
        vec(0.0, 0.0, 1.0),
        epsilon = TEST_EPSILON
    );
    assert_abs_diff_eq!(
        t.inverse().applied_to(vec(0.0, 0.0, 1.0)),
        vec(0.0, 1.0, 0.0),
        epsilon = TEST_EPSILON
    );
}

#[test]
fn test_scale() {
    let t = Transform::uniform_scale(2.0);
    assert_eq!(t.applied_to(vec(1.0, 2.0, 3.0)), vec(2.0, 4.0, 6.0));
    assert_abs_diff_eq!(
        t.inverse().applied_to(vec(2.0, 4.0, 6.0)),
        vec(1.0, 2.0, 3.0),
        epsilon = TEST_EPSILON
    );

    let t = Transform::scale(1.0, 0.0, 2.0);
    assert_eq!(t.applied_to(vec(1.0, 1.0, 1.0)), vec(1.0, 0.0, 2.0));
    assert_eq!(Transform::scale_by(vec(1.0, 0.0, 2.0)), t);
}

#[test]
fn test_multiply_applies_right_hand_side_first() {
    let translate = Transform::translation(1.0, 0.0, 0.0);
    let scale = Transform::uniform_scale(2.0);
    let v = vec(1.0, 1.0, 1.0);

    assert_eq!((translate * scale).applied_to(v), vec(3.0, 2.0, 2.0));
    assert_eq!((scale * translate).applied_to(v), vec(4.0, 2.0, 2.0));
    assert_eq!(
        (&translate * &scale).applied_to(v),
        translate.applied_to(scale.applied_to(v))
    );
}

#[test]
fn test_multiply_dot_product_rule() {
    let a = Transform::from_row_major(&[
        1.0, 2.0, 3.0, 4.0, //
        5.0, 6.0, 7.0, 8.0, //
        9.0, 10.0, 11.0, 12.0, //
        13.0, 14.0, 15.0, 16.0,
    ]);
    let b = Transform::from_row_major(&[
        -1.0, 0.5, 2.0, 0.0, //
        3.0, -2.0, 1.0, 1.0, //
        0.0, 4.0, -1.0, 2.0, //
        1.0, 1.0, 1.0, -3.0,
    ]);
    let c = a.multiply(&b);
    for row in Row::ALL {
        for column in Column::ALL {
            let expected = a.column_vector(column).dot(&b.row_vector(row));
            assert_eq!(c.element(row, column), expected);
        }
    }
}

#[test]
fn test_look_at_point() {
    let look_at = Transform::look_at(vec(1.0, 1.0, 0.0), vec(1.0, 0.0, 0.0));
    let manual = Transform::translation(1.0, 0.0, 0.0) * Transform::rotation_z(FRAC_PI_2);

    let points = [
        vec(0.0, 0.0, 0.0),  // origin
        vec(1.0, 0.0, 0.0),  // forward
        vec(-1.0, 0.0, 0.0), // back
        vec(0.0, 1.0, 0.0),  // right
        vec(0.0, -1.0, 0.0), // left
        vec(0.0, 0.0, 1.0),  // up
        vec(0.0, 0.0, -1.0), // down
    ];

    for point in points {
        assert_abs_diff_eq!(
            look_at * point,
            manual * point,
            epsilon = TEST_EPSILON
        );
    }
}

#[test]
fn test_look_at_points() {
    let coords: &[f64; 6] = &[-2.0, -1.0, -0.5, 0.5, 1.0, 2.0];
    let grid: Vec<Vector3> = coords
        .iter()
        .flat_map(|&x| {
            coords
                .iter()
                .flat_map(move |&y| coords.iter().map(move |&z| vec(x, y, z)))
        })
        .collect();

    let mut ran = 0usize;
    let mut failures = Vec::new();
    for &from in &grid {
        for &target in &grid {
            let distance = (target - from).magnitude();
            let result = Transform::look_at(target, from) * vec(distance, 0.0, 0.0);
            ran += 1;
            if !abs_diff_eq!(result, target, epsilon = 5e-7) {
                failures.push((target - from, target - result));
            }
        }
    }

    assert_eq!(ran, grid.len() * grid.len());
    assert!(
        failures.is_empty(),
        "{} of {} look-at transforms missed, first failures: {:?}",
        failures.len(),
        ran,
        &failures[..failures.len().min(10)]
    );
}

#[test]
fn test_look_at_degenerate_direction() {
    let from = vec(1.0, 2.0, 3.0);
    assert_eq!(
        Transform::look_at(from, from),
        Transform::translation(1.0, 2.0, 3.0)
    );
}

#[test]
fn test_look_at_nearly_vertical_direction() {
    let target = vec(1e-200, 0.0, 1.0);
    let t = Transform::look_at(target, Vector3::ZERO);
    assert!(t.is_finite());
    assert_abs_diff_eq!(t.determinant(), 1.0, epsilon = 1e-12);

    let forward = t.row_vector(Row::One).xyz();
    let right = t.row_vector(Row::Two).xyz();
    let up = t.row_vector(Row::Three).xyz();
    assert_abs_diff_eq!(right.magnitude(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(up.magnitude(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(forward.dot(right), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(forward.dot(up), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(right.dot(up), 0.0, epsilon = 1e-12);

    assert_abs_diff_eq!(t * vec(1.0, 0.0, 0.0), target, epsilon = TEST_EPSILON);
}

#[test]
fn test_look_at_frame_is_orthonormal() {
    let t = Transform::look_at(vec(2.0, -1.0, 3.0), vec(0.5, 0.5, -1.0));
    let forward = t.row_vector(Row::One).xyz();
    let right = t.row_vector(Row::Two).xyz();
    let up = t.row_vector(Row::Three).xyz();

    assert_abs_diff_eq!(forward.magnitude(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(right.magnitude(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(up.magnitude(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(forward.dot(right), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(forward.dot(up), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(forward.cross(right), up, epsilon = 1e-12);
    assert!(up.z() > 0.0);
}

#[test]
fn test_look_at_straight_up() {
    let from = vec(0.5, 0.5, -2.0);
    let target = vec(0.5, 0.5, 2.0);
    let t = Transform::look_at(target, from);
    assert!(t.is_finite());
    assert_abs_diff_eq!(t.determinant(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(t * vec(4.0, 0.0, 0.0), target, epsilon = 1e-12);
}

#[test]
fn test_transpose() {
    let t = Transform::rotation_x(0.3) * Transform::translation(1.0, 2.0, 3.0);
    let transposed = t.transpose();
    for row in Row::ALL {
        for column in Column::ALL {
            let swapped_row = Row::ALL[column.index()];
            let swapped_column = Column::ALL[row.index()];
            assert_eq!(
                transposed.element(row, column),
                t.element(swapped_row, swapped_column)
            );
        }
    }
    assert_eq!(transposed.transpose(), t);
}

#[test]
fn test_add_and_negate() {
    let a = Transform::rotation_y(1.2) * Transform::translation(-4.0, 0.5, 2.0);
    let b = Transform::uniform_scale(3.0);

    let sum = a + b;
    for i in 0..16 {
        assert_eq!(sum[i], a[i] + b[i]);
        assert_eq!((-a)[i], -a[i]);
    }
    assert_eq!(a - a, Transform::zero());
    assert_eq!(a.sub(&b), a.add(&b.negate()));
}

#[test]
fn test_scalar_multiply_composes_uniform_scale() {
    let t = Transform::translation(1.0, 2.0, 3.0);
    assert_eq!(t * 2.0, t * Transform::uniform_scale(2.0));
    assert_eq!(2.0 * t, t * Transform::uniform_scale(2.0));
    assert_eq!((t * 2.0).applied_to(vec(1.0, 1.0, 1.0)), vec(3.0, 4.0, 5.0));
}

#[test]
fn test_vector_application_operators() {
    let t = Transform::rotation_z(0.7) * Transform::translation(0.0, 1.0, 2.0);
    let v = vec(1.0, -1.0, 0.5);
    assert_eq!(t * v, t.applied_to(v));
    assert_eq!(v * t, t.applied_to(v));

    let v4 = Vector4::from_xyz_w(v, 1.0);
    assert_eq!(t * v4, t.applied_to_vec4(v4));
    assert_eq!(v4 * t, t.applied_to_vec4(v4));
    assert_abs_diff_eq!((t * v4).xyz(), t * v, epsilon = TEST_EPSILON);
}

#[test]
fn test_vec4_application_keeps_w() {
    let t = Transform::translation(1.0, 2.0, 3.0);
    let direction = Vector4::new(1.0, 0.0, 0.0, 0.0);
    assert_eq!(t.applied_to_vec4(direction), direction);
    let point = Vector4::from_xyz(0.0, 0.0, 0.0);
    assert_eq!(t.applied_to_vec4(point), Vector4::new(1.0, 2.0, 3.0, 1.0));
}

#[test]
fn test_row_major_layout() {
    let components: [f64; 16] = core::array::from_fn(|i| i as f64);
    let t = Transform::from_row_major(&components);

    assert_eq!(t.as_slice(), &components[..]);
    assert_eq!(t.to_row_major(), components);
    assert_eq!(t.component(6), Ok(6.0));
    assert_eq!(t.element(Row::Two, Column::K), 6.0);
    assert_eq!(t.row(1), Ok(Vector4::new(4.0, 5.0, 6.0, 7.0)));
    assert_eq!(t.column(0), Ok(Vector4::new(0.0, 4.0, 8.0, 12.0)));
    assert_eq!(
        t.to_rows(),
        [
            [0.0, 1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0, 7.0],
            [8.0, 9.0, 10.0, 11.0],
            [12.0, 13.0, 14.0, 15.0]
        ]
    );
    assert_eq!(Transform::from(components), t);
    assert_eq!(<[f64; 16]>::from(t), components);
}

#[test]
fn test_from_f32_components() {
    let components: [f32; 16] = [
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.5, -1.5, 2.0, 1.0,
    ];
    assert_eq!(
        Transform::from(components),
        Transform::translation(0.5, -1.5, 2.0)
    );
}

#[test]
fn test_from_slice_length() {
    let components = [0.0; 17];
    assert_eq!(
        Transform::try_from_row_major_slice(&components[..15]),
        Err(TransformError::InvalidLength { len: 15 })
    );
    assert_eq!(
        Transform::try_from_row_major_slice(&components[..16]),
        Ok(Transform::zero())
    );
}

#[test]
fn test_out_of_range_access() {
    let t = Transform::identity();
    assert_eq!(
        t.row(4),
        Err(TransformError::IndexOutOfRange { index: 4, len: 4 })
    );
    assert_eq!(
        t.column(7),
        Err(TransformError::IndexOutOfRange { index: 7, len: 4 })
    );
    assert_eq!(
        t.component(16),
        Err(TransformError::IndexOutOfRange { index: 16, len: 16 })
    );
    assert_eq!(
        Row::try_from(4),
        Err(TransformError::IndexOutOfRange { index: 4, len: 4 })
    );
    assert_eq!(Column::try_from(3), Ok(Column::W));
}

#[test]
#[should_panic(expected = "INDEXING OUT_OF_BOUNDS")]
fn test_index_out_of_range_panics() {
    let t = Transform::identity();
    let _component: f64 = t[16];
}

#[test]
fn test_display_shows_basis_images() {
    assert_eq!(
        Transform::identity().to_string(),
        "[x:(1, 0, 0),y:(0, 1, 0),z:(0, 0, 1)]"
    );
    assert_eq!(
        Transform::translation(1.0, 2.0, 3.0).to_string(),
        "[x:(2, 2, 3),y:(1, 3, 3),z:(1, 2, 4)]"
    );
}

#[test]
fn test_default_is_identity() {
    assert_eq!(Transform::default(), Transform::identity());
    assert_eq!(Transform::IDENTITY, Transform::identity());
}
