//! Agreement between the three rotation representations (matrix, quaternion, rotor).

use std::f32::consts::{PI, TAU};

use quiver::{
    assert_approx_eq, vec3, Mat3, Mat3f, Mat4, Quat, Rotor, RotationOrder, Vec3f,
};

const ORDERS: [RotationOrder; 6] = [
    RotationOrder::Xyz,
    RotationOrder::Xzy,
    RotationOrder::Yxz,
    RotationOrder::Yzx,
    RotationOrder::Zxy,
    RotationOrder::Zyx,
];

fn test_vectors() -> [Vec3f; 5] {
    [
        Vec3f::X,
        Vec3f::Y,
        Vec3f::Z,
        vec3(1.0, 2.0, 3.0),
        vec3(-0.25, 10.0, -4.5),
    ]
}

#[test]
fn axis_angle_agrees_across_representations() {
    let axis = vec3(2.0, -1.0, 0.5).normalize();
    for angle in [0.0, 0.3, PI / 2.0, 2.9, -1.7] {
        let m = Mat3::from_axis_angle(axis, angle);
        let q = Quat::from_axis_angle(axis, angle);
        let r = Rotor::from_axis_angle(axis, angle);
        for v in test_vectors() {
            assert_approx_eq!(m * v, q.rotate(v)).abs(1e-5);
            assert_approx_eq!(m * v, r.rotate(v)).abs(1e-5);
        }
    }
}

#[test]
fn euler_agrees_across_representations() {
    let angles = vec3(0.8, -1.2, 2.1);
    for order in ORDERS {
        let m = Mat3::from_euler(angles, order);
        let q = Quat::from_euler(angles, order);
        let r = Rotor::from_euler(angles, order);
        for v in test_vectors() {
            assert_approx_eq!(m * v, q.rotate(v)).abs(1e-5);
            assert_approx_eq!(m * v, r.rotate(v)).abs(1e-5);
        }
    }
}

#[test]
fn conversion_to_matrix_agrees() {
    let q = Quat::from_euler(vec3(0.5, 1.0, -0.4), RotationOrder::default());
    let r = Rotor::from_euler(vec3(0.5, 1.0, -0.4), RotationOrder::default());
    for v in test_vectors() {
        assert_approx_eq!(q.to_rotation_matrix() * v, q.rotate(v)).abs(1e-5);
        assert_approx_eq!(r.to_rotation_matrix() * v, r.rotate(v)).abs(1e-5);
    }
}

#[test]
fn composition_is_associative() {
    let a = Quat::from_rotation_x(0.4);
    let b = Quat::from_rotation_y(-1.0);
    let c = Quat::from_rotation_z(2.2);
    for v in test_vectors() {
        assert_approx_eq!(((a * b) * c).rotate(v), (a * (b * c)).rotate(v)).abs(1e-5);
    }

    let a = Mat3f::rotation_x(0.4);
    let b = Mat3f::rotation_y(-1.0);
    let c = Mat3f::rotation_z(2.2);
    for v in test_vectors() {
        assert_approx_eq!(((a * b) * c) * v, (a * (b * c)) * v).abs(1e-5);
    }
}

#[test]
fn inverses_cancel() {
    let q = Quat::from_euler(vec3(1.0, 0.2, -0.6), RotationOrder::Zxy);
    assert_approx_eq!((q * q.inverse()).to_vec(), Quat::IDENTITY.to_vec()).abs(1e-6);

    let m = Mat3::from_euler(vec3(1.0, 0.2, -0.6), RotationOrder::Zxy);
    assert_approx_eq!(m * m.invert(), Mat3f::IDENTITY).abs(1e-5);
    // Rotation matrices are orthogonal.
    assert_approx_eq!(m.invert(), m.transpose()).abs(1e-5);
}

#[test]
fn rotation_arcs_agree() {
    let from = vec3(1.0, 2.0, -0.5).normalize();
    let to = vec3(-3.0, 0.1, 1.0).normalize();
    let q = Quat::from_rotation_arc(from, to);
    let r = Rotor::from_rotation_arc(from, to);
    assert_approx_eq!(q.rotate(from), to).abs(1e-5);
    assert_approx_eq!(r.rotate(from), to).abs(1e-5);

    // Anti-parallel inputs take the explicit fallback plane, and both representations pick
    // the same half turn.
    let q = Quat::from_rotation_arc_with_fallback(Vec3f::Y, -Vec3f::Y, Vec3f::X);
    let r = Rotor::from_rotation_arc_with_fallback(Vec3f::Y, -Vec3f::Y, Vec3f::X);
    assert_approx_eq!(q.angle(), PI).abs(1e-6);
    for v in test_vectors() {
        assert_approx_eq!(q.rotate(v), r.rotate(v)).abs(1e-5);
    }
}

#[test]
fn random_rotations_agree_across_representations() {
    let mut rng = fastrand::Rng::with_seed(0x5eed);
    for _ in 0..32 {
        let axis = vec3(
            rng.f32() * 2.0 - 1.0,
            rng.f32() * 2.0 - 1.0,
            rng.f32() * 2.0 - 1.0,
        )
        .normalize();
        let angle = (rng.f32() * 2.0 - 1.0) * PI;

        let m = Mat3::from_axis_angle(axis, angle);
        let q = Quat::from_axis_angle(axis, angle);
        let r = Rotor::from_axis_angle(axis, angle);
        for v in test_vectors() {
            assert_approx_eq!(m * v, q.rotate(v)).abs(1e-4);
            assert_approx_eq!(m * v, r.rotate(v)).abs(1e-4);
        }
        assert_approx_eq!(Quat::from_rotation_matrix(m).rotate(Vec3f::X), m * Vec3f::X).abs(1e-4);
    }
}

#[test]
fn quarter_turn_handedness() {
    // A counterclockwise quarter turn around Z (looking down the axis) takes X to Y in every
    // representation.
    let quarter = TAU / 4.0;
    assert_approx_eq!(Mat3::rotation_z(quarter) * Vec3f::X, Vec3f::Y).abs(1e-6);
    assert_approx_eq!(Quat::from_rotation_z(quarter) * Vec3f::X, Vec3f::Y).abs(1e-6);
    assert_approx_eq!(Rotor::from_rotation_z(quarter) * Vec3f::X, Vec3f::Y).abs(1e-6);
}

#[test]
fn srt_composite_matches_manual_product() {
    let scale = vec3(2.0, 3.0, 4.0);
    let angles = vec3(0.3, -0.8, 1.4);
    let translation = vec3(10.0, -20.0, 30.0);

    let rotation = Mat4::from_euler(angles, RotationOrder::default());
    let composite = Mat4::from_scale_rotation_translation(
        scale,
        Quat::from_euler(angles, RotationOrder::default()),
        translation,
    );
    let manual = Mat4::from_scale(scale) * rotation * Mat4::from_translation(translation);
    assert_approx_eq!(composite, manual).abs(1e-4);
}
