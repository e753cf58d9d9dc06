use approx::assert_abs_diff_eq;
use fidget_rig::{
    compute_snap_target, most_facing_face, CubeFace, FaceSnapResolver, OrientationState, Quat,
    Vec3,
};
use glam::EulerRot;

const CAMERA: Vec3 = Vec3::new(3.0, 2.5, 4.0);

fn same_rotation(a: Quat, b: Quat, tolerance: f32) -> bool {
    a.dot(b).abs() > 1.0 - tolerance
}

#[test]
fn default_camera_prefers_positive_z_at_rest() {
    let view = CAMERA.normalize();
    let (face, dot) = most_facing_face(Quat::IDENTITY, view);
    assert_eq!(face, CubeFace::PosZ);
    assert!(dot > Vec3::X.dot(view));

    let target = compute_snap_target(Quat::IDENTITY, CAMERA).expect("camera is not at origin");
    assert!((target.aligned * Vec3::Z).abs_diff_eq(view, 1e-5));
}

#[test]
fn snap_target_is_deterministic() {
    let start = Quat::from_euler(EulerRot::YXZ, 2.1, -0.7, 0.3);
    let a = compute_snap_target(start, CAMERA).expect("valid camera");
    let b = compute_snap_target(start, CAMERA).expect("valid camera");
    assert_eq!(a.face, b.face);
    assert!(a.orientation.abs_diff_eq(b.orientation, 1e-6));
}

#[test]
fn full_blend_at_target_is_a_fixed_point() {
    let start = Quat::from_euler(EulerRot::YXZ, 0.9, 0.5, -0.2);
    let target = compute_snap_target(start, CAMERA).expect("valid camera");
    let resolver = FaceSnapResolver::default();

    let mut state = OrientationState::new(target.orientation);
    resolver.blend(&mut state, &target, 1.0);
    assert!(same_rotation(state.orientation, target.orientation, 1e-6));

    let again = compute_snap_target(target.orientation, CAMERA).expect("valid camera");
    assert_eq!(again.face, target.face);
    assert!(same_rotation(again.orientation, target.orientation, 1e-5));
}

#[test]
fn camera_straight_above_skips_roll() {
    let start = Quat::from_euler(EulerRot::YXZ, 0.7, 0.4, 0.0);
    let target = compute_snap_target(start, Vec3::new(0.0, 6.0, 0.0)).expect("valid camera");
    assert!(!target.rolled);
    assert!(target.orientation.is_finite());
    assert_abs_diff_eq!(target.orientation.length(), 1.0, epsilon = 1e-4);
    assert!((target.orientation * target.face.normal()).abs_diff_eq(Vec3::Y, 1e-5));
}

#[test]
fn each_face_can_be_snapped() {
    let view = CAMERA.normalize();
    for face in CubeFace::ALL {
        // Turn the face roughly toward the camera, with some twist.
        let near = Quat::from_rotation_arc(face.normal(), view);
        let start = Quat::from_axis_angle(Vec3::new(0.3, 1.0, -0.2).normalize(), 0.25) * near;

        let target = compute_snap_target(start, CAMERA).expect("valid camera");
        assert_eq!(target.face, face);
        assert!((target.orientation * face.normal()).abs_diff_eq(view, 1e-4));
        assert!(target.rolled);
    }
}

#[test]
fn roll_correction_only_turns_about_view_axis() {
    let view = CAMERA.normalize();
    let start = Quat::from_euler(EulerRot::YXZ, -1.1, 0.9, 1.4);
    let target = compute_snap_target(start, CAMERA).expect("valid camera");

    let roll = target.orientation * target.aligned.conjugate();
    let (axis, angle) = roll.to_axis_angle();
    if angle.abs() > 1e-2 {
        assert!(axis.cross(view).length() < 1e-3);
    }
    assert!(angle.abs() <= std::f32::consts::PI + 1e-4);
}
