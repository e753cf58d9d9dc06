//! Vector and quaternion helpers layered on top of `glam`.

use glam::{Quat, Vec3};

/// Squared length below which a vector is treated as null.
pub const DEGENERATE_EPSILON: f32 = 1e-6;

/// Fixed world "up".
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Returns `true` when `v` is too short to normalize safely.
#[inline]
pub fn is_degenerate(v: Vec3) -> bool {
    v.length_squared() < DEGENERATE_EPSILON
}

/// Normalizes `v`, or returns `None` when it is degenerate.
#[inline]
pub fn try_normalize(v: Vec3) -> Option<Vec3> {
    if is_degenerate(v) {
        None
    } else {
        Some(v.normalize())
    }
}

/// Direction from the origin to the camera.
pub fn view_direction(camera_position: Vec3) -> Option<Vec3> {
    try_normalize(camera_position)
}

/// Camera-relative "right": `up × view`, falling back to world X when the
/// camera sits on the up axis.
pub fn camera_right(camera_position: Vec3) -> Vec3 {
    view_direction(camera_position)
        .and_then(|view| try_normalize(WORLD_UP.cross(view)))
        .unwrap_or(Vec3::X)
}

/// Removes the component of `v` along the unit vector `normal`.
#[inline]
pub fn project_onto_plane(v: Vec3, normal: Vec3) -> Vec3 {
    v - normal * v.dot(normal)
}

/// Signed angle rotating unit vector `from` onto unit vector `to` about `axis`,
/// in `(-π, π]`.
pub fn signed_angle_about(from: Vec3, to: Vec3, axis: Vec3) -> f32 {
    let sin = axis.dot(from.cross(to));
    let cos = from.dot(to).clamp(-1.0, 1.0);
    sin.atan2(cos)
}

/// Rotates `rotation` by `angle` about world `axis`, pre-multiplied so the
/// increment acts in world space. Small angles are skipped.
#[inline]
pub fn premultiply_axis_angle(rotation: Quat, axis: Vec3, angle: f32, epsilon: f32) -> Quat {
    if angle.abs() <= epsilon {
        return rotation;
    }
    (Quat::from_axis_angle(axis, angle) * rotation).normalize()
}

/// Angle (radians) of the shortest rotation between two unit quaternions.
pub fn angular_distance(a: Quat, b: Quat) -> f32 {
    let delta = a.conjugate() * b;
    2.0 * delta.xyz().length().atan2(delta.w.abs())
}
