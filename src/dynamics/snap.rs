//! Face snapping: once the rig settles, ease the most camera-facing face
//! until it points straight at the viewer, rolled so a cube edge stays "up".

use glam::{Quat, Vec3};
use log::debug;

use crate::{
    config::RigConfig,
    core::{
        state::{OrientationState, SnapTarget},
        types::{CameraFrame, CubeFace, SnapStatus},
    },
    utils::math::{
        angular_distance, project_onto_plane, signed_angle_about, try_normalize, view_direction,
        WORLD_UP,
    },
};

/// Edges whose projected "up-likeness" is worse than this are not used for roll.
const MIN_UP_ALIGNMENT: f32 = -0.5;

/// Face whose world normal points most toward `view`, with that dot product.
pub fn most_facing_face(orientation: Quat, view: Vec3) -> (CubeFace, f32) {
    let mut best = (CubeFace::PosX, f32::NEG_INFINITY);
    for face in CubeFace::ALL {
        let dot = (orientation * face.normal()).dot(view);
        if dot > best.1 {
            best = (face, dot);
        }
    }
    best
}

/// Computes where the rig should come to rest for the given camera.
///
/// Returns `None` when the camera sits at the origin.
pub fn compute_snap_target(orientation: Quat, camera_position: Vec3) -> Option<SnapTarget> {
    snap_target_toward(orientation, view_direction(camera_position)?)
}

/// Snap solution for a unit view direction (origin toward camera).
pub fn snap_target_toward(orientation: Quat, view: Vec3) -> Option<SnapTarget> {
    let (face, _) = most_facing_face(orientation, view);

    let face_world = face.world_normal(orientation);
    let align = Quat::from_rotation_arc(face_world, view);
    let aligned = (align * orientation).normalize();

    let unrolled = SnapTarget {
        face,
        aligned,
        orientation: aligned,
        rolled: false,
    };

    // Looking straight down (or up) the world axis: any roll is as good as another.
    let Some(up) = try_normalize(project_onto_plane(WORLD_UP, view)) else {
        return Some(unrolled);
    };

    let mut best_dot = f32::NEG_INFINITY;
    let mut best_edge = None;
    for edge in face.edge_directions() {
        let edge_world = (aligned * edge).normalize();
        let Some(projected) = try_normalize(project_onto_plane(edge_world, view)) else {
            continue;
        };
        let dot = projected.dot(up);
        if dot > best_dot {
            best_dot = dot;
            best_edge = Some(projected);
        }
    }

    let Some(edge) = best_edge.filter(|_| best_dot >= MIN_UP_ALIGNMENT) else {
        return Some(unrolled);
    };

    let angle = signed_angle_about(edge, up, view);
    let roll = Quat::from_axis_angle(view, angle);
    Some(SnapTarget {
        orientation: (roll * aligned).normalize(),
        rolled: true,
        ..unrolled
    })
}

/// Outcome of one resolver tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SnapStep {
    pub status: SnapStatus,
    pub target_computed: bool,
    pub target_discarded: bool,
}

/// Gates, caches, and blends toward the face-snap target.
#[derive(Debug, Clone)]
pub struct FaceSnapResolver {
    pub snap_delay: f32,
    pub speed_threshold: f32,
    pub stiffness: f32,
    pub aligned_tolerance: f32,
}

impl Default for FaceSnapResolver {
    fn default() -> Self {
        Self::from_config(&RigConfig::default())
    }
}

impl FaceSnapResolver {
    pub fn from_config(config: &RigConfig) -> Self {
        Self {
            snap_delay: config.snap_delay,
            speed_threshold: config.snap_speed_threshold,
            stiffness: config.snap_stiffness,
            aligned_tolerance: config.snap_aligned_tolerance,
        }
    }

    /// Idle, slow, and quiet for longer than the snap delay.
    pub fn is_eligible(&self, state: &OrientationState) -> bool {
        !state.is_dragging()
            && state.velocity.speed() < self.speed_threshold
            && state.idle_for() > self.snap_delay
    }

    /// Exponential ease factor, `1 - e^(-k dt)`.
    pub fn blend_factor(&self, dt: f32) -> f32 {
        1.0 - (-self.stiffness * dt).exp()
    }

    /// Moves `state` toward the cached target by `t` and reports progress.
    pub fn blend(&self, state: &mut OrientationState, target: &SnapTarget, t: f32) -> SnapStatus {
        state.orientation = state.orientation.slerp(target.orientation, t).normalize();
        if angular_distance(state.orientation, target.orientation) <= self.aligned_tolerance {
            SnapStatus::Aligned
        } else {
            SnapStatus::Blending
        }
    }

    pub fn status(&self, state: &OrientationState) -> SnapStatus {
        match &state.snap_target {
            None => SnapStatus::Inactive,
            Some(target)
                if angular_distance(state.orientation, target.orientation)
                    <= self.aligned_tolerance =>
            {
                SnapStatus::Aligned
            }
            Some(_) => SnapStatus::Blending,
        }
    }

    /// Runs one frame: invalidates, lazily computes, then blends.
    pub fn step(&self, state: &mut OrientationState, camera: &CameraFrame, dt: f32) -> SnapStep {
        let mut step = SnapStep::default();

        if !self.is_eligible(state) {
            if state.invalidate_snap() {
                debug!("snap target discarded");
                step.target_discarded = true;
            }
            return step;
        }

        if state.snap_target.is_none() {
            state.snap_target = camera
                .view
                .and_then(|view| snap_target_toward(state.orientation, view));
            if let Some(target) = &state.snap_target {
                debug!(
                    "snap target computed: face={:?} rolled={}",
                    target.face, target.rolled
                );
                step.target_computed = true;
            }
        }

        let Some(target) = state.snap_target else {
            return step;
        };

        let previous = self.status(state);
        step.status = self.blend(state, &target, self.blend_factor(dt));
        if step.status == SnapStatus::Aligned && previous != SnapStatus::Aligned {
            debug!("snap aligned: face={:?}", target.face);
        }
        step
    }
}
