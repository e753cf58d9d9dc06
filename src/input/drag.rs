use glam::Vec2;
use log::{debug, trace};

use crate::{
    config::RigConfig,
    core::{
        state::OrientationState,
        types::{AngularVelocity, CameraFrame, InteractionState},
    },
    utils::math::{premultiply_axis_angle, WORLD_UP},
};

/// Pointer tracking for one press-drag-release gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    last_position: Vec2,
}

impl DragGesture {
    pub fn begin(origin: Vec2) -> Self {
        Self {
            last_position: origin,
        }
    }

    /// Pixel delta since the previous position (or since pointer-down).
    pub fn delta_to(&mut self, position: Vec2) -> Vec2 {
        let delta = position - self.last_position;
        self.last_position = position;
        delta
    }
}

/// Rotation produced by one pointer-move event.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct DragDelta {
    pub yaw: f32,
    pub pitch: f32,
}

/// Why a gesture ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEnd {
    Release,
    Leave,
    Cancel,
}

/// Turns pointer motion into yaw/pitch increments and a velocity estimate.
#[derive(Debug, Clone)]
pub struct DragInputAdapter {
    /// Radians per pixel.
    pub sensitivity: f32,
    /// Frame duration the per-event angle is divided by to estimate a rate.
    pub frame_time: f32,
    pub epsilon: f32,
    gesture: Option<DragGesture>,
}

impl Default for DragInputAdapter {
    fn default() -> Self {
        Self::from_config(&RigConfig::default())
    }
}

impl DragInputAdapter {
    pub fn from_config(config: &RigConfig) -> Self {
        Self {
            sensitivity: config.drag_sensitivity,
            frame_time: config.drag_frame_time,
            epsilon: config.velocity_epsilon,
            gesture: None,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.gesture.is_some()
    }

    /// Arms the adapter and hands the orientation to the gesture.
    pub fn begin_gesture(&mut self, state: &mut OrientationState, origin: Vec2) {
        if self.gesture.is_some() {
            debug!("restarting active drag gesture");
        }
        self.gesture = Some(DragGesture::begin(origin));
        state.note_interaction();
        state.interaction = InteractionState::Dragging;
        if state.invalidate_snap() {
            debug!("snap target discarded by pointer-down");
        }
        debug!("drag gesture started at {origin:?}");
    }

    /// Disarms the adapter. Returns `false` when no gesture was active.
    pub fn end_gesture(&mut self, state: &mut OrientationState, reason: GestureEnd) -> bool {
        if self.gesture.take().is_none() {
            return false;
        }
        state.interaction = InteractionState::Idle;
        state.note_interaction();
        debug!("drag gesture ended: {reason:?}");
        true
    }

    /// Feeds an absolute pointer position; the delta is taken from the previous one.
    pub fn track_pointer(
        &mut self,
        state: &mut OrientationState,
        camera: &CameraFrame,
        position: Vec2,
    ) -> Option<DragDelta> {
        let delta = self.gesture.as_mut()?.delta_to(position);
        self.apply_delta(state, camera, delta.x, delta.y)
    }

    /// Applies a pixel delta. Ignored unless a gesture is active.
    pub fn apply_delta(
        &mut self,
        state: &mut OrientationState,
        camera: &CameraFrame,
        dx: f32,
        dy: f32,
    ) -> Option<DragDelta> {
        if !self.is_armed() {
            trace!("pointer move outside a gesture ignored");
            return None;
        }

        let delta = DragDelta {
            yaw: dx * self.sensitivity,
            pitch: dy * self.sensitivity,
        };
        state.velocity = AngularVelocity::new(delta.yaw / self.frame_time, delta.pitch / self.frame_time);

        state.orientation = premultiply_axis_angle(state.orientation, WORLD_UP, delta.yaw, self.epsilon);
        state.orientation =
            premultiply_axis_angle(state.orientation, camera.right, delta.pitch, self.epsilon);

        trace!("drag dx={dx} dy={dy} -> yaw={:.4} pitch={:.4}", delta.yaw, delta.pitch);
        Some(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{EulerRot, Quat, Vec3};

    fn camera() -> CameraFrame {
        CameraFrame::from_position(Vec3::new(0.0, 0.0, 5.0))
    }

    #[test]
    fn moves_outside_gesture_are_ignored() {
        let mut adapter = DragInputAdapter::default();
        let mut state = OrientationState::default();
        assert!(adapter.apply_delta(&mut state, &camera(), 50.0, 10.0).is_none());
        assert_eq!(state.orientation, Quat::IDENTITY);
        assert!(!adapter.end_gesture(&mut state, GestureEnd::Release));
    }

    #[test]
    fn horizontal_drag_is_pure_yaw() {
        let mut adapter = DragInputAdapter::default();
        let mut state = OrientationState::default();
        adapter.begin_gesture(&mut state, Vec2::ZERO);

        let delta = adapter
            .apply_delta(&mut state, &camera(), 100.0, 0.0)
            .expect("gesture is active");
        assert!((delta.yaw - 0.6).abs() < 1e-6);
        assert_eq!(delta.pitch, 0.0);

        let (yaw, pitch, _) = state.orientation.to_euler(EulerRot::YXZ);
        assert!((yaw - 0.6).abs() < 1e-5);
        assert!(pitch.abs() < 1e-6);
        assert!((state.velocity.yaw - 36.0).abs() < 1e-3);
    }

    #[test]
    fn vertical_drag_pitches_about_camera_right() {
        let mut adapter = DragInputAdapter::default();
        let mut state = OrientationState::default();
        adapter.begin_gesture(&mut state, Vec2::ZERO);
        adapter.apply_delta(&mut state, &camera(), 0.0, 50.0);

        let expected = Quat::from_rotation_x(0.3);
        assert!(state.orientation.dot(expected).abs() > 1.0 - 1e-6);
    }

    #[test]
    fn absolute_positions_produce_relative_deltas() {
        let mut adapter = DragInputAdapter::default();
        let mut state = OrientationState::default();
        adapter.begin_gesture(&mut state, Vec2::new(200.0, 100.0));

        let first = adapter
            .track_pointer(&mut state, &camera(), Vec2::new(210.0, 100.0))
            .expect("gesture is active");
        let second = adapter
            .track_pointer(&mut state, &camera(), Vec2::new(215.0, 100.0))
            .expect("gesture is active");
        assert!((first.yaw - 0.06).abs() < 1e-6);
        assert!((second.yaw - 0.03).abs() < 1e-6);
    }

    #[test]
    fn gesture_lifecycle_flips_interaction_state() {
        let mut adapter = DragInputAdapter::default();
        let mut state = OrientationState::default();
        state.clock = 3.0;

        adapter.begin_gesture(&mut state, Vec2::ZERO);
        assert!(state.is_dragging());
        assert_eq!(state.last_interaction_at, 3.0);

        state.clock = 4.0;
        assert!(adapter.end_gesture(&mut state, GestureEnd::Leave));
        assert_eq!(state.interaction, InteractionState::Idle);
        assert_eq!(state.last_interaction_at, 4.0);
        assert!(!adapter.is_armed());
    }
}
