use glam::{EulerRot, Quat};
use serde::{Deserialize, Serialize};

use super::types::{AngularVelocity, CubeFace, InteractionState};

/// Cached face-snap solution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapTarget {
    /// Face that will end up pointing at the camera.
    pub face: CubeFace,
    /// Orientation with the face aligned but no roll correction.
    pub aligned: Quat,
    /// Final orientation, roll correction included.
    pub orientation: Quat,
    /// Whether the roll correction was applied.
    pub rolled: bool,
}

/// Single source of truth for the rig: rotation, rates, and interaction status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrientationState {
    pub orientation: Quat,
    pub velocity: AngularVelocity,
    pub interaction: InteractionState,
    /// Controller clock (seconds) of the last pointer or widget interaction.
    pub last_interaction_at: f64,
    /// Monotonic controller clock in seconds, advanced by frame deltas.
    pub clock: f64,
    pub snap_target: Option<SnapTarget>,
}

impl Default for OrientationState {
    fn default() -> Self {
        Self::new(Quat::IDENTITY)
    }
}

impl OrientationState {
    pub fn new(orientation: Quat) -> Self {
        Self {
            orientation: orientation.normalize(),
            velocity: AngularVelocity::ZERO,
            interaction: InteractionState::Idle,
            last_interaction_at: 0.0,
            clock: 0.0,
            snap_target: None,
        }
    }

    /// Rest pose from a yaw/pitch pair, applied in YXZ order.
    pub fn from_yaw_pitch(yaw: f32, pitch: f32) -> Self {
        Self::new(Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0))
    }

    pub fn is_dragging(&self) -> bool {
        self.interaction == InteractionState::Dragging
    }

    /// Seconds since the last recorded interaction.
    pub fn idle_for(&self) -> f32 {
        (self.clock - self.last_interaction_at).max(0.0) as f32
    }

    pub fn advance_clock(&mut self, dt: f32) {
        self.clock += f64::from(dt);
    }

    pub fn note_interaction(&mut self) {
        self.last_interaction_at = self.clock;
    }

    /// Drops any cached snap target; returns whether one was present.
    pub fn invalidate_snap(&mut self) -> bool {
        self.snap_target.take().is_some()
    }

    /// Replaces the orientation, renormalizing it.
    pub fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation.normalize();
    }
}
