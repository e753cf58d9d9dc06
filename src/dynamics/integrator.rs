use log::trace;

use crate::{
    config::RigConfig,
    core::{state::OrientationState, types::CameraFrame},
    utils::math::{premultiply_axis_angle, WORLD_UP},
};

/// What the integrator did during one frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IntegrationStep {
    pub inertia_applied: bool,
    pub idle_spin_applied: bool,
}

/// Advances the rig under residual drag velocity and idle spin while it is not held.
#[derive(Debug, Clone)]
pub struct InertialIntegrator {
    /// Per-frame multiplicative decay; not normalized by frame duration.
    pub damping: f32,
    pub velocity_epsilon: f32,
    pub idle_spin_rate: f32,
    pub idle_spin_delay: f32,
    reduced_motion: bool,
}

impl Default for InertialIntegrator {
    fn default() -> Self {
        Self::from_config(&RigConfig::default())
    }
}

impl InertialIntegrator {
    pub fn from_config(config: &RigConfig) -> Self {
        Self {
            damping: config.damping,
            velocity_epsilon: config.velocity_epsilon,
            idle_spin_rate: config.idle_spin_rate,
            idle_spin_delay: config.idle_spin_delay,
            reduced_motion: config.reduced_motion,
        }
    }

    /// Applies residual velocity, decays it, then adds the idle spin when due.
    ///
    /// Yaw turns about world up and pitch about the camera's right axis,
    /// both pre-multiplied so each increment acts in world space.
    pub fn step(&self, state: &mut OrientationState, camera: &CameraFrame, dt: f32) -> IntegrationStep {
        let mut step = IntegrationStep::default();
        if state.is_dragging() {
            return step;
        }

        let before = state.orientation;
        let yaw = state.velocity.yaw * dt;
        let pitch = state.velocity.pitch * dt;
        state.orientation =
            premultiply_axis_angle(state.orientation, WORLD_UP, yaw, self.velocity_epsilon);
        state.orientation =
            premultiply_axis_angle(state.orientation, camera.right, pitch, self.velocity_epsilon);
        step.inertia_applied = state.orientation != before;

        state.velocity.decay(self.damping);

        if !self.reduced_motion && state.idle_for() > self.idle_spin_delay {
            state.orientation = premultiply_axis_angle(
                state.orientation,
                WORLD_UP,
                self.idle_spin_rate * dt,
                self.velocity_epsilon,
            );
            step.idle_spin_applied = true;
        }

        trace!(
            "integrator: yaw_rate={:.4} pitch_rate={:.4} inertia={} idle_spin={}",
            state.velocity.yaw,
            state.velocity.pitch,
            step.inertia_applied,
            step.idle_spin_applied
        );
        step
    }
}
