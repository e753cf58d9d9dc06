//! Tuning constants and runtime configuration for the rig controller.

use std::f32::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RigError};

/// Radians of rotation per pixel of pointer travel.
pub const DEFAULT_DRAG_SENSITIVITY: f32 = 0.006;

/// Frame duration assumed when turning a drag delta into an angular rate.
pub const DEFAULT_DRAG_FRAME_TIME: f32 = 1.0 / 60.0;

/// Multiplicative velocity decay applied once per frame.
pub const DEFAULT_DAMPING: f32 = 0.92;

/// Rates below this magnitude are not integrated.
pub const DEFAULT_VELOCITY_EPSILON: f32 = 1e-6;

/// Constant yaw rate (rad/s) injected once the rig has been left alone.
pub const DEFAULT_IDLE_SPIN_RATE: f32 = 0.18;

/// Quiet period (seconds) before the idle spin kicks in.
pub const DEFAULT_IDLE_SPIN_DELAY: f32 = 1.5;

/// Quiet period (seconds) before face snapping becomes eligible.
pub const DEFAULT_SNAP_DELAY: f32 = 0.26;

/// Combined `|yaw| + |pitch|` rate (rad/s) below which the rig counts as settled.
pub const DEFAULT_SNAP_SPEED_THRESHOLD: f32 = 0.07;

/// Exponential ease rate for the snap blend, `1 - e^(-k dt)`.
pub const DEFAULT_SNAP_STIFFNESS: f32 = 10.0;

/// Angular distance (radians) to the snap target reported as aligned.
pub const DEFAULT_SNAP_ALIGNED_TOLERANCE: f32 = 1e-3;

/// Pitch limit, a little past a right angle so top and bottom faces can be reached square-on.
pub const MAX_PITCH: f32 = FRAC_PI_2 + 0.15;

/// Resting yaw (radians) of a freshly built rig.
pub const DEFAULT_INITIAL_YAW: f32 = 0.4;

/// Resting pitch (radians) of a freshly built rig.
pub const DEFAULT_INITIAL_PITCH: f32 = 0.2;

/// Camera position assumed until the host reports one.
pub const DEFAULT_CAMERA_POSITION: [f32; 3] = [3.0, 2.5, 4.0];

/// Frame budget used by the profiler warning (milliseconds).
pub const DEFAULT_FRAME_BUDGET_MS: f32 = 4.0;

/// Runtime tunables of a [`crate::RigController`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    pub drag_sensitivity: f32,
    pub drag_frame_time: f32,
    pub damping: f32,
    pub velocity_epsilon: f32,
    pub idle_spin_rate: f32,
    pub idle_spin_delay: f32,
    pub snap_delay: f32,
    pub snap_speed_threshold: f32,
    pub snap_stiffness: f32,
    pub snap_aligned_tolerance: f32,
    pub max_pitch: f32,
    /// Keep the roll component when re-encoding the clamped orientation.
    /// Dropping it levels the rig but stops side faces from snapping square.
    pub preserve_roll: bool,
    /// Accessibility hint from the host, sampled once when the controller is built.
    pub reduced_motion: bool,
    pub initial_yaw: f32,
    pub initial_pitch: f32,
    pub frame_budget_ms: f32,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
            drag_frame_time: DEFAULT_DRAG_FRAME_TIME,
            damping: DEFAULT_DAMPING,
            velocity_epsilon: DEFAULT_VELOCITY_EPSILON,
            idle_spin_rate: DEFAULT_IDLE_SPIN_RATE,
            idle_spin_delay: DEFAULT_IDLE_SPIN_DELAY,
            snap_delay: DEFAULT_SNAP_DELAY,
            snap_speed_threshold: DEFAULT_SNAP_SPEED_THRESHOLD,
            snap_stiffness: DEFAULT_SNAP_STIFFNESS,
            snap_aligned_tolerance: DEFAULT_SNAP_ALIGNED_TOLERANCE,
            max_pitch: MAX_PITCH,
            preserve_roll: true,
            reduced_motion: false,
            initial_yaw: DEFAULT_INITIAL_YAW,
            initial_pitch: DEFAULT_INITIAL_PITCH,
            frame_budget_ms: DEFAULT_FRAME_BUDGET_MS,
        }
    }
}

impl RigConfig {
    /// Same defaults, with the reduced-motion preference applied.
    pub fn with_reduced_motion(reduced_motion: bool) -> Self {
        Self {
            reduced_motion,
            ..Self::default()
        }
    }

    /// Checks every tunable for finiteness and sane ranges.
    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("drag_sensitivity", self.drag_sensitivity),
            ("drag_frame_time", self.drag_frame_time),
            ("damping", self.damping),
            ("velocity_epsilon", self.velocity_epsilon),
            ("idle_spin_rate", self.idle_spin_rate),
            ("idle_spin_delay", self.idle_spin_delay),
            ("snap_delay", self.snap_delay),
            ("snap_speed_threshold", self.snap_speed_threshold),
            ("snap_stiffness", self.snap_stiffness),
            ("snap_aligned_tolerance", self.snap_aligned_tolerance),
            ("max_pitch", self.max_pitch),
            ("initial_yaw", self.initial_yaw),
            ("initial_pitch", self.initial_pitch),
            ("frame_budget_ms", self.frame_budget_ms),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(RigError::NonFinite(name));
            }
        }

        if self.drag_frame_time <= 0.0 {
            return Err(RigError::OutOfRange {
                name: "drag_frame_time",
                value: self.drag_frame_time,
                expected: "> 0",
            });
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(RigError::OutOfRange {
                name: "damping",
                value: self.damping,
                expected: "within [0, 1]",
            });
        }

        let non_negative = [
            ("velocity_epsilon", self.velocity_epsilon),
            ("idle_spin_delay", self.idle_spin_delay),
            ("snap_delay", self.snap_delay),
            ("snap_speed_threshold", self.snap_speed_threshold),
            ("snap_stiffness", self.snap_stiffness),
            ("snap_aligned_tolerance", self.snap_aligned_tolerance),
            ("max_pitch", self.max_pitch),
        ];
        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(RigError::OutOfRange {
                    name,
                    value,
                    expected: ">= 0",
                });
            }
        }

        Ok(())
    }
}
