use glam::{EulerRot, Quat};

use crate::config::{RigConfig, MAX_PITCH};

/// Limits the tilt of the rig so it cannot flip over the top.
///
/// The orientation is decomposed as yaw about Y, then pitch about X, then
/// roll about Z; pitch is clamped and the angles re-encoded.
#[derive(Debug, Clone, Copy)]
pub struct PitchClamp {
    pub max_pitch: f32,
    pub preserve_roll: bool,
}

impl Default for PitchClamp {
    fn default() -> Self {
        Self {
            max_pitch: MAX_PITCH,
            preserve_roll: true,
        }
    }
}

impl PitchClamp {
    pub fn from_config(config: &RigConfig) -> Self {
        Self {
            max_pitch: config.max_pitch,
            preserve_roll: config.preserve_roll,
        }
    }

    /// `(yaw, pitch, roll)` of `orientation` in YXZ order.
    pub fn decompose(orientation: Quat) -> (f32, f32, f32) {
        orientation.to_euler(EulerRot::YXZ)
    }

    /// Returns the clamped, normalized orientation.
    ///
    /// In-range orientations are only renormalized: the Euler round trip is
    /// lossy near pitch ±90° and would drift a resting rig.
    pub fn apply(&self, orientation: Quat) -> Quat {
        let (yaw, pitch, roll) = Self::decompose(orientation);
        let clamped = pitch.clamp(-self.max_pitch, self.max_pitch);
        if clamped == pitch && self.preserve_roll {
            return orientation.normalize();
        }
        let roll = if self.preserve_roll { roll } else { 0.0 };
        Quat::from_euler(EulerRot::YXZ, yaw, clamped, roll).normalize()
    }
}
