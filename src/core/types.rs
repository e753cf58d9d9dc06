use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::utils::math::{camera_right, view_direction};

/// Yaw and pitch rates of the rig in radians per second.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngularVelocity {
    /// Rotation rate about world up.
    pub yaw: f32,
    /// Rotation rate about the camera-relative right axis.
    pub pitch: f32,
}

impl AngularVelocity {
    pub const ZERO: Self = Self {
        yaw: 0.0,
        pitch: 0.0,
    };

    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self { yaw, pitch }
    }

    /// Combined speed used by the settle test, `|yaw| + |pitch|`.
    pub fn speed(&self) -> f32 {
        self.yaw.abs() + self.pitch.abs()
    }

    /// Scales both rates by `factor`.
    pub fn decay(&mut self, factor: f32) {
        self.yaw *= factor;
        self.pitch *= factor;
    }
}

/// Who currently drives the orientation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionState {
    /// The per-frame loop owns the orientation.
    #[default]
    Idle,
    /// A pointer gesture owns the orientation.
    Dragging,
}

/// One of the six faces of the cube, named by its outward local normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CubeFace {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

/// Outward normals of the cube in its local frame, in [`CubeFace::ALL`] order.
pub const FACE_NORMALS: [Vec3; 6] = [
    Vec3::X,
    Vec3::NEG_X,
    Vec3::Y,
    Vec3::NEG_Y,
    Vec3::Z,
    Vec3::NEG_Z,
];

impl CubeFace {
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::NegX,
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Local axis of the face: 0 = x, 1 = y, 2 = z.
    pub fn axis(self) -> usize {
        self.index() >> 1
    }

    pub fn normal(self) -> Vec3 {
        FACE_NORMALS[self.index()]
    }

    /// The four local directions perpendicular to this face, i.e. the
    /// normals of its neighbouring faces.
    pub fn edge_directions(self) -> [Vec3; 4] {
        match self.axis() {
            0 => [Vec3::Y, Vec3::NEG_Y, Vec3::Z, Vec3::NEG_Z],
            1 => [Vec3::X, Vec3::NEG_X, Vec3::Z, Vec3::NEG_Z],
            _ => [Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y],
        }
    }

    /// World-space normal of this face under `orientation`.
    pub fn world_normal(self, orientation: Quat) -> Vec3 {
        (orientation * self.normal()).normalize()
    }
}

/// Progress of the face-snap blend.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapStatus {
    /// No target cached.
    #[default]
    Inactive,
    /// Easing toward a cached target.
    Blending,
    /// Within tolerance of the cached target.
    Aligned,
}

/// Camera basis derived fresh each frame from the camera position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    /// Unit vector from the origin toward the camera, if the camera is not at the origin.
    pub view: Option<Vec3>,
    /// Camera-relative right axis used for pitch.
    pub right: Vec3,
}

impl CameraFrame {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            view: view_direction(position),
            right: camera_right(position),
        }
    }
}
