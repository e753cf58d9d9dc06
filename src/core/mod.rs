//! Core state types of the rig.

pub mod state;
pub mod types;

pub use state::{OrientationState, SnapTarget};
pub use types::{
    AngularVelocity, CameraFrame, CubeFace, InteractionState, SnapStatus, FACE_NORMALS,
};
