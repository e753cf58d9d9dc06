//! Fidget Rig – orientation controller for a draggable cube.
//!
//! The rig is reoriented by pointer drags, drifts under decaying inertia
//! once released, idly spins when left alone, and eases its most
//! camera-facing face square to the viewer after motion settles.

pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod feedback;
pub mod input;
pub mod rig;
pub mod utils;

pub use glam::{Quat, Vec2, Vec3};

pub use config::{RigConfig, MAX_PITCH};
pub use crate::core::{
    state::{OrientationState, SnapTarget},
    types::{AngularVelocity, CameraFrame, CubeFace, InteractionState, SnapStatus, FACE_NORMALS},
};
pub use dynamics::{
    clamp::PitchClamp,
    integrator::{InertialIntegrator, IntegrationStep},
    snap::{compute_snap_target, most_facing_face, snap_target_toward, FaceSnapResolver, SnapStep},
};
pub use error::{Result, RigError};
pub use feedback::{InteractionKind, InteractionListener, InteractionNotifier};
pub use input::drag::{DragDelta, DragGesture, DragInputAdapter, GestureEnd};
pub use rig::{FrameReport, RigController};
pub use utils::profiling::RigProfiler;
