//! Per-frame motion stages: inertia and idle spin, pitch clamp, face snap.

pub mod clamp;
pub mod integrator;
pub mod snap;

pub use clamp::PitchClamp;
pub use integrator::{InertialIntegrator, IntegrationStep};
pub use snap::{compute_snap_target, most_facing_face, snap_target_toward, FaceSnapResolver, SnapStep};
