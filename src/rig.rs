use std::time::Instant;

use glam::{Quat, Vec2, Vec3};
use log::debug;

use crate::{
    config::{RigConfig, DEFAULT_CAMERA_POSITION},
    core::{
        state::{OrientationState, SnapTarget},
        types::{AngularVelocity, CameraFrame, InteractionState, SnapStatus},
    },
    dynamics::{
        clamp::PitchClamp,
        integrator::{InertialIntegrator, IntegrationStep},
        snap::{FaceSnapResolver, SnapStep},
    },
    error::Result,
    feedback::{InteractionKind, InteractionListener, InteractionNotifier},
    input::drag::{DragDelta, DragInputAdapter, GestureEnd},
    utils::{
        logging::{sanitize_dt, warn_if_frame_budget_exceeded, FrameTrace},
        profiling::{RigProfiler, StageTimer},
    },
};

/// Summary of one [`RigController::update`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Orientation to hand to the renderer.
    pub orientation: Quat,
    /// The frame was skipped because a gesture holds the rig.
    pub dragging: bool,
    pub integration: IntegrationStep,
    pub snap: SnapStep,
}

/// Orientation controller of the rig.
///
/// Pointer callbacks and [`update`](Self::update) are expected on one thread,
/// never concurrently. While idle every frame runs the integrator, the pitch
/// clamp and the face-snap resolver, in that order.
#[derive(Debug)]
pub struct RigController {
    state: OrientationState,
    config: RigConfig,
    camera_position: Vec3,
    drag: DragInputAdapter,
    integrator: InertialIntegrator,
    clamp: PitchClamp,
    snap: FaceSnapResolver,
    notifier: InteractionNotifier,
    profiler: RigProfiler,
}

impl Default for RigController {
    fn default() -> Self {
        Self::from_valid_config(RigConfig::default())
    }
}

impl RigController {
    /// Controller with default tuning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller with custom tuning; rejects invalid configurations.
    pub fn with_config(config: RigConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: RigConfig) -> Self {
        debug!(
            "rig controller created (reduced_motion={}, max_pitch={:.3})",
            config.reduced_motion, config.max_pitch
        );
        Self {
            state: OrientationState::from_yaw_pitch(config.initial_yaw, config.initial_pitch),
            camera_position: Vec3::from_array(DEFAULT_CAMERA_POSITION),
            drag: DragInputAdapter::from_config(&config),
            integrator: InertialIntegrator::from_config(&config),
            clamp: PitchClamp::from_config(&config),
            snap: FaceSnapResolver::from_config(&config),
            notifier: InteractionNotifier::new(),
            profiler: RigProfiler::default(),
            config,
        }
    }

    /// Current rotation of the rig, always unit length.
    pub fn current_orientation(&self) -> Quat {
        self.state.orientation
    }

    /// Replaces the orientation, e.g. to reset the rig. Drops any snap target.
    pub fn set_orientation(&mut self, orientation: Quat) {
        self.state.set_orientation(orientation);
        self.state.invalidate_snap();
    }

    pub fn state(&self) -> &OrientationState {
        &self.state
    }

    pub fn config(&self) -> &RigConfig {
        &self.config
    }

    pub fn interaction_state(&self) -> InteractionState {
        self.state.interaction
    }

    pub fn velocity(&self) -> AngularVelocity {
        self.state.velocity
    }

    /// Seconds since the last pointer or widget interaction.
    pub fn idle_for(&self) -> f32 {
        self.state.idle_for()
    }

    pub fn snap_target(&self) -> Option<&SnapTarget> {
        self.state.snap_target.as_ref()
    }

    pub fn snap_status(&self) -> SnapStatus {
        self.snap.status(&self.state)
    }

    pub fn profiler(&self) -> &RigProfiler {
        &self.profiler
    }

    pub fn camera_position(&self) -> Vec3 {
        self.camera_position
    }

    /// Updates the camera used by pointer handling between frames.
    pub fn set_camera_position(&mut self, camera_position: Vec3) {
        self.camera_position = camera_position;
    }

    /// Registers an audio/haptic collaborator.
    pub fn add_listener<L: InteractionListener + 'static>(&mut self, listener: L) {
        self.notifier.add_listener(listener);
    }

    /// Resets the idle timer on behalf of another widget on the rig.
    pub fn note_interaction(&mut self) {
        self.state.note_interaction();
    }

    pub fn on_pointer_down(&mut self, position: Vec2) {
        self.drag.begin_gesture(&mut self.state, position);
        self.notifier.notify(InteractionKind::GestureStart);
    }

    /// Applies a pixel delta from the host's pointer capture.
    pub fn on_pointer_move(&mut self, dx: f32, dy: f32) -> Option<DragDelta> {
        let camera = CameraFrame::from_position(self.camera_position);
        let delta = self.drag.apply_delta(&mut self.state, &camera, dx, dy)?;
        self.state.orientation = self.clamp.apply(self.state.orientation);
        Some(delta)
    }

    /// Like [`on_pointer_move`](Self::on_pointer_move) but takes an absolute position.
    pub fn on_pointer_moved_to(&mut self, position: Vec2) -> Option<DragDelta> {
        let camera = CameraFrame::from_position(self.camera_position);
        let delta = self.drag.track_pointer(&mut self.state, &camera, position)?;
        self.state.orientation = self.clamp.apply(self.state.orientation);
        Some(delta)
    }

    pub fn on_pointer_up(&mut self) {
        if self.drag.end_gesture(&mut self.state, GestureEnd::Release) {
            self.notifier.notify(InteractionKind::GestureEnd);
        }
    }

    pub fn on_pointer_leave(&mut self) {
        self.drag.end_gesture(&mut self.state, GestureEnd::Leave);
    }

    /// Ends any active gesture without feedback, e.g. when the host tears down.
    pub fn cancel_gesture(&mut self) {
        self.drag.end_gesture(&mut self.state, GestureEnd::Cancel);
    }

    /// Advances the rig by one rendered frame and returns the pose to draw.
    pub fn update(&mut self, dt: f32, camera_position: Vec3) -> FrameReport {
        let start = Instant::now();
        let dt = sanitize_dt(dt);

        self.camera_position = camera_position;
        self.state.advance_clock(dt);
        self.profiler.begin_frame();
        let _trace = FrameTrace::begin(self.profiler.frames, dt);

        let mut report = FrameReport {
            orientation: self.state.orientation,
            dragging: self.state.is_dragging(),
            integration: IntegrationStep::default(),
            snap: SnapStep::default(),
        };

        if !report.dragging {
            let camera = CameraFrame::from_position(camera_position);
            {
                let _stage = StageTimer::new(&mut self.profiler.integrator_time);
                report.integration = self.integrator.step(&mut self.state, &camera, dt);
            }
            {
                let _stage = StageTimer::new(&mut self.profiler.clamp_time);
                self.state.orientation = self.clamp.apply(self.state.orientation);
            }
            {
                let _stage = StageTimer::new(&mut self.profiler.snap_time);
                report.snap = self.snap.step(&mut self.state, &camera, dt);
            }
            if report.snap.target_computed {
                self.profiler.snap_targets_computed += 1;
            }
        }

        report.orientation = self.state.orientation;
        self.profiler.total_frame_time = start.elapsed();
        warn_if_frame_budget_exceeded(self.profiler.total_frame_time, self.config.frame_budget_ms);
        report
    }
}
