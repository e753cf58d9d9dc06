use std::time::{Duration, Instant};

/// Per-stage timings of the most recent controller update.
#[derive(Debug, Default, Clone, Copy)]
pub struct RigProfiler {
    pub integrator_time: Duration,
    pub clamp_time: Duration,
    pub snap_time: Duration,
    pub total_frame_time: Duration,

    pub frames: u64,
    pub snap_targets_computed: u64,
}

impl RigProfiler {
    /// Clears the per-frame durations; counters keep accumulating.
    pub fn begin_frame(&mut self) {
        self.integrator_time = Duration::ZERO;
        self.clamp_time = Duration::ZERO;
        self.snap_time = Duration::ZERO;
        self.total_frame_time = Duration::ZERO;
        self.frames += 1;
    }

    pub fn report(&self) {
        let total_us = self.total_frame_time.as_micros() as f32;
        if total_us < 1.0 {
            return;
        }

        log::info!(
            "Rig profile: frames={}, snap targets={}, total={:.3} ms (integrator {:.1}%, clamp {:.1}%, snap {:.1}%)",
            self.frames,
            self.snap_targets_computed,
            self.total_frame_time.as_secs_f32() * 1000.0,
            (self.integrator_time.as_micros() as f32 / total_us) * 100.0,
            (self.clamp_time.as_micros() as f32 / total_us) * 100.0,
            (self.snap_time.as_micros() as f32 / total_us) * 100.0,
        );
    }
}

pub struct StageTimer<'a> {
    start: Instant,
    output: &'a mut Duration,
}

impl<'a> StageTimer<'a> {
    pub fn new(output: &'a mut Duration) -> Self {
        Self {
            start: Instant::now(),
            output,
        }
    }
}

impl<'a> Drop for StageTimer<'a> {
    fn drop(&mut self) {
        *self.output += self.start.elapsed();
    }
}
