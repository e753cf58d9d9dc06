use log::{log_enabled, warn, Level};
use std::time::{Duration, Instant};

/// Traces one controller update: frame index, delta, and wall time spent.
pub struct FrameTrace {
    frame: u64,
    dt: f32,
    start: Instant,
}

impl FrameTrace {
    pub fn begin(frame: u64, dt: f32) -> Self {
        if log_enabled!(Level::Trace) {
            log::trace!("rig frame {frame} begin (dt {:.2} ms)", dt * 1000.0);
        }
        Self {
            frame,
            dt,
            start: Instant::now(),
        }
    }
}

impl Drop for FrameTrace {
    fn drop(&mut self) {
        if log_enabled!(Level::Trace) {
            log::trace!(
                "rig frame {} end (dt {:.2} ms, took {} µs)",
                self.frame,
                self.dt * 1000.0,
                self.start.elapsed().as_micros()
            );
        }
    }
}

/// Warns when a controller update took longer than its budget.
pub fn warn_if_frame_budget_exceeded(duration: Duration, budget_ms: f32) -> bool {
    let elapsed_ms = duration.as_secs_f32() * 1000.0;
    if elapsed_ms > budget_ms {
        warn!("Rig update exceeded budget: {elapsed_ms:.2} ms > {budget_ms:.2} ms");
        return true;
    }
    false
}

/// Replaces a negative or non-finite frame delta with zero.
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        warn!("Ignoring invalid frame delta {dt}");
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_deltas_become_zero() {
        assert_eq!(sanitize_dt(0.016), 0.016);
        assert_eq!(sanitize_dt(-1.0), 0.0);
        assert_eq!(sanitize_dt(f32::NAN), 0.0);
        assert_eq!(sanitize_dt(f32::INFINITY), 0.0);
    }

    #[test]
    fn frame_trace_carries_frame_and_delta() {
        let trace = FrameTrace::begin(7, 0.016);
        assert_eq!(trace.frame, 7);
        assert_eq!(trace.dt, 0.016);
        drop(trace);
    }

    #[test]
    fn budget_check_compares_milliseconds() {
        assert!(warn_if_frame_budget_exceeded(Duration::from_millis(5), 4.0));
        assert!(!warn_if_frame_budget_exceeded(Duration::from_micros(500), 4.0));
    }
}
