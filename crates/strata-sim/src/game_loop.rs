//! Fixed-timestep tick loop.
//!
//! Accumulates elapsed wall time and runs simulation steps at the target
//! rate, clamping oversized frames so a stall slows the world down instead of
//! triggering a catch-up spiral. Single-threaded and cooperative: every step
//! runs to completion on the caller's thread before the next begins.

use std::time::Instant;
use tracing::warn;

/// Maximum frame time accepted per tick. Anything longer is clamped and the
/// simulation accepts the slowdown.
const MAX_FRAME_TIME: f64 = 0.25;

/// Accumulator-based fixed-timestep driver.
pub struct FixedTimestep {
    previous: Instant,
    accumulator: f64,
    fixed_dt: f64,
    total_sim_time: f64,
    step_count: u64,
}

impl FixedTimestep {
    /// A driver stepping at `target_hz` (0 falls back to 60 Hz), starting
    /// from the current instant.
    pub fn new(target_hz: u32) -> Self {
        let hz = if target_hz == 0 { 60 } else { target_hz };
        Self {
            previous: Instant::now(),
            accumulator: 0.0,
            fixed_dt: 1.0 / f64::from(hz),
            total_sim_time: 0.0,
            step_count: 0,
        }
    }

    /// Run one frame: measure elapsed wall time and call `step(dt)` zero or
    /// more times at the fixed rate.
    pub fn tick(&mut self, step: impl FnMut(f32)) {
        let now = Instant::now();
        let frame_time = now.duration_since(self.previous).as_secs_f64();
        self.previous = now;
        self.advance(frame_time, step);
    }

    /// Advance by an explicit frame time. Split out from [`tick`](Self::tick)
    /// so tests can drive the loop with synthetic times.
    fn advance(&mut self, mut frame_time: f64, mut step: impl FnMut(f32)) {
        if frame_time > MAX_FRAME_TIME {
            warn!(
                frame_ms = frame_time * 1000.0,
                "frame time exceeds maximum, clamping"
            );
            frame_time = MAX_FRAME_TIME;
        }

        self.accumulator += frame_time;
        while self.accumulator >= self.fixed_dt {
            step(self.fixed_dt as f32);
            self.total_sim_time += self.fixed_dt;
            self.accumulator -= self.fixed_dt;
            self.step_count += 1;
        }
    }

    /// Interpolation alpha in `[0, 1)` for rendering between sim states.
    pub fn alpha(&self) -> f64 {
        if self.accumulator > 0.0 {
            self.accumulator / self.fixed_dt
        } else {
            0.0
        }
    }

    /// The fixed step duration in seconds.
    pub fn fixed_dt(&self) -> f64 {
        self.fixed_dt
    }

    /// Total number of simulation steps executed.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Total simulated time in seconds.
    pub fn total_sim_time(&self) -> f64 {
        self.total_sim_time
    }
}
