//! Frame pacing for the host loop: a fixed-timestep accumulator that decides
//! how many simulation ticks each displayed frame owes, and a per-second rate
//! counter for the TPS/FPS readout.

use std::time::Duration;
use tracing::warn;

/// Logical simulation rate.
pub const TICKS_PER_SECOND: u32 = 60;

/// Longest frame time credited to the accumulator. Anything slower is
/// accepted as slowdown instead of a burst of catch-up ticks.
pub const MAX_FRAME_TIME: Duration = Duration::from_millis(250);

/// Fixed-timestep accumulator.
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: Duration,
    accumulator: Duration,
    total_ticks: u64,
}

impl FixedStep {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            step: Duration::from_secs(1) / ticks_per_second.max(1),
            accumulator: Duration::ZERO,
            total_ticks: 0,
        }
    }

    /// Credit `frame_time` and return how many ticks to run now.
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        let frame_time = if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time.as_secs_f64() * 1000.0,
                MAX_FRAME_TIME.as_secs_f64() * 1000.0
            );
            MAX_FRAME_TIME
        } else {
            frame_time
        };

        self.accumulator += frame_time;
        let mut ticks = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            ticks += 1;
        }
        self.total_ticks += u64::from(ticks);
        ticks
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(TICKS_PER_SECOND)
    }
}

/// Counts events and reports their rate roughly once per second.
#[derive(Debug, Clone, Default)]
pub struct RateCounter {
    count: u32,
    elapsed: Duration,
    rate: f64,
}

impl RateCounter {
    /// Record `events` that happened over `dt`. Returns the new rate when a
    /// full second has been observed.
    pub fn record(&mut self, events: u32, dt: Duration) -> Option<f64> {
        self.count += events;
        self.elapsed += dt;
        if self.elapsed < Duration::from_secs(1) {
            return None;
        }
        self.rate = f64::from(self.count) / self.elapsed.as_secs_f64();
        self.count = 0;
        self.elapsed = Duration::ZERO;
        Some(self.rate)
    }

    /// Last completed per-second rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }
}
