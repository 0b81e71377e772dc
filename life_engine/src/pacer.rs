// pacer.rs - Minimum-interval gate between simulation steps

use std::time::{Duration, Instant};

/// Lets a driver step at most once per `min_interval`.
///
/// The first poll only arms the pacer; nothing is due until a full
/// interval has passed after it.
#[derive(Debug, Clone)]
pub struct FramePacer {
    min_interval : Duration,
    last_step    : Option<Instant>,
}

impl FramePacer {
    pub fn new(min_interval: Duration) -> Self {
        Self { min_interval, last_step: None }
    }

    pub fn min_interval(&self) -> Duration { self.min_interval }

    pub fn set_min_interval(&mut self, min_interval: Duration) {
        self.min_interval = min_interval;
    }

    /// Returns the time since the last accepted poll when a step is due.
    pub fn poll(&mut self, now: Instant) -> Option<Duration> {
        let Some(then) = self.last_step else {
            self.last_step = Some(now);
            return None;
        };
        let elapsed = now.saturating_duration_since(then);
        if elapsed < self.min_interval {
            return None;
        }
        self.last_step = Some(now);
        Some(elapsed)
    }

    /// Forget the last step, e.g. after the driver was paused.
    pub fn reset(&mut self) {
        self.last_step = None;
    }
}
