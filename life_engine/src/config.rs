// config.rs - Construction parameters for a simulation

use std::time::Duration;

use crate::error::{EngineError, Result};
use crate::grid::cell_count;

pub const DEFAULT_WIDTH: usize = 160;
pub const DEFAULT_HEIGHT: usize = 120;
pub const DEFAULT_LIVE_PROBABILITY: f64 = 0.1;
pub const DEFAULT_TARGET_FPS: f64 = 10.0;

/// Grid size, initial density and the advisory step rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LifeConfig {
    pub width            : usize,   // grid columns
    pub height           : usize,   // grid rows
    pub live_probability : f64,     // initial fraction alive
    pub target_fps       : f64,     // max steps per second
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            live_probability: DEFAULT_LIVE_PROBABILITY,
            target_fps: DEFAULT_TARGET_FPS,
        }
    }
}

impl LifeConfig {
    pub fn validate(&self) -> Result<()> {
        cell_count(self.width, self.height)?;
        check_probability(self.live_probability)?;
        if !self.target_fps.is_finite() || self.target_fps <= 0.0 {
            return Err(EngineError::InvalidFrameRate(self.target_fps));
        }
        Ok(())
    }

    /// Shortest allowed gap between two steps.
    pub fn min_frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps)
    }
}

pub(crate) fn check_probability(p: f64) -> Result<()> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(EngineError::InvalidProbability(p))
    }
}
