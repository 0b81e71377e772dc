// error.rs - Failure conditions for the Life engine

use thiserror::Error;

/// Everything the engine can refuse to do.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds { x: usize, y: usize, width: usize, height: usize },

    #[error("grid must be at least 3x3, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("live probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("target frame rate must be positive, got {0}")]
    InvalidFrameRate(f64),

    #[error("engine is already seeded; clear it first")]
    AlreadySeeded,

    #[error("pattern '{name}' does not fit inside the grid at that origin")]
    PatternOutOfBounds { name: &'static str },
}

pub type Result<T> = std::result::Result<T, EngineError>;
