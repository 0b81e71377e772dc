//! Conway's Game of Life on a fixed grid with a dead frontier.
//!
//! [`LifeEngine`] owns the simulation. [`FramePacer`] and [`CycleHistory`]
//! are small helpers for whatever loop drives it.

pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod history;
pub mod pacer;
pub mod patterns;

pub use config::LifeConfig;
pub use engine::{EngineState, LifeEngine};
pub use error::{EngineError, Result};
pub use grid::{Grid, next_state};
pub use history::CycleHistory;
pub use pacer::FramePacer;
pub use patterns::{PATTERNS, Pattern};
