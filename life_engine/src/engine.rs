// engine.rs - Double-buffered Game of Life simulation

use rand::Rng;

use crate::config::{LifeConfig, check_probability};
use crate::error::{EngineError, Result};
use crate::grid::Grid;
use crate::patterns::Pattern;

/// Radius used for pointer-driven painting: a 3x3 block.
pub const DEFAULT_BRUSH_RADIUS: usize = 1;

/// Unseeded until the first seed or edit, Running afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Unseeded,
    Running,
}

/// Owns two equally sized grids. One is current (what callers read and
/// edit); the other is scratch for the generation being computed. `step`
/// fills scratch from a frozen view of current and then flips which is
/// which, so no cell ever sees a neighbour's next-generation value.
///
/// The engine does no locking. Drivers must not call into it from
/// more than one place at a time.
#[derive(Debug, Clone)]
pub struct LifeEngine {
    buffers    : [Grid; 2],
    current    : usize,         // index of the current buffer
    generation : u64,
    state      : EngineState,
}

impl LifeEngine {
    /// All-dead engine of fixed size.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let grid = Grid::new(width, height)?;
        Ok(Self {
            buffers: [grid.clone(), grid],
            current: 0,
            generation: 0,
            state: EngineState::Unseeded,
        })
    }

    pub fn from_config(config: &LifeConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.width, config.height)
    }

    pub fn width(&self) -> usize { self.current().width() }

    pub fn height(&self) -> usize { self.current().height() }

    pub fn generation(&self) -> u64 { self.generation }

    pub fn state(&self) -> EngineState { self.state }

    /// The authoritative grid, for rendering.
    pub fn current(&self) -> &Grid {
        &self.buffers[self.current]
    }

    fn current_mut(&mut self) -> &mut Grid {
        &mut self.buffers[self.current]
    }

    /// Randomly populates the interior: each cell independently comes
    /// alive when a uniform draw from `[0, 1)` is below `probability`.
    ///
    /// Frontier cells are left dead. Only valid on an unseeded engine;
    /// call [`clear`](Self::clear) to seed again.
    pub fn seed<R: Rng + ?Sized>(&mut self, probability: f64, rng: &mut R) -> Result<()> {
        check_probability(probability)?;
        if self.state == EngineState::Running {
            return Err(EngineError::AlreadySeeded);
        }
        let (width, height) = (self.width(), self.height());
        let grid = self.current_mut();
        for y in 1..height - 1 {
            for x in 1..width - 1 {
                grid.set(x, y, rng.random::<f64>() < probability)?;
            }
        }
        self.state = EngineState::Running;
        Ok(())
    }

    /// Advances exactly one generation and swaps the buffers.
    pub fn step(&mut self) {
        let [a, b] = &mut self.buffers;
        let (front, back) = if self.current == 0 { (&*a, b) } else { (&*b, a) };
        front.advance_into(back);
        self.current ^= 1;
        self.generation += 1;
    }

    pub fn is_alive(&self, x: usize, y: usize) -> Result<bool> {
        self.current().cell(x, y)
    }

    /// Live neighbour count of `(x, y)` in the current grid; 0 on the frontier.
    pub fn count_neighbors(&self, x: usize, y: usize) -> Result<u8> {
        self.current().count_neighbors(x, y)
    }

    pub fn population(&self) -> usize {
        self.current().live_count()
    }

    /// Sets the 3x3 block around `(cx, cy)` alive.
    pub fn activate_region(&mut self, cx: usize, cy: usize) -> Result<()> {
        self.activate_region_with_radius(cx, cy, DEFAULT_BRUSH_RADIUS)
    }

    /// Sets every cell within `radius` (Chebyshev) of `(cx, cy)` alive,
    /// whatever its prior state.
    ///
    /// The centre must be on the grid, otherwise `OutOfBounds`. The square
    /// is clipped to the interior, so frontier cells are never written.
    pub fn activate_region_with_radius(&mut self, cx: usize, cy: usize, radius: usize) -> Result<()> {
        self.current().cell(cx, cy)?;
        let (width, height) = (self.width(), self.height());
        let xs = cx.saturating_sub(radius).max(1)..=cx.saturating_add(radius).min(width - 2);
        let ys = cy.saturating_sub(radius).max(1)..=cy.saturating_add(radius).min(height - 2);
        let grid = self.current_mut();
        for y in ys {
            for x in xs.clone() {
                grid.set(x, y, true)?;
            }
        }
        self.state = EngineState::Running;
        Ok(())
    }

    /// Flips one interior cell and returns its new state. Frontier cells
    /// stay dead and report `false`.
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool> {
        let alive = self.current().cell(x, y)?;
        if self.current().is_border(x, y) {
            return Ok(false);
        }
        self.current_mut().set(x, y, !alive)?;
        self.state = EngineState::Running;
        Ok(!alive)
    }

    /// Writes `pattern` alive with its top-left corner at `(ox, oy)`.
    ///
    /// Nothing is written unless every cell lands in the interior.
    pub fn place_pattern(&mut self, pattern: &Pattern, ox: usize, oy: usize) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        let (pw, ph) = pattern.extent();
        let fits = |o: usize, extent: usize, side: usize| {
            o > 0 && o.checked_add(extent).is_some_and(|end| end < side)
        };
        if !fits(ox, pw, width) || !fits(oy, ph, height) {
            return Err(EngineError::PatternOutOfBounds { name: pattern.name });
        }
        let grid = self.current_mut();
        for &(dx, dy) in pattern.cells {
            grid.set(ox + dx, oy + dy, true)?;
        }
        self.state = EngineState::Running;
        Ok(())
    }

    /// Places `pattern` in the middle of the grid.
    pub fn place_pattern_centered(&mut self, pattern: &Pattern) -> Result<()> {
        let (pw, ph) = pattern.extent();
        if pw > self.width() - 2 || ph > self.height() - 2 {
            return Err(EngineError::PatternOutOfBounds { name: pattern.name });
        }
        let ox = (self.width() - pw) / 2;
        let oy = (self.height() - ph) / 2;
        self.place_pattern(pattern, ox, oy)
    }

    /// Kills every cell, resets the generation counter and returns to
    /// the unseeded state.
    pub fn clear(&mut self) {
        self.current_mut().clear();
        self.generation = 0;
        self.state = EngineState::Unseeded;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{BLINKER, GLIDER};

    #[test]
    fn test_step_flips_buffers() {
        let mut engine = LifeEngine::new(5, 5).unwrap();
        assert_eq!(engine.current, 0);
        engine.step();
        assert_eq!(engine.current, 1);
        engine.step();
        assert_eq!(engine.current, 0);
        assert_eq!(engine.generation(), 2);
    }

    #[test]
    fn test_edits_move_to_running() {
        let mut engine = LifeEngine::new(8, 8).unwrap();
        assert_eq!(engine.state(), EngineState::Unseeded);
        engine.toggle(3, 3).unwrap();
        assert_eq!(engine.state(), EngineState::Running);
        engine.clear();
        assert_eq!(engine.state(), EngineState::Unseeded);
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_toggle_ignores_frontier() {
        let mut engine = LifeEngine::new(6, 6).unwrap();
        assert_eq!(engine.toggle(0, 3), Ok(false));
        assert_eq!(engine.is_alive(0, 3), Ok(false));
        assert_eq!(engine.toggle(2, 3), Ok(true));
        assert_eq!(engine.toggle(2, 3), Ok(false));
        assert!(engine.toggle(6, 0).is_err());
    }

    #[test]
    fn test_place_pattern_bounds() {
        let mut engine = LifeEngine::new(6, 6).unwrap();
        assert_eq!(
            engine.place_pattern(&BLINKER, 3, 2),
            Err(EngineError::PatternOutOfBounds { name: "Blinker" })
        );
        assert_eq!(
            engine.place_pattern(&BLINKER, 0, 2),
            Err(EngineError::PatternOutOfBounds { name: "Blinker" })
        );
        assert_eq!(engine.population(), 0);
        engine.place_pattern(&BLINKER, 2, 2).unwrap();
        assert_eq!(engine.population(), 3);
    }

    #[test]
    fn test_place_pattern_huge_origin() {
        let mut engine = LifeEngine::new(10, 10).unwrap();
        let err = Err(EngineError::PatternOutOfBounds { name: "Blinker" });
        assert_eq!(engine.place_pattern(&BLINKER, usize::MAX, 2), err);
        assert_eq!(engine.place_pattern(&BLINKER, 2, usize::MAX), err);
        assert_eq!(engine.population(), 0);
        assert_eq!(engine.state(), EngineState::Unseeded);
    }

    #[test]
    fn test_centered_glider() {
        let mut engine = LifeEngine::new(11, 11).unwrap();
        engine.place_pattern_centered(&GLIDER).unwrap();
        assert_eq!(engine.is_alive(5, 4), Ok(true));
        assert_eq!(engine.is_alive(4, 6), Ok(true));
        assert_eq!(engine.population(), 5);

        let mut tiny = LifeEngine::new(4, 4).unwrap();
        assert!(tiny.place_pattern_centered(&GLIDER).is_err());
    }
}
