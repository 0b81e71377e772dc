// grid.rs - Grid type for Conway's Game of Life

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::error::{EngineError, Result};

/// Smallest legal side: a dead frontier on both edges plus one interior cell.
pub const MIN_SIDE: usize = 3;

/// Fixed-size rectangular field of cells, stored row-major.
///
/// The outermost ring (row 0, row `height - 1`, column 0, column
/// `width - 1`) is the dead frontier: it never takes part in the
/// birth/survival rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width  : usize,
    height : usize,
    cells  : Vec<bool>,
}

impl Grid {
    /// All-dead grid of the given size.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = cell_count(width, height)?;
        Ok(Self { width, height, cells: vec![false; len] })
    }

    pub fn width(&self) -> usize { self.width }

    pub fn height(&self) -> usize { self.height }

    /// Cell state, or `None` when `(x, y)` is off the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Cell state, failing with `OutOfBounds` when `(x, y)` is off the grid.
    pub fn cell(&self, x: usize, y: usize) -> Result<bool> {
        self.get(x, y).ok_or_else(|| self.out_of_bounds(x, y))
    }

    pub fn is_border(&self, x: usize, y: usize) -> bool {
        x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1
    }

    /// Live cells among the 8 Moore neighbours of `(x, y)`.
    ///
    /// Frontier cells always report 0, which keeps them frozen dead
    /// under the rule. For interior cells this is the 3x3 block sum
    /// minus the centre.
    pub fn count_neighbors(&self, x: usize, y: usize) -> Result<u8> {
        if self.index(x, y).is_none() {
            return Err(self.out_of_bounds(x, y));
        }
        if self.is_border(x, y) {
            return Ok(0);
        }
        Ok(self.interior_neighbors(x, y))
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Hash of the cell contents, used to spot repeating generations.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.cells.hash(&mut hasher);
        hasher.finish()
    }

    /// Row-major iterator over `(x, y, alive)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &alive)| (i % width, i / width, alive))
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        let i = self.index(x, y).ok_or_else(|| self.out_of_bounds(x, y))?;
        self.cells[i] = alive;
        Ok(())
    }

    /// Writes the generation after `self` into `next`, reading only `self`.
    ///
    /// Frontier cells of `next` are always written dead.
    pub(crate) fn advance_into(&self, next: &mut Grid) {
        debug_assert_eq!((self.width, self.height), (next.width, next.height));
        for y in 0..self.height {
            for x in 0..self.width {
                let i = y * self.width + x;
                next.cells[i] = !self.is_border(x, y)
                    && next_state(self.cells[i], self.interior_neighbors(x, y));
            }
        }
    }

    /// Caller guarantees `(x, y)` is interior, so every neighbour exists.
    pub(crate) fn interior_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut count = 0;
        for ny in y - 1..=y + 1 {
            let row = ny * self.width;
            for nx in x - 1..=x + 1 {
                if self.cells[row + nx] { count += 1; }
            }
        }
        if self.cells[y * self.width + x] { count -= 1; }
        count
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    fn out_of_bounds(&self, x: usize, y: usize) -> EngineError {
        EngineError::OutOfBounds { x, y, width: self.width, height: self.height }
    }
}

/// Number of cells in a `width x height` grid, if that size is allowed.
pub(crate) fn cell_count(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .filter(|&len| width >= MIN_SIDE && height >= MIN_SIDE && len <= isize::MAX as usize)
        .ok_or(EngineError::InvalidDimensions { width, height })
}

/// Conway's B3/S23 rule for one cell.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,   // survival
        (false, 3)            => true,   // birth
        _                     => false,  // death or stays dead
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_grids_without_interior() {
        assert_eq!(Grid::new(2, 10), Err(EngineError::InvalidDimensions { width: 2, height: 10 }));
        assert_eq!(Grid::new(10, 0), Err(EngineError::InvalidDimensions { width: 10, height: 0 }));
        assert!(Grid::new(3, 3).is_ok());
    }

    #[test]
    fn test_rejects_sizes_that_overflow() {
        assert_eq!(
            Grid::new(usize::MAX / 2, 3),
            Err(EngineError::InvalidDimensions { width: usize::MAX / 2, height: 3 })
        );
        assert!(Grid::new(usize::MAX, usize::MAX).is_err());
        assert!(Grid::new(isize::MAX as usize, 3).is_err());
    }

    #[test]
    fn test_border_ring() {
        let grid = Grid::new(4, 5).unwrap();
        assert!(grid.is_border(0, 2));
        assert!(grid.is_border(3, 2));
        assert!(grid.is_border(2, 0));
        assert!(grid.is_border(2, 4));
        assert!(!grid.is_border(1, 1));
        assert!(!grid.is_border(2, 3));
    }

    #[test]
    fn test_border_counts_zero_even_when_surrounded() {
        let mut grid = Grid::new(5, 5).unwrap();
        for (x, y, _) in grid.clone().iter() {
            grid.set(x, y, true).unwrap();
        }
        assert_eq!(grid.count_neighbors(0, 0), Ok(0));
        assert_eq!(grid.count_neighbors(4, 2), Ok(0));
        assert_eq!(grid.count_neighbors(2, 2), Ok(8));
    }

    #[test]
    fn test_out_of_range_reads() {
        let grid = Grid::new(5, 4).unwrap();
        assert_eq!(grid.get(5, 0), None);
        assert_eq!(
            grid.cell(0, 4),
            Err(EngineError::OutOfBounds { x: 0, y: 4, width: 5, height: 4 })
        );
        assert!(grid.count_neighbors(9, 9).is_err());
    }

    #[test]
    fn test_rule_table() {
        for n in 0..=8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "live cell with {n}");
            assert_eq!(next_state(false, n), n == 3, "dead cell with {n}");
        }
    }

    #[test]
    fn test_iter_is_row_major() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(2, 1, true).unwrap();
        let live: Vec<_> = grid.iter().filter(|c| c.2).map(|(x, y, _)| (x, y)).collect();
        assert_eq!(live, vec![(2, 1)]);
        assert_eq!(grid.iter().nth(5), Some((2, 1, true)));
    }

    #[test]
    fn test_fingerprint_tracks_contents() {
        let mut a = Grid::new(6, 6).unwrap();
        let b = a.clone();
        assert_eq!(a.fingerprint(), b.fingerprint());
        a.set(2, 2, true).unwrap();
        assert_ne!(a.fingerprint(), b.fingerprint());
        a.clear();
        assert_eq!(a.fingerprint(), b.fingerprint());
    }
}
