//! Deterministic minesweeper core: grid construction, first-click-safe mine
//! placement, cascading reveal, and the 3BV difficulty metric.
//!
//! All operations are synchronous and free of I/O. A grid belongs to exactly
//! one game session and must be mutated from one logical thread at a time;
//! randomness is injected by the caller, so placement is reproducible from a
//! seed.

use rand::Rng;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use grid::*;
pub use placement::*;
pub use reveal::*;
pub use scoring::*;
pub use types::*;

mod cell;
mod error;
mod grid;
mod placement;
mod reveal;
mod scoring;
mod types;

/// Board dimensions and mine count for one game session.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    /// Validates dimensions up front. The mine count is checked against the
    /// actual safe zone only once the first click is known.
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidDimensions);
        }
        Ok(Self::new_unchecked(rows, cols, mines))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    /// Builds a ready-to-play grid: allocates it and places mines with the
    /// safe zone around `first_click`. The caller reveals `first_click` next.
    pub fn build_grid<R: Rng>(&self, first_click: Coord2, rng: &mut R) -> Result<Grid> {
        let mut grid = Grid::new(self.rows, self.cols)?;
        place_mines(&mut grid, self.mines, first_click, rng)?;
        Ok(grid)
    }
}
