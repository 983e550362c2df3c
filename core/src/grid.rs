use core::ops::{Index, IndexMut};

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::{GameError, Result};
use crate::types::{mult, CellCount, Coord, Coord2, NeighborIter, NeighborIterExt, ToNdIndex};

/// Outcome of toggling a flag.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// A fixed-size rectangular board owning all of its cells.
///
/// Invariant: every cell's stored `row`/`col` matches its array position.
/// One grid instance is one game; it is never reused across placements.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Creates an empty grid with all cells closed, unflagged, and mine-free.
    pub fn new(rows: Coord, cols: Coord) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidDimensions);
        }

        let cells = Array2::from_shape_fn((rows.into(), cols.into()), |(r, c)| {
            Cell::new(r as Coord, c as Coord)
        });
        Ok(Self { cells })
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn cell(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&self[coords])
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn mine_count(&self) -> CellCount {
        self.iter_cells().filter(|cell| cell.is_mine).count() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count()
    }

    pub fn open_cell_count(&self) -> CellCount {
        self.iter_cells().filter(|cell| cell.is_open).count() as CellCount
    }

    /// Whether every safe cell has been opened. Win detection lives with the
    /// caller; reveal outcomes never report a win themselves.
    pub fn is_cleared(&self) -> bool {
        self.iter_cells().all(|cell| cell.is_mine || cell.is_open)
    }

    /// Toggles the flag on a closed cell. Open cells cannot be flagged.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.validate_coords(coords)?;

        let cell = &mut self[coords];
        if cell.is_open {
            Ok(MarkOutcome::NoChange)
        } else {
            cell.is_flagged = !cell.is_flagged;
            Ok(MarkOutcome::Changed)
        }
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}
