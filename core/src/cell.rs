use serde::{Deserialize, Serialize};

use crate::types::Coord;

/// A single board cell.
///
/// `row`/`col` are fixed identity; `is_mine` and `neighbor_count` are written
/// once by mine placement; `is_open` transitions one-way to `true`;
/// `is_flagged` toggles freely while the cell is closed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub row: Coord,
    pub col: Coord,
    pub is_mine: bool,
    pub is_open: bool,
    pub is_flagged: bool,
    /// Mines among the 8 Moore neighbors. Undefined for mine cells (left at 0,
    /// never read).
    pub neighbor_count: u8,
}

impl Cell {
    pub const fn new(row: Coord, col: Coord) -> Self {
        Self {
            row,
            col,
            is_mine: false,
            is_open: false,
            is_flagged: false,
            neighbor_count: 0,
        }
    }

    /// A safe cell with no adjacent mines, the seed of a cascading reveal.
    pub const fn is_opening(&self) -> bool {
        !self.is_mine && self.neighbor_count == 0
    }

    pub const fn is_unrevealed(&self) -> bool {
        !self.is_open
    }
}
