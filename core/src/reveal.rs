use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::Grid;
use crate::types::Coord2;

/// Outcome of revealing a cell.
///
/// There is no winning variant: revealing only ever reports the loss on a
/// mine, and the caller decides the win by checking [`Grid::is_cleared`]
/// after each reveal.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// The cell was already open or is flagged; nothing changed.
    NoChange,
    /// One or more safe cells were opened.
    Revealed,
    /// The cell was a mine; it is now open and the game is over.
    HitMine,
}

impl RevealOutcome {
    pub const fn game_over(self) -> bool {
        matches!(self, Self::HitMine)
    }

    pub const fn win(self) -> bool {
        false
    }

    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Opens the cell at `coords`.
///
/// Flagged and already-open cells are left untouched. Opening a mine ends the
/// game with no further mutation. Opening a zero-neighbor cell cascades
/// through its whole opening and the numbered border around it, using an
/// explicit work list; the open flag itself is the visited marker, so the
/// fill is bounded by grid area.
pub fn reveal_cell(grid: &mut Grid, coords: Coord2) -> Result<RevealOutcome> {
    let coords = grid.validate_coords(coords)?;

    let cell = grid[coords];
    if cell.is_open || cell.is_flagged {
        return Ok(RevealOutcome::NoChange);
    }

    if cell.is_mine {
        grid[coords].is_open = true;
        return Ok(RevealOutcome::HitMine);
    }

    grid[coords].is_open = true;

    if cell.neighbor_count == 0 {
        let mut to_visit: VecDeque<Coord2> = grid.iter_neighbors(coords).collect();

        while let Some(visit_coords) = to_visit.pop_front() {
            let visit_cell = grid[visit_coords];
            if visit_cell.is_open || visit_cell.is_flagged {
                continue;
            }

            grid[visit_coords].is_open = true;

            if visit_cell.neighbor_count == 0 {
                to_visit.extend(grid.iter_neighbors(visit_coords));
            }
        }
    }

    Ok(RevealOutcome::Revealed)
}
