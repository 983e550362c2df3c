use ndarray::Array2;

use crate::grid::Grid;
use crate::types::{CellCount, Coord2, NeighborIterExt, ToNdIndex};

/// Computes the board's 3BV: the minimum number of clicks a perfect player
/// needs to clear it.
///
/// Each opening (maximal 8-connected region of zero-neighbor safe cells,
/// together with its numbered border) costs one click; every remaining safe
/// cell costs one click of its own. The value is a property of the mine
/// layout alone, so this ignores open/flag state and never mutates the grid.
pub fn calculate_3bv(grid: &Grid) -> CellCount {
    let (rows, cols) = grid.size();
    let mut visited: Array2<bool> = Array2::default((rows.into(), cols.into()));
    let mut clicks: CellCount = 0;

    for r in 0..rows {
        for c in 0..cols {
            let cell = grid[(r, c)];
            if !cell.is_opening() || visited[(r, c).to_nd_index()] {
                continue;
            }

            clicks += 1;
            flood_mark(grid, &mut visited, (r, c));
        }
    }

    for r in 0..rows {
        for c in 0..cols {
            if !grid[(r, c)].is_mine && !visited[(r, c).to_nd_index()] {
                clicks += 1;
            }
        }
    }

    clicks
}

/// Marks an entire opening as visited, starting from one of its zero cells.
/// Zero cells expand the fill; the numbered border is marked without further
/// expansion. Explicit stack, board size can exceed safe recursion depth.
fn flood_mark(grid: &Grid, visited: &mut Array2<bool>, start: Coord2) {
    let mut stack = vec![start];

    while let Some(coords) = stack.pop() {
        if visited[coords.to_nd_index()] {
            continue;
        }
        visited[coords.to_nd_index()] = true;

        if grid[coords].neighbor_count == 0 {
            stack.extend(
                visited
                    .iter_neighbors(coords)
                    .filter(|&pos| !visited[pos.to_nd_index()]),
            );
        }
    }
}
