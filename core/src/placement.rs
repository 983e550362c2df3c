use std::collections::BTreeSet;

use rand::Rng;

use crate::error::{GameError, Result};
use crate::grid::Grid;
use crate::types::{CellCount, Coord2};

/// Mine density above which rejection sampling is outside the supported
/// regime. Requests beyond it are still served, but logged.
const DENSITY_WARN_THRESHOLD: f64 = 0.4;

/// The first-click cell plus its in-bounds Moore neighbors. These cells are
/// guaranteed mine-free for the placement call.
pub fn safe_zone(grid: &Grid, first_click: Coord2) -> BTreeSet<Coord2> {
    let mut zone = BTreeSet::from([first_click]);
    zone.extend(grid.iter_neighbors(first_click));
    zone
}

/// Places `mine_count` mines into an empty grid, keeping the safe zone around
/// `first_click` clear, then computes every safe cell's neighbor count.
///
/// Uses unbounded-retry rejection sampling over uniform `(row, col)` pairs;
/// the upfront free-cell check guarantees termination. Only `is_mine` and
/// `neighbor_count` are written. Call exactly once per grid, before any
/// reveal, with the coordinate of the player's first click.
pub fn place_mines<R: Rng>(
    grid: &mut Grid,
    mine_count: CellCount,
    first_click: Coord2,
    rng: &mut R,
) -> Result<()> {
    let first_click = grid.validate_coords(first_click)?;
    let zone = safe_zone(grid, first_click);

    let free_cells = grid.total_cells() - zone.len() as CellCount;
    if mine_count > free_cells {
        return Err(GameError::TooManyMines);
    }

    let density = f64::from(mine_count) / f64::from(grid.total_cells());
    if density > DENSITY_WARN_THRESHOLD {
        log::warn!(
            "mine density {:.0}% exceeds the supported regime, placement may be slow",
            density * 100.0
        );
    }

    let (rows, cols) = grid.size();
    let mut mines_placed = 0;
    while mines_placed < mine_count {
        let coords = (rng.random_range(0..rows), rng.random_range(0..cols));

        if grid[coords].is_mine || zone.contains(&coords) {
            continue;
        }

        grid[coords].is_mine = true;
        mines_placed += 1;
    }

    compute_neighbor_counts(grid);
    Ok(())
}

/// Second pass: every safe cell's `neighbor_count` becomes the number of
/// adjacent mines. Mine cells are skipped and keep the default.
fn compute_neighbor_counts(grid: &mut Grid) {
    let (rows, cols) = grid.size();
    for r in 0..rows {
        for c in 0..cols {
            if grid[(r, c)].is_mine {
                continue;
            }

            let count = grid
                .iter_neighbors((r, c))
                .filter(|&pos| grid[pos].is_mine)
                .count();
            grid[(r, c)].neighbor_count = count as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;

    fn placed_grid(rows: u16, cols: u16, mines: CellCount, first_click: Coord2) -> Grid {
        let mut grid = Grid::new(rows, cols).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        place_mines(&mut grid, mines, first_click, &mut rng).unwrap();
        grid
    }

    #[test]
    fn safe_zone_is_never_mined_and_count_is_exact() {
        for seed in 0..20 {
            let mut grid = Grid::new(9, 9).unwrap();
            let mut rng = SmallRng::seed_from_u64(seed);
            place_mines(&mut grid, 10, (4, 4), &mut rng).unwrap();

            assert_eq!(grid.mine_count(), 10);
            for coords in safe_zone(&grid, (4, 4)) {
                assert!(!grid[coords].is_mine);
            }
        }
    }

    #[test]
    fn safe_zone_clips_at_edges() {
        let grid = Grid::new(3, 3).unwrap();
        assert_eq!(safe_zone(&grid, (0, 0)).len(), 4);
        assert_eq!(safe_zone(&grid, (1, 1)).len(), 9);
        assert_eq!(safe_zone(&grid, (2, 0)).len(), 4);
    }

    #[test]
    fn neighbor_counts_match_brute_force() {
        let grid = placed_grid(8, 8, 12, (3, 3));

        let (rows, cols) = grid.size();
        for r in 0..rows {
            for c in 0..cols {
                if grid[(r, c)].is_mine {
                    continue;
                }
                let expected = grid
                    .iter_neighbors((r, c))
                    .filter(|&pos| grid[pos].is_mine)
                    .count() as u8;
                assert_eq!(grid[(r, c)].neighbor_count, expected);
            }
        }
    }

    #[test]
    fn placement_leaves_open_and_flag_state_untouched() {
        let grid = placed_grid(5, 5, 4, (2, 2));
        assert!(grid.iter_cells().all(|cell| !cell.is_open && !cell.is_flagged));
    }

    #[test]
    fn too_many_mines_is_a_config_error_not_a_hang() {
        // 3x3 with a center click: the safe zone covers the whole board.
        let mut grid = Grid::new(3, 3).unwrap();
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(
            place_mines(&mut grid, 1, (1, 1), &mut rng).unwrap_err(),
            GameError::TooManyMines
        );
    }

    #[test]
    fn mine_count_filling_every_free_cell_is_accepted() {
        // 5x5, corner click: safe zone is 4 cells, 21 free.
        let grid = placed_grid(5, 5, 21, (0, 0));
        assert_eq!(grid.mine_count(), 21);
    }

    #[test]
    fn out_of_bounds_first_click_is_rejected() {
        let mut grid = Grid::new(4, 4).unwrap();
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(
            place_mines(&mut grid, 2, (4, 0), &mut rng).unwrap_err(),
            GameError::OutOfBounds
        );
    }

    #[test]
    fn zero_mines_is_valid() {
        let grid = placed_grid(4, 4, 0, (1, 1));
        assert_eq!(grid.mine_count(), 0);
        assert!(grid.iter_cells().all(|cell| cell.neighbor_count == 0));
    }
}
