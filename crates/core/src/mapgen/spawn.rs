//! Spawn-point search: the open cell with a fully open 8-neighborhood nearest
//! to a fixed reference corner.

use crate::types::{CellState, Pos};

use super::grid::Grid;

/// Fixed reference point the search minimizes distance to, a small offset
/// from the top-left corner of the level.
const SEARCH_REFERENCE: Pos = Pos { y: 10, x: 10 };

/// Sentinel returned when no cell qualifies. Lies outside any valid grid
/// range; callers must check for it before treating the result as a
/// coordinate. [`super::GeneratedLevel::spawn_point`] folds it into `None`.
pub const SPAWN_NOT_FOUND: Pos = Pos { y: -1, x: -1 };

/// Scans the whole grid for qualifying cells and returns the one closest to
/// the reference point, or [`SPAWN_NOT_FOUND`] when none qualifies. Ties go
/// to the first candidate in scan order.
pub(super) fn find_spawn_point(grid: &Grid) -> Pos {
    let mut closest = SPAWN_NOT_FOUND;
    let mut closest_distance = u64::MAX;

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let pos = Pos { y: y as i32, x: x as i32 };
            if grid.cell_at(pos) != CellState::Open || !is_clear_area(grid, pos) {
                continue;
            }
            // Squared distance orders candidates identically to the Euclidean
            // distance, ties included.
            let distance = squared_distance(pos, SEARCH_REFERENCE);
            if distance < closest_distance {
                closest_distance = distance;
                closest = pos;
            }
        }
    }

    closest
}

/// A clear area is the cell plus its full 8-neighborhood, all in bounds and
/// all `Open`; cells within one step of the grid edge can never qualify.
fn is_clear_area(grid: &Grid, pos: Pos) -> bool {
    for offset_y in -1..=1 {
        for offset_x in -1..=1 {
            let check = Pos { y: pos.y + offset_y, x: pos.x + offset_x };
            if !grid.in_bounds(check) || grid.cell_at(check) != CellState::Open {
                return false;
            }
        }
    }
    true
}

fn squared_distance(a: Pos, b: Pos) -> u64 {
    let delta_x = i64::from(a.x) - i64::from(b.x);
    let delta_y = i64::from(a.y) - i64::from(b.y);
    (delta_x * delta_x + delta_y * delta_y) as u64
}
