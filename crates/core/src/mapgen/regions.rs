//! Connected-region extraction and undersized-region cleanup.
//! Regions are transient: computed on demand, consumed by cleanup, never retained.

use std::collections::VecDeque;

use crate::types::{CellState, Pos};

use super::grid::Grid;

/// Flood-fills the maximal connected component containing `start`, expanding
/// only through cells sharing the start cell's state. Members are returned in
/// breadth-first visitation order.
///
/// Adjacency iterates the full 8-cell ring and rejects strict diagonals, so
/// connectivity is straight-only. The rejection form mirrors the counting
/// loops elsewhere in this module tree rather than a 4-offset list.
pub fn find_region(grid: &Grid, start: Pos) -> Vec<Pos> {
    let mut region = Vec::new();
    if !grid.in_bounds(start) {
        return region;
    }

    let region_state = grid.cell_at(start);
    let mut visited = vec![false; grid.width() * grid.height()];
    let mut frontier = VecDeque::from([start]);
    visited[cell_index(grid, start)] = true;

    while let Some(current) = frontier.pop_front() {
        region.push(current);
        for neighbor_y in (current.y - 1)..=(current.y + 1) {
            for neighbor_x in (current.x - 1)..=(current.x + 1) {
                let neighbor = Pos { y: neighbor_y, x: neighbor_x };
                if !grid.in_bounds(neighbor) {
                    continue;
                }
                if current.x != neighbor_x && current.y != neighbor_y {
                    continue; // diagonal
                }
                if visited[cell_index(grid, neighbor)] || grid.cell_at(neighbor) != region_state {
                    continue;
                }
                visited[cell_index(grid, neighbor)] = true;
                frontier.push_back(neighbor);
            }
        }
    }

    region
}

/// Partitions every cell of `state` into maximal connected components,
/// scanning in row-major order. Each matching cell belongs to exactly one
/// returned region.
pub fn find_all_regions(grid: &Grid, state: CellState) -> Vec<Vec<Pos>> {
    let mut regions = Vec::new();
    let mut visited = vec![false; grid.width() * grid.height()];

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let pos = Pos { y: y as i32, x: x as i32 };
            if visited[cell_index(grid, pos)] || grid.cell_at(pos) != state {
                continue;
            }
            let region = find_region(grid, pos);
            for &member in &region {
                visited[cell_index(grid, member)] = true;
            }
            regions.push(region);
        }
    }

    regions
}

/// Reclassifies undersized components: wall regions below `min_region_size`
/// become `Open`, open regions below it become `Wall`. Both passes consume
/// region membership computed against the grid as it stood on entry, so this
/// is one atomic step over a frozen snapshot.
pub(super) fn cleanup_undersized_regions(grid: &mut Grid, min_region_size: usize) {
    let wall_regions = find_all_regions(grid, CellState::Wall);
    let open_regions = find_all_regions(grid, CellState::Open);

    for region in wall_regions.iter().filter(|region| region.len() < min_region_size) {
        for &pos in region {
            grid.set_cell(pos, CellState::Open);
        }
    }
    for region in open_regions.iter().filter(|region| region.len() < min_region_size) {
        for &pos in region {
            grid.set_cell(pos, CellState::Wall);
        }
    }
}

fn cell_index(grid: &Grid, pos: Pos) -> usize {
    (pos.y as usize) * grid.width() + (pos.x as usize)
}
