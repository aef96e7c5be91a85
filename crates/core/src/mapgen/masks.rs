//! Neighbor-bitmask encoding used by autotiling consumers to pick tile variants.

use crate::types::{CellState, Pos};

use super::grid::Grid;

/// Encodes the 8-neighborhood of a cell as a big-endian 8-bit value.
///
/// Bit order is fixed: top row left to right, middle row left to right
/// skipping the cell itself, bottom row left to right. Wall and out-of-bounds
/// neighbors contribute `1` bits, open neighbors `0` bits. The mask is built
/// by shift-and-OR accumulation, never through an intermediate string.
pub fn neighbor_mask(grid: &Grid, pos: Pos) -> u8 {
    let mut mask = 0_u8;
    for neighbor_y in (pos.y - 1)..=(pos.y + 1) {
        for neighbor_x in (pos.x - 1)..=(pos.x + 1) {
            if neighbor_y == pos.y && neighbor_x == pos.x {
                continue;
            }
            let neighbor = Pos { y: neighbor_y, x: neighbor_x };
            let bit = u8::from(grid.cell_at(neighbor) == CellState::Wall);
            mask = (mask << 1) | bit;
        }
    }
    mask
}

/// Derives the per-cell mask layer for a finished grid: `Open` cells carry 0
/// ("no tile"), `Wall` cells carry their neighborhood mask.
pub(super) fn encode_neighbor_masks(grid: &Grid) -> Vec<u8> {
    let mut masks = vec![0_u8; grid.width() * grid.height()];
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let pos = Pos { y: y as i32, x: x as i32 };
            if grid.cell_at(pos) == CellState::Wall {
                masks[y * grid.width() + x] = neighbor_mask(grid, pos);
            }
        }
    }
    masks
}
