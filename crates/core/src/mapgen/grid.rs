//! Cell-grid primitives shared by smoothing, region analysis, masking, and spawn search.

use crate::types::{CellState, Pos};

/// Rectangular array of cell states with dimensions fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates an all-`Open` grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![CellState::Open; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Out-of-bounds positions read as `Wall`, which is what keeps the level
    /// self-contained at its edges during smoothing, masking, and counting.
    pub fn cell_at(&self, pos: Pos) -> CellState {
        if !self.in_bounds(pos) {
            return CellState::Wall;
        }
        self.cells[(pos.y as usize) * self.width + (pos.x as usize)]
    }

    pub fn set_cell(&mut self, pos: Pos, state: CellState) {
        debug_assert!(self.in_bounds(pos), "set_cell out of bounds: {pos:?}");
        self.cells[(pos.y as usize) * self.width + (pos.x as usize)] = state;
    }

    /// True iff the cell lies within `border_width` of any edge.
    pub fn is_border_cell(&self, pos: Pos, border_width: usize) -> bool {
        let border = border_width as i32;
        pos.x < border
            || pos.x > self.width as i32 - border - 1
            || pos.y < border
            || pos.y > self.height as i32 - border - 1
    }

    /// Number of `Wall` cells among the 8 neighbors, counting every
    /// out-of-bounds neighbor as a wall.
    pub(super) fn wall_neighbor_count(&self, pos: Pos) -> usize {
        let mut count = 0;
        for neighbor_y in (pos.y - 1)..=(pos.y + 1) {
            for neighbor_x in (pos.x - 1)..=(pos.x + 1) {
                if neighbor_y == pos.y && neighbor_x == pos.x {
                    continue;
                }
                if self.cell_at(Pos { y: neighbor_y, x: neighbor_x }) == CellState::Wall {
                    count += 1;
                }
            }
        }
        count
    }

    pub(super) fn into_cells(self) -> Vec<CellState> {
        self.cells
    }
}

/// Builds a grid from `#` (wall) / `.` (open) rows for test scenarios.
#[cfg(test)]
pub(super) fn grid_from_rows(rows: &[&str]) -> Grid {
    let height = rows.len();
    let width = rows.first().map_or(0, |row| row.len());
    let mut grid = Grid::new(width, height);
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), width, "all rows must share one width");
        for (x, glyph) in row.chars().enumerate() {
            let state = match glyph {
                '#' => CellState::Wall,
                '.' => CellState::Open,
                other => panic!("unknown cell glyph {other:?}"),
            };
            grid.set_cell(Pos { y: y as i32, x: x as i32 }, state);
        }
    }
    grid
}
