//! Public data model for a finished generated level.

use xxhash_rust::xxh3::xxh3_64;

use crate::types::{CellState, Pos};

use super::grid::Grid;
use super::spawn::SPAWN_NOT_FOUND;

/// Everything one generation run produces: the final cell layout, the
/// per-cell neighbor masks the tile renderer consumes, and the chosen spawn
/// coordinate. Handed off read-only; a new level means a new run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedLevel {
    pub width: usize,
    pub height: usize,
    /// Row-major cell states.
    pub cells: Vec<CellState>,
    /// Row-major neighbor masks; 0 for every `Open` cell means "no tile".
    pub masks: Vec<u8>,
    /// Raw spawn search result. Equal to [`SPAWN_NOT_FOUND`] when nothing
    /// qualified; use [`GeneratedLevel::spawn_point`] for the checked view.
    pub spawn_cell: Pos,
}

impl GeneratedLevel {
    pub(super) fn new(grid: Grid, masks: Vec<u8>, spawn_cell: Pos) -> Self {
        Self { width: grid.width(), height: grid.height(), cells: grid.into_cells(), masks, spawn_cell }
    }

    /// Spawn coordinate with the not-found sentinel folded into `None`.
    pub fn spawn_point(&self) -> Option<Pos> {
        (self.spawn_cell != SPAWN_NOT_FOUND).then_some(self.spawn_cell)
    }

    /// Out-of-bounds positions read as `Wall`, matching generation-time
    /// neighbor semantics.
    pub fn cell_at(&self, pos: Pos) -> CellState {
        if pos.x < 0 || pos.y < 0 {
            return CellState::Wall;
        }
        let x = pos.x as usize;
        let y = pos.y as usize;
        if x >= self.width || y >= self.height {
            return CellState::Wall;
        }
        self.cells[y * self.width + x]
    }

    /// Out-of-bounds positions read as 0 ("no tile").
    pub fn mask_at(&self, pos: Pos) -> u8 {
        if pos.x < 0 || pos.y < 0 {
            return 0;
        }
        let x = pos.x as usize;
        let y = pos.y as usize;
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.masks[y * self.width + x]
    }

    /// Canonical byte serialization of the whole artifact, used for
    /// determinism fingerprinting.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for cell in &self.cells {
            bytes.push(match cell {
                CellState::Open => 0,
                CellState::Wall => 1,
            });
        }
        bytes.extend_from_slice(&self.masks);
        bytes.extend(self.spawn_cell.y.to_le_bytes());
        bytes.extend(self.spawn_cell.x.to_le_bytes());
        bytes
    }

    /// Stable content hash over [`GeneratedLevel::canonical_bytes`].
    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}
