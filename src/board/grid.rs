//! The 10×10 cell grid.
//!
//! Each cell holds at most one piece id. The grid is a plain array, so
//! cloning it is a memcpy and cell lookup is O(1).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::geometry::Coord;
use crate::core::config::BOARD_SIZE;
use crate::core::PieceId;

/// Why a piece could not be put on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("cell {0} is outside the board")]
    OutOfBounds(Coord),
    #[error("cell {0} is already occupied by {1}")]
    Occupied(Coord, PieceId),
}

/// Cell occupancy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<PieceId>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The piece at `at`, or `None` when empty or off the board.
    #[must_use]
    pub fn get(&self, at: Coord) -> Option<PieceId> {
        if !at.in_bounds() {
            return None;
        }
        self.cells[at.y as usize][at.x as usize]
    }

    /// Whether `at` is on the board and holds no piece.
    #[must_use]
    pub fn is_vacant(&self, at: Coord) -> bool {
        at.in_bounds() && self.get(at).is_none()
    }

    /// Put `id` on an empty on-board cell.
    pub fn place(&mut self, at: Coord, id: PieceId) -> Result<(), PlacementError> {
        if !at.in_bounds() {
            return Err(PlacementError::OutOfBounds(at));
        }
        if let Some(existing) = self.get(at) {
            return Err(PlacementError::Occupied(at, existing));
        }
        self.cells[at.y as usize][at.x as usize] = Some(id);
        Ok(())
    }

    /// Empty a cell, returning what was there.
    pub fn clear(&mut self, at: Coord) -> Option<PieceId> {
        if !at.in_bounds() {
            return None;
        }
        self.cells[at.y as usize][at.x as usize].take()
    }

    /// Exchange the contents of two on-board cells.
    pub(crate) fn swap(&mut self, a: Coord, b: Coord) {
        let first = self.clear(a);
        let second = self.clear(b);
        if let Some(id) = first {
            self.cells[b.y as usize][b.x as usize] = Some(id);
        }
        if let Some(id) = second {
            self.cells[a.y as usize][a.x as usize] = Some(id);
        }
    }

    /// Occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, PieceId)> + '_ {
        Coord::all().filter_map(|c| self.get(c).map(|id| (c, id)))
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }
}
