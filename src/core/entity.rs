//! Piece identification.
//!
//! Every piece on the board has a unique `PieceId` that stays stable for
//! the whole game, including after the piece is destroyed.
//!
//! ## ID Layout
//!
//! IDs are allocated sequentially by the game state:
//! - setup pieces take the first ids, in placement order
//! - reserve units placed during play take the next free id
//!
//! ```
//! use laser_tactics::core::PieceId;
//!
//! let id = PieceId(7);
//! assert_eq!(id.raw(), 7);
//! assert_eq!(id.next(), PieceId(8));
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl PieceId {
    /// The first id handed out by a fresh game.
    pub const FIRST: PieceId = PieceId(0);

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id allocated after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for PieceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}
