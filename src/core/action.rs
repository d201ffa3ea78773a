//! Player actions.
//!
//! One action is submitted per ply. Piece-targeted actions name the piece by
//! id; swaps need no arguments because each player owns exactly one
//! Reflector-mobile, one Monarch and one Emitter.

use serde::{Deserialize, Serialize};

use super::entity::PieceId;
use super::player::PlayerId;
use crate::board::{Coord, Direction};

/// A complete player action.
///
/// ```
/// use laser_tactics::board::{Coord, Direction};
/// use laser_tactics::core::{Action, PieceId};
///
/// let step = Action::Move { piece: PieceId(4), to: Coord::new(3, 5) };
/// let turn = Action::Rotate { piece: PieceId(4), delta: -1 };
/// let place = Action::PlaceReserveUnit { at: Coord::new(6, 6), facing: Direction::East };
/// assert_ne!(step, turn);
/// assert_eq!(place.piece(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Action {
    /// Step a mobile piece to an adjacent empty cell.
    Move { piece: PieceId, to: Coord },
    /// Turn a piece a quarter turn; `delta` must be +1 or -1.
    Rotate { piece: PieceId, delta: i32 },
    /// Put a Reflector-fixed unit from the reserve on the board.
    PlaceReserveUnit { at: Coord, facing: Direction },
    /// Exchange the Reflector-mobile with the player's Monarch.
    SwapWithMonarch,
    /// Exchange the Reflector-mobile with the player's Emitter. No beam fires.
    SwapWithEmitter,
}

impl Action {
    /// The piece this action targets directly, if any.
    #[must_use]
    pub fn piece(&self) -> Option<PieceId> {
        match self {
            Action::Move { piece, .. } | Action::Rotate { piece, .. } => Some(*piece),
            Action::PlaceReserveUnit { .. } | Action::SwapWithMonarch | Action::SwapWithEmitter => None,
        }
    }

    /// Short name used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::Move { .. } => "move",
            Action::Rotate { .. } => "rotate",
            Action::PlaceReserveUnit { .. } => "placeReserveUnit",
            Action::SwapWithMonarch => "swapWithMonarch",
            Action::SwapWithEmitter => "swapWithEmitter",
        }
    }
}

/// A recorded action with the ply it was played on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Ply on which the action was applied.
    pub ply: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, ply: u32) -> Self {
        Self { player, action, ply }
    }
}
