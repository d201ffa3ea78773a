//! Rejected actions.

use thiserror::Error;

use crate::board::{Coord, PieceKind};
use crate::core::{PieceId, PlayerId};

/// Why an action was refused. The state it was checked against is unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidAction {
    #[error("no piece with id {0}")]
    UnknownPiece(PieceId),

    #[error("{0} has been destroyed")]
    DeadPiece(PieceId),

    #[error("{piece} belongs to {owner}, not {player}")]
    NotYourPiece {
        piece: PieceId,
        owner: PlayerId,
        player: PlayerId,
    },

    #[error("a {0} cannot move")]
    CannotMove(PieceKind),

    #[error("a {0} cannot rotate")]
    CannotRotate(PieceKind),

    #[error("{piece} cannot move from {from} to {to}")]
    IllegalDestination { piece: PieceId, from: Coord, to: Coord },

    #[error("rotation delta must be +1 or -1, got {0}")]
    BadRotation(i32),

    #[error("{0} is off the board")]
    OutOfBounds(Coord),

    #[error("{0} is occupied")]
    Occupied(Coord),

    #[error("{0} is next to an Emitter")]
    AdjacentToEmitter(Coord),

    #[error("{0} is next to your Monarch")]
    AdjacentToOwnMonarch(Coord),

    #[error("{0} has no reserve units left")]
    NoReserve(PlayerId),

    #[error("{player} has no live {kind} to swap with")]
    MissingSwapPiece { player: PlayerId, kind: PieceKind },

    #[error("{kind} swap is cooling down for {turns} more turns")]
    CooldownActive { kind: PieceKind, turns: u32 },
}
