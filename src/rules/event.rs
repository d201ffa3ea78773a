//! Events produced by applying an action, in the order they happened.
//!
//! A turn's events are the action's own event, then either `Laser` followed
//! by one `Destroy` per destroyed piece, or `LaserSkipped`. A finished game
//! answers every action with a lone `Noop`.

use serde::{Deserialize, Serialize};

use crate::board::{Coord, Direction, PieceKind};
use crate::core::PieceId;
use crate::laser::LaserTrace;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEvent {
    Move {
        piece: PieceId,
        from: Coord,
        to: Coord,
    },
    Rotate {
        piece: PieceId,
        from: Direction,
        to: Direction,
    },
    Place {
        piece: PieceId,
        at: Coord,
        facing: Direction,
    },
    /// The Reflector-mobile and its partner traded cells.
    Swap {
        reflector: PieceId,
        partner: PieceId,
        reflector_from: Coord,
        partner_from: Coord,
    },
    Laser(LaserTrace),
    Destroy {
        piece: PieceId,
        kind: PieceKind,
        at: Coord,
    },
    LaserSkipped,
    Noop,
}

impl GameEvent {
    /// The laser trace, for `Laser` events.
    #[must_use]
    pub fn as_laser(&self) -> Option<&LaserTrace> {
        match self {
            GameEvent::Laser(trace) => Some(trace),
            _ => None,
        }
    }
}
