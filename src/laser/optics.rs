//! How a beam interacts with each kind of piece.
//!
//! The face a beam strikes is the opposite of its travel direction: a beam
//! heading South enters the cell through its North face.
//!
//! ## Mirror diagonals
//!
//! | Diagonal | S | E | N | W |
//! |----------|---|---|---|---|
//! | `\`      | W | N | E | S |
//! | `/`      | E | S | W | N |
//!
//! (row: direction in, cell: direction out)

use serde::{Deserialize, Serialize};

use crate::board::{Direction, PieceKind};

/// One of the two diagonal mirror orientations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mirror {
    /// `\`
    Backslash,
    /// `/`
    Slash,
}

impl Mirror {
    /// Facings 0 and 2 use `\`, facings 1 and 3 use `/`.
    #[must_use]
    pub const fn for_facing(facing: Direction) -> Self {
        match facing {
            Direction::North | Direction::South => Mirror::Backslash,
            Direction::East | Direction::West => Mirror::Slash,
        }
    }

    /// Outgoing direction for a beam travelling `heading`.
    #[must_use]
    pub const fn reflect(self, heading: Direction) -> Direction {
        use Direction::{East, North, South, West};
        match (self, heading) {
            (Mirror::Backslash, South) => West,
            (Mirror::Backslash, East) => North,
            (Mirror::Backslash, North) => East,
            (Mirror::Backslash, West) => South,
            (Mirror::Slash, South) => East,
            (Mirror::Slash, West) => North,
            (Mirror::Slash, North) => West,
            (Mirror::Slash, East) => South,
        }
    }
}

/// The two reflective faces of a Reflector-fixed with the given facing.
#[must_use]
pub const fn fixed_reflector_faces(facing: Direction) -> [Direction; 2] {
    use Direction::{East, North, South, West};
    match facing {
        North => [North, West],
        East => [North, East],
        South => [South, East],
        West => [South, West],
    }
}

/// What happens when the beam enters an occupied cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    /// The beam stops here.
    Absorb,
    /// The beam turns and continues.
    Reflect(Direction),
    /// The piece is destroyed and the beam continues straight on.
    Destroy {
        /// Queue a reserve replenishment for the owner's opponent.
        replenish_opponent: bool,
    },
}

/// Resolve a beam travelling `heading` into a piece of `kind` facing `facing`.
#[must_use]
pub fn interact(kind: PieceKind, facing: Direction, heading: Direction) -> Interaction {
    let struck = heading.opposite();
    match kind {
        PieceKind::Emitter => Interaction::Absorb,
        PieceKind::Monarch => Interaction::Destroy {
            replenish_opponent: false,
        },
        PieceKind::Guardian => {
            if struck == facing {
                Interaction::Absorb
            } else {
                Interaction::Destroy {
                    replenish_opponent: false,
                }
            }
        }
        PieceKind::ReflectorFixed => {
            if fixed_reflector_faces(facing).contains(&struck) {
                Interaction::Reflect(Mirror::for_facing(facing).reflect(heading))
            } else {
                Interaction::Destroy {
                    replenish_opponent: true,
                }
            }
        }
        PieceKind::ReflectorMobile => {
            Interaction::Reflect(Mirror::for_facing(facing).reflect(heading))
        }
    }
}
