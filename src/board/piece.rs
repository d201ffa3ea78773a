//! Piece kinds and piece records.

use serde::{Deserialize, Serialize};

use super::geometry::{Coord, Direction};
use crate::core::{PieceId, PlayerId};

/// The closed set of piece kinds.
///
/// | Kind | Moves | Rotates | Beam behaviour |
/// |------|-------|---------|----------------|
/// | Emitter | no | yes | fires; blocks on every face |
/// | Monarch | no | no | destroyed on any face |
/// | Guardian | yes | yes | blocks on its facing, destroyed elsewhere |
/// | ReflectorFixed | yes | yes | mirror on two faces, destroyed elsewhere |
/// | ReflectorMobile | yes | yes | mirror on every face |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Emitter,
    Monarch,
    Guardian,
    ReflectorFixed,
    ReflectorMobile,
}

impl PieceKind {
    /// Whether the piece may step to an adjacent cell.
    #[must_use]
    pub const fn can_move(self) -> bool {
        match self {
            PieceKind::Emitter | PieceKind::Monarch => false,
            PieceKind::Guardian | PieceKind::ReflectorFixed | PieceKind::ReflectorMobile => true,
        }
    }

    /// Whether a player may rotate the piece.
    ///
    /// The Monarch keeps a facing for display only.
    #[must_use]
    pub const fn can_rotate(self) -> bool {
        match self {
            PieceKind::Monarch => false,
            PieceKind::Emitter
            | PieceKind::Guardian
            | PieceKind::ReflectorFixed
            | PieceKind::ReflectorMobile => true,
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Emitter => "Emitter",
            PieceKind::Monarch => "Monarch",
            PieceKind::Guardian => "Guardian",
            PieceKind::ReflectorFixed => "Reflector-fixed",
            PieceKind::ReflectorMobile => "Reflector-mobile",
        };
        f.write_str(name)
    }
}

/// A piece record. Destroyed pieces keep their record with `alive == false`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub owner: PlayerId,
    pub position: Coord,
    pub facing: Direction,
    pub alive: bool,
}

impl Piece {
    /// Create a live piece.
    #[must_use]
    pub fn new(id: PieceId, kind: PieceKind, owner: PlayerId, position: Coord, facing: Direction) -> Self {
        Self {
            id,
            kind,
            owner,
            position,
            facing,
            alive: true,
        }
    }
}
