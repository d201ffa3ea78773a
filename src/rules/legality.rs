//! Action preconditions.
//!
//! Every check reads the state and returns the first rule an action breaks.
//! Nothing here mutates, so a rejected action never touches a state.
//!
//! The boolean queries at the bottom answer the same questions for UIs
//! that only want to highlight cells.

use super::error::InvalidAction;
use crate::board::{Coord, Direction, Piece, PieceKind};
use crate::core::{GameState, PieceId, PlayerId};

/// The acting player's live piece `id`.
pub(crate) fn own_live_piece(state: &GameState, id: PieceId) -> Result<&Piece, InvalidAction> {
    let piece = state.piece(id).ok_or(InvalidAction::UnknownPiece(id))?;
    if !piece.alive {
        return Err(InvalidAction::DeadPiece(id));
    }
    let player = state.current_player();
    if piece.owner != player {
        return Err(InvalidAction::NotYourPiece {
            piece: id,
            owner: piece.owner,
            player,
        });
    }
    Ok(piece)
}

/// Check a one-step move and return the origin cell.
pub(crate) fn check_move(state: &GameState, id: PieceId, to: Coord) -> Result<Coord, InvalidAction> {
    let piece = own_live_piece(state, id)?;
    if !piece.kind.can_move() {
        return Err(InvalidAction::CannotMove(piece.kind));
    }
    let from = piece.position;
    if !from.is_adjacent(to) || !state.board().is_vacant(to) {
        return Err(InvalidAction::IllegalDestination { piece: id, from, to });
    }
    Ok(from)
}

/// Check a quarter turn and return the `(from, to)` facings.
pub(crate) fn check_rotate(
    state: &GameState,
    id: PieceId,
    delta: i32,
) -> Result<(Direction, Direction), InvalidAction> {
    let piece = own_live_piece(state, id)?;
    if !piece.kind.can_rotate() {
        return Err(InvalidAction::CannotRotate(piece.kind));
    }
    if delta != 1 && delta != -1 {
        return Err(InvalidAction::BadRotation(delta));
    }
    Ok((piece.facing, piece.facing.rotated(delta)))
}

/// Check that the current player may put a reserve unit on `at`.
pub(crate) fn check_placement(state: &GameState, at: Coord) -> Result<(), InvalidAction> {
    if !at.in_bounds() {
        return Err(InvalidAction::OutOfBounds(at));
    }
    if !state.board().is_vacant(at) {
        return Err(InvalidAction::Occupied(at));
    }
    let player = state.current_player();
    if state.player(player).reserve == 0 {
        return Err(InvalidAction::NoReserve(player));
    }

    let monarch = state.player(player).monarch;
    for neighbor in at.neighbors().filter_map(|c| state.piece_at(c)) {
        if neighbor.kind == PieceKind::Emitter {
            return Err(InvalidAction::AdjacentToEmitter(at));
        }
        if neighbor.id == monarch {
            return Err(InvalidAction::AdjacentToOwnMonarch(at));
        }
    }
    Ok(())
}

/// The piece a Reflector-mobile trades places with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SwapPartner {
    Monarch,
    Emitter,
}

impl SwapPartner {
    pub(crate) const fn kind(self) -> PieceKind {
        match self {
            SwapPartner::Monarch => PieceKind::Monarch,
            SwapPartner::Emitter => PieceKind::Emitter,
        }
    }
}

/// Check a swap between `player`'s Reflector-mobile and its `partner`.
///
/// Returns the Reflector-mobile and the partner piece.
pub(crate) fn check_swap(
    state: &GameState,
    player: PlayerId,
    partner: SwapPartner,
) -> Result<(&Piece, &Piece), InvalidAction> {
    let record = state.player(player);
    let live = |id: Option<PieceId>| id.and_then(|id| state.piece(id)).filter(|p| p.alive);

    let reflector = live(record.reflector).ok_or(InvalidAction::MissingSwapPiece {
        player,
        kind: PieceKind::ReflectorMobile,
    })?;

    let (target, cooldown) = match partner {
        SwapPartner::Monarch => (record.monarch, record.cooldowns.monarch_swap),
        SwapPartner::Emitter => (record.emitter, record.cooldowns.emitter_swap),
    };
    let target = live(Some(target)).ok_or(InvalidAction::MissingSwapPiece {
        player,
        kind: partner.kind(),
    })?;
    if cooldown > 0 {
        return Err(InvalidAction::CooldownActive {
            kind: partner.kind(),
            turns: cooldown,
        });
    }
    Ok((reflector, target))
}

/// Cells the current player's piece `id` may step to.
///
/// Empty when the piece is dead, immobile, or not the current player's.
#[must_use]
pub fn legal_move_targets(state: &GameState, id: PieceId) -> Vec<Coord> {
    match own_live_piece(state, id) {
        Ok(piece) if piece.kind.can_move() => piece
            .position
            .neighbors()
            .filter(|&c| state.board().is_vacant(c))
            .collect(),
        _ => Vec::new(),
    }
}

/// Whether the current player may place a reserve unit on `at`.
#[must_use]
pub fn can_place_reserve_at(state: &GameState, at: Coord) -> bool {
    check_placement(state, at).is_ok()
}
