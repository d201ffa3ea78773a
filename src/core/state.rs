//! Game state: board, piece table, turn bookkeeping and player records.
//!
//! ## Copy-on-write
//!
//! `GameState` is a value. The rules engine clones it, mutates the clone
//! and hands the clone back, so a caller's state never changes under it.
//! The piece table is an `im` persistent map, which makes the clone share
//! structure with the original instead of copying every record.
//!
//! ## Consistency
//!
//! The board and the piece table always agree: every occupied cell names a
//! live piece stored at that cell, and every live piece sits on its cell.
//! All mutation goes through the `pub(crate)` helpers below, which update
//! both sides together. [`GameState::check_consistency`] verifies it.

use std::hash::BuildHasherDefault;

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entity::PieceId;
use super::player::{PlayerId, PlayerPair};
use crate::board::{Board, Coord, Direction, Piece, PlacementError};
use crate::laser::LaserTrace;

/// Piece records by id, including destroyed pieces.
pub type PieceTable = im::HashMap<PieceId, Piece, BuildHasherDefault<FxHasher>>;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
}

impl Outcome {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, Outcome::Winner(p) if *p == player)
    }
}

/// Swap cooldowns, in owner turns remaining.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cooldowns {
    pub monarch_swap: u32,
    pub emitter_swap: u32,
}

/// Per-player resources and the ids of the player's key pieces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Reflector-fixed units available to place now.
    pub reserve: u32,

    /// Pending replenishments, each the owner turns left before it arrives.
    pub incoming: Vec<u32>,

    /// Swap cooldowns.
    pub cooldowns: Cooldowns,

    /// The player's Emitter.
    pub emitter: PieceId,

    /// The player's Monarch.
    pub monarch: PieceId,

    /// The player's Reflector-mobile, if the layout has one.
    pub reflector: Option<PieceId>,
}

impl PlayerRecord {
    /// Create a record with an empty replenishment queue and no cooldowns.
    #[must_use]
    pub fn new(reserve: u32, emitter: PieceId, monarch: PieceId, reflector: Option<PieceId>) -> Self {
        Self {
            reserve,
            incoming: Vec::new(),
            cooldowns: Cooldowns::default(),
            emitter,
            monarch,
            reflector,
        }
    }
}

/// A board and piece table that disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConsistencyError {
    #[error("cell {at} holds {id}, which has no piece record")]
    UnknownPiece { at: Coord, id: PieceId },
    #[error("cell {at} holds {id}, which is not alive")]
    DeadPieceOnBoard { at: Coord, id: PieceId },
    #[error("cell {at} holds {id}, whose record says {recorded}")]
    PositionMismatch { at: Coord, id: PieceId, recorded: Coord },
    #[error("live piece {id} is not on its cell {recorded}")]
    LivePieceOffBoard { id: PieceId, recorded: Coord },
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    pieces: PieceTable,
    ply: u32,
    current_player: PlayerId,
    winner: Option<Outcome>,
    players: PlayerPair<PlayerRecord>,
    next_piece_id: PieceId,
    last_laser: Option<LaserTrace>,
}

impl GameState {
    /// Assemble a state from live pieces and player records.
    ///
    /// Fails if two pieces share a cell or a piece is off the board.
    pub(crate) fn assemble(
        pieces: impl IntoIterator<Item = Piece>,
        players: PlayerPair<PlayerRecord>,
        current_player: PlayerId,
        ply: u32,
    ) -> Result<Self, PlacementError> {
        let mut state = Self {
            board: Board::new(),
            pieces: PieceTable::default(),
            ply,
            current_player,
            winner: None,
            players,
            next_piece_id: PieceId::FIRST,
            last_laser: None,
        };
        for piece in pieces {
            state.insert_piece(piece)?;
        }
        Ok(state)
    }

    // === Queries ===

    /// The cell grid.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Look up a piece by id, alive or not.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(&id)
    }

    /// The piece on a cell.
    #[must_use]
    pub fn piece_at(&self, at: Coord) -> Option<&Piece> {
        self.board.get(at).and_then(|id| self.pieces.get(&id))
    }

    /// Every piece record, in id order.
    #[must_use]
    pub fn pieces(&self) -> Vec<&Piece> {
        let mut all: Vec<_> = self.pieces.values().collect();
        all.sort_by_key(|p| p.id);
        all
    }

    /// Live pieces, in board row-major order.
    pub fn live_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.board.occupied().filter_map(|(_, id)| self.pieces.get(&id))
    }

    /// Whether a piece exists and is alive.
    #[must_use]
    pub fn is_alive(&self, id: PieceId) -> bool {
        self.pieces.get(&id).is_some_and(|p| p.alive)
    }

    /// Half-moves played so far.
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// The result, once the game has ended.
    #[must_use]
    pub fn winner(&self) -> Option<Outcome> {
        self.winner
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// A player's record.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerRecord {
        &self.players[player]
    }

    /// The most recent beam, for display. `None` before the first shot and
    /// after a turn where firing was suppressed.
    #[must_use]
    pub fn last_laser(&self) -> Option<&LaserTrace> {
        self.last_laser.as_ref()
    }

    /// The id the next placed piece will receive.
    #[must_use]
    pub fn next_piece_id(&self) -> PieceId {
        self.next_piece_id
    }

    /// Verify that the board and piece table agree.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        for (at, id) in self.board.occupied() {
            let piece = self
                .pieces
                .get(&id)
                .ok_or(ConsistencyError::UnknownPiece { at, id })?;
            if !piece.alive {
                return Err(ConsistencyError::DeadPieceOnBoard { at, id });
            }
            if piece.position != at {
                return Err(ConsistencyError::PositionMismatch {
                    at,
                    id,
                    recorded: piece.position,
                });
            }
        }
        for piece in self.pieces.values().filter(|p| p.alive) {
            if self.board.get(piece.position) != Some(piece.id) {
                return Err(ConsistencyError::LivePieceOffBoard {
                    id: piece.id,
                    recorded: piece.position,
                });
            }
        }
        Ok(())
    }

    // === Mutation (engine only) ===

    /// Allocate a fresh piece id.
    pub(crate) fn alloc_piece_id(&mut self) -> PieceId {
        let id = self.next_piece_id;
        self.next_piece_id = id.next();
        id
    }

    /// Put a live piece on the board and record it.
    pub(crate) fn insert_piece(&mut self, piece: Piece) -> Result<(), PlacementError> {
        self.board.place(piece.position, piece.id)?;
        if piece.id >= self.next_piece_id {
            self.next_piece_id = piece.id.next();
        }
        self.pieces.insert(piece.id, piece);
        Ok(())
    }

    /// Clear a piece's cell and mark it dead. The record is kept.
    pub(crate) fn destroy_piece(&mut self, id: PieceId) {
        if let Some(piece) = self.pieces.get_mut(&id) {
            if piece.alive {
                self.board.clear(piece.position);
                piece.alive = false;
            }
        }
    }

    /// Move a live piece to an empty cell.
    pub(crate) fn relocate_piece(&mut self, id: PieceId, to: Coord) -> Result<(), PlacementError> {
        let Some(piece) = self.pieces.get_mut(&id) else {
            return Ok(());
        };
        self.board.place(to, id)?;
        self.board.clear(piece.position);
        piece.position = to;
        Ok(())
    }

    /// Exchange the cells of two live pieces.
    pub(crate) fn swap_pieces(&mut self, a: PieceId, b: PieceId) {
        let (Some(pa), Some(pb)) = (self.pieces.get(&a), self.pieces.get(&b)) else {
            return;
        };
        let (at_a, at_b) = (pa.position, pb.position);
        self.board.swap(at_a, at_b);
        if let Some(piece) = self.pieces.get_mut(&a) {
            piece.position = at_b;
        }
        if let Some(piece) = self.pieces.get_mut(&b) {
            piece.position = at_a;
        }
    }

    /// Set a piece's facing.
    pub(crate) fn set_facing(&mut self, id: PieceId, facing: Direction) {
        if let Some(piece) = self.pieces.get_mut(&id) {
            piece.facing = facing;
        }
    }

    pub(crate) fn player_mut(&mut self, player: PlayerId) -> &mut PlayerRecord {
        &mut self.players[player]
    }

    pub(crate) fn set_winner(&mut self, winner: Option<Outcome>) {
        self.winner = winner;
    }

    pub(crate) fn set_last_laser(&mut self, trace: Option<LaserTrace>) {
        self.last_laser = trace;
    }

    /// Hand the turn to the other player and count the ply.
    pub(crate) fn advance_turn(&mut self) {
        self.ply += 1;
        self.current_player = self.current_player.opponent();
    }
}
