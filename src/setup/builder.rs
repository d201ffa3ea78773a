//! Scenario builder.
//!
//! Places arbitrary pieces for puzzles, tests and custom openings. Ids are
//! assigned in the order pieces are added, starting from zero.
//!
//! ```
//! use laser_tactics::board::{Coord, Direction, PieceKind};
//! use laser_tactics::core::PlayerId;
//! use laser_tactics::setup::GameBuilder;
//!
//! let state = GameBuilder::new()
//!     .piece(PieceKind::Emitter, PlayerId::ZERO, Coord::new(0, 0), Direction::East)
//!     .piece(PieceKind::Monarch, PlayerId::ZERO, Coord::new(4, 2), Direction::South)
//!     .piece(PieceKind::Emitter, PlayerId::ONE, Coord::new(9, 9), Direction::West)
//!     .piece(PieceKind::Monarch, PlayerId::ONE, Coord::new(5, 7), Direction::North)
//!     .build()
//!     .unwrap();
//! assert_eq!(state.board().piece_count(), 4);
//! ```

use thiserror::Error;

use crate::board::{Coord, Direction, Piece, PieceKind, PlacementError};
use crate::core::{GameState, PieceId, PlayerId, PlayerPair, PlayerRecord, RulesConfig};

/// Why a scenario could not be built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("{0} has no Emitter")]
    MissingEmitter(PlayerId),
    #[error("{0} has no Monarch")]
    MissingMonarch(PlayerId),
    #[error("{player} has more than one {kind}")]
    Duplicate { player: PlayerId, kind: PieceKind },
    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// Builder for a game state.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    config: RulesConfig,
    pieces: Vec<(PieceKind, PlayerId, Coord, Direction)>,
    reserves: PlayerPair<Option<u32>>,
    current_player: PlayerId,
    ply: u32,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            config: RulesConfig::default(),
            pieces: Vec::new(),
            reserves: PlayerPair::with_value(None),
            current_player: PlayerId::ZERO,
            ply: 0,
        }
    }
}

impl GameBuilder {
    /// An empty board under the default rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `config` for default reserves.
    pub fn config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a live piece.
    pub fn piece(mut self, kind: PieceKind, owner: PlayerId, at: Coord, facing: Direction) -> Self {
        self.pieces.push((kind, owner, at, facing));
        self
    }

    /// Add a piece for player 0 and its point-mirrored twin for player 1.
    pub fn mirrored_pair(self, kind: PieceKind, at: Coord, facing: Direction) -> Self {
        self.piece(kind, PlayerId::ZERO, at, facing)
            .piece(kind, PlayerId::ONE, at.mirrored(), facing.opposite())
    }

    /// Override a player's available reserve.
    pub fn reserve(mut self, player: PlayerId, count: u32) -> Self {
        self.reserves[player] = Some(count);
        self
    }

    /// Set whose turn it is.
    pub fn current_player(mut self, player: PlayerId) -> Self {
        self.current_player = player;
        self
    }

    /// Set the ply counter.
    pub fn ply(mut self, ply: u32) -> Self {
        self.ply = ply;
        self
    }

    /// Build the state.
    ///
    /// Each player needs exactly one Emitter and one Monarch and may have at
    /// most one Reflector-mobile.
    pub fn build(self) -> Result<GameState, SetupError> {
        let pieces: Vec<Piece> = self
            .pieces
            .iter()
            .zip(0u32..)
            .map(|(&(kind, owner, at, facing), id)| Piece::new(PieceId(id), kind, owner, at, facing))
            .collect();

        let find_one = |player: PlayerId, kind: PieceKind| -> Result<Option<PieceId>, SetupError> {
            let mut found = pieces.iter().filter(|p| p.owner == player && p.kind == kind);
            let first = found.next().map(|p| p.id);
            if found.next().is_some() {
                return Err(SetupError::Duplicate { player, kind });
            }
            Ok(first)
        };

        let players = PlayerPair::try_new(|player| -> Result<PlayerRecord, SetupError> {
            let emitter = find_one(player, PieceKind::Emitter)?.ok_or(SetupError::MissingEmitter(player))?;
            let monarch = find_one(player, PieceKind::Monarch)?.ok_or(SetupError::MissingMonarch(player))?;
            let reflector = find_one(player, PieceKind::ReflectorMobile)?;
            let reserve = self.reserves[player].unwrap_or(self.config.starting_reserve);
            Ok(PlayerRecord::new(reserve, emitter, monarch, reflector))
        })?;

        Ok(GameState::assemble(pieces, players, self.current_player, self.ply)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kings() -> GameBuilder {
        GameBuilder::new()
            .piece(PieceKind::Emitter, PlayerId::ZERO, Coord::new(0, 0), Direction::East)
            .piece(PieceKind::Monarch, PlayerId::ZERO, Coord::new(4, 2), Direction::South)
            .piece(PieceKind::Emitter, PlayerId::ONE, Coord::new(9, 9), Direction::West)
            .piece(PieceKind::Monarch, PlayerId::ONE, Coord::new(5, 7), Direction::North)
    }

    #[test]
    fn test_build_assigns_ids_in_order() {
        let state = kings().build().unwrap();

        assert_eq!(state.player(PlayerId::ZERO).emitter, PieceId(0));
        assert_eq!(state.player(PlayerId::ZERO).monarch, PieceId(1));
        assert_eq!(state.player(PlayerId::ONE).emitter, PieceId(2));
        assert_eq!(state.player(PlayerId::ONE).monarch, PieceId(3));
        assert_eq!(state.player(PlayerId::ZERO).reflector, None);
        assert_eq!(state.next_piece_id(), PieceId(4));
    }

    #[test]
    fn test_default_reserve_from_config() {
        let state = kings()
            .config(RulesConfig::default().with_starting_reserve(2))
            .reserve(PlayerId::ONE, 5)
            .build()
            .unwrap();

        assert_eq!(state.player(PlayerId::ZERO).reserve, 2);
        assert_eq!(state.player(PlayerId::ONE).reserve, 5);
    }

    #[test]
    fn test_turn_overrides() {
        let state = kings().current_player(PlayerId::ONE).ply(9).build().unwrap();
        assert_eq!(state.current_player(), PlayerId::ONE);
        assert_eq!(state.ply(), 9);
    }

    #[test]
    fn test_missing_monarch() {
        let result = GameBuilder::new()
            .piece(PieceKind::Emitter, PlayerId::ZERO, Coord::new(0, 0), Direction::East)
            .piece(PieceKind::Emitter, PlayerId::ONE, Coord::new(9, 9), Direction::West)
            .build();
        assert_eq!(result.unwrap_err(), SetupError::MissingMonarch(PlayerId::ZERO));
    }

    #[test]
    fn test_duplicate_mobile_reflector() {
        let result = kings()
            .piece(PieceKind::ReflectorMobile, PlayerId::ONE, Coord::new(3, 3), Direction::North)
            .piece(PieceKind::ReflectorMobile, PlayerId::ONE, Coord::new(4, 4), Direction::North)
            .build();
        assert_eq!(
            result.unwrap_err(),
            SetupError::Duplicate {
                player: PlayerId::ONE,
                kind: PieceKind::ReflectorMobile
            }
        );
    }

    #[test]
    fn test_collision_is_reported() {
        let result = kings()
            .piece(PieceKind::Guardian, PlayerId::ONE, Coord::new(4, 2), Direction::North)
            .build();
        assert!(matches!(result, Err(SetupError::Placement(PlacementError::Occupied(..)))));
    }

    #[test]
    fn test_mirrored_pair() {
        let state = kings()
            .mirrored_pair(PieceKind::Guardian, Coord::new(2, 4), Direction::South)
            .build()
            .unwrap();

        let twin = state.piece_at(Coord::new(7, 5)).unwrap();
        assert_eq!(twin.owner, PlayerId::ONE);
        assert_eq!(twin.facing, Direction::North);
    }
}
