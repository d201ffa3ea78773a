//! # laser-tactics
//!
//! Rules engine for a two-player laser strategy game on a 10×10 board.
//!
//! Each side has an Emitter, a Monarch, Guardians and reflecting units.
//! After every action the acting player's Emitter fires; the beam bounces
//! off mirrors and destroys what it hits from an unprotected side. Lose
//! your Monarch and you lose the game.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: [`RulesEngine::apply`] borrows a state and
//!    returns a new one plus an ordered event log. The caller's state is
//!    never modified, which makes undo and replay trivial.
//!
//! 2. **Closed piece model**: the five piece kinds are a single enum matched
//!    exhaustively by movement, rotation and laser rules.
//!
//! 3. **Injectable randomness**: only the opening layout is random, and it
//!    draws from any [`RandomSource`].
//!
//! ## Modules
//!
//! - `core`: piece ids, players, RNG, configuration, actions, state
//! - `board`: directions, coordinates, pieces, the cell grid
//! - `laser`: beam optics and tracing
//! - `rules`: the engine, legality checks, turn lifecycle, outcome
//! - `setup`: the random opening and the scenario builder
//! - `history`: undo and replay

pub mod core;
pub mod board;
pub mod laser;
pub mod rules;
pub mod setup;
pub mod history;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, GameRng, GameState, Outcome, PieceId, PlayerId, RandomSource, RulesConfig,
    ScriptedRandom,
};

pub use crate::board::{Coord, Direction, Piece, PieceKind};

pub use crate::laser::{preview_laser, trace_laser, LaserTrace, Termination};

pub use crate::rules::{
    apply_action, can_place_reserve_at, legal_move_targets, Engine, GameEvent, InvalidAction,
    RulesEngine, Transition,
};

pub use crate::setup::{initial_state, GameBuilder, SetupError};

pub use crate::history::GameHistory;
