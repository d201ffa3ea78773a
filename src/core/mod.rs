//! Core engine types: piece ids, players, RNG, configuration, actions, state.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use entity::PieceId;
pub use player::{PlayerId, PlayerPair};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRandom};
pub use config::{RulesConfig, BOARD_SIZE};
pub use action::{Action, ActionRecord};
pub use state::{ConsistencyError, Cooldowns, GameState, Outcome, PieceTable, PlayerRecord};
