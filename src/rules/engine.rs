//! The rules engine.
//!
//! ## Turn sequence
//!
//! [`RulesEngine::apply`] takes a state by reference and, on success, returns
//! a new one. Given an unfinished game it:
//!
//! 1. validates the action against the current player and applies it to a
//!    clone of the state
//! 2. fires the acting player's Emitter, unless the action was
//!    `SwapWithEmitter`
//! 3. evaluates the outcome
//! 4. ends the acting player's turn (reserve replenishment)
//! 5. if nobody has won, advances the ply and begins the opponent's turn
//!    (cooldown decay)
//!
//! A rejected action returns an [`InvalidAction`] and produces nothing.
//! A finished game answers every action with a lone `Noop` event.

use super::error::InvalidAction;
use super::event::GameEvent;
use super::legality::{
    check_move, check_placement, check_rotate, check_swap, legal_move_targets, SwapPartner,
};
use super::lifecycle::{begin_turn, end_turn};
use super::outcome::evaluate_outcome;
use crate::board::{Coord, Direction, Piece, PieceKind};
use crate::core::{Action, GameState, Outcome, PlayerId, RandomSource, RulesConfig};
use crate::laser::trace_laser;
use crate::setup::{initial_state, SetupError};

/// A successful application: the new state and what happened, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: GameState,
    pub events: Vec<GameEvent>,
}

impl Transition {
    /// Split into `(state, events)`.
    #[must_use]
    pub fn into_parts(self) -> (GameState, Vec<GameEvent>) {
        (self.state, self.events)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `apply` must be deterministic and must not change its input
/// - `legal_actions` returns an empty list once the game is over
pub trait RulesEngine {
    /// Get the rules configuration.
    fn config(&self) -> &RulesConfig;

    /// Apply the current player's action.
    fn apply(&self, state: &GameState, action: &Action) -> Result<Transition, InvalidAction>;

    /// Every action the current player could take.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    /// The result of the game, or `None` while it continues.
    fn outcome(&self, state: &GameState) -> Option<Outcome> {
        state.winner()
    }

    /// Whether `action` would be accepted for an unfinished game.
    fn is_legal(&self, state: &GameState, action: &Action) -> bool {
        !state.is_over() && self.apply(state, action).is_ok()
    }
}

/// The standard engine.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    config: RulesConfig,
}

impl Engine {
    /// Create an engine for `config`.
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    /// Lay out a fresh game under this engine's rules.
    pub fn new_game<R: RandomSource>(&self, rng: &mut R) -> Result<GameState, SetupError> {
        initial_state(&self.config, rng)
    }

    /// Apply the action to `state` and report whether the laser fires.
    fn perform(
        &self,
        state: &mut GameState,
        player: PlayerId,
        action: &Action,
        events: &mut Vec<GameEvent>,
    ) -> Result<bool, InvalidAction> {
        match *action {
            Action::Move { piece, to } => {
                let from = check_move(state, piece, to)?;
                state
                    .relocate_piece(piece, to)
                    .map_err(|_| InvalidAction::IllegalDestination { piece, from, to })?;
                events.push(GameEvent::Move { piece, from, to });
            }
            Action::Rotate { piece, delta } => {
                let (from, to) = check_rotate(state, piece, delta)?;
                state.set_facing(piece, to);
                events.push(GameEvent::Rotate { piece, from, to });
            }
            Action::PlaceReserveUnit { at, facing } => {
                check_placement(state, at)?;
                let piece = state.alloc_piece_id();
                state
                    .insert_piece(Piece::new(piece, PieceKind::ReflectorFixed, player, at, facing))
                    .map_err(|_| InvalidAction::Occupied(at))?;
                state.player_mut(player).reserve -= 1;
                events.push(GameEvent::Place { piece, at, facing });
            }
            Action::SwapWithMonarch => {
                self.swap(state, player, SwapPartner::Monarch, events)?;
            }
            Action::SwapWithEmitter => {
                self.swap(state, player, SwapPartner::Emitter, events)?;
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn swap(
        &self,
        state: &mut GameState,
        player: PlayerId,
        partner: SwapPartner,
        events: &mut Vec<GameEvent>,
    ) -> Result<(), InvalidAction> {
        let (reflector, target) = check_swap(state, player, partner)?;
        let event = GameEvent::Swap {
            reflector: reflector.id,
            partner: target.id,
            reflector_from: reflector.position,
            partner_from: target.position,
        };
        let (reflector, target) = (reflector.id, target.id);

        state.swap_pieces(reflector, target);
        let cooldowns = &mut state.player_mut(player).cooldowns;
        match partner {
            SwapPartner::Monarch => cooldowns.monarch_swap = self.config.swap_cooldown,
            SwapPartner::Emitter => cooldowns.emitter_swap = self.config.swap_cooldown,
        }
        events.push(event);
        Ok(())
    }
}

impl RulesEngine for Engine {
    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn apply(&self, state: &GameState, action: &Action) -> Result<Transition, InvalidAction> {
        if let Some(outcome) = state.winner() {
            log::debug!("{} ignored, game already over ({outcome:?})", action.name());
            return Ok(Transition {
                state: state.clone(),
                events: vec![GameEvent::Noop],
            });
        }

        let player = state.current_player();
        let mut next = state.clone();
        let mut events = Vec::with_capacity(4);

        let fires = self.perform(&mut next, player, action, &mut events)?;
        log::debug!("ply {}: {player} played {}", state.ply(), action.name());

        if fires {
            let trace = trace_laser(&mut next, player, &self.config);
            let destroyed: Vec<GameEvent> = trace
                .destroyed
                .iter()
                .filter_map(|&piece| next.piece(piece).map(|p| (piece, p)))
                .map(|(piece, p)| GameEvent::Destroy {
                    piece,
                    kind: p.kind,
                    at: p.position,
                })
                .collect();
            events.push(GameEvent::Laser(trace.clone()));
            events.extend(destroyed);
            next.set_last_laser(Some(trace));
        } else {
            events.push(GameEvent::LaserSkipped);
            next.set_last_laser(None);
        }

        let outcome = evaluate_outcome(&next, &self.config);
        next.set_winner(outcome);
        end_turn(&mut next, player);

        match outcome {
            Some(outcome) => log::info!("game over at ply {}: {outcome:?}", next.ply()),
            None => {
                next.advance_turn();
                let up = next.current_player();
                begin_turn(&mut next, up);
            }
        }

        Ok(Transition { state: next, events })
    }

    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        if state.is_over() {
            return Vec::new();
        }
        let player = state.current_player();
        let mut actions = Vec::new();

        for piece in state.live_pieces().filter(|p| p.owner == player) {
            for to in legal_move_targets(state, piece.id) {
                actions.push(Action::Move { piece: piece.id, to });
            }
            if piece.kind.can_rotate() {
                for delta in [1, -1] {
                    actions.push(Action::Rotate { piece: piece.id, delta });
                }
            }
        }

        for at in Coord::all().filter(|&at| check_placement(state, at).is_ok()) {
            for facing in Direction::ALL {
                actions.push(Action::PlaceReserveUnit { at, facing });
            }
        }

        if check_swap(state, player, SwapPartner::Monarch).is_ok() {
            actions.push(Action::SwapWithMonarch);
        }
        if check_swap(state, player, SwapPartner::Emitter).is_ok() {
            actions.push(Action::SwapWithEmitter);
        }
        actions
    }
}

/// Apply `action` under the default rules.
pub fn apply_action(state: &GameState, action: &Action) -> Result<Transition, InvalidAction> {
    Engine::default().apply(state, action)
}
