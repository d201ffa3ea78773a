//! Session history with undo and replay.
//!
//! Every applied action keeps the state it produced. Because states are
//! values with structurally shared piece tables, holding the whole game is
//! cheap, and undo is just dropping the newest entry.
//!
//! ```
//! use laser_tactics::core::{Action, ScriptedRandom};
//! use laser_tactics::history::GameHistory;
//! use laser_tactics::rules::Engine;
//!
//! let engine = Engine::default();
//! let initial = engine.new_game(&mut ScriptedRandom::new(vec![2, 3, 7, 1])).unwrap();
//! let mut history = GameHistory::new(engine, initial.clone());
//!
//! history.apply(Action::SwapWithEmitter).unwrap();
//! assert_eq!(history.len(), 1);
//!
//! history.undo();
//! assert_eq!(history.current(), &initial);
//! ```

use im::Vector;

use crate::core::{Action, ActionRecord, GameState};
use crate::rules::{Engine, GameEvent, InvalidAction, RulesEngine};

/// A game from its initial state through every accepted action.
#[derive(Clone, Debug)]
pub struct GameHistory<E: RulesEngine = Engine> {
    engine: E,
    states: Vector<GameState>,
    actions: Vector<ActionRecord>,
}

impl<E: RulesEngine> GameHistory<E> {
    /// Start a history at `initial`.
    pub fn new(engine: E, initial: GameState) -> Self {
        Self {
            engine,
            states: Vector::unit(initial),
            actions: Vector::new(),
        }
    }

    /// Rebuild a game by applying `actions` to `initial` in order.
    ///
    /// Stops at the first rejected action.
    pub fn replay(
        engine: E,
        initial: GameState,
        actions: impl IntoIterator<Item = Action>,
    ) -> Result<Self, InvalidAction> {
        let mut history = Self::new(engine, initial);
        for action in actions {
            history.apply(action)?;
        }
        Ok(history)
    }

    /// Apply `action` to the current state and record the result.
    ///
    /// Actions on a finished game yield `Noop` and are not recorded.
    pub fn apply(&mut self, action: Action) -> Result<Vec<GameEvent>, InvalidAction> {
        let current = self.current();
        if current.is_over() {
            return Ok(vec![GameEvent::Noop]);
        }
        let record = ActionRecord::new(current.current_player(), action, current.ply());
        let (next, events) = self.engine.apply(current, &action)?.into_parts();

        self.states.push_back(next);
        self.actions.push_back(record);
        Ok(events)
    }

    /// Drop the newest state. Returns the action that produced it, or `None`
    /// when only the initial state is left.
    pub fn undo(&mut self) -> Option<ActionRecord> {
        let record = self.actions.pop_back()?;
        self.states.pop_back();
        Some(record)
    }

    /// The newest state.
    #[must_use]
    pub fn current(&self) -> &GameState {
        // `states` is created non-empty and `undo` never removes the first entry.
        &self.states[self.states.len() - 1]
    }

    /// The state the game started from.
    #[must_use]
    pub fn initial(&self) -> &GameState {
        &self.states[0]
    }

    /// Number of recorded actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether no action has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Recorded actions, oldest first.
    pub fn actions(&self) -> impl Iterator<Item = &ActionRecord> + '_ {
        self.actions.iter()
    }

    /// All states, initial first.
    pub fn states(&self) -> impl Iterator<Item = &GameState> + '_ {
        self.states.iter()
    }

    /// The engine applying actions.
    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }
}
