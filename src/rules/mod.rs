//! Game rules: action validation, turn flow and game end.
//!
//! [`Engine`] implements [`RulesEngine`] and is the only way a state moves
//! forward. The submodules hold the pieces it is built from:
//! - `legality`: preconditions for each action, plus UI queries
//! - `lifecycle`: cooldown and reserve bookkeeping at turn boundaries
//! - `outcome`: win and draw detection

pub mod engine;
pub mod error;
pub mod event;
pub mod legality;
pub mod lifecycle;
pub mod outcome;

pub use engine::{apply_action, Engine, RulesEngine, Transition};
pub use error::InvalidAction;
pub use event::GameEvent;
pub use legality::{can_place_reserve_at, legal_move_targets};
pub use outcome::evaluate_outcome;
