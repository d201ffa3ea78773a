//! Deciding whether the game is over.

use crate::core::{GameState, Outcome, PlayerId, RulesConfig};

/// The result implied by `state`, or `None` while play continues.
///
/// Both Monarchs gone is a draw, one gone hands the game to the other
/// player, and reaching `config.ply_cap` with both alive is a draw.
#[must_use]
pub fn evaluate_outcome(state: &GameState, config: &RulesConfig) -> Option<Outcome> {
    let alive = |player: PlayerId| state.is_alive(state.player(player).monarch);

    match (alive(PlayerId::ZERO), alive(PlayerId::ONE)) {
        (false, false) => Some(Outcome::Draw),
        (false, true) => Some(Outcome::Winner(PlayerId::ONE)),
        (true, false) => Some(Outcome::Winner(PlayerId::ZERO)),
        (true, true) if state.ply() >= config.ply_cap => Some(Outcome::Draw),
        (true, true) => None,
    }
}
