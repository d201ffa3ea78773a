//! Turn boundaries: cooldown decay and reserve replenishment.

use crate::core::{GameState, PlayerId};

/// Start `player`'s turn: both swap cooldowns tick toward zero.
pub(crate) fn begin_turn(state: &mut GameState, player: PlayerId) {
    let cooldowns = &mut state.player_mut(player).cooldowns;
    cooldowns.monarch_swap = cooldowns.monarch_swap.saturating_sub(1);
    cooldowns.emitter_swap = cooldowns.emitter_swap.saturating_sub(1);
}

/// End `player`'s turn: every pending replenishment ticks down, and those
/// that run out join the reserve. Survivors keep their order.
pub(crate) fn end_turn(state: &mut GameState, player: PlayerId) {
    let record = state.player_mut(player);
    let mut arrived = 0;
    record.incoming.retain_mut(|turns| {
        *turns = turns.saturating_sub(1);
        if *turns == 0 {
            arrived += 1;
            false
        } else {
            true
        }
    });
    if arrived > 0 {
        record.reserve += arrived;
        log::debug!("{player} reserve +{arrived} (now {})", record.reserve);
    }
}
