//! Beam tracing.
//!
//! The beam leaves the firing player's Emitter in the Emitter's facing and
//! advances one cell per step. Each entered cell is appended to the path
//! and resolved with [`interact`]. Destruction happens immediately on the
//! state being traced, so later steps see the vacated cells.
//!
//! A trace ends in exactly one of three ways:
//! - `Exited`: the beam left the board
//! - `Shielded`: an Emitter or a Guardian's shield absorbed it
//! - `Loop`: the beam re-entered a cell in a direction it already travelled
//!   there, or hit the step cap

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::optics::{interact, Interaction};
use crate::board::{Coord, Direction};
use crate::core::{GameState, PieceId, PlayerId, RulesConfig};

/// Why a trace stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Termination {
    Exited,
    Shielded,
    Loop,
}

/// The result of one beam.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaserTrace {
    /// Player whose Emitter fired.
    pub firing_player: PlayerId,

    /// Cells entered, in order. The Emitter's own cell is not included.
    pub path: Vec<Coord>,

    /// Pieces destroyed, in the order the beam reached them.
    pub destroyed: SmallVec<[PieceId; 4]>,

    /// How the trace ended.
    pub termination: Termination,
}

impl LaserTrace {
    fn new(firing_player: PlayerId) -> Self {
        Self {
            firing_player,
            path: Vec::new(),
            destroyed: SmallVec::new(),
            termination: Termination::Exited,
        }
    }

    fn finish(mut self, termination: Termination) -> Self {
        self.termination = termination;
        log::debug!(
            "laser from {} stopped ({:?}) after {} cells, {} destroyed",
            self.firing_player,
            termination,
            self.path.len(),
            self.destroyed.len()
        );
        self
    }
}

/// Fire `firing`'s Emitter, applying destruction to `state`.
///
/// Destroyed Reflector-fixed units queue a replenishment token of
/// `config.replenish_delay` on the opponent of their owner.
pub fn trace_laser(state: &mut GameState, firing: PlayerId, config: &RulesConfig) -> LaserTrace {
    let mut trace = LaserTrace::new(firing);

    let emitter_id = state.player(firing).emitter;
    let Some(emitter) = state.piece(emitter_id).filter(|p| p.alive) else {
        return trace.finish(Termination::Exited);
    };

    let mut at = emitter.position;
    let mut heading = emitter.facing;
    let mut visited: FxHashSet<(Coord, Direction)> = FxHashSet::default();

    for _ in 0..config.laser_step_cap {
        at = at.step(heading);

        if !at.in_bounds() {
            return trace.finish(Termination::Exited);
        }
        if !visited.insert((at, heading)) {
            return trace.finish(Termination::Loop);
        }
        trace.path.push(at);

        let Some(piece) = state.piece_at(at) else {
            continue;
        };
        let (id, kind, owner) = (piece.id, piece.kind, piece.owner);

        match interact(kind, piece.facing, heading) {
            Interaction::Absorb => {
                log::trace!("beam absorbed by {kind} {id} at {at}");
                return trace.finish(Termination::Shielded);
            }
            Interaction::Reflect(out) => {
                log::trace!("beam reflected {heading} -> {out} by {kind} {id} at {at}");
                heading = out;
            }
            Interaction::Destroy { replenish_opponent } => {
                log::trace!("beam destroyed {kind} {id} at {at}");
                state.destroy_piece(id);
                trace.destroyed.push(id);
                if replenish_opponent {
                    state
                        .player_mut(owner.opponent())
                        .incoming
                        .push(config.replenish_delay);
                }
            }
        }
    }

    trace.finish(Termination::Loop)
}

/// Trace `firing`'s beam on a private copy, leaving `state` untouched.
#[must_use]
pub fn preview_laser(state: &GameState, firing: PlayerId, config: &RulesConfig) -> LaserTrace {
    let mut scratch = state.clone();
    trace_laser(&mut scratch, firing, config)
}
