//! Rules configuration.
//!
//! The defaults reproduce the standard ruleset. Tweaking them is useful for
//! tests (short games, tiny step caps) and for house-rule variants.

use serde::{Deserialize, Serialize};

/// Side length of the square board.
pub const BOARD_SIZE: usize = 10;

/// Tunable rule constants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Reflector-fixed units each player may place at game start.
    pub starting_reserve: u32,

    /// Owner turns a swap is locked after use.
    pub swap_cooldown: u32,

    /// Owner turns before a destroyed unit returns to a reserve.
    pub replenish_delay: u32,

    /// Ply at which a game with both Monarchs alive is drawn.
    pub ply_cap: u32,

    /// Backstop on beam steps per trace.
    pub laser_step_cap: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_reserve: 7,
            swap_cooldown: 4,
            replenish_delay: 1,
            ply_cap: 100,
            laser_step_cap: 500,
        }
    }
}

impl RulesConfig {
    /// Set the starting reserve.
    #[must_use]
    pub fn with_starting_reserve(mut self, count: u32) -> Self {
        self.starting_reserve = count;
        self
    }

    /// Set the swap cooldown.
    #[must_use]
    pub fn with_swap_cooldown(mut self, turns: u32) -> Self {
        self.swap_cooldown = turns;
        self
    }

    /// Set the replenishment delay.
    #[must_use]
    pub fn with_replenish_delay(mut self, turns: u32) -> Self {
        self.replenish_delay = turns;
        self
    }

    /// Set the ply cap.
    #[must_use]
    pub fn with_ply_cap(mut self, ply: u32) -> Self {
        self.ply_cap = ply;
        self
    }

    /// Set the laser step cap.
    #[must_use]
    pub fn with_laser_step_cap(mut self, steps: usize) -> Self {
        self.laser_step_cap = steps;
        self
    }
}
