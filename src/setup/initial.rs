//! Randomised opening layout.
//!
//! Player 0's half is drawn from the random source; player 1's half is the
//! point mirror `(x, y) -> (9 - x, 9 - y)` with facings reversed, so both
//! sides always get the same position.
//!
//! | Piece               | Row | Column                                  | Facing                  |
//! |---------------------|-----|-----------------------------------------|-------------------------|
//! | Emitter             | 0   | random                                  | East in 0..=4, else West |
//! | Monarch             | 2   | random, avoiding edges and Emitter files | South                   |
//! | Guardian            | 4   | Monarch's column                        | South                   |
//! | Guardian            | 2   | opponent Emitter's column               | South                   |
//! | Reflector-mobile    | 3   | random empty                            | random                  |
//!
//! Draws are taken in table order: Emitter column, Monarch column,
//! Reflector-mobile column, Reflector-mobile facing.

use super::builder::{GameBuilder, SetupError};
use crate::board::{Coord, Direction, PieceKind};
use crate::core::{GameState, RandomSource, RulesConfig, BOARD_SIZE};

const EMITTER_ROW: i32 = 0;
const MONARCH_ROW: i32 = 2;
const REFLECTOR_ROW: i32 = 3;
const FORWARD_GUARDIAN_ROW: i32 = 4;

/// Lay out a fresh game with player 0 to move.
pub fn initial_state<R: RandomSource>(config: &RulesConfig, rng: &mut R) -> Result<GameState, SetupError> {
    let last = BOARD_SIZE as i32 - 1;
    let columns = 0..BOARD_SIZE as i32;

    let emitter_col = rng.below(BOARD_SIZE) as i32;
    let emitter_facing = if emitter_col <= last / 2 {
        Direction::East
    } else {
        Direction::West
    };
    let opposing_emitter_col = last - emitter_col;

    let monarch_cols: Vec<i32> = columns
        .clone()
        .filter(|&x| x != 0 && x != last && x != emitter_col && x != opposing_emitter_col)
        .collect();
    let monarch_col = rng.choose(&monarch_cols).copied().unwrap_or(1);

    let mut placed = vec![
        Coord::new(emitter_col, EMITTER_ROW),
        Coord::new(monarch_col, MONARCH_ROW),
        Coord::new(monarch_col, FORWARD_GUARDIAN_ROW),
        Coord::new(opposing_emitter_col, MONARCH_ROW),
    ];

    let reflector_cols: Vec<i32> = columns
        .filter(|&x| !placed.contains(&Coord::new(x, REFLECTOR_ROW)))
        .collect();
    let reflector_col = rng.choose(&reflector_cols).copied().unwrap_or(0);
    let reflector_facing = Direction::from_index(rng.below(4) as i32);
    placed.push(Coord::new(reflector_col, REFLECTOR_ROW));

    log::debug!(
        "opening: emitter file {emitter_col}, monarch file {monarch_col}, reflector file {reflector_col} facing {reflector_facing}"
    );

    GameBuilder::new()
        .config(config.clone())
        .mirrored_pair(PieceKind::Emitter, placed[0], emitter_facing)
        .mirrored_pair(PieceKind::Monarch, placed[1], Direction::South)
        .mirrored_pair(PieceKind::Guardian, placed[2], Direction::South)
        .mirrored_pair(PieceKind::Guardian, placed[3], Direction::South)
        .mirrored_pair(PieceKind::ReflectorMobile, placed[4], reflector_facing)
        .build()
}
