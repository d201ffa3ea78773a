//! Board and piece model: coordinates, directions, piece kinds, the grid.
//!
//! The grid only stores piece ids; piece records live in the game state's
//! piece table. `GameState` keeps the two consistent.

pub mod geometry;
pub mod grid;
pub mod piece;

pub use geometry::{Coord, Direction};
pub use grid::{Board, PlacementError};
pub use piece::{Piece, PieceKind};
