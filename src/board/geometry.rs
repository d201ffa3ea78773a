//! Board coordinates and the four cardinal directions.
//!
//! The origin is the top-left cell and `y` grows downward, so North is
//! `(0, -1)`. Directions are encoded 0–3 in clockwise order:
//!
//! ```text
//!          N(0)
//!     W(3)  +  E(1)
//!          S(2)
//! ```

use serde::{Deserialize, Serialize};

use crate::core::config::BOARD_SIZE;

/// One of the four cardinal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    /// All directions in encoding order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Integer encoding, 0–3.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Decode from any integer, wrapping modulo 4.
    #[must_use]
    pub const fn from_index(index: i32) -> Self {
        Self::ALL[index.rem_euclid(4) as usize]
    }

    /// `(d + 2) mod 4`.
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::from_index(self as i32 + 2)
    }

    /// Rotate by `delta` quarter turns, positive is clockwise.
    #[must_use]
    pub const fn rotated(self, delta: i32) -> Self {
        Self::from_index(self as i32 + delta)
    }

    /// Unit step `(dx, dy)`.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| format!("direction {value} out of range"))
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> Self {
        direction.index()
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::North => "N",
            Direction::East => "E",
            Direction::South => "S",
            Direction::West => "W",
        };
        f.write_str(name)
    }
}

/// A cell address. Not necessarily on the board; see [`Coord::in_bounds`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether the cell lies on the board.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE as i32 && self.y >= 0 && self.y < BOARD_SIZE as i32
    }

    /// The adjacent cell in `direction`, which may be off the board.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Orthogonal neighbours that lie on the board.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        Direction::ALL
            .into_iter()
            .map(move |d| self.step(d))
            .filter(|c| c.in_bounds())
    }

    /// Whether `other` is one orthogonal step away.
    #[must_use]
    pub fn is_adjacent(self, other: Coord) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }

    /// Point reflection through the board centre.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        let last = BOARD_SIZE as i32 - 1;
        Self::new(last - self.x, last - self.y)
    }

    /// Every on-board coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE as i32).flat_map(|y| (0..BOARD_SIZE as i32).map(move |x| Coord::new(x, y)))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
