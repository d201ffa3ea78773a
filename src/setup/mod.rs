//! Building game states: the random opening and hand-made scenarios.

pub mod builder;
pub mod initial;

pub use builder::{GameBuilder, SetupError};
pub use initial::initial_state;
