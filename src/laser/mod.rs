//! Laser simulation: per-kind optics and the beam tracer.

pub mod optics;
pub mod trace;

pub use optics::{fixed_reflector_faces, interact, Interaction, Mirror};
pub use trace::{preview_laser, trace_laser, LaserTrace, Termination};
