//! Core engine types: colors, per-color storage, and deterministic RNG.
//!
//! These are the game-agnostic building blocks; the rules live in `board`
//! and `game`.

pub mod color;
pub mod rng;

pub use color::{Color, ColorMap};
pub use rng::GameRng;
