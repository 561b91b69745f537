//! The turn engine: player registry, rotation, action budget, and action
//! resolution against the deck and the board.
//!
//! ## Key Types
//!
//! - `Game`: owns `Deck` + `Board` and resolves one action at a time
//! - `Action` / `Outcome`: the closed command surface and its result
//! - `Player`: display name, color, hand
//! - `ActionRecord`: one entry of the applied-action log

pub mod action;
pub mod engine;
pub mod player;

pub use action::{Action, ActionRecord, Outcome};
pub use engine::{Game, ACTIONS_PER_TURN, MAX_PLAYERS, MIN_PLAYERS, STARTING_HAND};
pub use player::Player;
