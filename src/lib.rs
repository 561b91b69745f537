//! # corsair
//!
//! Rules engine for a pirate-themed, card-driven race board game: a
//! shared deck of symbol cards, a fixed linear board of 38 symbol-tagged
//! spaces, and a turn loop in which players spend cards to race tokens
//! toward the sloop — or retreat to recover cards. The first color to
//! land all six of its tokens on the sloop wins.
//!
//! Rendering, input capture, and process bootstrapping are external
//! collaborators: they submit one action at a time and read state back
//! through borrowing accessors.
//!
//! ## Design Principles
//!
//! 1. **Explicit ownership**: `Deck`, `Board`, and `Game` are plain owned
//!    values wired together per game — no globals.
//! 2. **Closed enumerations**: symbols, colors, space tags, and actions
//!    are enums; invalid values are unrepresentable.
//! 3. **Defensive resolution**: every command resolves to an `Outcome`;
//!    invalid input is a rejected no-op, never a panic or corrupted
//!    state.
//! 4. **Determinism**: a game is fully determined by its seed and the
//!    sequence of submitted actions.
//!
//! ## Example
//!
//! ```
//! use corsair::{Game, Outcome};
//!
//! let mut game = Game::new(&["Anne", "Edward"], 7);
//! assert_eq!(game.deck().len(), 102 - 2 * 6);
//!
//! // Pass always ends the active player's turn.
//! let first = game.active_color();
//! assert_eq!(game.pass(), Outcome::Passed);
//! assert_ne!(game.active_color(), first);
//! ```
//!
//! ## Modules
//!
//! - `core`: colors, per-color storage, deterministic RNG
//! - `cards`: symbols, the shared deck, player hands
//! - `board`: the 38-space track, movement resolution, win detection
//! - `game`: the turn engine and its command/query surface

pub mod core;
pub mod cards;
pub mod board;
pub mod game;

// Re-export commonly used types
pub use crate::core::{Color, ColorMap, GameRng};

pub use crate::cards::{Deck, Hand, Symbol, COPIES_PER_SYMBOL, DECK_SIZE};

pub use crate::board::{
    Board, Retreat, Space, SpaceTag, BLOCKS, SLOOP, SPACE_COUNT, START, TOKENS_PER_PLAYER,
};

pub use crate::game::{
    Action, ActionRecord, Game, Outcome, Player, ACTIONS_PER_TURN, MAX_PLAYERS, MIN_PLAYERS,
    STARTING_HAND,
};
