//! Player actions, their outcomes, and the history record.
//!
//! An action is a closed verb: play a card forward, retreat, or pass.
//! Every submitted action resolves to an `Outcome` the caller can
//! inspect; a rejected action changes nothing.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Symbol;
use crate::core::Color;

/// A player intent submitted to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Spend one `card` to move a token forward from space `from`.
    Play { card: Symbol, from: usize },
    /// Move a token backward from space `from`, picking up cards.
    Retreat { from: usize },
    /// End the turn immediately, forfeiting any unspent actions.
    Pass,
}

/// How a submitted action resolved.
///
/// Carries everything a collaborator needs: whether the action was
/// accepted, where a token went, which cards were gained, and whether the
/// move won the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Validation failed: wrong color, card not held, space not occupied
    /// by the acting color, or the game is already over. Nothing changed
    /// and no action was consumed.
    Rejected,
    /// A token advanced to `destination`. `won` is set when the move
    /// placed the color's final token on the sloop.
    Moved { destination: usize, won: bool },
    /// A retreat resolved. `destination` is `None` when no space behind
    /// held one or two tokens — the token stayed put. `cards` holds the
    /// symbols actually drawn, which fall short of the award when the
    /// deck runs dry.
    Retreated {
        destination: Option<usize>,
        cards: SmallVec<[Symbol; 2]>,
    },
    /// The turn was handed to the next player.
    Passed,
}

impl Outcome {
    /// Whether the action was accepted and applied.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        !matches!(self, Outcome::Rejected)
    }
}

/// A resolved action with turn metadata, as kept in the game's history
/// log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The color that acted.
    pub color: Color,
    /// The action taken.
    pub action: Action,
    /// Turn number when the action resolved.
    pub turn: u32,
    /// Position of the action in game-wide order.
    pub sequence: u32,
}
