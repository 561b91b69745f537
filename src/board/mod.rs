//! The race track: a fixed linear board of 38 spaces.
//!
//! Space 0 is `Start`, spaces 1..=36 form six consecutive blocks of six
//! spaces — each block an independent random permutation of the six
//! symbols — and space 37 is the `Sloop`, the goal.
//!
//! ## Movement
//!
//! - **Forward**: a played symbol sends one token to the first *empty*
//!   later space tagged with that symbol, or to the sloop when no such
//!   space exists. The sloop itself has no occupancy restriction.
//! - **Backward**: one token retreats to the nearest earlier space holding
//!   exactly one or two tokens; its owner is awarded that many cards.
//!   Empty spaces have no one to rob and spaces with three or more are
//!   full for retreat purposes, so both are skipped. With no valid target
//!   the token stays put.
//!
//! A token therefore moves Start → interior blocks → Sloop, with retreats
//! only ever landing on an earlier interior space, never back on Start.

pub mod space;

pub use space::{Space, SpaceTag};

use serde::{Deserialize, Serialize};

use crate::cards::Symbol;
use crate::core::{Color, GameRng};

/// Total spaces on the board.
pub const SPACE_COUNT: usize = 38;

/// Index of the start space.
pub const START: usize = 0;

/// Index of the sloop, the goal space.
pub const SLOOP: usize = SPACE_COUNT - 1;

/// Interior blocks, each one permutation of the six symbols.
pub const BLOCKS: usize = 6;

/// Tokens each color races toward the sloop.
pub const TOKENS_PER_PLAYER: u8 = 6;

/// A resolved backward move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Retreat {
    /// Where the token landed.
    pub destination: usize,
    /// Cards awarded: the destination's occupancy before the token joined.
    pub cards_awarded: u8,
}

/// The ordered sequence of 38 spaces and the tokens on them.
///
/// The board knows nothing about hands or the deck; it owns token
/// positions and the movement rules, and reports what each move is worth.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    spaces: Vec<Space>,
}

impl Board {
    /// Build the board for the given colors.
    ///
    /// Every color starts with its full token complement on the start
    /// space; the six interior blocks are shuffled independently; the
    /// sloop is empty.
    #[must_use]
    pub fn new(colors: &[Color], rng: &mut GameRng) -> Self {
        let mut spaces = Vec::with_capacity(SPACE_COUNT);

        let mut start = Space::new(SpaceTag::Start);
        for &color in colors {
            for _ in 0..TOKENS_PER_PLAYER {
                start.add_token(color);
            }
        }
        spaces.push(start);

        for _ in 0..BLOCKS {
            let mut block = Symbol::ALL;
            rng.shuffle(&mut block);
            spaces.extend(block.iter().map(|&s| Space::new(SpaceTag::Card(s))));
        }

        spaces.push(Space::new(SpaceTag::Sloop));

        Self { spaces }
    }

    /// Read-only view of all spaces, in board order.
    #[must_use]
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    /// A single space, or `None` for an out-of-range index.
    #[must_use]
    pub fn space(&self, index: usize) -> Option<&Space> {
        self.spaces.get(index)
    }

    /// Whether `color` has at least one token on `space`.
    ///
    /// False for an out-of-range index.
    #[must_use]
    pub fn is_color_on_space(&self, color: Color, space: usize) -> bool {
        self.spaces.get(space).map_or(false, |s| s.tokens(color) > 0)
    }

    /// Total tokens on `space`, zero for an out-of-range index.
    #[must_use]
    pub fn occupancy(&self, space: usize) -> u8 {
        self.spaces.get(space).map_or(0, Space::occupancy)
    }

    /// Move one of `color`'s tokens forward from `from` by playing `card`.
    ///
    /// The destination is the first space after `from` tagged `card` with
    /// no tokens on it, or the sloop when no such space exists. Returns
    /// the destination, or `None` — moving nothing — when `color` has no
    /// token on `from`.
    pub fn move_forward(&mut self, color: Color, from: usize, card: Symbol) -> Option<usize> {
        if !self.is_color_on_space(color, from) {
            return None;
        }

        let destination = self.find_next_space(from, card).unwrap_or(SLOOP);
        self.spaces[from].remove_token(color);
        self.spaces[destination].add_token(color);
        Some(destination)
    }

    /// Move one of `color`'s tokens backward from `from`.
    ///
    /// The destination is the first space before `from` — never the start
    /// — holding exactly one or two tokens. Returns `None`, moving
    /// nothing, when no such space exists or `color` has no token on
    /// `from`.
    pub fn move_backward(&mut self, color: Color, from: usize) -> Option<Retreat> {
        if !self.is_color_on_space(color, from) {
            return None;
        }

        let destination = self.find_prev_space(from)?;
        let cards_awarded = self.spaces[destination].occupancy();
        self.spaces[from].remove_token(color);
        self.spaces[destination].add_token(color);
        Some(Retreat {
            destination,
            cards_awarded,
        })
    }

    /// The color whose full token complement has reached the sloop, if
    /// any. Every color in `colors` is checked.
    #[must_use]
    pub fn winning_color(&self, colors: &[Color]) -> Option<Color> {
        colors
            .iter()
            .copied()
            .find(|&color| self.spaces[SLOOP].tokens(color) == TOKENS_PER_PLAYER)
    }

    fn find_next_space(&self, from: usize, card: Symbol) -> Option<usize> {
        (from + 1..=SLOOP).find(|&i| {
            self.spaces[i].tag() == SpaceTag::Card(card) && self.spaces[i].occupancy() == 0
        })
    }

    fn find_prev_space(&self, from: usize) -> Option<usize> {
        (START + 1..from)
            .rev()
            .find(|&i| matches!(self.spaces[i].occupancy(), 1 | 2))
    }
}

#[cfg(test)]
impl Board {
    /// Test-only: drop a token on a space, bypassing the movement rules.
    pub(crate) fn put(&mut self, color: Color, space: usize) {
        self.spaces[space].add_token(color);
    }

    /// Test-only: lift a token off a space, bypassing the movement rules.
    pub(crate) fn take(&mut self, color: Color, space: usize) {
        self.spaces[space].remove_token(color);
    }
}
