//! Board spaces: a tag plus the tokens resting on it.

use serde::{Deserialize, Serialize};

use crate::cards::Symbol;
use crate::core::{Color, ColorMap};

/// What a board space is tagged with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpaceTag {
    /// The origin space; holds every color's full token complement at setup.
    Start,
    /// An interior space matching one card symbol.
    Card(Symbol),
    /// The goal space; unrestricted occupancy.
    Sloop,
}

/// A single board space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    tag: SpaceTag,
    tokens: ColorMap<u8>,
}

impl Space {
    pub(crate) fn new(tag: SpaceTag) -> Self {
        Self {
            tag,
            tokens: ColorMap::with_value(0),
        }
    }

    /// The space's tag.
    #[must_use]
    pub fn tag(&self) -> SpaceTag {
        self.tag
    }

    /// Tokens of `color` resting here.
    #[must_use]
    pub fn tokens(&self, color: Color) -> u8 {
        self.tokens[color]
    }

    /// Total tokens across all colors.
    #[must_use]
    pub fn occupancy(&self) -> u8 {
        self.tokens.iter().map(|(_, &count)| count).sum()
    }

    pub(crate) fn add_token(&mut self, color: Color) {
        self.tokens[color] += 1;
    }

    pub(crate) fn remove_token(&mut self, color: Color) {
        self.tokens[color] -= 1;
    }
}
