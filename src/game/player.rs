//! The player registry entry.

use serde::{Deserialize, Serialize};

use crate::cards::Hand;
use crate::core::Color;

/// One participant: a display name, an assigned color, and a hand of
/// cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    color: Color,
    hand: Hand,
}

impl Player {
    pub(crate) fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
            hand: Hand::new(),
        }
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's token color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// The player's current hand.
    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}
