//! The shared card stock.
//!
//! One deck per game: 17 copies of each of the six symbols, shuffled at
//! construction. Cards are drawn from the front and returned to the back.
//! Cards are conserved — the deck plus all hands always holds exactly
//! 17 × 6 cards.

use std::collections::VecDeque;

use crate::cards::Symbol;
use crate::core::GameRng;

/// Copies of each symbol in a fresh deck.
pub const COPIES_PER_SYMBOL: usize = 17;

/// Total cards in a fresh deck.
pub const DECK_SIZE: usize = COPIES_PER_SYMBOL * Symbol::COUNT;

/// The shared, ordered stock of playable cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Symbol>,
}

impl Deck {
    /// Build the full 102-card stock in a uniformly random order.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for symbol in Symbol::ALL {
            cards.extend(std::iter::repeat(symbol).take(COPIES_PER_SYMBOL));
        }
        rng.shuffle(&mut cards);
        Self {
            cards: cards.into(),
        }
    }

    /// Remove and return the front card, or `None` when the deck is empty.
    pub fn draw(&mut self) -> Option<Symbol> {
        self.cards.pop_front()
    }

    /// Append a card to the back of the deck.
    pub fn return_card(&mut self, card: Symbol) {
        self.cards.push_back(card);
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is out of cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Current deck order, front first. For diagnostics and tests —
    /// game rules never look at undrawn cards.
    pub fn cards(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.cards.iter().copied()
    }
}
