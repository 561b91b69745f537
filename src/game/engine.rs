//! The turn engine.
//!
//! `Game` owns the deck, the board, and the player registry, and is the
//! only component that touches both deck and board. It validates each
//! submitted action against the active player's hand and position,
//! delegates position changes to `Board`, settles card movement with
//! `Deck`, and keeps the turn bookkeeping: strict round-robin rotation
//! with a budget of three actions per turn.
//!
//! Every action either fully applies or is rejected before any state
//! changes; there is no partial resolution.

use im::Vector;
use smallvec::SmallVec;

use crate::board::Board;
use crate::cards::{Deck, Hand, Symbol};
use crate::core::{Color, GameRng};

use super::action::{Action, ActionRecord, Outcome};
use super::player::Player;

/// Actions allotted to each player per turn.
pub const ACTIONS_PER_TURN: u8 = 3;

/// Cards dealt to each player at game start.
pub const STARTING_HAND: usize = 6;

/// Minimum participants.
pub const MIN_PLAYERS: usize = 2;

/// Maximum participants (the palette size).
pub const MAX_PLAYERS: usize = Color::COUNT;

/// The game-state engine: deck, board, players, and the turn loop.
///
/// Collaborators submit one action at a time through `play_card`,
/// `retreat`, `pass`, or `resolve`, and read state back through the
/// borrowing accessors. The engine rejects invalid input instead of
/// panicking; callers inspect the returned `Outcome`.
#[derive(Clone, Debug)]
pub struct Game {
    deck: Deck,
    board: Board,
    /// Turn order follows palette order.
    players: Vec<Player>,
    active: usize,
    remaining_actions: u8,
    turn_number: u32,
    history: Vector<ActionRecord>,
    winner: Option<Color>,
}

impl Game {
    /// Start a game for 2–5 named players.
    ///
    /// Colors are assigned in palette order, the deck is shuffled from
    /// `seed`, the board is built, and every player is dealt a starting
    /// hand of six cards, one draw at a time. The first color starts
    /// with a full action budget.
    #[must_use]
    pub fn new(names: &[&str], seed: u64) -> Self {
        assert!(
            (MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()),
            "Player count must be 2-5"
        );

        let mut rng = GameRng::new(seed);
        let mut deck = Deck::shuffled(&mut rng);
        let colors = Color::palette(names.len());
        let board = Board::new(colors, &mut rng);

        let mut players: Vec<Player> = names
            .iter()
            .zip(colors)
            .map(|(&name, &color)| Player::new(name, color))
            .collect();

        for player in &mut players {
            for _ in 0..STARTING_HAND {
                if let Some(card) = deck.draw() {
                    player.hand_mut().add(card);
                }
            }
        }

        Self {
            deck,
            board,
            players,
            active: 0,
            remaining_actions: ACTIONS_PER_TURN,
            turn_number: 1,
            history: Vector::new(),
            winner: None,
        }
    }

    // === Queries ===

    /// The board, for read-only snapshots.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The deck, for read-only snapshots.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// All players, in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The player assigned `color`, if that color is in play.
    #[must_use]
    pub fn player(&self, color: Color) -> Option<&Player> {
        self.players.iter().find(|p| p.color() == color)
    }

    /// The hand held by `color`, if that color is in play.
    #[must_use]
    pub fn hand(&self, color: Color) -> Option<&Hand> {
        self.player(color).map(Player::hand)
    }

    /// Colors in play, in turn order.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.players.iter().map(Player::color)
    }

    /// The color whose turn it is.
    #[must_use]
    pub fn active_color(&self) -> Color {
        self.players[self.active].color()
    }

    /// Actions left in the current turn.
    #[must_use]
    pub fn remaining_actions(&self) -> u8 {
        self.remaining_actions
    }

    /// Turn counter, starting at 1 and advancing with the active player.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// The winning color, once one has landed all six tokens on the
    /// sloop.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Log of every applied action, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Every action the active player could submit right now without
    /// being rejected: one `Play` per held symbol and occupied space, one
    /// `Retreat` per occupied space, and `Pass`. Empty once the game is
    /// over.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.is_over() {
            return Vec::new();
        }

        let color = self.active_color();
        let hand = self.players[self.active].hand();
        let occupied: Vec<usize> = (0..self.board.spaces().len())
            .filter(|&i| self.board.is_color_on_space(color, i))
            .collect();

        let mut actions = Vec::new();
        for (card, count) in hand.iter() {
            if count == 0 {
                continue;
            }
            for &from in &occupied {
                actions.push(Action::Play { card, from });
            }
        }
        for &from in &occupied {
            actions.push(Action::Retreat { from });
        }
        actions.push(Action::Pass);
        actions
    }

    // === Commands ===

    /// Play `card` for the active player, moving a token forward from
    /// `from`.
    pub fn play_card(&mut self, card: Symbol, from: usize) -> Outcome {
        let color = self.active_color();
        self.resolve(color, Action::Play { card, from })
    }

    /// Retreat one of the active player's tokens from `from`.
    pub fn retreat(&mut self, from: usize) -> Outcome {
        let color = self.active_color();
        self.resolve(color, Action::Retreat { from })
    }

    /// End the active player's turn.
    pub fn pass(&mut self) -> Outcome {
        let color = self.active_color();
        self.resolve(color, Action::Pass)
    }

    /// Resolve one action for `color`.
    ///
    /// Callers are expected to pre-validate; the engine re-checks
    /// everything and answers `Outcome::Rejected` without touching state
    /// when they didn't.
    pub fn resolve(&mut self, color: Color, action: Action) -> Outcome {
        if self.is_over() || color != self.active_color() {
            return Outcome::Rejected;
        }

        match action {
            Action::Pass => {}
            Action::Retreat { from } => {
                if !self.board.is_color_on_space(color, from) {
                    return Outcome::Rejected;
                }
            }
            Action::Play { card, from } => {
                if !self.players[self.active].hand().holds(card)
                    || !self.board.is_color_on_space(color, from)
                {
                    return Outcome::Rejected;
                }
            }
        }

        let turn = self.turn_number;
        let outcome = match action {
            Action::Pass => {
                self.advance_turn();
                Outcome::Passed
            }
            Action::Retreat { from } => {
                let retreat = self.board.move_backward(color, from);
                let mut cards = SmallVec::new();
                if let Some(retreat) = retreat {
                    for _ in 0..retreat.cards_awarded {
                        // An empty deck short-pays the award.
                        if let Some(card) = self.deck.draw() {
                            self.players[self.active].hand_mut().add(card);
                            cards.push(card);
                        }
                    }
                }
                // The attempt costs an action even with no retreat target.
                self.consume_action();
                Outcome::Retreated {
                    destination: retreat.map(|r| r.destination),
                    cards,
                }
            }
            Action::Play { card, from } => {
                let Some(destination) = self.board.move_forward(color, from, card) else {
                    return Outcome::Rejected;
                };
                self.players[self.active].hand_mut().remove(card);
                self.deck.return_card(card);

                let colors: Vec<Color> = self.colors().collect();
                let won = self.board.winning_color(&colors) == Some(color);
                if won {
                    self.winner = Some(color);
                } else {
                    self.consume_action();
                }
                Outcome::Moved { destination, won }
            }
        };

        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord {
            color,
            action,
            turn,
            sequence,
        });
        outcome
    }

    fn consume_action(&mut self) {
        self.remaining_actions -= 1;
        if self.remaining_actions == 0 {
            self.advance_turn();
        }
    }

    fn advance_turn(&mut self) {
        self.active = (self.active + 1) % self.players.len();
        self.remaining_actions = ACTIONS_PER_TURN;
        self.turn_number += 1;
    }
}
