//! Conservation invariants under random legal play.
//!
//! Whatever sequence of legal actions a game sees, cards and tokens are
//! only ever moved, never created or destroyed.

use corsair::{Color, Game, Symbol, COPIES_PER_SYMBOL, TOKENS_PER_PLAYER};
use proptest::prelude::*;

const NAMES: [&str; 5] = ["Anne", "Edward", "Mary", "Jack", "Bart"];

fn cards_in_circulation(game: &Game) -> [usize; Symbol::COUNT] {
    let mut totals = [0usize; Symbol::COUNT];
    for card in game.deck().cards() {
        totals[card.index()] += 1;
    }
    for player in game.players() {
        for (symbol, count) in player.hand().iter() {
            totals[symbol.index()] += usize::from(count);
        }
    }
    totals
}

fn tokens_on_board(game: &Game, color: Color) -> u32 {
    game.board()
        .spaces()
        .iter()
        .map(|s| u32::from(s.tokens(color)))
        .sum()
}

proptest! {
    #[test]
    fn cards_and_tokens_are_conserved(
        seed in any::<u64>(),
        count in 2usize..=5,
        picks in proptest::collection::vec(any::<usize>(), 1..120),
    ) {
        let mut game = Game::new(&NAMES[..count], seed);

        for pick in picks {
            if game.is_over() {
                break;
            }
            let legal = game.legal_actions();
            prop_assert!(!legal.is_empty());
            let action = legal[pick % legal.len()];
            let color = game.active_color();
            prop_assert!(game.resolve(color, action).is_applied());

            prop_assert_eq!(
                cards_in_circulation(&game),
                [COPIES_PER_SYMBOL; Symbol::COUNT]
            );
            for color in game.colors().collect::<Vec<_>>() {
                prop_assert_eq!(tokens_on_board(&game, color), u32::from(TOKENS_PER_PLAYER));
            }
            let remaining = game.remaining_actions();
            prop_assert!(remaining >= 1 && remaining <= 3);
        }
    }

    #[test]
    fn identical_seeds_build_identical_games(seed in any::<u64>()) {
        let a = Game::new(&NAMES[..3], seed);
        let b = Game::new(&NAMES[..3], seed);

        prop_assert_eq!(a.board(), b.board());
        prop_assert_eq!(a.deck(), b.deck());
        prop_assert_eq!(a.players(), b.players());
    }
}
