use proptest::prelude::*;

use crate::ai::registry::{AIM_ZERO, FIRST_AVAILABLE, PROBABILISTIC_LIGHT, RANDOM};
use crate::ai::{StrategyConfig, StrategyFactory};
use crate::domain::scoring::score;
use crate::domain::{test_gens, test_prelude, Card, Game, Phase, PlayerIdentity};

static ROSTER: [&StrategyFactory; 4] =
    [&PROBABILISTIC_LIGHT, &AIM_ZERO, &FIRST_AVAILABLE, &RANDOM];
const NAMES: [&str; 6] = ["Alice", "Bob", "Charlie", "Dylan", "Eddie", "Fitz"];

fn roster(players: usize, seed: u64) -> Vec<PlayerIdentity> {
    (0..players)
        .map(|seat| {
            PlayerIdentity::with_strategy(NAMES[seat], ROSTER[seat % ROSTER.len()])
                .with_config(StrategyConfig::with_seed(seed + seat as u64))
        })
        .collect()
}

fn hands(game: &Game) -> Vec<Vec<Card>> {
    (0..game.players().len())
        .map(|seat| game.hand(seat).unwrap_or_default().to_vec())
        .collect()
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Tricks won always add up to the number of tricks played, and every
    /// completed game is scored by the bid formula.
    #[test]
    fn prop_tricks_won_and_scores(
        (cards, players, trick_count) in test_gens::game_setup(),
        seed in any::<u32>(),
    ) {
        let mut game = Game::new(roster(players, u64::from(seed)), cards, trick_count).unwrap();
        let bids = game.run_bids().unwrap();

        while game.phase() != Phase::Complete {
            game.run_trick().unwrap();
            let view = game.view();
            let total: u32 = view.tricks_won().iter().sum();
            prop_assert_eq!(total as usize, view.current_trick_index());
        }

        let view = game.view();
        prop_assert_eq!(view.current_trick_index(), trick_count);
        for seat in 0..players {
            let won = view.tricks_won_by(seat) as i32;
            let expected = score(bids[seat] as i32, won).unwrap();
            prop_assert_eq!(view.scores()[seat], expected);
        }
    }

    /// A player holding the led suit always follows it.
    #[test]
    fn prop_players_follow_suit(
        (cards, players, trick_count) in test_gens::game_setup(),
        seed in any::<u32>(),
    ) {
        let mut game = Game::new(roster(players, u64::from(seed)), cards, trick_count).unwrap();
        game.run_bids().unwrap();
        while game.phase() != Phase::Complete {
            let before = hands(&game);
            let trick = game.run_trick().unwrap();
            let lead = trick.decisions[0].card.suit;
            for d in &trick.decisions[1..] {
                prop_assert!(before[d.seat].contains(&d.card));
                if before[d.seat].iter().any(|c| c.suit == lead) {
                    prop_assert_eq!(d.card.suit, lead, "{:?} did not follow {:?}", d, lead);
                }
            }
        }
    }

    /// Same cards and deterministic strategies give the same game.
    #[test]
    fn prop_games_are_reproducible(
        (cards, players, trick_count) in test_gens::game_setup(),
        seed in any::<u32>(),
    ) {
        let seed = u64::from(seed);
        let mut a = Game::new(roster(players, seed), cards.clone(), trick_count).unwrap();
        let mut b = Game::new(roster(players, seed), cards, trick_count).unwrap();
        prop_assert_eq!(a.run_to_completion().unwrap(), b.run_to_completion().unwrap());
        prop_assert_eq!(a.view().scores(), b.view().scores());
    }
}
