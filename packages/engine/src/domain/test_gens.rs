// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::deck::Packet;
use crate::domain::state::Decision;
use crate::domain::{Card, Rank, Suit, Trump};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

/// Any trump, including no trump.
pub fn trump() -> impl Strategy<Value = Trump> {
    prop_oneof![suit().prop_map(Trump::from), Just(Trump::NoTrumps)]
}

pub fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

pub fn card() -> impl Strategy<Value = Card> {
    (rank(), suit()).prop_map(|(rank, suit)| Card::new(rank, suit))
}

/// `count` distinct cards in random order.
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(Packet::full().cards().to_vec())
        .prop_shuffle()
        .prop_map(move |cards| cards.into_iter().take(count).collect())
}

/// A complete trick for 2 to 6 seats: distinct cards, seats in play order
/// from a random leader.
pub fn complete_trick() -> impl Strategy<Value = Vec<Decision>> {
    (2usize..=6)
        .prop_flat_map(|players| (unique_cards(players), 0..players))
        .prop_map(|(cards, leader)| {
            let players = cards.len();
            cards
                .into_iter()
                .enumerate()
                .map(|(i, card)| Decision {
                    seat: (leader + i) % players,
                    card,
                })
                .collect()
        })
}

/// A shuffled full packet plus a valid (players, trick count) pair for it.
pub fn game_setup() -> impl Strategy<Value = (Vec<Card>, usize, usize)> {
    (2usize..=6).prop_flat_map(|players| {
        let max_tricks = 52 / players;
        (
            Just(Packet::full().cards().to_vec()).prop_shuffle(),
            Just(players),
            1..=max_tricks,
        )
    })
}
