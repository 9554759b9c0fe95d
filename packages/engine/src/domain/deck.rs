//! Packets of cards and deterministic shuffling.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::errors::DomainError;
use crate::domain::{Card, Rank, Suit};

/// Predicate deciding whether a (rank, suit) combination goes into a packet.
pub type Selector<'a> = &'a dyn Fn(Rank, Suit) -> bool;

/// An immutable, ordered collection of distinct cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    cards: Vec<Card>,
}

impl Packet {
    /// The standard 52-card packet, suits S H D C, ranks Ace first.
    pub fn full() -> Self {
        Self::with_selectors(&[])
    }

    /// Build a packet from selectors, evaluated in the order given.
    ///
    /// Each selector enumerates the whole rank × suit product, so the order of
    /// the resulting cards follows selector order first. A card matched by
    /// several selectors appears once, at its first position. With no
    /// selectors every card is included.
    pub fn with_selectors(selectors: &[Selector<'_>]) -> Self {
        let all: [Selector<'_>; 1] = [&|_: Rank, _: Suit| true];
        let selectors = if selectors.is_empty() {
            &all[..]
        } else {
            selectors
        };
        let mut cards: Vec<Card> = Vec::new();
        for selector in selectors {
            for suit in Suit::ALL {
                for rank in Rank::DECK_ORDER {
                    let card = Card { rank, suit };
                    if selector(rank, suit) && !cards.contains(&card) {
                        cards.push(card);
                    }
                }
            }
        }
        Self { cards }
    }

    /// Packet containing exactly the given cards, in order, without duplicates.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut unique: Vec<Card> = Vec::new();
        for card in cards {
            if !unique.contains(&card) {
                unique.push(card);
            }
        }
        Self { cards: unique }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Packet {
    fn default() -> Self {
        Self::full()
    }
}

/// Concatenate the packets and shuffle the result with `rng` (Fisher-Yates).
///
/// Cards are not deduplicated across packets: merging two full packets yields
/// 104 cards with every card present twice.
pub fn shuffle<R: Rng + ?Sized>(
    rng: &mut R,
    packets: &[Packet],
) -> Result<Vec<Card>, DomainError> {
    if packets.is_empty() {
        return Err(DomainError::invalid_argument(
            "At least one packet is required to shuffle",
        ));
    }
    let mut cards: Vec<Card> = packets
        .iter()
        .flat_map(|p| p.cards().iter().copied())
        .collect();
    cards.shuffle(rng);
    Ok(cards)
}

/// Shuffle with a portable seeded generator: same seed, same permutation.
pub fn shuffle_seeded(seed: u64, packets: &[Packet]) -> Result<Vec<Card>, DomainError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    shuffle(&mut rng, packets)
}

/// Shuffle with the thread-local entropy-seeded generator.
pub fn shuffle_from_entropy(packets: &[Packet]) -> Result<Vec<Card>, DomainError> {
    let mut rng = rand::rng();
    shuffle(&mut rng, packets)
}
