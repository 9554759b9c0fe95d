//! Core card-related types: Card, Rank, Suit, Color, Trump

use std::cmp::Ordering;

use crate::domain::errors::DomainError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// Declaration order follows the Unicode playing-card blocks (spades first).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub const fn color(self) -> Color {
        match self {
            Suit::Spades | Suit::Clubs => Color::Black,
            Suit::Hearts | Suit::Diamonds => Color::Red,
        }
    }
}

/// Trump for a game: one suit, or none when every card was dealt.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Trump {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
    NoTrumps,
}

impl Trump {
    /// The trump suit, if any.
    pub fn suit(self) -> Option<Suit> {
        Suit::try_from(self).ok()
    }

    /// True when `suit` is the trump suit.
    pub fn is_trump(self, suit: Suit) -> bool {
        self.suit() == Some(suit)
    }
}

impl From<Suit> for Trump {
    fn from(suit: Suit) -> Self {
        match suit {
            Suit::Spades => Trump::Spades,
            Suit::Hearts => Trump::Hearts,
            Suit::Diamonds => Trump::Diamonds,
            Suit::Clubs => Trump::Clubs,
        }
    }
}

impl From<Option<Suit>> for Trump {
    fn from(suit: Option<Suit>) -> Self {
        suit.map_or(Trump::NoTrumps, Trump::from)
    }
}

impl TryFrom<Trump> for Suit {
    type Error = DomainError;

    fn try_from(trump: Trump) -> Result<Self, Self::Error> {
        match trump {
            Trump::Spades => Ok(Suit::Spades),
            Trump::Hearts => Ok(Suit::Hearts),
            Trump::Diamonds => Ok(Suit::Diamonds),
            Trump::Clubs => Ok(Suit::Clubs),
            Trump::NoTrumps => Err(DomainError::invalid_argument(
                "Cannot convert NoTrumps to Suit",
            )),
        }
    }
}

/// Ranks in strength order: the derived `Ord` is the trick-taking order,
/// so Ace compares above King.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks, weakest first.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Enumeration order used when building a packet (Ace first, as printed on the cards).
    pub const DECK_ORDER: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Strength used for trick comparisons: Two = 1 up to King = 12, Ace = 13.
    pub const fn strength(self) -> u8 {
        match self {
            Rank::Two => 1,
            Rank::Three => 2,
            Rank::Four => 3,
            Rank::Five => 4,
            Rank::Six => 5,
            Rank::Seven => 6,
            Rank::Eight => 7,
            Rank::Nine => 8,
            Rank::Ten => 9,
            Rank::Jack => 10,
            Rank::Queen => 11,
            Rank::King => 12,
            Rank::Ace => 13,
        }
    }
}

/// Compare two ranks by strength: `Greater` means `a` wins over `b`.
pub fn compare_strength(a: Rank, b: Rank) -> Ordering {
    a.strength().cmp(&b.strength())
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub const fn strength(self) -> u8 {
        self.rank.strength()
    }

    /// Same suit as `other`, and strictly weaker.
    pub fn weaker_in_same_suit(self, other: Card) -> bool {
        self.suit == other.suit && self.strength() < other.strength()
    }
}

// Note: Ord on Card is only for stable sorting: suit order S<H<D<C then rank strength.
// Do not use for trick resolution, which depends on lead and trump.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.suit.cmp(&other.suit) {
            Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
