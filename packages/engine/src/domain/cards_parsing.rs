//! Card token parsing and formatting (e.g., "AS", "TD", "2C").

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit, Trump};
use crate::domain::errors::DomainError;

impl Rank {
    pub const fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    fn from_char(ch: char) -> Option<Self> {
        Rank::ALL.into_iter().find(|r| r.to_char() == ch)
    }
}

impl Suit {
    pub const fn to_char(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    fn from_char(ch: char) -> Option<Self> {
        Suit::ALL.into_iter().find(|s| s.to_char() == ch)
    }
}

impl Card {
    /// Human-readable form with a suit symbol, e.g. `A♠`.
    pub fn pretty(self) -> String {
        format!("{}{}", self.rank.to_char(), self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.to_char(), self.suit.to_char())
    }
}

impl fmt::Display for Trump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suit() {
            Some(suit) => write!(f, "{}", suit.symbol()),
            None => f.write_str("no trump"),
        }
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || DomainError::invalid_argument(format!("Parse card: {s}"));
        let mut chars = s.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(parse_error());
        };
        let rank = Rank::from_char(rank_ch).ok_or_else(parse_error)?;
        let suit = Suit::from_char(suit_ch).ok_or_else(parse_error)?;
        Ok(Card { rank, suit })
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
