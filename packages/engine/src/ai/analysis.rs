//! Card arithmetic shared by the built-in strategies.

use crate::domain::{Card, Suit, Trump};

/// Highest strength among `cards`, `None` when empty.
pub fn highest_strength(cards: &[Card]) -> Option<u8> {
    cards.iter().map(|c| c.strength()).max()
}

/// Strongest card of `cards` matching `pred`; the first one on ties.
pub fn strongest(cards: &[Card], pred: impl Fn(&Card) -> bool) -> Option<Card> {
    cards
        .iter()
        .copied()
        .filter(|c| pred(c))
        .fold(None, |best: Option<Card>, c| match best {
            Some(b) if b.strength() >= c.strength() => Some(b),
            _ => Some(c),
        })
}

/// Weakest card of `cards` matching `pred`; the first one on ties.
pub fn weakest(cards: &[Card], pred: impl Fn(&Card) -> bool) -> Option<Card> {
    cards
        .iter()
        .copied()
        .filter(|c| pred(c))
        .fold(None, |best: Option<Card>, c| match best {
            Some(b) if b.strength() <= c.strength() => Some(b),
            _ => Some(c),
        })
}

pub fn strongest_of_suit(cards: &[Card], suit: Suit) -> Option<Card> {
    strongest(cards, |c| c.suit == suit)
}

/// Cards of `from` stronger than `threshold`, restricted to `suit` when given.
/// Order of `from` is kept.
pub fn stronger_than(from: &[Card], suit: Option<Suit>, threshold: u8) -> Vec<Card> {
    from.iter()
        .copied()
        .filter(|c| suit.map_or(true, |s| c.suit == s) && c.strength() > threshold)
        .collect()
}

/// Chosable cards that would beat everything played so far.
///
/// If trump was played, the trumps above the highest trump. If nothing was
/// played, every chosable card. Otherwise the led-suit cards above the highest
/// card played.
pub fn stronger_cards(chosable: &[Card], played: &[Card], trump: Trump) -> Vec<Card> {
    let trumps_played: Vec<Card> = played
        .iter()
        .copied()
        .filter(|c| trump.is_trump(c.suit))
        .collect();
    if let Some(highest) = highest_strength(&trumps_played) {
        return stronger_than(chosable, trump.suit(), highest);
    }
    match (played.first(), highest_strength(played)) {
        (Some(first), Some(highest)) => stronger_than(chosable, Some(first.suit), highest),
        _ => chosable.to_vec(),
    }
}
