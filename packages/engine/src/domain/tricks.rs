use crate::domain::state::Decision;
use crate::domain::{Card, Trump};

/// Cards a player may play given the card that opened the trick.
///
/// With nothing led, the whole hand. Otherwise the cards of the led suit, or
/// the whole hand when the player is void in it. Hand order is preserved.
pub fn chosable(hand: &[Card], first: Option<Card>) -> Vec<Card> {
    let Some(first) = first else {
        return hand.to_vec();
    };
    let following: Vec<Card> = hand
        .iter()
        .copied()
        .filter(|c| c.suit == first.suit)
        .collect();
    if following.is_empty() {
        hand.to_vec()
    } else {
        following
    }
}

/// Index of the winning play in `decisions`, `None` for an empty trick.
///
/// Candidates are the trump plays if any were made, otherwise the plays of the
/// led suit. The strongest candidate wins; on an exact tie (possible only with
/// merged packets) the earlier play keeps the trick.
pub fn winning_index(decisions: &[Decision], trump: Trump) -> Option<usize> {
    let lead = decisions.first()?.card.suit;
    let trumped = decisions.iter().any(|d| trump.is_trump(d.card.suit));
    let candidate = |d: &Decision| {
        if trumped {
            trump.is_trump(d.card.suit)
        } else {
            d.card.suit == lead
        }
    };

    let mut best: Option<usize> = None;
    for (i, d) in decisions.iter().enumerate() {
        if !candidate(d) {
            continue;
        }
        match best {
            Some(b) if decisions[b].card.strength() >= d.card.strength() => {}
            _ => best = Some(i),
        }
    }
    best
}

/// The winning play of a trick.
pub fn winning_decision(decisions: &[Decision], trump: Trump) -> Option<Decision> {
    winning_index(decisions, trump).map(|i| decisions[i])
}
