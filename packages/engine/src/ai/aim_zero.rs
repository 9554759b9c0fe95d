//! Strategy that tries to win no trick at all.

use super::analysis::{strongest, strongest_of_suit, weakest};
use super::trait_def::{Strategy, StrategyError};
use crate::domain::player_view::PublicView;
use crate::domain::Card;

/// Bids zero, then ducks: it plays under the strongest trump or led-suit card
/// already on the table, discards off-suit when it can, and otherwise gets
/// rid of its weakest card.
pub struct AimZero;

impl AimZero {
    pub const NAME: &'static str = "AimZero";
    pub const VERSION: &'static str = "1.0.0";
}

impl Strategy for AimZero {
    fn decide(
        &self,
        view: &PublicView<'_>,
        _hand: &[Card],
        chosable: &[Card],
    ) -> Result<Card, StrategyError> {
        let trump = view.trump();
        let played = view.cards_played_in_trick();

        // Duck under the strongest trump on the table.
        if let Some(top_trump) = trump.suit().and_then(|s| strongest_of_suit(&played, s)) {
            if let Some(card) = strongest(chosable, |c| c.weaker_in_same_suit(top_trump)) {
                return Ok(card);
            }
        }

        if let Some(first) = view.first_card_of_trick() {
            // Discard the strongest card that can neither follow nor trump.
            if let Some(card) =
                strongest(chosable, |c| c.suit != first.suit && !trump.is_trump(c.suit))
            {
                return Ok(card);
            }
            // Follow under the strongest led-suit card.
            if let Some(top_led) = strongest_of_suit(&played, first.suit) {
                if let Some(card) = chosable
                    .iter()
                    .copied()
                    .find(|c| c.weaker_in_same_suit(top_led))
                {
                    return Ok(card);
                }
            }
        }

        weakest(chosable, |c| !trump.is_trump(c.suit))
            .or_else(|| weakest(chosable, |_| true))
            .ok_or_else(|| StrategyError::InvalidMove("No chosable cards".into()))
    }
}
