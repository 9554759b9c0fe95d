//! Strategy bidding on hand strength and chasing its bid with trumps.

use super::analysis::stronger_cards;
use super::config::StrategyConfig;
use super::trait_def::{Strategy, StrategyError};
use crate::domain::player_view::PublicView;
use crate::domain::state::Seat;
use crate::domain::{Card, Rank};

/// Integer mean of `strengths`, truncated; 0 for no input.
fn average_strength(strengths: impl Iterator<Item = u8>) -> u32 {
    let (sum, count) = strengths.fold((0u32, 0u32), |(s, n), x| (s + u32::from(x), n + 1));
    if count == 0 {
        0
    } else {
        sum / count
    }
}

/// Mean rank strength over all thirteen ranks.
pub fn strength_threshold() -> u32 {
    average_strength(Rank::ALL.iter().map(|r| r.strength()))
}

/// Bids one trick for a hand stronger than average, plus one per strong
/// trump. While below its bid it plays trumps, and past the middle of a trick
/// it tries to take it; otherwise it plays its first legal card.
///
/// The strength threshold defaults to [`strength_threshold`] and can be set
/// with the custom config field `"strength_threshold"`.
pub struct ProbabilisticLight {
    seat: Seat,
    threshold: u32,
}

impl ProbabilisticLight {
    pub const NAME: &'static str = "ProbabilisticLight";
    pub const VERSION: &'static str = "1.0.0";
    pub const THRESHOLD_KEY: &'static str = "strength_threshold";

    pub fn new(seat: Seat) -> Self {
        Self::with_threshold(seat, strength_threshold())
    }

    pub fn with_threshold(seat: Seat, threshold: u32) -> Self {
        Self { seat, threshold }
    }

    /// Threshold from the config when it holds a valid `u32`, default otherwise.
    pub fn from_config(seat: Seat, config: &StrategyConfig) -> Self {
        let threshold = config
            .get_custom(Self::THRESHOLD_KEY)
            .and_then(|v| v.as_u64())
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or_else(strength_threshold);
        Self::with_threshold(seat, threshold)
    }
}

impl Strategy for ProbabilisticLight {
    fn bid(&self, view: &PublicView<'_>, hand: &[Card]) -> Result<u32, StrategyError> {
        let threshold = self.threshold;
        let mut bid = 0;
        if average_strength(hand.iter().map(|c| c.strength())) > threshold {
            bid += 1;
        }
        if let Some(trump) = view.trump().suit() {
            bid += hand
                .iter()
                .filter(|c| c.suit == trump && u32::from(c.strength()) > threshold)
                .count() as u32;
        }
        Ok(bid)
    }

    fn decide(
        &self,
        view: &PublicView<'_>,
        _hand: &[Card],
        chosable: &[Card],
    ) -> Result<Card, StrategyError> {
        if chosable.len() > 1 {
            let bid = view
                .bid_of(self.seat)
                .map_err(|e| StrategyError::Internal(e.to_string()))?;
            if view.tricks_won_by(self.seat) < bid {
                let trump = view.trump();
                if let Some(card) = chosable.iter().copied().find(|c| trump.is_trump(c.suit)) {
                    return Ok(card);
                }
                if view.trick_completion() > 0.5 {
                    let played = view.cards_played_in_trick();
                    if let Some(card) = stronger_cards(chosable, &played, trump).first() {
                        return Ok(*card);
                    }
                }
            }
        }
        chosable
            .first()
            .copied()
            .ok_or_else(|| StrategyError::InvalidMove("No chosable cards".into()))
    }
}
