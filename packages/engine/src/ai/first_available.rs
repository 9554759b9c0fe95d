//! The simplest strategy: bid nothing, play the first legal card.

use super::trait_def::{Strategy, StrategyError};
use crate::domain::player_view::PublicView;
use crate::domain::Card;

pub struct FirstAvailable;

impl FirstAvailable {
    pub const NAME: &'static str = "FirstAvailable";
    pub const VERSION: &'static str = "1.0.0";
}

impl Strategy for FirstAvailable {
    fn decide(
        &self,
        _view: &PublicView<'_>,
        _hand: &[Card],
        chosable: &[Card],
    ) -> Result<Card, StrategyError> {
        chosable
            .first()
            .copied()
            .ok_or_else(|| StrategyError::InvalidMove("No chosable cards".into()))
    }
}
