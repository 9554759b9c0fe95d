//! Strategy trait definition.

use thiserror::Error;

use crate::domain::player_view::PublicView;
use crate::domain::Card;

/// Errors a strategy may report instead of a decision.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    /// The strategy hit an internal failure (poisoned lock, broken state).
    #[error("strategy internal error: {0}")]
    Internal(String),
    /// The strategy could not produce a legal move.
    #[error("strategy invalid move: {0}")]
    InvalidMove(String),
}

/// Decision policy for one player.
///
/// A strategy is created once per player and game by its
/// [`StrategyFactory`](super::StrategyFactory), knowing its own seat. On
/// every call it receives the public view of the game and its own hand; it
/// never sees other hands.
pub trait Strategy: Send + Sync {
    /// Number of tricks this player expects to win. Called once per game,
    /// before any trick.
    fn bid(&self, view: &PublicView<'_>, hand: &[Card]) -> Result<u32, StrategyError> {
        let _ = (view, hand);
        Ok(0)
    }

    /// Card to play in the current trick.
    ///
    /// `chosable` is the non-empty legal subset of `hand`, in hand order. The
    /// engine rejects any card outside it.
    fn decide(
        &self,
        view: &PublicView<'_>,
        hand: &[Card],
        chosable: &[Card],
    ) -> Result<Card, StrategyError>;
}
