//! Random strategy: uniformly random bid and legal card.

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{Strategy, StrategyError};
use crate::domain::player_view::PublicView;
use crate::domain::Card;

/// Plays a random chosable card and bids between 0 and its hand size.
///
/// The RNG sits behind a `Mutex` because [`Strategy`] methods take `&self`.
/// With a seed the sequence of choices is reproducible.
pub struct RandomPlayer {
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn lock_rng(&self) -> Result<std::sync::MutexGuard<'_, StdRng>, StrategyError> {
        self.rng
            .lock()
            .map_err(|e| StrategyError::Internal(format!("RNG lock poisoned: {e}")))
    }
}

impl Strategy for RandomPlayer {
    fn bid(&self, _view: &PublicView<'_>, hand: &[Card]) -> Result<u32, StrategyError> {
        let max = u32::try_from(hand.len())
            .map_err(|_| StrategyError::Internal("Hand too large to bid on".into()))?;
        let mut rng = self.lock_rng()?;
        Ok(rng.random_range(0..=max))
    }

    fn decide(
        &self,
        _view: &PublicView<'_>,
        _hand: &[Card],
        chosable: &[Card],
    ) -> Result<Card, StrategyError> {
        if chosable.is_empty() {
            return Err(StrategyError::InvalidMove("No chosable cards".into()));
        }
        let mut rng = self.lock_rng()?;
        chosable
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| StrategyError::Internal("Failed to choose random card".into()))
    }
}
