//! Engine error type.
//!
//! Every variant is a contract violation: the engine surfaces it immediately
//! and performs no recovery. Callers decide whether to abort the whole run.

use thiserror::Error;

use crate::ai::StrategyError;
use crate::domain::state::Seat;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Malformed construction input or call argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Operation invoked out of phase order.
    #[error("state error: {0}")]
    State(String),
    /// A strategy broke the rules (e.g. returned a card outside the chosable set).
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
    /// A strategy reported its own failure.
    #[error("strategy for seat {seat} failed: {source}")]
    Strategy {
        seat: Seat,
        #[source]
        source: StrategyError,
    },
}

impl DomainError {
    pub fn invalid_argument(detail: impl Into<String>) -> Self {
        Self::InvalidArgument(detail.into())
    }

    pub fn state(detail: impl Into<String>) -> Self {
        Self::State(detail.into())
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::InvariantViolation(detail.into())
    }

    pub fn strategy(seat: Seat, source: StrategyError) -> Self {
        Self::Strategy { seat, source }
    }
}
