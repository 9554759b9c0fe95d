#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod domain;
pub mod telemetry;

// Re-exports for public API
pub use ai::{Strategy, StrategyConfig, StrategyError, StrategyFactory};
pub use domain::{
    Card, DomainError, Game, Packet, Phase, PlayerIdentity, PublicView, Rank, Suit, Trump,
};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    rikiki_test_support::logging::init();
}
