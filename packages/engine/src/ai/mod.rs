//! Strategies: pluggable decision policies for bids and card play.
//!
//! - `Strategy` trait and `StrategyError`
//! - Built-in policies: FirstAvailable, AimZero, ProbabilisticLight, RandomPlayer
//! - Static registry of factories, looked up by name

mod aim_zero;
pub mod analysis;
mod config;
mod first_available;
mod probabilistic_light;
mod random;
pub mod registry;
mod trait_def;

pub use aim_zero::AimZero;
pub use config::StrategyConfig;
pub use first_available::FirstAvailable;
pub use probabilistic_light::ProbabilisticLight;
pub use random::RandomPlayer;
pub use registry::{by_name, registered_strategies, StrategyFactory};
pub use trait_def::{Strategy, StrategyError};

#[cfg(test)]
mod tests_strategies;
