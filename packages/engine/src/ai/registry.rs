//! How to register a strategy
//!
//! 1) Implement `Strategy` for your type in its module.
//! 2) Add a `StrategyFactory` static with a stable `name` and `version`, and
//!    list it in `STRATEGY_FACTORIES`.
//! 3) Keep ordering stable; avoid side effects in constructors.
//! 4) Determinism: same seed ⇒ same behavior (where applicable).

use super::config::StrategyConfig;
use super::trait_def::Strategy;
use super::{AimZero, FirstAvailable, ProbabilisticLight, RandomPlayer};
use crate::domain::state::Seat;

/// Named constructor for a strategy, bound to a seat at game construction.
pub struct StrategyFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(seat: Seat, config: &StrategyConfig) -> Box<dyn Strategy>,
}

impl std::fmt::Debug for StrategyFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyFactory")
            .field("name", &self.name)
            .field("version", &self.version)
            .finish()
    }
}

pub static FIRST_AVAILABLE: StrategyFactory = StrategyFactory {
    name: FirstAvailable::NAME,
    version: FirstAvailable::VERSION,
    make: make_first_available,
};

pub static AIM_ZERO: StrategyFactory = StrategyFactory {
    name: AimZero::NAME,
    version: AimZero::VERSION,
    make: make_aim_zero,
};

pub static PROBABILISTIC_LIGHT: StrategyFactory = StrategyFactory {
    name: ProbabilisticLight::NAME,
    version: ProbabilisticLight::VERSION,
    make: make_probabilistic_light,
};

pub static RANDOM: StrategyFactory = StrategyFactory {
    name: RandomPlayer::NAME,
    version: RandomPlayer::VERSION,
    make: make_random_player,
};

static STRATEGY_FACTORIES: [&StrategyFactory; 4] =
    [&FIRST_AVAILABLE, &AIM_ZERO, &PROBABILISTIC_LIGHT, &RANDOM];

/// Returns the statically registered strategy factories.
pub fn registered_strategies() -> &'static [&'static StrategyFactory] {
    &STRATEGY_FACTORIES
}

/// Finds a registered strategy factory by its name.
pub fn by_name(name: &str) -> Option<&'static StrategyFactory> {
    registered_strategies()
        .iter()
        .copied()
        .find(|factory| factory.name == name)
}

/// Strategy given to players nobody assigned one to.
pub fn default_factory() -> &'static StrategyFactory {
    &FIRST_AVAILABLE
}

fn make_first_available(_seat: Seat, _config: &StrategyConfig) -> Box<dyn Strategy> {
    Box::new(FirstAvailable)
}

fn make_aim_zero(_seat: Seat, _config: &StrategyConfig) -> Box<dyn Strategy> {
    Box::new(AimZero)
}

fn make_probabilistic_light(seat: Seat, config: &StrategyConfig) -> Box<dyn Strategy> {
    Box::new(ProbabilisticLight::from_config(seat, config))
}

fn make_random_player(_seat: Seat, config: &StrategyConfig) -> Box<dyn Strategy> {
    Box::new(RandomPlayer::new(config.seed()))
}
