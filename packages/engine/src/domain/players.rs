//! Player identities: a unique name plus the strategy that plays for it.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::ai::registry::{self, StrategyFactory};
use crate::ai::StrategyConfig;
use crate::domain::errors::DomainError;

/// A player as seen by the engine. Equality and hashing use the name only.
#[derive(Clone)]
pub struct PlayerIdentity {
    pub name: String,
    pub factory: &'static StrategyFactory,
    pub config: StrategyConfig,
}

impl PlayerIdentity {
    /// Player using the default strategy.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_strategy(name, registry::default_factory())
    }

    pub fn with_strategy(name: impl Into<String>, factory: &'static StrategyFactory) -> Self {
        Self {
            name: name.into(),
            factory,
            config: StrategyConfig::default(),
        }
    }

    pub fn with_config(mut self, config: StrategyConfig) -> Self {
        self.config = config;
        self
    }

    pub fn strategy_name(&self) -> &'static str {
        self.factory.name
    }
}

impl PartialEq for PlayerIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for PlayerIdentity {}

impl Hash for PlayerIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Debug for PlayerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerIdentity")
            .field("name", &self.name)
            .field("strategy", &self.factory.name)
            .field("config", &self.config)
            .finish()
    }
}

/// A seating needs at least two players, all with distinct names.
pub fn validate_players(players: &[PlayerIdentity]) -> Result<(), DomainError> {
    if players.len() < 2 {
        return Err(DomainError::invalid_argument(format!(
            "At least 2 players are required, got {}",
            players.len()
        )));
    }
    let mut names = HashSet::with_capacity(players.len());
    for p in players {
        if !names.insert(p.name.as_str()) {
            return Err(DomainError::invalid_argument(format!(
                "Duplicate player name: {}",
                p.name
            )));
        }
    }
    Ok(())
}

/// Pair names with factories in order; names past the end of `factories`
/// get the default strategy.
pub fn players(factories: &[&'static StrategyFactory], names: &[&str]) -> Vec<PlayerIdentity> {
    let mut factories = factories.iter();
    names
        .iter()
        .map(|name| {
            let factory = factories
                .next()
                .copied()
                .unwrap_or_else(registry::default_factory);
            PlayerIdentity::with_strategy(*name, factory)
        })
        .collect()
}
