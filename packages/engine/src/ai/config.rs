//! Strategy configuration handling.
//!
//! A typed view over a JSON config: standard fields are extracted, anything
//! else is kept in `custom` for the strategy that wants it.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Standard configuration for strategies.
///
/// ```json
/// {"seed": 12345, "aggression": 0.7}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// RNG seed. Strategies with random choices must be reproducible when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Fields not part of the standard schema.
    #[serde(flatten)]
    pub custom: JsonValue,
}

impl StrategyConfig {
    /// Build from optional JSON. Malformed input yields an empty config.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        config
            .and_then(|json| serde_json::from_value(json.clone()).ok())
            .unwrap_or_else(Self::empty)
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_custom(&self, key: &str) -> Option<&JsonValue> {
        self.custom.get(key)
    }

    pub fn empty() -> Self {
        Self {
            seed: None,
            custom: JsonValue::Object(serde_json::Map::new()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::empty()
        }
    }
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self::empty()
    }
}
