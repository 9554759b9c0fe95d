//! Serde support: cards travel as their two-character token ("AS"),
//! trumps as an optional suit token ("S", or null for no trump).

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Card, Suit, Trump};

impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Card>()
            .map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}

impl Serialize for Trump {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.suit() {
            Some(suit) => serializer.serialize_some(&suit.to_char().to_string()),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Trump {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = Option::<String>::deserialize(deserializer)?;
        let Some(token) = token else {
            return Ok(Trump::NoTrumps);
        };
        Suit::ALL
            .into_iter()
            .find(|s| s.to_char().to_string() == token)
            .map(Trump::from)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid trump: {token}")))
    }
}
