//! Domain layer: cards, game state and the engine that drives a game.

pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod deck;
pub mod errors;
pub mod fixtures;
pub mod game;
pub mod player_view;
pub mod players;
pub mod scoring;
pub mod state;
pub mod tricks;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_game;
#[cfg(test)]
mod tests_props_game;

// Re-exports for ergonomics
pub use cards_parsing::try_parse_cards;
pub use cards_types::{compare_strength, Card, Color, Rank, Suit, Trump};
pub use deck::{shuffle, shuffle_from_entropy, shuffle_seeded, Packet};
pub use errors::DomainError;
pub use game::{Game, TrickResult};
pub use player_view::PublicView;
pub use players::{players, validate_players, PlayerIdentity};
pub use scoring::score;
pub use state::{Decision, Phase, Seat};
