use crate::domain::deck::Packet;
use crate::domain::Card;

/// Helpers for hardcoded card data in tests and demos.
pub struct CardFixtures;

impl CardFixtures {
    /// Parse hardcoded card tokens into Card instances.
    ///
    /// Only for tokens known to be valid, such as literals in fixtures.
    pub fn parse_hardcoded(tokens: &[&str]) -> Vec<Card> {
        tokens
            .iter()
            .map(|s| {
                #[allow(clippy::expect_used)]
                s.parse::<Card>().expect("hardcoded valid card token")
            })
            .collect()
    }

    /// Five cards in a fixed order: A♠ K♣ Q♥ T♦ 2♣.
    ///
    /// Dealt to two players for two tricks this gives Alice [A♠, Q♥],
    /// Bob [K♣, T♦] and clubs as trump.
    pub fn five_card_packet() -> Packet {
        Packet::from_cards(Self::parse_hardcoded(&["AS", "KC", "QH", "TD", "2C"]))
    }
}
