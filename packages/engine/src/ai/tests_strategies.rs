use crate::ai::{AimZero, ProbabilisticLight, Strategy, StrategyConfig};
use crate::domain::fixtures::CardFixtures;
use crate::domain::player_view::PublicView;
use crate::domain::state::{Decision, GameState};
use crate::domain::{Card, PlayerIdentity, Trump};

struct Table {
    players: Vec<PlayerIdentity>,
    state: GameState,
}

impl Table {
    /// Four players mid-game; `played` are the cards already in the trick,
    /// from seat 0 on.
    fn new(trump: Trump, played: &[&str]) -> Self {
        let players = ["Alice", "Bob", "Charlie", "Dylan"]
            .into_iter()
            .map(PlayerIdentity::new)
            .collect();
        let mut state = GameState::new(Vec::new(), trump, 5, 4);
        state.trick_plays = CardFixtures::parse_hardcoded(played)
            .into_iter()
            .enumerate()
            .map(|(seat, card)| Decision { seat, card })
            .collect();
        Self { players, state }
    }

    fn with_bids(mut self, bids: [u32; 4], won: [u32; 4]) -> Self {
        self.state.bids = Some(bids.to_vec());
        self.state.tricks_won = won.to_vec();
        self
    }

    fn view(&self) -> PublicView<'_> {
        PublicView::new(&self.players, &self.state)
    }
}

fn cards(tokens: &[&str]) -> Vec<Card> {
    CardFixtures::parse_hardcoded(tokens)
}

fn decide(strategy: &dyn Strategy, table: &Table, chosable: &[&str]) -> Card {
    let chosable = cards(chosable);
    strategy.decide(&table.view(), &chosable, &chosable).unwrap()
}

#[test]
fn aim_zero_ducks_under_highest_trump() {
    let table = Table::new(Trump::Clubs, &["AH", "5C"]);
    assert_eq!(decide(&AimZero, &table, &["2C", "3C", "9C"]), cards(&["3C"])[0]);
}

#[test]
fn aim_zero_discards_strongest_off_suit_card() {
    let table = Table::new(Trump::Clubs, &["9H"]);
    assert_eq!(decide(&AimZero, &table, &["2S", "KS", "4D", "AC"]), cards(&["KS"])[0]);
}

#[test]
fn aim_zero_follows_under_led_suit() {
    let table = Table::new(Trump::Clubs, &["9H", "JH"]);
    assert_eq!(decide(&AimZero, &table, &["TH", "3H", "QH"]), cards(&["TH"])[0]);
}

#[test]
fn aim_zero_leads_weakest_non_trump() {
    let table = Table::new(Trump::Clubs, &[]);
    assert_eq!(decide(&AimZero, &table, &["AC", "7S", "3D"]), cards(&["3D"])[0]);
    assert_eq!(decide(&AimZero, &table, &["AC", "4C"]), cards(&["4C"])[0]);
}

#[test]
fn aim_zero_bids_zero() {
    let table = Table::new(Trump::Spades, &[]);
    assert_eq!(AimZero.bid(&table.view(), &cards(&["AS", "KS"])), Ok(0));
}

#[test]
fn probabilistic_light_bids_on_strength_and_trumps() {
    let strategy = ProbabilisticLight::new(0);
    let table = Table::new(Trump::Spades, &[]);
    let hand = cards(&["AS", "KS", "QC", "2H"]);
    assert_eq!(strategy.bid(&table.view(), &hand), Ok(3));

    let weak = cards(&["2S", "3S"]);
    assert_eq!(strategy.bid(&table.view(), &weak), Ok(0));

    let no_trump = Table::new(Trump::NoTrumps, &[]);
    assert_eq!(strategy.bid(&no_trump.view(), &hand), Ok(1));
}

#[test]
fn probabilistic_light_honours_configured_threshold() {
    let table = Table::new(Trump::Spades, &[]);
    let hand = cards(&["AS", "KS", "QC", "2H"]);
    let config =
        StrategyConfig::from_json(Some(&serde_json::json!({"strength_threshold": 12})));
    let strict = ProbabilisticLight::from_config(0, &config);
    // Hand average 9 is below 12; only the Ace of trumps clears it.
    assert_eq!(strict.bid(&table.view(), &hand), Ok(1));

    let factory = crate::ai::by_name(ProbabilisticLight::NAME).unwrap();
    let built = (factory.make)(0, &config);
    assert_eq!(built.bid(&table.view(), &hand), Ok(1));
}

#[test]
fn probabilistic_light_trumps_while_below_bid() {
    let table = Table::new(Trump::Clubs, &["KH"]).with_bids([1, 0, 0, 0], [0, 0, 0, 0]);
    let strategy = ProbabilisticLight::new(0);
    assert_eq!(decide(&strategy, &table, &["4H", "2C"]), cards(&["2C"])[0]);
}

#[test]
fn probabilistic_light_takes_late_tricks_while_below_bid() {
    let table =
        Table::new(Trump::NoTrumps, &["9H", "JH", "2S"]).with_bids([0, 0, 0, 1], [0, 0, 0, 0]);
    let strategy = ProbabilisticLight::new(3);
    assert_eq!(decide(&strategy, &table, &["TH", "QH", "KH"]), cards(&["QH"])[0]);
}

#[test]
fn probabilistic_light_plays_first_card_once_bid_is_met() {
    let table = Table::new(Trump::Clubs, &["KH"]).with_bids([1, 0, 0, 0], [1, 0, 0, 0]);
    let strategy = ProbabilisticLight::new(0);
    assert_eq!(decide(&strategy, &table, &["4H", "2C"]), cards(&["4H"])[0]);
}

#[test]
fn probabilistic_light_needs_bids_only_with_a_real_choice() {
    let table = Table::new(Trump::Clubs, &["KH"]);
    let strategy = ProbabilisticLight::new(0);
    assert_eq!(decide(&strategy, &table, &["4H"]), cards(&["4H"])[0]);
    let chosable = cards(&["4H", "5H"]);
    assert!(strategy
        .decide(&table.view(), &chosable, &chosable)
        .is_err());
}
