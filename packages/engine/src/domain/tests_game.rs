use crate::ai::registry::{AIM_ZERO, FIRST_AVAILABLE, PROBABILISTIC_LIGHT};
use crate::ai::{Strategy, StrategyConfig, StrategyError, StrategyFactory};
use crate::domain::fixtures::CardFixtures;
use crate::domain::player_view::PublicView;
use crate::domain::state::Seat;
use crate::domain::{
    players, shuffle_seeded, Card, DomainError, Game, Packet, Phase, PlayerIdentity, Rank, Suit,
    Trump,
};

fn alice_and_bob() -> Vec<PlayerIdentity> {
    players(&[&FIRST_AVAILABLE, &FIRST_AVAILABLE], &["Alice", "Bob"])
}

fn fixture_game() -> Game {
    let cards = CardFixtures::five_card_packet().cards().to_vec();
    Game::new(alice_and_bob(), cards, 2).unwrap()
}

fn card(token: &str) -> Card {
    token.parse().unwrap()
}

struct Cheater;

impl Strategy for Cheater {
    fn decide(
        &self,
        _view: &PublicView<'_>,
        _hand: &[Card],
        _chosable: &[Card],
    ) -> Result<Card, StrategyError> {
        Ok(Card::new(Rank::Two, Suit::Hearts))
    }
}

struct Broken;

impl Strategy for Broken {
    fn bid(&self, _view: &PublicView<'_>, _hand: &[Card]) -> Result<u32, StrategyError> {
        Err(StrategyError::Internal("out of ideas".into()))
    }

    fn decide(
        &self,
        _view: &PublicView<'_>,
        _hand: &[Card],
        chosable: &[Card],
    ) -> Result<Card, StrategyError> {
        Ok(chosable[0])
    }
}

fn make_cheater(_seat: Seat, _config: &StrategyConfig) -> Box<dyn Strategy> {
    Box::new(Cheater)
}

fn make_broken(_seat: Seat, _config: &StrategyConfig) -> Box<dyn Strategy> {
    Box::new(Broken)
}

static CHEATER: StrategyFactory = StrategyFactory {
    name: "Cheater",
    version: "0.0.0",
    make: make_cheater,
};

static BROKEN: StrategyFactory = StrategyFactory {
    name: "Broken",
    version: "0.0.0",
    make: make_broken,
};

#[test]
fn fixture_deal_and_trump() {
    let game = fixture_game();
    assert_eq!(game.hand(0).unwrap(), &[card("AS"), card("QH")]);
    assert_eq!(game.hand(1).unwrap(), &[card("KC"), card("TD")]);
    assert_eq!(game.trump(), Trump::Clubs);
    assert_eq!(game.phase(), Phase::New);
    assert_eq!(game.view().card_count(), 5);
    assert!(game.hand(2).is_none());
}

#[test]
fn fixture_full_game_with_first_available() {
    let mut game = fixture_game();
    assert_eq!(game.run_bids().unwrap(), vec![0, 0]);
    assert_eq!(game.phase(), Phase::BidsDone);

    let first = game.run_trick().unwrap();
    assert_eq!(first.index, 0);
    assert_eq!(
        first
            .decisions
            .iter()
            .map(|d| (d.seat, d.card))
            .collect::<Vec<_>>(),
        vec![(0, card("AS")), (1, card("KC"))]
    );
    assert_eq!(first.winner.seat, 1);
    assert_eq!(game.phase(), Phase::Deciding);
    assert_eq!(game.view().leader(), 1);

    let second = game.run_trick().unwrap();
    assert_eq!(second.decisions[0].seat, 1, "winner leads next trick");
    assert_eq!(second.decisions[0].card, card("TD"));
    assert_eq!(second.decisions[1].card, card("QH"));
    assert_eq!(second.winner.seat, 1);

    let view = game.view();
    assert_eq!(view.phase(), Phase::Complete);
    assert_eq!(view.tricks_won(), &[0, 2]);
    assert_eq!(view.scores(), &[10, -4]);
    assert_eq!(view.current_trick_index(), 2);
    assert!(game.hand(0).unwrap().is_empty());
}

#[test]
fn run_to_completion_matches_step_by_step() {
    let mut stepped = fixture_game();
    stepped.run_bids().unwrap();
    let a = vec![stepped.run_trick().unwrap(), stepped.run_trick().unwrap()];

    let mut whole = fixture_game();
    let b = whole.run_to_completion().unwrap();
    assert_eq!(a, b);
    assert_eq!(stepped.view().scores(), whole.view().scores());
}

#[test]
fn out_of_order_calls_fail_with_state() {
    let mut game = fixture_game();
    assert!(matches!(game.run_trick(), Err(DomainError::State(_))));
    assert!(matches!(game.view().bids(), Err(DomainError::State(_))));

    game.run_bids().unwrap();
    assert!(matches!(game.run_bids(), Err(DomainError::State(_))));

    game.run_trick().unwrap();
    game.run_trick().unwrap();
    assert!(matches!(game.run_trick(), Err(DomainError::State(_))));
    assert!(!game.is_aborted());
}

#[test]
fn construction_boundaries() {
    let cards = Packet::full().cards().to_vec();
    assert!(Game::new(alice_and_bob(), cards.clone(), 26).is_ok());
    assert!(matches!(
        Game::new(alice_and_bob(), cards.clone(), 27),
        Err(DomainError::InvalidArgument(_))
    ));
    assert!(matches!(
        Game::new(alice_and_bob(), cards.clone(), 0),
        Err(DomainError::InvalidArgument(_))
    ));
    assert!(matches!(
        Game::new(vec![PlayerIdentity::new("Solo")], cards, 1),
        Err(DomainError::InvalidArgument(_))
    ));
    assert!(matches!(
        Game::new(alice_and_bob(), vec![card("AS")], 1),
        Err(DomainError::InvalidArgument(_))
    ));
}

#[test]
fn every_card_dealt_means_no_trump() {
    let cards = Packet::full().cards().to_vec();
    let game = Game::new(alice_and_bob(), cards, 26).unwrap();
    assert_eq!(game.trump(), Trump::NoTrumps);
    assert_eq!(game.hand(0).unwrap().len(), 26);
}

#[test]
fn duplicate_names_are_rejected_even_with_bad_trick_count() {
    let names = players(&[&AIM_ZERO, &PROBABILISTIC_LIGHT], &["Alice", "Alice"]);
    let cards = Packet::full().cards().to_vec();
    assert!(matches!(
        Game::new(names.clone(), cards, 1),
        Err(DomainError::InvalidArgument(_))
    ));
    assert!(matches!(
        Game::new(names, vec![], 99),
        Err(DomainError::InvalidArgument(_))
    ));
}

#[test]
fn illegal_card_is_an_invariant_violation_and_aborts() {
    let roster = vec![
        PlayerIdentity::with_strategy("Alice", &CHEATER),
        PlayerIdentity::new("Bob"),
    ];
    let cards = CardFixtures::five_card_packet().cards().to_vec();
    let mut game = Game::new(roster, cards, 2).unwrap();
    game.run_bids().unwrap();
    assert!(matches!(
        game.run_trick(),
        Err(DomainError::InvariantViolation(_))
    ));
    assert!(game.is_aborted());
    assert!(matches!(game.run_trick(), Err(DomainError::State(_))));
}

#[test]
fn strategy_failure_surfaces_with_its_seat() {
    let roster = vec![
        PlayerIdentity::new("Alice"),
        PlayerIdentity::with_strategy("Bob", &BROKEN),
    ];
    let cards = shuffle_seeded(3, &[Packet::full()]).unwrap();
    let mut game = Game::new(roster, cards, 5).unwrap();
    match game.run_to_completion() {
        Err(DomainError::Strategy { seat, source }) => {
            assert_eq!(seat, 1);
            assert_eq!(source, StrategyError::Internal("out of ideas".into()));
        }
        other => panic!("expected strategy error, got {other:?}"),
    }
    assert!(game.is_aborted());
}

#[test]
fn view_exposes_trick_progress_to_strategies() {
    let mut game = fixture_game();
    game.run_bids().unwrap();
    let view = game.view();
    assert_eq!(view.bids().unwrap(), &[0, 0]);
    assert_eq!(view.bid_of(1), Ok(0));
    assert!(view.bid_of(5).is_err());
    assert_eq!(view.first_card_of_trick(), None);
    assert_eq!(view.trick_completion(), 0.0);
    assert_eq!(view.player(1).map(|p| p.name.as_str()), Some("Bob"));
    assert_eq!(view.player_count(), 2);
}
