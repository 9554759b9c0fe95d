//! The game engine: deal, bids, tricks, scoring.

use serde::Serialize;
use tracing::{debug, info};

use crate::ai::Strategy;
use crate::domain::errors::DomainError;
use crate::domain::player_view::PublicView;
use crate::domain::players::{validate_players, PlayerIdentity};
use crate::domain::scoring::apply_final_scores;
use crate::domain::state::{play_order, Decision, GameState, Phase, Seat};
use crate::domain::tricks::{chosable, winning_decision};
use crate::domain::{Card, Trump};

/// Outcome of one trick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrickResult {
    /// 0-based index of the trick just played.
    pub index: usize,
    /// Every play, in play order.
    pub decisions: Vec<Decision>,
    pub winner: Decision,
}

/// One game of Rikiki.
///
/// Phases only move forward: `New` → `BidsDone` → `Deciding` (once per trick)
/// → `Complete`. Once a strategy fails or breaks the rules the game is
/// aborted and every further operation fails with [`DomainError::State`].
pub struct Game {
    players: Vec<PlayerIdentity>,
    strategies: Vec<Box<dyn Strategy>>,
    hands: Vec<Vec<Card>>,
    state: GameState,
    aborted: bool,
}

impl Game {
    /// Validate the inputs, deal the hands and pick the trump.
    ///
    /// Card `i` goes to seat `i % players` for the first `players × trick_count`
    /// cards. The suit of the next card, if there is one, is trump.
    pub fn new(
        players: Vec<PlayerIdentity>,
        cards: Vec<Card>,
        trick_count: usize,
    ) -> Result<Self, DomainError> {
        validate_players(&players)?;
        let player_count = players.len();
        if cards.len() < player_count {
            return Err(DomainError::invalid_argument(format!(
                "Deck of {} cards is too small for {player_count} players",
                cards.len()
            )));
        }
        let max_tricks = cards.len() / player_count;
        if trick_count == 0 || trick_count > max_tricks {
            return Err(DomainError::invalid_argument(format!(
                "Trick count {trick_count} must be between 1 and {max_tricks}"
            )));
        }

        let dealt = player_count * trick_count;
        let mut hands: Vec<Vec<Card>> = vec![Vec::with_capacity(trick_count); player_count];
        for (i, card) in cards[..dealt].iter().enumerate() {
            hands[i % player_count].push(*card);
        }
        let trump = Trump::from(cards.get(dealt).map(|c| c.suit));

        let strategies = players
            .iter()
            .enumerate()
            .map(|(seat, p)| (p.factory.make)(seat, &p.config))
            .collect();

        debug!(
            players = player_count,
            trick_count,
            cards = cards.len(),
            trump = %trump,
            "Game dealt"
        );

        Ok(Self {
            players,
            strategies,
            hands,
            state: GameState::new(cards, trump, trick_count, player_count),
            aborted: false,
        })
    }

    pub fn view(&self) -> PublicView<'_> {
        PublicView::new(&self.players, &self.state)
    }

    pub fn players(&self) -> &[PlayerIdentity] {
        &self.players
    }

    /// Current hand of a seat, for printing and debugging.
    pub fn hand(&self, seat: Seat) -> Option<&[Card]> {
        self.hands.get(seat).map(Vec::as_slice)
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn trump(&self) -> Trump {
        self.state.trump
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    /// Ask every player for a bid, in seating order.
    pub fn run_bids(&mut self) -> Result<Vec<u32>, DomainError> {
        self.ensure_live()?;
        if self.state.phase != Phase::New {
            return Err(DomainError::state(format!(
                "Bids can only be collected once, phase is {:?}",
                self.state.phase
            )));
        }

        let mut bids = Vec::with_capacity(self.players.len());
        for seat in 0..self.players.len() {
            let view = PublicView::new(&self.players, &self.state);
            let bid = match self.strategies[seat].bid(&view, &self.hands[seat]) {
                Ok(bid) => bid,
                Err(e) => {
                    self.aborted = true;
                    return Err(DomainError::strategy(seat, e));
                }
            };
            info!(player = %self.players[seat].name, bid, "Bid");
            bids.push(bid);
        }

        self.state.bids = Some(bids.clone());
        self.state.phase = Phase::BidsDone;
        Ok(bids)
    }

    /// Play one trick: every player decides in turn from the leader.
    pub fn run_trick(&mut self) -> Result<TrickResult, DomainError> {
        self.ensure_live()?;
        if !matches!(self.state.phase, Phase::BidsDone | Phase::Deciding) {
            return Err(DomainError::state(format!(
                "Cannot play a trick in phase {:?}",
                self.state.phase
            )));
        }
        if self.state.trick_index >= self.state.trick_count {
            return Err(DomainError::state(format!(
                "All {} tricks already played",
                self.state.trick_count
            )));
        }

        let result = self.play_trick();
        if result.is_err() {
            self.aborted = true;
        }
        result
    }

    /// Bid if needed, then play every remaining trick.
    pub fn run_to_completion(&mut self) -> Result<Vec<TrickResult>, DomainError> {
        if self.state.phase == Phase::New {
            self.run_bids()?;
        }
        let mut tricks = Vec::with_capacity(self.state.trick_count - self.state.trick_index);
        while self.state.phase != Phase::Complete {
            tricks.push(self.run_trick()?);
        }
        Ok(tricks)
    }

    fn ensure_live(&self) -> Result<(), DomainError> {
        if self.aborted {
            Err(DomainError::state("Game was aborted after an earlier failure"))
        } else {
            Ok(())
        }
    }

    fn play_trick(&mut self) -> Result<TrickResult, DomainError> {
        let player_count = self.players.len();
        self.state.phase = Phase::Deciding;
        self.state.trick_plays.clear();

        for seat in play_order(self.state.leader, player_count) {
            let card = self.decide(seat)?;
            let hand = &mut self.hands[seat];
            let pos = hand.iter().position(|&c| c == card).ok_or_else(|| {
                DomainError::invariant(format!("{card} is not in the hand of seat {seat}"))
            })?;
            hand.remove(pos);
            debug!(
                trick = self.state.trick_index,
                player = %self.players[seat].name,
                card = %card,
                "Decision"
            );
            self.state.trick_plays.push(Decision { seat, card });
        }

        let winner = winning_decision(&self.state.trick_plays, self.state.trump)
            .ok_or_else(|| DomainError::invariant("Trick ended without a winner"))?;
        self.state.tricks_won[winner.seat] += 1;
        self.state.leader = winner.seat;
        let index = self.state.trick_index;
        self.state.trick_index += 1;
        debug!(
            trick = index,
            winner = %self.players[winner.seat].name,
            card = %winner.card,
            "Trick won"
        );

        if self.state.trick_index == self.state.trick_count {
            apply_final_scores(&mut self.state)?;
            info!(scores = ?self.state.scores, "Game complete");
        }

        Ok(TrickResult {
            index,
            decisions: self.state.trick_plays.clone(),
            winner,
        })
    }

    fn decide(&self, seat: Seat) -> Result<Card, DomainError> {
        let view = PublicView::new(&self.players, &self.state);
        let hand = &self.hands[seat];
        let options = chosable(hand, view.first_card_of_trick());
        let card = self.strategies[seat]
            .decide(&view, hand, &options)
            .map_err(|e| DomainError::strategy(seat, e))?;
        if !options.contains(&card) {
            return Err(DomainError::invariant(format!(
                "{} played {card}, which is not among the chosable cards",
                self.players[seat].name
            )));
        }
        Ok(card)
    }
}
