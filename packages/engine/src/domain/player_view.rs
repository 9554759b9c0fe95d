//! Read-only projection of game state shared by every strategy and printer.
//!
//! The simulation is open-information: apart from hands, everything the engine
//! tracks is visible here. Hands are passed to strategies separately, and
//! only their own.

use crate::domain::errors::DomainError;
use crate::domain::players::PlayerIdentity;
use crate::domain::state::{Decision, GameState, Phase, Seat};
use crate::domain::{Card, Trump};

/// Borrowed view of a running game.
///
/// A view cannot outlive the borrow of the game it came from, so it never
/// observes the engine mid-update.
#[derive(Debug, Clone, Copy)]
pub struct PublicView<'a> {
    players: &'a [PlayerIdentity],
    state: &'a GameState,
}

impl<'a> PublicView<'a> {
    pub(crate) fn new(players: &'a [PlayerIdentity], state: &'a GameState) -> Self {
        Self { players, state }
    }

    /// Players in seating order.
    pub fn players(&self) -> &'a [PlayerIdentity] {
        self.players
    }

    pub fn player(&self, seat: Seat) -> Option<&'a PlayerIdentity> {
        self.players.get(seat)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn trump(&self) -> Trump {
        self.state.trump
    }

    pub fn trick_count(&self) -> usize {
        self.state.trick_count
    }

    /// 0-based; equals [`Self::trick_count`] once the game is complete.
    pub fn current_trick_index(&self) -> usize {
        self.state.trick_index
    }

    /// Every card handed to the engine, including the undealt ones.
    pub fn card_count(&self) -> usize {
        self.state.cards.len()
    }

    /// Plays made so far in the current trick, in play order.
    pub fn decisions_for_current_trick(&self) -> &'a [Decision] {
        &self.state.trick_plays
    }

    pub fn cards_played_in_trick(&self) -> Vec<Card> {
        self.state.trick_plays.iter().map(|d| d.card).collect()
    }

    /// Card that opened the current trick, `None` if nobody has played yet.
    pub fn first_card_of_trick(&self) -> Option<Card> {
        self.state.trick_plays.first().map(|d| d.card)
    }

    /// Seat leading the current trick.
    pub fn leader(&self) -> Seat {
        self.state.leader
    }

    /// Bids per seat. Fails until bidding is done.
    pub fn bids(&self) -> Result<&'a [u32], DomainError> {
        self.state
            .bids
            .as_deref()
            .ok_or_else(|| DomainError::state("Bids are not available before bidding is done"))
    }

    pub fn bid_of(&self, seat: Seat) -> Result<u32, DomainError> {
        self.bids()?
            .get(seat)
            .copied()
            .ok_or_else(|| DomainError::invalid_argument(format!("No seat {seat}")))
    }

    /// Running scores per seat; zero until the game completes.
    pub fn scores(&self) -> &'a [i32] {
        &self.state.scores
    }

    pub fn tricks_won(&self) -> &'a [u32] {
        &self.state.tricks_won
    }

    pub fn tricks_won_by(&self, seat: Seat) -> u32 {
        self.state.tricks_won.get(seat).copied().unwrap_or(0)
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Fraction of the current trick already played, in `[0, 1]`.
    pub fn trick_completion(&self) -> f64 {
        if self.players.is_empty() {
            return 0.0;
        }
        self.state.trick_plays.len() as f64 / self.players.len() as f64
    }
}
