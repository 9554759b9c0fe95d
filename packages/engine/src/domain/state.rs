use serde::Serialize;

use crate::domain::{Card, Trump};

/// Seat position: index into the seating order fixed at game construction.
pub type Seat = usize;

/// Game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Phase {
    /// Hands dealt, nobody has bid yet.
    New,
    /// Every player has bid; no trick played yet.
    BidsDone,
    /// Tricks are being played. Re-entered once per trick.
    Deciding,
    /// All tricks played and scores computed. Terminal.
    Complete,
}

/// One card played by one seat within the current trick.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct Decision {
    pub seat: Seat,
    pub card: Card,
}

/// Engine-owned mutable state. Only the engine writes it; strategies and
/// printers read it through [`crate::domain::player_view::PublicView`].
#[derive(Debug, Clone)]
pub(crate) struct GameState {
    /// Every card handed to the engine, in distribution order.
    pub(crate) cards: Vec<Card>,
    /// Fixed at deal time for the life of the game.
    pub(crate) trump: Trump,
    pub(crate) trick_count: usize,
    /// 0-based index of the trick being played; equals `trick_count` once complete.
    pub(crate) trick_index: usize,
    pub(crate) phase: Phase,
    /// Per-seat bids, `None` until bidding is done.
    pub(crate) bids: Option<Vec<u32>>,
    pub(crate) tricks_won: Vec<u32>,
    pub(crate) scores: Vec<i32>,
    /// Ordered plays for the current trick, reset when a new trick starts.
    pub(crate) trick_plays: Vec<Decision>,
    /// Seat leading the current (or next) trick.
    pub(crate) leader: Seat,
}

impl GameState {
    pub(crate) fn new(cards: Vec<Card>, trump: Trump, trick_count: usize, players: usize) -> Self {
        Self {
            cards,
            trump,
            trick_count,
            trick_index: 0,
            phase: Phase::New,
            bids: None,
            tricks_won: vec![0; players],
            scores: vec![0; players],
            trick_plays: Vec::with_capacity(players),
            leader: 0,
        }
    }
}

/// Seat / turn math helpers.
///
/// Play goes around the table in seating order and wraps after the last seat.
#[inline]
pub fn seat_offset(seat: Seat, delta: usize, players: usize) -> Seat {
    debug_assert!(players > 0, "seat math needs at least one player");
    (seat + delta) % players
}

/// Returns the next seat in play order.
#[inline]
pub fn next_seat(seat: Seat, players: usize) -> Seat {
    seat_offset(seat, 1, players)
}

/// Expected actor seat during a trick.
///
/// `leader` opens the trick; `play_count` is how many cards have already been
/// played into it.
#[inline]
pub fn expected_actor(leader: Seat, play_count: usize, players: usize) -> Seat {
    seat_offset(leader, play_count, players)
}

/// Seating order rotated so that `leader` comes first.
pub fn play_order(leader: Seat, players: usize) -> impl Iterator<Item = Seat> {
    (0..players).map(move |n| expected_actor(leader, n, players))
}
