//! One tournament: a game for every trick count, up then down again.

use std::collections::{BTreeMap, HashMap};
use std::ops::{Add, AddAssign};

use rand::Rng;
use rikiki::ai::registry::{AIM_ZERO, PROBABILISTIC_LIGHT};
use rikiki::domain::{players, shuffle, validate_players, Decision, TrickResult};
use rikiki::{Game, Packet, PlayerIdentity, Trump};
use serde::Serialize;
use tracing::debug;

use crate::error::TournamentError;

const DEFAULT_NAMES: [&str; 6] = ["Alice", "Bob", "Charlie", "Dylan", "Eddie", "Fitz"];

/// Everything worth reporting about one finished game.
#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    pub trick_count: usize,
    pub card_count: usize,
    pub trump: Trump,
    pub players: Vec<String>,
    pub strategies: Vec<&'static str>,
    pub bids: Vec<u32>,
    pub tricks_won: Vec<u32>,
    pub scores: Vec<i32>,
    pub tricks: Vec<TrickResult>,
}

impl GameSummary {
    pub fn name_of(&self, decision: &Decision) -> &str {
        self.players
            .get(decision.seat)
            .map(String::as_str)
            .unwrap_or("?")
    }
}

/// Per-strategy score totals over one or more tournaments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Brief {
    /// Sum over games of the strategy's score, divided by the number of
    /// players using it.
    pub strategy_scores: BTreeMap<String, i64>,
    pub game_count: usize,
    pub tournament_count: usize,
}

impl Add for Brief {
    type Output = Brief;

    fn add(mut self, other: Brief) -> Brief {
        self += other;
        self
    }
}

impl AddAssign for Brief {
    fn add_assign(&mut self, other: Brief) {
        for (strategy, score) in other.strategy_scores {
            *self.strategy_scores.entry(strategy).or_insert(0) += score;
        }
        self.game_count += other.game_count;
        self.tournament_count += other.tournament_count;
    }
}

#[derive(Debug, Clone)]
pub struct Tournament {
    packets: Vec<Packet>,
    players: Vec<PlayerIdentity>,
}

impl Default for Tournament {
    /// Two packets, six players; the first two play ProbabilisticLight and
    /// AimZero, the others FirstAvailable.
    fn default() -> Self {
        Self {
            packets: vec![Packet::full(), Packet::full()],
            players: Self::default_players(),
        }
    }
}

impl Tournament {
    pub fn new(
        packets: Vec<Packet>,
        players: Vec<PlayerIdentity>,
    ) -> Result<Self, TournamentError> {
        if packets.is_empty() {
            return Err(TournamentError::InvalidConfig(
                "at least one packet is required".into(),
            ));
        }
        validate_players(&players)?;
        Ok(Self { packets, players })
    }

    pub fn with_packet_count(
        packet_count: usize,
        players: Vec<PlayerIdentity>,
    ) -> Result<Self, TournamentError> {
        Self::new(vec![Packet::full(); packet_count], players)
    }

    pub fn default_players() -> Vec<PlayerIdentity> {
        players(&[&PROBABILISTIC_LIGHT, &AIM_ZERO], &DEFAULT_NAMES)
    }

    pub fn players(&self) -> &[PlayerIdentity] {
        &self.players
    }

    pub fn card_count(&self) -> usize {
        self.packets.iter().map(Packet::len).sum()
    }

    /// Largest trick count the merged packets allow.
    pub fn highest_trick_count(&self) -> usize {
        self.card_count() / self.players.len()
    }

    /// `2, 3, …, highest - 1`, then the same values back down to 2.
    pub fn trick_count_sequence(&self) -> impl Iterator<Item = usize> {
        let highest = self.highest_trick_count();
        (2..highest).chain((2..highest).rev())
    }

    /// Play every game of the tournament, calling `on_game` after each.
    pub fn run<R, F>(&self, rng: &mut R, mut on_game: F) -> Result<Brief, TournamentError>
    where
        R: Rng + ?Sized,
        F: FnMut(&GameSummary) -> Result<(), TournamentError>,
    {
        let mut totals: HashMap<&'static str, i64> = self
            .players
            .iter()
            .map(|p| (p.strategy_name(), 0))
            .collect();
        let mut game_count = 0;

        for trick_count in self.trick_count_sequence() {
            let cards = shuffle(rng, &self.packets)?;
            let mut game = Game::new(self.players.clone(), cards, trick_count)?;
            let tricks = game.run_to_completion()?;
            let view = game.view();

            for (player, score) in self.players.iter().zip(view.scores()) {
                *totals.entry(player.strategy_name()).or_insert(0) += i64::from(*score);
            }
            game_count += 1;

            let summary = GameSummary {
                trick_count,
                card_count: view.card_count(),
                trump: view.trump(),
                players: self.players.iter().map(|p| p.name.clone()).collect(),
                strategies: self.players.iter().map(|p| p.strategy_name()).collect(),
                bids: view.bids()?.to_vec(),
                tricks_won: view.tricks_won().to_vec(),
                scores: view.scores().to_vec(),
                tricks,
            };
            debug!(trick_count, scores = ?summary.scores, "Tournament game complete");
            on_game(&summary)?;
        }

        let appearances = self.strategy_appearances();
        let strategy_scores = totals
            .into_iter()
            .map(|(strategy, total)| {
                let count = appearances.get(strategy).copied().unwrap_or(1).max(1);
                (strategy.to_string(), total / count)
            })
            .collect();

        Ok(Brief {
            strategy_scores,
            game_count,
            tournament_count: 1,
        })
    }

    /// How many players use each strategy.
    fn strategy_appearances(&self) -> HashMap<&'static str, i64> {
        let mut counts = HashMap::new();
        for p in &self.players {
            *counts.entry(p.strategy_name()).or_insert(0) += 1;
        }
        counts
    }
}
