//! Plain-text reports: one block per game and the final strategy brief.

use std::fmt::Write;

use rikiki::Trump;

use crate::tournament::{Brief, GameSummary};

/// Marks the winning card of a trick.
pub const WIN_TOKEN: &str = "<";

pub fn game_report(game: &GameSummary) -> String {
    let width = game.players.iter().map(|n| n.chars().count()).max().unwrap_or(0);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "\nStarting game with {} players for {} tricks using {} cards",
        game.players.len(),
        game.trick_count,
        game.card_count
    );
    match game.trump {
        Trump::NoTrumps => out.push_str("No trump\n"),
        trump => {
            let _ = writeln!(out, "Trump: {trump}");
        }
    }
    push_player_values(&mut out, "Bids", &game.players, &game.bids);
    out.push('\n');

    for trick in &game.tricks {
        for decision in &trick.decisions {
            let mark = if decision.seat == trick.winner.seat {
                WIN_TOKEN.to_string()
            } else {
                " ".repeat(WIN_TOKEN.len())
            };
            let _ = write!(
                out,
                "{:>width$}: {}{mark}  ",
                game.name_of(decision),
                decision.card.pretty()
            );
        }
        out.push('\n');
    }

    out.push('\n');
    push_player_values(&mut out, "Scores", &game.players, &game.scores);
    out.push('\n');
    let lines: Vec<String> = game
        .players
        .iter()
        .zip(&game.strategies)
        .map(|(name, strategy)| format!("{name:>width$} using {strategy}"))
        .collect();
    out.push_str(&lines.join("\n"));
    out.push('\n');
    out
}

pub fn brief_report(brief: &Brief) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\nStrategy scores (over {} tournaments, {} games):",
        brief.tournament_count, brief.game_count
    );
    let tournaments = i64::try_from(brief.tournament_count.max(1)).unwrap_or(i64::MAX);
    for (strategy, score) in &brief.strategy_scores {
        let average = score / tournaments;
        let plural = if average > 1 { "s" } else { "" };
        let _ = writeln!(
            out,
            "{strategy}: {score} ({average} point{plural}/tournament)"
        );
    }
    out
}

fn push_player_values<T: std::fmt::Display>(
    out: &mut String,
    title: &str,
    names: &[String],
    values: &[T],
) {
    let pairs: Vec<String> = names
        .iter()
        .zip(values)
        .map(|(name, value)| format!("{name}={value}"))
        .collect();
    let _ = writeln!(out, "{title}: {}", pairs.join(", "));
}
