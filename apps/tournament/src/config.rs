//! Command-line arguments and the validated runner configuration.

use std::path::PathBuf;

use clap::Parser;
use rikiki::ai::registry;
use rikiki::PlayerIdentity;

use crate::error::TournamentError;
use crate::tournament::Tournament;
use crate::types::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "tournament")]
#[command(about = "Run Rikiki tournaments between card-playing strategies")]
pub struct TournamentArgs {
    /// Number of tournaments to run
    #[arg(short = 'n', long, default_value = "1000")]
    pub runs: usize,

    /// Seed every tournament with this value instead of system entropy
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print every game, trick by trick (runs on a single worker)
    #[arg(long)]
    pub report: bool,

    /// Fraction of the available processors to use
    #[arg(long, default_value = "0.95")]
    pub processor_usage: f64,

    /// Player as NAME or NAME=STRATEGY, in seating order (repeatable)
    #[arg(long = "player", value_name = "NAME=STRATEGY")]
    pub players: Vec<String>,

    /// Number of full 52-card packets merged for every game
    #[arg(long, default_value = "2")]
    pub packets: usize,

    /// List registered strategies and exit
    #[arg(long)]
    pub list_strategies: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Log as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// Write per-game results and a strategy summary into this directory
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    pub output_format: OutputFormat,

    /// Compress the JSONL output
    #[arg(long)]
    pub compress: bool,
}

#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub format: OutputFormat,
    pub compress: bool,
}

/// Everything a run needs, checked.
#[derive(Debug, Clone)]
pub struct TournamentConfig {
    pub run_count: usize,
    pub seed: Option<u64>,
    pub report: bool,
    pub processor_usage: f64,
    pub tournament: Tournament,
    pub output: Option<OutputConfig>,
}

impl TournamentConfig {
    pub fn from_args(args: &TournamentArgs) -> Result<Self, TournamentError> {
        if !(args.processor_usage > 0.0 && args.processor_usage <= 1.0) {
            return Err(TournamentError::InvalidConfig(format!(
                "processor usage must be in (0, 1], got {}",
                args.processor_usage
            )));
        }
        if args.packets == 0 {
            return Err(TournamentError::InvalidConfig(
                "at least one packet is required".into(),
            ));
        }

        let mut players = if args.players.is_empty() {
            Tournament::default_players()
        } else {
            args.players
                .iter()
                .map(|arg| parse_player(arg))
                .collect::<Result<Vec<_>, _>>()?
        };
        if let Some(seed) = args.seed {
            for (seat, player) in players.iter_mut().enumerate() {
                player.config.seed = Some(seed.wrapping_add(seat as u64));
            }
        }

        let tournament = Tournament::with_packet_count(args.packets, players)?;
        let output = args.output_dir.as_ref().map(|dir| OutputConfig {
            dir: PathBuf::from(dir),
            format: args.output_format,
            compress: args.compress,
        });

        Ok(Self {
            run_count: args.runs,
            seed: args.seed,
            report: args.report,
            processor_usage: args.processor_usage,
            tournament,
            output,
        })
    }
}

/// Parse `NAME` or `NAME=STRATEGY`.
pub fn parse_player(arg: &str) -> Result<PlayerIdentity, TournamentError> {
    let (name, strategy) = match arg.split_once('=') {
        Some((name, strategy)) => (name.trim(), Some(strategy.trim())),
        None => (arg.trim(), None),
    };
    if name.is_empty() {
        return Err(TournamentError::InvalidPlayer(arg.to_string()));
    }
    let factory = match strategy {
        Some(strategy) => registry::by_name(strategy)
            .ok_or_else(|| TournamentError::UnknownStrategy(strategy.to_string()))?,
        None => registry::default_factory(),
    };
    Ok(PlayerIdentity::with_strategy(name, factory))
}
