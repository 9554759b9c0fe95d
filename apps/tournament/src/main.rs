//! Tournament runner - plays many Rikiki games between strategies and
//! reports how each strategy scores.

mod config;
mod error;
mod output;
mod report;
mod runner;
mod tournament;
mod types;

use std::sync::Mutex;
use std::time::Instant;

use clap::Parser;
use config::{TournamentArgs, TournamentConfig};
use output::OutputWriter;
use report::brief_report;
use rikiki::ai::registered_strategies;
use runner::run_tournaments;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = TournamentArgs::parse();

    // Silent by default, only warnings and errors
    let filter = if args.verbose { "debug" } else { "warn" };
    rikiki::telemetry::init_tracing(filter, args.json_logs);

    if args.list_strategies {
        for factory in registered_strategies() {
            println!("{} v{}", factory.name, factory.version);
        }
        return Ok(());
    }

    let config = TournamentConfig::from_args(&args)?;
    info!(
        runs = config.run_count,
        players = config.tournament.players().len(),
        cards = config.tournament.card_count(),
        "Starting tournaments"
    );

    let output = match &config.output {
        Some(out) => Some(Mutex::new(OutputWriter::new(
            &out.dir,
            out.format,
            out.compress,
        )?)),
        None => None,
    };

    let start = Instant::now();
    let brief = run_tournaments(&config, output.as_ref())?;
    let elapsed = start.elapsed();

    if let Some(output) = output {
        let writer = output
            .into_inner()
            .map_err(|e| error::TournamentError::OutputLock(e.to_string()))?;
        let (jsonl_path, csv_path) = writer.output_paths();
        if let Some(path) = jsonl_path {
            info!("Game records written to: {}", path.display());
        }
        info!("Summary CSV written to: {}", csv_path.display());
        writer.finish(&brief)?;
    }

    print!("{}", brief_report(&brief));
    info!(elapsed = ?elapsed, "Run complete");
    Ok(())
}
