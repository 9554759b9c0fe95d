//! Parallel execution of many tournaments.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use tracing::{info, warn};

use crate::config::TournamentConfig;
use crate::error::TournamentError;
use crate::output::OutputWriter;
use crate::report::game_report;
use crate::tournament::Brief;

/// Worker count: a single worker when printing games, otherwise the given
/// fraction of the processors (at least one).
pub fn parallelism(report: bool, processor_usage: f64) -> usize {
    if report {
        return 1;
    }
    ((num_cpus::get() as f64 * processor_usage) as usize).max(1)
}

/// Split `run_count` over `workers`; the first worker takes the remainder.
pub fn split_runs(run_count: usize, workers: usize) -> Vec<usize> {
    let workers = workers.max(1);
    (0..workers)
        .map(|i| run_count / workers + if i == 0 { run_count % workers } else { 0 })
        .collect()
}

/// Run `config.run_count` tournaments and reduce their briefs.
///
/// Every worker folds its own brief; briefs are summed after all workers
/// joined. Game records go through `output` under its lock.
pub fn run_tournaments(
    config: &TournamentConfig,
    output: Option<&Mutex<OutputWriter>>,
) -> Result<Brief, TournamentError> {
    let workers = parallelism(config.report, config.processor_usage);
    let shares = split_runs(config.run_count, workers);
    info!(
        runs = config.run_count,
        workers,
        seeded = config.seed.is_some(),
        "Running tournaments"
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| TournamentError::ThreadPool(e.to_string()))?;

    let mut offsets = Vec::with_capacity(shares.len());
    let mut next = 0;
    for share in &shares {
        offsets.push(next);
        next += share;
    }

    let briefs: Vec<Brief> = pool.install(|| {
        shares
            .par_iter()
            .zip(offsets.par_iter())
            .map(|(&share, &offset)| run_worker(config, output, offset, share))
            .collect::<Result<Vec<_>, _>>()
    })?;

    Ok(briefs.into_iter().fold(Brief::default(), |acc, b| acc + b))
}

fn run_worker(
    config: &TournamentConfig,
    output: Option<&Mutex<OutputWriter>>,
    first_index: usize,
    count: usize,
) -> Result<Brief, TournamentError> {
    let mut brief = Brief::default();
    for index in first_index..first_index + count {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut game_index = 0;
        let result = config.tournament.run(&mut rng, |summary| {
            if config.report {
                println!("{}", game_report(summary));
            }
            if let Some(output) = output {
                let mut writer = output
                    .lock()
                    .map_err(|e| TournamentError::OutputLock(e.to_string()))?;
                writer.write_game(index, game_index, summary)?;
            }
            game_index += 1;
            Ok(())
        });
        match result {
            Ok(b) => brief += b,
            Err(e) => {
                warn!(tournament = index, error = %e, "Tournament failed");
                return Err(e);
            }
        }
    }
    Ok(brief)
}
