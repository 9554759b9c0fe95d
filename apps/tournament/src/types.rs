//! Shared types for the runner.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON line per game plus the CSV summary
    Jsonl,
    /// CSV summary only
    Csv,
}
