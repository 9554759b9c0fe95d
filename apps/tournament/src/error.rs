//! Runner error type.

use rikiki::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("invalid player {0:?}: expected NAME or NAME=STRATEGY")]
    InvalidPlayer(String),
    #[error("unknown strategy {0:?}")]
    UnknownStrategy(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("game failed: {0}")]
    Game(#[from] DomainError),
    #[error("thread pool: {0}")]
    ThreadPool(String),
    #[error("output lock poisoned: {0}")]
    OutputLock(String),
    #[error("output: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv output: {0}")]
    Csv(#[from] csv::Error),
    #[error("json output: {0}")]
    Json(#[from] serde_json::Error),
}
