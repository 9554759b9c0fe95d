//! Result files: per-game JSONL records and a per-strategy CSV summary.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use serde::Serialize;

use crate::error::TournamentError;
use crate::tournament::{Brief, GameSummary};
use crate::types::OutputFormat;

#[derive(Debug, Serialize)]
struct GameRecord<'a> {
    tournament: usize,
    game: usize,
    #[serde(flatten)]
    summary: &'a GameSummary,
}

#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub strategy: String,
    pub total_score: i64,
    pub points_per_tournament: i64,
    pub tournaments: usize,
    pub games: usize,
}

/// JSONL destination, plain or gzip.
///
/// Closed explicitly with [`JsonlSink::finish`] so a failure to write the gzip
/// trailer surfaces as an error instead of being lost in `Drop`.
enum JsonlSink<W: Write> {
    Plain(BufWriter<W>),
    Gzip(BufWriter<GzEncoder<W>>),
}

impl<W: Write> JsonlSink<W> {
    fn plain(inner: W) -> Self {
        Self::Plain(BufWriter::new(inner))
    }

    fn gzip(inner: W) -> Self {
        Self::Gzip(BufWriter::new(GzEncoder::new(inner, Compression::default())))
    }

    fn finish(self) -> io::Result<W> {
        match self {
            Self::Plain(writer) => writer.into_inner().map_err(|e| e.into_error()),
            Self::Gzip(writer) => writer.into_inner().map_err(|e| e.into_error())?.finish(),
        }
    }
}

impl<W: Write> Write for JsonlSink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Plain(writer) => writer.write(buf),
            Self::Gzip(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Plain(writer) => writer.flush(),
            Self::Gzip(writer) => writer.flush(),
        }
    }
}

pub struct OutputWriter {
    jsonl_writer: Option<JsonlSink<File>>,
    jsonl_path: Option<PathBuf>,
    csv_path: PathBuf,
}

impl OutputWriter {
    pub fn new(
        output_dir: &Path,
        format: OutputFormat,
        compress: bool,
    ) -> Result<Self, TournamentError> {
        std::fs::create_dir_all(output_dir)?;

        let timestamp = time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| "unknown".to_string())
            .replace(':', "-");

        let (jsonl_writer, jsonl_path) = if format == OutputFormat::Jsonl {
            let filename = format!("tournament_{timestamp}.jsonl");
            if compress {
                let gz_path = output_dir.join(format!("{filename}.gz"));
                let writer = JsonlSink::gzip(File::create(&gz_path)?);
                (Some(writer), Some(gz_path))
            } else {
                let path = output_dir.join(&filename);
                let file = OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(&path)?;
                (Some(JsonlSink::plain(file)), Some(path))
            }
        } else {
            (None, None)
        };

        Ok(Self {
            jsonl_writer,
            jsonl_path,
            csv_path: output_dir.join(format!("tournament_{timestamp}_summary.csv")),
        })
    }

    pub fn write_game(
        &mut self,
        tournament: usize,
        game: usize,
        summary: &GameSummary,
    ) -> Result<(), TournamentError> {
        if let Some(ref mut writer) = self.jsonl_writer {
            let record = GameRecord {
                tournament,
                game,
                summary,
            };
            let json = serde_json::to_string(&record)?;
            writeln!(writer, "{json}")?;
        }
        Ok(())
    }

    /// Flush the game records and write the strategy summary.
    pub fn finish(mut self, brief: &Brief) -> Result<(), TournamentError> {
        if let Some(writer) = self.jsonl_writer.take() {
            writer.finish()?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.csv_path)?;
        let mut csv_writer = csv::Writer::from_writer(BufWriter::new(file));
        let tournaments = i64::try_from(brief.tournament_count.max(1)).unwrap_or(i64::MAX);
        for (strategy, total) in &brief.strategy_scores {
            csv_writer.serialize(CsvSummaryRow {
                strategy: strategy.clone(),
                total_score: *total,
                points_per_tournament: total / tournaments,
                tournaments: brief.tournament_count,
                games: brief.game_count,
            })?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn output_paths(&self) -> (Option<&PathBuf>, &PathBuf) {
        (self.jsonl_path.as_ref(), &self.csv_path)
    }
}
