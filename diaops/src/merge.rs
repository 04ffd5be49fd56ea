//! Merge subcommand - gap removal over a CSV diarization file.

use crate::cli::ensure_extension;
use crate::io;
use diaops_format::{DEFAULT_MIN_GAP, Dialect, GapMerger, Record, Segment};
use eyre::{Context, Result};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// CLI arguments for gap removal.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Path to input CSV file
    pub path: PathBuf,

    /// Output CSV path (default: input with a .merged.csv extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Minimum gap in seconds between same-speaker segments
    #[arg(long, default_value_t = DEFAULT_MIN_GAP)]
    pub min_gap: Decimal,
}

/// Resolved configuration for gap removal.
#[derive(Debug)]
pub struct Config {
    pub path: PathBuf,
    pub output: PathBuf,
    pub merger: GapMerger,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        ensure_extension(&args.path, "csv")?;

        Ok(Self {
            output: args
                .output
                .unwrap_or_else(|| args.path.with_extension("merged.csv")),
            merger: GapMerger::new(args.min_gap).wrap_err("invalid --min-gap")?,
            path: args.path,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    tracing::info!(
        input = ?config.path.display(),
        output = ?config.output.display(),
        min_gap = %config.merger.min_gap(),
        "removing gaps"
    );

    let records = io::read_csv(&config.path, Dialect::Base)?;
    let before = records.len();

    let merged = apply(&config.merger, records);

    io::write_csv(&config.output, &merged)?;

    tracing::info!(before, after = merged.len(), "wrote merged csv file");

    Ok(())
}

/// Run gap removal over decoded records.
pub fn apply(merger: &GapMerger, records: Vec<Record>) -> Vec<Record> {
    let segments: Vec<Segment> = records.into_iter().map(|record| record.segment).collect();

    merger
        .merge(&segments)
        .into_iter()
        .map(Record::from_segment)
        .collect()
}
