//! CLI argument definitions using clap.

use color_eyre::Section;
use diaops_format::{Dialect, GapMerger};
use clap::{Parser, Subcommand};
use eyre::{Context, Result, eyre};
use rust_decimal::Decimal;
use std::path::Path;

#[derive(Debug, Parser)]
#[command(name = "dia")]
#[command(about = "Speaker diarization annotation tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a CSV diarization file to RTTM
    ToRttm(crate::to_rttm::Args),

    /// Convert an RTTM diarization file to CSV
    ToCsv(crate::to_csv::Args),

    /// Remove small gaps between same-speaker segments in a CSV file
    Merge(crate::merge::Args),
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::ToRttm(args) => crate::to_rttm::execute(args.try_into()?),
        Commands::ToCsv(args) => crate::to_csv::execute(args.try_into()?),
        Commands::Merge(args) => crate::merge::execute(args.try_into()?),
    }
}

/// Conversion options shared by both converters.
#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    /// Read and write the locks dialect (three extra lock flag columns)
    #[arg(long)]
    pub locks: bool,

    /// Merge same-speaker segments separated by less than this many seconds
    #[arg(long, conflicts_with = "locks")]
    pub min_gap: Option<Decimal>,
}

impl ConvertArgs {
    pub fn dialect(&self) -> Dialect {
        if self.locks { Dialect::Locks } else { Dialect::Base }
    }

    pub fn merger(&self) -> Result<Option<GapMerger>> {
        self.min_gap
            .map(GapMerger::new)
            .transpose()
            .wrap_err("invalid --min-gap")
    }
}

/// Reject a path whose extension does not match the expected format.
pub fn ensure_extension(path: &Path, expected: &str) -> Result<()> {
    let matches = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(expected));

    if !matches {
        let e = eyre!("{:?} is not a .{expected} file", path.display())
            .suggestion(format!("pass a path ending in .{expected}"));
        return Err(e);
    }

    Ok(())
}
