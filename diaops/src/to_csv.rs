//! To-csv subcommand - convert an RTTM diarization file to CSV.

use crate::cli::{ConvertArgs, ensure_extension};
use crate::io;
use diaops_format::{Dialect, GapMerger};
use eyre::Result;
use std::path::PathBuf;

/// CLI arguments for RTTM to CSV conversion.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Path to input RTTM file
    pub path: PathBuf,

    /// Output CSV path (default: same as input with .csv extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub convert: ConvertArgs,
}

/// Resolved configuration for RTTM to CSV conversion.
#[derive(Debug)]
pub struct Config {
    pub path: PathBuf,
    pub output: PathBuf,
    pub dialect: Dialect,
    pub merger: Option<GapMerger>,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        ensure_extension(&args.path, "rttm")?;

        if let Some(output) = &args.output {
            ensure_extension(output, "csv")?;
        }

        Ok(Self {
            output: args
                .output
                .unwrap_or_else(|| args.path.with_extension("csv")),
            dialect: args.convert.dialect(),
            merger: args.convert.merger()?,
            path: args.path,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    tracing::info!(
        input = ?config.path.display(),
        output = ?config.output.display(),
        "converting rttm to csv"
    );

    let mut records = io::read_rttm(&config.path, config.dialect)?;

    if let Some(merger) = &config.merger {
        records = crate::merge::apply(merger, records);
    }

    io::write_csv(&config.output, &records)?;

    tracing::info!(rows = records.len(), "wrote csv file");

    Ok(())
}
