//! To-rttm subcommand - convert a CSV diarization file to RTTM.

use crate::cli::{ConvertArgs, ensure_extension};
use crate::io;
use diaops_format::{Dialect, GapMerger};
use eyre::{OptionExt, Result};
use std::path::PathBuf;

/// CLI arguments for CSV to RTTM conversion.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Path to input CSV file
    pub path: PathBuf,

    /// Output RTTM path (default: same as input with .rttm extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Recording identifier written to every RTTM line (default: input file stem)
    #[arg(long)]
    pub recording_id: Option<String>,

    #[command(flatten)]
    pub convert: ConvertArgs,
}

/// Resolved configuration for CSV to RTTM conversion.
#[derive(Debug)]
pub struct Config {
    pub path: PathBuf,
    pub output: PathBuf,
    pub recording_id: String,
    pub dialect: Dialect,
    pub merger: Option<GapMerger>,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        ensure_extension(&args.path, "csv")?;

        if let Some(output) = &args.output {
            ensure_extension(output, "rttm")?;
        }

        let recording_id = match args.recording_id {
            Some(id) => id,
            None => args
                .path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .ok_or_eyre("cannot derive a recording id from the input path")?
                .to_string(),
        };

        Ok(Self {
            output: args
                .output
                .unwrap_or_else(|| args.path.with_extension("rttm")),
            recording_id,
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
        recording_id = config.recording_id,
        "converting csv to rttm"
    );

    let mut records = io::read_csv(&config.path, config.dialect)?;

    if let Some(merger) = &config.merger {
        records = crate::merge::apply(merger, records);
    }

    io::write_rttm(&config.output, &records, &config.recording_id)?;

    tracing::info!(lines = records.len(), "wrote rttm file");

    Ok(())
}
