//! diaops: CLI frontend for the diarization annotation toolkit.
//!
//! Subcommand modules each hold their clap `Args`, a resolved `Config`
//! built via `TryFrom<Args>`, and an `execute` entry point. All format
//! work lives in [`diaops_format`]; this crate does argument resolution
//! and file I/O.

pub mod cli;
pub mod io;
pub mod merge;
pub mod to_csv;
pub mod to_rttm;
