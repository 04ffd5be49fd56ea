//! diaops-format: speaker-diarization annotation formats and gap removal.
//!
//! This crate is the pure-transform core behind the `dia` CLI:
//!
//! - [`csv`]: codec for `speaker,start,end` rows
//! - [`rttm`]: codec for ten-field RTTM lines
//! - [`merge`]: coalescing of same-speaker segments across small gaps
//!
//! All timestamps are [`rust_decimal::Decimal`] values, so encode/decode
//! cycles and duration arithmetic are exact: `12.3` stays `12.3`, never
//! `12.299999999999999`. File I/O is left to callers; every function here
//! maps in-memory rows, lines and segments.
//!
//! # Quick Start
//!
//! ```
//! use diaops_format::{Dialect, GapMerger, csv, rttm};
//!
//! let record = csv::decode_row(&["A", "0", "2"], Dialect::Base)?;
//! let line = rttm::encode_line(&record, "rec1");
//! assert_eq!(line, "SPEAKER rec1 1 0 2 <NA> <NA> A <NA> <NA>");
//!
//! let merger = GapMerger::new("1".parse()?)?;
//! let merged = merger.merge(&[record.segment]);
//! assert_eq!(merged.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod csv;
pub mod error;
pub mod merge;
pub mod rttm;
pub mod types;

pub use error::{Error, MalformedRowError, Result};
pub use merge::{DEFAULT_MIN_GAP, GapMerger};
pub use types::{Dialect, Locks, Record, Segment};
