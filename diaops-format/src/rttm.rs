//! RTTM line codec for diarization annotations.
//!
//! An RTTM line carries ten fixed-position space-separated fields:
//!
//! ```text
//! SPEAKER <recordingID> 1 <start> <duration> <NA> <NA> <speaker> <NA> <NA>
//! ```
//!
//! The locks dialect replaces the trailing `<NA>` with three boolean lock
//! flags in fields 9-11 (`0` is false, any other value true).

use crate::error::{MalformedRowError, Result};
use crate::types::{Dialect, Locks, Record, Segment};
use crate::csv::parse_timestamp;

/// Segment record type marker, field 0
const SEGMENT_TYPE: &str = "SPEAKER";
/// Channel identifier, field 2
const CHANNEL: &str = "1";
/// Placeholder for unused fields
const NA: &str = "<NA>";

/// Start and speaker fields must be present: fields 0..=7
const BASE_FIELDS: usize = 8;
/// Locks dialect needs the flags in fields 9..=11
const LOCKS_FIELDS: usize = 12;

/// Decode one RTTM line into a record.
///
/// Start is read from field 3, duration from field 4 and speaker from
/// field 7; the segment end is recovered as `start + duration` with exact
/// decimal addition.
pub fn decode_line(line: &str, dialect: Dialect) -> Result<Record> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    let expected = match dialect {
        Dialect::Base => BASE_FIELDS,
        Dialect::Locks => LOCKS_FIELDS,
    };

    if fields.len() < expected {
        return Err(MalformedRowError::MissingFields {
            expected,
            got: fields.len(),
        }
        .into());
    }

    let start = parse_timestamp(fields[3])?;
    let duration = parse_timestamp(fields[4])?;
    let segment = Segment::new(fields[7], start, start + duration)?;

    let locks = match dialect {
        Dialect::Base => None,
        Dialect::Locks => Some(Locks {
            duration: decode_flag(fields[9]),
            speaker: decode_flag(fields[10]),
            both: decode_flag(fields[11]),
        }),
    };

    Ok(Record { segment, locks })
}

/// Encode a record as one RTTM line (no trailing newline).
///
/// Duration is computed by exact decimal subtraction so the original end
/// timestamp is recoverable bit-exact on decode.
pub fn encode_line(record: &Record, recording_id: &str) -> String {
    let segment = &record.segment;

    let mut fields = vec![
        SEGMENT_TYPE.to_string(),
        recording_id.to_string(),
        CHANNEL.to_string(),
        segment.start().to_string(),
        segment.duration().to_string(),
        NA.to_string(),
        NA.to_string(),
        segment.speaker().to_string(),
        NA.to_string(),
    ];

    match record.locks {
        None => fields.push(NA.to_string()),
        Some(locks) => {
            fields.push(encode_flag(locks.duration).to_string());
            fields.push(encode_flag(locks.speaker).to_string());
            fields.push(encode_flag(locks.both).to_string());
        }
    }

    fields.join(" ")
}

/// Decode a lock flag field: `0` is false, anything else true.
fn decode_flag(field: &str) -> bool {
    field != "0"
}

/// Encode a lock flag as its RTTM field value.
fn encode_flag(flag: bool) -> &'static str {
    if flag { "1" } else { "0" }
}
