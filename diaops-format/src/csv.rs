//! CSV row codec for diarization annotations.
//!
//! Base layout: `speaker,start,end`. The locks dialect appends three
//! boolean columns: `speaker,start,end,durationLock,speakerLock,bothLock`.

use crate::error::{MalformedRowError, Result};
use crate::types::{Dialect, Locks, Record, Segment};
use rust_decimal::Decimal;

/// Fields in a base-dialect row
const BASE_FIELDS: usize = 3;
/// Fields in a locks-dialect row
const LOCKS_FIELDS: usize = 6;

/// Decode one CSV row into a record.
///
/// Extra trailing fields beyond the dialect's layout are ignored.
pub fn decode_row(fields: &[&str], dialect: Dialect) -> Result<Record> {
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

    let start = parse_timestamp(fields[1])?;
    let end = parse_timestamp(fields[2])?;
    let segment = Segment::new(fields[0], start, end)?;

    let locks = match dialect {
        Dialect::Base => None,
        Dialect::Locks => Some(Locks {
            duration: parse_bool(fields[3])?,
            speaker: parse_bool(fields[4])?,
            both: parse_bool(fields[5])?,
        }),
    };

    Ok(Record { segment, locks })
}

/// Encode a record as CSV fields, inverse of [`decode_row`].
///
/// Timestamps keep the decimal representation they were decoded with;
/// lock columns are emitted iff the record carries locks.
pub fn encode_row(record: &Record) -> Vec<String> {
    let segment = &record.segment;

    let mut fields = vec![
        segment.speaker.clone(),
        segment.start.to_string(),
        segment.end.to_string(),
    ];

    if let Some(locks) = record.locks {
        fields.push(locks.duration.to_string());
        fields.push(locks.speaker.to_string());
        fields.push(locks.both.to_string());
    }

    fields
}

/// Parse a timestamp field as an exact decimal.
pub(crate) fn parse_timestamp(value: &str) -> Result<Decimal> {
    value
        .parse()
        .map_err(|source| MalformedRowError::InvalidTimestamp {
            value: value.to_string(),
            source,
        }
        .into())
}

/// Parse a CSV lock column, accepting only the `true`/`false` literals.
fn parse_bool(value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(MalformedRowError::InvalidLock(other.to_string()).into()),
    }
}
