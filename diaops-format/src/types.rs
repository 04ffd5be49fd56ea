//! Core types for diaops-format

use crate::error::{Error, Result};
use rust_decimal::Decimal;

/// One speaker turn on the recording timeline.
///
/// Timestamps are exact decimals so that values survive repeated
/// encode/decode cycles without binary-float drift. Construction is
/// validated; merging produces new values rather than mutating.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub(crate) speaker: String,
    pub(crate) start: Decimal,
    pub(crate) end: Decimal,
}

impl Segment {
    /// Create a segment, rejecting intervals that end before they start.
    pub fn new(speaker: impl Into<String>, start: Decimal, end: Decimal) -> Result<Self> {
        if end < start {
            return Err(Error::InvalidInterval { start, end });
        }

        Ok(Self {
            speaker: speaker.into(),
            start,
            end,
        })
    }

    /// Speaker label.
    pub fn speaker(&self) -> &str {
        &self.speaker
    }

    /// Start time in seconds.
    pub fn start(&self) -> Decimal {
        self.start
    }

    /// End time in seconds.
    pub fn end(&self) -> Decimal {
        self.end
    }

    /// Duration in seconds, computed by exact decimal subtraction.
    pub fn duration(&self) -> Decimal {
        self.end - self.start
    }
}

/// Editor lock flags carried by the extended RTTM/CSV dialect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Locks {
    /// Duration is locked against editing
    pub duration: bool,
    /// Speaker label is locked against editing
    pub speaker: bool,
    /// Both duration and speaker are locked
    pub both: bool,
}

/// Which dialect of the annotation formats to read and write.
///
/// `Base` is the plain three-column CSV / ten-field RTTM layout. `Locks`
/// carries three extra boolean lock flags (RTTM fields 9-11, CSV columns
/// 4-6) produced by annotation editors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dialect {
    #[default]
    Base,
    Locks,
}

/// A decoded annotation row: the segment plus any dialect extras.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub segment: Segment,
    /// Present iff the row was decoded with [`Dialect::Locks`]
    pub locks: Option<Locks>,
}

impl Record {
    /// Wrap a bare segment as a base-dialect record.
    pub fn from_segment(segment: Segment) -> Self {
        Self {
            segment,
            locks: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn constructs_valid_segment() {
        let seg = Segment::new("A", dec("1.5"), dec("3.0")).unwrap();

        assert_eq!(seg.speaker(), "A");
        assert_eq!(seg.start(), dec("1.5"));
        assert_eq!(seg.end(), dec("3.0"));
        assert_eq!(seg.duration(), dec("1.5"));
    }

    #[test]
    fn allows_zero_length_segment() {
        let seg = Segment::new("A", dec("2"), dec("2")).unwrap();
        assert_eq!(seg.duration(), dec("0"));
    }

    #[test]
    fn rejects_end_before_start() {
        let err = Segment::new("A", dec("3"), dec("1")).unwrap_err();

        match err {
            Error::InvalidInterval { start, end } => {
                assert_eq!(start, dec("3"));
                assert_eq!(end, dec("1"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn duration_preserves_exact_decimals() {
        // 12.3 - 0.1 must render as 12.2, not 12.199999...
        let seg = Segment::new("A", dec("0.1"), dec("12.3")).unwrap();
        assert_eq!(seg.duration().to_string(), "12.2");
    }
}
