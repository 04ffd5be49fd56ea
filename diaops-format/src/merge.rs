//! Coalesces same-speaker segments separated by a small time gap.

use crate::error::{Error, Result};
use crate::types::Segment;
use rust_decimal::Decimal;

/// Default minimum gap in seconds between same-speaker segments
pub const DEFAULT_MIN_GAP: Decimal = Decimal::ONE;

/// Gap-removal configuration.
///
/// Consecutive segments with the same speaker label are merged when the
/// gap between them is strictly below `min_gap`. A gap exactly equal to
/// the threshold keeps the segments apart; a negative gap (overlapping
/// segments) always joins.
#[derive(Clone, Copy, Debug)]
pub struct GapMerger {
    min_gap: Decimal,
}

impl GapMerger {
    /// Create a merger, rejecting a negative threshold.
    pub fn new(min_gap: Decimal) -> Result<Self> {
        if min_gap.is_sign_negative() && !min_gap.is_zero() {
            return Err(Error::InvalidThreshold(min_gap));
        }

        Ok(Self { min_gap })
    }

    /// Minimum gap in seconds.
    pub fn min_gap(&self) -> Decimal {
        self.min_gap
    }

    /// Merge runs of same-speaker segments in one left-to-right pass.
    ///
    /// A single pending segment accumulates each run: a joinable neighbor
    /// extends the pending end, anything else flushes it. Chains merge
    /// transitively through the accumulator, so the last member only needs
    /// to be close to the segment merged before it, not to the first.
    /// Input order is assumed chronological by start time.
    pub fn merge(&self, segments: &[Segment]) -> Vec<Segment> {
        let mut iter = segments.iter();

        let Some(first) = iter.next() else {
            return Vec::new();
        };

        let mut merged = Vec::new();
        let mut pending = first.clone();

        for curr in iter {
            if curr.speaker == pending.speaker && curr.start - pending.end < self.min_gap {
                pending = Segment {
                    speaker: pending.speaker,
                    start: pending.start,
                    end: curr.end,
                };
            } else {
                merged.push(std::mem::replace(&mut pending, curr.clone()));
            }
        }

        merged.push(pending);

        tracing::debug!(
            input = segments.len(),
            output = merged.len(),
            min_gap = %self.min_gap,
            "gap removal done"
        );

        merged
    }
}

impl Default for GapMerger {
    fn default() -> Self {
        Self {
            min_gap: DEFAULT_MIN_GAP,
        }
    }
}
