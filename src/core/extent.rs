use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::core::types::{MILLIS_PER_DAY, TimelineEvent, TimestampMs};
use crate::error::{TimelineError, TimelineResult};

/// Tuning for data-extent padding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtentTuning {
    /// Outward padding as a ratio of the raw data span.
    pub padding_ratio: f64,
    /// Minimum outward padding in milliseconds, applied when the ratio
    /// padding degenerates (short or singular event sets).
    pub padding_floor_ms: i64,
}

impl Default for ExtentTuning {
    fn default() -> Self {
        Self {
            padding_ratio: 0.02,
            padding_floor_ms: 60_000,
        }
    }
}

impl ExtentTuning {
    pub(crate) fn validate(self) -> TimelineResult<Self> {
        if !self.padding_ratio.is_finite() || self.padding_ratio < 0.0 {
            return Err(TimelineError::InvalidData(
                "extent padding ratio must be finite and >= 0".to_owned(),
            ));
        }
        if self.padding_floor_ms < 0 {
            return Err(TimelineError::InvalidData(
                "extent padding floor must be >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Inclusive, padded time bounds of an event set.
///
/// Computed once per input set; the view window is clamped against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeExtent {
    pub min: TimestampMs,
    pub max: TimestampMs,
}

impl TimeExtent {
    /// Fits the extent to an event set, padding both bounds outward.
    ///
    /// An empty set falls back to `[now, now + 24h]` so the timeline always
    /// has something legible to show.
    #[must_use]
    pub fn from_events(events: &[TimelineEvent], tuning: ExtentTuning) -> Self {
        Self::from_events_at(events, tuning, Utc::now().timestamp_millis())
    }

    /// Same as [`Self::from_events`] with an explicit reference instant for
    /// the empty-set fallback.
    #[must_use]
    pub fn from_events_at(
        events: &[TimelineEvent],
        tuning: ExtentTuning,
        now_ms: TimestampMs,
    ) -> Self {
        let Some(first) = events.first() else {
            return Self {
                min: now_ms,
                max: now_ms + MILLIS_PER_DAY,
            };
        };

        let mut min = first.start_time;
        let mut max = first.end_time;
        for event in events {
            min = min.min(event.start_time);
            max = max.max(event.end_time);
        }
        // An inverted window (end before start on every event) still yields a
        // well-ordered extent.
        if max < min {
            std::mem::swap(&mut min, &mut max);
        }

        let span = (max - min) as f64;
        // f64::max ignores a NaN operand, so an unvalidated ratio degrades to
        // the fixed floor instead of poisoning the extent.
        let padding = (span * tuning.padding_ratio)
            .max(tuning.padding_floor_ms as f64)
            .round() as TimestampMs;

        Self {
            min: min - padding,
            max: max + padding,
        }
    }

    #[must_use]
    pub fn span_ms(self) -> i64 {
        self.max - self.min
    }
}
