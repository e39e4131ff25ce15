use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{TimelineError, TimelineResult};

/// Logical timestamp: milliseconds since the Unix epoch, UTC.
pub type TimestampMs = i64;

pub const MILLIS_PER_MINUTE: i64 = 60_000;
pub const MILLIS_PER_HOUR: i64 = 3_600_000;
pub const MILLIS_PER_DAY: i64 = 86_400_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Raw visibility window between a ground asset and a satellite.
    Pass,
    /// Feasible imaging/downlink opportunity produced by the analysis.
    Opportunity,
    /// Opportunity committed to the mission schedule.
    Scheduled,
    /// Window flagged by schedule repair as conflicting.
    Conflict,
}

/// Event as delivered by the planning backend, timestamps still textual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: String,
    pub start_time: String,
    pub end_time: String,
    pub lane_key: String,
    pub kind: EventKind,
}

/// Parsed, immutable timeline event. The engine only ever reads
/// `start_time`/`end_time`/`lane_key`; everything else is carried through
/// for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub id: String,
    pub start_time: TimestampMs,
    pub end_time: TimestampMs,
    pub lane_key: String,
    pub kind: EventKind,
}

impl TimelineEvent {
    pub fn from_record(record: &EventRecord) -> TimelineResult<Self> {
        Ok(Self {
            id: record.id.clone(),
            start_time: parse_timestamp_ms(&record.start_time)?,
            end_time: parse_timestamp_ms(&record.end_time)?,
            lane_key: record.lane_key.clone(),
            kind: record.kind,
        })
    }
}

/// Converts backend records into timeline events.
///
/// A record whose timestamps do not parse is skipped with a warning rather
/// than aborting the whole set; a half-broken feasibility response must still
/// produce a usable timeline.
#[must_use]
pub fn parse_events(records: &[EventRecord]) -> Vec<TimelineEvent> {
    records
        .iter()
        .filter_map(|record| match TimelineEvent::from_record(record) {
            Ok(event) => Some(event),
            Err(error) => {
                warn!(id = %record.id, %error, "skipping event with malformed timestamp");
                None
            }
        })
        .collect()
}

/// Parses an ISO-8601 timestamp to epoch milliseconds.
///
/// The backend emits a trailing `+00:00` offset on some records; it is
/// normalized to `Z` first. Offset-less strings are taken as UTC.
pub fn parse_timestamp_ms(value: &str) -> TimelineResult<TimestampMs> {
    let normalized = value
        .strip_suffix("+00:00")
        .map(|head| format!("{head}Z"));
    let normalized = normalized.as_deref().unwrap_or(value);

    match DateTime::parse_from_rfc3339(normalized) {
        Ok(parsed) => Ok(parsed.with_timezone(&Utc).timestamp_millis()),
        Err(source) => NaiveDateTime::parse_from_str(normalized, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc().timestamp_millis())
            .map_err(|_| TimelineError::InvalidTimestamp {
                value: value.to_owned(),
                source,
            }),
    }
}
