//! Common types shared across the playgraph crates

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Index of a week counted from the chart epoch
pub type WeekIndex = i64;

/// Millisecond Unix timestamp, the unit charting collaborators consume
pub type TimestampMs = i64;

/// UTC timestamp type used throughout the application
pub type Timestamp = DateTime<Utc>;

/// A sparse observation: play count for one week.
///
/// Serializes as a two-element `[week, plays]` array, matching the shape
/// produced by the stats backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(WeekIndex, u32)", into = "(WeekIndex, u32)")]
pub struct WeekCount {
    pub week: WeekIndex,
    pub plays: u32,
}

impl WeekCount {
    pub fn new(week: WeekIndex, plays: u32) -> Self {
        Self { week, plays }
    }
}

impl From<(WeekIndex, u32)> for WeekCount {
    fn from((week, plays): (WeekIndex, u32)) -> Self {
        Self { week, plays }
    }
}

impl From<WeekCount> for (WeekIndex, u32) {
    fn from(wc: WeekCount) -> Self {
        (wc.week, wc.plays)
    }
}

/// A dense-series entry: play count at a calendar instant.
///
/// Serializes as `[timestamp_ms, plays]`, the wire point format line charts
/// expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(TimestampMs, u32)", into = "(TimestampMs, u32)")]
pub struct PlayPoint {
    pub timestamp_ms: TimestampMs,
    pub plays: u32,
}

impl PlayPoint {
    pub fn new(timestamp_ms: TimestampMs, plays: u32) -> Self {
        Self { timestamp_ms, plays }
    }
}

impl From<(TimestampMs, u32)> for PlayPoint {
    fn from((timestamp_ms, plays): (TimestampMs, u32)) -> Self {
        Self { timestamp_ms, plays }
    }
}

impl From<PlayPoint> for (TimestampMs, u32) {
    fn from(p: PlayPoint) -> Self {
        (p.timestamp_ms, p.plays)
    }
}

/// A running-average entry at a calendar instant.
///
/// Serializes as `[timestamp_ms, average]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(TimestampMs, f64)", into = "(TimestampMs, f64)")]
pub struct AveragePoint {
    pub timestamp_ms: TimestampMs,
    pub average: f64,
}

impl AveragePoint {
    pub fn new(timestamp_ms: TimestampMs, average: f64) -> Self {
        Self {
            timestamp_ms,
            average,
        }
    }
}

impl From<(TimestampMs, f64)> for AveragePoint {
    fn from((timestamp_ms, average): (TimestampMs, f64)) -> Self {
        Self {
            timestamp_ms,
            average,
        }
    }
}

impl From<AveragePoint> for (TimestampMs, f64) {
    fn from(p: AveragePoint) -> Self {
        (p.timestamp_ms, p.average)
    }
}
