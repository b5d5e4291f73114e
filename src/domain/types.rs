//! Shared types for the room series engine

use chrono::NaiveDateTime;
use serde::Serialize;

/// Separator between the room prefix and the sensor role in a display name,
/// e.g. "Kitchen - Temp".
const ROOM_SEPARATOR: &str = " - ";

/// Derive the grouping key for a sensor from its display name.
///
/// The room is the substring before the first `" - "`, trimmed of surrounding
/// whitespace; when the separator is absent the whole trimmed name is the
/// room. No further normalization is applied, so names differing in case or
/// inner whitespace yield distinct rooms.
pub fn room_from_name(name: &str) -> String {
    let trimmed = name.trim();
    match trimmed.split_once(ROOM_SEPARATOR) {
        Some((room, _)) => room.trim().to_string(),
        None => trimmed.to_string(),
    }
}

/// Kind of a periodic metric reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Temperature,
    Brightness,
}

impl MetricKind {
    pub fn as_str(&self) -> &str {
        match self {
            MetricKind::Temperature => "temperature",
            MetricKind::Brightness => "brightness",
        }
    }
}

/// A single metric observation with its kind-specific value representation
///
/// Brightness is logged as an integer light level, temperature as a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricReading {
    Temperature(f64),
    Brightness(i64),
}

impl MetricReading {
    pub fn kind(&self) -> MetricKind {
        match self {
            MetricReading::Temperature(_) => MetricKind::Temperature,
            MetricReading::Brightness(_) => MetricKind::Brightness,
        }
    }
}

/// One parsed line from the metrics log
///
/// Each reading carries its own timestamp; values of different kinds for the
/// same room never share positional state.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricEvent {
    pub room: String,
    pub sensor_id: String,
    pub timestamp: NaiveDateTime,
    pub reading: MetricReading,
}

/// One parsed line from the motion log
#[derive(Debug, Clone, PartialEq)]
pub struct MotionEvent {
    pub room: String,
    pub sensor_id: String,
    pub timestamp: NaiveDateTime,
}

/// How unresolved metric buckets are presented in the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillPolicy {
    /// Buckets with no observation at or before them serialize as null
    #[default]
    Nullable,
    /// Remaining unresolved buckets become numeric zero ("no data yet",
    /// not "measured zero") for chart frontends that cannot handle nulls
    ZeroFill,
}

/// Bucketed output for one room
///
/// All four arrays share length N; index i refers to the half-open interval
/// starting at `timestamps[i]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomSeries {
    pub temperature: Vec<Option<f64>>,
    pub brightness: Vec<Option<i64>>,
    pub motion: Vec<u32>,
    /// Bucket start instants as 24-hour `HH:MM:SS` labels
    pub timestamps: Vec<String>,
}
