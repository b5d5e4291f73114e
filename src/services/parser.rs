//! Line parsing for the two poller log formats
//!
//! Motion lines:  `[Motion] <name> (ID: <id>) <YYYY-MM-DD HH:MM:SS>`
//! Metric lines:  `[Sensor] <name> (ID: <id>) <timestamp> => <Label>: <value>[<unit>]`
//!
//! Parsing is pure and per-line: anything that does not match yields `None`
//! and the caller skips the line. A malformed line must never abort a file.

use crate::domain::{room_from_name, MetricEvent, MetricReading, MotionEvent};
use chrono::NaiveDateTime;

const MOTION_PREFIX: &str = "[Motion] ";
const METRIC_PREFIX: &str = "[Sensor] ";
const ID_MARKER: &str = " (ID: ";
const VALUE_SEPARATOR: &str = " => ";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// `YYYY-MM-DD HH:MM:SS` is exactly 19 bytes; trailing text is ignored
const TIMESTAMP_LEN: usize = 19;

/// Parse one line of the motion log
pub fn parse_motion_line(line: &str) -> Option<MotionEvent> {
    let rest = line.trim().strip_prefix(MOTION_PREFIX)?;
    let (name, sensor_id, timestamp) = parse_header(rest)?;

    Some(MotionEvent { room: room_from_name(name), sensor_id: sensor_id.to_string(), timestamp })
}

/// Parse one line of the metrics log
pub fn parse_metric_line(line: &str) -> Option<MetricEvent> {
    let (header, value_segment) = line.trim().split_once(VALUE_SEPARATOR)?;
    let rest = header.strip_prefix(METRIC_PREFIX)?;
    let (name, sensor_id, timestamp) = parse_header(rest)?;
    let reading = parse_reading(value_segment)?;

    Some(MetricEvent {
        room: room_from_name(name),
        sensor_id: sensor_id.to_string(),
        timestamp,
        reading,
    })
}

/// Split `<name> (ID: <id>) <timestamp>` into its parts.
///
/// The name may itself contain `" (ID: "`, so the last occurrence is the
/// delimiter. The timestamp is the first 19 bytes after the closing paren;
/// anything after it is ignored.
fn parse_header(rest: &str) -> Option<(&str, &str, NaiveDateTime)> {
    let marker = rest.rfind(ID_MARKER)?;
    let name = &rest[..marker];
    let tail = &rest[marker + ID_MARKER.len()..];
    let (sensor_id, after_id) = tail.split_once(") ")?;
    if name.is_empty() || sensor_id.is_empty() {
        return None;
    }

    let stamp = after_id.get(..TIMESTAMP_LEN)?;
    let timestamp = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).ok()?;
    Some((name, sensor_id, timestamp))
}

/// Interpret the `<Label>: <value>[<unit>]` segment of a metric line.
///
/// Labels are case-sensitive substring matches, "Light" before "Temp".
/// Brightness is a plain integer; temperature strips any trailing unit
/// marker (degree sign, "C") before parsing as a float.
fn parse_reading(segment: &str) -> Option<MetricReading> {
    if segment.contains("Light") {
        let raw = segment.split_once(':')?.1.trim();
        raw.parse::<i64>().ok().map(MetricReading::Brightness)
    } else if segment.contains("Temp") {
        let raw = segment.split_once(':')?.1.trim();
        let numeric =
            raw.trim_end_matches(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'));
        numeric.parse::<f64>().ok().map(MetricReading::Temperature)
    } else {
        None
    }
}
