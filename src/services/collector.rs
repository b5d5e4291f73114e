//! Event collection - reads a day's logs and groups events by room
//!
//! One pass per file, file order preserved (no sorting here; ordering by
//! timestamp is established downstream where needed). Lines that fail to
//! parse are counted and skipped; a missing file yields an empty collection
//! for that kind. Both conditions are observable, never fatal.

use crate::domain::MetricEvent;
use crate::io::read_day_file;
use crate::services::parser::{parse_metric_line, parse_motion_line};
use chrono::NaiveDateTime;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::{debug, trace};

/// One day of parsed events, keyed by room
#[derive(Debug, Default)]
pub struct DayEvents {
    /// Metric readings per room, in file order
    pub metrics: BTreeMap<String, Vec<MetricEvent>>,
    /// Motion event timestamps per room, in file order
    pub motion: BTreeMap<String, Vec<NaiveDateTime>>,
}

impl DayEvents {
    /// Union of rooms seen in either stream
    pub fn rooms(&self) -> BTreeSet<&str> {
        self.metrics
            .keys()
            .map(String::as_str)
            .chain(self.motion.keys().map(String::as_str))
            .collect()
    }

    /// Every timestamp observed for a room, across both streams
    pub fn timestamps_for(&self, room: &str) -> Vec<NaiveDateTime> {
        let mut times = Vec::new();
        if let Some(events) = self.metrics.get(room) {
            times.extend(events.iter().map(|e| e.timestamp));
        }
        if let Some(events) = self.motion.get(room) {
            times.extend(events.iter().copied());
        }
        times
    }
}

/// Read and parse both log files for one day
pub fn collect(metrics_path: &Path, motion_path: &Path) -> anyhow::Result<DayEvents> {
    let mut day = DayEvents::default();

    let mut kept = 0usize;
    let mut skipped = 0usize;
    if let Some(lines) = read_day_file(metrics_path)? {
        for line in &lines {
            match parse_metric_line(line) {
                Some(event) => {
                    kept += 1;
                    day.metrics.entry(event.room.clone()).or_default().push(event);
                }
                None => {
                    if !line.trim().is_empty() {
                        trace!(line = %line, "metric_line_skipped");
                        skipped += 1;
                    }
                }
            }
        }
    }
    debug!(path = %metrics_path.display(), kept, skipped, "metrics_file_collected");

    kept = 0;
    skipped = 0;
    if let Some(lines) = read_day_file(motion_path)? {
        for line in &lines {
            match parse_motion_line(line) {
                Some(event) => {
                    kept += 1;
                    day.motion.entry(event.room).or_default().push(event.timestamp);
                }
                None => {
                    if !line.trim().is_empty() {
                        trace!(line = %line, "motion_line_skipped");
                        skipped += 1;
                    }
                }
            }
        }
    }
    debug!(path = %motion_path.display(), kept, skipped, "motion_file_collected");

    Ok(day)
}
