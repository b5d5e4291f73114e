//! Engine entry point - one day, one bucket width, one pass over both logs
//!
//! Pipeline per room: collect -> build grid -> assign buckets -> forward-fill
//! -> assemble `RoomSeries`. Everything is request-scoped; concurrent
//! invocations share no state. Missing files and unparseable lines degrade
//! to partial output; only real filesystem failures propagate.

use crate::domain::{FillPolicy, RoomSeries};
use crate::io::LogStore;
use crate::services::bucketer::assign;
use crate::services::collector::collect;
use crate::services::fill::{apply_policy, forward_fill};
use crate::services::grid::BucketGrid;
use anyhow::ensure;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// One request: a calendar day, a bucket width and a fill presentation
#[derive(Debug, Clone)]
pub struct DayQuery {
    pub date: NaiveDate,
    pub bucket_minutes: u32,
    pub fill: FillPolicy,
}

/// Process one day's logs resolved through a [`LogStore`]
pub fn process(store: &LogStore, query: &DayQuery) -> anyhow::Result<BTreeMap<String, RoomSeries>> {
    info!(
        date = %query.date,
        bucket_minutes = query.bucket_minutes,
        fill = ?query.fill,
        "day_query"
    );
    let series = process_files(
        &store.metrics_path(query.date),
        &store.motion_path(query.date),
        query.bucket_minutes,
        query.fill,
    )?;
    info!(rooms = series.len(), "day_processed");
    Ok(series)
}

/// Process explicit metrics and motion log paths.
///
/// Rooms come from the union of both streams; a room whose every line failed
/// to parse contributes no timestamps and is excluded entirely.
pub fn process_files(
    metrics_path: &Path,
    motion_path: &Path,
    bucket_minutes: u32,
    fill: FillPolicy,
) -> anyhow::Result<BTreeMap<String, RoomSeries>> {
    ensure!(bucket_minutes > 0, "bucket width must be at least one minute");

    let day = collect(metrics_path, motion_path)?;
    let mut series = BTreeMap::new();

    for room in day.rooms() {
        let times = day.timestamps_for(room);
        let Some(grid) = BucketGrid::build(&times, bucket_minutes) else {
            continue;
        };

        let metrics = day.metrics.get(room).map_or(&[][..], Vec::as_slice);
        let motion = day.motion.get(room).map_or(&[][..], Vec::as_slice);
        let raw = assign(&grid, metrics, motion);

        let motion_total: u32 = raw.motion.iter().sum();
        debug!(
            room,
            buckets = grid.bucket_count(),
            events = times.len(),
            motion_total,
            "room_bucketed"
        );

        series.insert(
            room.to_string(),
            RoomSeries {
                temperature: apply_policy(forward_fill(&raw.temperature), fill),
                brightness: apply_policy(forward_fill(&raw.brightness), fill),
                motion: raw.motion,
                timestamps: grid.labels(),
            },
        );
    }

    Ok(series)
}
