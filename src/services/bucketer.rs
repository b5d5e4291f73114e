//! Bucket assignment - maps events into grid buckets
//!
//! Metrics overwrite: when several readings of one kind land in the same
//! bucket, the last one in original file order wins. Motion accumulates:
//! every event adds one to its bucket's counter. A metric bucket with no
//! reading stays unresolved here; the forward filler deals with it. Motion
//! has no unresolved state, an empty bucket is simply 0.

use crate::domain::{MetricEvent, MetricReading};
use crate::services::grid::BucketGrid;
use chrono::NaiveDateTime;
use tracing::{debug, trace};

/// Per-bucket arrays before forward-filling
#[derive(Debug, Clone, PartialEq)]
pub struct RawBuckets {
    pub temperature: Vec<Option<f64>>,
    pub brightness: Vec<Option<i64>>,
    pub motion: Vec<u32>,
}

/// Assign every event of one room to its bucket.
///
/// Events outside the grid should not occur given how the grid is built from
/// the same timestamps, but are dropped (and counted) rather than written
/// out of range.
pub fn assign(grid: &BucketGrid, metrics: &[MetricEvent], motion: &[NaiveDateTime]) -> RawBuckets {
    let n = grid.bucket_count();
    let mut buckets = RawBuckets {
        temperature: vec![None; n],
        brightness: vec![None; n],
        motion: vec![0; n],
    };

    let mut dropped = 0usize;
    for event in metrics {
        match grid.bucket_index(event.timestamp) {
            Some(idx) => match event.reading {
                MetricReading::Temperature(v) => buckets.temperature[idx] = Some(v),
                MetricReading::Brightness(v) => buckets.brightness[idx] = Some(v),
            },
            None => {
                trace!(
                    kind = event.reading.kind().as_str(),
                    timestamp = %event.timestamp,
                    "metric_event_outside_grid"
                );
                dropped += 1;
            }
        }
    }
    for t in motion {
        match grid.bucket_index(*t) {
            Some(idx) => buckets.motion[idx] += 1,
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!(dropped, "events_outside_grid_dropped");
    }

    buckets
}
