//! Uniform bucket grid over a room's activity window
//!
//! Boundaries are generated at fixed spacing from the floor-to-minute of the
//! earliest observation until a boundary at or past `latest + 1min` has been
//! emitted. The final boundary may overshoot by up to `bucket_minutes - 1`
//! minutes: uniform width takes priority over exact span coverage, and the
//! overshoot keeps the latest event's bucket fully closed.

use chrono::{Duration, NaiveDateTime, Timelike};

const LABEL_FORMAT: &str = "%H:%M:%S";

/// Ordered bucket boundaries for one room: N buckets need N+1 boundaries,
/// bucket i covering the half-open interval [boundary[i], boundary[i+1])
#[derive(Debug, Clone, PartialEq)]
pub struct BucketGrid {
    boundaries: Vec<NaiveDateTime>,
    bucket_minutes: u32,
}

/// Truncate to whole-minute precision
fn floor_minute(t: NaiveDateTime) -> NaiveDateTime {
    t.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(t)
}

impl BucketGrid {
    /// Build the grid spanning a room's observed timestamps.
    ///
    /// Returns `None` for an empty timestamp set; such a room produces no
    /// output at all. `bucket_minutes` must be non-zero (validated by the
    /// engine entry point before any grid is built).
    pub fn build(timestamps: &[NaiveDateTime], bucket_minutes: u32) -> Option<Self> {
        debug_assert!(bucket_minutes > 0, "bucket width must be non-zero");

        let earliest = timestamps.iter().min()?;
        let latest = timestamps.iter().max()?;

        let min_time = floor_minute(*earliest);
        // +1 minute guarantees the latest event's bucket is fully closed
        let max_time = floor_minute(*latest) + Duration::minutes(1);
        let step = Duration::minutes(i64::from(bucket_minutes));

        let mut boundaries = vec![min_time];
        while *boundaries.last().unwrap_or(&min_time) < max_time {
            let next = *boundaries.last().unwrap_or(&min_time) + step;
            boundaries.push(next);
        }

        Some(Self { boundaries, bucket_minutes })
    }

    /// Number of buckets N (boundaries minus one)
    pub fn bucket_count(&self) -> usize {
        self.boundaries.len() - 1
    }

    pub fn boundaries(&self) -> &[NaiveDateTime] {
        &self.boundaries
    }

    pub fn bucket_minutes(&self) -> u32 {
        self.bucket_minutes
    }

    /// Bucket index for a timestamp: the greatest i with boundary[i] <= t.
    ///
    /// Binary search over the monotonic boundary sequence. Timestamps before
    /// the first boundary or at/after the last are outside the grid and
    /// return `None`; the caller drops them rather than writing out of range.
    pub fn bucket_index(&self, t: NaiveDateTime) -> Option<usize> {
        let upper = self.boundaries.partition_point(|b| *b <= t);
        if upper == 0 || upper > self.bucket_count() {
            return None;
        }
        Some(upper - 1)
    }

    /// Bucket start instants formatted as 24-hour time-of-day labels
    pub fn labels(&self) -> Vec<String> {
        self.boundaries[..self.bucket_count()]
            .iter()
            .map(|b| b.format(LABEL_FORMAT).to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_empty_timestamps_build_nothing() {
        assert!(BucketGrid::build(&[], 5).is_none());
    }

    #[test]
    #[should_panic(expected = "bucket width must be non-zero")]
    fn test_zero_bucket_width_asserts() {
        let _ = BucketGrid::build(&[dt("2024-01-01 08:00:00")], 0);
    }

    #[test]
    fn test_single_event_yields_one_bucket() {
        let grid = BucketGrid::build(&[dt("2024-01-01 08:00:30")], 5).unwrap();
        assert_eq!(grid.bucket_count(), 1);
        assert_eq!(grid.boundaries(), &[dt("2024-01-01 08:00:00"), dt("2024-01-01 08:05:00")]);
    }

    #[test]
    fn test_final_boundary_overshoots_to_close_last_bucket() {
        // Events at 08:00, 08:03 and 08:07 with 5-minute buckets:
        // max_time is 08:08, so the final boundary overshoots to 08:10
        let times = [dt("2024-01-01 08:00:00"), dt("2024-01-01 08:03:00"), dt("2024-01-01 08:07:00")];
        let grid = BucketGrid::build(&times, 5).unwrap();
        assert_eq!(
            grid.boundaries(),
            &[dt("2024-01-01 08:00:00"), dt("2024-01-01 08:05:00"), dt("2024-01-01 08:10:00")]
        );
        assert_eq!(grid.bucket_count(), 2);
    }

    #[test]
    fn test_boundaries_monotonic_constant_spacing() {
        let times = [dt("2024-01-01 06:12:45"), dt("2024-01-01 11:47:03")];
        let grid = BucketGrid::build(&times, 15).unwrap();
        let bounds = grid.boundaries();
        for pair in bounds.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[1] - pair[0], Duration::minutes(15));
        }
        // Coverage: first boundary at or before every event, last strictly after
        assert!(bounds[0] <= times[0]);
        assert!(times[1] < *bounds.last().unwrap());
    }

    #[test]
    fn test_seconds_floored_from_min_time() {
        let grid = BucketGrid::build(&[dt("2024-01-01 08:00:59")], 5).unwrap();
        assert_eq!(grid.boundaries()[0], dt("2024-01-01 08:00:00"));
    }

    #[test]
    fn test_bucket_index_boundaries() {
        let times = [dt("2024-01-01 08:00:00"), dt("2024-01-01 08:07:00")];
        let grid = BucketGrid::build(&times, 5).unwrap();

        assert_eq!(grid.bucket_index(dt("2024-01-01 08:00:00")), Some(0));
        assert_eq!(grid.bucket_index(dt("2024-01-01 08:04:59")), Some(0));
        assert_eq!(grid.bucket_index(dt("2024-01-01 08:05:00")), Some(1));
        assert_eq!(grid.bucket_index(dt("2024-01-01 08:09:59")), Some(1));
        // Outside the grid on either side
        assert_eq!(grid.bucket_index(dt("2024-01-01 07:59:59")), None);
        assert_eq!(grid.bucket_index(dt("2024-01-01 08:10:00")), None);
    }

    #[test]
    fn test_labels_are_bucket_starts() {
        let times = [dt("2024-01-01 08:00:00"), dt("2024-01-01 08:07:00")];
        let grid = BucketGrid::build(&times, 5).unwrap();
        assert_eq!(grid.labels(), vec!["08:00:00".to_string(), "08:05:00".to_string()]);
    }
}
