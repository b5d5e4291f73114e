//! Domain models - core event and output types
//!
//! This module contains the canonical data types used throughout the engine:
//! - `MetricEvent` / `MotionEvent` - parsed log lines
//! - `MetricReading` - kind-tagged metric value
//! - `RoomSeries` - bucketed per-room output arrays
//! - `FillPolicy` - presentation of never-observed buckets

pub mod types;

// Re-export commonly used types at module level
pub use types::{
    room_from_name, FillPolicy, MetricEvent, MetricKind, MetricReading, MotionEvent, RoomSeries,
};
