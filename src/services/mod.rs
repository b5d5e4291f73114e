//! Services - the alignment and bucketing pipeline
//!
//! This module contains the core processing stages, in pipeline order:
//! - `parser` - one raw log line to one typed event
//! - `collector` - a day's files to per-room event collections
//! - `grid` - a room's activity window to uniform bucket boundaries
//! - `bucketer` - events to per-bucket arrays (last-value-wins / counting)
//! - `fill` - forward-filling and fill presentation
//! - `engine` - orchestration and the `process` entry point

pub mod bucketer;
pub mod collector;
pub mod engine;
pub mod fill;
pub mod grid;
pub mod parser;

// Re-export commonly used types
pub use collector::DayEvents;
pub use engine::{process, process_files, DayQuery};
pub use grid::BucketGrid;
