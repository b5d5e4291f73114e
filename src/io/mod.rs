//! IO modules - filesystem interfaces
//!
//! This module contains all external IO operations:
//! - `log_store` - per-day log file naming and tolerant reads

pub mod log_store;

// Re-export commonly used types
pub use log_store::{read_day_file, LogStore};
