//! Day-file naming and tolerant reads over the poller's log folder
//!
//! The log writer appends one file per kind per calendar day:
//! `sensor_metrics_<YYYY-MM-DD>.txt` and `motion_<YYYY-MM-DD>.txt`.
//! A missing file is an expected condition (no events logged that day, or
//! the poller was down) and degrades to empty input; any other filesystem
//! failure is fatal and carries context for the caller.

use anyhow::Context;
use chrono::NaiveDate;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Resolves per-day log file paths inside a configured folder
#[derive(Debug, Clone)]
pub struct LogStore {
    folder: PathBuf,
}

impl LogStore {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self { folder: folder.into() }
    }

    /// Path of the metrics log for one day
    pub fn metrics_path(&self, date: NaiveDate) -> PathBuf {
        self.folder.join(format!("sensor_metrics_{}.txt", date.format("%Y-%m-%d")))
    }

    /// Path of the motion log for one day
    pub fn motion_path(&self, date: NaiveDate) -> PathBuf {
        self.folder.join(format!("motion_{}.txt", date.format("%Y-%m-%d")))
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }
}

/// Read a day file to completion.
///
/// Returns `Ok(None)` for a missing file (logged as a warning); propagates
/// every other read failure with the path attached.
pub fn read_day_file(path: &Path) -> anyhow::Result<Option<Vec<String>>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content.lines().map(str::to_string).collect())),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "log_file_missing");
            Ok(None)
        }
        Err(e) => {
            Err(e).with_context(|| format!("failed to read log file {}", path.display()))
        }
    }
}
