//! Configuration loading from TOML files
//!
//! The engine takes everything it needs as explicit parameters; config only
//! supplies the defaults the CLI feeds into a query: where the log folder
//! lives, the default bucket width, and whether unresolved buckets are
//! presented as zero instead of null.

use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct LogsConfig {
    /// Folder holding the per-day log files
    #[serde(default = "default_log_folder")]
    pub folder: String,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self { folder: default_log_folder() }
    }
}

fn default_log_folder() -> String {
    "logs".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct BucketsConfig {
    /// Bucket width in minutes when the CLI does not override it
    #[serde(default = "default_bucket_minutes")]
    pub default_minutes: u32,
    /// Present never-observed buckets as 0 instead of null
    #[serde(default)]
    pub zero_fill: bool,
}

impl Default for BucketsConfig {
    fn default() -> Self {
        Self { default_minutes: default_bucket_minutes(), zero_fill: false }
    }
}

fn default_bucket_minutes() -> u32 {
    5
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub logs: LogsConfig,
    #[serde(default)]
    pub buckets: BucketsConfig,
}

/// Main configuration struct used throughout the application
#[derive(Debug, Clone)]
pub struct Config {
    log_folder: String,
    default_bucket_minutes: u32,
    zero_fill: bool,
    config_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_folder: default_log_folder(),
            default_bucket_minutes: default_bucket_minutes(),
            zero_fill: false,
            config_file: "default".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let toml_config: TomlConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(Self {
            log_folder: toml_config.logs.folder,
            default_bucket_minutes: toml_config.buckets.default_minutes,
            zero_fill: toml_config.buckets.zero_fill,
            config_file: path.display().to_string(),
        })
    }

    /// Load configuration - tries the TOML file first, falls back to defaults
    pub fn load_from_path(path: &str) -> Self {
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    pub fn log_folder(&self) -> &str {
        &self.log_folder
    }

    pub fn default_bucket_minutes(&self) -> u32 {
        self.default_bucket_minutes
    }

    pub fn zero_fill(&self) -> bool {
        self.zero_fill
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }
}
