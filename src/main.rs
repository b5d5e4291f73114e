//! Room series engine - aligns a day's sensor logs onto a uniform time grid
//!
//! Reads the two per-day log files (metric readings and motion events),
//! buckets each room's activity into fixed-width windows and prints the
//! room -> series mapping as JSON on stdout. Logs go to stderr so stdout
//! stays machine-readable.
//!
//! Module structure:
//! - `domain/` - Core event and output types
//! - `io/` - Log folder interface (day-file naming, tolerant reads)
//! - `services/` - Pipeline (parser, collector, grid, bucketer, fill, engine)
//! - `infra/` - Infrastructure (Config)

use chrono::{Local, NaiveDate};
use clap::Parser;
use room_series::domain::FillPolicy;
use room_series::infra::Config;
use room_series::io::LogStore;
use room_series::services::{process, DayQuery};
use tracing::info;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

/// Summarize one day of room sensor logs into bucketed time series
#[derive(Parser, Debug)]
#[command(name = "room-series", version, about)]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "config/dev.toml")]
    config: String,

    /// Calendar day to process (YYYY-MM-DD, default: today)
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Bucket width in minutes (default: from config)
    #[arg(short, long)]
    bucket: Option<u32>,

    /// Present never-observed buckets as 0 instead of null
    #[arg(long)]
    zero_fill: bool,
}

fn main() -> anyhow::Result<()> {
    // Configurable level via RUST_LOG env var, default INFO
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(UtcTime::rfc_3339())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::load_from_path(&args.config);

    let date = args.date.unwrap_or_else(|| Local::now().date_naive());
    let bucket_minutes = args.bucket.unwrap_or_else(|| config.default_bucket_minutes());
    let fill = if args.zero_fill || config.zero_fill() {
        FillPolicy::ZeroFill
    } else {
        FillPolicy::Nullable
    };

    info!(
        git_hash = env!("GIT_HASH"),
        config_file = %config.config_file(),
        log_folder = %config.log_folder(),
        date = %date,
        bucket_minutes,
        fill = ?fill,
        "config_loaded"
    );

    let store = LogStore::new(config.log_folder());
    let series = process(&store, &DayQuery { date, bucket_minutes, fill })?;

    println!("{}", serde_json::to_string_pretty(&series)?);
    Ok(())
}
