// Logging setup — console output plus optional JSON log files.
//
// With BRANDGRAPH_LOG_DIR set, every event is also appended as JSON to
// `combined.log`, and errors alone to `error.log`. RUST_LOG overrides the
// configured level.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::config::Config;

pub const ERROR_LOG: &str = "error.log";
pub const COMBINED_LOG: &str = "combined.log";

/// Install the global subscriber. Call once, early in `main`.
pub fn init(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("brandgraph={}", config.log_level)));

    let (error_layer, combined_layer) = match &config.log_dir {
        Some(dir) => {
            let (error_file, combined_file) = open_log_files(dir)?;
            (
                Some(
                    fmt::layer()
                        .json()
                        .with_ansi(false)
                        .with_writer(Mutex::new(error_file))
                        .with_filter(LevelFilter::ERROR),
                ),
                Some(
                    fmt::layer()
                        .json()
                        .with_ansi(false)
                        .with_writer(Mutex::new(combined_file)),
                ),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(error_layer)
        .with(combined_layer)
        .try_init()
        .context("Failed to install the tracing subscriber")?;

    Ok(())
}

/// Create the log directory if needed and open both files for appending.
pub fn open_log_files(dir: &Path) -> Result<(File, File)> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Cannot create log directory {}", dir.display()))?;

    let open = |name: &str| {
        let path = dir.join(name);
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Cannot open log file {}", path.display()))
    };

    Ok((open(ERROR_LOG)?, open(COMBINED_LOG)?))
}
