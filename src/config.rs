use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Product files read from the data directory when none are configured.
pub const DEFAULT_PRODUCT_FILES: &[&str] = &[
    "cma-lt-data.csv",
    "gin-lt-data.csv",
    "azt-lt-data.csv",
    "ntn-lt-data.csv",
    "apo-lt-data.csv",
    "bnu-lt-data.csv",
];

pub const DEFAULT_CONCURRENCY: usize = 4;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Built once
/// in `main` and passed by reference to whatever needs it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the product and match CSV files
    pub data_dir: PathBuf,
    pub db_path: String,
    /// Product CSV file names, relative to `data_dir`
    pub product_files: Vec<String>,
    /// Match CSV file name, relative to `data_dir`
    pub matches_file: String,
    /// Max product files parsed at the same time
    pub concurrency: usize,
    /// Directory for the JSON log files; no file logging when unset
    pub log_dir: Option<PathBuf>,
    /// Default level for brandgraph's own events (RUST_LOG wins)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default; only a malformed concurrency is an error.
    pub fn load() -> Result<Self> {
        let product_files = match env::var("BRANDGRAPH_PRODUCT_FILES") {
            Ok(list) => parse_file_list(&list),
            Err(_) => DEFAULT_PRODUCT_FILES.iter().map(|f| f.to_string()).collect(),
        };

        let concurrency = match env::var("BRANDGRAPH_CONCURRENCY") {
            Ok(raw) => parse_concurrency(&raw)?,
            Err(_) => DEFAULT_CONCURRENCY,
        };

        Ok(Self {
            data_dir: env::var("BRANDGRAPH_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),
            db_path: env::var("BRANDGRAPH_DB_PATH")
                .unwrap_or_else(|_| "./manufacturer_relations.db".to_string()),
            product_files,
            matches_file: env::var("BRANDGRAPH_MATCHES_FILE")
                .unwrap_or_else(|_| "matches.csv".to_string()),
            concurrency,
            log_dir: env::var("BRANDGRAPH_LOG_DIR")
                .ok()
                .filter(|d| !d.trim().is_empty())
                .map(PathBuf::from),
            log_level: env::var("BRANDGRAPH_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Check that the data directory exists.
    /// Call this before loading any input files.
    pub fn require_data_dir(&self) -> Result<()> {
        if !self.data_dir.is_dir() {
            anyhow::bail!(
                "Data directory does not exist: {}\n\
                 Set BRANDGRAPH_DATA_DIR in your .env file or pass --data-dir.",
                self.data_dir.display()
            );
        }
        Ok(())
    }

    pub fn matches_path(&self) -> PathBuf {
        self.data_dir.join(&self.matches_file)
    }

    /// Apply CLI overrides on top of the environment.
    pub fn with_overrides(mut self, data_dir: Option<&Path>, concurrency: Option<usize>) -> Result<Self> {
        if let Some(dir) = data_dir {
            self.data_dir = dir.to_path_buf();
        }
        if let Some(n) = concurrency {
            if n == 0 {
                anyhow::bail!("--concurrency must be at least 1");
            }
            self.concurrency = n;
        }
        Ok(self)
    }
}

/// Split a comma-separated file list, dropping blanks.
fn parse_file_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_concurrency(raw: &str) -> Result<usize> {
    let n: usize = raw
        .trim()
        .parse()
        .with_context(|| format!("BRANDGRAPH_CONCURRENCY is not a number: {raw}"))?;
    if n == 0 {
        anyhow::bail!("BRANDGRAPH_CONCURRENCY must be at least 1");
    }
    Ok(n)
}
