// Batch loading — all product files in parallel (bounded), then matches.
//
// Product files are independent sources, so a missing or broken one is
// logged and contributes nothing. The matches file is required.
//
// CSV parsing is blocking work, so each file is read on the blocking pool.
// `buffered` keeps results in file order regardless of completion order.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info, warn};

use super::csv_reader;
use crate::mapping::models::{Match, Product};

/// Load every product file from `data_dir`, at most `concurrency` at a time.
///
/// Returns the flattened products in file order.
pub async fn load_products(data_dir: &Path, files: &[String], concurrency: usize) -> Vec<Product> {
    let pb = ProgressBar::new(files.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar().template("  Loading [{bar:30}] {pos}/{len} files") {
        pb.set_style(style);
    }

    let batches: Vec<Vec<Product>> = stream::iter(files.iter().map(|file| {
        let path = data_dir.join(file);
        let pb = pb.clone();
        async move {
            let products = load_product_file(path).await;
            pb.inc(1);
            products
        }
    }))
    .buffered(concurrency.max(1))
    .collect()
    .await;
    pb.finish_and_clear();

    batches.into_iter().flatten().collect()
}

async fn load_product_file(path: PathBuf) -> Vec<Product> {
    if !path.exists() {
        warn!(path = %path.display(), "File not found");
        return Vec::new();
    }

    let shown = path.display().to_string();
    match tokio::task::spawn_blocking(move || csv_reader::read_products(&path)).await {
        Ok(Ok(products)) => {
            info!(path = %shown, count = products.len(), "Loaded products");
            products
        }
        Ok(Err(e)) => {
            error!(path = %shown, error = %e, "Error reading product file");
            Vec::new()
        }
        Err(e) => {
            error!(path = %shown, error = %e, "Product loading task failed");
            Vec::new()
        }
    }
}

/// Load the match file. Missing or unreadable files are hard errors.
pub async fn load_matches(path: &Path) -> Result<Vec<Match>> {
    if !path.exists() {
        anyhow::bail!("Matches file not found: {}", path.display());
    }

    let owned = path.to_path_buf();
    let matches = tokio::task::spawn_blocking(move || csv_reader::read_matches(&owned))
        .await
        .context("Match loading task failed")?
        .with_context(|| format!("Error reading matches file {}", path.display()))?;

    info!(count = matches.len(), "Loaded matches");
    Ok(matches)
}
