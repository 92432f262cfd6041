// CSV reader for product and match files.
//
// Input files are ';'-delimited with a header row. Rows may carry fewer or
// more fields than the header; they are padded or cut to the header width,
// and columns absent from the header become empty strings through
// `#[serde(default)]` on the models. Rows that still fail to deserialize are
// logged and skipped. I/O failures abort the read.

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::mapping::models::{Match, Product};

pub const DELIMITER: u8 = b';';

/// Read all product rows from a CSV file.
pub fn read_products(path: &Path) -> Result<Vec<Product>> {
    read_csv(path, "products")
}

/// Read all match rows from a CSV file.
pub fn read_matches(path: &Path) -> Result<Vec<Match>> {
    read_csv(path, "matches")
}

fn read_csv<T: DeserializeOwned>(path: &Path, entity: &str) -> Result<Vec<T>> {
    if !path.exists() {
        anyhow::bail!("File not found: {}", path.display());
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read header row: {}", path.display()))?
        .clone();

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for record in reader.records() {
        let mut record = match record {
            Ok(record) => record,
            Err(e) if e.is_io_error() => {
                return Err(e).with_context(|| format!("Error reading {}", path.display()));
            }
            Err(e) => {
                skipped += 1;
                warn!(path = %path.display(), error = %e, "Skipped unparsable line");
                continue;
            }
        };

        fit_to_headers(&mut record, headers.len());

        match record.deserialize::<T>(Some(&headers)) {
            Ok(row) => rows.push(row),
            Err(e) => {
                skipped += 1;
                warn!(
                    path = %path.display(),
                    line = record.position().map(|p| p.line()),
                    error = %e,
                    "Skipped line"
                );
            }
        }
    }

    info!(
        path = %path.display(),
        rows = rows.len(),
        skipped,
        "Read {entity}"
    );

    Ok(rows)
}

/// Pad short rows with empty fields and drop fields past the last header.
fn fit_to_headers(record: &mut csv::StringRecord, width: usize) {
    if record.len() > width {
        record.truncate(width);
    }
    while record.len() < width {
        record.push_field("");
    }
}
