// Manufacturer mapping pipeline: load batch -> infer -> persist -> validate.
//
// This is the main workflow behind `brandgraph map`:
// 1. Loads every product file (bounded parallel) and the match file
// 2. Infers the manufacturer relation set from the complete batch
// 3. Saves the relations in one transaction (unless running without a DB)
// 4. Validates the relations and forwards every issue to the log

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::db::Database;
use crate::ingest;
use crate::mapping::{self, models::ManufacturerRelation};
use crate::validation::{self, ValidationResult};

/// What a mapping run produced.
pub struct MappingSummary {
    pub products_loaded: usize,
    pub matches_loaded: usize,
    pub relations: Vec<ManufacturerRelation>,
    /// Relationship rows written, `None` when nothing was persisted
    pub relationships_saved: Option<usize>,
    pub validation: ValidationResult,
}

/// Run the mapping pipeline.
///
/// With `db = None` the relations are inferred and validated but not saved.
pub async fn run(config: &Config, db: Option<&dyn Database>) -> Result<MappingSummary> {
    info!("Starting manufacturer mapping");
    config.require_data_dir()?;

    let products = ingest::load_products(
        &config.data_dir,
        &config.product_files,
        config.concurrency,
    )
    .await;

    if products.is_empty() {
        anyhow::bail!(
            "No product data was loaded from {} ({} files configured). Please check your CSV files.",
            config.data_dir.display(),
            config.product_files.len()
        );
    }

    let matches = ingest::load_matches(&config.matches_path()).await?;

    info!(
        products = products.len(),
        matches = matches.len(),
        "Loaded input batch"
    );

    let relations = mapping::infer_relations(&products, &matches);

    let relationships_saved = match db {
        Some(db) => {
            let written = db
                .save_relations(&relations)
                .await
                .with_context(|| {
                    format!(
                        "Error while saving {} manufacturer relations",
                        relations.len()
                    )
                })?;
            record_run(db, products.len(), matches.len(), relations.len()).await?;
            info!(relationships = written, "Saved manufacturer relations");
            Some(written)
        }
        None => None,
    };

    let validation = validation::validate(&relations);
    validation::log_issues(validation.issues());
    info!(
        flagged = validation.flagged_count(),
        issues = validation.issues().len(),
        "Validation complete"
    );

    Ok(MappingSummary {
        products_loaded: products.len(),
        matches_loaded: matches.len(),
        relations,
        relationships_saved,
        validation,
    })
}

async fn record_run(
    db: &dyn Database,
    products: usize,
    matches: usize,
    relations: usize,
) -> Result<()> {
    db.set_run_state(
        "last_run_at",
        &chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    )
    .await?;
    db.set_run_state("last_run_products", &products.to_string())
        .await?;
    db.set_run_state("last_run_matches", &matches.to_string())
        .await?;
    db.set_run_state("last_run_relations", &relations.to_string())
        .await?;
    Ok(())
}
