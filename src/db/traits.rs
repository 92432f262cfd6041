// Database trait — backend-agnostic async interface for all DB operations.
//
// Implementor: SqliteDatabase (wraps rusqlite behind a Mutex). Methods are
// async so the pipeline can hold an `Arc<dyn Database>` next to its async
// ingestion work without caring how the backend synchronizes.
//
// The trait mirrors the queries.rs function signatures.

use anyhow::Result;
use async_trait::async_trait;

use crate::mapping::models::ManufacturerRelation;

#[async_trait]
pub trait Database: Send + Sync {
    // --- Lifecycle ---

    /// Count the number of user-created tables in the database.
    async fn table_count(&self) -> Result<i64>;

    // --- Run state ---

    /// Get a run state value by key (e.g., "last_run_at").
    async fn get_run_state(&self, key: &str) -> Result<Option<String>>;

    /// Set a run state value (upsert).
    async fn set_run_state(&self, key: &str, value: &str) -> Result<()>;

    /// Get all run state entries, ordered by key.
    async fn get_all_run_state(&self) -> Result<Vec<(String, String)>>;

    // --- Relations ---

    /// Persist a relation set in one transaction, overwriting existing labels.
    /// Returns the number of relationship rows written.
    async fn save_relations(&self, relations: &[ManufacturerRelation]) -> Result<usize>;

    /// Reconstruct the full relation set, grouped by owning manufacturer.
    async fn get_relations(&self) -> Result<Vec<ManufacturerRelation>>;

    /// Stored relation for one manufacturer (exact name).
    async fn get_relation_for(&self, manufacturer: &str) -> Result<Option<ManufacturerRelation>>;

    // --- Stats ---

    async fn manufacturer_count(&self) -> Result<i64>;

    async fn relationship_count(&self) -> Result<i64>;

    /// Number of stored relationships per label.
    async fn relationship_type_counts(&self) -> Result<Vec<(String, i64)>>;
}
