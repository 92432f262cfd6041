// Relation store — SQLite file holding manufacturers, labelled relationships
// and run state. SQLite is compiled in (rusqlite "bundled"). The file lives
// at BRANDGRAPH_DB_PATH, ./manufacturer_relations.db by default.

pub mod queries;
pub mod schema;
pub mod sqlite;
pub mod traits;

pub use sqlite::SqliteDatabase;
pub use traits::Database;

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;

/// Create the database file (and its directory) if needed, then migrate.
///
/// `map` calls this too, so a first run works without `init`.
pub fn initialize_sqlite(db_path: &str) -> Result<Arc<dyn Database>> {
    let dir = Path::new(db_path).parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(dir) = dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create database directory {}", dir.display()))?;
    }
    connect(db_path)
}

/// Open a database created earlier by `init` or `map`.
pub fn open_sqlite(db_path: &str) -> Result<Arc<dyn Database>> {
    if !Path::new(db_path).exists() {
        anyhow::bail!("Database not found at {db_path}. Run `brandgraph init` first.");
    }
    connect(db_path)
}

fn connect(db_path: &str) -> Result<Arc<dyn Database>> {
    let conn = Connection::open(db_path)
        .with_context(|| format!("Cannot open database {db_path}"))?;
    conn.pragma_update(None, "journal_mode", "WAL")?;
    schema::create_tables(&conn)?;
    Ok(Arc::new(SqliteDatabase::new(conn)))
}
