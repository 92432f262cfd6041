// Relation store schema — manufacturers, labelled edges, run bookkeeping.
//
// Version 1 is the base schema below. Later versions are applied once each
// through `apply_version`, which records them in `schema_version`.

use anyhow::{Context, Result};
use rusqlite::Connection;

/// Bring a connection up to the current schema. Safe to repeat.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        -- Tracks schema version for future migrations
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- One row per distinct manufacturer name
        CREATE TABLE IF NOT EXISTS manufacturers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- Directed, labelled edge from a manufacturer to a related one
        CREATE TABLE IF NOT EXISTS relationships (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            manufacturer_id INTEGER NOT NULL REFERENCES manufacturers(id),
            related_manufacturer_id INTEGER NOT NULL REFERENCES manufacturers(id),
            relationship_type TEXT NOT NULL
                CHECK (relationship_type IN ('parent', 'child', 'sibling')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now')),
            UNIQUE (manufacturer_id, related_manufacturer_id)
        );

        -- Run state — last run timestamp and batch sizes
        CREATE TABLE IF NOT EXISTS run_state (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- Index for reverse lookups (who points at this manufacturer)
        CREATE INDEX IF NOT EXISTS idx_relationships_related
            ON relationships(related_manufacturer_id);
        ",
    )
    .context("Failed to create database tables")?;

    conn.execute("INSERT OR IGNORE INTO schema_version (version) VALUES (1)", [])?;

    // v2: per-label counts in `status`
    apply_version(conn, 2, |c| {
        c.execute_batch(
            "CREATE INDEX IF NOT EXISTS idx_relationships_type
                ON relationships(relationship_type);",
        )
    })?;

    Ok(())
}

fn apply_version(
    conn: &Connection,
    version: i64,
    upgrade: impl FnOnce(&Connection) -> rusqlite::Result<()>,
) -> Result<()> {
    let applied: i64 = conn.query_row(
        "SELECT COUNT(*) FROM schema_version WHERE version = ?1",
        [version],
        |row| row.get(0),
    )?;
    if applied > 0 {
        return Ok(());
    }

    upgrade(conn).with_context(|| format!("Schema upgrade to v{version} failed"))?;
    conn.execute("INSERT INTO schema_version (version) VALUES (?1)", [version])?;
    Ok(())
}

/// Number of non-internal tables; `init` reports it.
pub fn table_count(conn: &Connection) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%'",
        [],
        |row| row.get(0),
    )
    .context("Failed to count tables")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        create_tables(&conn).unwrap();
    }

    #[test]
    fn test_table_count() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        // schema_version, manufacturers, relationships, run_state
        assert_eq!(table_count(&conn).unwrap(), 4i64);
    }

    #[test]
    fn test_relationship_type_is_checked() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        conn.execute_batch(
            "INSERT INTO manufacturers (name) VALUES ('Acme');
             INSERT INTO manufacturers (name) VALUES ('Henkel');",
        )
        .unwrap();

        let bad = conn.execute(
            "INSERT INTO relationships (manufacturer_id, related_manufacturer_id, relationship_type)
             VALUES (1, 2, 'cousin')",
            [],
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_migrations_recorded_once() {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        create_tables(&conn).unwrap();
        create_tables(&conn).unwrap();

        let versions: Vec<i64> = conn
            .prepare("SELECT version FROM schema_version ORDER BY version")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .map(|r| r.unwrap())
            .collect();
        assert_eq!(versions, vec![1, 2]);
    }
}
