// Database queries — CRUD operations for all tables.
//
// Every database interaction goes through this module. This keeps SQL
// contained in one place and gives the rest of the app clean Rust interfaces.

use std::collections::HashMap;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::mapping::models::{ManufacturerRelation, RelatedManufacturer, Relationship};

// --- Run state ---

/// Get a run state value by key (e.g., "last_run_at").
pub fn get_run_state(conn: &Connection, key: &str) -> Result<Option<String>> {
    let mut stmt = conn.prepare("SELECT value FROM run_state WHERE key = ?1")?;
    let result = stmt.query_row(params![key], |row| row.get(0)).optional()?;
    Ok(result)
}

/// Set a run state value (upsert).
pub fn set_run_state(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO run_state (key, value, updated_at)
         VALUES (?1, ?2, datetime('now'))
         ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
        params![key, value],
    )?;
    Ok(())
}

/// Get every run state entry, ordered by key.
pub fn get_all_run_state(conn: &Connection) -> Result<Vec<(String, String)>> {
    let mut stmt = conn.prepare("SELECT key, value FROM run_state ORDER BY key")?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
    let mut entries = Vec::new();
    for row in rows {
        entries.push(row?);
    }
    Ok(entries)
}

// --- Manufacturers ---

/// Find a manufacturer's id by exact name, creating the row if needed.
pub fn get_or_create_manufacturer(conn: &Connection, name: &str) -> Result<i64> {
    let inserted = conn.execute(
        "INSERT INTO manufacturers (name) VALUES (?1) ON CONFLICT(name) DO NOTHING",
        params![name],
    )?;
    if inserted > 0 {
        debug!(manufacturer = name, "Created manufacturer");
    }

    let id = conn
        .query_row(
            "SELECT id FROM manufacturers WHERE name = ?1",
            params![name],
            |row| row.get(0),
        )
        .with_context(|| format!("Failed to create or find manufacturer with name {name}"))?;
    Ok(id)
}

pub fn manufacturer_count(conn: &Connection) -> Result<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM manufacturers", [], |row| row.get(0))?;
    Ok(count)
}

// --- Relationships ---

/// Insert a relationship or overwrite the label of an existing pair.
pub fn upsert_relationship(
    conn: &Connection,
    manufacturer_id: i64,
    related_manufacturer_id: i64,
    relationship: Relationship,
) -> Result<()> {
    conn.execute(
        "INSERT INTO relationships (manufacturer_id, related_manufacturer_id, relationship_type, updated_at)
         VALUES (?1, ?2, ?3, datetime('now'))
         ON CONFLICT(manufacturer_id, related_manufacturer_id) DO UPDATE SET
            relationship_type = ?3,
            updated_at = datetime('now')",
        params![manufacturer_id, related_manufacturer_id, relationship.as_str()],
    )?;
    Ok(())
}

/// Save a full relation set in a single transaction.
///
/// Returns the number of relationship rows written (inserted or updated).
pub fn save_relations(conn: &mut Connection, relations: &[ManufacturerRelation]) -> Result<usize> {
    let tx = conn.transaction()?;
    let mut written = 0;

    for relation in relations {
        let owner_id = get_or_create_manufacturer(&tx, &relation.manufacturer)?;
        for related in &relation.related_manufacturers {
            let related_id = get_or_create_manufacturer(&tx, &related.name)?;
            upsert_relationship(&tx, owner_id, related_id, related.relationship)?;
            written += 1;
        }
    }

    tx.commit().context("Failed to commit manufacturer relations")?;
    Ok(written)
}

/// Rebuild the relation set from the flat relationship rows.
///
/// Rows are grouped by owning manufacturer; owners and their related entries
/// appear in the order the rows were first written.
pub fn get_relations(conn: &Connection) -> Result<Vec<ManufacturerRelation>> {
    let rows = query_relationship_rows(conn, None)?;
    group_by_manufacturer(rows)
}

/// The stored relation for a single manufacturer, if it owns any rows.
pub fn get_relation_for(conn: &Connection, manufacturer: &str) -> Result<Option<ManufacturerRelation>> {
    let rows = query_relationship_rows(conn, Some(manufacturer))?;
    Ok(group_by_manufacturer(rows)?.into_iter().next())
}

pub fn relationship_count(conn: &Connection) -> Result<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM relationships", [], |row| row.get(0))?;
    Ok(count)
}

/// Count of stored relationships per label, ordered by label.
pub fn relationship_type_counts(conn: &Connection) -> Result<Vec<(String, i64)>> {
    let mut stmt = conn.prepare(
        "SELECT relationship_type, COUNT(*) FROM relationships
         GROUP BY relationship_type
         ORDER BY relationship_type",
    )?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
    let mut counts = Vec::new();
    for row in rows {
        counts.push(row?);
    }
    Ok(counts)
}

fn query_relationship_rows(
    conn: &Connection,
    owner: Option<&str>,
) -> Result<Vec<(String, String, String)>> {
    let mut stmt = conn.prepare(
        "SELECT m.name, r.name, rel.relationship_type
         FROM relationships rel
         JOIN manufacturers m ON m.id = rel.manufacturer_id
         JOIN manufacturers r ON r.id = rel.related_manufacturer_id
         WHERE ?1 IS NULL OR m.name = ?1
         ORDER BY rel.id",
    )?;

    let rows = stmt.query_map(params![owner], |row| {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?))
    })?;

    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

fn group_by_manufacturer(rows: Vec<(String, String, String)>) -> Result<Vec<ManufacturerRelation>> {
    let mut relations: Vec<ManufacturerRelation> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for (owner, related, label) in rows {
        let relationship: Relationship = label.parse()?;
        let idx = *index.entry(owner.clone()).or_insert_with(|| {
            relations.push(ManufacturerRelation {
                manufacturer: owner,
                related_manufacturers: Vec::new(),
            });
            relations.len() - 1
        });
        relations[idx].related_manufacturers.push(RelatedManufacturer {
            name: related,
            relationship,
        });
    }

    Ok(relations)
}
