// System status display — shows DB stats and the last mapping run.

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use crate::db::Database;

/// Display system status to the terminal.
pub async fn show(db: &Arc<dyn Database>, db_path: &str) -> Result<()> {
    let file_size = std::fs::metadata(Path::new(db_path))
        .map(|m| format_bytes(m.len()))
        .unwrap_or_else(|_| "unknown".to_string());
    println!("Database: {} ({})", db_path, file_size);

    let manufacturers = db.manufacturer_count().await?;
    let relationships = db.relationship_count().await?;
    println!("Manufacturers: {manufacturers}");
    println!("Relationships: {relationships}");

    for (label, count) in db.relationship_type_counts().await? {
        println!("  {label}: {count}");
    }

    match db.get_run_state("last_run_at").await? {
        Some(last_run) => {
            println!("Last run: {last_run}");
            let products = db.get_run_state("last_run_products").await?;
            let matches = db.get_run_state("last_run_matches").await?;
            if let (Some(p), Some(m)) = (products, matches) {
                println!("  from {p} products and {m} matches");
            }
        }
        None => {
            println!("Last run: never");
            println!("  Run `brandgraph map` to build manufacturer relations");
        }
    }

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
    }
}
