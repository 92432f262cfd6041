// SqliteDatabase — rusqlite backend implementing the Database trait.
//
// The Connection is wrapped in tokio::sync::Mutex because Connection is !Sync.
// Trait methods lock the mutex, do synchronous rusqlite work, and return.
// The lock is never held across .await points.

use anyhow::Result;
use async_trait::async_trait;
use rusqlite::Connection;
use tokio::sync::Mutex;

use super::traits::Database;
use crate::mapping::models::ManufacturerRelation;

pub struct SqliteDatabase {
    conn: Mutex<Connection>,
}

impl SqliteDatabase {
    /// Wrap an already-opened rusqlite Connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

#[async_trait]
impl Database for SqliteDatabase {
    async fn table_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::schema::table_count(&conn)
    }

    async fn get_run_state(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().await;
        super::queries::get_run_state(&conn, key)
    }

    async fn set_run_state(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock().await;
        super::queries::set_run_state(&conn, key, value)
    }

    async fn get_all_run_state(&self) -> Result<Vec<(String, String)>> {
        let conn = self.conn.lock().await;
        super::queries::get_all_run_state(&conn)
    }

    async fn save_relations(&self, relations: &[ManufacturerRelation]) -> Result<usize> {
        let mut conn = self.conn.lock().await;
        super::queries::save_relations(&mut conn, relations)
    }

    async fn get_relations(&self) -> Result<Vec<ManufacturerRelation>> {
        let conn = self.conn.lock().await;
        super::queries::get_relations(&conn)
    }

    async fn get_relation_for(&self, manufacturer: &str) -> Result<Option<ManufacturerRelation>> {
        let conn = self.conn.lock().await;
        super::queries::get_relation_for(&conn, manufacturer)
    }

    async fn manufacturer_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::queries::manufacturer_count(&conn)
    }

    async fn relationship_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::queries::relationship_count(&conn)
    }

    async fn relationship_type_counts(&self) -> Result<Vec<(String, i64)>> {
        let conn = self.conn.lock().await;
        super::queries::relationship_type_counts(&conn)
    }
}
