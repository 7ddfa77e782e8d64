//! libSQL session store — durable `SessionStore` implementation.
//!
//! One row per phone number; the session record is stored as a JSON blob
//! and written with an upsert, so a save is all-or-nothing. Supports local
//! file and in-memory databases.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use libsql::{Connection, Database as LibSqlDatabase, params};
use tracing::info;

use crate::dialog::Session;
use crate::error::StoreError;
use crate::store::traits::SessionStore;

/// libSQL database backend.
///
/// Stores a single connection that is reused for all operations.
/// `libsql::Connection` is `Send + Sync` and safe for concurrent async use.
pub struct LibSqlSessionStore {
    #[allow(dead_code)]
    db: Arc<LibSqlDatabase>,
    conn: Connection,
}

impl LibSqlSessionStore {
    /// Open (or create) a local database file and initialize the schema.
    pub async fn new_local(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::Open(format!("Failed to create database directory: {e}"))
            })?;
        }

        let db = libsql::Builder::new_local(path)
            .build()
            .await
            .map_err(|e| StoreError::Open(format!("Failed to open libSQL database: {e}")))?;

        let conn = db
            .connect()
            .map_err(|e| StoreError::Open(format!("Failed to create connection: {e}")))?;

        let store = Self {
            db: Arc::new(db),
            conn,
        };
        store.init_schema().await?;
        info!(path = %path.display(), "Session database opened");
        Ok(store)
    }

    /// Create an in-memory database (for tests).
    pub async fn new_memory() -> Result<Self, StoreError> {
        let db = libsql::Builder::new_local(":memory:")
            .build()
            .await
            .map_err(|e| StoreError::Open(format!("Failed to create in-memory database: {e}")))?;

        let conn = db
            .connect()
            .map_err(|e| StoreError::Open(format!("Failed to create connection: {e}")))?;

        let store = Self {
            db: Arc::new(db),
            conn,
        };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<(), StoreError> {
        self.conn
            .execute(
                "CREATE TABLE IF NOT EXISTS sessions (
                    phone      TEXT PRIMARY KEY,
                    record     TEXT NOT NULL,
                    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
                )",
                (),
            )
            .await
            .map_err(|e| StoreError::Query(format!("Failed to create sessions table: {e}")))?;
        Ok(())
    }
}

#[async_trait]
impl SessionStore for LibSqlSessionStore {
    async fn load(&self, phone: &str) -> Result<Option<Session>, StoreError> {
        let mut rows = self
            .conn
            .query("SELECT record FROM sessions WHERE phone = ?1", params![phone])
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        let Some(row) = rows
            .next()
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?
        else {
            return Ok(None);
        };

        let record: String = row.get(0).map_err(|e| StoreError::Query(e.to_string()))?;
        let session = serde_json::from_str(&record).map_err(|e| StoreError::Corrupt {
            phone: phone.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Some(session))
    }

    async fn save(&self, phone: &str, session: &Session) -> Result<(), StoreError> {
        let record = serde_json::to_string(session)?;
        self.conn
            .execute(
                "INSERT INTO sessions (phone, record, updated_at)
                 VALUES (?1, ?2, datetime('now'))
                 ON CONFLICT(phone) DO UPDATE SET
                     record = excluded.record,
                     updated_at = excluded.updated_at",
                params![phone, record],
            )
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;
        Ok(())
    }

    async fn delete(&self, phone: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM sessions WHERE phone = ?1", params![phone])
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;
        Ok(())
    }
}
