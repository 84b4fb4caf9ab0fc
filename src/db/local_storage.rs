// src/db/local_storage.rs
use crate::db::connection::Database;
use crate::storage::{LocalStorage, StorageError};
use rusqlite::{params, OptionalExtension};

/// SQLite-backed slots for one visitor, keyed by the hash of their token.
#[derive(Clone)]
pub struct SqliteStorage {
    db: Database,
    owner_hash: [u8; 32],
}

impl SqliteStorage {
    pub fn new(db: Database, owner_hash: [u8; 32]) -> Self {
        Self { db, owner_hash }
    }
}

impl LocalStorage for SqliteStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.db
            .with_conn(|conn| {
                conn.query_row(
                    "select value from local_storage where owner_hash = ? and key = ?",
                    params![self.owner_hash.as_slice(), key],
                    |r| r.get(0),
                )
                .optional()
                .map_err(|e| crate::errors::ServerError::DbError(e.to_string()))
            })
            .map_err(|e| StorageError::Read(e.to_string()))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let now = chrono::Utc::now().timestamp();

        self.db
            .with_conn(|conn| {
                conn.execute(
                    r#"
                    insert into local_storage (owner_hash, key, value, updated_at)
                    values (?1, ?2, ?3, ?4)
                    on conflict(owner_hash, key) do update set
                        value = excluded.value,
                        updated_at = excluded.updated_at
                    "#,
                    params![self.owner_hash.as_slice(), key, value, now],
                )
                .map_err(|e| crate::errors::ServerError::DbError(e.to_string()))?;
                Ok(())
            })
            .map_err(|e| StorageError::Write(e.to_string()))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.db
            .with_conn(|conn| {
                conn.execute(
                    "delete from local_storage where owner_hash = ? and key = ?",
                    params![self.owner_hash.as_slice(), key],
                )
                .map_err(|e| crate::errors::ServerError::DbError(e.to_string()))?;
                Ok(())
            })
            .map_err(|e| StorageError::Write(e.to_string()))
    }
}
