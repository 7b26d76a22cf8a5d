//! Session storage in a local SQLite file.

use std::path::Path;

use async_sqlite::{Client, ClientBuilder};
use async_trait::async_trait;
use log::debug;
use portico_lib::error::StorageError;
use portico_lib::storage::Storage;
use rusqlite::OptionalExtension;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS session (
    name  TEXT PRIMARY KEY,
    value TEXT NOT NULL
)";

/// Keeps session values (the access token) in one small table.
pub struct SqliteStorage {
    client: Client,
}

impl SqliteStorage {
    /// Open the database at `path`, creating the file and table if needed.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let client = ClientBuilder::new().path(path).open().await.map_err(backend)?;
        client
            .conn(|conn| conn.execute_batch(SCHEMA))
            .await
            .map_err(backend)?;

        debug!("Opened session database {}", path.display());
        Ok(Self { client })
    }
}

fn backend(e: async_sqlite::Error) -> StorageError {
    StorageError::Backend(e.to_string())
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let (name, value) = (key.to_string(), value.to_string());
        self.client
            .conn(move |conn| {
                conn.execute(
                    "INSERT OR REPLACE INTO session (name, value) VALUES (?1, ?2)",
                    [&name, &value],
                )
            })
            .await
            .map(drop)
            .map_err(backend)
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let name = key.to_string();
        self.client
            .conn(move |conn| {
                conn.query_row("SELECT value FROM session WHERE name = ?1", [&name], |row| {
                    row.get(0)
                })
                .optional()
            })
            .await
            .map_err(backend)
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let name = key.to_string();
        self.client
            .conn(move |conn| conn.execute("DELETE FROM session WHERE name = ?1", [&name]))
            .await
            .map(drop)
            .map_err(backend)
    }
}
