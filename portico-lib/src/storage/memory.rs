//! In-memory storage using DashMap

use async_trait::async_trait;
use dashmap::DashMap;

use super::Storage;
use crate::error::StorageError;

/// Storage backed by a concurrent hash map.
///
/// Data is lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    store: DashMap<String, String>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.store.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.store.get(key).map(|entry| entry.value().clone()))
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.store.remove(key);
        Ok(())
    }
}
