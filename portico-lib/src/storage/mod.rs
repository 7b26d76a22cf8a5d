//! Persistence of the session token.

mod memory;

pub use memory::InMemoryStorage;

use async_trait::async_trait;

use crate::error::StorageError;

/// Key under which the access token is stored after a successful login.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Backend trait for string key/value storage.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Get the value stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Delete `key`.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
