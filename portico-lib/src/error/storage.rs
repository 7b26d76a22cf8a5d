//! Storage error types

/// Errors returned by a [`Storage`](crate::storage::Storage) backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backend could not be reached or rejected the operation.
    #[error("storage backend error: {0}")]
    Backend(String),
}
