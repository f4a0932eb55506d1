//! Error types for the persistence layer.
//!
//! The taxonomy is intentionally small. A record that does not exist is not an
//! error: read operations return `Option` and callers branch on `None`.
//! Validation of request input belongs to the handler layer and never
//! surfaces here.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

use crate::types::EntityType;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing store could not be reached, or a call failed at the
    /// transport level (refused, dropped or timed out).
    #[error("storage unavailable ({backend_name}): {message}")]
    Unavailable {
        backend_name: String,
        message: String,
    },

    /// A stored record could not be decoded into its typed form.
    #[error("malformed {entity_type} record {id}: {message}")]
    MalformedRecord {
        entity_type: EntityType,
        id: u64,
        message: String,
    },

    /// Any other error reported by the backing store.
    #[error("backend error in {backend_name}: {message}")]
    Backend {
        backend_name: String,
        message: String,
    },
}

impl StorageError {
    /// Creates an [`StorageError::Unavailable`] for the named backend.
    pub fn unavailable(backend_name: &str, message: impl Into<String>) -> Self {
        StorageError::Unavailable {
            backend_name: backend_name.to_string(),
            message: message.into(),
        }
    }

    /// Returns true if the error means the store could not be reached.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StorageError::Unavailable { .. })
    }
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(feature = "redis")]
impl From<redis::RedisError> for StorageError {
    fn from(err: redis::RedisError) -> Self {
        if err.is_io_error()
            || err.is_connection_refusal()
            || err.is_connection_dropped()
            || err.is_timeout()
        {
            StorageError::unavailable("redis", err.to_string())
        } else {
            StorageError::Backend {
                backend_name: "redis".to_string(),
                message: err.to_string(),
            }
        }
    }
}
