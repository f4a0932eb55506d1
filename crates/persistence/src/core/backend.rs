//! Backend abstraction for key-value stores.
//!
//! This module defines the [`Backend`] trait, which carries the metadata and
//! lifecycle hooks every store implementation provides in addition to the
//! allocator, record and relationship traits.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::StorageResult;

/// Identifies the type of backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// In-process store, used for development and tests.
    Memory,
    /// Redis (or any server speaking the Redis protocol).
    Redis,
    /// Custom or unknown backend.
    Custom(&'static str),
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::Memory => write!(f, "memory"),
            BackendKind::Redis => write!(f, "redis"),
            BackendKind::Custom(name) => write!(f, "{}", name),
        }
    }
}

/// A backing store that holds counters, records and relationship sets.
#[async_trait]
pub trait Backend: Send + Sync + Debug {
    /// Returns the kind of backend.
    fn kind(&self) -> BackendKind;

    /// Returns a human-readable name for this backend.
    fn name(&self) -> &'static str;

    /// Checks that the store is reachable.
    async fn health_check(&self) -> StorageResult<()>;

    /// Seeds the identifier counters if the store has never been initialised.
    ///
    /// Safe to call on every start-up; an initialised store is left untouched.
    async fn initialize(&self) -> StorageResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_kind_display() {
        assert_eq!(BackendKind::Memory.to_string(), "memory");
        assert_eq!(BackendKind::Redis.to_string(), "redis");
        assert_eq!(BackendKind::Custom("valkey").to_string(), "valkey");
    }
}
