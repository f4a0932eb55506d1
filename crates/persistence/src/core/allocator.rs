//! Identifier allocation.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::EntityType;

/// Issues unique, strictly increasing identifiers per entity type.
///
/// Implementations must perform the increment-and-read as one atomic
/// operation against the backing store. A read followed by a write loses
/// updates when two creations race.
///
/// Identifiers start at 1 and are never reused. Under concurrency the order
/// of issued identifiers need not match request arrival order.
#[async_trait]
pub trait IdAllocator: Send + Sync {
    /// Returns the next identifier for `entity_type`.
    ///
    /// The value is strictly greater than every value previously returned
    /// for the same type.
    async fn next_id(&self, entity_type: EntityType) -> StorageResult<u64>;

    /// Returns the last identifier issued for `entity_type`, or 0 if none.
    async fn last_id(&self, entity_type: EntityType) -> StorageResult<u64>;
}
