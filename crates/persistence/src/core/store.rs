//! Record storage.
//!
//! This module defines the [`RecordStore`] trait, which persists entity field
//! sets under their composite `(entity type, id)` key.

use async_trait::async_trait;
use futures::future;
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};

use crate::core::IdAllocator;
use crate::error::{StorageError, StorageResult};
use crate::types::{EntityType, FieldSet};

/// Stores flat field sets keyed by `(entity type, id)`.
///
/// # Scanning
///
/// [`RecordStore::scan`] walks every identifier from 1 up to the allocator's
/// last issued value and fetches each record. Its cost grows linearly with
/// the number of identifiers ever issued, including those whose record is
/// missing.
///
/// # Example
///
/// ```
/// use clinic_persistence::backends::memory::MemoryBackend;
/// use clinic_persistence::core::{IdAllocator, RecordStore};
/// use clinic_persistence::types::{EntityType, FieldSet};
///
/// # tokio_test::block_on(async {
/// let store = MemoryBackend::new();
/// let id = store.next_id(EntityType::Hospital).await?;
///
/// let mut fields = FieldSet::new();
/// fields.insert("name".to_string(), "City".to_string());
/// store.put(EntityType::Hospital, id, &fields).await?;
///
/// assert_eq!(store.get(EntityType::Hospital, id).await?, Some(fields));
/// assert_eq!(store.get(EntityType::Hospital, 9999).await?, None);
/// # Ok::<(), clinic_persistence::StorageError>(())
/// # }).unwrap();
/// ```
#[async_trait]
pub trait RecordStore: IdAllocator {
    /// Writes all given fields for the key, overwriting existing values.
    ///
    /// All fields become visible together. Returns the number of fields
    /// stored under the key after the write. An empty field set writes
    /// nothing and returns 0.
    async fn put(&self, entity_type: EntityType, id: u64, fields: &FieldSet)
    -> StorageResult<usize>;

    /// Returns all fields for the key, or `None` if it was never written.
    async fn get(&self, entity_type: EntityType, id: u64) -> StorageResult<Option<FieldSet>>;

    /// Lazily enumerates every stored record of `entity_type`.
    ///
    /// Identifiers without a record are skipped. The stream is finite and can
    /// be created again after an error to restart the scan.
    fn scan(&self, entity_type: EntityType) -> BoxStream<'_, StorageResult<(u64, FieldSet)>> {
        stream::once(self.last_id(entity_type))
            .map_ok(|last| stream::iter((1..=last).map(Ok::<u64, StorageError>)))
            .try_flatten()
            .and_then(move |id| async move {
                Ok(self.get(entity_type, id).await?.map(|fields| (id, fields)))
            })
            .try_filter_map(|record| future::ready(Ok(record)))
            .boxed()
    }

    /// Collects [`RecordStore::scan`] into a vector, ordered by id.
    async fn scan_all(&self, entity_type: EntityType) -> StorageResult<Vec<(u64, FieldSet)>> {
        self.scan(entity_type).try_collect().await
    }

    /// Counts the records of `entity_type` that are present.
    async fn count(&self, entity_type: EntityType) -> StorageResult<u64> {
        self.scan(entity_type)
            .try_fold(0u64, |count, _| future::ready(Ok(count + 1)))
            .await
    }
}
