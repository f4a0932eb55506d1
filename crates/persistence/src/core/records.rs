//! Typed record operations on top of the raw storage traits.

use futures::TryStreamExt;

use crate::core::RecordStore;
use crate::error::StorageResult;
use crate::types::EntityRecord;

/// Outcome of [`create_record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordWrite {
    /// The identifier allocated for the record.
    pub id: u64,
    /// Number of fields the store reported for the key after the write.
    pub stored_fields: usize,
    /// Number of fields the record was expected to contain.
    pub expected_fields: usize,
}

impl RecordWrite {
    /// Returns true if the store holds exactly the fields that were written.
    pub fn is_complete(&self) -> bool {
        self.stored_fields == self.expected_fields
    }
}

/// Allocates an identifier for `record` and stores it.
///
/// The caller decides what to do with an incomplete write; see
/// [`RecordWrite::is_complete`].
pub async fn create_record<S, R>(storage: &S, record: &R) -> StorageResult<RecordWrite>
where
    S: RecordStore + ?Sized,
    R: EntityRecord,
{
    let fields = record.to_fields();
    let id = storage.next_id(R::ENTITY_TYPE).await?;
    let stored_fields = storage.put(R::ENTITY_TYPE, id, &fields).await?;

    Ok(RecordWrite {
        id,
        stored_fields,
        expected_fields: R::FIELDS.len(),
    })
}

/// Reads and decodes the record with the given id.
pub async fn read_record<S, R>(storage: &S, id: u64) -> StorageResult<Option<R>>
where
    S: RecordStore + ?Sized,
    R: EntityRecord,
{
    match storage.get(R::ENTITY_TYPE, id).await? {
        Some(fields) => R::from_fields(id, &fields).map(Some),
        None => Ok(None),
    }
}

/// Reads and decodes every stored record of type `R`, ordered by id.
///
/// Fails on the first record that cannot be decoded.
pub async fn list_records<S, R>(storage: &S) -> StorageResult<Vec<(u64, R)>>
where
    S: RecordStore + ?Sized,
    R: EntityRecord,
{
    storage
        .scan(R::ENTITY_TYPE)
        .and_then(|(id, fields)| async move { R::from_fields(id, &fields).map(|r| (id, r)) })
        .try_collect()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::memory::MemoryBackend;
    use crate::core::IdAllocator;
    use crate::types::{Diagnosis, EntityType, FieldSet, Hospital};

    fn hospital(name: &str) -> Hospital {
        Hospital {
            name: name.to_string(),
            address: "1 Main St".to_string(),
            phone: "555".to_string(),
            beds_number: "10".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_read_record() {
        let store = MemoryBackend::new();

        let write = create_record(&store, &hospital("City")).await.unwrap();
        assert_eq!(write.id, 1);
        assert!(write.is_complete());

        let read: Option<Hospital> = read_record(&store, write.id).await.unwrap();
        assert_eq!(read, Some(hospital("City")));

        let missing: Option<Hospital> = read_record(&store, 42).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_create_record_reports_incomplete_write() {
        let store = MemoryBackend::new();

        // A stale key with an extra field makes the stored count differ.
        let mut stale = FieldSet::new();
        stale.insert("legacy".to_string(), "x".to_string());
        store.put(EntityType::Hospital, 1, &stale).await.unwrap();

        let write = create_record(&store, &hospital("City")).await.unwrap();
        assert_eq!(write.id, 1);
        assert_eq!(write.stored_fields, 5);
        assert!(!write.is_complete());
    }

    #[tokio::test]
    async fn test_list_records_skips_missing_ids() {
        let store = MemoryBackend::new();

        create_record(&store, &hospital("A")).await.unwrap();
        // Burn an id without writing a record.
        store.next_id(EntityType::Hospital).await.unwrap();
        create_record(&store, &hospital("C")).await.unwrap();

        let listed: Vec<(u64, Hospital)> = list_records(&store).await.unwrap();
        let ids: Vec<u64> = listed.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(listed[1].1.name, "C");
    }

    #[tokio::test]
    async fn test_read_record_reports_malformed_record() {
        let store = MemoryBackend::new();

        let mut fields = FieldSet::new();
        fields.insert("patient_ID".to_string(), "abc".to_string());
        fields.insert("type".to_string(), "flu".to_string());
        fields.insert("information".to_string(), "rest".to_string());
        store.put(EntityType::Diagnosis, 1, &fields).await.unwrap();

        let result: StorageResult<Option<Diagnosis>> = read_record(&store, 1).await;
        assert!(result.is_err());
    }
}
