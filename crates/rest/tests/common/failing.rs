//! Storage double that behaves like an unreachable server.

use async_trait::async_trait;
use clinic_persistence::core::{
    Backend, BackendKind, IdAllocator, RecordStore, RelationshipIndex, UsageStats,
};
use clinic_persistence::error::{StorageError, StorageResult};
use clinic_persistence::types::{
    DoctorPatientLink, EntityType, FieldSet, PatientSet, UsageSnapshot,
};

/// Every operation fails with [`StorageError::Unavailable`].
#[derive(Debug, Clone, Default)]
pub struct UnreachableStorage;

fn refused<T>() -> StorageResult<T> {
    Err(StorageError::unavailable("unreachable", "connection refused"))
}

#[async_trait]
impl Backend for UnreachableStorage {
    fn kind(&self) -> BackendKind {
        BackendKind::Custom("unreachable")
    }

    fn name(&self) -> &'static str {
        "unreachable"
    }

    async fn health_check(&self) -> StorageResult<()> {
        refused()
    }

    async fn initialize(&self) -> StorageResult<()> {
        refused()
    }
}

#[async_trait]
impl IdAllocator for UnreachableStorage {
    async fn next_id(&self, _entity_type: EntityType) -> StorageResult<u64> {
        refused()
    }

    async fn last_id(&self, _entity_type: EntityType) -> StorageResult<u64> {
        refused()
    }
}

#[async_trait]
impl RecordStore for UnreachableStorage {
    async fn put(
        &self,
        _entity_type: EntityType,
        _id: u64,
        _fields: &FieldSet,
    ) -> StorageResult<usize> {
        refused()
    }

    async fn get(&self, _entity_type: EntityType, _id: u64) -> StorageResult<Option<FieldSet>> {
        refused()
    }
}

#[async_trait]
impl RelationshipIndex for UnreachableStorage {
    async fn link(&self, _doctor_id: u64, _patient_id: u64) -> StorageResult<()> {
        refused()
    }

    async fn members(&self, _doctor_id: u64) -> StorageResult<PatientSet> {
        refused()
    }

    async fn all_links(&self) -> StorageResult<Vec<DoctorPatientLink>> {
        refused()
    }
}

#[async_trait]
impl UsageStats for UnreachableStorage {
    async fn record_request(&self, _now_ts: i64) -> StorageResult<()> {
        refused()
    }

    async fn usage(&self) -> StorageResult<UsageSnapshot> {
        refused()
    }
}
