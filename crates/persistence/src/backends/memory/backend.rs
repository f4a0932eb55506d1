use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::core::{
    Backend, BackendKind, IdAllocator, RecordStore, RelationshipIndex, UsageStats,
};
use crate::error::StorageResult;
use crate::types::{DoctorPatientLink, EntityType, FieldSet, PatientSet, UsageSnapshot};

#[derive(Debug, Default)]
struct MemoryState {
    initialized: bool,
    counters: HashMap<EntityType, u64>,
    records: HashMap<(EntityType, u64), FieldSet>,
    links: BTreeMap<u64, PatientSet>,
    start_ts: Option<i64>,
    requests: u64,
}

/// In-memory implementation of every storage trait.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    state: Arc<Mutex<MemoryState>>,
}

impl Debug for MemoryBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("MemoryBackend")
            .field("initialized", &state.initialized)
            .field("records", &state.records.len())
            .field("linked_doctors", &state.links.len())
            .finish_non_exhaustive()
    }
}

impl MemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once [`Backend::initialize`] has run.
    pub fn is_initialized(&self) -> bool {
        self.state.lock().initialized
    }
}

#[async_trait]
impl Backend for MemoryBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Memory
    }

    fn name(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> StorageResult<()> {
        Ok(())
    }

    async fn initialize(&self) -> StorageResult<()> {
        let mut state = self.state.lock();
        if state.initialized {
            return Ok(());
        }
        for entity_type in EntityType::ALL {
            state.counters.entry(entity_type).or_insert(0);
        }
        state.initialized = true;
        Ok(())
    }
}

#[async_trait]
impl IdAllocator for MemoryBackend {
    async fn next_id(&self, entity_type: EntityType) -> StorageResult<u64> {
        let mut state = self.state.lock();
        let counter = state.counters.entry(entity_type).or_insert(0);
        *counter += 1;
        Ok(*counter)
    }

    async fn last_id(&self, entity_type: EntityType) -> StorageResult<u64> {
        Ok(self
            .state
            .lock()
            .counters
            .get(&entity_type)
            .copied()
            .unwrap_or(0))
    }
}

#[async_trait]
impl RecordStore for MemoryBackend {
    async fn put(
        &self,
        entity_type: EntityType,
        id: u64,
        fields: &FieldSet,
    ) -> StorageResult<usize> {
        if fields.is_empty() {
            return Ok(0);
        }
        let mut state = self.state.lock();
        let stored = state.records.entry((entity_type, id)).or_default();
        for (name, value) in fields {
            stored.insert(name.clone(), value.clone());
        }
        Ok(stored.len())
    }

    async fn get(&self, entity_type: EntityType, id: u64) -> StorageResult<Option<FieldSet>> {
        Ok(self.state.lock().records.get(&(entity_type, id)).cloned())
    }
}

#[async_trait]
impl RelationshipIndex for MemoryBackend {
    async fn link(&self, doctor_id: u64, patient_id: u64) -> StorageResult<()> {
        self.state
            .lock()
            .links
            .entry(doctor_id)
            .or_default()
            .insert(patient_id);
        Ok(())
    }

    async fn members(&self, doctor_id: u64) -> StorageResult<PatientSet> {
        Ok(self
            .state
            .lock()
            .links
            .get(&doctor_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn all_links(&self) -> StorageResult<Vec<DoctorPatientLink>> {
        let state = self.state.lock();
        Ok(state
            .links
            .iter()
            .flat_map(|(doctor_id, patients)| {
                patients
                    .iter()
                    .map(move |patient_id| DoctorPatientLink::new(*doctor_id, patient_id))
            })
            .collect())
    }
}

#[async_trait]
impl UsageStats for MemoryBackend {
    async fn record_request(&self, now_ts: i64) -> StorageResult<()> {
        let mut state = self.state.lock();
        state.start_ts.get_or_insert(now_ts);
        state.requests += 1;
        Ok(())
    }

    async fn usage(&self) -> StorageResult<UsageSnapshot> {
        let state = self.state.lock();
        Ok(UsageSnapshot {
            start_ts: state.start_ts,
            total_requests: state.requests,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use futures::TryStreamExt;

    use super::*;
    use crate::core::{create_record, list_records};
    use crate::types::{Doctor, Hospital};

    fn fields(pairs: &[(&str, &str)]) -> FieldSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_ids_start_at_one_per_type() {
        let backend = MemoryBackend::new();
        backend.initialize().await.unwrap();

        assert_eq!(backend.last_id(EntityType::Hospital).await.unwrap(), 0);
        assert_eq!(backend.next_id(EntityType::Hospital).await.unwrap(), 1);
        assert_eq!(backend.next_id(EntityType::Hospital).await.unwrap(), 2);
        assert_eq!(backend.next_id(EntityType::Doctor).await.unwrap(), 1);
        assert_eq!(backend.last_id(EntityType::Hospital).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let backend = MemoryBackend::new();
        backend.initialize().await.unwrap();
        backend.next_id(EntityType::Patient).await.unwrap();
        backend.initialize().await.unwrap();

        assert!(backend.is_initialized());
        assert_eq!(backend.next_id(EntityType::Patient).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_allocation_is_unique() {
        let backend = MemoryBackend::new();

        let handles: Vec<_> = (0..50)
            .map(|_| {
                let backend = backend.clone();
                tokio::spawn(async move { backend.next_id(EntityType::Diagnosis).await })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap().unwrap());
        }
        assert_eq!(ids.len(), 50);
        assert_eq!(ids.iter().copied().max(), Some(50));
        assert_eq!(backend.last_id(EntityType::Diagnosis).await.unwrap(), 50);
    }

    #[tokio::test]
    async fn test_put_merges_and_reports_field_count() {
        let backend = MemoryBackend::new();

        let first = fields(&[("name", "A"), ("phone", "1")]);
        assert_eq!(backend.put(EntityType::Hospital, 1, &first).await.unwrap(), 2);

        let second = fields(&[("phone", "2"), ("address", "X")]);
        assert_eq!(backend.put(EntityType::Hospital, 1, &second).await.unwrap(), 3);

        let stored = backend.get(EntityType::Hospital, 1).await.unwrap().unwrap();
        assert_eq!(stored["phone"], "2");
        assert_eq!(stored["name"], "A");
    }

    #[tokio::test]
    async fn test_empty_put_writes_nothing() {
        let backend = MemoryBackend::new();
        let written = backend
            .put(EntityType::Patient, 1, &FieldSet::new())
            .await
            .unwrap();
        assert_eq!(written, 0);
        assert!(backend.get(EntityType::Patient, 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_scan_and_count() {
        let backend = MemoryBackend::new();
        for name in ["A", "B", "C"] {
            let hospital = Hospital {
                name: name.to_string(),
                address: String::new(),
                phone: String::new(),
                beds_number: String::new(),
            };
            create_record(&backend, &hospital).await.unwrap();
        }
        assert_eq!(backend.count(EntityType::Hospital).await.unwrap(), 3);
        assert_eq!(backend.count(EntityType::Doctor).await.unwrap(), 0);

        let ids: Vec<u64> = backend
            .scan(EntityType::Hospital)
            .map_ok(|(id, _)| id)
            .try_collect()
            .await
            .unwrap();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_doctor_without_hospital_round_trips() {
        let backend = MemoryBackend::new();
        let doctor = Doctor {
            surname: "House".to_string(),
            profession: "diagnostician".to_string(),
            hospital_id: None,
        };
        create_record(&backend, &doctor).await.unwrap();

        let doctors: Vec<(u64, Doctor)> = list_records(&backend).await.unwrap();
        assert_eq!(doctors, vec![(1, doctor)]);
    }

    #[tokio::test]
    async fn test_links_are_sets() {
        let backend = MemoryBackend::new();
        backend.link(1, 10).await.unwrap();
        backend.link(1, 10).await.unwrap();
        backend.link(1, 11).await.unwrap();
        backend.link(2, 10).await.unwrap();

        let members = backend.members(1).await.unwrap();
        assert!(members.contains(10));
        assert!(members.contains(11));
        assert_eq!(members.len(), 2);
        assert!(backend.members(3).await.unwrap().is_empty());

        let mut links = backend.all_links().await.unwrap();
        links.sort();
        assert_eq!(
            links,
            vec![
                DoctorPatientLink::new(1, 10),
                DoctorPatientLink::new(1, 11),
                DoctorPatientLink::new(2, 10),
            ]
        );
        assert_eq!(backend.link_counts().await.unwrap(), (2, 3));
    }

    #[tokio::test]
    async fn test_usage_keeps_first_timestamp() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.usage().await.unwrap(), UsageSnapshot::default());

        backend.record_request(100).await.unwrap();
        backend.record_request(160).await.unwrap();

        let usage = backend.usage().await.unwrap();
        assert_eq!(usage.start_ts, Some(100));
        assert_eq!(usage.total_requests, 2);
    }
}
