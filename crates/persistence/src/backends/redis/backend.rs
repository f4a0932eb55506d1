use std::collections::BTreeSet;
use std::fmt::Debug;

use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;

use crate::core::{
    Backend, BackendKind, IdAllocator, RecordStore, RelationshipIndex, UsageStats,
};
use crate::error::StorageResult;
use crate::keyspace::Keyspace;
use crate::types::{DoctorPatientLink, EntityType, FieldSet, PatientSet, UsageSnapshot};

use super::RedisConfig;

/// Redis-backed implementation of every storage trait.
///
/// Holds one multiplexed connection that reconnects on its own. Cloning the
/// backend shares the connection.
#[derive(Clone)]
pub struct RedisBackend {
    conn: ConnectionManager,
    keys: Keyspace,
    config: RedisConfig,
}

impl Debug for RedisBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisBackend")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl RedisBackend {
    /// Connects to the configured server.
    pub async fn connect(config: RedisConfig) -> StorageResult<Self> {
        let client = redis::Client::open(config.url())?;
        let conn = ConnectionManager::new(client).await?;
        let keys = Keyspace::new(config.key_prefix.clone());

        Ok(Self { conn, keys, config })
    }

    /// Returns the backend configuration.
    pub fn config(&self) -> &RedisConfig {
        &self.config
    }

    fn conn(&self) -> ConnectionManager {
        self.conn.clone()
    }
}

#[async_trait]
impl Backend for RedisBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Redis
    }

    fn name(&self) -> &'static str {
        "redis"
    }

    async fn health_check(&self) -> StorageResult<()> {
        let mut conn = self.conn();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

    async fn initialize(&self) -> StorageResult<()> {
        let mut conn = self.conn();
        let marker = self.keys.initialized_key();

        let initialized: bool = conn.exists(&marker).await?;
        if initialized {
            return Ok(());
        }

        let mut pipe = redis::pipe();
        pipe.atomic();
        for entity_type in EntityType::ALL {
            pipe.set_nx(self.keys.counter_key(entity_type), 0u64).ignore();
        }
        pipe.set(&marker, 1u8).ignore();
        pipe.query_async::<()>(&mut conn).await?;
        Ok(())
    }
}

#[async_trait]
impl IdAllocator for RedisBackend {
    async fn next_id(&self, entity_type: EntityType) -> StorageResult<u64> {
        let mut conn = self.conn();
        let id: u64 = conn.incr(self.keys.counter_key(entity_type), 1u64).await?;
        Ok(id)
    }

    async fn last_id(&self, entity_type: EntityType) -> StorageResult<u64> {
        let mut conn = self.conn();
        let last: Option<u64> = conn.get(self.keys.counter_key(entity_type)).await?;
        Ok(last.unwrap_or(0))
    }
}

#[async_trait]
impl RecordStore for RedisBackend {
    async fn put(
        &self,
        entity_type: EntityType,
        id: u64,
        fields: &FieldSet,
    ) -> StorageResult<usize> {
        if fields.is_empty() {
            return Ok(0);
        }

        let mut conn = self.conn();
        let key = self.keys.record_key(entity_type, id);
        let items: Vec<(&str, &str)> = fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();

        let (stored,): (usize,) = redis::pipe()
            .atomic()
            .hset_multiple(&key, &items)
            .ignore()
            .hlen(&key)
            .query_async(&mut conn)
            .await?;
        Ok(stored)
    }

    async fn get(&self, entity_type: EntityType, id: u64) -> StorageResult<Option<FieldSet>> {
        let mut conn = self.conn();
        let fields: FieldSet = conn.hgetall(self.keys.record_key(entity_type, id)).await?;
        Ok(if fields.is_empty() { None } else { Some(fields) })
    }
}

#[async_trait]
impl RelationshipIndex for RedisBackend {
    async fn link(&self, doctor_id: u64, patient_id: u64) -> StorageResult<()> {
        let mut conn = self.conn();
        redis::pipe()
            .atomic()
            .sadd(self.keys.patients_key(doctor_id), patient_id)
            .ignore()
            .sadd(self.keys.linked_doctors_key(), doctor_id)
            .ignore()
            .query_async::<()>(&mut conn)
            .await?;
        Ok(())
    }

    async fn members(&self, doctor_id: u64) -> StorageResult<PatientSet> {
        let mut conn = self.conn();
        let ids: BTreeSet<u64> = conn.smembers(self.keys.patients_key(doctor_id)).await?;
        Ok(ids.into_iter().collect())
    }

    async fn all_links(&self) -> StorageResult<Vec<DoctorPatientLink>> {
        let mut conn = self.conn();
        let doctors: BTreeSet<u64> = conn.smembers(self.keys.linked_doctors_key()).await?;

        let mut links = Vec::new();
        for doctor_id in doctors {
            let patients = self.members(doctor_id).await?;
            links.extend(
                patients
                    .iter()
                    .map(|patient_id| DoctorPatientLink::new(doctor_id, patient_id)),
            );
        }
        Ok(links)
    }
}

#[async_trait]
impl UsageStats for RedisBackend {
    async fn record_request(&self, now_ts: i64) -> StorageResult<()> {
        let mut conn = self.conn();
        redis::pipe()
            .atomic()
            .set_nx(self.keys.stats_start_key(), now_ts)
            .ignore()
            .incr(self.keys.stats_requests_key(), 1u64)
            .ignore()
            .query_async::<()>(&mut conn)
            .await?;
        Ok(())
    }

    async fn usage(&self) -> StorageResult<UsageSnapshot> {
        let mut conn = self.conn();
        let (start_ts, requests): (Option<i64>, Option<u64>) = redis::pipe()
            .get(self.keys.stats_start_key())
            .get(self.keys.stats_requests_key())
            .query_async(&mut conn)
            .await?;

        Ok(UsageSnapshot {
            start_ts,
            total_requests: requests.unwrap_or(0),
        })
    }
}
