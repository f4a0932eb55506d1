//! Key layout for key-value backends.
//!
//! | Key | Value |
//! |-----|-------|
//! | `{type}:autoID` | last issued identifier for the type |
//! | `{type}:{id}` | hash of record fields |
//! | `doctor-patient:{doctor_id}` | set of patient ids |
//! | `doctor-patient:doctors` | set of doctor ids with at least one link |
//! | `db_initiated` | initialisation marker |
//! | `stats:start_ts`, `stats:requests` | usage counters |
//!
//! Every key can carry an optional `{prefix}:` so several deployments or test
//! runs can share one server.

use crate::types::EntityType;

const DOCTOR_PATIENT: &str = "doctor-patient";

/// Keyspace builder for stored keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyspace {
    prefix: Option<String>,
}

impl Keyspace {
    /// Creates a keyspace. Blank prefixes are ignored.
    pub fn new(prefix: Option<String>) -> Self {
        let prefix = prefix
            .map(|p| p.trim_matches(':').to_string())
            .filter(|p| !p.is_empty());
        Self { prefix }
    }

    /// Returns the configured prefix, if any.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Counter holding the last issued identifier.
    pub fn counter_key(&self, entity_type: EntityType) -> String {
        self.join(&[entity_type.as_str(), "autoID"])
    }

    /// Hash holding one record.
    pub fn record_key(&self, entity_type: EntityType, id: u64) -> String {
        self.join(&[entity_type.as_str(), &id.to_string()])
    }

    /// Set of patients linked to a doctor.
    pub fn patients_key(&self, doctor_id: u64) -> String {
        self.join(&[DOCTOR_PATIENT, &doctor_id.to_string()])
    }

    /// Set of doctors with at least one linked patient.
    pub fn linked_doctors_key(&self) -> String {
        self.join(&[DOCTOR_PATIENT, "doctors"])
    }

    /// Marker written once the counters are seeded.
    pub fn initialized_key(&self) -> String {
        self.join(&["db_initiated"])
    }

    /// Unix timestamp of the first recorded request.
    pub fn stats_start_key(&self) -> String {
        self.join(&["stats", "start_ts"])
    }

    /// Number of recorded requests.
    pub fn stats_requests_key(&self) -> String {
        self.join(&["stats", "requests"])
    }

    fn join(&self, parts: &[&str]) -> String {
        let mut segs: Vec<&str> = Vec::with_capacity(parts.len() + 1);
        if let Some(prefix) = &self.prefix {
            segs.push(prefix);
        }
        segs.extend_from_slice(parts);
        segs.join(":")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unprefixed_keys() {
        let keys = Keyspace::default();
        assert_eq!(keys.counter_key(EntityType::Hospital), "hospital:autoID");
        assert_eq!(keys.record_key(EntityType::Patient, 3), "patient:3");
        assert_eq!(keys.patients_key(7), "doctor-patient:7");
        assert_eq!(keys.linked_doctors_key(), "doctor-patient:doctors");
        assert_eq!(keys.initialized_key(), "db_initiated");
        assert_eq!(keys.stats_requests_key(), "stats:requests");
    }

    #[test]
    fn test_prefixed_keys() {
        let keys = Keyspace::new(Some("test-run:".to_string()));
        assert_eq!(keys.prefix(), Some("test-run"));
        assert_eq!(
            keys.counter_key(EntityType::Diagnosis),
            "test-run:diagnosis:autoID"
        );
        assert_eq!(keys.initialized_key(), "test-run:db_initiated");
    }

    #[test]
    fn test_blank_prefix_is_ignored() {
        assert_eq!(Keyspace::new(Some(String::new())), Keyspace::default());
        assert_eq!(Keyspace::new(Some(":".to_string())).prefix(), None);
    }
}
