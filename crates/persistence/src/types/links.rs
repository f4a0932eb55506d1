//! Doctor–patient relationship types.

use std::collections::BTreeSet;
use std::collections::btree_set;

use serde::{Deserialize, Serialize};

/// The set of patient identifiers under one doctor's care.
///
/// Adding an identifier that is already present has no effect. Iteration
/// order is an implementation detail; rely on membership only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientSet(BTreeSet<u64>);

impl PatientSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a patient. Returns `true` if it was not already present.
    pub fn insert(&mut self, patient_id: u64) -> bool {
        self.0.insert(patient_id)
    }

    /// Returns `true` if the patient is in the set.
    pub fn contains(&self, patient_id: u64) -> bool {
        self.0.contains(&patient_id)
    }

    /// Number of patients in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the members.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<u64> for PatientSet {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for PatientSet {
    type Item = u64;
    type IntoIter = btree_set::IntoIter<u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// A single doctor → patient relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DoctorPatientLink {
    /// The doctor.
    pub doctor_id: u64,
    /// The patient under the doctor's care.
    pub patient_id: u64,
}

impl DoctorPatientLink {
    /// Creates a link.
    pub fn new(doctor_id: u64, patient_id: u64) -> Self {
        Self {
            doctor_id,
            patient_id,
        }
    }
}
