//! Doctor–patient relationship index.

use std::collections::BTreeSet;

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::{DoctorPatientLink, PatientSet};

/// Set-valued mapping from a doctor to the patients under their care.
///
/// Neither identifier is checked against existing records.
#[async_trait]
pub trait RelationshipIndex: Send + Sync {
    /// Adds `patient_id` to the set of `doctor_id`.
    ///
    /// Linking an existing pair again has no effect.
    async fn link(&self, doctor_id: u64, patient_id: u64) -> StorageResult<()>;

    /// Returns the patients linked to `doctor_id` (empty if none).
    async fn members(&self, doctor_id: u64) -> StorageResult<PatientSet>;

    /// Returns every link of every doctor with at least one patient.
    ///
    /// Ordering is unspecified.
    async fn all_links(&self) -> StorageResult<Vec<DoctorPatientLink>>;

    /// Returns `(doctors with at least one link, total links)`.
    async fn link_counts(&self) -> StorageResult<(u64, u64)> {
        let links = self.all_links().await?;
        let doctors: BTreeSet<u64> = links.iter().map(|link| link.doctor_id).collect();
        Ok((doctors.len() as u64, links.len() as u64))
    }
}
