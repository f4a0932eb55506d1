//! Shared create flow for entity handlers.

use clinic_persistence::core::{ClinicStorage, create_record};
use clinic_persistence::types::EntityRecord;
use tracing::debug;

use crate::error::{RestError, RestResult};

/// Allocates an id for `record`, stores it and verifies the write.
///
/// Returns the new id. A write that left a different number of fields under
/// the key than the record has is reported as [`RestError::IntegrityFailure`].
pub async fn store_record<S, R>(storage: &S, record: &R) -> RestResult<u64>
where
    S: ClinicStorage,
    R: EntityRecord,
{
    let write = create_record(storage, record).await?;

    if !write.is_complete() {
        return Err(RestError::IntegrityFailure {
            expected: write.expected_fields,
            stored: write.stored_fields,
        });
    }

    debug!(
        entity_type = %R::ENTITY_TYPE,
        id = write.id,
        "Stored record"
    );

    Ok(write.id)
}
