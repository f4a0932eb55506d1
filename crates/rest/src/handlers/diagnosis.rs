//! Diagnosis handlers.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use clinic_persistence::core::ClinicStorage;
use clinic_persistence::types::{Diagnosis, EntityType};
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::FormFields;
use crate::extractors::forms::{DiagnosisForm, parse_id};
use crate::handlers::create::store_record;
use crate::responses::{created_message, records_response};
use crate::state::AppState;

/// Lists every diagnosis.
///
/// # HTTP Request
///
/// `GET [base]/diagnosis`
pub async fn list_diagnoses_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: ClinicStorage,
{
    debug!("Listing diagnoses");
    let records = state.storage().scan_all(EntityType::Diagnosis).await?;
    Ok(records_response(records))
}

/// Records a diagnosis for an existing patient.
///
/// # HTTP Request
///
/// `POST [base]/diagnosis` with form fields `patient_ID`, `type` and
/// `information`.
///
/// # Response
///
/// - `200 OK` - `OK: ID {id} for patient {surname}`
/// - `400 Bad Request` - `Patiend ID and diagnosis type required`, or
///   `No patient with such ID`
pub async fn create_diagnosis_handler<S>(
    State(state): State<AppState<S>>,
    FormFields(form): FormFields<DiagnosisForm>,
) -> RestResult<Response>
where
    S: ClinicStorage,
{
    if form.patient_id.is_empty() || form.diagnosis_type.is_empty() {
        return Err(RestError::bad_request(
            "Patiend ID and diagnosis type required",
        ));
    }

    debug!(
        patient_id = %form.patient_id,
        diagnosis_type = %form.diagnosis_type,
        "Processing diagnosis create request"
    );

    let patient = match parse_id(&form.patient_id) {
        Some(id) => state
            .storage()
            .get(EntityType::Patient, id)
            .await?
            .map(|fields| (id, fields)),
        None => None,
    };
    let Some((patient_id, patient_fields)) = patient else {
        return Err(RestError::bad_request("No patient with such ID"));
    };

    let diagnosis = Diagnosis {
        patient_id,
        diagnosis_type: form.diagnosis_type,
        information: form.information,
    };
    let id = store_record(state.storage(), &diagnosis).await?;

    let surname = patient_fields
        .get("surname")
        .map(String::as_str)
        .unwrap_or_default();
    Ok(created_message(id, &format!("patient {}", surname)).into_response())
}
