//! Doctor–patient link handlers.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use clinic_persistence::core::ClinicStorage;
use clinic_persistence::types::EntityType;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::FormFields;
use crate::extractors::forms::{DoctorPatientForm, parse_id};
use crate::responses::group_links;
use crate::state::AppState;

/// Lists the patients of every doctor that has at least one.
///
/// # HTTP Request
///
/// `GET [base]/doctor-patient`
///
/// # Response
///
/// A JSON object keyed by doctor id, each value an ascending list of
/// patient ids.
pub async fn list_links_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: ClinicStorage,
{
    debug!("Listing doctor-patient links");
    let links = state.storage().all_links().await?;
    Ok(Json(group_links(links)).into_response())
}

/// Links a patient to a doctor.
///
/// # HTTP Request
///
/// `POST [base]/doctor-patient` with form fields `doctor_ID` and `patient_ID`.
///
/// # Response
///
/// - `200 OK` - `OK: doctor ID: {doctor}, patient ID: {patient}`
/// - `400 Bad Request` - `ID required`, or `No such ID for doctor or patient`
pub async fn create_link_handler<S>(
    State(state): State<AppState<S>>,
    FormFields(form): FormFields<DoctorPatientForm>,
) -> RestResult<Response>
where
    S: ClinicStorage,
{
    if form.doctor_id.is_empty() || form.patient_id.is_empty() {
        return Err(RestError::bad_request("ID required"));
    }

    debug!(
        doctor_id = %form.doctor_id,
        patient_id = %form.patient_id,
        "Processing doctor-patient link request"
    );

    let storage = state.storage();
    let ids = match (parse_id(&form.doctor_id), parse_id(&form.patient_id)) {
        (Some(doctor_id), Some(patient_id)) => {
            let patient = storage.get(EntityType::Patient, patient_id).await?;
            let doctor = storage.get(EntityType::Doctor, doctor_id).await?;
            (patient.is_some() && doctor.is_some()).then_some((doctor_id, patient_id))
        }
        _ => None,
    };
    let Some((doctor_id, patient_id)) = ids else {
        return Err(RestError::bad_request("No such ID for doctor or patient"));
    };

    storage.link(doctor_id, patient_id).await?;

    Ok(format!("OK: doctor ID: {}, patient ID: {}", doctor_id, patient_id).into_response())
}
