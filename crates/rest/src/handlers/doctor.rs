//! Doctor handlers.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use clinic_persistence::core::ClinicStorage;
use clinic_persistence::types::{Doctor, EntityType};
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::FormFields;
use crate::extractors::forms::{DoctorForm, parse_id};
use crate::handlers::create::store_record;
use crate::responses::{created_message, records_response};
use crate::state::AppState;

/// Lists every doctor.
///
/// # HTTP Request
///
/// `GET [base]/doctor`
pub async fn list_doctors_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: ClinicStorage,
{
    debug!("Listing doctors");
    let records = state.storage().scan_all(EntityType::Doctor).await?;
    Ok(records_response(records))
}

/// Creates a doctor, optionally attached to a hospital.
///
/// # HTTP Request
///
/// `POST [base]/doctor` with form fields `surname`, `profession` and
/// optional `hospital_ID`.
///
/// # Response
///
/// - `200 OK` - `OK: ID {id} for {surname}`
/// - `400 Bad Request` - `Surname and profession required`, or
///   `No hospital with such ID` when `hospital_ID` names no hospital
pub async fn create_doctor_handler<S>(
    State(state): State<AppState<S>>,
    FormFields(form): FormFields<DoctorForm>,
) -> RestResult<Response>
where
    S: ClinicStorage,
{
    if form.surname.is_empty() || form.profession.is_empty() {
        return Err(RestError::bad_request("Surname and profession required"));
    }

    debug!(
        surname = %form.surname,
        profession = %form.profession,
        hospital_id = %form.hospital_id,
        "Processing doctor create request"
    );

    let hospital_id = if form.hospital_id.is_empty() {
        None
    } else {
        let existing = match parse_id(&form.hospital_id) {
            Some(id) => state
                .storage()
                .get(EntityType::Hospital, id)
                .await?
                .map(|_| id),
            None => None,
        };
        match existing {
            Some(id) => Some(id),
            None => return Err(RestError::bad_request("No hospital with such ID")),
        }
    };

    let doctor = Doctor {
        surname: form.surname,
        profession: form.profession,
        hospital_id,
    };
    let id = store_record(state.storage(), &doctor).await?;

    Ok(created_message(id, &doctor.surname).into_response())
}
