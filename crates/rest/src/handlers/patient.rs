//! Patient handlers.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use clinic_persistence::core::ClinicStorage;
use clinic_persistence::types::{EntityType, Patient, Sex};
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::FormFields;
use crate::extractors::forms::PatientForm;
use crate::handlers::create::store_record;
use crate::responses::{created_message, records_response};
use crate::state::AppState;

/// Lists every patient.
///
/// # HTTP Request
///
/// `GET [base]/patient`
pub async fn list_patients_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: ClinicStorage,
{
    debug!("Listing patients");
    let records = state.storage().scan_all(EntityType::Patient).await?;
    Ok(records_response(records))
}

/// Creates a patient.
///
/// # HTTP Request
///
/// `POST [base]/patient` with form fields `surname`, `born_date`, `sex` and
/// `mpn`.
///
/// # Response
///
/// - `200 OK` - `OK: ID {id} for {surname}`
/// - `400 Bad Request` - `All fields required`, or `Sex must be 'M' or 'F'`
pub async fn create_patient_handler<S>(
    State(state): State<AppState<S>>,
    FormFields(form): FormFields<PatientForm>,
) -> RestResult<Response>
where
    S: ClinicStorage,
{
    if form.surname.is_empty()
        || form.born_date.is_empty()
        || form.sex.is_empty()
        || form.mpn.is_empty()
    {
        return Err(RestError::bad_request("All fields required"));
    }

    let sex: Sex = form
        .sex
        .parse()
        .map_err(|_| RestError::bad_request("Sex must be 'M' or 'F'"))?;

    debug!(
        surname = %form.surname,
        born_date = %form.born_date,
        sex = %sex,
        "Processing patient create request"
    );

    let patient = Patient {
        surname: form.surname,
        born_date: form.born_date,
        sex,
        mpn: form.mpn,
    };
    let id = store_record(state.storage(), &patient).await?;

    Ok(created_message(id, &patient.surname).into_response())
}
