//! Hospital handlers.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use clinic_persistence::core::ClinicStorage;
use clinic_persistence::types::{EntityType, Hospital};
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::FormFields;
use crate::extractors::forms::HospitalForm;
use crate::handlers::create::store_record;
use crate::responses::{created_message, records_response};
use crate::state::AppState;

/// Lists every hospital.
///
/// # HTTP Request
///
/// `GET [base]/hospital`
pub async fn list_hospitals_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: ClinicStorage,
{
    debug!("Listing hospitals");
    let records = state.storage().scan_all(EntityType::Hospital).await?;
    Ok(records_response(records))
}

/// Creates a hospital.
///
/// # HTTP Request
///
/// `POST [base]/hospital` with form fields `name`, `address`, `beds_number`
/// and `phone`.
///
/// # Response
///
/// - `200 OK` - `OK: ID {id} for {name}`
/// - `400 Bad Request` - `Hospital name and address required`
pub async fn create_hospital_handler<S>(
    State(state): State<AppState<S>>,
    FormFields(form): FormFields<HospitalForm>,
) -> RestResult<Response>
where
    S: ClinicStorage,
{
    if form.name.is_empty() || form.address.is_empty() {
        return Err(RestError::bad_request("Hospital name and address required"));
    }

    debug!(
        name = %form.name,
        address = %form.address,
        beds_number = %form.beds_number,
        phone = %form.phone,
        "Processing hospital create request"
    );

    let hospital = Hospital {
        name: form.name,
        address: form.address,
        phone: form.phone,
        beds_number: form.beds_number,
    };
    let id = store_record(state.storage(), &hospital).await?;

    Ok(created_message(id, &hospital.name).into_response())
}
