//! Clinic route configuration.
//!
//! Defines all routes for the clinic registry API.

use axum::{Router, middleware, routing::get};
use clinic_persistence::core::ClinicStorage;

use crate::handlers;
use crate::middleware::usage_middleware;
use crate::state::AppState;

/// Creates all API routes.
///
/// # Routes
///
/// - `GET /` - Endpoint listing
/// - `GET|POST /hospital` - List or create hospitals
/// - `GET|POST /doctor` - List or create doctors
/// - `GET|POST /patient` - List or create patients
/// - `GET|POST /diagnosis` - List or create diagnoses
/// - `GET|POST /doctor-patient` - List or create doctor-patient links
/// - `GET /analytics/entities` - Entity counts
/// - `GET /analytics/usage` - Request usage
/// - `GET /health` - Health check
///
/// Every request is counted by [`usage_middleware`].
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: ClinicStorage + 'static,
{
    Router::new()
        .route("/", get(handlers::index_handler))
        // Entity routes
        .route(
            "/hospital",
            get(handlers::list_hospitals_handler::<S>)
                .post(handlers::create_hospital_handler::<S>),
        )
        .route(
            "/doctor",
            get(handlers::list_doctors_handler::<S>).post(handlers::create_doctor_handler::<S>),
        )
        .route(
            "/patient",
            get(handlers::list_patients_handler::<S>)
                .post(handlers::create_patient_handler::<S>),
        )
        .route(
            "/diagnosis",
            get(handlers::list_diagnoses_handler::<S>)
                .post(handlers::create_diagnosis_handler::<S>),
        )
        .route(
            "/doctor-patient",
            get(handlers::list_links_handler::<S>).post(handlers::create_link_handler::<S>),
        )
        // Analytics routes
        .route("/analytics/entities", get(handlers::entities_handler::<S>))
        .route("/analytics/usage", get(handlers::usage_handler::<S>))
        .route("/health", get(handlers::health_handler::<S>))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            usage_middleware::<S>,
        ))
        // State
        .with_state(state)
}
