//! Index handler.

use axum::{Json, response::IntoResponse};

/// Lists the available endpoints.
///
/// # HTTP Request
///
/// `GET [base]/`
pub async fn index_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "clinic-registry",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "hospital": "/hospital",
            "doctor": "/doctor",
            "patient": "/patient",
            "diagnosis": "/diagnosis",
            "doctor_patient": "/doctor-patient",
            "analytics_entities": "/analytics/entities",
            "analytics_usage": "/analytics/usage",
            "health": "/health"
        }
    }))
}
