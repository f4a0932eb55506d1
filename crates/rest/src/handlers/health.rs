//! Health check endpoint handler.
//!
//! Provides a simple health check endpoint for monitoring and load balancers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use clinic_persistence::core::ClinicStorage;
use tracing::{debug, warn};

use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// # HTTP Request
///
/// `GET [base]/health`
///
/// # Response
///
/// - `200 OK` - The store answered its health check
/// - `503 Service Unavailable` - The store is unreachable
pub async fn health_handler<S>(State(state): State<AppState<S>>) -> Response
where
    S: ClinicStorage,
{
    debug!("Processing health check request");

    let storage = state.storage();
    let backend_name = storage.name();

    match storage.health_check().await {
        Ok(()) => {
            let body = serde_json::json!({
                "status": "healthy",
                "backend": backend_name,
                "timestamp": chrono::Utc::now().to_rfc3339()
            });
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => {
            warn!(backend = backend_name, error = %err, "Health check failed");
            let body = serde_json::json!({
                "status": "unhealthy",
                "backend": backend_name,
                "error": err.to_string()
            });
            (StatusCode::SERVICE_UNAVAILABLE, Json(body)).into_response()
        }
    }
}
