//! Request accounting middleware.
//!
//! Records every request in the store before it is handled. Recording is
//! best-effort: a failure is logged at debug level and the request proceeds.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use clinic_persistence::core::ClinicStorage;
use tracing::debug;

use crate::state::AppState;

/// Middleware function for request accounting.
///
/// This is used with `axum::middleware::from_fn_with_state`.
pub async fn usage_middleware<S>(
    State(state): State<AppState<S>>,
    request: Request,
    next: Next,
) -> Response
where
    S: ClinicStorage,
{
    let now_ts = chrono::Utc::now().timestamp();
    if let Err(err) = state.storage().record_request(now_ts).await {
        debug!(error = %err, "Failed to record request");
    }

    next.run(request).await
}
