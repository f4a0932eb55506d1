//! Analytics handlers.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use clinic_persistence::core::ClinicStorage;
use clinic_persistence::types::EntityType;
use serde::Serialize;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Body of `GET /analytics/entities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityCounts {
    /// Stored hospitals.
    pub hospitals: u64,
    /// Stored doctors.
    pub doctors: u64,
    /// Stored patients.
    pub patients: u64,
    /// Stored diagnoses.
    pub diagnoses: u64,
    /// Doctors with at least one linked patient.
    pub doctor_patient_sets: u64,
    /// Total doctor-patient links.
    pub doctor_patient_links: u64,
}

/// Body of `GET /analytics/usage`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageReport {
    /// Unix time of the first recorded request (now, if none yet).
    pub start_ts: i64,
    /// Unix time of this report.
    pub now_ts: i64,
    /// Seconds since `start_ts`, at least 1.
    pub uptime_seconds: i64,
    /// Requests recorded so far.
    pub total_requests: u64,
    /// Average requests per second over the uptime.
    pub avg_rps: f64,
    /// Average requests per minute over the uptime.
    pub avg_rpm: f64,
}

/// Counts stored entities and links.
///
/// # HTTP Request
///
/// `GET [base]/analytics/entities`
pub async fn entities_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: ClinicStorage,
{
    debug!("Processing entity analytics request");

    let storage = state.storage();
    let (doctor_patient_sets, doctor_patient_links) = storage.link_counts().await?;
    let counts = EntityCounts {
        hospitals: storage.count(EntityType::Hospital).await?,
        doctors: storage.count(EntityType::Doctor).await?,
        patients: storage.count(EntityType::Patient).await?,
        diagnoses: storage.count(EntityType::Diagnosis).await?,
        doctor_patient_sets,
        doctor_patient_links,
    };

    Ok(Json(counts).into_response())
}

/// Reports request counters.
///
/// # HTTP Request
///
/// `GET [base]/analytics/usage`
pub async fn usage_handler<S>(State(state): State<AppState<S>>) -> RestResult<Response>
where
    S: ClinicStorage,
{
    debug!("Processing usage analytics request");

    let usage = state.storage().usage().await?;
    let now_ts = chrono::Utc::now().timestamp();
    let avg_rps = usage.avg_rps(now_ts);

    let report = UsageReport {
        start_ts: usage.start_ts.unwrap_or(now_ts),
        now_ts,
        uptime_seconds: usage.uptime_seconds(now_ts),
        total_requests: usage.total_requests,
        avg_rps,
        avg_rpm: avg_rps * 60.0,
    };

    Ok(Json(report).into_response())
}
