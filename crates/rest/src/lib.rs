//! # clinic-rest - Clinic Registry HTTP API
//!
//! This crate exposes the clinic registry over HTTP: hospitals, doctors,
//! patients, diagnoses and the doctor-patient relationship, plus entity and
//! usage analytics.
//!
//! ## Features
//!
//! - **Form submissions**: every create endpoint accepts
//!   `application/x-www-form-urlencoded` bodies and answers in plain text
//! - **JSON listings**: every list endpoint answers with JSON
//! - **Usage accounting**: every request is counted in the store
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use clinic_rest::{create_app_with_config, ServerConfig};
//! use clinic_persistence::backends::redis::{RedisBackend, RedisConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = RedisBackend::connect(RedisConfig::default()).await?;
//!     backend.initialize().await?;
//!
//!     let config = ServerConfig::default();
//!     let app = create_app_with_config(backend, config);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8888").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Method | URL | Description |
//! |--------|-----|-------------|
//! | GET | `/` | Endpoint listing |
//! | GET, POST | `/hospital` | List or create hospitals |
//! | GET, POST | `/doctor` | List or create doctors |
//! | GET, POST | `/patient` | List or create patients |
//! | GET, POST | `/diagnosis` | List or create diagnoses |
//! | GET, POST | `/doctor-patient` | List or create links |
//! | GET | `/analytics/entities` | Entity counts |
//! | GET | `/analytics/usage` | Request usage |
//! | GET | `/health` | Health check |
//!
//! ## Error Handling
//!
//! Errors are returned as plain text; see [`error`] for the status mapping.
//!
//! ## Architecture
//!
//! - [`error`] - Error types and their HTTP mapping
//! - [`config`] - Server configuration
//! - [`state`] - Application state (storage, configuration)
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request accounting
//! - [`extractors`] - Form extraction
//! - [`responses`] - Response building
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod responses;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit};
use clinic_persistence::core::ClinicStorage;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: ClinicStorage + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// This function sets up every route together with tracing, the request
/// timeout, the body size limit and, if enabled, CORS.
///
/// # Example
///
/// ```rust
/// use clinic_persistence::backends::memory::MemoryBackend;
/// use clinic_rest::{ServerConfig, create_app_with_config};
///
/// let config = ServerConfig {
///     enable_cors: true,
///     ..ServerConfig::for_testing()
/// };
/// let app = create_app_with_config(MemoryBackend::new(), config);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: ClinicStorage + 'static,
{
    info!(
        "Creating clinic API server with backend: {}",
        storage.name()
    );

    let state = AppState::new(Arc::new(storage), config.clone());
    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let router = router.layer(DefaultBodyLimit::max(config.max_body_size));

    // Add CORS if enabled
    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    // Apply remaining middleware
    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_origins == "*" {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "clinic={level},clinic_rest={level},clinic_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
