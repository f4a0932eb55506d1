//! API test harness.
//!
//! Provides a test server over a [`MemoryBackend`] that tests can seed and
//! inspect directly.

use axum_test::{TestResponse, TestServer};
use clinic_persistence::backends::memory::MemoryBackend;
use clinic_rest::{ServerConfig, create_app_with_config};

/// Test harness for API testing.
///
/// # Example
///
/// ```rust,ignore
/// let harness = ClinicTestHarness::new();
/// let response = harness.post_form("/hospital", &[("name", "City"), ("address", "Main St")]).await;
/// response.assert_status_ok();
/// ```
pub struct ClinicTestHarness {
    /// The test server instance.
    pub server: TestServer,

    /// The storage backend, sharing state with the server.
    pub backend: MemoryBackend,
}

impl ClinicTestHarness {
    /// Creates a harness with an empty backend.
    pub fn new() -> Self {
        Self::with_backend(MemoryBackend::new())
    }

    /// Creates a harness over an existing backend.
    pub fn with_backend(backend: MemoryBackend) -> Self {
        let app = create_app_with_config(backend.clone(), ServerConfig::for_testing());
        let server = TestServer::new(app).expect("Failed to create test server");
        Self { server, backend }
    }

    /// Sends a GET request.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.server.get(path).await
    }

    /// Sends a form-encoded POST request.
    pub async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> TestResponse {
        self.server.post(path).form(&fields).await
    }

    /// Creates a hospital and returns its id.
    pub async fn seed_hospital(&self, name: &str) -> u64 {
        let response = self
            .post_form(
                "/hospital",
                &[
                    ("name", name),
                    ("address", "1 Main St"),
                    ("phone", "555-0100"),
                    ("beds_number", "50"),
                ],
            )
            .await;
        response.assert_status_ok();
        parse_created_id(&response.text())
    }

    /// Creates a doctor without a hospital and returns its id.
    pub async fn seed_doctor(&self, surname: &str) -> u64 {
        let response = self
            .post_form(
                "/doctor",
                &[("surname", surname), ("profession", "surgeon")],
            )
            .await;
        response.assert_status_ok();
        parse_created_id(&response.text())
    }

    /// Creates a patient and returns its id.
    pub async fn seed_patient(&self, surname: &str) -> u64 {
        let response = self
            .post_form(
                "/patient",
                &[
                    ("surname", surname),
                    ("born_date", "1990-01-01"),
                    ("sex", "F"),
                    ("mpn", "mpn-1"),
                ],
            )
            .await;
        response.assert_status_ok();
        parse_created_id(&response.text())
    }
}

/// Extracts the id from an `OK: ID {id} for ...` body.
pub fn parse_created_id(body: &str) -> u64 {
    body.strip_prefix("OK: ID ")
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|id| id.parse().ok())
        .unwrap_or_else(|| panic!("unexpected create response: {:?}", body))
}
