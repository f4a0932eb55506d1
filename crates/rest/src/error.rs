//! Error types for the clinic registry API.
//!
//! Every error is answered with a plain-text body.
//!
//! # Error Mapping
//!
//! | Error | HTTP Status | Body |
//! |-------|-------------|------|
//! | BadRequest | 400 | the validation message |
//! | StorageUnavailable | 400 | `Redis connection refused` |
//! | IntegrityFailure | 500 | `Something went terribly wrong` |
//! | InternalError | 500 | the error message |
//!
//! Storage errors convert automatically: [`StorageError::Unavailable`] becomes
//! `StorageUnavailable`, everything else becomes `InternalError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use clinic_persistence::error::StorageError;
use std::fmt;

/// Body sent when the store cannot be reached.
pub const STORAGE_UNAVAILABLE_MESSAGE: &str = "Redis connection refused";

/// Body sent when a write did not store the expected fields.
pub const INTEGRITY_FAILURE_MESSAGE: &str = "Something went terribly wrong";

/// The primary error type for API operations.
#[derive(Debug)]
pub enum RestError {
    /// Request failed validation (HTTP 400).
    BadRequest {
        /// Message returned to the client verbatim.
        message: String,
    },

    /// The store could not be reached (HTTP 400).
    StorageUnavailable {
        /// Underlying error, logged but not returned.
        message: String,
    },

    /// A write stored a different number of fields than expected (HTTP 500).
    IntegrityFailure {
        /// Expected field count.
        expected: usize,
        /// Field count the store reported.
        stored: usize,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// Creates a [`RestError::BadRequest`] with the given message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        RestError::BadRequest {
            message: message.into(),
        }
    }

    /// Returns the HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            RestError::BadRequest { .. } | RestError::StorageUnavailable { .. } => {
                StatusCode::BAD_REQUEST
            }
            RestError::IntegrityFailure { .. } | RestError::InternalError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::BadRequest { message } => write!(f, "Bad request: {}", message),
            RestError::StorageUnavailable { message } => {
                write!(f, "Storage unavailable: {}", message)
            }
            RestError::IntegrityFailure { expected, stored } => write!(
                f,
                "Integrity check failed: expected {} fields, stored {}",
                expected, stored
            ),
            RestError::InternalError { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            RestError::BadRequest { message } => message,
            RestError::StorageUnavailable { message } => {
                tracing::warn!(error = %message, "Storage unavailable");
                STORAGE_UNAVAILABLE_MESSAGE.to_string()
            }
            RestError::IntegrityFailure { expected, stored } => {
                tracing::error!(expected, stored, "Stored field count mismatch");
                INTEGRITY_FAILURE_MESSAGE.to_string()
            }
            RestError::InternalError { message } => {
                tracing::error!(error = %message, "Internal error");
                message
            }
        };

        (status, body).into_response()
    }
}

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Unavailable { .. } => RestError::StorageUnavailable {
                message: err.to_string(),
            },
            StorageError::MalformedRecord { .. } | StorageError::Backend { .. } => {
                RestError::InternalError {
                    message: err.to_string(),
                }
            }
        }
    }
}

/// Result type alias for API operations.
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_persistence::types::EntityType;

    #[test]
    fn test_unavailable_maps_to_bad_request() {
        let err: RestError = StorageError::unavailable("redis", "connection refused").into();
        assert!(matches!(err, RestError::StorageUnavailable { .. }));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_malformed_record_maps_to_internal_error() {
        let err: RestError = StorageError::MalformedRecord {
            entity_type: EntityType::Doctor,
            id: 1,
            message: "missing field 'surname'".to_string(),
        }
        .into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("malformed doctor record 1"));
    }

    #[test]
    fn test_integrity_failure_display() {
        let err = RestError::IntegrityFailure {
            expected: 4,
            stored: 5,
        };
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("expected 4 fields, stored 5"));
    }

    #[test]
    fn test_bad_request_display() {
        let err = RestError::bad_request("ID required");
        assert_eq!(err.to_string(), "Bad request: ID required");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
