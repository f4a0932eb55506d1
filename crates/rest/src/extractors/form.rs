//! Form body extractor.
//!
//! Extracts `application/x-www-form-urlencoded` bodies into a struct whose
//! fields all default to the empty string.

use axum::extract::{Form, FromRequest, Request, rejection::FormRejection};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::RestError;

/// Axum extractor for form submissions.
///
/// A request without a form content type yields `T::default()`, so every
/// field reads as missing and the handler answers with its own validation
/// message. When a key is repeated the last value wins. Malformed form
/// bodies are rejected with 400.
///
/// # Example
///
/// ```rust,ignore
/// use clinic_rest::extractors::FormFields;
/// use clinic_rest::extractors::forms::HospitalForm;
///
/// async fn create_hospital(FormFields(form): FormFields<HospitalForm>) {
///     println!("{}", form.name);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FormFields<T>(pub T);

impl<S, T> FromRequest<S> for FormFields<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = RestError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = match Form::<Vec<(String, String)>>::from_request(req, state).await {
            Ok(Form(pairs)) => pairs,
            Err(FormRejection::InvalidFormContentType(_)) => return Ok(FormFields(T::default())),
            Err(rejection) => return Err(RestError::bad_request(rejection.body_text())),
        };

        let fields: Map<String, Value> = pairs
            .into_iter()
            .map(|(name, value)| (name, Value::String(value)))
            .collect();

        serde_json::from_value(Value::Object(fields))
            .map(FormFields)
            .map_err(|e| RestError::bad_request(format!("Failed to read form fields: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;

    use crate::extractors::forms::HospitalForm;

    fn form_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/hospital")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_repeated_key_takes_last_value() {
        let request = form_request("name=A&address=Main+St&name=B");
        let FormFields(form) = FormFields::<HospitalForm>::from_request(request, &())
            .await
            .unwrap();
        assert_eq!(form.name, "B");
        assert_eq!(form.address, "Main St");
        assert_eq!(form.phone, "");
    }

    #[tokio::test]
    async fn test_missing_content_type_yields_defaults() {
        let request = Request::builder()
            .method("POST")
            .uri("/hospital")
            .body(Body::empty())
            .unwrap();
        let FormFields(form) = FormFields::<HospitalForm>::from_request(request, &())
            .await
            .unwrap();
        assert!(form.name.is_empty());
    }
}
