//! Axum extractors for form submissions.
//!
//! - [`FormFields`] - Extract a form body, tolerating missing fields
//! - [`forms`] - The field set accepted by each create endpoint

mod form;
pub mod forms;

pub use form::FormFields;
