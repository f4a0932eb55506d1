//! HTTP request handlers.
//!
//! - [`index`] - Endpoint listing
//! - [`hospital`], [`doctor`], [`patient`], [`diagnosis`] - List and create entities
//! - [`doctor_patient`] - List and create doctor-patient links
//! - [`analytics`] - Entity counts and request usage
//! - [`health`] - Health check endpoint
//! - [`create`] - Shared create flow

pub mod analytics;
pub mod create;
pub mod diagnosis;
pub mod doctor;
pub mod doctor_patient;
pub mod health;
pub mod hospital;
pub mod index;
pub mod patient;

// Re-export handlers for convenience
pub use analytics::{entities_handler, usage_handler};
pub use diagnosis::{create_diagnosis_handler, list_diagnoses_handler};
pub use doctor::{create_doctor_handler, list_doctors_handler};
pub use doctor_patient::{create_link_handler, list_links_handler};
pub use health::health_handler;
pub use hospital::{create_hospital_handler, list_hospitals_handler};
pub use index::index_handler;
pub use patient::{create_patient_handler, list_patients_handler};
