//! Core types for the persistence layer.
//!
//! - [`EntityType`], [`FieldSet`] - entity kinds and their raw stored form
//! - [`Hospital`], [`Doctor`], [`Patient`], [`Diagnosis`] - typed records
//! - [`PatientSet`], [`DoctorPatientLink`] - relationship index types
//! - [`UsageSnapshot`] - request accounting
//!
//! # Examples
//!
//! ```
//! use clinic_persistence::types::{EntityRecord, Patient, Sex};
//!
//! let patient = Patient {
//!     surname: "Doe".to_string(),
//!     born_date: "1990-01-01".to_string(),
//!     sex: Sex::F,
//!     mpn: "mpn-1".to_string(),
//! };
//!
//! let fields = patient.to_fields();
//! assert_eq!(fields["sex"], "F");
//! assert_eq!(Patient::from_fields(1, &fields).unwrap(), patient);
//! ```

mod entity;
mod links;
mod records;
mod usage;

pub use entity::{EntityType, FieldSet, UnknownEntityType};
pub use links::{DoctorPatientLink, PatientSet};
pub use records::{Diagnosis, Doctor, EntityRecord, Hospital, Patient, Sex};
pub use usage::UsageSnapshot;
