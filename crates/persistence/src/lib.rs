//! Clinic Registry Persistence Layer
//!
//! This crate stores hospitals, doctors, patients and diagnoses as flat field
//! sets in a key-value store, allocates their identifiers atomically, and
//! keeps the set of patients under each doctor.
//!
//! # Features
//!
//! - **Atomic identifiers**: per-type counters that never issue the same id twice
//! - **Flat records**: each entity is one hash of string fields
//! - **Set relationships**: doctor to patient links with idempotent insertion
//! - **Usage accounting**: request counters for the analytics endpoints
//!
//! # Backend Features
//!
//! - `redis` (default) - Redis via a multiplexed `ConnectionManager`
//!
//! The in-process [`MemoryBackend`](backends::memory::MemoryBackend) is always
//! available.
//!
//! # Architecture
//!
//! - [`types`] - Entity types, typed records and relationship types
//! - [`error`] - Error types for all operations
//! - [`core`] - Storage traits and typed record helpers
//! - [`keyspace`] - Key layout shared by key-value backends
//! - [`backends`] - Backend implementations
//!
//! # Quick Start
//!
//! ```
//! use clinic_persistence::backends::memory::MemoryBackend;
//! use clinic_persistence::core::{RelationshipIndex, create_record, read_record};
//! use clinic_persistence::types::{Patient, Sex};
//!
//! # tokio_test::block_on(async {
//! let storage = MemoryBackend::new();
//!
//! let patient = Patient {
//!     surname: "Doe".to_string(),
//!     born_date: "1990-01-01".to_string(),
//!     sex: Sex::F,
//!     mpn: "mpn-1".to_string(),
//! };
//! let write = create_record(&storage, &patient).await?;
//! assert_eq!(write.id, 1);
//!
//! let stored: Option<Patient> = read_record(&storage, write.id).await?;
//! assert_eq!(stored, Some(patient));
//!
//! storage.link(1, write.id).await?;
//! assert!(storage.members(1).await?.contains(write.id));
//! # Ok::<(), clinic_persistence::StorageError>(())
//! # }).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod keyspace;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{StorageError, StorageResult};
pub use types::{EntityType, FieldSet};

// Re-export core traits
pub use core::{
    Backend, BackendKind, ClinicStorage, IdAllocator, RecordStore, RelationshipIndex, UsageStats,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
