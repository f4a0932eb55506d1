//! Core traits for the persistence layer.
//!
//! - [`Backend`] - store metadata, health check and initialisation
//! - [`IdAllocator`] - atomic per-type identifier counters
//! - [`RecordStore`] - field sets under `(entity type, id)` keys
//! - [`RelationshipIndex`] - doctor to patient sets
//! - [`UsageStats`] - request accounting
//!
//! [`ClinicStorage`] bundles all of them and is implemented automatically for
//! any type that implements each trait.

mod allocator;
mod backend;
mod records;
mod relationships;
mod store;
mod usage;

pub use allocator::IdAllocator;
pub use backend::{Backend, BackendKind};
pub use records::{RecordWrite, create_record, list_records, read_record};
pub use relationships::RelationshipIndex;
pub use store::RecordStore;
pub use usage::UsageStats;

/// Everything the HTTP layer needs from a store.
pub trait ClinicStorage: Backend + RecordStore + RelationshipIndex + UsageStats {}

impl<T> ClinicStorage for T where T: Backend + RecordStore + RelationshipIndex + UsageStats {}
