//! In-process backend.
//!
//! [`MemoryBackend`] keeps every counter, record and relationship set behind
//! a single mutex, so each operation is atomic with respect to the others.
//! Clones share the same state. Nothing survives the process.
//!
//! # Example
//!
//! ```
//! use clinic_persistence::backends::memory::MemoryBackend;
//! use clinic_persistence::core::{IdAllocator, RelationshipIndex};
//! use clinic_persistence::types::EntityType;
//!
//! # tokio_test::block_on(async {
//! let backend = MemoryBackend::new();
//! assert_eq!(backend.next_id(EntityType::Doctor).await?, 1);
//! assert_eq!(backend.next_id(EntityType::Doctor).await?, 2);
//!
//! backend.link(1, 10).await?;
//! backend.link(1, 10).await?;
//! assert_eq!(backend.members(1).await?.len(), 1);
//! # Ok::<(), clinic_persistence::StorageError>(())
//! # }).unwrap();
//! ```

mod backend;

pub use backend::MemoryBackend;
