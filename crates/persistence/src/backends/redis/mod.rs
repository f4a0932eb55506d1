//! Redis backend implementation.
//!
//! Records are hashes, relationships are sets and identifiers come from
//! `INCR`, so every allocation is atomic on the server. See
//! [`crate::keyspace`] for the key layout.
//!
//! # Example
//!
//! ```no_run
//! use clinic_persistence::backends::redis::{RedisBackend, RedisConfig};
//! use clinic_persistence::core::Backend;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = RedisBackend::connect(RedisConfig::new("localhost", 6379)).await?;
//! backend.initialize().await?;
//! # Ok(())
//! # }
//! ```

mod backend;
mod config;

pub use backend::RedisBackend;
pub use config::RedisConfig;
