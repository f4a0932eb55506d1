//! Storage backend implementations.
//!
//! | Backend | Feature | Description |
//! |---------|---------|-------------|
//! | Memory | always | In-process store for development and tests |
//! | Redis | `redis` | Redis server, the production store |
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "redis")]
//! use clinic_persistence::backends::redis::{RedisBackend, RedisConfig};
//!
//! # #[cfg(feature = "redis")]
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RedisConfig::new("localhost", 6379).with_key_prefix("dev");
//! let backend = RedisBackend::connect(config).await?;
//! # Ok(())
//! # }
//! ```

pub mod memory;

#[cfg(feature = "redis")]
pub mod redis;
