//! HTTP middleware for the clinic registry API.
//!
//! - [`usage`] - Request accounting for the usage analytics

pub mod usage;

pub use usage::usage_middleware;
