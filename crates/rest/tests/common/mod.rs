//! Common test utilities for API testing.
//!
//! - [`harness`] - Test server over an in-memory backend
//! - [`failing`] - A storage double whose every call fails

#![allow(dead_code)]

pub mod failing;
pub mod harness;
