//! Application state for the clinic registry API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the storage backend and the server configuration.

use std::sync::Arc;

use clinic_persistence::core::ClinicStorage;

use crate::config::ServerConfig;

/// Shared application state for the API.
///
/// # Type Parameters
///
/// * `S` - The storage backend type (must implement [`ClinicStorage`])
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use clinic_persistence::backends::memory::MemoryBackend;
/// use clinic_rest::{AppState, ServerConfig};
///
/// let state = AppState::new(Arc::new(MemoryBackend::new()), ServerConfig::for_testing());
/// assert_eq!(state.config().port, 0);
/// ```
pub struct AppState<S> {
    /// The storage backend.
    storage: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: ClinicStorage> AppState<S> {
    /// Creates a new AppState with the given storage and configuration.
    pub fn new(storage: Arc<S>, config: ServerConfig) -> Self {
        Self {
            storage,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinic_persistence::backends::memory::MemoryBackend;

    #[test]
    fn test_clone_shares_storage() {
        let state = AppState::new(Arc::new(MemoryBackend::new()), ServerConfig::default());
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.storage, &cloned.storage));
        assert_eq!(cloned.config().port, 8888);
    }
}
