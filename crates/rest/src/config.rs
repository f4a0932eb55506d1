//! Server configuration for the clinic registry API.
//!
//! This module provides configuration types for the server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PORT` | 8888 | Server port |
//! | `HOST` | 127.0.0.1 | Host to bind |
//! | `REDIS_HOST` | localhost | Redis host |
//! | `REDIS_PORT` | 6379 | Redis port |
//! | `REDIS_DB` | 0 | Redis database index |
//! | `CLINIC_KEY_PREFIX` | (none) | Prefix for every stored key |
//! | `CLINIC_LOG_LEVEL` | info | Log level |
//! | `CLINIC_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `CLINIC_MAX_BODY_SIZE` | 1048576 | Max request body (bytes) |
//! | `CLINIC_ENABLE_CORS` | false | Enable CORS |
//! | `CLINIC_CORS_ORIGINS` | * | Allowed origins |
//!
//! # Example
//!
//! ```rust
//! use clinic_rest::ServerConfig;
//!
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     ..Default::default()
//! };
//! assert_eq!(config.socket_addr(), "0.0.0.0:3000");
//! ```

use clap::Parser;
#[cfg(feature = "redis")]
use clinic_persistence::backends::redis::RedisConfig;

/// Server configuration for the clinic registry API.
///
/// This struct can be constructed from command line arguments and environment
/// variables using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "clinic")]
#[command(about = "Clinic registry server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "PORT", default_value = "8888")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Redis server host.
    #[arg(long, env = "REDIS_HOST", default_value = "localhost")]
    pub redis_host: String,

    /// Redis server port.
    #[arg(long, env = "REDIS_PORT", default_value = "6379")]
    pub redis_port: u16,

    /// Redis logical database index.
    #[arg(long, env = "REDIS_DB", default_value = "0")]
    pub redis_db: i64,

    /// Prefix applied to every stored key.
    #[arg(long, env = "CLINIC_KEY_PREFIX")]
    pub key_prefix: Option<String>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "CLINIC_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "CLINIC_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Maximum request body size in bytes.
    #[arg(long, env = "CLINIC_MAX_BODY_SIZE", default_value = "1048576")]
    pub max_body_size: usize,

    /// Enable CORS.
    #[arg(long, env = "CLINIC_ENABLE_CORS", default_value = "false")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "CLINIC_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8888,
            host: "127.0.0.1".to_string(),
            redis_host: "localhost".to_string(),
            redis_port: 6379,
            redis_db: 0,
            key_prefix: None,
            log_level: "info".to_string(),
            request_timeout: 30,
            max_body_size: 1024 * 1024, // 1MB
            enable_cors: false,
            cors_origins: "*".to_string(),
        }
    }
}

impl ServerConfig {
    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Builds the Redis backend configuration.
    #[cfg(feature = "redis")]
    pub fn redis_config(&self) -> RedisConfig {
        let config = RedisConfig {
            db: self.redis_db,
            ..RedisConfig::new(self.redis_host.clone(), self.redis_port)
        };
        match &self.key_prefix {
            Some(prefix) => config.with_key_prefix(prefix.clone()),
            None => config,
        }
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.redis_host.trim().is_empty() {
            errors.push("Redis host cannot be empty".to_string());
        }

        if self.redis_port == 0 {
            errors.push("Redis port cannot be 0".to_string());
        }

        if self.redis_db < 0 {
            errors.push("Redis database index cannot be negative".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0 and disables features that might interfere
    /// with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            log_level: "debug".to_string(),
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8888);
        assert_eq!(config.host, "127.0.0.1");
        assert!(!config.enable_cors);
        assert!(config.key_prefix.is_none());
    }

    #[test]
    fn test_parse_matches_defaults() {
        let config = ServerConfig::try_parse_from(["clinic", "--port", "9000"]).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.request_timeout, 30);
        assert_eq!(config.max_body_size, ServerConfig::default().max_body_size);
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            port: 3000,
            host: "0.0.0.0".to_string(),
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }

    #[cfg(feature = "redis")]
    #[test]
    fn test_redis_config() {
        let config = ServerConfig {
            redis_host: "cache".to_string(),
            redis_port: 6380,
            redis_db: 3,
            key_prefix: Some("staging".to_string()),
            ..Default::default()
        };
        let redis = config.redis_config();
        assert_eq!(redis.url(), "redis://cache:6380/3");
        assert_eq!(redis.key_prefix.as_deref(), Some("staging"));

        let redis = ServerConfig::default().redis_config();
        assert_eq!(redis.url(), "redis://localhost:6379/0");
        assert!(redis.key_prefix.is_none());
    }

    #[test]
    fn test_validate_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_invalid_port() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().iter().any(|e| e.contains("Port")));
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = ServerConfig {
            redis_host: " ".to_string(),
            redis_db: -1,
            request_timeout: 0,
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap_err().len(), 3);
    }

    #[test]
    fn test_for_testing() {
        let config = ServerConfig::for_testing();
        assert_eq!(config.port, 0);
        assert!(!config.enable_cors);
        assert_eq!(config.request_timeout, 5);
    }
}
