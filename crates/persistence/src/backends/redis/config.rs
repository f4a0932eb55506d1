use serde::{Deserialize, Serialize};

/// Configuration for the Redis backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedisConfig {
    /// Server host name.
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Logical database index.
    #[serde(default)]
    pub db: i64,

    /// Optional prefix applied to every key.
    #[serde(default)]
    pub key_prefix: Option<String>,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    6379
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            db: 0,
            key_prefix: None,
        }
    }
}

impl RedisConfig {
    /// Creates a configuration for the given server, using database 0.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// Sets the key prefix.
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    /// Returns the connection URL.
    pub fn url(&self) -> String {
        format!("redis://{}:{}/{}", self.host, self.port, self.db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        assert_eq!(RedisConfig::default().url(), "redis://localhost:6379/0");
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: RedisConfig = serde_json::from_str(r#"{"port": 6380}"#).unwrap();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 6380);
        assert_eq!(config.db, 0);
        assert!(config.key_prefix.is_none());
    }

    #[test]
    fn test_builder() {
        let config = RedisConfig::new("cache", 7000).with_key_prefix("staging");
        assert_eq!(config.url(), "redis://cache:7000/0");
        assert_eq!(config.key_prefix.as_deref(), Some("staging"));
    }
}
