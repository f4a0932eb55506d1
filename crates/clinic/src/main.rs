//! Clinic registry server.
//!
//! Serves the clinic registry API over a Redis store.

use clap::Parser;
use clinic_rest::{ServerConfig, create_app_with_config, init_logging};
use tracing::info;

#[cfg(feature = "redis")]
use clinic_persistence::backends::redis::RedisBackend;
#[cfg(feature = "redis")]
use clinic_persistence::core::Backend;

/// Connects to Redis and prepares the keyspace.
#[cfg(feature = "redis")]
async fn create_redis_backend(config: &ServerConfig) -> anyhow::Result<RedisBackend> {
    let backend = RedisBackend::connect(config.redis_config()).await?;
    info!(
        url = %backend.config().url(),
        key_prefix = ?backend.config().key_prefix,
        "Connected to Redis"
    );
    backend.initialize().await?;

    Ok(backend)
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        redis_host = %config.redis_host,
        redis_port = config.redis_port,
        "Starting clinic registry"
    );

    start(config).await
}

#[cfg(feature = "redis")]
async fn start(config: ServerConfig) -> anyhow::Result<()> {
    let backend = create_redis_backend(&config).await?;
    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}

/// Fallback when the redis feature is not enabled.
#[cfg(not(feature = "redis"))]
async fn start(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The server requires the 'redis' feature. \
         Build with: cargo build -p clinic --features redis"
    )
}
