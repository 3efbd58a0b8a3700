#![recursion_limit = "256"]

mod config;
mod routes;

use config::{ConfigError, HostConfig};

/// Startup failures surfaced from `main`.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Routes(String),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env loaded");
    }

    let config = HostConfig::from_env()?;
    let app = routes::app().map_err(StartupError::Routes)?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, "newsroom listening");
    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!(error = %e, "server stopped");
        StartupError::Serve(e)
    })
}
