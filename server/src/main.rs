mod config;
mod error;
mod routes;
mod state;

use crate::config::ServerConfig;
use crate::error::StartupError;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env().inspect_err(|e| tracing::error!(error = %e, "invalid configuration"))?;
    let state = state::AppState::new(&config.upstream_url, config.timeouts)?;

    let app = routes::app(state)?;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .map_err(StartupError::Bind)?;

    tracing::info!(port = config.port, upstream = %config.upstream_url, "smartspend listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
