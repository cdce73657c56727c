mod config;
mod error;
mod routes;
mod state;

use std::process::ExitCode;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::config::ConsoleConfig;
use crate::error::StartupError;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "campus-console failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = ConsoleConfig::from_env()?;
    let state = state::AppState::new(&config)?;

    let app = routes::app(state).map_err(StartupError::Leptos)?.layer(TraceLayer::new_for_http());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .map_err(|source| StartupError::Bind { port: config.port, source })?;

    tracing::info!(port = config.port, backend = %config.backend_url, "campus-console listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
