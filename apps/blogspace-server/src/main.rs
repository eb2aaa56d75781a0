//! # BlogSpace Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::net::TcpListener;

use blogspace_server::config::AppConfig;
use blogspace_server::state::AppState;
use blogspace_server::telemetry::{TelemetryConfig, init_telemetry};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();
    tracing::info!(
        "Starting BlogSpace API on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::in_memory();
    let listener = TcpListener::bind((config.host.as_str(), config.port))?;

    blogspace_server::run(listener, state)?.await?;
    Ok(())
}
