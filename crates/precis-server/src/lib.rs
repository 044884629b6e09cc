//! Precis Server
//!
//! HTTP front end for the summarization pipeline: decodes requests,
//! validates input, and drives the gateway. Each request is independent —
//! no persistence, no shared mutable state, nothing retained once the
//! response is sent.

#![warn(missing_docs)]

pub mod config;
pub mod gateway;
pub mod handlers;

use config::ServerConfig;
use gateway::SummaryGateway;
use handlers::{create_router, AppState};
use precis_llm::GeminiClient;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Build the application state from resolved configuration
///
/// The credential is resolved exactly once, here. When none is found the
/// server still starts: summarize requests fail with a configuration error
/// until an operator provides a key.
pub fn build_state(config: &ServerConfig) -> AppState {
    let gateway = match config.resolve_api_key() {
        Some(api_key) => {
            let client = GeminiClient::with_timeout(
                api_key,
                Duration::from_secs(config.request_timeout_secs),
            );
            SummaryGateway::new(Arc::new(client))
        }
        None => {
            warn!(
                "No API key in config or {}; summarize requests will fail",
                config::API_KEY_ENV_VAR
            );
            SummaryGateway::unconfigured()
        }
    };

    AppState {
        gateway: Arc::new(gateway),
    }
}

/// Start the summarization HTTP server
///
/// Initializes tracing, builds the gateway from configuration, and serves
/// the axum router until the process is stopped.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting precis server");
    info!("Bind address: {}", config.bind_addr());
    info!("Upstream timeout: {} seconds", config.request_timeout_secs);

    let state = build_state(&config);
    let app = create_router(state);

    // Bind and serve
    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}
