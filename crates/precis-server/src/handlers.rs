//! HTTP request handlers for the summarization service.
//!
//! Implements the summarize and health check endpoints using axum.

use crate::gateway::SummaryGateway;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use precis_domain::{validate_text, SummarizeError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, warn};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Gateway owning the LLM backend
    pub gateway: Arc<SummaryGateway>,
}

/// Successful summarization response
#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
    /// Five bullet lines, passed through from the model unmodified
    pub summary: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall status
    pub status: String,
    /// Whether an upstream credential is configured
    pub configured: bool,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Application error wrapper
///
/// Maps the closed error taxonomy onto HTTP responses. Every failure is
/// logged server-side here; only the normalized message leaves the process.
#[derive(Debug)]
pub struct AppError(SummarizeError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let message = self.0.to_string();

        if self.0.is_client_error() {
            warn!("Rejected summarize request: {}", message);
        } else {
            error!("Summarize request failed: {}", message);
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<SummarizeError> for AppError {
    fn from(e: SummarizeError) -> Self {
        AppError(e)
    }
}

/// POST /api/summarize - Summarize a block of text
///
/// The body is decoded as untyped JSON so that the validator, not the JSON
/// layer, decides what a malformed request looks like; an undecodable body
/// is the same caller fault as a missing `text` field.
async fn summarize(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SummarizeResponse>, AppError> {
    let Json(body) = payload.map_err(|_| SummarizeError::InvalidInput)?;

    let text = validate_text(&body)?;

    let summary = state.gateway.summarize(text).await?;

    Ok(Json(SummarizeResponse { summary }))
}

/// GET /health - Liveness probe
async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "ok".to_string(),
        configured: state.gateway.is_configured(),
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/api/summarize", post(summarize))
        .route("/health", get(health_check))
        .with_state(state)
}
