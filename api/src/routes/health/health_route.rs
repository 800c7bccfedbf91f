//! GET /health: liveness plus gateway status.

use std::sync::Arc;

use ai_llm_service::health_service::HealthStatus;
use axum::{extract::State, http::StatusCode, response::Response};
use serde::Serialize;

use crate::core::{app_state::AppState, http::response_envelope::ApiResponse};

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// Always `"ok"` while the process serves requests.
    pub status: &'static str,
    /// `false` means every explain request is answered with the mock.
    pub credential_configured: bool,
    pub llm: HealthStatus,
}

/// Handler: GET /health
///
/// Probes the provider only when a credential is configured. Never fails.
pub async fn health(State(state): State<Arc<AppState>>) -> Response {
    let credentials = &state.explainer.config().credentials;
    let llm = state
        .health
        .check(&state.llm_config, credentials.resolve())
        .await;

    ApiResponse::success(HealthReport {
        status: "ok",
        credential_configured: credentials.is_configured(),
        llm,
    })
    .into_response_with_status(StatusCode::OK)
}
