use std::{env, sync::Arc};

mod core;
mod error_handler;
mod routes;

#[cfg(test)]
mod test_support;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tokio::signal;
use tracing::{error, info};

pub use crate::core::app_state::AppState;
pub use crate::error_handler::{AppError, AppResult};
pub use crate::routes::explain::explain_route::EXPLAIN_SOURCE_HEADER;

use crate::routes::{explain::explain_route::explain_code, health::health_route::health};

/// Builds the HTTP router over shared state.
///
/// `/api/explain` has no body limit: any snippet size gets an explanation.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/explain",
            post(explain_code).layer(DefaultBodyLimit::disable()),
        )
        .route("/health", get(health))
        .with_state(state)
}

/// Loads state from the environment and serves until Ctrl+C.
///
/// # Errors
/// [`AppError`] for missing/invalid configuration or listener failures.
pub async fn start() -> AppResult<()> {
    let host_url = env::var("API_ADDRESS").map_err(|_| AppError::MissingEnv("API_ADDRESS"))?;

    let state = Arc::new(AppState::from_env()?);
    let explain_cfg = state.explainer.config();
    info!(
        model = %state.llm_config.model,
        endpoint = %state.llm_config.endpoint,
        credential_configured = explain_cfg.credentials.is_configured(),
        invalid_request_policy = ?explain_cfg.invalid_request_policy,
        "explain service configured"
    );

    // Bind to address
    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;
    info!(address = %host_url, "listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("server stopped");
    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
