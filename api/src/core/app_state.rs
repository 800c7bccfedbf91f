use std::sync::Arc;

use ai_llm_service::{
    LlmModelConfig, config::default_config::config_gemini, health_service::HealthService,
    services::gemini_service::GeminiService,
};
use explainer::{ExplainConfig, ExplainService, InvalidRequestPolicy};

use crate::error_handler::AppResult;

/// Timeout for the `/health` provider probe, seconds.
const HEALTH_TIMEOUT_SECS: u64 = 10;

/// Shared state for all HTTP handlers.
pub struct AppState {
    /// The explain pipeline, with its gateway and credentials.
    pub explainer: ExplainService,
    /// Provider probe behind `/health`.
    pub health: HealthService,
    /// Gateway config, reported by `/health`.
    pub llm_config: LlmModelConfig,
}

impl AppState {
    pub fn new(explainer: ExplainService, health: HealthService, llm_config: LlmModelConfig) -> Self {
        Self {
            explainer,
            health,
            llm_config,
        }
    }

    /// Load shared state from environment variables.
    ///
    /// Missing credentials are not an error: the service then answers every
    /// request with the mock explanation.
    pub fn from_env() -> AppResult<Self> {
        let llm_config = config_gemini()?;
        let explain_cfg = ExplainConfig::from_env(llm_config.model.clone())?;
        let gateway = Arc::new(GeminiService::new(llm_config.clone())?);
        let health = HealthService::new(Some(HEALTH_TIMEOUT_SECS))?;

        Ok(Self::new(
            ExplainService::new(explain_cfg, gateway),
            health,
            llm_config,
        ))
    }

    pub fn invalid_request_policy(&self) -> InvalidRequestPolicy {
        self.explainer.config().invalid_request_policy
    }
}
