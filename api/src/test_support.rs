//! In-process router fixtures for route tests.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use ai_llm_service::{
    AiLlmError, ApiCredentials, GenerateRequest, TextGenerator,
    config::default_config::{DEFAULT_GEMINI_ENDPOINT, gemini_config},
    health_service::HealthService,
};
use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use explainer::{ExplainConfig, ExplainService, InvalidRequestPolicy};
use serde_json::Value;

use crate::{AppState, build_router};

/// Gateway double answering every call with the same text.
pub struct CannedGateway {
    text: String,
    calls: AtomicUsize,
}

impl CannedGateway {
    pub fn new(text: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            text: text.into(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for CannedGateway {
    fn name(&self) -> &'static str {
        "canned"
    }

    async fn generate(&self, _req: GenerateRequest<'_>) -> Result<String, AiLlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.text.clone())
    }
}

pub fn router(
    credentials: ApiCredentials,
    policy: InvalidRequestPolicy,
    gateway: Arc<CannedGateway>,
) -> Router {
    let llm_config = gemini_config(DEFAULT_GEMINI_ENDPOINT, "gemini-test", Some(5), None).unwrap();
    let mut cfg = ExplainConfig::new(credentials, llm_config.model.clone());
    cfg.invalid_request_policy = policy;

    let state = AppState::new(
        ExplainService::new(cfg, gateway),
        HealthService::new(Some(1)).unwrap(),
        llm_config,
    );
    build_router(Arc::new(state))
}

pub fn post_json(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn body_json(res: Response<Body>) -> Value {
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
