//! Health probe for the Gemini backend.
//!
//! - `GET {endpoint}/v1beta/models/{model}` with the API key header
//!   (confirms both the credential and the model id)
//!
//! The returned [`HealthStatus`] is JSON-serializable and suitable for a `/health` endpoint.
//! [`HealthService::check`] is resilient and never fails (errors mapped to `ok=false`).
//! The provider-specific probe (`try_probe_gemini`) returns a strict `Result`.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::llm_model_config::LlmModelConfig;
use crate::error_handler::{AiLlmError, HealthError, make_snippet};
use crate::services::gemini_service::API_KEY_HEADER;

/// A serializable health snapshot for the configured provider.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    /// Backend/provider (e.g., "Gemini").
    pub provider: String,
    /// Target endpoint base URL.
    pub endpoint: String,
    /// Model identifier the probe asked about.
    pub model: String,
    /// Overall health flag.
    pub ok: bool,
    /// Measured HTTP latency in milliseconds for the probe.
    pub latency_ms: u128,
    /// Short human-readable message with details.
    pub message: String,
}

impl HealthStatus {
    fn new(cfg: &LlmModelConfig, ok: bool, latency_ms: u128, message: impl Into<String>) -> Self {
        Self {
            provider: format!("{:?}", cfg.provider),
            endpoint: cfg.endpoint.clone(),
            model: cfg.model.clone(),
            ok,
            latency_ms,
            message: message.into(),
        }
    }
}

/// Health checker that reuses a single HTTP client.
pub struct HealthService {
    client: reqwest::Client,
    default_timeout: Duration,
}

impl HealthService {
    /// Creates a new health service with an optional client timeout (seconds).
    ///
    /// # Errors
    /// Returns [`AiLlmError::HttpTransport`] if the HTTP client cannot be built.
    pub fn new(timeout_secs: Option<u64>) -> Result<Self, AiLlmError> {
        let timeout = Duration::from_secs(timeout_secs.unwrap_or(10));
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        info!(
            default_timeout_secs = timeout.as_secs(),
            "HealthService initialized"
        );

        Ok(Self {
            client,
            default_timeout: timeout,
        })
    }

    /// Checks the configured backend.
    ///
    /// This method is **resilient**: it never returns an error. A missing key
    /// short-circuits to `ok=false` without touching the network.
    pub async fn check(&self, cfg: &LlmModelConfig, api_key: Option<&str>) -> HealthStatus {
        let Some(key) = api_key else {
            return HealthStatus::new(
                cfg,
                false,
                0,
                "no API key configured; serving mock responses",
            );
        };

        let start = Instant::now();
        match self.try_probe_gemini(cfg, key).await {
            Ok(message) => HealthStatus::new(cfg, true, start.elapsed().as_millis(), message),
            Err(e) => {
                warn!(error = %e, model = %cfg.model, "gemini health probe failed");
                HealthStatus::new(cfg, false, start.elapsed().as_millis(), e.to_string())
            }
        }
    }

    /// Probes `GET {endpoint}/v1beta/models/{model}`.
    ///
    /// # Errors
    /// - [`HealthError::InvalidEndpoint`] for an empty or non-http(s) endpoint
    /// - [`HealthError::HttpStatus`] for non-2xx responses
    /// - [`HealthError::Decode`] if the body is not a model resource
    /// - [`AiLlmError::HttpTransport`] for network failures
    async fn try_probe_gemini(
        &self,
        cfg: &LlmModelConfig,
        api_key: &str,
    ) -> Result<String, AiLlmError> {
        let endpoint = cfg.endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(HealthError::InvalidEndpoint(cfg.endpoint.clone()).into());
        }

        let url = format!(
            "{}/v1beta/models/{}",
            endpoint.trim_end_matches('/'),
            cfg.model
        );
        let timeout = cfg
            .timeout_secs
            .map(Duration::from_secs)
            .map_or(self.default_timeout, |t| t.min(self.default_timeout));

        debug!(model = %cfg.model, timeout_ms = timeout.as_millis(), "GET {}", url);

        let resp = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, api_key)
            .timeout(timeout)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(HealthError::HttpStatus {
                status,
                url,
                snippet: make_snippet(&text),
            }
            .into());
        }

        let model: ModelResource = resp
            .json()
            .await
            .map_err(|e| HealthError::Decode(format!("expected a model resource: {e}")))?;

        Ok(match model.display_name {
            Some(name) => format!("model available: {name}"),
            None => format!("model available: {}", model.name),
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelResource {
    name: String,
    #[serde(default)]
    display_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_config::gemini_config;

    #[tokio::test]
    async fn missing_key_reports_unhealthy_without_network() {
        let cfg = gemini_config("https://g.example", "gemini-x", None, None).unwrap();
        let svc = HealthService::new(Some(1)).unwrap();
        let status = svc.check(&cfg, None).await;
        assert!(!status.ok);
        assert_eq!(status.provider, "Gemini");
        assert_eq!(status.model, "gemini-x");
        assert_eq!(status.latency_ms, 0);
    }

    #[test]
    fn model_resource_decodes() {
        let m: ModelResource = serde_json::from_str(
            r#"{"name":"models/gemini-2.5-flash","displayName":"Gemini 2.5 Flash","version":"001"}"#,
        )
        .unwrap();
        assert_eq!(m.name, "models/gemini-2.5-flash");
        assert_eq!(m.display_name.as_deref(), Some("Gemini 2.5 Flash"));
    }
}
