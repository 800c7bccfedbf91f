//! Google Gemini service for text generation.
//!
//! Minimal, non-streaming client around the Gemini REST API:
//! - POST {endpoint}/v1beta/models/{model}:generateContent
//!
//! The API key travels in the `x-goog-api-key` header and is supplied per
//! call through [`GenerateRequest`], so one client serves any credential.
//!
//! Constructor validation:
//! - `cfg.provider` must be `LlmProvider::Gemini`
//! - `cfg.endpoint` must start with http:// or https://
//!
//! Errors are normalized via unified error types in `error_handler`.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{
        AiLlmError, HttpError, Provider, ProviderError, ProviderErrorKind, make_snippet,
    },
    gateway::{GenerateRequest, TextGenerator},
};

/// Header carrying the Gemini API key.
pub(crate) const API_KEY_HEADER: &str = "x-goog-api-key";

/// Thin client for the Gemini API.
///
/// Constructed from a complete [`LlmModelConfig`]. Internally keeps a
/// preconfigured `reqwest::Client` (default headers, and a timeout only when
/// `cfg.timeout_secs` is set).
#[derive(Debug)]
pub struct GeminiService {
    client: reqwest::Client,
    cfg: LlmModelConfig,
    base: String,
    timeout: Option<Duration>,
}

impl GeminiService {
    /// Creates a new [`GeminiService`] from the given config.
    ///
    /// # Errors
    /// - [`ProviderErrorKind::InvalidProvider`] if `cfg.provider` is not Gemini
    /// - [`ProviderErrorKind::InvalidEndpoint`] if `cfg.endpoint` is invalid
    /// - [`AiLlmError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: LlmModelConfig) -> Result<Self, AiLlmError> {
        // 1) Provider must be Gemini.
        if cfg.provider != LlmProvider::Gemini {
            return Err(
                ProviderError::new(Provider::Gemini, ProviderErrorKind::InvalidProvider).into(),
            );
        }

        // 2) Endpoint must use http/https.
        let endpoint = cfg.endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(ProviderError::new(
                Provider::Gemini,
                ProviderErrorKind::InvalidEndpoint(cfg.endpoint.clone()),
            )
            .into());
        }

        // 3) HTTP client: default headers, optional timeout.
        let timeout = cfg.timeout_secs.map(Duration::from_secs);

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder.build()?;

        let base = endpoint.trim_end_matches('/').to_string();

        info!(
            provider = ?cfg.provider,
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            timeout_secs = ?cfg.timeout_secs,
            "GeminiService initialized"
        );

        Ok(Self {
            client,
            cfg,
            base,
            timeout,
        })
    }

    /// The config this client was built from.
    pub fn config(&self) -> &LlmModelConfig {
        &self.cfg
    }

    /// Client timeout; `None` waits for the provider indefinitely.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn url_generate(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base, model)
    }

    /// Performs a single **non-streaming** `generateContent` request.
    ///
    /// # Errors
    /// - `MissingApiKey` if the request carries a blank key
    /// - `HttpStatus` for non-2xx responses
    /// - [`AiLlmError::HttpTransport`] for client/network failures
    /// - `Decode` if the JSON cannot be parsed
    /// - `Blocked` / `EmptyCandidates` if no text came back
    pub async fn generate_content(&self, req: GenerateRequest<'_>) -> Result<String, AiLlmError> {
        if req.api_key.trim().is_empty() {
            return Err(
                ProviderError::new(Provider::Gemini, ProviderErrorKind::MissingApiKey).into(),
            );
        }

        let started = Instant::now();
        let url = self.url_generate(req.model);
        let body = GenerateContentRequest::new(
            req.prompt,
            req.json_output,
            self.cfg.max_tokens,
            self.cfg.temperature,
        );

        debug!(
            model = %req.model,
            endpoint = %self.cfg.endpoint,
            prompt_len = req.prompt.len(),
            json_output = req.json_output,
            "POST {}", url
        );

        let resp = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, req.api_key)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            let snippet = make_snippet(&text);

            error!(
                %status,
                %url,
                %snippet,
                model = %req.model,
                latency_ms = started.elapsed().as_millis(),
                "Gemini generateContent returned non-success status"
            );

            return Err(ProviderError::new(
                Provider::Gemini,
                ProviderErrorKind::HttpStatus(HttpError {
                    status,
                    url,
                    snippet,
                }),
            )
            .into());
        }

        let out: GenerateContentResponse = match resp.json().await {
            Ok(v) => v,
            Err(e) => {
                error!(
                    error = %e,
                    model = %req.model,
                    latency_ms = started.elapsed().as_millis(),
                    "failed to decode generateContent response"
                );
                return Err(ProviderError::new(
                    Provider::Gemini,
                    ProviderErrorKind::Decode(format!(
                        "serde error: {e}; expected `candidates[0].content.parts[].text`"
                    )),
                )
                .into());
            }
        };

        let text = out.into_text()?;

        info!(
            model = %req.model,
            latency_ms = started.elapsed().as_millis(),
            output_len = text.len(),
            "generateContent completed"
        );

        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiService {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(&self, req: GenerateRequest<'_>) -> Result<String, AiLlmError> {
        self.generate_content(req).await
    }
}

/* ===========================================================================
HTTP payloads
======================================================================== */

/// Request body for `generateContent`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "GenerationConfig::is_empty")]
    generation_config: GenerationConfig,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(
        prompt: &'a str,
        json_output: bool,
        max_tokens: Option<u32>,
        temperature: Option<f32>,
    ) -> Self {
        Self {
            contents: vec![Content {
                role: "user",
                parts: vec![PartIn { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: json_output.then_some("application/json"),
                max_output_tokens: max_tokens,
                temperature,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<PartIn<'a>>,
}

#[derive(Debug, Serialize)]
struct PartIn<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

impl GenerationConfig {
    fn is_empty(&self) -> bool {
        self.response_mime_type.is_none()
            && self.max_output_tokens.is_none()
            && self.temperature.is_none()
    }
}

/// Response body for `generateContent` (only the fields we read).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<PartOut>,
}

#[derive(Debug, Deserialize)]
struct PartOut {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    fn into_text(self) -> Result<String, ProviderError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(ProviderError::new(
                Provider::Gemini,
                ProviderErrorKind::Blocked(reason),
            ));
        }

        let parts = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts)
            .ok_or_else(|| {
                ProviderError::new(Provider::Gemini, ProviderErrorKind::EmptyCandidates)
            })?;

        Ok(parts.into_iter().filter_map(|p| p.text).collect())
    }
}
