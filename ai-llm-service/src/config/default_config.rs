//! Default LLM config loaded from environment variables.
//!
//! # Environment variables
//!
//! - `GEMINI_ENDPOINT`  = API base URL (default: `https://generativelanguage.googleapis.com`)
//! - `GEMINI_MODEL`     = model identifier (default: [`DEFAULT_GEMINI_MODEL`])
//! - `LLM_TIMEOUT_SECS` = optional HTTP timeout (u64, unset means none)
//! - `LLM_MAX_TOKENS`   = optional max output tokens (u32)
//!
//! Credentials are read separately, see [`ApiCredentials`](super::credentials::ApiCredentials).

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{
        AiLlmError, ConfigError, env_opt, env_opt_u32, env_opt_u64, validate_http_endpoint,
    },
};

/// Public Gemini REST base URL.
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Model used for explanations unless overridden.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Constructs the Gemini config used by the explainer.
///
/// # Defaults
/// - `temperature = None` (provider default)
/// - `timeout_secs = None` unless `LLM_TIMEOUT_SECS` is set
///
/// # Errors
/// - [`ConfigError::InvalidFormat`] if `GEMINI_ENDPOINT` is not http(s)
/// - [`ConfigError::InvalidNumber`] if a numeric variable does not parse
pub fn config_gemini() -> Result<LlmModelConfig, AiLlmError> {
    let endpoint = env_opt("GEMINI_ENDPOINT").unwrap_or_else(|| DEFAULT_GEMINI_ENDPOINT.into());
    let model = env_opt("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.into());
    let timeout_secs = env_opt_u64("LLM_TIMEOUT_SECS")?;
    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?;

    gemini_config(endpoint, model, timeout_secs, max_tokens)
}

/// Validating constructor shared by env loading and tests.
pub fn gemini_config(
    endpoint: impl Into<String>,
    model: impl Into<String>,
    timeout_secs: Option<u64>,
    max_tokens: Option<u32>,
) -> Result<LlmModelConfig, AiLlmError> {
    let endpoint = endpoint.into().trim().to_string();
    let model = model.into().trim().to_string();

    validate_http_endpoint("GEMINI_ENDPOINT", &endpoint)?;
    if model.is_empty() {
        return Err(ConfigError::EmptyModel.into());
    }

    Ok(LlmModelConfig {
        provider: LlmProvider::Gemini,
        model,
        endpoint,
        max_tokens,
        temperature: None,
        timeout_secs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_valid_config() {
        let cfg = gemini_config(" https://g.example/ ", "m", Some(5), Some(100)).unwrap();
        assert_eq!(cfg.provider, LlmProvider::Gemini);
        assert_eq!(cfg.endpoint, "https://g.example/");
        assert_eq!(cfg.model, "m");
        assert_eq!(cfg.timeout_secs, Some(5));
        assert_eq!(cfg.max_tokens, Some(100));

        let cfg = gemini_config(DEFAULT_GEMINI_ENDPOINT, "m", None, None).unwrap();
        assert_eq!(cfg.timeout_secs, None);
    }

    #[test]
    fn rejects_bad_endpoint_and_empty_model() {
        assert!(matches!(
            gemini_config("localhost", "m", None, None),
            Err(AiLlmError::Config(ConfigError::InvalidFormat { .. }))
        ));
        assert!(matches!(
            gemini_config(DEFAULT_GEMINI_ENDPOINT, "  ", None, None),
            Err(AiLlmError::Config(ConfigError::EmptyModel))
        ));
    }
}
