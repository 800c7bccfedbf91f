use crate::config::llm_provider::LlmProvider;

/// Configuration for an LLM model invocation.
///
/// Credentials are deliberately not part of this struct: they are resolved
/// separately (see [`ApiCredentials`](crate::config::credentials::ApiCredentials))
/// and handed to the gateway per call, so a missing key can be detected
/// before any client is touched.
///
/// # Examples
///
/// ```
/// use ai_llm_service::config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider};
///
/// let cfg = LlmModelConfig {
///     provider: LlmProvider::Gemini,
///     model: "gemini-2.5-flash".to_string(),
///     endpoint: "https://generativelanguage.googleapis.com".to_string(),
///     max_tokens: None,
///     temperature: None,
///     timeout_secs: None,
/// };
/// assert_eq!(cfg.model, "gemini-2.5-flash");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LlmModelConfig {
    /// The LLM provider/backend.
    pub provider: LlmProvider,

    /// Model identifier string (e.g., `"gemini-2.5-flash"`).
    pub model: String,

    /// Base URL of the provider API.
    pub endpoint: String,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature (controls creativity).
    pub temperature: Option<f32>,

    /// Client timeout in seconds. `None` waits for the provider indefinitely.
    pub timeout_secs: Option<u64>,
}
