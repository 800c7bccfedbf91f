//! Text-generation capability consumed by the explainer.
//!
//! The pipeline depends only on [`TextGenerator`]; the Gemini client in
//! `services` is one implementation, tests supply their own doubles.

use async_trait::async_trait;

use crate::error_handler::AiLlmError;

/// One generation call. Borrowed so callers keep ownership of the prompt.
#[derive(Debug, Clone, Copy)]
pub struct GenerateRequest<'a> {
    /// Model identifier sent upstream.
    pub model: &'a str,
    /// Full prompt text (system + user instruction).
    pub prompt: &'a str,
    /// Credential for this call, already resolved by the caller.
    pub api_key: &'a str,
    /// Ask the provider for a JSON MIME response when it supports it.
    pub json_output: bool,
}

/// Opaque, unreliable text generator.
///
/// Implementations perform exactly one upstream call per invocation: no
/// retries and no streaming.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Short provider name for logs.
    fn name(&self) -> &'static str;

    /// Returns raw model output text.
    async fn generate(&self, req: GenerateRequest<'_>) -> Result<String, AiLlmError>;
}
