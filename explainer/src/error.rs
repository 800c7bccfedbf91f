//! Typed errors for the explain pipeline.
//!
//! None of these reach the HTTP caller as an error status under the default
//! policy: every [`ExplainError`] is absorbed into a mock response and kept
//! only as the reason tag of the outcome.

use ai_llm_service::AiLlmError;
use thiserror::Error;

/// Why an explanation was served from the mock fixture.
#[derive(Debug, Error)]
pub enum ExplainError {
    /// The inbound request did not satisfy the schema.
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),

    /// Neither credential slot holds a key; the gateway was not called.
    #[error("no gateway credential configured")]
    CredentialMissing,

    /// The gateway call failed (transport, status, empty output).
    #[error("gateway error: {0}")]
    Gateway(#[from] AiLlmError),

    /// The gateway answered with text that is not usable JSON.
    #[error("unusable model output: {0}")]
    Parse(#[from] ParseError),
}

impl ExplainError {
    /// Stable label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ExplainError::Validation(_) => "validation",
            ExplainError::CredentialMissing => "credential_missing",
            ExplainError::Gateway(_) => "gateway",
            ExplainError::Parse(_) => "parse",
        }
    }
}

/// Request validation failures.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Body is not JSON at all.
    #[error("body is not valid JSON: {0}")]
    Body(#[source] serde_json::Error),

    /// Body is JSON but not an object.
    #[error("request body must be a JSON object")]
    NotAnObject,

    /// Missing/ill-typed field or an unknown enum value.
    #[error("{0}")]
    Schema(#[source] serde_json::Error),

    /// `code` is present but empty.
    #[error("code is required")]
    EmptyCode,
}

/// Model output coercion failures.
#[derive(Debug, Error)]
pub enum ParseError {
    /// No text was produced.
    #[error("no model output")]
    Missing,

    /// Text is not JSON.
    #[error("model output is not JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    /// JSON decoded to `null`, `false`, `0` or `""`.
    #[error("model output decoded to an empty value")]
    Falsy,
}

/// Explain-specific configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: expected {expected}")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}
