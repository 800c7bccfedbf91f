use ai_llm_service::AiLlmError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use explainer::{ConfigError, ValidationError};
use thiserror::Error;

use crate::core::http::response_envelope::{ApiErrorDetail, ApiResponse};

/// Request fields, as they appear in serde messages.
const REQUEST_FIELDS: [&str; 5] = ["code", "language", "autodetect", "depth", "targetLanguage"];

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error("missing required environment variable: {0}")]
    MissingEnv(&'static str),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Llm(#[from] AiLlmError),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request ---
    /// Only produced under the `reject` invalid-request policy.
    #[error(transparent)]
    InvalidRequest(#[from] ValidationError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            // startup-only
            AppError::MissingEnv(_)
            | AppError::Config(_)
            | AppError::Llm(_)
            | AppError::Bind(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingEnv(_) => "MISSING_ENV",
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Llm(_) => "LLM_CONFIG_ERROR",
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::InvalidRequest(_) => "INVALID_REQUEST",
        }
    }

    fn details(&self) -> Vec<ApiErrorDetail> {
        match self {
            AppError::InvalidRequest(e) => vec![validation_detail(e)],
            _ => Vec::new(),
        }
    }
}

fn validation_detail(err: &ValidationError) -> ApiErrorDetail {
    match err {
        ValidationError::Body(_) | ValidationError::NotAnObject => ApiErrorDetail {
            path: None,
            hint: Some("Send a JSON object such as { \"code\": \"print(1)\" }.".into()),
        },
        ValidationError::Schema(e) => ApiErrorDetail {
            path: field_from_serde_msg(&e.to_string()),
            hint: None,
        },
        ValidationError::EmptyCode => ApiErrorDetail {
            path: Some("code".into()),
            hint: Some("Provide a non-empty code snippet.".into()),
        },
    }
}

/// First backtick-quoted request field in a serde message, e.g. "missing field `code`".
fn field_from_serde_msg(msg: &str) -> Option<String> {
    msg.split('`')
        .skip(1)
        .step_by(2)
        .find(|quoted| REQUEST_FIELDS.contains(quoted))
        .map(str::to_string)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        ApiResponse::<()>::error(self.error_code(), self.to_string(), self.details())
            .into_response_with_status(self.status_code())
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;
