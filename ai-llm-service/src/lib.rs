//! LLM gateway for the code explainer.
//!
//! - [`gateway::TextGenerator`]: the capability the explain pipeline calls
//! - [`services::gemini_service::GeminiService`]: Gemini REST implementation
//! - [`config`]: model config and credentials, loaded from the environment
//! - [`health_service::HealthService`]: best-effort provider probe for `/health`
//! - [`telemetry`]: global tracing subscriber setup

pub mod config;
pub mod error_handler;
pub mod gateway;
pub mod health_service;
pub mod services;
pub mod telemetry;

pub use config::credentials::ApiCredentials;
pub use config::llm_model_config::LlmModelConfig;
pub use error_handler::AiLlmError;
pub use gateway::{GenerateRequest, TextGenerator};
