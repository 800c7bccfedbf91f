//! Code explanation pipeline.
//!
//! A request is validated, rendered into a prompt, sent to a [`TextGenerator`]
//! and the reply coerced into JSON. Any failure along the way yields the
//! built-in mock explanation instead, so callers always get a complete body.
//!
//! [`TextGenerator`]: ai_llm_service::TextGenerator

pub mod api_types;
pub mod cfg;
pub mod coerce;
pub mod error;
pub mod fixture;
pub mod prompt;
pub mod service;
pub mod validate;

pub use api_types::{
    BigO, Depth, ExplainRequest, ExplainResponse, LineExplanation, SourceLanguage, TargetLanguage,
};
pub use cfg::{ExplainConfig, InvalidRequestPolicy};
pub use coerce::{ExplainBody, coerce_or_mock, coerce_response};
pub use error::{ConfigError, ExplainError, ParseError, ValidationError};
pub use fixture::mock_explain;
pub use prompt::{Prompt, build_prompt};
pub use service::{ExplainService, Explanation, Outcome};
pub use validate::{parse_request_body, validate_request};
