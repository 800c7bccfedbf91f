//! POST /api/explain: line-by-line explanation of a code snippet.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::HeaderValue,
    response::{IntoResponse, Response},
};
use explainer::{ExplainError, Explanation, InvalidRequestPolicy, Outcome};

use crate::{core::app_state::AppState, error_handler::AppResult};

/// Response header carrying `live` or `mock`.
pub const EXPLAIN_SOURCE_HEADER: &str = "x-explain-source";

/// Handler: POST /api/explain
///
/// The body is read raw so that malformed JSON reaches the pipeline as a
/// validation failure instead of an axum rejection.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/api/explain \
///   -H 'content-type: application/json' \
///   -d '{"code":"print(1)","language":"python","depth":"brief","targetLanguage":"ja"}'
/// ```
pub async fn explain_code(State(state): State<Arc<AppState>>, body: Bytes) -> AppResult<Response> {
    let explanation = state.explainer.explain_body(&body).await;
    let source = explanation.source_tag();

    let Explanation { body, outcome } = explanation;
    if let Outcome::Mocked {
        reason: ExplainError::Validation(e),
    } = outcome
    {
        if state.invalid_request_policy() == InvalidRequestPolicy::Reject {
            return Err(e.into());
        }
    }

    let mut res = Json(body).into_response();
    res.headers_mut()
        .insert(EXPLAIN_SOURCE_HEADER, HeaderValue::from_static(source));
    Ok(res)
}
