//! Response coercion: raw model text → response body, with wholesale fallback.
//!
//! A successful parse is returned as-is. The shape is not re-checked against
//! [`ExplainResponse`]; [`ExplainBody::typed`] exists for callers that want
//! to know whether it matches.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{api_types::ExplainResponse, error::ParseError, fixture::mock_explain};

/// Body of an explain response: model JSON passed through, or the fixture.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExplainBody {
    Model(Value),
    Mock(ExplainResponse),
}

impl ExplainBody {
    pub fn mock() -> Self {
        ExplainBody::Mock(mock_explain())
    }

    pub fn is_mock(&self) -> bool {
        matches!(self, ExplainBody::Mock(_))
    }

    /// Typed view; `None` when model JSON does not fit [`ExplainResponse`].
    pub fn typed(&self) -> Option<ExplainResponse> {
        match self {
            ExplainBody::Model(v) => ExplainResponse::deserialize(v).ok(),
            ExplainBody::Mock(r) => Some(r.clone()),
        }
    }
}

/// Parses gateway output.
///
/// # Errors
/// - [`ParseError::Missing`] when there is no text
/// - [`ParseError::Malformed`] when the text is not JSON
/// - [`ParseError::Falsy`] for `null`, `false`, `0` and `""`
pub fn coerce_response(raw: Option<&str>) -> Result<Value, ParseError> {
    let text = raw.ok_or(ParseError::Missing)?;
    let value: Value = serde_json::from_str(text).map_err(ParseError::Malformed)?;
    if is_falsy(&value) {
        return Err(ParseError::Falsy);
    }
    Ok(value)
}

/// [`coerce_response`] with the fixture substituted on any failure.
pub fn coerce_or_mock(raw: Option<&str>) -> ExplainBody {
    match coerce_response(raw) {
        Ok(v) => ExplainBody::Model(v),
        Err(_) => ExplainBody::mock(),
    }
}

fn is_falsy(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
