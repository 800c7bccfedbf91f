//! Request validation: untyped JSON in, normalized [`ExplainRequest`] out.
//!
//! Pure functions. What to do with an `Err` (serve the mock, or reject) is
//! decided by the caller, not here.

use serde::Deserialize;
use serde_json::Value;

use crate::{api_types::ExplainRequest, error::ValidationError};

/// Validates an already-parsed JSON value and applies defaults.
///
/// # Errors
/// - [`ValidationError::NotAnObject`] unless the value is a JSON object
/// - [`ValidationError::Schema`] for a missing or non-string `code`, a wrong
///   type anywhere, or an enum value outside its set
/// - [`ValidationError::EmptyCode`] for `code: ""`
pub fn validate_request(input: &Value) -> Result<ExplainRequest, ValidationError> {
    // serde would also accept a positional array for a struct.
    if !input.is_object() {
        return Err(ValidationError::NotAnObject);
    }
    let req = ExplainRequest::deserialize(input).map_err(ValidationError::Schema)?;
    if req.code.is_empty() {
        return Err(ValidationError::EmptyCode);
    }
    Ok(req)
}

/// Decodes a raw HTTP body and validates it.
///
/// # Errors
/// [`ValidationError::Body`] when the bytes are not JSON, otherwise as
/// [`validate_request`].
pub fn parse_request_body(body: &[u8]) -> Result<ExplainRequest, ValidationError> {
    let value: Value = serde_json::from_slice(body).map_err(ValidationError::Body)?;
    validate_request(&value)
}
