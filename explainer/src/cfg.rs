//! Runtime configuration for the explain pipeline.

use std::str::FromStr;

use ai_llm_service::{ApiCredentials, config::default_config::DEFAULT_GEMINI_MODEL};

use crate::error::ConfigError;

/// What the HTTP layer does with a request that fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidRequestPolicy {
    /// Answer 200 with the mock fixture.
    #[default]
    ServeMock,
    /// Answer 400 with an error envelope.
    Reject,
}

impl FromStr for InvalidRequestPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" | "serve_mock" => Ok(InvalidRequestPolicy::ServeMock),
            "reject" => Ok(InvalidRequestPolicy::Reject),
            _ => Err(ConfigError::InvalidValue {
                var: "EXPLAIN_INVALID_REQUEST_POLICY",
                value: s.to_string(),
                expected: "`mock` or `reject`",
            }),
        }
    }
}

/// Config bag for [`ExplainService`](crate::ExplainService).
#[derive(Clone, Debug)]
pub struct ExplainConfig {
    pub credentials: ApiCredentials,
    /// Model identifier passed to the gateway.
    pub model: String,
    /// Ask the gateway for JSON MIME output.
    pub json_output: bool,
    pub invalid_request_policy: InvalidRequestPolicy,
}

impl ExplainConfig {
    /// Defaults for everything except credentials and model.
    pub fn new(credentials: ApiCredentials, model: impl Into<String>) -> Self {
        Self {
            credentials,
            model: model.into(),
            json_output: true,
            invalid_request_policy: InvalidRequestPolicy::default(),
        }
    }

    /// Build from environment variables.
    ///
    /// - `GOOGLE_API_KEY` / `GEMINI_API_KEY`: credentials
    /// - `EXPLAIN_JSON_OUTPUT`: `true`/`false` (default `true`)
    /// - `EXPLAIN_INVALID_REQUEST_POLICY`: `mock`/`reject` (default `mock`)
    ///
    /// # Errors
    /// [`ConfigError::InvalidValue`] for unparseable values.
    pub fn from_env(model: impl Into<String>) -> Result<Self, ConfigError> {
        let mut cfg = Self::new(ApiCredentials::from_env(), model);

        if let Some(v) = env("EXPLAIN_JSON_OUTPUT") {
            cfg.json_output = parse_bool("EXPLAIN_JSON_OUTPUT", &v)?;
        }
        if let Some(v) = env("EXPLAIN_INVALID_REQUEST_POLICY") {
            cfg.invalid_request_policy = v.parse()?;
        }

        Ok(cfg)
    }
}

impl Default for ExplainConfig {
    /// No credentials: every request is served from the fixture.
    fn default() -> Self {
        Self::new(ApiCredentials::none(), DEFAULT_GEMINI_MODEL)
    }
}

fn env(k: &str) -> Option<String> {
    std::env::var(k).ok().filter(|v| !v.trim().is_empty())
}

fn parse_bool(var: &'static str, v: &str) -> Result<bool, ConfigError> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: v.to_string(),
            expected: "a boolean",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_parses() {
        assert_eq!(
            "mock".parse::<InvalidRequestPolicy>().unwrap(),
            InvalidRequestPolicy::ServeMock
        );
        assert_eq!(
            " Reject ".parse::<InvalidRequestPolicy>().unwrap(),
            InvalidRequestPolicy::Reject
        );
        assert!("strict-ish".parse::<InvalidRequestPolicy>().is_err());
    }

    #[test]
    fn bools_parse() {
        assert!(parse_bool("X", "TRUE").unwrap());
        assert!(!parse_bool("X", "off").unwrap());
        assert!(parse_bool("X", "maybe").is_err());
    }

    #[test]
    fn default_has_no_credentials() {
        let cfg = ExplainConfig::default();
        assert!(!cfg.credentials.is_configured());
        assert_eq!(cfg.model, DEFAULT_GEMINI_MODEL);
        assert!(cfg.json_output);
        assert_eq!(cfg.invalid_request_policy, InvalidRequestPolicy::ServeMock);
    }
}
