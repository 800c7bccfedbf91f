//! The explain pipeline: validate → prompt → gateway → coerce, falling back to the fixture.

use std::sync::Arc;

use ai_llm_service::{GenerateRequest, TextGenerator};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::{
    api_types::{ExplainRequest, ExplainResponse},
    cfg::ExplainConfig,
    coerce::{ExplainBody, coerce_response},
    error::{ExplainError, ValidationError},
    prompt::build_prompt,
    validate::{parse_request_body, validate_request},
};

/// How an [`Explanation`] was produced.
#[derive(Debug)]
pub enum Outcome {
    /// Model output, passed through.
    Live,
    /// Fixture, with the failure that caused it.
    Mocked { reason: ExplainError },
}

/// Result of one explain call. Always carries a complete body.
#[derive(Debug)]
pub struct Explanation {
    pub body: ExplainBody,
    pub outcome: Outcome,
}

impl Explanation {
    fn live(value: Value) -> Self {
        Self {
            body: ExplainBody::Model(value),
            outcome: Outcome::Live,
        }
    }

    fn mocked(reason: ExplainError) -> Self {
        Self {
            body: ExplainBody::mock(),
            outcome: Outcome::Mocked { reason },
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self.outcome, Outcome::Live)
    }

    /// `"live"` or `"mock"`.
    pub fn source_tag(&self) -> &'static str {
        if self.is_live() { "live" } else { "mock" }
    }

    /// Set only when the fixture was served because the request was invalid.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        match &self.outcome {
            Outcome::Mocked {
                reason: ExplainError::Validation(e),
            } => Some(e),
            _ => None,
        }
    }
}

/// Stateless explain service. Share it behind an `Arc`.
pub struct ExplainService {
    cfg: ExplainConfig,
    gateway: Arc<dyn TextGenerator>,
}

impl ExplainService {
    pub fn new(cfg: ExplainConfig, gateway: Arc<dyn TextGenerator>) -> Self {
        Self { cfg, gateway }
    }

    pub fn config(&self) -> &ExplainConfig {
        &self.cfg
    }

    /// Explains a raw HTTP body. Never fails.
    pub async fn explain_body(&self, body: &[u8]) -> Explanation {
        match parse_request_body(body) {
            Ok(req) => self.explain(&req).await,
            Err(e) => {
                warn!(
                    reason = "validation",
                    error = %e,
                    body_len = body.len(),
                    "serving mock explanation"
                );
                Explanation::mocked(e.into())
            }
        }
    }

    /// Explains an untyped JSON value. Never fails.
    pub async fn explain_value(&self, input: &Value) -> Explanation {
        match validate_request(input) {
            Ok(req) => self.explain(&req).await,
            Err(e) => {
                warn!(reason = "validation", error = %e, "serving mock explanation");
                Explanation::mocked(e.into())
            }
        }
    }

    /// Explains a validated request. Never fails.
    pub async fn explain(&self, req: &ExplainRequest) -> Explanation {
        let result = self.try_live(req).await;
        self.finish(result, req.code.len())
    }

    /// The live path. Every `Err` becomes the fixture in [`Self::finish`].
    async fn try_live(&self, req: &ExplainRequest) -> Result<Value, ExplainError> {
        let api_key = self
            .cfg
            .credentials
            .resolve()
            .ok_or(ExplainError::CredentialMissing)?;

        let prompt = build_prompt(req).text();
        let raw = self
            .gateway
            .generate(GenerateRequest {
                model: &self.cfg.model,
                prompt: &prompt,
                api_key,
                json_output: self.cfg.json_output,
            })
            .await?;

        Ok(coerce_response(Some(&raw))?)
    }

    fn finish(&self, result: Result<Value, ExplainError>, code_len: usize) -> Explanation {
        match result {
            Ok(value) => {
                if ExplainResponse::deserialize(&value).is_err() {
                    warn!(
                        gateway = self.gateway.name(),
                        "model JSON does not match the response shape; passing it through"
                    );
                }
                info!(
                    gateway = self.gateway.name(),
                    model = %self.cfg.model,
                    code_len,
                    "explanation served from model"
                );
                Explanation::live(value)
            }
            Err(reason) => {
                warn!(
                    reason = reason.kind(),
                    error = %reason,
                    code_len,
                    "serving mock explanation"
                );
                Explanation::mocked(reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use ai_llm_service::{
        AiLlmError, ApiCredentials,
        error_handler::{Provider, ProviderError, ProviderErrorKind},
    };
    use async_trait::async_trait;
    use serde_json::json;

    use crate::{error::ParseError, fixture::mock_explain};

    /// Records every call and answers with a canned result.
    struct FakeGateway {
        reply: Option<String>,
        calls: Mutex<Vec<(String, String, String, bool)>>,
    }

    impl FakeGateway {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Some(text.to_string()),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: None,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TextGenerator for FakeGateway {
        fn name(&self) -> &'static str {
            "fake"
        }

        async fn generate(&self, req: GenerateRequest<'_>) -> Result<String, AiLlmError> {
            self.calls.lock().unwrap().push((
                req.model.to_string(),
                req.prompt.to_string(),
                req.api_key.to_string(),
                req.json_output,
            ));
            self.reply.clone().ok_or_else(|| {
                ProviderError::new(Provider::Gemini, ProviderErrorKind::EmptyCandidates).into()
            })
        }
    }

    fn service(creds: ApiCredentials, gw: Arc<FakeGateway>) -> ExplainService {
        ExplainService::new(ExplainConfig::new(creds, "gemini-test"), gw)
    }

    fn live_json() -> Value {
        json!({
            "language": "Go",
            "summary": "Prints a line.",
            "bigO": { "time": "O(1)", "space": "O(1)", "rationale": "Constant work." },
            "byLine": [{ "line": 1, "code": "fmt.Println(1)", "explanation": "Prints." }],
            "potentialIssues": ["none"],
            "refactors": [],
            "tests": []
        })
    }

    fn mock_value() -> Value {
        serde_json::to_value(mock_explain()).unwrap()
    }

    #[tokio::test]
    async fn no_credentials_serves_mock_without_calling_gateway() {
        let gw = FakeGateway::replying(&live_json().to_string());
        let svc = service(ApiCredentials::none(), gw.clone());

        let out = svc.explain_value(&json!({ "code": "x" })).await;

        assert_eq!(serde_json::to_value(&out.body).unwrap(), mock_value());
        assert!(matches!(
            out.outcome,
            Outcome::Mocked {
                reason: ExplainError::CredentialMissing
            }
        ));
        assert_eq!(out.source_tag(), "mock");
        assert_eq!(gw.call_count(), 0);
    }

    #[tokio::test]
    async fn invalid_requests_serve_mock_without_calling_gateway() {
        let gw = FakeGateway::replying(&live_json().to_string());
        let svc = service(ApiCredentials::with_primary("k"), gw.clone());

        for bad in [
            json!({ "code": "" }),
            json!({}),
            json!({ "code": "x", "language": "rust" }),
            json!({ "code": "x", "depth": "long" }),
            json!({ "code": "x", "targetLanguage": "fr" }),
        ] {
            let out = svc.explain_value(&bad).await;
            assert_eq!(out.body, ExplainBody::mock(), "{bad}");
            assert!(out.validation_error().is_some(), "{bad}");
        }
        let out = svc.explain_body(b"{not json").await;
        assert!(matches!(
            out.validation_error(),
            Some(ValidationError::Body(_))
        ));
        assert_eq!(gw.call_count(), 0);
    }

    /// Collects formatted log output for assertions.
    #[derive(Clone, Default)]
    struct LogBuf(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl LogBuf {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    #[tokio::test]
    async fn validation_failures_log_body_length_not_code_length() {
        let logs = LogBuf::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let svc = service(
            ApiCredentials::with_primary("k"),
            FakeGateway::replying("{}"),
        );
        svc.explain_body(b"{not json").await;
        svc.explain_value(&json!({ "code": "" })).await;

        let text = logs.text();
        assert!(text.contains("body_len=9"), "{text}");
        assert!(!text.contains("code_len"), "{text}");
        assert_eq!(text.matches("serving mock explanation").count(), 2, "{text}");
    }

    #[tokio::test]
    async fn live_output_is_returned_unchanged() {
        let gw = FakeGateway::replying(&live_json().to_string());
        let svc = service(ApiCredentials::with_primary("k"), gw.clone());

        let out = svc.explain_body(br#"{"code":"fmt.Println(1)","language":"go"}"#).await;

        assert!(out.is_live());
        assert_eq!(out.source_tag(), "live");
        assert_eq!(out.body, ExplainBody::Model(live_json()));
        assert_eq!(serde_json::to_value(&out.body).unwrap(), live_json());
        assert_eq!(gw.call_count(), 1);
    }

    #[tokio::test]
    async fn gateway_receives_model_prompt_key_and_json_flag() {
        let gw = FakeGateway::replying("{}");
        let creds = ApiCredentials {
            primary_api_key: None,
            secondary_api_key: Some("second".into()),
        };
        let svc = service(creds, gw.clone());
        let code = "def f():\n    return \"{}\"  # ```";

        svc.explain(&ExplainRequest::new(code)).await;

        let calls = gw.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (model, prompt, key, json_output) = &calls[0];
        assert_eq!(model, "gemini-test");
        assert_eq!(key, "second");
        assert!(*json_output);
        assert!(prompt.contains(code));
        assert!(prompt.ends_with(code));
        assert!(prompt.contains("STRICT JSON"));
    }

    #[tokio::test]
    async fn gateway_failure_serves_mock() {
        let gw = FakeGateway::failing();
        let svc = service(ApiCredentials::with_primary("k"), gw.clone());

        let out = svc.explain(&ExplainRequest::new("x")).await;

        assert_eq!(out.body, ExplainBody::mock());
        assert!(matches!(
            out.outcome,
            Outcome::Mocked {
                reason: ExplainError::Gateway(_)
            }
        ));
        assert_eq!(gw.call_count(), 1);
    }

    #[tokio::test]
    async fn unparseable_output_serves_mock() {
        for text in ["not json", "{\"summary\": \"cut", "null", ""] {
            let svc = service(
                ApiCredentials::with_primary("k"),
                FakeGateway::replying(text),
            );
            let out = svc.explain(&ExplainRequest::new("x")).await;
            assert_eq!(out.body, ExplainBody::mock(), "{text:?}");
            assert!(
                matches!(
                    out.outcome,
                    Outcome::Mocked {
                        reason: ExplainError::Parse(ParseError::Malformed(_) | ParseError::Falsy)
                    }
                ),
                "{text:?}"
            );
        }
    }

    #[tokio::test]
    async fn same_gateway_text_gives_same_body() {
        let text = live_json().to_string();
        let svc = service(
            ApiCredentials::with_primary("k"),
            FakeGateway::replying(&text),
        );
        let a = svc.explain(&ExplainRequest::new("x")).await;
        let b = svc.explain(&ExplainRequest::new("x")).await;
        assert_eq!(a.body, b.body);
    }
}
