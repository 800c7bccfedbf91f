/// Represents the provider (backend) used for large language model (LLM) inference.
///
/// The explainer only talks to Google's Gemini REST API today. Adding another
/// backend means a new variant here plus a `TextGenerator` implementation in
/// `services`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LlmProvider {
    /// Google Gemini (`generativelanguage.googleapis.com`).
    Gemini,
}
