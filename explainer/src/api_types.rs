//! Public request/response types re-used by the HTTP layer.

use serde::{Deserialize, Serialize};

/// Declared language of the submitted snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceLanguage {
    #[default]
    Auto,
    Javascript,
    Typescript,
    Python,
    Go,
    Java,
}

impl SourceLanguage {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceLanguage::Auto => "auto",
            SourceLanguage::Javascript => "javascript",
            SourceLanguage::Typescript => "typescript",
            SourceLanguage::Python => "python",
            SourceLanguage::Go => "go",
            SourceLanguage::Java => "java",
        }
    }
}

/// How much detail the explanation should carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Depth {
    Brief,
    #[default]
    Detailed,
}

impl Depth {
    pub fn as_str(self) -> &'static str {
        match self {
            Depth::Brief => "brief",
            Depth::Detailed => "detailed",
        }
    }
}

/// Natural language for every human-readable output field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    #[default]
    En,
    Id,
    Su,
    Ja,
    De,
}

impl TargetLanguage {
    /// Wire code, e.g. `"ja"`.
    pub fn code(self) -> &'static str {
        match self {
            TargetLanguage::En => "en",
            TargetLanguage::Id => "id",
            TargetLanguage::Su => "su",
            TargetLanguage::Ja => "ja",
            TargetLanguage::De => "de",
        }
    }

    /// English name used inside prompts, e.g. `"Japanese"`.
    pub fn display_name(self) -> &'static str {
        crate::prompt::language_name(self.code())
    }
}

/// Validated explain request. Field defaults mirror the public API:
/// `language=auto`, `autodetect=true`, `depth=detailed`, `targetLanguage=en`.
///
/// Unknown JSON fields are ignored; present-but-`null` fields are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainRequest {
    pub code: String,
    #[serde(default)]
    pub language: SourceLanguage,
    #[serde(default = "default_autodetect")]
    pub autodetect: bool,
    #[serde(default)]
    pub depth: Depth,
    #[serde(default)]
    pub target_language: TargetLanguage,
}

fn default_autodetect() -> bool {
    true
}

impl ExplainRequest {
    /// Request with every optional field at its default.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: SourceLanguage::default(),
            autodetect: default_autodetect(),
            depth: Depth::default(),
            target_language: TargetLanguage::default(),
        }
    }
}

/// Structured explanation returned to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainResponse {
    /// Detected/declared source language, free text.
    pub language: String,
    pub summary: String,
    pub big_o: BigO,
    /// Presentation order; `line` values may repeat.
    pub by_line: Vec<LineExplanation>,
    pub potential_issues: Vec<String>,
    pub refactors: Vec<String>,
    pub tests: Vec<String>,
}

/// Complexity estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BigO {
    pub time: String,
    pub space: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

/// One entry of the line-by-line commentary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineExplanation {
    pub line: u32,
    pub code: String,
    pub explanation: String,
}
