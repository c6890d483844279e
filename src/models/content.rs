//! Content endpoint data models
//!
//! Request bodies accepted by the five task endpoints and the data payloads they return

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Temperature used by `/api/generate` when the caller sends none
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Token budget assumed when the caller sends none
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Language assumed by `/api/explain-code` when the caller sends none
pub const DEFAULT_CODE_LANGUAGE: &str = "Python";

/// POST /api/generate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateRequest {
    #[validate(length(min = 1, max = 5000, message = "prompt must be between 1 and 5000 characters"))]
    pub prompt: String,
    /// Range-checked only. Gemini is never sent a token limit.
    #[validate(range(min = 100, max = 8000, message = "max_tokens must be between 100 and 8000"))]
    pub max_tokens: Option<u32>,
    #[validate(range(min = 0.0, max = 2.0, message = "temperature must be between 0.0 and 2.0"))]
    pub temperature: Option<f64>,
}

/// POST /api/summarize
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SummarizeRequest {
    #[validate(length(min = 10, message = "text must be at least 10 characters"))]
    pub text: String,
    /// `short`, `medium` or `long`; anything else reads as `medium`
    pub length: Option<String>,
}

/// POST /api/translate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TranslateRequest {
    #[validate(length(min = 1, message = "text cannot be empty"))]
    pub text: String,
    #[validate(length(min = 1, message = "target_language cannot be empty"))]
    pub target_language: String,
}

/// POST /api/explain-code
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CodeExplainRequest {
    #[validate(length(min = 1, message = "code cannot be empty"))]
    pub code: String,
    pub language: Option<String>,
}

/// POST /api/qa
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QaRequest {
    #[validate(length(min = 5, message = "question must be at least 5 characters"))]
    pub question: String,
    pub context: Option<String>,
}

impl GenerateRequest {
    pub fn temperature(&self) -> f64 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }
}

impl CodeExplainRequest {
    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_CODE_LANGUAGE)
    }
}

impl QaRequest {
    /// Context that will actually be rendered into the prompt
    pub fn effective_context(&self) -> Option<&str> {
        self.context.as_deref().filter(|context| !context.is_empty())
    }
}

/// `/api/generate` payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedText {
    pub generated_text: String,
    pub prompt: String,
}

/// `/api/summarize` payload. Lengths are character counts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub summary: String,
    pub original_length: usize,
    pub summary_length: usize,
}

/// `/api/translate` payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Translation {
    pub original: String,
    pub translated: String,
    pub target_language: String,
}

/// `/api/explain-code` payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CodeExplanation {
    pub code: String,
    pub language: String,
    pub explanation: String,
}

/// `/api/qa` payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Answer {
    pub question: String,
    pub answer: String,
    pub context_provided: bool,
}
