//! Content service
//!
//! Runs one task: build the prompt, make a single model call, shape the payload

use crate::models::content::*;
use crate::providers::{ModelClient, ProviderError, SamplingParams};
use crate::services::prompts;
use std::sync::Arc;
use tracing::debug;

/// Task runner over a shared model client
#[derive(Clone)]
pub struct ContentService {
    client: Arc<dyn ModelClient>,
}

impl ContentService {
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self { client }
    }

    async fn complete(&self, task: &str, prompt: &str, temperature: f64) -> Result<String, ProviderError> {
        debug!(task, model = self.client.model(), temperature, "Running content task");
        self.client
            .complete(prompt, SamplingParams::with_temperature(temperature))
            .await
    }

    /// Free-form generation with the caller's temperature
    pub async fn generate(&self, request: &GenerateRequest) -> Result<GeneratedText, ProviderError> {
        let prompt = prompts::generate_prompt(request);
        let generated_text = self.complete("generate", &prompt, request.temperature()).await?;

        Ok(GeneratedText {
            generated_text,
            prompt: request.prompt.clone(),
        })
    }

    pub async fn summarize(&self, request: &SummarizeRequest) -> Result<Summary, ProviderError> {
        let prompt = prompts::summarize_prompt(request);
        let summary = self
            .complete("summarize", &prompt, prompts::SUMMARIZE_TEMPERATURE)
            .await?;

        Ok(Summary {
            original_length: request.text.chars().count(),
            summary_length: summary.chars().count(),
            summary,
        })
    }

    pub async fn translate(&self, request: &TranslateRequest) -> Result<Translation, ProviderError> {
        let prompt = prompts::translate_prompt(request);
        let translated = self
            .complete("translate", &prompt, prompts::TRANSLATE_TEMPERATURE)
            .await?;

        Ok(Translation {
            original: request.text.clone(),
            translated,
            target_language: request.target_language.clone(),
        })
    }

    pub async fn explain_code(&self, request: &CodeExplainRequest) -> Result<CodeExplanation, ProviderError> {
        let prompt = prompts::explain_code_prompt(request);
        let explanation = self
            .complete("explain-code", &prompt, prompts::EXPLAIN_CODE_TEMPERATURE)
            .await?;

        Ok(CodeExplanation {
            code: request.code.clone(),
            language: request.language().to_string(),
            explanation,
        })
    }

    pub async fn answer(&self, request: &QaRequest) -> Result<Answer, ProviderError> {
        let prompt = prompts::qa_prompt(request);
        let answer = self.complete("qa", &prompt, prompts::QA_TEMPERATURE).await?;

        Ok(Answer {
            question: request.question.clone(),
            answer,
            context_provided: request.effective_context().is_some(),
        })
    }
}
