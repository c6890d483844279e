//! Prompt builder
//!
//! Renders validated request fields into a single instruction string per task

use crate::models::content::*;

/// Summary length phrases
const SHORT_SUMMARY: &str = "in 2-3 sentences";
const MEDIUM_SUMMARY: &str = "in 1 paragraph";
const LONG_SUMMARY: &str = "in 2-3 paragraphs";

/// Fixed temperatures for the non-generate tasks
pub const SUMMARIZE_TEMPERATURE: f64 = 0.3;
pub const TRANSLATE_TEMPERATURE: f64 = 0.3;
pub const EXPLAIN_CODE_TEMPERATURE: f64 = 0.5;
pub const QA_TEMPERATURE: f64 = 0.7;

/// Map a requested summary length to its instruction phrase.
/// Unknown or missing values read as `medium`.
pub fn length_instruction(length: Option<&str>) -> &'static str {
    match length {
        Some("short") => SHORT_SUMMARY,
        Some("long") => LONG_SUMMARY,
        _ => MEDIUM_SUMMARY,
    }
}

pub fn generate_prompt(request: &GenerateRequest) -> String {
    request.prompt.clone()
}

pub fn summarize_prompt(request: &SummarizeRequest) -> String {
    format!(
        "Summarize the following text {}:\n\n{}",
        length_instruction(request.length.as_deref()),
        request.text
    )
}

pub fn translate_prompt(request: &TranslateRequest) -> String {
    format!(
        "Translate the following text to {}:\n\n{}",
        request.target_language, request.text
    )
}

pub fn explain_code_prompt(request: &CodeExplainRequest) -> String {
    let language = request.language();
    format!(
        "Explain the following {language} code in simple terms, including:\n\
         1. What it does\n\
         2. How it works\n\
         3. Key concepts used\n\
         \n\
         Code:\n\
         ```{fence}\n\
         {code}\n\
         ```",
        language = language,
        fence = language.to_lowercase(),
        code = request.code
    )
}

/// The context line is rendered only for a non-empty context
pub fn qa_prompt(request: &QaRequest) -> String {
    match request.effective_context() {
        Some(context) => format!(
            "Context: {}\n\nQuestion: {}\n\nProvide a detailed answer:",
            context, request.question
        ),
        None => format!("Question: {}\n\nProvide a detailed answer:", request.question),
    }
}
