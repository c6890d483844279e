//! Provider module
//!
//! Defines the `ModelClient` trait and its implementations

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a model client call
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Failed to create HTTP client: {0}")]
    Client(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Prompt blocked: {0}")]
    Blocked(String),

    #[error("Empty response: {0}")]
    EmptyResponse(String),

    #[error("Failed to parse response: {0}")]
    InvalidResponse(String),
}

/// Sampling parameters sent with every completion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
}

impl SamplingParams {
    pub const DEFAULT_TOP_P: f64 = 0.95;
    pub const DEFAULT_TOP_K: u32 = 40;

    /// Default nucleus/top-k settings with the given temperature
    pub fn with_temperature(temperature: f64) -> Self {
        Self {
            temperature,
            top_p: Self::DEFAULT_TOP_P,
            top_k: Self::DEFAULT_TOP_K,
        }
    }
}

/// Single choke point for outbound text generation
///
/// Implementations must be shareable across request tasks.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Model identifier used for every call
    fn model(&self) -> &str;

    /// Send one prompt and return the generated text
    async fn complete(&self, prompt: &str, params: SamplingParams) -> Result<String, ProviderError>;
}

pub use gemini::GeminiProvider;
pub use mock::MockModelClient;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampling_defaults() {
        let params = SamplingParams::with_temperature(0.3);
        assert_eq!(params.temperature, 0.3);
        assert_eq!(params.top_p, 0.95);
        assert_eq!(params.top_k, 40);
    }

    #[test]
    fn test_error_messages_keep_details() {
        let err = ProviderError::Api {
            status: 403,
            message: "API key not valid".to_string(),
        };
        assert_eq!(err.to_string(), "API error 403: API key not valid");
    }
}
