//! Gemini provider implementation
//!
//! Calls the Gemini REST API with a fixed model identifier

use super::{ModelClient, ProviderError, SamplingParams};
use crate::config::GeminiConfig;
use crate::models::gemini::*;
use crate::utils::logging::truncate_content;
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, error};

/// Header carrying the API key
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini Provider
#[derive(Debug, Clone)]
pub struct GeminiProvider {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiProvider {
    /// Build a provider from configuration
    ///
    /// Fails with `NotConfigured` when no API key is present.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, ProviderError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| ProviderError::NotConfigured("GEMINI_API_KEY is not set".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent(concat!("smart-content-api/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProviderError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.trim_start_matches("models/").to_string(),
            api_key,
        })
    }

    /// Build the request URL for a model method
    fn api_url(&self, method: &str) -> String {
        format!("{}/models/{}:{}", self.base_url, self.model, method)
    }

    /// List every model visible to the API key, following pagination
    pub async fn list_models(&self) -> Result<Vec<ModelInfo>, ProviderError> {
        let url = format!("{}/models", self.base_url);
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self.client.get(&url).header(API_KEY_HEADER, &self.api_key);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token)]);
            }

            let response = request
                .send()
                .await
                .map_err(|e| ProviderError::Network(e.to_string()))?;

            if !response.status().is_success() {
                return Err(error_from_response(response).await);
            }

            let page: ListModelsResponse = response
                .json()
                .await
                .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

            models.extend(page.models);

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        debug!("Listed {} Gemini models", models.len());
        Ok(models)
    }
}

#[async_trait]
impl ModelClient for GeminiProvider {
    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &str, params: SamplingParams) -> Result<String, ProviderError> {
        let request = GenerateContentRequest::from_prompt(
            prompt,
            GenerationConfig {
                temperature: params.temperature,
                top_p: params.top_p,
                top_k: params.top_k,
            },
        );

        debug!(
            model = %self.model,
            prompt_len = prompt.chars().count(),
            temperature = params.temperature,
            "Sending request to Gemini API: {}",
            truncate_content(prompt, 120)
        );

        let response = self
            .client
            .post(self.api_url("generateContent"))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        if let Some(text) = body.text() {
            debug!(output_len = text.chars().count(), "Gemini request completed successfully");
            return Ok(text);
        }

        if let Some(reason) = body.block_reason() {
            return Err(ProviderError::Blocked(reason.to_string()));
        }

        let detail = match body.finish_reason() {
            Some(reason) => format!("candidate finished with {} and no text", reason),
            None => "no candidates returned".to_string(),
        };
        Err(ProviderError::EmptyResponse(detail))
    }
}

/// Turn a non-2xx response into a provider error, preferring the structured message
async fn error_from_response(response: Response) -> ProviderError {
    let status = response.status();
    let error_text = response.text().await.unwrap_or_default();

    let message = match serde_json::from_str::<GeminiErrorResponse>(&error_text) {
        Ok(error_response) => error_response.error.message,
        Err(_) => error_text,
    };

    error!("Gemini API request failed: {} - {}", status, message);
    ProviderError::Api {
        status: status.as_u16(),
        message,
    }
}
