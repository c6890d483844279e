//! Mock model client for testing.

use super::{ModelClient, ProviderError, SamplingParams};
use async_trait::async_trait;
use std::sync::Mutex;

/// A recorded `complete` call
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub prompt: String,
    pub params: SamplingParams,
}

enum Reply {
    Text(String),
    Fail(String),
}

/// Model client returning a canned reply and recording every prompt it receives.
pub struct MockModelClient {
    reply: Reply,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockModelClient {
    /// Always answer with `text`
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Reply::Text(text.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Always fail with an API error carrying `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Reply::Fail(message.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls received so far
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    /// Prompt of the most recent call
    pub fn last_prompt(&self) -> Option<String> {
        self.calls().last().map(|call| call.prompt.clone())
    }
}

#[async_trait]
impl ModelClient for MockModelClient {
    fn model(&self) -> &str {
        "mock-model"
    }

    async fn complete(&self, prompt: &str, params: SamplingParams) -> Result<String, ProviderError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                prompt: prompt.to_string(),
                params,
            });
        }

        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Fail(message) => Err(ProviderError::Api {
                status: 500,
                message: message.clone(),
            }),
        }
    }
}
