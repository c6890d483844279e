//! Data models module
//!
//! Defines request and response data structures for the content endpoints and the Gemini API

use serde::{Deserialize, Serialize};

pub mod content;
pub mod gemini;

/// Success envelope wrapped around every content endpoint result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Always true on this path; failures go through `AppError`
    pub success: bool,
    /// Task-specific payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human readable status message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful result with a status message
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}
