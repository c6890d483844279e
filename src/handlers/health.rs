//! Health and meta handlers
//!
//! Service banner, configuration health and static capability listing

use crate::handlers::AppState;
use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Features served by the content endpoints
pub const FEATURES: [&str; 5] = [
    "Text Generation",
    "Summarization",
    "Translation",
    "Code Explanation",
    "Question Answering",
];

/// Root banner
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub endpoints: EndpointMap,
}

/// Paths of the public endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct EndpointMap {
    pub health: String,
    pub stats: String,
    pub generate: String,
    pub summarize: String,
    pub translate: String,
    #[serde(rename = "explain-code")]
    pub explain_code: String,
    #[serde(rename = "question-answer")]
    pub question_answer: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Process state
    pub service: String,
    /// `configured` when an API key is present, `not_configured` otherwise
    pub gemini_api: String,
    /// Version information
    pub version: String,
    /// Timestamp
    pub timestamp: String,
}

/// Static capability listing
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub endpoints: usize,
    pub models_used: Vec<String>,
    pub features: Vec<String>,
}

/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Smart Content Generator API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: EndpointMap {
            health: "/health".to_string(),
            stats: "/api/stats".to_string(),
            generate: "/api/generate".to_string(),
            summarize: "/api/summarize".to_string(),
            translate: "/api/translate".to_string(),
            explain_code: "/api/explain-code".to_string(),
            question_answer: "/api/qa".to_string(),
        },
    })
}

/// GET /health
///
/// Reports whether a key is configured. The key itself is never checked against the provider.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    debug!("Executing health check");

    let gemini_api = if state.settings.gemini.is_configured() {
        "configured"
    } else {
        "not_configured"
    };

    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "running".to_string(),
        gemini_api: gemini_api.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /api/stats
pub async fn stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    Json(StatsResponse {
        endpoints: FEATURES.len(),
        models_used: vec![state.settings.gemini.model.clone()],
        features: FEATURES.iter().map(|f| f.to_string()).collect(),
    })
}
