//! Content task handlers
//!
//! POST /api/generate, /api/summarize, /api/translate, /api/explain-code and /api/qa

use crate::handlers::AppState;
use crate::middleware::ValidatedJson;
use crate::models::content::*;
use crate::models::ApiResponse;
use crate::utils::error::AppResult;
use axum::{extract::State, Json};
use std::sync::Arc;

/// POST /api/generate
pub async fn generate(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<GenerateRequest>,
) -> AppResult<Json<ApiResponse<GeneratedText>>> {
    let data = state.content_service()?.generate(&request).await?;
    Ok(Json(ApiResponse::success(data, "Text generated successfully")))
}

/// POST /api/summarize
pub async fn summarize(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<SummarizeRequest>,
) -> AppResult<Json<ApiResponse<Summary>>> {
    let data = state.content_service()?.summarize(&request).await?;
    Ok(Json(ApiResponse::success(data, "Text summarized successfully")))
}

/// POST /api/translate
pub async fn translate(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<TranslateRequest>,
) -> AppResult<Json<ApiResponse<Translation>>> {
    let data = state.content_service()?.translate(&request).await?;
    Ok(Json(ApiResponse::success(data, "Translation successful")))
}

/// POST /api/explain-code
pub async fn explain_code(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CodeExplainRequest>,
) -> AppResult<Json<ApiResponse<CodeExplanation>>> {
    let data = state.content_service()?.explain_code(&request).await?;
    Ok(Json(ApiResponse::success(data, "Code explained successfully")))
}

/// POST /api/qa
pub async fn question_answer(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<QaRequest>,
) -> AppResult<Json<ApiResponse<Answer>>> {
    let data = state.content_service()?.answer(&request).await?;
    Ok(Json(ApiResponse::success(data, "Question answered successfully")))
}
