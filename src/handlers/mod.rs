//! HTTP handlers module
//!
//! Contains all HTTP endpoint handling logic

pub mod content;
pub mod health;

use crate::config::Settings;
use crate::middleware::request_logging_middleware;
use crate::providers::{GeminiProvider, ModelClient, ProviderError};
use crate::services::ContentService;
use crate::utils::error::{AppError, AppResult};
use anyhow::{Context, Result};
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Uri},
    middleware,
    routing::{get, post},
    Router,
};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Application state
pub struct AppState {
    pub settings: Settings,
    /// Built on first content request, then shared read-only
    model_client: OnceCell<Arc<dyn ModelClient>>,
}

impl AppState {
    /// State whose model client is built lazily from `settings.gemini`
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            model_client: OnceCell::new(),
        }
    }

    /// State with an already constructed model client
    pub fn with_model_client(settings: Settings, client: Arc<dyn ModelClient>) -> Self {
        Self {
            settings,
            model_client: OnceCell::with_value(client),
        }
    }

    /// Shared model client, created on first use
    pub fn model_client(&self) -> Result<Arc<dyn ModelClient>, ProviderError> {
        self.model_client
            .get_or_try_init(|| {
                let provider = GeminiProvider::from_config(&self.settings.gemini)?;
                info!("Gemini client initialized for model {}", provider.model());
                Ok(Arc::new(provider) as Arc<dyn ModelClient>)
            })
            .cloned()
    }

    pub fn content_service(&self) -> AppResult<ContentService> {
        Ok(ContentService::new(self.model_client()?))
    }
}

/// Create application router backed by the Gemini provider
pub fn create_router(settings: Settings) -> Result<Router> {
    create_router_with_state(Arc::new(AppState::new(settings)))
}

/// Create application router over prepared state
pub fn create_router_with_state(state: Arc<AppState>) -> Result<Router> {
    let settings = state.settings.clone();

    let mut router = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/api/stats", get(health::stats))
        .route("/api/generate", post(content::generate))
        .route("/api/summarize", post(content::summarize))
        .route("/api/translate", post(content::translate))
        .route("/api/explain-code", post(content::explain_code))
        .route("/api/qa", post(content::question_answer))
        .fallback(not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(settings.request.max_request_size))
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(TraceLayer::new_for_http());

    if settings.security.cors_enabled {
        router = router.layer(cors_layer(&settings)?);
    }

    Ok(router)
}

fn cors_layer(settings: &Settings) -> Result<CorsLayer> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if settings.allows_any_origin() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = settings
        .security
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
