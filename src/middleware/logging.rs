//! Logging middleware
//!
//! One span per request, tagged with a request id and the content task it targets

use axum::{
    extract::Request,
    http::{HeaderMap, Method, Uri},
    middleware::Next,
    response::Response,
};
use std::time::{Duration, Instant};
use tracing::{info, warn, Instrument};
use uuid::Uuid;

/// Provider round trips slower than this are flagged
const SLOW_REQUEST_THRESHOLD: Duration = Duration::from_secs(10);

/// Request logging middleware
pub async fn request_logging_middleware(
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Response {
    let start_time = Instant::now();
    let span = tracing::info_span!(
        "http_request",
        request_id = %Uuid::new_v4(),
        method = %method,
        path = %uri.path(),
        task = task_name(uri.path()).unwrap_or("-"),
    );

    async move {
        info!(body_bytes = content_length(&headers).unwrap_or(0), "Request received");

        let response = next.run(request).await;

        let status = response.status().as_u16();
        let elapsed = start_time.elapsed();
        let millis = elapsed.as_millis() as u64;

        if response.status().is_server_error() {
            warn!(status, millis, "Request failed upstream");
        } else if response.status().is_client_error() {
            warn!(status, millis, "Request rejected");
        } else {
            info!(status, millis, "Request completed");
        }

        if elapsed > SLOW_REQUEST_THRESHOLD {
            warn!(millis, "Slow Gemini round trip");
        }

        response
    }
    .instrument(span)
    .await
}

/// Content task addressed by an `/api/<task>` path
fn task_name(path: &str) -> Option<&str> {
    path.strip_prefix("/api/").filter(|task| !task.is_empty())
}

fn content_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get("content-length")?
        .to_str()
        .ok()?
        .parse()
        .ok()
}
