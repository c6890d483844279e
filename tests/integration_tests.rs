//! Integration tests
//!
//! Drive the full router with a recording mock model client

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use smart_content_api::providers::MockModelClient;
use smart_content_api::{create_router, create_router_with_state, AppState, Settings};
use std::sync::Arc;
use tower::ServiceExt;

/// Build an app around the given mock
fn create_test_app(mock: &Arc<MockModelClient>) -> Router {
    let state = AppState::with_model_client(Settings::default(), mock.clone());
    create_router_with_state(Arc::new(state)).expect("Failed to create router")
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_root_endpoint() {
    let mock = Arc::new(MockModelClient::replying("unused"));
    let (status, body) = send(create_test_app(&mock), get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Smart Content Generator API");
    assert_eq!(body["endpoints"]["explain-code"], "/api/explain-code");
    assert_eq!(body["endpoints"]["question-answer"], "/api/qa");
}

#[tokio::test]
async fn test_health_without_key() {
    let app = create_router(Settings::default()).unwrap();
    let (status, body) = send(app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "running");
    assert_eq!(body["gemini_api"], "not_configured");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_health_with_key() {
    let mut settings = Settings::default();
    settings.gemini.api_key = Some("definitely-not-valid".to_string());
    let app = create_router(settings).unwrap();

    let (status, body) = send(app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["gemini_api"], "configured");
}

#[tokio::test]
async fn test_stats_endpoint() {
    let mock = Arc::new(MockModelClient::replying("unused"));
    let (status, body) = send(create_test_app(&mock), get("/api/stats")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["endpoints"], 5);
    assert_eq!(body["features"].as_array().unwrap().len(), 5);
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn test_generate_success() {
    let mock = Arc::new(MockModelClient::replying("Once upon a time"));
    let request = post_json(
        "/api/generate",
        json!({"prompt": "Write a story", "temperature": 0.8, "max_tokens": 500}),
    );

    let (status, body) = send(create_test_app(&mock), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Text generated successfully");
    assert_eq!(body["data"]["generated_text"], "Once upon a time");
    assert_eq!(body["data"]["prompt"], "Write a story");

    let calls = mock.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].prompt, "Write a story");
    assert_eq!(calls[0].params.temperature, 0.8);
}

#[tokio::test]
async fn test_generate_rejects_temperature_out_of_range() {
    let mock = Arc::new(MockModelClient::replying("unused"));
    let request = post_json("/api/generate", json!({"prompt": "Hello", "temperature": 2.5}));

    let (status, body) = send(create_test_app(&mock), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert!(body["detail"].as_str().unwrap().contains("temperature"));
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn test_generate_rejects_temperature_just_above_max() {
    let mock = Arc::new(MockModelClient::replying("unused"));
    let request = post_json("/api/generate", json!({"prompt": "hi", "temperature": 2.00000001}));

    let (status, body) = send(create_test_app(&mock), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].as_str().unwrap().contains("temperature"));
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn test_generate_keeps_exact_temperature() {
    let mock = Arc::new(MockModelClient::replying("ok"));
    let request = post_json("/api/generate", json!({"prompt": "hi", "temperature": 1.23456789}));

    let (status, _) = send(create_test_app(&mock), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(mock.calls()[0].params.temperature, 1.23456789);
}

#[tokio::test]
async fn test_generate_rejects_missing_prompt() {
    let mock = Arc::new(MockModelClient::replying("unused"));
    let request = post_json("/api/generate", json!({"temperature": 0.5}));

    let (status, body) = send(create_test_app(&mock), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["type"], "invalid_request_error");
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn test_generate_rejects_malformed_json() {
    let mock = Arc::new(MockModelClient::replying("unused"));
    let request = Request::builder()
        .method("POST")
        .uri("/api/generate")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = send(create_test_app(&mock), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn test_summarize_lengths() {
    let mock = Arc::new(MockModelClient::replying("X"));
    let text = "a".repeat(120);
    let request = post_json("/api/summarize", json!({"text": text, "length": "short"}));

    let (status, body) = send(create_test_app(&mock), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["summary"], "X");
    assert_eq!(body["data"]["original_length"], 120);
    assert_eq!(body["data"]["summary_length"], 1);

    let calls = mock.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].prompt.starts_with("Summarize the following text in 2-3 sentences:\n\n"));
    assert_eq!(calls[0].params.temperature, 0.3);
}

#[tokio::test]
async fn test_summarize_rejects_short_text() {
    let mock = Arc::new(MockModelClient::replying("unused"));
    let request = post_json("/api/summarize", json!({"text": "too short"}));

    let (status, _) = send(create_test_app(&mock), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn test_translate_ignores_client_temperature() {
    let mock = Arc::new(MockModelClient::replying("Hola"));
    let request = post_json(
        "/api/translate",
        json!({"text": "Hello", "target_language": "Spanish", "temperature": 1.9}),
    );

    let (status, body) = send(create_test_app(&mock), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["original"], "Hello");
    assert_eq!(body["data"]["translated"], "Hola");
    assert_eq!(body["data"]["target_language"], "Spanish");
    assert_eq!(mock.calls()[0].params.temperature, 0.3);
}

#[tokio::test]
async fn test_explain_code() {
    let mock = Arc::new(MockModelClient::replying("It prints"));
    let request = post_json(
        "/api/explain-code",
        json!({"code": "console.log(1)", "language": "JavaScript"}),
    );

    let (status, body) = send(create_test_app(&mock), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["language"], "JavaScript");
    assert_eq!(body["data"]["explanation"], "It prints");
    assert!(mock
        .last_prompt()
        .unwrap()
        .contains("```javascript\nconsole.log(1)\n```"));
    assert_eq!(mock.calls()[0].params.temperature, 0.5);
}

#[tokio::test]
async fn test_qa_without_context() {
    let mock = Arc::new(MockModelClient::replying("X is a letter"));
    let request = post_json("/api/qa", json!({"question": "What is X?"}));

    let (status, body) = send(create_test_app(&mock), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["context_provided"], false);
    assert_eq!(body["data"]["answer"], "X is a letter");
    assert!(!mock.last_prompt().unwrap().contains("Context:"));
    assert_eq!(mock.calls()[0].params.temperature, 0.7);
}

#[tokio::test]
async fn test_qa_with_context() {
    let mock = Arc::new(MockModelClient::replying("answer"));
    let request = post_json(
        "/api/qa",
        json!({"question": "What is X?", "context": "Alphabet lessons"}),
    );

    let (_, body) = send(create_test_app(&mock), request).await;

    assert_eq!(body["data"]["context_provided"], true);
    assert!(mock
        .last_prompt()
        .unwrap()
        .starts_with("Context: Alphabet lessons\n\nQuestion: What is X?"));
}

#[tokio::test]
async fn test_provider_failure_on_every_endpoint() {
    let cases = [
        ("/api/generate", json!({"prompt": "Hello"})),
        ("/api/summarize", json!({"text": "Some text worth summarizing"})),
        ("/api/translate", json!({"text": "Hello", "target_language": "Hindi"})),
        ("/api/explain-code", json!({"code": "x = 1"})),
        ("/api/qa", json!({"question": "What is X?"})),
    ];

    for (uri, payload) in cases {
        let mock = Arc::new(MockModelClient::failing("injected quota failure"));
        let (status, body) = send(create_test_app(&mock), post_json(uri, payload)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
        assert_eq!(body["success"], false);
        assert!(
            body["detail"].as_str().unwrap().contains("injected quota failure"),
            "{}",
            uri
        );
        assert_eq!(mock.calls().len(), 1, "{}", uri);
    }
}

#[tokio::test]
async fn test_content_endpoint_without_key() {
    let app = create_router(Settings::default()).unwrap();
    let request = post_json("/api/generate", json!({"prompt": "Hello"}));

    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["detail"].as_str().unwrap().contains("GEMINI_API_KEY"));
}

#[tokio::test]
async fn test_unknown_route() {
    let mock = Arc::new(MockModelClient::replying("unused"));
    let (status, body) = send(create_test_app(&mock), get("/api/unknown")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["type"], "not_found_error");
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let mock = Arc::new(MockModelClient::replying("unused"));
    let mut settings = Settings::default();
    settings.request.max_request_size = 64;
    let state = AppState::with_model_client(settings, mock.clone());
    let app = create_router_with_state(Arc::new(state)).unwrap();

    let request = post_json("/api/generate", json!({"prompt": "a".repeat(500)}));
    let (status, _) = send(app, request).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin_without_credentials() {
    let mock = Arc::new(MockModelClient::replying("unused"));
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/generate")
        .header("origin", "http://localhost:8501")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();

    let response = create_test_app(&mock).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert!(headers.get("access-control-allow-credentials").is_none());
}
