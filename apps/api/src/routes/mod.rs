pub mod health;

use std::path::Path;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Uri},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    services::ServeDir,
};

use crate::chat::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/chat", post(handlers::handle_chat))
        // Frontend assets
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .with_state(state)
}

/// CORS for the single frontend origin, with credentials.
/// Credentials rule out wildcard methods/headers, so both mirror the request.
pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(allowed_origin)
        .with_context(|| format!("ALLOWED_ORIGIN '{allowed_origin}' is not a valid header value"))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::llm_client::{LlmError, TextGenerator};
    use crate::resume::ResumeText;

    /// Answers with the last line of the prompt so the route output is checkable.
    struct EchoGenerator;

    #[async_trait]
    impl TextGenerator for EchoGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            Ok(format!("  - {}  ", prompt.lines().last().unwrap_or_default()))
        }
    }

    struct DownGenerator;

    #[async_trait]
    impl TextGenerator for DownGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 503,
                message: "The model is overloaded".to_string(),
            })
        }
    }

    fn app(llm: Arc<dyn TextGenerator>, static_dir: &Path) -> Router {
        let state = AppState {
            llm,
            resume: Arc::new(ResumeText::extracted("Jane Doe, Rust".to_string(), 1)),
        };
        build_router(state, static_dir)
    }

    fn chat_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_chat_returns_trimmed_answer() {
        let dir = tempfile::tempdir().unwrap();
        let response = app(Arc::new(EchoGenerator), dir.path())
            .oneshot(chat_request(r#"{"message": "Where do you work?"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({"response": "- User: Where do you work?"})
        );
    }

    #[tokio::test]
    async fn test_chat_generation_failure_is_200_with_error_payload() {
        let dir = tempfile::tempdir().unwrap();
        let response = app(Arc::new(DownGenerator), dir.path())
            .oneshot(chat_request(r#"{"message": "hi"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["code"], "GENERATION_FAILED");
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("The model is overloaded"));
    }

    #[tokio::test]
    async fn test_chat_rejects_malformed_body() {
        let dir = tempfile::tempdir().unwrap();
        let response = app(Arc::new(EchoGenerator), dir.path())
            .oneshot(chat_request(r#"{"msg": 1}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_health_reports_resume_status() {
        let dir = tempfile::tempdir().unwrap();
        let response = app(Arc::new(EchoGenerator), dir.path())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["resume_status"], json!({"kind": "extracted", "pages": 1}));
    }

    #[tokio::test]
    async fn test_static_files_are_served() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>chat</h1>").unwrap();

        let response = app(Arc::new(EchoGenerator), dir.path())
            .oneshot(Request::get("/static/index.html").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"<h1>chat</h1>");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let response = app(Arc::new(EchoGenerator), dir.path())
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_cors_allows_configured_origin_with_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let router = app(Arc::new(EchoGenerator), dir.path())
            .layer(cors_layer("https://deepz.me").unwrap());

        let response = router
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/chat")
                    .header(header::ORIGIN, "https://deepz.me")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://deepz.me"
        );
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST");
    }

    #[test]
    fn test_cors_rejects_invalid_origin() {
        assert!(cors_layer("https://bad\norigin").is_err());
    }
}
