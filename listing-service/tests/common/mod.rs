#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use listing_service::services::providers::mock::MockCompletionProvider;
use listing_service::{build_router, AppState};
use std::sync::Arc;
use tower::util::ServiceExt;

pub const TEST_MODEL: &str = "gpt-4o";

/// Compact provider response with keys deliberately out of alphabetical order.
pub const COMPLETION_JSON: &str = r#"{"id":"chatcmpl-123","object":"chat.completion","created":1700000000,"model":"gpt-4o-2024-08-06","choices":[{"index":0,"message":{"role":"assistant","content":"{\"title\":\"Vintage lamp\"}"},"finish_reason":"stop"}],"usage":{"prompt_tokens":12,"completion_tokens":9,"total_tokens":21}}"#;

pub fn completion() -> serde_json::Value {
    serde_json::from_str(COMPLETION_JSON).expect("Invalid completion fixture")
}

pub struct TestRouter {
    pub router: Router,
    pub provider: Arc<MockCompletionProvider>,
}

impl TestRouter {
    pub fn responding() -> Self {
        Self::with_provider(MockCompletionProvider::responding(completion()))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_provider(MockCompletionProvider::failing(message))
    }

    fn with_provider(provider: MockCompletionProvider) -> Self {
        let provider = Arc::new(provider);
        let state = AppState::new(TEST_MODEL, provider.clone());
        Self {
            router: build_router(state),
            provider,
        }
    }

    pub async fn send(&self, method: &str, uri: &str, body: &str) -> Response<Body> {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body")
        .to_vec()
}
