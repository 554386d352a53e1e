//! Shared test harness for E2E integration tests.
//!
//! Wraps the real `dp-api` router so tests exercise HTTP parsing, resolver
//! selection and the rule engine together.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use dp_api::config::ResolverMode;
use dp_api::inference::{self, ClaudeConfig, IntentResolver};
use dp_api::routes::build_router;
use dp_api::state::AppState;

/// End-to-end test harness around the AI router.
pub struct TestHarness {
    pub state: AppState,
    pub router: Router,
}

impl TestHarness {
    /// Rule-only router, as served when no API key is configured.
    pub fn rules() -> Self {
        Self::from_state(AppState::with_rules().unwrap())
    }

    /// Router whose Claude tier talks to `base_url` (a wiremock server).
    pub fn with_claude(mode: ResolverMode, base_url: &str) -> Self {
        let resolver = inference::build_resolver(mode, Some(claude_config(base_url))).unwrap();
        Self::with_resolver(resolver, mode)
    }

    pub fn with_resolver(resolver: Arc<dyn IntentResolver>, mode: ResolverMode) -> Self {
        Self::from_state(AppState::new(resolver, mode))
    }

    fn from_state(state: AppState) -> Self {
        let router = build_router(state.clone());
        Self { state, router }
    }

    /// POST /api/ai/parse. Returns (HTTP status code, response JSON body).
    pub async fn parse(&self, message: &str, context: &str) -> (StatusCode, serde_json::Value) {
        let body = serde_json::json!({ "message": message, "context": context });
        self.post("/api/ai/parse", &body).await
    }

    pub async fn post(&self, uri: &str, body: &serde_json::Value) -> (StatusCode, serde_json::Value) {
        let request = Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap();
        self.send(request).await
    }

    /// POST without decoding the body (for framework-level rejections).
    pub async fn post_status(&self, uri: &str, body: &serde_json::Value) -> StatusCode {
        let request = Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap();
        self.router.clone().oneshot(request).await.unwrap().status()
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }
}

/// Claude settings pointed at a mock server, with a short timeout.
pub fn claude_config(base_url: &str) -> ClaudeConfig {
    ClaudeConfig {
        api_key: "sk-e2e".into(),
        base_url: base_url.into(),
        model: "claude-e2e".into(),
        max_tokens: 256,
        timeout_secs: 1,
    }
}

/// Messages API response body with the given content blocks.
pub fn claude_message(content: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "id": "msg_e2e",
        "type": "message",
        "role": "assistant",
        "model": "claude-e2e",
        "content": content,
        "stop_reason": "end_turn"
    })
}
