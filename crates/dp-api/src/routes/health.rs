//! Health check endpoints.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::state::AppState;

/// GET /health — liveness check.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /api/ai/health — AI router status and active resolver mode.
pub async fn ai_health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "AI Router",
        "resolver": state.mode.as_str(),
        "tier": state.resolver.tier_name(),
    }))
}
