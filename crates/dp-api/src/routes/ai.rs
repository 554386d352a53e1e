//! AI router endpoints: request parsing and assistant catalogs.

use axum::Json;
use axum::extract::{Path, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::Instrument;
use uuid::Uuid;

use dp_protocol::{ParsedRequest, QuickAction, ToolSuggestion};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Context assumed when the client does not say which page it is on.
const DEFAULT_CONTEXT: &str = "home";

/// Request body for parsing a natural-language message.
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    /// Free text typed by the user.
    pub message: String,
    /// Dashboard page the message was sent from.
    #[serde(default)]
    pub context: Option<String>,
}

/// A parsed request plus resolution metadata.
#[derive(Debug, Serialize)]
pub struct ParseResponse {
    #[serde(flatten)]
    pub parsed: ParsedRequest,
    /// Resolver tier that produced the result.
    pub tier: String,
    pub request_id: Uuid,
    pub resolved_at: DateTime<Utc>,
}

/// POST /api/ai/parse — resolve a message into intent, parameters and action.
pub async fn parse(
    State(state): State<AppState>,
    Json(req): Json<ParseRequest>,
) -> ApiResult<Json<ParseResponse>> {
    if req.message.trim().is_empty() {
        return Err(ApiError::BadRequest("message must not be empty".into()));
    }

    let context = req.context.as_deref().unwrap_or(DEFAULT_CONTEXT);
    let request_id = Uuid::now_v7();
    let span = tracing::info_span!("parse", %request_id, context);

    let resolution = state
        .resolver
        .resolve(&req.message, context)
        .instrument(span)
        .await?;

    tracing::info!(
        request_id = %request_id,
        intent = %resolution.parsed.intent,
        confidence = resolution.parsed.confidence,
        tier = %resolution.tier,
        "message resolved"
    );

    Ok(Json(ParseResponse {
        parsed: resolution.parsed,
        tier: resolution.tier,
        request_id,
        resolved_at: Utc::now(),
    }))
}

/// Request body for contextual tool suggestions.
#[derive(Debug, Deserialize)]
pub struct SuggestionsRequest {
    #[serde(default)]
    pub context: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<ToolSuggestion>,
}

/// POST /api/ai/suggestions — tool suggestions for the current page.
pub async fn suggestions(Json(req): Json<SuggestionsRequest>) -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        suggestions: dp_intent::tool_suggestions(&req.context),
    })
}

#[derive(Debug, Serialize)]
pub struct QuickActionsResponse {
    pub actions: Vec<QuickAction>,
}

/// GET /api/ai/quick-actions — canned prompts for the assistant panel.
pub async fn quick_actions() -> Json<QuickActionsResponse> {
    Json(QuickActionsResponse {
        actions: dp_intent::quick_actions(),
    })
}

/// GET /api/ai/quick-actions/{id} — one canned prompt.
pub async fn quick_action(Path(id): Path<String>) -> ApiResult<Json<QuickAction>> {
    dp_intent::quick_action(&id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("quick action '{id}' not found")))
}
