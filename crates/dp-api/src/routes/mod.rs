//! API route definitions and router builder.

pub mod ai;
pub mod health;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.cors_origins);

    let api = Router::new()
        .route("/parse", post(ai::parse))
        .route("/suggestions", post(ai::suggestions))
        .route("/quick-actions", get(ai::quick_actions))
        .route("/quick-actions/{id}", get(ai::quick_action))
        .route("/health", get(health::ai_health));

    Router::new()
        .route("/health", get(health::health))
        .nest("/api/ai", api)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Permissive CORS unless specific origins are configured.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(AllowOrigin::list(allowed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(AppState::with_rules().unwrap())
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn ai_health_reports_resolver() {
        let response = app()
            .oneshot(Request::get("/api/ai/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "AI Router");
        assert_eq!(json["resolver"], "rules");
    }

    #[tokio::test]
    async fn parse_quarterly_report() {
        let response = app()
            .oneshot(post_json(
                "/api/ai/parse",
                serde_json::json!({
                    "message": "Create a quarterly report for Q4 2024",
                    "context": "home"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["intent"], "create_document");
        assert_eq!(json["parameters"]["title"], "Q4 2024");
        assert_eq!(json["parameters"]["template_type"], "report");
        assert_eq!(json["parameters"]["year"], "2024");
        assert_eq!(json["confidence"], 0.8);
        assert_eq!(json["action"]["type"], "navigate");
        assert_eq!(json["action"]["target"], "/dashboard-docx");
        assert_eq!(json["tier"], "rules");
        assert!(json["request_id"].is_string());
        assert!(json["resolved_at"].is_string());
    }

    #[tokio::test]
    async fn parse_without_context() {
        let response = app()
            .oneshot(post_json("/api/ai/parse", serde_json::json!({"message": "xyz123"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["intent"], "unknown");
        assert_eq!(json["confidence"], 0.0);
        assert!(json["action"].is_null());
        assert_eq!(json["parameters"], serde_json::json!({}));
    }

    #[tokio::test]
    async fn parse_rejects_blank_message() {
        let response = app()
            .oneshot(post_json("/api/ai/parse", serde_json::json!({"message": "   "})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["status"], 400);
    }

    #[tokio::test]
    async fn suggestions_for_context() {
        let response = app()
            .oneshot(post_json(
                "/api/ai/suggestions",
                serde_json::json!({"context": "xlsx"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["suggestions"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn suggestions_for_unknown_context_are_empty() {
        let response = app()
            .oneshot(post_json(
                "/api/ai/suggestions",
                serde_json::json!({"context": "settings"}),
            ))
            .await
            .unwrap();

        let json = body_json(response).await;
        assert!(json["suggestions"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_quick_actions() {
        let response = app()
            .oneshot(
                Request::get("/api/ai/quick-actions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let actions = json["actions"].as_array().unwrap();
        assert_eq!(actions.len(), 4);
        assert_eq!(actions[0]["id"], "quick-report");
    }

    #[tokio::test]
    async fn get_quick_action_found() {
        let response = app()
            .oneshot(
                Request::get("/api/ai/quick-actions/quick-budget")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["id"], "quick-budget");
    }

    #[tokio::test]
    async fn get_quick_action_not_found() {
        let response = app()
            .oneshot(
                Request::get("/api/ai/quick-actions/quick-nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn cors_skips_invalid_origins() {
        // must not panic on a value that is not a valid header
        let _ = cors_layer(&["http://localhost:5173".to_string(), "bad\norigin".to_string()]);
    }
}
