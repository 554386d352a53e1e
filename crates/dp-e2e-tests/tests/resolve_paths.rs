//! E2E tests for rule-based resolution through the HTTP surface.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use dp_intent::suggest::HELP_TEXT;
use helpers::TestHarness;

#[tokio::test]
async fn e2e_quarterly_report() {
    let h = TestHarness::rules();

    let (status, json) = h.parse("Create a quarterly report for Q4 2024", "home").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["intent"], "create_document");
    assert_eq!(
        json["parameters"],
        json!({"title": "Q4 2024", "template_type": "report", "year": "2024"})
    );
    assert_eq!(json["confidence"], 0.8);
    assert_eq!(json["suggestion"], "Create a report document titled 'Q4 2024'");
    assert_eq!(
        json["action"],
        json!({
            "type": "navigate",
            "target": "/dashboard-docx",
            "pre_fill": {"template": "report", "title": "Q4 2024"}
        })
    );
}

#[tokio::test]
async fn e2e_budget_with_categories() {
    let h = TestHarness::rules();

    let (status, json) = h
        .parse(
            "Make a budget for 2025 with categories: Marketing, Sales, Operations",
            "xlsx",
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["intent"], "create_spreadsheet");
    assert_eq!(json["parameters"]["year"], "2025");
    assert_eq!(json["confidence"], 0.9);
    assert_eq!(json["suggestion"], "Create a budget spreadsheet for 2025");
    assert_eq!(json["action"]["target"], "/dashboard-xlsx");
    assert_eq!(
        json["action"]["pre_fill"]["categories"],
        json!(["Marketing", "Sales", "Operations"])
    );
}

#[tokio::test]
async fn e2e_brand_polish() {
    let h = TestHarness::rules();

    let (_, json) = h.parse("Apply McKinsey styling to my document", "polish").await;
    assert_eq!(json["intent"], "polish_document");
    assert_eq!(json["parameters"], json!({"brand": "mckinsey"}));
    assert_eq!(json["confidence"], 0.6);
    assert_eq!(json["action"]["pre_fill"]["brand"], "mckinsey");
}

#[tokio::test]
async fn e2e_help() {
    let h = TestHarness::rules();

    let (_, json) = h.parse("help", "home").await;
    assert_eq!(json["intent"], "get_help");
    assert_eq!(json["confidence"], 0.5);
    assert_eq!(json["suggestion"], HELP_TEXT);
    assert_eq!(json["action"]["type"], "show_help");
    assert_eq!(json["action"]["message"], "Here's what I can help you with...");
}

#[tokio::test]
async fn e2e_unrecognized_text() {
    let h = TestHarness::rules();

    let (status, json) = h.parse("xyz123", "home").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["intent"], "unknown");
    assert_eq!(json["confidence"], 0.0);
    assert_eq!(json["suggestion"], "Process your request");
    assert!(json["action"].is_null());
}

#[tokio::test]
async fn e2e_chain_builds_two_steps() {
    let h = TestHarness::rules();

    let (_, json) = h
        .parse("create the launch brief and theme it like stripe", "home")
        .await;
    assert_eq!(json["intent"], "chain_operations");

    let steps = json["action"]["steps"].as_array().unwrap();
    assert_eq!(json["action"]["type"], "multi_step");
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0]["tool"], "docx");
    assert_eq!(steps[1]["tool"], "themes");
    assert_eq!(steps[1]["parameters"], json!({"brand": "stripe"}));
}

/// Every quick-action prompt resolves to an actionable intent.
#[tokio::test]
async fn e2e_quick_action_prompts_resolve() {
    let h = TestHarness::rules();

    let (status, listing) = h.get("/api/ai/quick-actions").await;
    assert_eq!(status, StatusCode::OK);

    let expected = [
        ("quick-report", "create_document"),
        ("quick-budget", "create_spreadsheet"),
        ("quick-pitch", "create_presentation"),
        ("quick-memo", "create_document"),
    ];
    let actions = listing["actions"].as_array().unwrap();
    assert_eq!(actions.len(), expected.len());

    for (action, (id, intent)) in actions.iter().zip(expected) {
        assert_eq!(action["id"], id);
        let prompt = action["prompt"].as_str().unwrap();

        let (status, json) = h.parse(prompt, "home").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["intent"], intent, "prompt '{prompt}' should map to {intent}");
        assert!(json["action"].is_object(), "prompt '{prompt}' should carry an action");
    }
}

#[tokio::test]
async fn e2e_suggestions_per_page() {
    let h = TestHarness::rules();

    for (context, count) in [
        ("docx", 3),
        ("xlsx", 3),
        ("pptx", 3),
        ("pdf", 3),
        ("themes", 2),
        ("polish", 3),
        ("home", 0),
    ] {
        let (status, json) = h
            .post("/api/ai/suggestions", &json!({"context": context}))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json["suggestions"].as_array().unwrap().len(),
            count,
            "context '{context}'"
        );
    }
}

#[tokio::test]
async fn e2e_request_ids_are_unique() {
    let h = TestHarness::rules();

    let (_, first) = h.parse("help", "home").await;
    let (_, second) = h.parse("help", "home").await;

    let first_id: uuid::Uuid = first["request_id"].as_str().unwrap().parse().unwrap();
    let second_id: uuid::Uuid = second["request_id"].as_str().unwrap().parse().unwrap();
    assert_ne!(first_id, second_id);

    let resolved_at: chrono::DateTime<chrono::Utc> =
        first["resolved_at"].as_str().unwrap().parse().unwrap();
    assert!(resolved_at <= chrono::Utc::now());
}

#[tokio::test]
async fn e2e_missing_message_field_is_rejected() {
    let h = TestHarness::rules();

    let request = json!({"context": "home"});
    let status = h.post_status("/api/ai/parse", &request).await;
    assert!(status.is_client_error());
}
