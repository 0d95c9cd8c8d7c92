//! Integration tests for `POST /chat`.

mod common;

use common::TestApp;
use serde_json::json;
use textbook_service::services::prompt::SYSTEM_INSTRUCTION;
use textbook_service::services::providers::mock::MockBehavior;

#[tokio::test]
async fn unconfigured_backend_returns_warning_with_200() {
    let app = TestApp::spawn_unconfigured().await;

    let response = app
        .post_json("/chat", &json!({ "message": "What is PID control?" }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body["reply"],
        "⚠️ Backend Configuration Error: GEMINI_API_KEY missing or invalid."
    );
    assert_eq!(body["sources"], json!([]));
}

#[tokio::test]
async fn bare_question_sends_two_segments() {
    let app = TestApp::spawn(MockBehavior::Echo).await;

    let response = app
        .post_json("/chat", &json!({ "message": "What is PID control?" }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body["reply"],
        "Mock response for: Student Question: What is PID control?"
    );
    assert_eq!(body["sources"], json!(["Generated via Mock"]));

    assert_eq!(
        app.last_segments(),
        vec![
            SYSTEM_INSTRUCTION.to_string(),
            "Student Question: What is PID control?".to_string()
        ]
    );
}

#[tokio::test]
async fn profile_and_context_are_forwarded() {
    let app = TestApp::spawn(MockBehavior::Echo).await;

    let response = app
        .post_json(
            "/chat",
            &json!({
                "message": "How do I tune it?",
                "context": "Week 5: PID controllers",
                "user_profile": {
                    "user_id": "1",
                    "name": "Ada",
                    "software_background": "Rust",
                    "hardware_background": "STM32 boards"
                }
            }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let segments = app.last_segments();
    assert_eq!(segments.len(), 4);
    assert!(segments
        .iter()
        .any(|s| s.contains("Rust") && s.contains("STM32 boards")));
    assert!(segments[2].contains("Week 5: PID controllers"));
    assert_eq!(segments[3], "Student Question: How do I tune it?");
}

#[tokio::test]
async fn blocked_generation_is_a_warning_not_an_error() {
    let app = TestApp::spawn(MockBehavior::Blocked("SAFETY".to_string())).await;

    let response = app.post_json("/chat", &json!({ "message": "hi" })).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    let reply = body["reply"].as_str().unwrap();
    assert!(reply.contains("SAFETY"));
}

#[tokio::test]
async fn empty_generation_returns_safety_warning() {
    let app = TestApp::spawn(MockBehavior::Empty).await;

    let response = app.post_json("/chat", &json!({ "message": "hi" })).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body["reply"],
        "⚠️ The model returned an empty response (Safety Filter likely triggered)."
    );
}

#[tokio::test]
async fn backend_failure_returns_500_with_ai_error_detail() {
    let app = TestApp::spawn(MockBehavior::Fail("quota exhausted".to_string())).await;

    let response = app.post_json("/chat", &json!({ "message": "hi" })).await;
    assert_eq!(response.status().as_u16(), 500);

    let body: serde_json::Value = response.json().await.unwrap();
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.starts_with("AI Error:"));
    assert!(detail.contains("quota exhausted"));
}

#[tokio::test]
async fn missing_message_is_rejected_before_backend() {
    let app = TestApp::spawn(MockBehavior::Echo).await;

    let response = app.post_json("/chat", &json!({ "context": "x" })).await;
    assert!(response.status().is_client_error());
    assert_eq!(app.backend_calls(), 0);
}
