mod common;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use common::{StubProvider, json_body};
use serde_json::json;
use summarize_gateway::api::lambda::handle_event;

#[tokio::test]
async fn test_http_api_event_is_summarized() {
    let provider = StubProvider::replying("This is a test summary");
    let event = json!({
        "rawPath": "/summarize",
        "headers": { "content-type": "application/json" },
        "body": r#"{"text": "This is a test text"}"#,
        "isBase64Encoded": false
    });

    let response = handle_event(&provider, &event).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(json_body(&response.body)["summary"], "This is a test summary");
}

#[tokio::test]
async fn test_rest_api_event_with_stage_prefix() {
    let provider = StubProvider::replying("ok");
    let event = json!({
        "path": "/prod/summarize",
        "body": r#"{"text": "abc"}"#
    });

    let response = handle_event(&provider, &event).await;

    assert_eq!(response.status_code, 200);
}

#[tokio::test]
async fn test_base64_body_is_decoded() {
    let provider = StubProvider::replying("ok");
    let event = json!({
        "rawPath": "/summarize",
        "body": STANDARD.encode(r#"{"text": "encoded"}"#),
        "isBase64Encoded": true
    });

    let response = handle_event(&provider, &event).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(
        provider.prompts(),
        vec!["Summarize the following text:\n\nencoded".to_string()]
    );
}

#[tokio::test]
async fn test_invalid_base64_body_is_400() {
    let provider = StubProvider::replying("unused");
    let event = json!({
        "rawPath": "/summarize",
        "body": "***not base64***",
        "isBase64Encoded": true
    });

    let response = handle_event(&provider, &event).await;

    assert_eq!(response.status_code, 400);
    assert!(provider.prompts().is_empty());
}

#[tokio::test]
async fn test_missing_body_is_400() {
    let provider = StubProvider::replying("unused");
    let event = json!({ "rawPath": "/summarize" });

    let response = handle_event(&provider, &event).await;

    assert_eq!(response.status_code, 400);
    assert!(!json_body(&response.body)["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_other_paths_are_404() {
    let provider = StubProvider::replying("unused");
    let event = json!({
        "rawPath": "/health",
        "body": r#"{"text": "abc"}"#
    });

    let response = handle_event(&provider, &event).await;

    assert_eq!(response.status_code, 404);
    assert_eq!(json_body(&response.body), json!({ "error": "not found" }));
    assert!(provider.prompts().is_empty());
}
