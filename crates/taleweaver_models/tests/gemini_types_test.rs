//! Tests for Gemini wire types.

use serde_json::json;
use taleweaver_core::{PromptPayload, StoryImage};
use taleweaver_models::{GenerateContentRequest, GenerateContentResponse};

#[test]
fn test_text_request_shape() {
    let payload = PromptPayload::Text("Write a story".to_string());
    let request = GenerateContentRequest::from_payload(&payload);

    let value = serde_json::to_value(&request).expect("serializable");
    assert_eq!(
        value,
        json!({"contents": [{"parts": [{"text": "Write a story"}]}]})
    );
}

#[test]
fn test_multimodal_request_shape() {
    let payload = PromptPayload::TextWithImage {
        text: "Describe this".to_string(),
        image: StoryImage::new("image/jpeg", "aGVsbG8="),
    };
    let request = GenerateContentRequest::from_payload(&payload);

    let value = serde_json::to_value(&request).expect("serializable");
    assert_eq!(
        value,
        json!({
            "contents": [{
                "parts": [
                    {"text": "Describe this"},
                    {"inline_data": {"mime_type": "image/jpeg", "data": "aGVsbG8="}}
                ]
            }]
        })
    );
}

#[test]
fn test_response_text_extraction() {
    let body = json!({
        "candidates": [{"content": {"parts": [{"text": "Once upon a time."}]}}],
        "usageMetadata": {"totalTokenCount": 42}
    });

    let response: GenerateContentResponse = serde_json::from_value(body).expect("parsable");
    assert_eq!(response.first_text(), Some("Once upon a time."));
    assert_eq!(response.total_tokens(), Some(42));
}

#[test]
fn test_response_without_usage_metadata() {
    let body = json!({
        "candidates": [{"content": {"parts": [{"text": "A tale."}]}}]
    });

    let response: GenerateContentResponse = serde_json::from_value(body).expect("parsable");
    assert_eq!(response.first_text(), Some("A tale."));
    assert_eq!(response.total_tokens(), None);
}

#[test]
fn test_missing_candidates_yield_no_text() {
    let empty: GenerateContentResponse = serde_json::from_value(json!({})).expect("parsable");
    assert_eq!(empty.first_text(), None);

    let no_parts: GenerateContentResponse =
        serde_json::from_value(json!({"candidates": [{"content": {}}]})).expect("parsable");
    assert_eq!(no_parts.first_text(), None);

    let no_text: GenerateContentResponse =
        serde_json::from_value(json!({"candidates": [{"content": {"parts": [{}]}}]}))
            .expect("parsable");
    assert_eq!(no_text.first_text(), None);
}
