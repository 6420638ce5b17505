//! Gemini Gateway Unit Tests
//!
//! HTTP-level behavior against a wiremock server:
//! - Request formatting (endpoint, API key header, response schema)
//! - Response parsing (success and schema violations)
//! - Image part scanning across interleaved fragments
//! - API and empty-payload error handling

use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::core::design::error::GenerationError;
use crate::core::design::types::{DesignCategory, DesignConfig, FontPairing};
use crate::core::gateway::{DesignGateway, GeminiGateway};

const TEXT_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";
const IMAGE_PATH: &str = "/v1beta/models/gemini-2.5-flash-image:generateContent";

fn gateway(server: &MockServer) -> GeminiGateway {
    GeminiGateway::with_defaults("AIzaTestApiKey".to_string()).with_base_url(server.uri())
}

fn test_config() -> DesignConfig {
    DesignConfig::new(DesignCategory::Poster, "Coffee Shop", "Minimalist")
}

/// Provider response whose single part carries `inner` as its text.
fn text_response(inner: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "parts": [{ "text": inner }] }
        }]
    })
}

fn valid_content_json() -> String {
    json!({
        "headline": "Brew Better",
        "tagline": "Fresh daily",
        "bodyText": "Single-origin beans roasted in house.",
        "primaryColor": "#112233",
        "secondaryColor": "#f8fafc",
        "accentColor": "#ff7f50",
        "fontPairing": "playful"
    })
    .to_string()
}

// =============================================================================
// Content Generation
// =============================================================================

#[tokio::test]
async fn test_generate_content_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TEXT_PATH))
        .and(header("x-goog-api-key", "AIzaTestApiKey"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response(&valid_content_json())))
        .expect(1)
        .mount(&server)
        .await;

    let content = gateway(&server)
        .generate_content(&test_config())
        .await
        .unwrap();

    assert_eq!(content.headline, "Brew Better");
    assert_eq!(content.body_text, "Single-origin beans roasted in house.");
    assert_eq!(content.font_pairing, FontPairing::Playful);
}

#[tokio::test]
async fn test_generate_content_request_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TEXT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response(&valid_content_json())))
        .mount(&server)
        .await;

    gateway(&server)
        .generate_content(&test_config())
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();

    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("Poster"));
    assert!(prompt.contains("\"Coffee Shop\""));
    assert!(prompt.contains("\"Minimalist\""));

    assert_eq!(
        body["generationConfig"]["responseMimeType"],
        "application/json"
    );
    let required = body["generationConfig"]["responseSchema"]["required"]
        .as_array()
        .unwrap();
    assert_eq!(required.len(), 7);
    assert!(body["systemInstruction"]["parts"][0]["text"]
        .as_str()
        .unwrap()
        .contains("valid JSON"));
}

#[tokio::test]
async fn test_generate_content_schema_violation() {
    let server = MockServer::start().await;
    // Payload is JSON but missing fontPairing: must be a hard failure,
    // never a silently-defaulted value.
    let partial = json!({
        "headline": "h", "tagline": "t", "bodyText": "b",
        "primaryColor": "#000", "secondaryColor": "#fff", "accentColor": "#f00"
    })
    .to_string();
    Mock::given(method("POST"))
        .and(path(TEXT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response(&partial)))
        .mount(&server)
        .await;

    let err = gateway(&server)
        .generate_content(&test_config())
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::InvalidShape(_)));
}

#[tokio::test]
async fn test_generate_content_non_json_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TEXT_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(text_response("sorry, I cannot do that")),
        )
        .mount(&server)
        .await;

    let err = gateway(&server)
        .generate_content(&test_config())
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::InvalidShape(_)));
}

#[tokio::test]
async fn test_generate_content_no_candidates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TEXT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let err = gateway(&server)
        .generate_content(&test_config())
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::EmptyPayload));
}

#[tokio::test]
async fn test_generate_content_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TEXT_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .mount(&server)
        .await;

    let err = gateway(&server)
        .generate_content(&test_config())
        .await
        .unwrap_err();
    match err {
        GenerationError::Api { status, message } => {
            assert_eq!(status, 429);
            assert!(message.contains("quota"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

// =============================================================================
// Image Generation
// =============================================================================

#[tokio::test]
async fn test_generate_image_scans_interleaved_parts() {
    let server = MockServer::start().await;
    // The image is deliberately not the first part.
    let response = json!({
        "candidates": [{
            "content": {
                "parts": [
                    { "text": "Here is your background:" },
                    { "inlineData": { "mimeType": "image/png", "data": "iVBORw0KGgo=" } },
                    { "text": "Enjoy!" }
                ]
            }
        }]
    });
    Mock::given(method("POST"))
        .and(path(IMAGE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let image = gateway(&server)
        .generate_image(&test_config())
        .await
        .unwrap();

    assert_eq!(image.url, "data:image/png;base64,iVBORw0KGgo=");
    assert!(image.prompt_used.contains("Coffee Shop"));
    assert!(image.prompt_used.contains("no text"));
}

#[tokio::test]
async fn test_generate_image_no_inline_data() {
    let server = MockServer::start().await;
    let response = json!({
        "candidates": [{
            "content": { "parts": [{ "text": "no image today" }] }
        }]
    });
    Mock::given(method("POST"))
        .and(path(IMAGE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let err = gateway(&server)
        .generate_image(&test_config())
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::NoImageData));
}

#[tokio::test]
async fn test_generate_image_empty_data_is_error() {
    let server = MockServer::start().await;
    let response = json!({
        "candidates": [{
            "content": { "parts": [{ "inlineData": { "data": "" } }] }
        }]
    });
    Mock::given(method("POST"))
        .and(path(IMAGE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let err = gateway(&server)
        .generate_image(&test_config())
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::NoImageData));
}

#[tokio::test]
async fn test_generate_image_undecodable_data_is_error() {
    let server = MockServer::start().await;
    let response = json!({
        "candidates": [{
            "content": { "parts": [{ "inlineData": { "data": "!!!not-base64!!!" } }] }
        }]
    });
    Mock::given(method("POST"))
        .and(path(IMAGE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let err = gateway(&server)
        .generate_image(&test_config())
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::NoImageData));
}
