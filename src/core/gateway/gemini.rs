//! Gemini Gateway Implementation (API Key-based)
//!
//! Talks to Google's Generative Language API with an API key. One model
//! handles structured text content (JSON response schema), a second one
//! handles image generation (inline base64 parts).

use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::Client;
use serde_json::{json, Value};

use super::DesignGateway;
use crate::core::design::error::{GenerationError, Result};
use crate::core::design::types::{DesignConfig, GeneratedContent, GeneratedImage};

/// Default model for structured text/palette generation.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
/// Default model for background image generation.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const SYSTEM_INSTRUCTION: &str =
    "Always respond with valid JSON adhering to the schema. Ensure color contrast is accessible.";

/// Gemini-backed [`DesignGateway`].
pub struct GeminiGateway {
    api_key: String,
    text_model: String,
    image_model: String,
    base_url: String,
    client: Client,
}

impl GeminiGateway {
    pub fn new(api_key: String, text_model: String, image_model: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(300))
            .build()
            .expect("Failed to create HTTP client");

        // Trim the API key at construction to ensure consistency with validation
        Self {
            api_key: api_key.trim().to_string(),
            text_model,
            image_model,
            base_url: DEFAULT_BASE_URL.to_string(),
            client,
        }
    }

    /// Gateway with the default model pair.
    pub fn with_defaults(api_key: String) -> Self {
        Self::new(
            api_key,
            DEFAULT_TEXT_MODEL.to_string(),
            DEFAULT_IMAGE_MODEL.to_string(),
        )
    }

    /// Override the API base URL (tests point this at a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn text_model(&self) -> &str {
        &self.text_model
    }

    pub fn image_model(&self) -> &str {
        &self.image_model
    }

    /// Check if an API key has valid Google API key format.
    ///
    /// Google API keys start with "AIza". This is a pure format check and
    /// does not verify the key against the API.
    pub fn is_valid_api_key_format(key: &str) -> bool {
        let trimmed = key.trim();
        !trimmed.is_empty() && trimmed.starts_with("AIza")
    }

    /// Designer prompt for the text model.
    fn content_prompt(config: &DesignConfig) -> String {
        format!(
            "You are a professional graphic designer. Create content and a color palette \
             for a {} about \"{}\". The mood should be \"{}\". Return JSON only.",
            config.category.label(),
            config.topic,
            config.mood
        )
    }

    /// Prompt for the image model. Style keywords keep the output usable as
    /// a background: abstract, no embedded text, high resolution.
    fn image_prompt(config: &DesignConfig) -> String {
        format!(
            "A high quality, professional background texture or illustration for a {} \
             about {}. Style: {}, minimalist, abstract, no text, high resolution, digital art.",
            config.category.label(),
            config.topic,
            config.mood
        )
    }

    /// JSON schema constraining the text response to the exact
    /// [`GeneratedContent`] shape.
    fn content_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "headline": { "type": "STRING", "description": "A catchy headline for the design." },
                "tagline": { "type": "STRING", "description": "A short, punchy slogan." },
                "bodyText": { "type": "STRING", "description": "Brief informational content suitable for the format." },
                "primaryColor": { "type": "STRING", "description": "Hex code for the main background or dominant color." },
                "secondaryColor": { "type": "STRING", "description": "Hex code for contrasting text or shapes." },
                "accentColor": { "type": "STRING", "description": "Hex code for highlights." },
                "fontPairing": { "type": "STRING", "enum": ["modern", "classic", "playful"], "description": "Suggested font style." }
            },
            "required": [
                "headline", "tagline", "bodyText",
                "primaryColor", "secondaryColor", "accentColor", "fontPairing"
            ]
        })
    }

    async fn post_generate(&self, model: &str, body: &Value) -> Result<Value> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, model);

        let resp = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(resp.json().await?)
    }
}

#[async_trait]
impl DesignGateway for GeminiGateway {
    async fn generate_content(&self, config: &DesignConfig) -> Result<GeneratedContent> {
        let prompt = Self::content_prompt(config);
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "systemInstruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": Self::content_schema()
            }
        });

        let response = self.post_generate(&self.text_model, &body).await?;

        let text = response["candidates"]
            .as_array()
            .and_then(|arr| arr.first())
            .and_then(|c| c["content"]["parts"].as_array())
            .and_then(|parts| parts.first())
            .and_then(|p| p["text"].as_str())
            .ok_or(GenerationError::EmptyPayload)?;

        // Schema violations surface here as InvalidShape.
        let content: GeneratedContent = serde_json::from_str(text)?;
        Ok(content)
    }

    async fn generate_image(&self, config: &DesignConfig) -> Result<GeneratedImage> {
        let prompt = Self::image_prompt(config);
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self.post_generate(&self.image_model, &body).await?;

        // The image is not guaranteed to be the first part: the model may
        // interleave text parts, so scan them all for inline data.
        let data = response["candidates"]
            .as_array()
            .and_then(|arr| arr.first())
            .and_then(|c| c["content"]["parts"].as_array())
            .and_then(|parts| {
                parts.iter().find_map(|p| {
                    p["inlineData"]["data"]
                        .as_str()
                        .filter(|d| !d.is_empty())
                })
            })
            .ok_or(GenerationError::NoImageData)?;

        // Reject payloads that do not decode to actual bytes.
        let bytes = BASE64
            .decode(data)
            .map_err(|_| GenerationError::NoImageData)?;
        if bytes.is_empty() {
            return Err(GenerationError::NoImageData);
        }

        Ok(GeneratedImage {
            url: format!("data:image/png;base64,{data}"),
            prompt_used: prompt,
        })
    }
}
