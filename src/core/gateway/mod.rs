//! Generation Gateway
//!
//! Boundary to the external generative-content provider. Stateless
//! request/response: repeated calls with identical input may return
//! different content (the provider is generative) but cause no side
//! effects. Retry policy belongs to callers, not this layer.

pub mod gemini;

pub use gemini::GeminiGateway;

use async_trait::async_trait;

use crate::core::design::error::Result;
use crate::core::design::types::{DesignConfig, GeneratedContent, GeneratedImage};

/// Provider boundary used by the session. Trait-shaped so tests can script
/// a fake provider.
#[async_trait]
pub trait DesignGateway: Send + Sync {
    /// Produce structured design content for the config. The full
    /// seven-field shape is required; anything less is an error.
    async fn generate_content(&self, config: &DesignConfig) -> Result<GeneratedContent>;

    /// Produce a background illustration for the config.
    async fn generate_image(&self, config: &DesignConfig) -> Result<GeneratedImage>;
}
