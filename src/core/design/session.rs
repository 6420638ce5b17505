//! Design Session
//!
//! Owns the mutable state of one editing session and the orchestration of
//! the two independent generation sub-flows (text, image). Each sub-flow
//! runs `idle → in-flight → settled/failed` and can be re-triggered at any
//! time; a trigger while already in flight is suppressed rather than
//! cancelled-and-replaced.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::core::design::types::{ConfigPatch, DesignConfig, DesignState};
use crate::core::gateway::DesignGateway;

/// User-visible message when the text sub-flow fails.
pub const TEXT_FAILURE_MESSAGE: &str = "Failed to generate text. Please try again.";
/// User-visible message when the image sub-flow fails.
pub const IMAGE_FAILURE_MESSAGE: &str = "Failed to generate image. Please try again.";

/// One editing session over a [`DesignGateway`].
///
/// Cheap to clone: the state and gateway are shared. The UI polls
/// [`snapshot`](Self::snapshot) each frame; generation methods are awaited
/// by spawned tasks and mutate the shared state when they settle.
#[derive(Clone)]
pub struct DesignSession {
    gateway: Arc<dyn DesignGateway>,
    state: Arc<RwLock<DesignState>>,
}

impl DesignSession {
    pub fn new(gateway: Arc<dyn DesignGateway>) -> Self {
        Self::with_config(gateway, DesignConfig::default())
    }

    pub fn with_config(gateway: Arc<dyn DesignGateway>, config: DesignConfig) -> Self {
        Self {
            gateway,
            state: Arc::new(RwLock::new(DesignState::with_config(config))),
        }
    }

    /// Current state, cloned out of the lock.
    pub async fn snapshot(&self) -> DesignState {
        self.state.read().await.clone()
    }

    /// Apply a partial configuration update. Never triggers generation and
    /// never clears prior results: existing content/image stay visible
    /// under the new config until explicitly regenerated.
    pub async fn update_config(&self, patch: ConfigPatch) {
        let mut state = self.state.write().await;
        patch.apply(&mut state.config);
    }

    /// Run the text sub-flow once. No-op when the topic is blank or a text
    /// request is already in flight. On failure the previous content is
    /// left untouched and only the error slot is written.
    pub async fn generate_text(&self) {
        let config = {
            let mut state = self.state.write().await;
            if !state.config.has_topic() || state.text_in_flight {
                return;
            }
            state.text_in_flight = true;
            state.error = None;
            state.config.clone()
        };

        match self.gateway.generate_content(&config).await {
            Ok(content) => {
                tracing::info!(topic = %config.topic, "design content generated");
                let mut state = self.state.write().await;
                state.content = Some(content);
                state.text_in_flight = false;
            }
            Err(e) => {
                tracing::warn!(error = %e, "text generation failed");
                let mut state = self.state.write().await;
                state.error = Some(TEXT_FAILURE_MESSAGE.to_string());
                state.text_in_flight = false;
            }
        }
    }

    /// Run the image sub-flow once. Symmetric to
    /// [`generate_text`](Self::generate_text).
    pub async fn generate_image(&self) {
        let config = {
            let mut state = self.state.write().await;
            if !state.config.has_topic() || state.image_in_flight {
                return;
            }
            state.image_in_flight = true;
            state.error = None;
            state.config.clone()
        };

        match self.gateway.generate_image(&config).await {
            Ok(image) => {
                tracing::info!(topic = %config.topic, "background image generated");
                let mut state = self.state.write().await;
                state.image = Some(image);
                state.image_in_flight = false;
            }
            Err(e) => {
                tracing::warn!(error = %e, "image generation failed");
                let mut state = self.state.write().await;
                state.error = Some(IMAGE_FAILURE_MESSAGE.to_string());
                state.image_in_flight = false;
            }
        }
    }

    /// Run both sub-flows concurrently. They settle independently: one
    /// failing neither cancels nor blocks the other, and partial success is
    /// a normal outcome.
    pub async fn generate_all(&self) {
        tokio::join!(self.generate_text(), self.generate_image());
    }
}
