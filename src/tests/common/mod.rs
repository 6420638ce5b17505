//! Shared test fixtures: a scripted fake gateway and sample artifacts.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, Notify};

use crate::core::design::error::{GenerationError, Result};
use crate::core::design::types::{DesignConfig, FontPairing, GeneratedContent, GeneratedImage};
use crate::core::gateway::DesignGateway;

pub fn sample_content() -> GeneratedContent {
    GeneratedContent {
        headline: "Brew Better".to_string(),
        tagline: "Fresh daily".to_string(),
        body_text: "Single-origin beans roasted in house.".to_string(),
        primary_color: "#112233".to_string(),
        secondary_color: "#f8fafc".to_string(),
        accent_color: "#ff7f50".to_string(),
        font_pairing: FontPairing::Modern,
    }
}

pub fn sample_image() -> GeneratedImage {
    GeneratedImage {
        url: "data:image/png;base64,iVBORw0KGgo=".to_string(),
        prompt_used: "coffee background".to_string(),
    }
}

/// Scripted [`DesignGateway`]: queued results are handed out in order, and
/// an exhausted queue fails the call. An optional hold keeps a content call
/// in flight until the test releases it.
pub struct FakeGateway {
    content_results: Mutex<VecDeque<Result<GeneratedContent>>>,
    image_results: Mutex<VecDeque<Result<GeneratedImage>>>,
    content_calls: AtomicUsize,
    image_calls: AtomicUsize,
    content_hold: Option<Arc<Notify>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self {
            content_results: Mutex::new(VecDeque::new()),
            image_results: Mutex::new(VecDeque::new()),
            content_calls: AtomicUsize::new(0),
            image_calls: AtomicUsize::new(0),
            content_hold: None,
        }
    }

    /// Hold every content call until `hold` is notified.
    pub fn with_content_hold(mut self, hold: Arc<Notify>) -> Self {
        self.content_hold = Some(hold);
        self
    }

    pub async fn queue_content(&self, result: Result<GeneratedContent>) {
        self.content_results.lock().await.push_back(result);
    }

    pub async fn queue_image(&self, result: Result<GeneratedImage>) {
        self.image_results.lock().await.push_back(result);
    }

    pub fn content_calls(&self) -> usize {
        self.content_calls.load(Ordering::SeqCst)
    }

    pub fn image_calls(&self) -> usize {
        self.image_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DesignGateway for FakeGateway {
    async fn generate_content(&self, _config: &DesignConfig) -> Result<GeneratedContent> {
        self.content_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(hold) = &self.content_hold {
            hold.notified().await;
        }
        self.content_results
            .lock()
            .await
            .pop_front()
            .unwrap_or(Err(GenerationError::EmptyPayload))
    }

    async fn generate_image(&self, _config: &DesignConfig) -> Result<GeneratedImage> {
        self.image_calls.fetch_add(1, Ordering::SeqCst);
        self.image_results
            .lock()
            .await
            .pop_front()
            .unwrap_or(Err(GenerationError::NoImageData))
    }
}
