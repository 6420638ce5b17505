//! Design Domain Types
//!
//! Core types for design configuration, generated content, generated
//! images, and the session state they live in.

use serde::{Deserialize, Serialize};

// ============================================================================
// Configuration Types
// ============================================================================

/// Design format the user is producing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DesignCategory {
    SocialMedia,
    Poster,
    BusinessCard,
    Banner,
    Wallpaper,
}

impl Default for DesignCategory {
    fn default() -> Self {
        DesignCategory::Poster
    }
}

impl DesignCategory {
    pub const ALL: [DesignCategory; 5] = [
        DesignCategory::SocialMedia,
        DesignCategory::Poster,
        DesignCategory::BusinessCard,
        DesignCategory::Banner,
        DesignCategory::Wallpaper,
    ];

    /// Human-readable name, also used verbatim in generation prompts.
    pub fn label(self) -> &'static str {
        match self {
            DesignCategory::SocialMedia => "Social Media",
            DesignCategory::Poster => "Poster",
            DesignCategory::BusinessCard => "Business Card",
            DesignCategory::Banner => "Banner",
            DesignCategory::Wallpaper => "Wallpaper",
        }
    }

    pub fn next(self) -> DesignCategory {
        let idx = Self::ALL.iter().position(|&c| c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> DesignCategory {
        let idx = Self::ALL.iter().position(|&c| c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for DesignCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable snapshot of what the user asked for, passed into each
/// generation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignConfig {
    pub category: DesignCategory,
    /// Topic or brand name. Generation is gated on this being non-blank.
    pub topic: String,
    /// Free-text mood/style hint, may be empty.
    pub mood: String,
}

impl DesignConfig {
    pub fn new(category: DesignCategory, topic: impl Into<String>, mood: impl Into<String>) -> Self {
        Self {
            category,
            topic: topic.into(),
            mood: mood.into(),
        }
    }

    /// Whether the config carries enough input to trigger generation.
    pub fn has_topic(&self) -> bool {
        !self.topic.trim().is_empty()
    }
}

/// Partial update to a [`DesignConfig`]. Unset fields are left untouched
/// when applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigPatch {
    pub category: Option<DesignCategory>,
    pub topic: Option<String>,
    pub mood: Option<String>,
}

impl ConfigPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: DesignCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = Some(mood.into());
        self
    }

    /// Merge this patch into `config`, replacing only the fields it sets.
    pub fn apply(self, config: &mut DesignConfig) {
        if let Some(category) = self.category {
            config.category = category;
        }
        if let Some(topic) = self.topic {
            config.topic = topic;
        }
        if let Some(mood) = self.mood {
            config.mood = mood;
        }
    }
}

// ============================================================================
// Generated Artifacts
// ============================================================================

/// Font style suggested by the text model, constrained to three values by
/// the response schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontPairing {
    Modern,
    Classic,
    Playful,
}

impl Default for FontPairing {
    fn default() -> Self {
        FontPairing::Modern
    }
}

/// Structured design content produced atomically by one text-generation
/// call. Never partially populated: deserialization fails unless all seven
/// fields are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub headline: String,
    pub tagline: String,
    pub body_text: String,
    /// Hex code for the dominant/background color.
    pub primary_color: String,
    /// Hex code for contrasting text or shapes.
    pub secondary_color: String,
    /// Hex code for highlights.
    pub accent_color: String,
    pub font_pairing: FontPairing,
}

/// Background illustration produced atomically by one image-generation
/// call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    /// Displayable reference, a `data:image/png;base64,...` URI.
    pub url: String,
    /// The full prompt that produced the image.
    pub prompt_used: String,
}

// ============================================================================
// Session State
// ============================================================================

/// Mutable state of one editing session. The text and image sub-flows own
/// disjoint fields (`content`/`text_in_flight` vs `image`/`image_in_flight`)
/// and are independently refreshable: a new text result never clears an
/// existing image and vice versa. The `error` slot is shared,
/// last-write-wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DesignState {
    pub config: DesignConfig,
    pub content: Option<GeneratedContent>,
    pub image: Option<GeneratedImage>,
    pub text_in_flight: bool,
    pub image_in_flight: bool,
    pub error: Option<String>,
}

impl DesignState {
    pub fn with_config(config: DesignConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Whether either sub-flow is currently awaiting the provider.
    pub fn is_busy(&self) -> bool {
        self.text_in_flight || self.image_in_flight
    }
}
