//! Preview Composer
//!
//! Pure derivation from session state to a renderable layout description.
//! No side effects and no state of its own: re-run on every state change,
//! identical input always yields identical output.

use crate::core::design::types::{DesignCategory, DesignState, FontPairing, GeneratedContent};

/// Neutral canvas background when no content has been generated yet.
pub const FALLBACK_BACKGROUND: &str = "#1e293b";
/// Neutral text color when no content has been generated yet.
pub const FALLBACK_TEXT: &str = "#f8fafc";
/// Gradient base when the image tint has no palette to derive from.
const FALLBACK_TINT: &str = "#000";

/// Placeholder shown while a sub-flow is in flight with no content yet.
pub const GENERATING_MESSAGE: &str = "Generating content...";
/// Empty-state prompt before anything has been generated.
pub const EMPTY_STATE_MESSAGE: &str = "Enter a topic and click Generate to start";

// ============================================================================
// Layout Description
// ============================================================================

/// Canvas proportions for a design category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatio {
    pub width: f32,
    pub height: f32,
}

impl AspectRatio {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    pub fn ratio(self) -> f32 {
        self.width / self.height
    }
}

/// Font family resolved from the generated font pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    Sans,
    Serif,
    Decorative,
}

impl FontFamily {
    pub fn label(self) -> &'static str {
        match self {
            FontFamily::Sans => "sans-serif",
            FontFamily::Serif => "serif",
            FontFamily::Decorative => "display",
        }
    }
}

/// Readability tint drawn over the background image, derived from the
/// primary color with two alpha stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    pub from: String,
    pub to: String,
}

/// Text block colored from the generated palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLayer {
    /// Tagline badge text.
    pub tagline: String,
    pub badge_background: String,
    pub badge_foreground: String,
    pub headline: String,
    pub divider_color: String,
    pub body_text: String,
    /// Decorative corner shape color.
    pub shape_color: String,
}

/// One visual layer of the composed preview, bottom-up.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    /// Solid canvas fill.
    Background { color: String },
    /// Generated illustration under a readability tint.
    Image { url: String, tint: Gradient },
    /// Generated text content.
    Content(ContentLayer),
    /// In-flight or empty-state message.
    Placeholder { message: &'static str },
}

/// Palette strip shown alongside the canvas when content exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

/// Complete render description for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    pub aspect_ratio: AspectRatio,
    pub font_family: FontFamily,
    pub background_color: String,
    pub text_color: String,
    pub layers: Vec<Layer>,
    pub palette: Option<Palette>,
}

// ============================================================================
// Derivation
// ============================================================================

/// Fixed canvas proportions per category. Total over the enum: exactly one
/// ratio each.
pub fn aspect_ratio_for(category: DesignCategory) -> AspectRatio {
    match category {
        DesignCategory::BusinessCard => AspectRatio::new(1.75, 1.0),
        DesignCategory::Poster => AspectRatio::new(2.0, 3.0),
        DesignCategory::SocialMedia => AspectRatio::new(1.0, 1.0),
        DesignCategory::Banner => AspectRatio::new(4.0, 1.0),
        DesignCategory::Wallpaper => AspectRatio::new(16.0, 9.0),
    }
}

/// Font family for the generated content, defaulting to sans when nothing
/// has been generated.
pub fn font_family_for(content: Option<&GeneratedContent>) -> FontFamily {
    match content.map(|c| c.font_pairing) {
        Some(FontPairing::Classic) => FontFamily::Serif,
        Some(FontPairing::Playful) => FontFamily::Decorative,
        Some(FontPairing::Modern) | None => FontFamily::Sans,
    }
}

fn tint_for(content: Option<&GeneratedContent>) -> Gradient {
    let base = content
        .map(|c| c.primary_color.as_str())
        .unwrap_or(FALLBACK_TINT);
    Gradient {
        from: format!("{base}CC"),
        to: format!("{base}40"),
    }
}

/// Ordered visual layers for the current state.
///
/// Presence is fully determined by (content present?, image present?,
/// in-flight flags):
/// - background: always
/// - image: image present
/// - content: content present
/// - placeholder: content absent, and either a sub-flow is in flight
///   ("generating") or nothing exists at all (empty state)
pub fn render_layers(state: &DesignState) -> Vec<Layer> {
    let mut layers = Vec::with_capacity(4);

    let background = state
        .content
        .as_ref()
        .map(|c| c.primary_color.clone())
        .unwrap_or_else(|| FALLBACK_BACKGROUND.to_string());
    layers.push(Layer::Background { color: background });

    if let Some(image) = &state.image {
        layers.push(Layer::Image {
            url: image.url.clone(),
            tint: tint_for(state.content.as_ref()),
        });
    }

    if let Some(content) = &state.content {
        layers.push(Layer::Content(ContentLayer {
            tagline: content.tagline.clone(),
            badge_background: content.accent_color.clone(),
            badge_foreground: content.primary_color.clone(),
            headline: content.headline.clone(),
            divider_color: content.accent_color.clone(),
            body_text: content.body_text.clone(),
            shape_color: content.secondary_color.clone(),
        }));
    } else if state.is_busy() {
        layers.push(Layer::Placeholder {
            message: GENERATING_MESSAGE,
        });
    } else if state.image.is_none() {
        layers.push(Layer::Placeholder {
            message: EMPTY_STATE_MESSAGE,
        });
    }

    layers
}

/// Bundle the full render description for one frame.
pub fn compose(state: &DesignState) -> Preview {
    let content = state.content.as_ref();
    Preview {
        aspect_ratio: aspect_ratio_for(state.config.category),
        font_family: font_family_for(content),
        background_color: content
            .map(|c| c.primary_color.clone())
            .unwrap_or_else(|| FALLBACK_BACKGROUND.to_string()),
        text_color: content
            .map(|c| c.secondary_color.clone())
            .unwrap_or_else(|| FALLBACK_TEXT.to_string()),
        layers: render_layers(state),
        palette: content.map(|c| Palette {
            primary: c.primary_color.clone(),
            secondary: c.secondary_color.clone(),
            accent: c.accent_color.clone(),
        }),
    }
}
