//! Property-based tests for config merging and preview composition
//!
//! Tests invariants:
//! - Partial config updates never clobber untouched fields
//! - Layer presence is a deterministic function of state
//! - Layers always come in the fixed bottom-up order

use proptest::prelude::*;

use crate::core::design::types::{
    ConfigPatch, DesignCategory, DesignConfig, DesignState, FontPairing, GeneratedContent,
    GeneratedImage,
};
use crate::core::preview::{compose, render_layers, Layer};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

fn arb_category() -> impl Strategy<Value = DesignCategory> {
    prop_oneof![
        Just(DesignCategory::SocialMedia),
        Just(DesignCategory::Poster),
        Just(DesignCategory::BusinessCard),
        Just(DesignCategory::Banner),
        Just(DesignCategory::Wallpaper),
    ]
}

fn arb_font_pairing() -> impl Strategy<Value = FontPairing> {
    prop_oneof![
        Just(FontPairing::Modern),
        Just(FontPairing::Classic),
        Just(FontPairing::Playful),
    ]
}

fn arb_color() -> impl Strategy<Value = String> {
    "#[0-9a-f]{6}"
}

fn arb_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,16}"
}

fn arb_config() -> impl Strategy<Value = DesignConfig> {
    (arb_category(), arb_text(), arb_text()).prop_map(|(category, topic, mood)| DesignConfig {
        category,
        topic,
        mood,
    })
}

fn arb_patch() -> impl Strategy<Value = ConfigPatch> {
    (
        prop::option::of(arb_category()),
        prop::option::of(arb_text()),
        prop::option::of(arb_text()),
    )
        .prop_map(|(category, topic, mood)| ConfigPatch {
            category,
            topic,
            mood,
        })
}

fn arb_content() -> impl Strategy<Value = GeneratedContent> {
    (
        arb_text(),
        arb_text(),
        arb_text(),
        arb_color(),
        arb_color(),
        arb_color(),
        arb_font_pairing(),
    )
        .prop_map(
            |(headline, tagline, body_text, primary, secondary, accent, font_pairing)| {
                GeneratedContent {
                    headline,
                    tagline,
                    body_text,
                    primary_color: primary,
                    secondary_color: secondary,
                    accent_color: accent,
                    font_pairing,
                }
            },
        )
}

fn arb_image() -> impl Strategy<Value = GeneratedImage> {
    (arb_text()).prop_map(|prompt| GeneratedImage {
        url: "data:image/png;base64,iVBORw0KGgo=".to_string(),
        prompt_used: prompt,
    })
}

fn arb_state() -> impl Strategy<Value = DesignState> {
    (
        arb_config(),
        prop::option::of(arb_content()),
        prop::option::of(arb_image()),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(config, content, image, text_in_flight, image_in_flight)| DesignState {
            config,
            content,
            image,
            text_in_flight,
            image_in_flight,
            error: None,
        })
}

fn layer_rank(layer: &Layer) -> u8 {
    match layer {
        Layer::Background { .. } => 0,
        Layer::Image { .. } => 1,
        Layer::Content(_) => 2,
        Layer::Placeholder { .. } => 3,
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_patch_preserves_untouched_fields(config in arb_config(), patch in arb_patch()) {
        let mut updated = config.clone();
        patch.clone().apply(&mut updated);

        match &patch.category {
            Some(c) => prop_assert_eq!(updated.category, *c),
            None => prop_assert_eq!(updated.category, config.category),
        }
        match &patch.topic {
            Some(t) => prop_assert_eq!(&updated.topic, t),
            None => prop_assert_eq!(&updated.topic, &config.topic),
        }
        match &patch.mood {
            Some(m) => prop_assert_eq!(&updated.mood, m),
            None => prop_assert_eq!(&updated.mood, &config.mood),
        }
    }

    #[test]
    fn prop_layer_presence_is_determined_by_state(state in arb_state()) {
        let layers = render_layers(&state);

        // Background is always present and always first.
        prop_assert!(
            matches!(layers[0], Layer::Background { .. }),
            "first layer must be Background"
        );
        prop_assert_eq!(
            layers.iter().filter(|l| matches!(l, Layer::Background { .. })).count(),
            1
        );

        prop_assert_eq!(
            layers.iter().any(|l| matches!(l, Layer::Image { .. })),
            state.image.is_some()
        );
        prop_assert_eq!(
            layers.iter().any(|l| matches!(l, Layer::Content(_))),
            state.content.is_some()
        );

        let expect_placeholder =
            state.content.is_none() && (state.is_busy() || state.image.is_none());
        prop_assert_eq!(
            layers.iter().any(|l| matches!(l, Layer::Placeholder { .. })),
            expect_placeholder
        );
    }

    #[test]
    fn prop_layer_order_is_fixed(state in arb_state()) {
        let layers = render_layers(&state);
        let ranks: Vec<u8> = layers.iter().map(layer_rank).collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        prop_assert_eq!(ranks, sorted);
    }

    #[test]
    fn prop_composition_is_referentially_transparent(state in arb_state()) {
        prop_assert_eq!(compose(&state), compose(&state));
        prop_assert_eq!(render_layers(&state), render_layers(&state));
    }

    #[test]
    fn prop_compose_palette_tracks_content(state in arb_state()) {
        let preview = compose(&state);
        prop_assert_eq!(preview.palette.is_some(), state.content.is_some());
        prop_assert!(preview.aspect_ratio.ratio() > 0.0);
    }
}
