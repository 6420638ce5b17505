//! Centralized Slate & Purple color theme for the DesignGenie TUI.
//!
//! All color constants are RGB truecolor. Views import from here
//! instead of using inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};

// ── Primary palette ─────────────────────────────────────────────────────────

/// Purple — primary accent, active items, focused borders.
pub const PRIMARY: Color = Color::Rgb(0xA8, 0x55, 0xF7);
/// Pink — gradient partner for calls to action.
pub const ACCENT: Color = Color::Rgb(0xEC, 0x48, 0x99);

// ── Backgrounds ─────────────────────────────────────────────────────────────

/// Slate-950 — base background.
pub const BG_BASE: Color = Color::Rgb(0x02, 0x06, 0x17);
/// Slate-800 — elevated panels.
pub const BG_SURFACE: Color = Color::Rgb(0x1E, 0x29, 0x3B);

// ── Text ────────────────────────────────────────────────────────────────────

/// Primary text.
pub const TEXT: Color = Color::Rgb(0xF1, 0xF5, 0xF9);
/// Muted text — secondary labels.
pub const TEXT_MUTED: Color = Color::Rgb(0x94, 0xA3, 0xB8);
/// Dim text — disabled items, faint hints.
pub const TEXT_DIM: Color = Color::Rgb(0x47, 0x55, 0x69);

// ── Semantic ────────────────────────────────────────────────────────────────

/// Error — failures, the error banner.
pub const ERROR: Color = Color::Rgb(0xEF, 0x53, 0x50);

// ── Style helpers ───────────────────────────────────────────────────────────

/// App title style.
pub fn title() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

/// Focused border style.
pub fn border_focused() -> Style {
    Style::default().fg(PRIMARY)
}

/// Unfocused border style.
pub fn border_default() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Highlighted/selected item.
pub fn highlight() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Muted label text.
pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

/// Dim text for disabled/faint items.
pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Key hint style (e.g., "[Esc]:quit").
pub fn key_hint() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Error banner style.
pub fn error() -> Style {
    Style::default().fg(ERROR)
}
