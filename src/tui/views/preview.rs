//! Preview pane — renders the composed layout description.
//!
//! The canvas is fitted to the category's aspect ratio (terminal cells
//! count double in height), then the layers are painted bottom-up:
//! background fill, image tint, content blocks, placeholder.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::core::design::types::DesignState;
use crate::core::preview::{compose, ContentLayer, Gradient, Layer, Preview};
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, state: &DesignState) {
    let preview = compose(state);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_default())
        .title(Span::styled(
            format!(" Preview: {} ", state.config.category),
            theme::title(),
        ))
        .title_bottom(Span::styled(
            format!(" font: {} ", preview.font_family.label()),
            theme::key_hint(),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Min(3),    // canvas
        Constraint::Length(1), // palette strip
    ])
    .split(inner);

    let canvas = fit_aspect(rows[0], preview.aspect_ratio.ratio());
    render_canvas(frame, canvas, &preview);

    if let Some(palette) = &preview.palette {
        let strip = Line::from(vec![
            Span::styled("Palette ", theme::muted()),
            swatch(&palette.primary),
            Span::raw(" "),
            swatch(&palette.secondary),
            Span::raw(" "),
            swatch(&palette.accent),
        ]);
        frame.render_widget(
            Paragraph::new(strip).alignment(Alignment::Center),
            rows[1],
        );
    }
}

fn render_canvas(frame: &mut Frame, canvas: Rect, preview: &Preview) {
    let text_color = hex_color(&preview.text_color).unwrap_or(theme::TEXT);

    for layer in &preview.layers {
        match layer {
            Layer::Background { color } => {
                let fill = hex_color(color).unwrap_or(theme::BG_SURFACE);
                frame.render_widget(
                    Block::default().style(Style::default().bg(fill)),
                    canvas,
                );
            }
            Layer::Image { tint, .. } => render_image_layer(frame, canvas, tint),
            Layer::Content(content) => render_content_layer(frame, canvas, content, text_color),
            Layer::Placeholder { message } => {
                let centered = Layout::vertical([
                    Constraint::Fill(1),
                    Constraint::Length(1),
                    Constraint::Fill(1),
                ])
                .split(canvas);
                frame.render_widget(
                    Paragraph::new(*message)
                        .style(theme::dim().add_modifier(Modifier::ITALIC))
                        .alignment(Alignment::Center),
                    centered[1],
                );
            }
        }
    }
}

/// A terminal cannot blend the bitmap, so the image layer is approximated
/// by repainting the canvas in the tint's dominant stop and flagging that
/// a generated background is present.
fn render_image_layer(frame: &mut Frame, canvas: Rect, tint: &Gradient) {
    if let Some(color) = hex_color(&tint.from) {
        frame.render_widget(Block::default().style(Style::default().bg(color)), canvas);
    }
    if canvas.height > 0 {
        let marker = Rect {
            y: canvas.y + canvas.height - 1,
            height: 1,
            ..canvas
        };
        frame.render_widget(
            Paragraph::new(Span::styled("◆ AI background ", theme::dim()))
                .alignment(Alignment::Right),
            marker,
        );
    }
}

fn render_content_layer(frame: &mut Frame, canvas: Rect, content: &ContentLayer, text: Color) {
    let badge_bg = hex_color(&content.badge_background).unwrap_or(theme::ACCENT);
    let badge_fg = hex_color(&content.badge_foreground).unwrap_or(theme::BG_BASE);
    let divider = hex_color(&content.divider_color).unwrap_or(theme::ACCENT);
    let shape = hex_color(&content.shape_color).unwrap_or(theme::TEXT_MUTED);

    let inset = canvas.inner(ratatui::layout::Margin {
        horizontal: 2,
        vertical: 1,
    });
    if inset.height < 4 {
        return;
    }

    // Decorative corner shape.
    let corner = Rect {
        x: inset.x + inset.width.saturating_sub(2),
        width: 2.min(inset.width),
        height: 1,
        ..inset
    };
    frame.render_widget(
        Paragraph::new(Span::styled("◥", Style::default().fg(shape))),
        corner,
    );

    let rows = Layout::vertical([
        Constraint::Length(1), // tagline badge
        Constraint::Length(1),
        Constraint::Length(1), // headline
        Constraint::Length(1), // divider
        Constraint::Min(1),    // body
    ])
    .split(inset);

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!(" {} ", content.tagline.to_uppercase()),
            Style::default()
                .fg(badge_fg)
                .bg(badge_bg)
                .add_modifier(Modifier::BOLD),
        )),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            content.headline.as_str(),
            Style::default().fg(text).add_modifier(Modifier::BOLD),
        )),
        rows[2],
    );
    frame.render_widget(
        Paragraph::new(Span::styled("▬▬▬▬▬▬", Style::default().fg(divider))),
        rows[3],
    );
    frame.render_widget(
        Paragraph::new(content.body_text.as_str())
            .style(Style::default().fg(text))
            .wrap(Wrap { trim: true }),
        rows[4],
    );
}

fn swatch(hex: &str) -> Span<'static> {
    let color = hex_color(hex).unwrap_or(theme::TEXT_DIM);
    Span::styled(format!("● {hex}"), Style::default().fg(color))
}

/// Fit a width/height ratio into the available area, centered. Cells are
/// roughly twice as tall as wide, so height counts double.
fn fit_aspect(area: Rect, ratio: f32) -> Rect {
    if area.width == 0 || area.height == 0 || ratio <= 0.0 {
        return area;
    }

    let avail_w = area.width as f32;
    let avail_h = (area.height as f32) * 2.0;

    let (w, h) = if avail_w / avail_h > ratio {
        (avail_h * ratio, avail_h)
    } else {
        (avail_w, avail_w / ratio)
    };

    let w = (w.round() as u16).clamp(1, area.width);
    let h = ((h / 2.0).round() as u16).clamp(1, area.height);

    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

/// Parse `#rgb`, `#rrggbb`, or `#rrggbbaa` (alpha ignored) into a color.
fn hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    let (r, g, b) = if hex.len() == 3 {
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map(|v| v * 17);
        (nibble(0).ok()?, nibble(1).ok()?, nibble(2).ok()?)
    } else if hex.len() >= 6 {
        (
            u8::from_str_radix(&hex[0..2], 16).ok()?,
            u8::from_str_radix(&hex[2..4], 16).ok()?,
            u8::from_str_radix(&hex[4..6], 16).ok()?,
        )
    } else {
        return None;
    };

    Some(Color::Rgb(r, g, b))
}
