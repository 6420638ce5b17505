//! Input panel — design configuration form and generation triggers.
//!
//! Tab/Down and Shift+Tab/Up move between fields, Left/Right cycles the
//! category, Enter activates the focused trigger. Triggers are disabled
//! while either sub-flow is in flight or the topic is empty. Ctrl+G/T/I
//! fire the triggers from anywhere in the form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::core::design::types::{ConfigPatch, DesignCategory, DesignState};
use crate::tui::theme;
use crate::tui::widgets::input_buffer::InputBuffer;

// ── Fields ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelField {
    Category,
    Topic,
    Mood,
    GenerateAll,
    GenerateText,
    GenerateImage,
}

impl PanelField {
    const ALL: [PanelField; 6] = [
        PanelField::Category,
        PanelField::Topic,
        PanelField::Mood,
        PanelField::GenerateAll,
        PanelField::GenerateText,
        PanelField::GenerateImage,
    ];

    fn next(self) -> PanelField {
        let idx = Self::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    fn prev(self) -> PanelField {
        let idx = Self::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Action resolved from a key press, executed by the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    /// Configuration changed; forward to the session.
    Patch(ConfigPatch),
    GenerateAll,
    GenerateText,
    GenerateImage,
}

// ── State ───────────────────────────────────────────────────────────────────

pub struct InputPanelState {
    focus: PanelField,
    category: DesignCategory,
    topic: InputBuffer,
    mood: InputBuffer,
}

impl InputPanelState {
    pub fn new() -> Self {
        Self {
            focus: PanelField::Topic,
            category: DesignCategory::default(),
            topic: InputBuffer::new(),
            mood: InputBuffer::new(),
        }
    }

    pub fn focus(&self) -> PanelField {
        self.focus
    }

    pub fn has_topic(&self) -> bool {
        !self.topic.is_empty()
    }

    /// Map a key press to an action. `busy` is true while either sub-flow
    /// is in flight; triggers are then inert.
    pub fn handle_key(&mut self, key: KeyEvent, busy: bool) -> Option<PanelAction> {
        let can_generate = !busy && self.has_topic();

        // Global trigger shortcuts.
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('g') => return can_generate.then_some(PanelAction::GenerateAll),
                KeyCode::Char('t') => return can_generate.then_some(PanelAction::GenerateText),
                KeyCode::Char('i') => return can_generate.then_some(PanelAction::GenerateImage),
                _ => {}
            }
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                return None;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                return None;
            }
            _ => {}
        }

        match self.focus {
            PanelField::Category => match key.code {
                KeyCode::Left => {
                    self.category = self.category.prev();
                    Some(PanelAction::Patch(
                        ConfigPatch::new().with_category(self.category),
                    ))
                }
                KeyCode::Right => {
                    self.category = self.category.next();
                    Some(PanelAction::Patch(
                        ConfigPatch::new().with_category(self.category),
                    ))
                }
                _ => None,
            },
            PanelField::Topic => Self::edit(&mut self.topic, key)
                .then(|| PanelAction::Patch(ConfigPatch::new().with_topic(self.topic.text()))),
            PanelField::Mood => Self::edit(&mut self.mood, key)
                .then(|| PanelAction::Patch(ConfigPatch::new().with_mood(self.mood.text()))),
            PanelField::GenerateAll => match key.code {
                KeyCode::Enter => can_generate.then_some(PanelAction::GenerateAll),
                _ => None,
            },
            PanelField::GenerateText => match key.code {
                KeyCode::Enter => can_generate.then_some(PanelAction::GenerateText),
                _ => None,
            },
            PanelField::GenerateImage => match key.code {
                KeyCode::Enter => can_generate.then_some(PanelAction::GenerateImage),
                _ => None,
            },
        }
    }

    /// Apply an edit key to a buffer. Returns whether the content changed.
    fn edit(buffer: &mut InputBuffer, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                buffer.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                let had_text = !buffer.text().is_empty();
                buffer.backspace();
                had_text
            }
            KeyCode::Left => {
                buffer.move_left();
                false
            }
            KeyCode::Right => {
                buffer.move_right();
                false
            }
            KeyCode::Home => {
                buffer.move_home();
                false
            }
            KeyCode::End => {
                buffer.move_end();
                false
            }
            _ => false,
        }
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &DesignState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_default())
            .title(Span::styled(" Design Studio ", theme::title()));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(3), // category
            Constraint::Length(3), // topic
            Constraint::Length(3), // mood
            Constraint::Length(1),
            Constraint::Length(3), // generate all
            Constraint::Length(3), // text / image
            Constraint::Min(0),    // error banner
        ])
        .split(inner);

        self.render_category(frame, rows[0]);
        self.render_input(frame, rows[1], "Topic / Brand Name", &self.topic, PanelField::Topic);
        self.render_input(frame, rows[2], "Mood / Style", &self.mood, PanelField::Mood);

        let can_generate = !state.is_busy() && self.has_topic();
        self.render_button(
            frame,
            rows[4],
            if state.is_busy() { "Generating…" } else { "Generate Design" },
            PanelField::GenerateAll,
            can_generate,
        );

        let halves =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(rows[5]);
        self.render_button(
            frame,
            halves[0],
            if state.text_in_flight { "Text…" } else { "Remix Text" },
            PanelField::GenerateText,
            can_generate,
        );
        self.render_button(
            frame,
            halves[1],
            if state.image_in_flight { "Image…" } else { "Remix Image" },
            PanelField::GenerateImage,
            can_generate,
        );

        if let Some(error) = &state.error {
            let banner = Paragraph::new(error.as_str())
                .style(theme::error())
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(theme::error()),
                );
            frame.render_widget(banner, rows[6]);
        }
    }

    fn border_for(&self, field: PanelField) -> ratatui::style::Style {
        if self.focus == field {
            theme::border_focused()
        } else {
            theme::border_default()
        }
    }

    fn render_category(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled("◀ ", theme::dim()),
            Span::styled(self.category.label(), theme::highlight()),
            Span::styled(" ▶", theme::dim()),
        ]);
        let widget = Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.border_for(PanelField::Category))
                .title(Span::styled("Category", theme::muted())),
        );
        frame.render_widget(widget, area);
    }

    fn render_input(
        &self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        buffer: &InputBuffer,
        field: PanelField,
    ) {
        let widget = Paragraph::new(buffer.text()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.border_for(field))
                .title(Span::styled(label, theme::muted())),
        );
        frame.render_widget(widget, area);

        if self.focus == field {
            let max = area.width.saturating_sub(2) as usize;
            let x = area.x + 1 + buffer.cursor_position().min(max) as u16;
            frame.set_cursor_position(Position::new(x, area.y + 1));
        }
    }

    fn render_button(
        &self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        field: PanelField,
        enabled: bool,
    ) {
        let style = if !enabled {
            theme::dim()
        } else if self.focus == field {
            theme::highlight()
        } else {
            theme::muted()
        };
        let widget = Paragraph::new(Span::styled(label, style))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.border_for(field)),
            );
        frame.render_widget(widget, area);
    }
}

impl Default for InputPanelState {
    fn default() -> Self {
        Self::new()
    }
}
