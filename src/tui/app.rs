//! Application state and the Elm-style event loop.
//!
//! Render → select → update: each iteration snapshots the session, draws
//! both panes, then waits for the next tick, terminal input, or a
//! completion notice from a spawned generation task.

use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::core::design::session::DesignSession;
use crate::core::design::types::DesignState;
use crate::tui::events::AppEvent;
use crate::tui::theme;
use crate::tui::views::input_panel::{InputPanelState, PanelAction};
use crate::tui::views::preview;

/// Central application state (Elm architecture).
pub struct App {
    /// Whether the app is still running.
    running: bool,
    /// The editing session shared with spawned generation tasks.
    session: DesignSession,
    /// Configuration form state.
    input_panel: InputPanelState,
    /// Receiver for backend events.
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Sender handed to spawned tasks.
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl App {
    pub fn new(session: DesignSession) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            running: true,
            session,
            input_panel: InputPanelState::new(),
            event_rx,
            event_tx,
        }
    }

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        while self.running {
            let snapshot = self.session.snapshot().await;
            terminal.draw(|frame| self.render(frame, &snapshot))?;

            tokio::select! {
                _ = tick_interval.tick() => {}
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_terminal_event(event, &snapshot).await;
                    }
                }
                Some(event) = self.event_rx.recv() => match event {
                    // Settled generations just need the redraw at loop top.
                    AppEvent::GenerationSettled => {}
                },
            }
        }

        Ok(())
    }

    async fn handle_terminal_event(&mut self, event: Event, snapshot: &DesignState) {
        let Event::Key(key) = event else { return };
        if key.kind != KeyEventKind::Press {
            return;
        }

        if Self::is_quit_key(key) {
            self.running = false;
            return;
        }

        let Some(action) = self.input_panel.handle_key(key, snapshot.is_busy()) else {
            return;
        };

        match action {
            // Applied inline so rapid keystrokes stay ordered.
            PanelAction::Patch(patch) => self.session.update_config(patch).await,
            PanelAction::GenerateAll => self.spawn_generation(GenerationKind::All),
            PanelAction::GenerateText => self.spawn_generation(GenerationKind::Text),
            PanelAction::GenerateImage => self.spawn_generation(GenerationKind::Image),
        }
    }

    fn is_quit_key(key: KeyEvent) -> bool {
        key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    }

    fn spawn_generation(&self, kind: GenerationKind) {
        let session = self.session.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            match kind {
                GenerationKind::All => session.generate_all().await,
                GenerationKind::Text => session.generate_text().await,
                GenerationKind::Image => session.generate_image().await,
            }
            let _ = tx.send(AppEvent::GenerationSettled);
        });
    }

    // ── Rendering ───────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame, snapshot: &DesignState) {
        let rows = Layout::vertical([Constraint::Min(1), Constraint::Length(1)])
            .split(frame.area());

        let panes =
            Layout::horizontal([Constraint::Percentage(34), Constraint::Percentage(66)])
                .split(rows[0]);

        self.input_panel.render(frame, panes[0], snapshot);
        preview::render(frame, panes[1], snapshot);
        self.render_status_bar(frame, rows[1], snapshot);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, snapshot: &DesignState) {
        let mut spans = vec![
            Span::styled(" DesignGenie ", theme::title()),
            Span::styled(
                "[Tab]:fields [◀ ▶]:category [^G]:all [^T]:text [^I]:image [Esc]:quit",
                theme::key_hint(),
            ),
        ];
        if snapshot.is_busy() {
            spans.push(Span::styled("  ⟳ generating", theme::highlight()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[derive(Debug, Clone, Copy)]
enum GenerationKind {
    All,
    Text,
    Image,
}
