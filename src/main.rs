use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use designgenie::config::AppConfig;
use designgenie::core::design::DesignSession;
use designgenie::core::gateway::GeminiGateway;
use designgenie::core::logging;
use designgenie::tui::App;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load();
    let _log_guard = logging::init(&config.log_dir());
    tracing::info!("{} v{} starting", designgenie::NAME, designgenie::VERSION);

    let Some(api_key) = config.api_key() else {
        eprintln!(
            "No API key found. Set {} to your Google API key.",
            config.api.api_key_env
        );
        std::process::exit(1);
    };
    if !GeminiGateway::is_valid_api_key_format(&api_key) {
        tracing::warn!("API key does not look like a Google API key (expected AIza prefix)");
    }

    let gateway = Arc::new(GeminiGateway::new(
        api_key,
        config.api.text_model.clone(),
        config.api.image_model.clone(),
    ));
    let session = DesignSession::new(gateway);
    let tick_rate = Duration::from_millis(config.tui.tick_rate_ms);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let mut app = App::new(session);
    let result = app.run(&mut terminal, tick_rate).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
