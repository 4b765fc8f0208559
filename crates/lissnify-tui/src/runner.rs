//! Main TUI runner - entry point and event loop
//!
//! - `run_with_project`: load settings, mount the deck and run until quit
//! - `run_loop`: drains background messages, draws, then polls the terminal

use std::path::Path;
use std::time::Duration;

use lissnify_app::config::{self, Settings};
use lissnify_app::message::Message;
use lissnify_app::process::process_message;
use lissnify_app::services::{ContentSource, DataSource};
use lissnify_app::signals;
use lissnify_app::state::AppState;
use lissnify_app::ViewportProvider;
use lissnify_core::prelude::*;
use tokio::sync::mpsc;

use crate::{event, render, terminal};

/// Command-line overrides applied on top of the config file
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Replaces `[api].base_url`
    pub api_url: Option<String>,
    /// Serve the built-in content instead of calling the API
    pub offline: bool,
}

impl RunOptions {
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(url) = &self.api_url {
            settings.api.base_url = url.clone();
        }
    }
}

/// Width of the real terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalViewport;

impl ViewportProvider for TerminalViewport {
    fn width(&self) -> u16 {
        match crossterm::terminal::size() {
            Ok((width, _)) => width,
            Err(e) => {
                warn!("Failed to read terminal size: {}", e);
                80
            }
        }
    }
}

/// Run the TUI against the project at `project_path`
pub async fn run_with_project(project_path: &Path, options: RunOptions) -> Result<()> {
    let mut settings = config::load_settings(project_path);
    options.apply(&mut settings);
    let source = ContentSource::from_settings(&settings.api, options.offline)?;

    // Install panic hook for terminal restoration
    terminal::install_panic_hook();
    let mut term = terminal::init()?;
    if let Err(e) = terminal::enable_mouse_capture() {
        warn!("Hover pause unavailable: {}", e);
    }

    let tick_rate = Duration::from_millis(settings.ui.tick_rate_ms.max(1));
    tracing::debug!("Event loop tick rate {:?}", tick_rate);
    let mut state = AppState::new(settings);
    state.source_label = source.label();

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());

    state.mount(&TerminalViewport);
    process_message(&mut state, Message::ReloadContent, &msg_tx, &source);

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &source, tick_rate);

    state.unmount();
    terminal::disable_mouse_capture();
    ratatui::restore();
    info!("Lissnify Deck exiting");

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    source: &ContentSource,
    tick_rate: Duration,
) -> Result<()> {
    while !state.should_quit() {
        // Process background messages (content loads, signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, source);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll(state.poll_timeout(tick_rate))? {
            if !matches!(message, Message::Tick) {
                process_message(state, message, &msg_tx, source);
            }
        }

        // Tick every pass so steady input can't starve the auto-advance timers
        process_message(state, Message::Tick, &msg_tx, source);
    }

    Ok(())
}
