//! Shared helpers for widget and render tests

use lissnify_app::config::Settings;
use lissnify_app::services::fixtures;
use lissnify_app::{AppState, DeckContent, FixedViewport};
use ratatui::buffer::Buffer;

/// Every cell symbol of `buffer`, row by row
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer.content.iter().map(|cell| cell.symbol()).collect()
}

/// A running state with the built-in content, mounted at `width` columns
pub fn loaded_state(width: u16) -> AppState {
    let mut state = AppState::new(Settings::default());
    state.deck.apply_content(DeckContent {
        categories: fixtures::categories(),
        testimonials: fixtures::testimonials(),
        steps: fixtures::steps(),
        listeners: fixtures::listeners(),
    });
    state.mount(&FixedViewport(width));
    state
}
