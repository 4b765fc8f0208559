//! lissnify-tui - Terminal UI for Lissnify Deck
//!
//! This crate provides the ratatui-based terminal interface. It drives the
//! lissnify-app TEA loop with crossterm events and renders the deck of
//! carousels.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use runner::{run_with_project, RunOptions, TerminalViewport};
