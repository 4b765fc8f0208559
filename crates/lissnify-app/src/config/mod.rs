//! Configuration file parsing for Lissnify Deck
//!
//! Supports:
//! - `.lissnify/config.toml` - API, UI and per-carousel settings

pub mod settings;
pub mod types;

pub use settings::{config_path, init_config_dir, load_settings};
pub use types::*;
