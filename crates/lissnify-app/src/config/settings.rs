//! Settings parser for .lissnify/config.toml

use super::types::Settings;
use lissnify_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const LISSNIFY_DIR: &str = ".lissnify";

const DEFAULT_CONFIG: &str = r#"# Lissnify Deck configuration

[api]
# Backend origin serving /api/categories/, /api/testimonials/, /api/listenerList/
base_url = "http://localhost:8000"
# Environment variable holding the bearer token (optional)
token_env = "LISSNIFY_TOKEN"
timeout_ms = 10000

[ui]
show_status_bar = true
tick_rate_ms = 50

# Per-carousel overrides. Any field left out keeps its built-in default.
# Keys: categories, testimonials, steps, listeners
#
# [carousels.categories]
# period_ms = 4000
# stepping = "item"            # "page" or "item"
# autoplay = true
# pause_on_interaction = false
# breakpoints = [{ below = 60, items = 1 }, { below = 90, items = 2 }, { below = 120, items = 3 }]
# fallback = 4
"#;

/// Path of the config file for a project directory
pub fn config_path(project_path: &Path) -> PathBuf {
    project_path.join(LISSNIFY_DIR).join(CONFIG_FILENAME)
}

/// Load settings from .lissnify/config.toml
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = config_path(project_path);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str::<Settings>(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                for key in settings.unknown_carousel_keys() {
                    warn!("Ignoring unknown carousel [carousels.{}] in config", key);
                }
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create .lissnify/config.toml with commented defaults.
///
/// An existing file is left untouched.
pub fn init_config_dir(project_path: &Path) -> Result<PathBuf> {
    let dir = project_path.join(LISSNIFY_DIR);

    if !dir.exists() {
        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::config(format!("Failed to create .lissnify dir: {}", e)))?;
    }

    let path = dir.join(CONFIG_FILENAME);
    if path.exists() {
        debug!("Config already exists at {:?}", path);
        return Ok(path);
    }

    std::fs::write(&path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    info!("Created default config at {:?}", path);

    Ok(path)
}
