//! Lissnify Deck Library
//!
//! The Lissnify home-page carousels (support categories, stories of healing,
//! how it works, listeners) as a terminal application.

pub use lissnify_tui::RunOptions;

use std::path::Path;

use lissnify_core::prelude::*;

/// Main application entry point with a specific project path
pub async fn run_with_project(project_path: &Path, options: RunOptions) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    lissnify_core::logging::init()?;

    info!("Project: {}", project_path.display());
    if options.offline {
        info!("Offline mode, serving built-in content");
    }

    let result = lissnify_tui::run_with_project(project_path, options).await;

    match &result {
        Err(e) if e.is_fatal() => error!("Fatal error, exiting: {:?}", e),
        Err(e) => error!("Application error: {:?}", e),
        Ok(()) => {}
    }

    result
}
