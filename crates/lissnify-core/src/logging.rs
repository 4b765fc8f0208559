//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_NAME: &str = "lissnify.log";

/// Filter used when `LISSNIFY_LOG` is unset or invalid
const DEFAULT_FILTER: &str = "lissnify=info,warn";

/// Overrides the log directory, e.g. to keep logs next to a checkout
const LOG_DIR_ENV: &str = "LISSNIFY_LOG_DIR";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/lissnify/logs/` (or `$LISSNIFY_LOG_DIR`)
/// so they never interleave with the terminal UI. Log level is controlled by
/// the `LISSNIFY_LOG` environment variable.
///
/// # Examples
/// ```bash
/// LISSNIFY_LOG=debug lissnify
/// LISSNIFY_LOG=lissnify_app::carousel=trace lissnify --offline
/// LISSNIFY_LOG_DIR=./logs lissnify
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter = EnvFilter::try_from_env("LISSNIFY_LOG")
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Lissnify Deck starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

fn get_log_directory() -> Result<PathBuf> {
    Ok(resolve_log_directory(
        std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
        dirs::data_local_dir(),
    ))
}

/// An explicit non-empty override wins, then the platform data dir, then `.`
fn resolve_log_directory(override_dir: Option<PathBuf>, data_dir: Option<PathBuf>) -> PathBuf {
    match override_dir {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => data_dir
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lissnify")
            .join("logs"),
    }
}

/// Get the log file path for the current day
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    Ok(dir.join(LOG_FILE_NAME))
}
