//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_NAME: &str = "lplan.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/lesson-planner/logs/` (or the
/// platform's local data directory). Nothing is written to the terminal,
/// which belongs to the TUI.
/// Log level is controlled by the `LPLAN_LOG` environment variable.
///
/// # Examples
/// ```bash
/// LPLAN_LOG=debug cargo run
/// LPLAN_LOG=lplan_client=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info for our crates, allow override via LPLAN_LOG
    let env_filter = EnvFilter::try_from_env("LPLAN_LOG").unwrap_or_else(|_| {
        EnvFilter::new("lesson_planner=info,lplan_app=info,lplan_client=info,lplan_tui=info,warn")
    });

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
    tracing::info!("Lesson Planner starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("lesson-planner").join("logs"))
}
