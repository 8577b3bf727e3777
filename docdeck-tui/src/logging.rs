//! File logging for the TUI
//!
//! The terminal belongs to the UI, so events go to a daily rolling file
//! instead of stderr. Filter with `RUST_LOG`, e.g.:
//! - `RUST_LOG=debug` - every navigation transition
//! - `RUST_LOG=docdeck_core::navigator=debug` - navigator only
//!
//! Logs are written to `<cache dir>/docdeck/logs/docdeck.log.<date>`.

use std::path::PathBuf;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Directory the log files are written to.
pub fn logs_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("docdeck")
        .join("logs")
}

/// Install the global subscriber. Returns the log directory, or `None` when
/// it could not be created and logging is disabled.
pub fn init() -> Option<PathBuf> {
    let dir = logs_dir();
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Warning: Could not initialize file logging: {e}");
        return None;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_appender = tracing_appender::rolling::daily(&dir, "docdeck.log");
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(file_layer).init();
    Some(dir)
}
