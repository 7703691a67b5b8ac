//! Logging setup for the `storefront` binary.

use sf_core::config::CONFIG_DIR;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Log file written while the TUI owns the terminal.
pub const LOG_FILE: &str = "storefront.log";

/// `RUST_LOG` if set, `info` otherwise.
fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy()
}

/// Initialize logging for one-shot commands (stderr only).
pub fn init_cli_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// Initialize logging for the TUI.
///
/// Logs go to `<root>/.storefront/storefront.log` so they never draw over
/// the interface. Without a `.storefront/` directory nothing is logged.
///
/// Returns the guard that must be kept alive for the duration of the program.
pub fn init_tui_logging(root: &Path) -> Option<WorkerGuard> {
    let log_dir = root.join(CONFIG_DIR);
    if !log_dir.is_dir() {
        return None;
    }

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_ansi(false)
        .with_writer(file_writer)
        .init();

    Some(guard)
}
