//! Structured logging initialization via `tracing`.

use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "orchestrator.log";

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the tracing subscriber with sensible defaults.
///
/// Respects the `RUST_LOG` environment variable for filtering, falling
/// back to `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .init();
}

/// Initialize tracing with the console layer plus an append-mode log file
/// under `log_dir` (created if missing).
pub fn init_tracing_with_file(log_dir: &Path) -> io::Result<()> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let file = open_log_file(log_dir)?;
    tracing_subscriber::registry()
        .with(default_filter())
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(file)),
        )
        .init();
    Ok(())
}

/// Create `log_dir` if needed and open the run log for appending.
fn open_log_file(log_dir: &Path) -> io::Result<File> {
    fs::create_dir_all(log_dir)?;
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join(LOG_FILE_NAME))
}
