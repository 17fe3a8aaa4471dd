//! Tracing/logging initialization.
//!
//! Logs always go to stderr; stdout belongs to the interactive console.

use tracing_subscriber::EnvFilter;

use crate::config::{LogConfig, LogFormat};

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = match config.format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    if installed.is_ok()
        && let Some(rejected) = &config.rejected_format
    {
        ::tracing::warn!("{rejected}; using json");
    }
}
