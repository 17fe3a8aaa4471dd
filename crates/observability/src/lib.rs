//! Tracing/logging setup shared by the kitbag binaries.

/// Log configuration read from the environment.
pub mod config;

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use config::{LogConfig, LogFormat};

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&LogConfig::from_env());
}
