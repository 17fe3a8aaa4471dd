use core::str::FromStr;

use thiserror::Error;

/// Filter used when `RUST_LOG` is unset. Kept quiet so log lines do not
/// interleave with the interactive menu.
pub const DEFAULT_FILTER: &str = "warn";

/// Environment variable selecting the log line format.
pub const FORMAT_ENV: &str = "KITBAG_LOG_FORMAT";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable lines.
    Pretty,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log format '{0}' (expected 'json' or 'pretty')")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            other => Err(UnknownLogFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directives.
    pub filter: String,
    pub format: LogFormat,
    /// Set when `KITBAG_LOG_FORMAT` held something unrecognized; reported once
    /// tracing is up.
    pub rejected_format: Option<UnknownLogFormat>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            rejected_format: None,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("RUST_LOG").ok().as_deref(),
            std::env::var(FORMAT_ENV).ok().as_deref(),
        )
    }

    /// Build from raw variable values (`None` = unset).
    pub fn from_vars(rust_log: Option<&str>, format: Option<&str>) -> Self {
        let filter = rust_log
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_FILTER)
            .to_string();

        let (format, rejected_format) = match format.map(LogFormat::from_str) {
            None => (LogFormat::default(), None),
            Some(Ok(format)) => (format, None),
            Some(Err(err)) => (LogFormat::default(), Some(err)),
        };

        Self {
            filter,
            format,
            rejected_format,
        }
    }
}
