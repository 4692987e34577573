//! Tracing/logging initialization.
//!
//! Configured from the environment:
//! - `RUST_LOG`: filter directives (default `info`)
//! - `LOG_FORMAT`: `json` (default) or `pretty`

use core::str::FromStr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Human-readable text.
    Pretty,
}

/// A `LOG_FORMAT` value that names no known format.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log format: {0}")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" | "text" => Ok(Self::Pretty),
            other => Err(UnknownLogFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub filter: String,
    pub format: LogFormat,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::Json,
        }
    }
}

impl TracingConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("RUST_LOG").ok(),
            std::env::var("LOG_FORMAT").ok(),
        )
    }

    /// Build a config from raw variable values; unset or unparseable values fall back to defaults.
    pub fn from_vars(filter: Option<String>, format: Option<String>) -> Self {
        let filter = filter
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let format = format
            .and_then(|f| f.parse().ok())
            .unwrap_or_default();

        Self { filter, format }
    }
}

/// Initialize tracing/logging for the process from the environment.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let _ = init_with(&TracingConfig::from_env());
}

/// Initialize tracing/logging with an explicit configuration.
///
/// Safe to call multiple times (subsequent calls are no-ops). Returns `true`
/// only for the call that installed the global subscriber.
pub fn init_with(config: &TracingConfig) -> bool {
    let filter = EnvFilter::try_new(&config.filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    if installed.is_ok() {
        ::tracing::debug!(filter = %config.filter, format = ?config.format, "tracing initialized");
    }
    installed.is_ok()
}
