//! Structured logging on stderr.
//!
//! The filter comes from `TINT_LOG` (same syntax as `RUST_LOG`) and
//! defaults to `warn`. JSON lines are selected with `--log-json` or
//! `TINT_LOG_FORMAT=json`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "TINT_LOG";
pub const LOG_FORMAT_ENV: &str = "TINT_LOG_FORMAT";
const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// `--log-json` wins; otherwise `TINT_LOG_FORMAT` decides.
    #[must_use]
    pub fn resolve(json_flag: bool, env_value: Option<&str>) -> Self {
        if json_flag || env_value.is_some_and(|value| value.trim().eq_ignore_ascii_case("json")) {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(format: LogFormat) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    let _ = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
