//! Structured logging infrastructure for mf2validate
//!
//! Logs always go to stderr: stdout is reserved for the validation report.

use crate::error::{Mf2Error, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "warn", "debug", "mf2_check=trace")
    pub level: String,
    /// Whether to enable JSON formatting
    pub json_format: bool,
    /// Whether to emit ANSI colors
    pub ansi: bool,
    /// Whether to include target module information
    pub include_targets: bool,
    /// Whether a set `RUST_LOG` replaces `level`. Cleared when the level was
    /// given explicitly on the command line.
    pub env_overrides: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json_format: false,
            ansi: true,
            include_targets: false,
            env_overrides: true,
        }
    }
}

impl LoggingConfig {
    /// Builds the filter from `RUST_LOG` or the configured level.
    pub fn env_filter(&self) -> Result<EnvFilter> {
        let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        self.filter_from(rust_log.as_deref())
    }

    /// The directives in effect: `rust_log` when set and allowed to override,
    /// otherwise `level`.
    pub fn directives<'a>(&'a self, rust_log: Option<&'a str>) -> &'a str {
        match rust_log {
            Some(value) if self.env_overrides && !value.trim().is_empty() => value,
            _ => &self.level,
        }
    }

    fn filter_from(&self, rust_log: Option<&str>) -> Result<EnvFilter> {
        let directives = self.directives(rust_log);
        EnvFilter::try_new(directives).map_err(|source| Mf2Error::InvalidLogLevel {
            level: directives.to_string(),
            source,
        })
    }
}

/// Initialize the tracing subscriber with the given configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = config.env_filter()?;
    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if config.json_format {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(config.include_targets)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_ansi(config.ansi)
                    .with_target(config.include_targets)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    installed.map_err(Mf2Error::SubscriberInstall)
}
