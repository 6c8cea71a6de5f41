//! Configuration errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("cannot read configuration file {}", .path.display())]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for the schema
    #[error("cannot parse configuration from {origin}: {source}")]
    Parse {
        /// File path, or `<inline>` for configuration given as a string
        origin: String,
        /// Underlying cause
        #[source]
        source: toml::de::Error,
    },

    /// A value is out of range
    #[error("invalid value for {field}: {message}")]
    Invalid {
        /// Dotted path of the offending setting
        field: String,
        /// What is wrong with it
        message: String,
    },
}

impl ConfigError {
    /// An invalid setting.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
