//! Errors raised while setting up shared infrastructure

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::TryInitError;

/// Result type alias for the shared helpers
pub type Result<T> = std::result::Result<T, Mf2Error>;

/// Failures of the logging setup in [`crate::logging`]
#[derive(Error, Debug)]
pub enum Mf2Error {
    /// The level filter does not parse as tracing directives
    #[error("invalid log level '{level}'")]
    InvalidLogLevel {
        /// Filter text as given
        level: String,
        /// Why `tracing_subscriber` rejected it
        #[source]
        source: ParseError,
    },

    /// A global subscriber is already installed
    #[error("failed to install log subscriber")]
    SubscriberInstall(#[source] TryInitError),
}
