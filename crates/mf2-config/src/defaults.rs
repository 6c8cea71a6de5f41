//! Default values.

use crate::schema::*;
use mf2_common::Verbosity;

/// Log level used when nothing else is configured.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "mf2validate.toml";

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            logging: LogConfig::default(),
            plural_rules: PluralRulesConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json: false,
        }
    }
}
