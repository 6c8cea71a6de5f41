//! Configuration schema definitions using serde.

use crate::error::ConfigResult;
use mf2_common::logging::LoggingConfig;
use mf2_common::Verbosity;
use mf2_i18n::ConfiguredPluralRules;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Main configuration structure for mf2validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Report output configuration.
    pub output: OutputConfig,
    /// Diagnostic logging configuration.
    pub logging: LogConfig,
    /// Plural rule configuration.
    pub plural_rules: PluralRulesConfig,
}

/// Report output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// How much of the report to print.
    pub verbosity: Verbosity,
}

/// Diagnostic logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Level filter, e.g. `warn` or `mf2_check=debug`.
    pub level: String,
    /// Emit logs as JSON lines.
    pub json: bool,
}

/// Plural rule configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PluralRulesConfig {
    /// Category labels per locale tag, replacing the built-in CLDR set.
    pub overrides: BTreeMap<String, Vec<String>>,
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        crate::validator::ConfigValidator::validate(self)
    }

    /// Logging settings for [`mf2_common::logging::init_logging`].
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.logging.level.clone(),
            json_format: self.logging.json,
            ..LoggingConfig::default()
        }
    }

    /// Plural rules with the configured overrides layered over CLDR.
    pub fn plural_rules(&self) -> ConfigResult<ConfiguredPluralRules> {
        let overrides = self
            .plural_rules
            .overrides
            .iter()
            .map(|(tag, labels)| {
                crate::validator::parse_categories(tag, labels).map(|set| (tag.clone(), set))
            })
            .collect::<ConfigResult<_>>()?;
        Ok(ConfiguredPluralRules::with_overrides(overrides))
    }
}
