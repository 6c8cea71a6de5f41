//! Application-wide error types using thiserror.

use mf2_check::{CheckError, MessageRole};
use mf2_common::Mf2Error;
use mf2_config::ConfigError;
use mf2_model::ModelError;

/// Process exit statuses.
pub mod exit {
    /// Every check passed.
    pub const SUCCESS: u8 = 0;
    /// A message does not cover its plural categories.
    pub const MISSING_PLURAL_CATEGORY: u8 = 1;
    /// A message file is not a valid data model.
    pub const PARSE_ERROR: u8 = 2;
    /// A message has a data-model error.
    pub const DATA_MODEL_ERROR: u8 = 4;
    /// Plural rules are unavailable for a locale.
    pub const PLURAL_RULES_ERROR: u8 = 5;
    /// A message selects on something other than a plural number.
    pub const NON_PLURAL_SELECTORS: u8 = 6;
    /// A message file could not be read.
    pub const IO_ERROR: u8 = 8;
    /// A message has a partial-wildcard variant.
    pub const PARTIAL_WILDCARDS: u8 = 9;
    /// The target omits placeholders the source uses.
    pub const INCONSISTENT_PLACEHOLDERS: u8 = 10;
    /// Configuration or logging setup failed.
    pub const CONFIG_ERROR: u8 = 11;
}

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum ValidateError {
    /// Configuration error.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Logging could not be set up.
    #[error("{0}")]
    Logging(#[source] Mf2Error),

    /// A message file could not be read, parsed or validated.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Exhaustiveness could not be decided for one message.
    #[error("{source}")]
    Check {
        /// Which message
        role: MessageRole,
        /// Why
        #[source]
        source: CheckError,
    },

    /// The report could not be written.
    #[error("cannot write report: {0}")]
    Output(#[from] std::io::Error),
}

impl ValidateError {
    /// Abort of the check on `role`'s message.
    pub const fn check(role: MessageRole, source: CheckError) -> Self {
        Self::Check { role, source }
    }

    /// Exit status for this error.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::Logging(_) => exit::CONFIG_ERROR,
            Self::Model(ModelError::Io { .. }) | Self::Output(_) => exit::IO_ERROR,
            Self::Model(ModelError::Parse { .. }) => exit::PARSE_ERROR,
            Self::Model(ModelError::DataModel { .. }) => exit::DATA_MODEL_ERROR,
            Self::Check { source, .. } => match source {
                CheckError::NonPluralSelectors { .. } => exit::NON_PLURAL_SELECTORS,
                CheckError::PartialWildcard { .. } => exit::PARTIAL_WILDCARDS,
                CheckError::PluralRules(_) => exit::PLURAL_RULES_ERROR,
            },
        }
    }
}

/// Result type for the application.
pub type ValidateResult<T> = Result<T, ValidateError>;

#[cfg(test)]
mod tests {
    use super::*;
    use mf2_i18n::I18nError;
    use mf2_model::DataModelError;

    #[test]
    fn test_exit_codes() {
        let io = ValidateError::from(ModelError::Io {
            path: "a.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        });
        assert_eq!(io.exit_code(), exit::IO_ERROR);

        let data_model = ValidateError::from(ModelError::DataModel {
            errors: vec![DataModelError::MissingFallbackVariant],
        });
        assert_eq!(data_model.exit_code(), exit::DATA_MODEL_ERROR);

        let rules = ValidateError::check(
            MessageRole::Target,
            I18nError::NoPluralRules {
                locale: "tlh".to_string(),
            }
            .into(),
        );
        assert_eq!(rules.exit_code(), exit::PLURAL_RULES_ERROR);
        assert_eq!(rules.to_string(), "Error getting plural rules for locale tlh");

        let partial = ValidateError::check(
            MessageRole::Source,
            CheckError::PartialWildcard {
                keys: "one *".to_string(),
            },
        );
        assert_eq!(partial.exit_code(), exit::PARTIAL_WILDCARDS);

        let config = ValidateError::from(ConfigError::invalid("logging.level", "bad"));
        assert_eq!(config.exit_code(), exit::CONFIG_ERROR);
    }
}
