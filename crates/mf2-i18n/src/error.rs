//! Error types for locale and plural rule operations

use thiserror::Error;

/// Errors that can occur while resolving locales and plural rules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// Failed to parse a language identifier
    #[error("Invalid language identifier: {0}")]
    InvalidLanguageId(String),

    /// No plural rules are known for the locale
    #[error("Error getting plural rules for locale {locale}")]
    NoPluralRules {
        /// Canonical tag of the locale
        locale: String,
    },

    /// A label is not one of the CLDR plural keywords
    #[error("Unknown plural category: {0}")]
    UnknownCategory(String),
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
