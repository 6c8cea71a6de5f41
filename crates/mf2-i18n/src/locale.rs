//! Locale parsing and display

use crate::error::{I18nError, I18nResult};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// A validated locale.
///
/// The checker never interprets a locale beyond using it to look up plural
/// categories and naming it in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    id: LanguageIdentifier,
}

impl Locale {
    /// Parse a locale from a BCP-47 language tag. POSIX-style underscores
    /// (`pt_PT`) are accepted.
    pub fn parse(tag: &str) -> I18nResult<Self> {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Err(I18nError::InvalidLanguageId(tag.to_string()));
        }
        let id: LanguageIdentifier = trimmed
            .replace('_', "-")
            .parse()
            .map_err(|_| I18nError::InvalidLanguageId(tag.to_string()))?;
        if id.language.is_empty() {
            return Err(I18nError::InvalidLanguageId(tag.to_string()));
        }
        Ok(Self { id })
    }

    /// The primary language subtag, e.g. `pt` for `pt-PT`.
    pub fn language(&self) -> &str {
        self.id.language.as_str()
    }

    /// Language plus region (`pt-PT`), when a region is present.
    pub fn language_region(&self) -> Option<String> {
        self.id
            .region
            .map(|region| format!("{}-{}", self.id.language, region))
    }

    /// The canonical language tag.
    pub fn tag(&self) -> String {
        self.id.to_string()
    }

    /// Access the underlying identifier.
    pub const fn language_identifier(&self) -> &LanguageIdentifier {
        &self.id
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_language() {
        let locale = Locale::parse("en").unwrap();
        assert_eq!(locale.language(), "en");
        assert_eq!(locale.language_region(), None);
        assert_eq!(locale.to_string(), "en");
    }

    #[test]
    fn test_parse_canonicalizes_case_and_separator() {
        let locale = Locale::parse("PT_pt").unwrap();
        assert_eq!(locale.tag(), "pt-PT");
        assert_eq!(locale.language(), "pt");
        assert_eq!(locale.language_region().as_deref(), Some("pt-PT"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            Locale::parse(""),
            Err(I18nError::InvalidLanguageId(String::new()))
        );
        assert!(Locale::parse("not a locale").is_err());
        assert!("en-US-x-!!".parse::<Locale>().is_err());
    }
}
