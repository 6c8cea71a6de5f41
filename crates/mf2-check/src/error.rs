//! Conditions that make a check unanswerable

use mf2_common::{join_labels, VariableName};
use mf2_i18n::I18nError;
use thiserror::Error;

/// Why exhaustiveness could not be decided for a message.
///
/// These are not verdicts on the message: they say the checking algorithm
/// cannot evaluate it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// At least one selector is not annotated with a plural function.
    #[error("Message uses non-plural selectors. Can't check exhaustiveness.")]
    NonPluralSelectors {
        /// The offending selectors, in message order
        selectors: Vec<VariableName>,
    },

    /// A variant mixes `*` and literal keys.
    #[error(
        "Partial wildcard variant is present; not all permutations of categories are \
         explicitly enumerated."
    )]
    PartialWildcard {
        /// Rendered key set of the first such variant
        keys: String,
    },

    /// The locale's plural categories could not be obtained.
    #[error(transparent)]
    PluralRules(#[from] I18nError),
}

impl CheckError {
    /// Space-joined offending selector names, for the non-plural case.
    pub fn selector_list(&self) -> Option<String> {
        match self {
            Self::NonPluralSelectors { selectors } => {
                Some(join_labels(selectors.iter().map(ToString::to_string)))
            }
            Self::PartialWildcard { .. } | Self::PluralRules(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = CheckError::NonPluralSelectors {
            selectors: vec![VariableName::new("a"), VariableName::new("b")],
        };
        assert_eq!(
            err.to_string(),
            "Message uses non-plural selectors. Can't check exhaustiveness."
        );
        assert_eq!(err.selector_list().as_deref(), Some("$a $b"));

        let err = CheckError::from(I18nError::NoPluralRules {
            locale: "tlh".to_string(),
        });
        assert_eq!(err.to_string(), "Error getting plural rules for locale tlh");
        assert!(err.selector_list().is_none());
    }
}
