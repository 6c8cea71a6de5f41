//! Plural categories and plural rule providers
//!
//! The checker never evaluates plural rules against numbers. It only needs to
//! know which categories a locale distinguishes, so a provider answers a
//! single question: `categories_for(locale)`.

use crate::cldr::CARDINAL_CATEGORIES;
use crate::error::{I18nError, I18nResult};
use crate::Locale;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// CLDR plural categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    /// `zero`
    Zero,
    /// `one`
    One,
    /// `two`
    Two,
    /// `few`
    Few,
    /// `many`
    Many,
    /// `other`, present in every locale
    Other,
}

impl PluralCategory {
    /// Every category, in CLDR order.
    pub const ALL: [Self; 6] = [
        Self::Zero,
        Self::One,
        Self::Two,
        Self::Few,
        Self::Many,
        Self::Other,
    ];

    /// The keyword used for this category in message keys.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PluralCategory {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| I18nError::UnknownCategory(s.to_string()))
    }
}

/// The set of plural categories one locale distinguishes, in CLDR order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralCategories(Vec<PluralCategory>);

impl PluralCategories {
    /// Build a set from categories in any order; duplicates are dropped.
    pub fn new(categories: impl IntoIterator<Item = PluralCategory>) -> Self {
        let mut categories: Vec<PluralCategory> = categories.into_iter().collect();
        categories.sort_unstable();
        categories.dedup();
        Self(categories)
    }

    /// The category keywords, e.g. `["one", "other"]`.
    pub fn labels(&self) -> Vec<String> {
        self.0.iter().map(|c| c.as_str().to_string()).collect()
    }

    /// Whether `label` names one of these categories.
    pub fn contains_label(&self, label: &str) -> bool {
        self.0.iter().any(|c| c.as_str() == label)
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the categories.
    pub fn iter(&self) -> impl Iterator<Item = PluralCategory> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for PluralCategories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&mf2_common::join_labels(self.0.iter().map(|c| c.as_str())))
    }
}

/// Source of plural category sets.
pub trait PluralRulesProvider {
    /// The plural categories `locale` distinguishes for cardinal numbers.
    fn categories_for(&self, locale: &Locale) -> I18nResult<PluralCategories>;
}

/// Plural categories from the built-in CLDR cardinal table.
#[derive(Debug, Clone, Copy, Default)]
pub struct CldrPluralRules;

impl PluralRulesProvider for CldrPluralRules {
    fn categories_for(&self, locale: &Locale) -> I18nResult<PluralCategories> {
        let by_region = locale
            .language_region()
            .and_then(|key| CARDINAL_CATEGORIES.get(key.as_str()).copied());
        let categories = by_region
            .or_else(|| CARDINAL_CATEGORIES.get(locale.language()).copied())
            .ok_or_else(|| I18nError::NoPluralRules {
                locale: locale.tag(),
            })?;

        debug!(locale = %locale, count = categories.len(), "resolved CLDR plural categories");
        Ok(PluralCategories::new(categories.iter().copied()))
    }
}

/// Category overrides layered over another provider.
///
/// Keys are matched against the full tag first, then `language-region`, then
/// the bare language, before falling back to the inner provider.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredPluralRules<P = CldrPluralRules> {
    overrides: HashMap<String, PluralCategories>,
    fallback: P,
}

impl ConfiguredPluralRules<CldrPluralRules> {
    /// Overrides on top of the built-in CLDR table.
    pub fn with_overrides(overrides: HashMap<String, PluralCategories>) -> Self {
        Self::layered(overrides, CldrPluralRules)
    }
}

impl<P: PluralRulesProvider> ConfiguredPluralRules<P> {
    /// Overrides on top of an arbitrary provider.
    ///
    /// Override keys are normalised through [`Locale::parse`]; keys that do
    /// not parse are kept verbatim and therefore never match.
    pub fn layered(overrides: HashMap<String, PluralCategories>, fallback: P) -> Self {
        let overrides = overrides
            .into_iter()
            .map(|(tag, categories)| {
                let key = Locale::parse(&tag).map_or(tag, |locale| locale.tag());
                (key, categories)
            })
            .collect();
        Self {
            overrides,
            fallback,
        }
    }

    fn lookup(&self, locale: &Locale) -> Option<&PluralCategories> {
        self.overrides
            .get(&locale.tag())
            .or_else(|| {
                locale
                    .language_region()
                    .and_then(|key| self.overrides.get(&key))
            })
            .or_else(|| self.overrides.get(locale.language()))
    }
}

impl<P: PluralRulesProvider> PluralRulesProvider for ConfiguredPluralRules<P> {
    fn categories_for(&self, locale: &Locale) -> I18nResult<PluralCategories> {
        if let Some(categories) = self.lookup(locale) {
            debug!(locale = %locale, categories = %categories, "using configured plural categories");
            return Ok(categories.clone());
        }
        self.fallback.categories_for(locale)
    }
}

impl<T: PluralRulesProvider + ?Sized> PluralRulesProvider for &T {
    fn categories_for(&self, locale: &Locale) -> I18nResult<PluralCategories> {
        (**self).categories_for(locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locale(tag: &str) -> Locale {
        tag.parse().unwrap()
    }

    #[test]
    fn test_category_keywords_round_trip() {
        for category in PluralCategory::ALL {
            assert_eq!(category.as_str().parse::<PluralCategory>(), Ok(category));
        }
        assert_eq!(
            "plenty".parse::<PluralCategory>(),
            Err(I18nError::UnknownCategory("plenty".to_string()))
        );
    }

    #[test]
    fn test_categories_sorted_and_deduplicated() {
        let categories = PluralCategories::new([
            PluralCategory::Other,
            PluralCategory::One,
            PluralCategory::Other,
        ]);
        assert_eq!(categories.labels(), vec!["one", "other"]);
        assert_eq!(categories.to_string(), "one other");
        assert!(categories.contains_label("one"));
        assert!(!categories.contains_label("few"));
    }

    #[test]
    fn test_cldr_english() {
        let categories = CldrPluralRules.categories_for(&locale("en-US")).unwrap();
        assert_eq!(categories.labels(), vec!["one", "other"]);
    }

    #[test]
    fn test_cldr_arabic_has_all_six() {
        let categories = CldrPluralRules.categories_for(&locale("ar")).unwrap();
        assert_eq!(categories.len(), 6);
    }

    #[test]
    fn test_cldr_japanese_only_other() {
        let categories = CldrPluralRules.categories_for(&locale("ja")).unwrap();
        assert_eq!(categories.labels(), vec!["other"]);
    }

    #[test]
    fn test_cldr_unknown_language() {
        assert_eq!(
            CldrPluralRules.categories_for(&locale("tlh")),
            Err(I18nError::NoPluralRules {
                locale: "tlh".to_string()
            })
        );
    }

    #[test]
    fn test_overrides_take_precedence() {
        let mut overrides = HashMap::new();
        overrides.insert(
            "en".to_string(),
            PluralCategories::new([PluralCategory::Other]),
        );
        overrides.insert(
            "tlh".to_string(),
            PluralCategories::new([PluralCategory::One, PluralCategory::Other]),
        );
        let rules = ConfiguredPluralRules::with_overrides(overrides);

        assert_eq!(
            rules.categories_for(&locale("en-GB")).unwrap().labels(),
            vec!["other"]
        );
        assert_eq!(
            rules.categories_for(&locale("tlh")).unwrap().labels(),
            vec!["one", "other"]
        );
        assert_eq!(
            rules.categories_for(&locale("pl")).unwrap().labels(),
            vec!["one", "few", "many", "other"]
        );
    }

    #[test]
    fn test_region_override_beats_language_override() {
        let mut overrides = HashMap::new();
        overrides.insert(
            "pt".to_string(),
            PluralCategories::new([PluralCategory::One, PluralCategory::Other]),
        );
        overrides.insert(
            "pt_BR".to_string(),
            PluralCategories::new([PluralCategory::Other]),
        );
        let rules = ConfiguredPluralRules::with_overrides(overrides);

        assert_eq!(
            rules.categories_for(&locale("pt-BR")).unwrap().labels(),
            vec!["other"]
        );
        assert_eq!(
            rules.categories_for(&locale("pt-PT")).unwrap().labels(),
            vec!["one", "other"]
        );
    }

    proptest::proptest! {
        #[test]
        fn prop_categories_are_canonical(indices in proptest::collection::vec(0usize..6, 0..12)) {
            let picked: Vec<PluralCategory> = indices.iter().map(|&i| PluralCategory::ALL[i]).collect();
            let categories = PluralCategories::new(picked.clone());

            let listed: Vec<PluralCategory> = categories.iter().collect();
            proptest::prop_assert!(listed.windows(2).all(|pair| pair[0] < pair[1]));
            for category in picked {
                proptest::prop_assert!(categories.contains_label(category.as_str()));
            }
        }
    }
}
