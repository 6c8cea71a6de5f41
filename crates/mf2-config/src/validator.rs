//! Configuration validation.

use crate::error::{ConfigError, ConfigResult};
use crate::schema::Config;
use mf2_i18n::{Locale, PluralCategories, PluralCategory};

/// Level names accepted in `logging.level` directives.
pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration, stopping at the first problem.
    pub fn validate(config: &Config) -> ConfigResult<()> {
        validate_log_level(&config.logging.level)?;
        for (tag, labels) in &config.plural_rules.overrides {
            parse_categories(tag, labels)?;
        }
        Ok(())
    }
}

/// Check a level filter such as `warn` or `mf2_check=debug,info`.
pub fn validate_log_level(level: &str) -> ConfigResult<()> {
    let invalid = || ConfigError::invalid("logging.level", format!("unrecognised level '{level}'"));
    if level.trim().is_empty() {
        return Err(invalid());
    }
    for directive in level.split(',') {
        let name = directive.rsplit('=').next().unwrap_or(directive).trim();
        if !LOG_LEVELS.contains(&name.to_ascii_lowercase().as_str()) {
            return Err(invalid());
        }
    }
    Ok(())
}

/// Turn a plural override entry into a category set.
///
/// The tag must be a valid locale, every label a CLDR keyword, `other` must
/// be present, and no label may repeat.
pub fn parse_categories(tag: &str, labels: &[String]) -> ConfigResult<PluralCategories> {
    let field = format!("plural_rules.overrides.{tag}");
    Locale::parse(tag).map_err(|e| ConfigError::invalid(&field, e.to_string()))?;

    let mut categories = Vec::with_capacity(labels.len());
    for label in labels {
        let category: PluralCategory = label
            .parse()
            .map_err(|e: mf2_i18n::I18nError| ConfigError::invalid(&field, e.to_string()))?;
        if categories.contains(&category) {
            return Err(ConfigError::invalid(
                &field,
                format!("category '{label}' listed twice"),
            ));
        }
        categories.push(category);
    }
    if !categories.contains(&PluralCategory::Other) {
        return Err(ConfigError::invalid(&field, "must include 'other'"));
    }
    Ok(PluralCategories::new(categories))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_log_levels() {
        assert!(validate_log_level("warn").is_ok());
        assert!(validate_log_level("DEBUG").is_ok());
        assert!(validate_log_level("info,mf2_check=trace").is_ok());
        assert!(validate_log_level("").is_err());
        assert!(validate_log_level("loud").is_err());
        assert!(validate_log_level("mf2_check=verbose").is_err());
    }

    #[test]
    fn test_valid_override() {
        let set = parse_categories("tlh", &labels(&["other", "one"])).unwrap();
        assert_eq!(set.labels(), vec!["one", "other"]);
    }

    #[test]
    fn test_override_requires_other() {
        let err = parse_categories("tlh", &labels(&["one"])).unwrap_err();
        assert!(err.to_string().contains("must include 'other'"));
    }

    #[test]
    fn test_override_rejects_unknown_and_duplicates() {
        assert!(parse_categories("tlh", &labels(&["one", "several", "other"])).is_err());
        let err = parse_categories("tlh", &labels(&["one", "one", "other"])).unwrap_err();
        assert!(err.to_string().contains("listed twice"));
    }

    #[test]
    fn test_override_rejects_bad_locale() {
        let err = parse_categories("", &labels(&["other"])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_validate_config() {
        let mut config = Config::default();
        config
            .plural_rules
            .overrides
            .insert("tlh".to_string(), labels(&["one"]));
        assert!(config.validate().is_err());
    }

    proptest::proptest! {
        #[test]
        fn prop_target_directives_accept_known_levels(
            target in "[a-z][a-z0-9_]{0,12}",
            level in proptest::sample::select(LOG_LEVELS.to_vec()),
        ) {
            let directive = format!("{target}={level}");
            proptest::prop_assert!(validate_log_level(&directive).is_ok());
        }
    }
}
