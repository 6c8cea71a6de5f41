//! Configuration loading with environment overrides.

use crate::defaults::DEFAULT_CONFIG_FILE;
use crate::error::{ConfigError, ConfigResult};
use crate::schema::Config;
use crate::validator::validate_log_level;
use mf2_common::Verbosity;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Names the configuration file to load.
pub const CONFIG_ENV: &str = "MF2VALIDATE_CONFIG";
/// Overrides `logging.level`.
pub const LOG_LEVEL_ENV: &str = "MF2VALIDATE_LOG_LEVEL";
/// Overrides `output.verbosity`.
pub const VERBOSITY_ENV: &str = "MF2VALIDATE_VERBOSITY";

/// Where configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Source {
    /// A file the user named; it must exist.
    Required(PathBuf),
    /// The default file; used only if present.
    Optional(PathBuf),
}

/// Configuration loader.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    source: Source,
}

impl ConfigLoader {
    /// Load from `path`, which must exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::Required(path.into()),
        }
    }

    /// Pick the file: `explicit` if given, else the `MF2VALIDATE_CONFIG`
    /// variable, else `mf2validate.toml` in the working directory if present.
    pub fn discover(explicit: Option<&Path>, env: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = explicit {
            return Self::new(path);
        }
        match env(CONFIG_ENV).filter(|value| !value.is_empty()) {
            Some(path) => Self::new(path),
            None => Self {
                source: Source::Optional(PathBuf::from(DEFAULT_CONFIG_FILE)),
            },
        }
    }

    /// The file this loader reads.
    pub fn path(&self) -> &Path {
        match &self.source {
            Source::Required(path) | Source::Optional(path) => path,
        }
    }

    /// Load the file (or defaults), apply process environment overrides, and
    /// validate.
    pub fn load(&self) -> ConfigResult<Config> {
        self.load_with_env(|key| std::env::var(key).ok())
    }

    /// Like [`ConfigLoader::load`] with an explicit environment lookup.
    pub fn load_with_env(&self, env: impl Fn(&str) -> Option<String>) -> ConfigResult<Config> {
        let mut config = match &self.source {
            Source::Optional(path) if !path.exists() => {
                debug!(path = %path.display(), "no configuration file, using defaults");
                Config::default()
            }
            Source::Required(path) | Source::Optional(path) => load_from_file(path)?,
        };
        apply_env_overrides(&mut config, env)?;
        config.validate()?;
        Ok(config)
    }
}

/// Parse a configuration file.
pub fn load_from_file(path: &Path) -> ConfigResult<Config> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&text, &path.display().to_string())
}

/// Parse configuration text. `origin` names it in errors.
pub fn parse_config(text: &str, origin: &str) -> ConfigResult<Config> {
    toml::from_str(text).map_err(|source| ConfigError::Parse {
        origin: origin.to_string(),
        source,
    })
}

/// Apply `MF2VALIDATE_LOG_LEVEL` and `MF2VALIDATE_VERBOSITY`.
pub fn apply_env_overrides(
    config: &mut Config,
    env: impl Fn(&str) -> Option<String>,
) -> ConfigResult<()> {
    if let Some(level) = env(LOG_LEVEL_ENV) {
        validate_log_level(&level)?;
        debug!(%level, "log level from environment");
        config.logging.level = level;
    }
    if let Some(verbosity) = env(VERBOSITY_ENV) {
        config.output.verbosity = verbosity
            .parse::<Verbosity>()
            .map_err(|message| ConfigError::invalid(VERBOSITY_ENV, message))?;
        debug!(verbosity = %config.output.verbosity, "verbosity from environment");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r#"
            [output]
            verbosity = "verbose"

            [logging]
            level = "debug"
            json = true

            [plural_rules.overrides]
            tlh = ["one", "other"]
            "#,
            "<inline>",
        )
        .unwrap();

        assert_eq!(config.output.verbosity, Verbosity::Verbose);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
        assert_eq!(config.plural_rules.overrides["tlh"], vec!["one", "other"]);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config("[logging]\njson = true\n", "<inline>").unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.output.verbosity, Verbosity::Normal);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = parse_config("[output]\ncolour = true\n", "<inline>").unwrap_err();
        assert!(err.to_string().starts_with("cannot parse configuration from <inline>"));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        apply_env_overrides(
            &mut config,
            env(&[(LOG_LEVEL_ENV, "info"), (VERBOSITY_ENV, "quiet")]),
        )
        .unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.output.verbosity, Verbosity::Quiet);
    }

    #[test]
    fn test_bad_env_verbosity() {
        let mut config = Config::default();
        let err = apply_env_overrides(&mut config, env(&[(VERBOSITY_ENV, "chatty")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref field, .. } if field == VERBOSITY_ENV));
    }

    #[test]
    fn test_discover_prefers_explicit_then_env() {
        let explicit = ConfigLoader::discover(Some(Path::new("a.toml")), env(&[(CONFIG_ENV, "b.toml")]));
        assert_eq!(explicit.path(), Path::new("a.toml"));

        let from_env = ConfigLoader::discover(None, env(&[(CONFIG_ENV, "b.toml")]));
        assert_eq!(from_env.path(), Path::new("b.toml"));

        let default = ConfigLoader::discover(None, env(&[]));
        assert_eq!(default.path(), Path::new(DEFAULT_CONFIG_FILE));
    }
}
