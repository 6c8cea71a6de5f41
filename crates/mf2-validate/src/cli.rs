//! Command line arguments

use crate::error::ValidateResult;
use crate::runner::RunOptions;
use clap::Parser;
use mf2_common::logging::LoggingConfig;
use mf2_common::Verbosity;
use mf2_config::{validate_log_level, Config};
use mf2_i18n::Locale;
use std::path::PathBuf;

/// Command line arguments
#[derive(Parser, Debug, Clone)]
#[command(
    name = "mf2validate",
    author,
    version,
    about = "Validate a source and target MF2 message",
    long_about = None
)]
pub struct Args {
    /// Locale for source message
    #[arg(long = "sourceLocale", alias = "source-locale", value_name = "LOCALE", value_parser = parse_locale)]
    pub source_locale: Locale,

    /// Locale for target message
    #[arg(long = "targetLocale", alias = "target-locale", value_name = "LOCALE", value_parser = parse_locale)]
    pub target_locale: Locale,

    /// File name for source message
    #[arg(long = "sourceFilename", alias = "source-filename", value_name = "FILE")]
    pub source_filename: PathBuf,

    /// File name for target message
    #[arg(long = "targetFilename", alias = "target-filename", value_name = "FILE")]
    pub target_filename: PathBuf,

    /// Verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress all output
    #[arg(short, long)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level filter for diagnostics on stderr; takes precedence over `RUST_LOG`
    #[arg(short, long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

fn parse_locale(tag: &str) -> Result<Locale, String> {
    Locale::parse(tag).map_err(|e| e.to_string())
}

/// Everything a run needs once flags and configuration are merged.
#[derive(Debug, Clone)]
pub struct Settings {
    /// What to check
    pub options: RunOptions,
    /// How to log
    pub logging: LoggingConfig,
}

impl Args {
    /// Output verbosity: `--quiet` wins over `--verbose`, and either wins over
    /// the configured value.
    pub const fn verbosity(&self, configured: Verbosity) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            configured
        }
    }

    /// Merge flags over `config`.
    pub fn resolve(&self, config: &Config) -> ValidateResult<Settings> {
        let mut logging = config.logging_config();
        if let Some(level) = &self.log_level {
            validate_log_level(level)?;
            logging.level.clone_from(level);
            logging.env_overrides = false;
        }

        Ok(Settings {
            options: RunOptions {
                source_locale: self.source_locale.clone(),
                target_locale: self.target_locale.clone(),
                source_path: self.source_filename.clone(),
                target_path: self.target_filename.clone(),
                verbosity: self.verbosity(config.output.verbosity),
            },
            logging,
        })
    }
}
