//! Validation of one source/target message pair.

use crate::error::{exit, ValidateError, ValidateResult};
use crate::report::Reporter;
use mf2_check::{check_exhaustiveness, check_placeholder_consistency, MessageRole};
use mf2_common::Verbosity;
use mf2_i18n::{Locale, PluralRulesProvider};
use mf2_model::{check_data_model, read_message_file, DataModel, JsonMessageParser, MessageParser};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info, info_span};

/// What to validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Locale of the source message
    pub source_locale: Locale,
    /// Locale of the target message
    pub target_locale: Locale,
    /// Source message file
    pub source_path: PathBuf,
    /// Target message file
    pub target_path: PathBuf,
    /// How much to print
    pub verbosity: Verbosity,
}

/// Verdicts of the three checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Source message is exhaustive
    pub source_ok: bool,
    /// Target message is exhaustive
    pub target_ok: bool,
    /// Target variants carry the source placeholders
    pub placeholders_ok: bool,
}

impl Outcome {
    /// Exit status: placeholder failures take priority over coverage failures.
    pub const fn exit_code(&self) -> u8 {
        if self.source_ok && self.target_ok && self.placeholders_ok {
            exit::SUCCESS
        } else if !self.placeholders_ok {
            exit::INCONSISTENT_PLACEHOLDERS
        } else {
            exit::MISSING_PLURAL_CATEGORY
        }
    }
}

/// Validate the pair described by `options`, writing the report to `out`.
///
/// Errors are reported to `out` before being returned. A check that cannot
/// be decided for either message stops the run there.
pub fn run<P, W>(options: &RunOptions, rules: &P, out: W) -> ValidateResult<Outcome>
where
    P: PluralRulesProvider + ?Sized,
    W: Write,
{
    let mut reporter = Reporter::new(out, options.verbosity);
    match validate(options, rules, &mut reporter) {
        Ok(outcome) => Ok(outcome),
        Err(error) => {
            reporter.failure(&error)?;
            Err(error)
        }
    }
}

fn validate<P, W>(options: &RunOptions, rules: &P, reporter: &mut Reporter<W>) -> ValidateResult<Outcome>
where
    P: PluralRulesProvider + ?Sized,
    W: Write,
{
    let span = info_span!(
        "validate",
        source = %options.source_locale,
        target = %options.target_locale
    );
    let _entered = span.enter();

    let source_text = read_message_file(&options.source_path)?;
    let target_text = read_message_file(&options.target_path)?;
    reporter.echo_options(
        &options.source_locale,
        &options.target_locale,
        &source_text,
        &target_text,
    )?;

    let source = load(&source_text, &options.source_locale)?;
    let target = load(&target_text, &options.target_locale)?;

    reporter.line("== Checking source message ==")?;
    let source_report = check_exhaustiveness(MessageRole::Source, &options.source_locale, &source, rules)
        .map_err(|e| ValidateError::check(MessageRole::Source, e))?;
    reporter.diagnostics(&source_report)?;

    reporter.line("== Checking target message ==")?;
    let target_report = check_exhaustiveness(MessageRole::Target, &options.target_locale, &target, rules)
        .map_err(|e| ValidateError::check(MessageRole::Target, e))?;
    reporter.diagnostics(&target_report)?;

    reporter.line("== Checking placeholder consistency ==")?;
    let placeholder_report = check_placeholder_consistency(&source, &target);
    reporter.diagnostics(&placeholder_report)?;

    let outcome = Outcome {
        source_ok: source_report.is_ok(),
        target_ok: target_report.is_ok(),
        placeholders_ok: placeholder_report.is_ok(),
    };
    reporter.results(&options.source_locale, &options.target_locale, &outcome)?;

    info!(exit_code = outcome.exit_code(), "validation finished");
    Ok(outcome)
}

fn load(text: &str, locale: &Locale) -> ValidateResult<DataModel> {
    let model = JsonMessageParser.parse(text, locale)?;
    check_data_model(&model)?;
    debug!(locale = %locale, kind = ?model.kind(), "message loaded");
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_priority() {
        let outcome = |source_ok, target_ok, placeholders_ok| Outcome {
            source_ok,
            target_ok,
            placeholders_ok,
        };
        assert_eq!(outcome(true, true, true).exit_code(), exit::SUCCESS);
        assert_eq!(outcome(false, true, true).exit_code(), exit::MISSING_PLURAL_CATEGORY);
        assert_eq!(outcome(true, false, true).exit_code(), exit::MISSING_PLURAL_CATEGORY);
        assert_eq!(outcome(true, true, false).exit_code(), exit::INCONSISTENT_PLACEHOLDERS);
        assert_eq!(outcome(false, false, false).exit_code(), exit::INCONSISTENT_PLACEHOLDERS);
    }
}
