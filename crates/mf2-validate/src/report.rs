//! Human-readable report on stdout

use crate::error::ValidateError;
use crate::runner::Outcome;
use mf2_check::{CheckError, CheckReport};
use mf2_common::Verbosity;
use mf2_i18n::Locale;
use mf2_model::ModelError;
use std::io::{self, Write};

/// Writes report lines, honouring the verbosity.
pub struct Reporter<W> {
    out: W,
    verbosity: Verbosity,
}

impl<W: Write> Reporter<W> {
    /// Report to `out`.
    pub const fn new(out: W, verbosity: Verbosity) -> Self {
        Self { out, verbosity }
    }

    /// One line, unless quiet.
    pub fn line(&mut self, line: impl AsRef<str>) -> io::Result<()> {
        if self.verbosity.is_quiet() {
            return Ok(());
        }
        writeln!(self.out, "{}", line.as_ref())
    }

    /// The `=== Options provided ===` block, only when verbose.
    pub fn echo_options(
        &mut self,
        source_locale: &Locale,
        target_locale: &Locale,
        source_message: &str,
        target_message: &str,
    ) -> io::Result<()> {
        if !self.verbosity.is_verbose() {
            return Ok(());
        }
        writeln!(self.out, "=== Options provided ===")?;
        writeln!(self.out, "Source locale: {source_locale}")?;
        writeln!(self.out, "Target locale: {target_locale}")?;
        writeln!(self.out, "== Source message ==")?;
        write!(self.out, "{source_message}")?;
        writeln!(self.out, "== Target message ==")?;
        write!(self.out, "{target_message}")
    }

    /// Every diagnostic of a check, in order.
    pub fn diagnostics(&mut self, report: &CheckReport) -> io::Result<()> {
        for diagnostic in report.diagnostics() {
            self.line(diagnostic.to_string())?;
        }
        Ok(())
    }

    /// Why the run stopped early.
    pub fn failure(&mut self, error: &ValidateError) -> io::Result<()> {
        match error {
            ValidateError::Model(ModelError::DataModel { errors }) => {
                for problem in errors {
                    self.line(format!("Data model error: {problem}"))?;
                }
                Ok(())
            }
            ValidateError::Check {
                source: source @ CheckError::NonPluralSelectors { .. },
                ..
            } => {
                self.line(source.to_string())?;
                if let Some(selectors) = source.selector_list() {
                    self.line(format!("Non-plural selectors: {selectors}"))?;
                }
                Ok(())
            }
            other => self.line(other.to_string()),
        }
    }

    /// The `== Results ==` summary.
    pub fn results(
        &mut self,
        source_locale: &Locale,
        target_locale: &Locale,
        outcome: &Outcome,
    ) -> io::Result<()> {
        self.line("== Results ==")?;
        self.line(format!("Source locale: {source_locale}"))?;
        self.line(if outcome.source_ok {
            "Source message covers all plural categories."
        } else {
            "Source message does not cover all plural categories, or has extraneous categories."
        })?;
        self.line(format!("Target locale: {target_locale}"))?;
        self.line(if outcome.target_ok {
            "Target message covers all plural categories."
        } else {
            "Target message does not cover all plural categories, or has extraneous categories."
        })?;
        self.line(if outcome.placeholders_ok {
            "All variants in target message include placeholders from source message."
        } else {
            "One or more variants in target message omit placeholders from source message."
        })
    }

    /// The underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
