//! Diagnostics and check reports

use mf2_common::VariableName;
use std::fmt;

/// Which side of the comparison a message is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageRole {
    /// The message being translated from
    Source,
    /// The translation
    Target,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Source => "source",
            Self::Target => "target",
        })
    }
}

/// How much a diagnostic matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Informational; never affects a verdict
    Warning,
    /// The message is invalid
    Error,
}

/// What a diagnostic is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The message has no selectors, so there is nothing to cover.
    NotAMatch {
        /// Message the note is about
        role: MessageRole,
    },
    /// A variant's key count differs from the permutation length.
    KeyCountMismatch {
        /// Rendered key set
        keys: String,
        /// Keys on the variant
        found: usize,
        /// Selectors on the message
        expected: usize,
    },
    /// The message has the wrong number of variants.
    VariantCount {
        /// Variants present
        actual: usize,
        /// Variants required, including the `*` variant
        expected: usize,
    },
    /// No variant covers a permutation of plural categories.
    OmittedVariant {
        /// Space-joined category labels
        permutation: String,
    },
    /// A literal key is not a plural category of the locale.
    InvalidKey {
        /// The key text
        key: String,
        /// Locale tag
        locale: String,
    },
    /// A later source variant uses a placeholder the first one does not.
    SourcePlaceholderDrift {
        /// The extra placeholder
        placeholder: VariableName,
    },
    /// A target variant omits a placeholder the source uses.
    MissingPlaceholder {
        /// Rendered key set of the target variant; empty for a pattern message
        keys: String,
        /// The omitted placeholder
        placeholder: VariableName,
    },
}

impl DiagnosticKind {
    /// Severity implied by the kind.
    pub const fn severity(&self) -> Severity {
        match self {
            Self::NotAMatch { .. }
            | Self::KeyCountMismatch { .. }
            | Self::SourcePlaceholderDrift { .. } => Severity::Warning,
            Self::VariantCount { .. }
            | Self::OmittedVariant { .. }
            | Self::InvalidKey { .. }
            | Self::MissingPlaceholder { .. } => Severity::Error,
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAMatch { role } => write!(
                f,
                "{role} message is not made up of a .match construct. Trivially correct."
            ),
            Self::KeyCountMismatch {
                keys,
                found,
                expected,
            } => write!(
                f,
                "variant «{keys}» has {found} keys but there are {expected} selectors"
            ),
            Self::VariantCount { actual, expected } => write!(
                f,
                "Incorrect number of variants; there are {actual} and should be {expected} \
                 including the wildcard variant."
            ),
            Self::OmittedVariant { permutation } => write!(f, "Omitted variant: {permutation}"),
            Self::InvalidKey { key, locale } => write!(
                f,
                "Key {key} is not a valid plural category for locale {locale}."
            ),
            Self::SourcePlaceholderDrift { placeholder } => write!(
                f,
                "not all variants in source message contain the same set of placeholders. \
                 The placeholder {placeholder} does not appear in every variant."
            ),
            Self::MissingPlaceholder { keys, placeholder } if keys.is_empty() => write!(
                f,
                "In target message, the pattern omits placeholder: {placeholder}"
            ),
            Self::MissingPlaceholder { keys, placeholder } => write!(
                f,
                "In target message, variant with keys «{keys}» omits placeholder: {placeholder}"
            ),
        }
    }
}

/// One finding, rendered as a single human-readable line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// What was found
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// Wrap a kind.
    pub const fn new(kind: DiagnosticKind) -> Self {
        Self { kind }
    }

    /// Severity of the finding.
    pub const fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

impl From<DiagnosticKind> for Diagnostic {
    fn from(kind: DiagnosticKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.severity() == Severity::Warning {
            f.write_str("Warning: ")?;
        }
        write!(f, "{}", self.kind)
    }
}

/// Verdict of one check plus everything it noticed, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    ok: bool,
    diagnostics: Vec<Diagnostic>,
}

impl Default for CheckReport {
    fn default() -> Self {
        Self::passing()
    }
}

impl CheckReport {
    /// A passing report with no diagnostics.
    pub const fn passing() -> Self {
        Self {
            ok: true,
            diagnostics: Vec::new(),
        }
    }

    /// Whether the check passed.
    pub const fn is_ok(&self) -> bool {
        self.ok
    }

    /// Diagnostics in the order they were produced.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Diagnostics rendered as lines.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }

    /// Record a diagnostic. Errors fail the report; warnings do not.
    pub fn push(&mut self, diagnostic: impl Into<Diagnostic>) {
        let diagnostic = diagnostic.into();
        if diagnostic.severity() == Severity::Error {
            self.ok = false;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Mark the report failed without a diagnostic of its own.
    pub fn fail(&mut self) {
        self.ok = false;
    }

    /// Append diagnostics produced elsewhere, keeping the current verdict.
    pub fn extend_diagnostics(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }
}
