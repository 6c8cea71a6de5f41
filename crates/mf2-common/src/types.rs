//! Common type definitions and newtype wrappers for domain modeling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The name of a message variable, stored without its leading `$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableName(String);

impl VariableName {
    /// Creates a variable name, stripping a leading `$` if present.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        match name.strip_prefix('$') {
            Some(stripped) => Self(stripped.to_string()),
            None => Self(name),
        }
    }

    /// The bare name, without `$`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VariableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

impl From<&str> for VariableName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// How much user-facing output a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// No output at all; only the exit status reports the outcome.
    Quiet,
    /// Diagnostics and the results summary.
    #[default]
    Normal,
    /// Additionally echo the options and both message files.
    Verbose,
}

impl Verbosity {
    /// Whether anything should be printed.
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Whether the options echo should be printed.
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose)
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            other => Err(format!(
                "unknown verbosity '{other}', expected quiet, normal or verbose"
            )),
        }
    }
}
