//! Error types for loading and validating message data models

use mf2_common::VariableName;
use std::path::PathBuf;
use thiserror::Error;

/// A structural problem a strict MessageFormat 2 implementation rejects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataModelError {
    /// A variant's key count differs from the selector count.
    #[error(
        "One or more variants has a different number of keys from the number of selectors \
         (variant «{keys}» has {found}, expected {expected})."
    )]
    VariantKeyMismatch {
        /// Rendered key set of the offending variant
        keys: String,
        /// Keys on the variant
        found: usize,
        /// Selectors on the message
        expected: usize,
    },

    /// A `.match` without a variant whose keys are all `*`.
    #[error("Missing '*' variant.")]
    MissingFallbackVariant,

    /// A selector whose declaration carries no function annotation.
    #[error("A selector variable refers to an expression with no annotation ({selector}).")]
    MissingSelectorAnnotation {
        /// The unannotated selector
        selector: VariableName,
    },
}

/// Errors produced while obtaining a data model
#[derive(Error, Debug)]
pub enum ModelError {
    /// The message file could not be read
    #[error("Error reading from file {}", .path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: std::io::Error,
    },

    /// The message text is not a valid data model
    #[error("Couldn't parse message for locale {locale}: {source}")]
    Parse {
        /// Locale the message was parsed for
        locale: String,
        /// Underlying cause
        #[source]
        source: serde_json::Error,
    },

    /// The message parsed but is structurally invalid
    #[error("Data model error: {}", describe(.errors))]
    DataModel {
        /// Every problem found, in message order
        errors: Vec<DataModelError>,
    },
}

fn describe(errors: &[DataModelError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Result type for data model operations
pub type ModelResult<T> = Result<T, ModelError>;
