//! # mf2-check
//!
//! Checks a MessageFormat 2 `.match` message for plural exhaustiveness and a
//! source/target message pair for placeholder consistency.
//!
//! Both checks work on already-parsed [`mf2_model::DataModel`]s and never
//! mutate them. They return a [`CheckReport`] holding the verdict and every
//! diagnostic produced along the way; what gets printed is up to the caller.
//! Conditions under which exhaustiveness cannot be decided at all come back
//! as a [`CheckError`] instead of a verdict.
//!
//! ```
//! use mf2_check::{check_exhaustiveness, MessageRole};
//! use mf2_i18n::{CldrPluralRules, Locale};
//! use mf2_model::{DataModel, Declaration, Key, Pattern, Variant, VariableName};
//!
//! let variant = |key: Key| Variant::new([key].into_iter().collect(), Pattern::default());
//! let message = DataModel::select(
//!     vec![Declaration::input("n", "number")],
//!     vec![VariableName::new("n")],
//!     vec![variant(Key::literal("one")), variant(Key::Wildcard)],
//! );
//!
//! let en: Locale = "en".parse().unwrap();
//! let report = check_exhaustiveness(MessageRole::Source, &en, &message, &CldrPluralRules).unwrap();
//! assert!(report.is_ok());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod diagnostics;
pub mod error;
pub mod exhaustiveness;
pub mod keys;
pub mod matcher;
pub mod permutations;
pub mod placeholders;

pub use diagnostics::{CheckReport, Diagnostic, DiagnosticKind, MessageRole, Severity};
pub use error::CheckError;
pub use exhaustiveness::check_exhaustiveness;
pub use matcher::covered_by;
pub use permutations::generate_permutations;
pub use placeholders::{check_placeholder_consistency, collect_placeholders};
