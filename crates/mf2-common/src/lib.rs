//! # mf2-common
//!
//! Shared types, utilities, and common functionality for mf2validate.
//!
//! This crate provides the foundational types and utilities used across
//! all other crates in the workspace: the common error type, the
//! [`VariableName`] and [`Verbosity`] newtypes, logging initialisation and
//! (behind the `testing` feature) shared test fixtures.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::*;
pub use types::*;
pub use utils::*;
