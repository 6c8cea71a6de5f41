//! # mf2validate
//!
//! Validates a MessageFormat 2 translation against its source message.
//!
//! Both messages are read from MF2 JSON data-model files. Each is checked for
//! plural exhaustiveness in its own locale, then every target variant is
//! checked for the placeholders the source uses. The report goes to stdout
//! and the outcome is summarised in the exit status (see [`error::exit`]).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod error;
pub mod report;
pub mod runner;

pub use cli::*;
pub use error::*;
pub use report::*;
pub use runner::*;
