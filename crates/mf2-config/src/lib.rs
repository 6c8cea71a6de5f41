//! # mf2-config
//!
//! Configuration for mf2validate.
//!
//! Settings come from an optional TOML file, then environment overrides, then
//! command-line flags (applied by the binary). The file may also supply plural
//! category sets for locales the built-in CLDR table does not know.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod error;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use error::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
