//! # mf2-model
//!
//! The MessageFormat 2 data model as seen by mf2validate.
//!
//! Messages arrive in the MF2 JSON data-model interchange form: the structure
//! a MessageFormat 2 parser produces, with `declarations`, `selectors` and
//! `variants`. This crate deserializes that form into closed Rust enums
//! ([`Key`], [`PatternPart`], [`Operand`], [`Declaration`]), answers whether a
//! selector is plural-typed, and reports the data-model errors a strict MF2
//! implementation would reject before any checking happens.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod key;
pub mod message;
pub mod parse;
pub mod pattern;
pub mod validate;

pub use error::{DataModelError, ModelError, ModelResult};
pub use key::{Key, KeySetShape, VariantKeySet};
pub use message::{DataModel, Declaration, MessageKind, SelectorAnnotation, Variant};
pub use parse::{read_message_file, JsonMessageParser, MessageParser};
pub use pattern::{Expression, FunctionRef, Markup, MarkupKind, Operand, Pattern, PatternPart};
pub use validate::check_data_model;

pub use mf2_common::VariableName;
