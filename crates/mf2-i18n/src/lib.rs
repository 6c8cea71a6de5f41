//! # mf2-i18n
//!
//! Locale handling and plural category lookup for mf2validate.
//!
//! This crate provides:
//!
//! - [`Locale`], a validated BCP-47 language tag backed by `unic-langid`
//! - [`PluralCategory`] and [`PluralCategories`], the CLDR plural keywords
//! - [`PluralRulesProvider`], the seam through which the checker asks which
//!   categories a locale distinguishes, with a built-in CLDR table
//!   ([`CldrPluralRules`]) and a configurable overlay ([`ConfiguredPluralRules`])
//!
//! # Example
//!
//! ```rust
//! use mf2_i18n::{CldrPluralRules, Locale, PluralRulesProvider};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let locale: Locale = "pl".parse()?;
//! let categories = CldrPluralRules.categories_for(&locale)?;
//! assert_eq!(categories.labels(), vec!["one", "few", "many", "other"]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod cldr;
pub mod error;
pub mod locale;
pub mod pluralization;

pub use error::{I18nError, I18nResult};
pub use locale::Locale;
pub use pluralization::{
    CldrPluralRules, ConfiguredPluralRules, PluralCategories, PluralCategory, PluralRulesProvider,
};
