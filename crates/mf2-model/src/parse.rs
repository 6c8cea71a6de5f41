//! Obtaining data models from message files

use crate::error::{ModelError, ModelResult};
use crate::message::DataModel;
use mf2_common::ensure_trailing_newline;
use mf2_i18n::Locale;
use std::path::Path;
use tracing::debug;

/// Turns message text into a data model.
pub trait MessageParser {
    /// Parse `text`, a message written for `locale`.
    fn parse(&self, text: &str, locale: &Locale) -> ModelResult<DataModel>;
}

/// Reads the MessageFormat 2 JSON data-model interchange format.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonMessageParser;

impl MessageParser for JsonMessageParser {
    fn parse(&self, text: &str, locale: &Locale) -> ModelResult<DataModel> {
        let model: DataModel = serde_json::from_str(text).map_err(|source| ModelError::Parse {
            locale: locale.tag(),
            source,
        })?;
        debug!(
            locale = %locale,
            selectors = model.selectors().len(),
            variants = model.variants().len(),
            "parsed message data model"
        );
        Ok(model)
    }
}

/// Read a message file, normalising line endings.
pub fn read_message_file(path: &Path) -> ModelResult<String> {
    let contents = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ensure_trailing_newline(&contents))
}
