//! Data-model errors a strict MessageFormat 2 formatter reports.
//!
//! Only the errors that concern selectors and variants are detected; other
//! data-model errors (duplicate declarations, duplicate options) do not
//! affect the checks and are left to the formatter.

use crate::error::{DataModelError, ModelError, ModelResult};
use crate::key::KeySetShape;
use crate::message::{DataModel, MessageKind, SelectorAnnotation};
use tracing::debug;

/// Check `model` for variant-related data-model errors, reporting all of
/// them in message order.
pub fn check_data_model(model: &DataModel) -> ModelResult<()> {
    if model.kind() == MessageKind::Pattern {
        return Ok(());
    }

    let expected = model.selectors().len();
    let mut errors = Vec::new();

    for variant in model.variants() {
        if variant.keys.len() != expected {
            errors.push(DataModelError::VariantKeyMismatch {
                keys: variant.keys.to_string(),
                found: variant.keys.len(),
                expected,
            });
        }
    }

    let has_fallback = model
        .variants()
        .iter()
        .any(|v| v.keys.len() == expected && v.keys.shape() == KeySetShape::CatchAll);
    if !has_fallback {
        errors.push(DataModelError::MissingFallbackVariant);
    }

    for selector in model.selectors() {
        if model.selector_annotation(selector) == SelectorAnnotation::Unannotated {
            errors.push(DataModelError::MissingSelectorAnnotation {
                selector: selector.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        debug!(count = errors.len(), "data model errors found");
        Err(ModelError::DataModel { errors })
    }
}
