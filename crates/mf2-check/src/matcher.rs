//! Matching permutations against variants

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::error::CheckError;
use crate::keys::{keys_equal, labels_all_other};
use mf2_common::join_labels;
use mf2_model::{KeySetShape, Variant};
use tracing::trace;

/// Whether some variant covers `permutation`.
///
/// The all-`other` permutation counts as covered without looking at the
/// variants, since the `*` variant stands in for it. Catch-all variants never
/// cover a specific permutation. Variants whose key count is wrong are noted
/// in `diagnostics` and treated as non-matching. A partial-wildcard variant
/// aborts matching.
///
/// An uncovered permutation adds an omitted-variant diagnostic.
pub fn covered_by(
    permutation: &[String],
    variants: &[Variant],
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<bool, CheckError> {
    if labels_all_other(permutation) {
        return Ok(true);
    }

    for variant in variants {
        if variant.keys.len() != permutation.len() {
            diagnostics.push(
                DiagnosticKind::KeyCountMismatch {
                    keys: variant.keys.to_string(),
                    found: variant.keys.len(),
                    expected: permutation.len(),
                }
                .into(),
            );
            continue;
        }
        match variant.keys.shape() {
            KeySetShape::CatchAll => continue,
            KeySetShape::Partial => {
                return Err(CheckError::PartialWildcard {
                    keys: variant.keys.to_string(),
                })
            }
            KeySetShape::Concrete => {
                if keys_equal(&variant.keys, permutation) {
                    trace!(keys = %variant.keys, "permutation covered");
                    return Ok(true);
                }
            }
        }
    }

    diagnostics.push(
        DiagnosticKind::OmittedVariant {
            permutation: join_labels(permutation),
        }
        .into(),
    );
    Ok(false)
}
