//! Plural exhaustiveness of a `.match` message

use crate::diagnostics::{CheckReport, Diagnostic, DiagnosticKind, MessageRole};
use crate::error::CheckError;
use crate::keys::missing_other_variant;
use crate::matcher::covered_by;
use crate::permutations::generate_permutations;
use mf2_i18n::{Locale, PluralRulesProvider};
use mf2_model::{DataModel, KeySetShape, VariableName};
use tracing::{debug, debug_span};

/// Check that `model`'s variants cover every combination of `locale`'s plural
/// categories across its selectors, once each, plus a `*` fallback.
///
/// All omissions and invalid keys are reported, not only the first. The
/// all-`other` variant may be left out in favour of the `*` variant.
///
/// # Errors
///
/// Returns a [`CheckError`] when the question cannot be answered: plural
/// rules for `locale` are unavailable, a selector is not plural-typed, or a
/// variant mixes `*` with literal keys.
pub fn check_exhaustiveness<P>(
    role: MessageRole,
    locale: &Locale,
    model: &DataModel,
    rules: &P,
) -> Result<CheckReport, CheckError>
where
    P: PluralRulesProvider + ?Sized,
{
    let span = debug_span!("exhaustiveness", %role, %locale);
    let _entered = span.enter();

    let mut report = CheckReport::passing();
    let selectors = model.selectors();
    if selectors.is_empty() {
        report.push(DiagnosticKind::NotAMatch { role });
        return Ok(report);
    }

    let categories = rules.categories_for(locale)?;
    let labels = categories.labels();
    debug!(categories = %categories, "fetched plural categories");

    let non_plural: Vec<VariableName> = selectors
        .iter()
        .filter(|selector| !model.is_plural_selector(selector))
        .cloned()
        .collect();
    if !non_plural.is_empty() {
        return Err(CheckError::NonPluralSelectors {
            selectors: non_plural,
        });
    }

    if let Some(partial) = model
        .variants()
        .iter()
        .find(|variant| variant.keys.shape() == KeySetShape::Partial)
    {
        return Err(CheckError::PartialWildcard {
            keys: partial.keys.to_string(),
        });
    }

    let permutations = generate_permutations(selectors.len(), &labels);
    debug!(
        selectors = selectors.len(),
        permutations = permutations.len(),
        "generated permutations"
    );

    let variants = model.variants();
    let mut expected = permutations.len() + 1;
    if missing_other_variant(variants) {
        expected -= 1;
    }
    if variants.len() != expected {
        report.push(DiagnosticKind::VariantCount {
            actual: variants.len(),
            expected,
        });
    }

    let mut matcher_diagnostics: Vec<Diagnostic> = Vec::new();
    let mut all_covered = true;
    for permutation in &permutations {
        all_covered &= covered_by(permutation, variants, &mut matcher_diagnostics)?;
    }
    report.extend_diagnostics(matcher_diagnostics);
    if !all_covered {
        report.fail();
    }

    for key in variants
        .iter()
        .flat_map(|variant| variant.keys.keys())
        .filter_map(|key| key.as_literal())
    {
        if !categories.contains_label(key) {
            report.push(DiagnosticKind::InvalidKey {
                key: key.to_string(),
                locale: locale.tag(),
            });
        }
    }

    debug!(ok = report.is_ok(), "exhaustiveness checked");
    Ok(report)
}
