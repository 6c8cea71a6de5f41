//! Placeholder consistency between a source message and its translation

use crate::diagnostics::{CheckReport, Diagnostic, DiagnosticKind};
use mf2_model::{DataModel, VariableName};
use tracing::debug;

/// Placeholders of the source message's first variant, in first-seen order.
///
/// Placeholders that only appear in later variants are not added; each one
/// is reported once as a warning instead.
pub fn collect_placeholders(model: &DataModel) -> (Vec<VariableName>, Vec<Diagnostic>) {
    let mut placeholders: Vec<VariableName> = Vec::new();
    let mut warned: Vec<&VariableName> = Vec::new();
    let mut diagnostics = Vec::new();

    let mut variants = model.variants().iter();
    if let Some(first) = variants.next() {
        for name in first.pattern.placeholders() {
            if !placeholders.contains(name) {
                placeholders.push(name.clone());
            }
        }
    }
    for variant in variants {
        for name in variant.pattern.placeholders() {
            if !placeholders.contains(name) && !warned.contains(&name) {
                warned.push(name);
                diagnostics.push(
                    DiagnosticKind::SourcePlaceholderDrift {
                        placeholder: name.clone(),
                    }
                    .into(),
                );
            }
        }
    }

    (placeholders, diagnostics)
}

/// Check that every variant of `target` references every placeholder the
/// source message uses.
///
/// Stops at the first omission. Source drift warnings are included in the
/// report but never fail it.
pub fn check_placeholder_consistency(source: &DataModel, target: &DataModel) -> CheckReport {
    let (placeholders, drift) = collect_placeholders(source);
    debug!(count = placeholders.len(), "collected source placeholders");

    let mut report = CheckReport::passing();
    report.extend_diagnostics(drift);

    for variant in target.variants() {
        if let Some(missing) = placeholders
            .iter()
            .find(|name| !variant.pattern.references(name))
        {
            report.push(DiagnosticKind::MissingPlaceholder {
                keys: variant.keys.to_string(),
                placeholder: missing.clone(),
            });
            return report;
        }
    }
    report
}
