//! Test utilities and shared test helpers for mf2validate.
//!
//! This module provides common testing utilities, fixtures, and helper functions
//! that can be used across all crates in the workspace for unit and integration testing.

use std::sync::Once;

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));

        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(filter)
            .try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write `contents` to `name` inside `dir` and return the full path.
#[cfg(feature = "tempfile")]
pub fn write_temp_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write temporary file");
    path
}

/// MessageFormat 2 data-model JSON fixtures.
///
/// Keys equal to `"*"` become wildcard keys. Pattern parts starting with `$`
/// become variable placeholders, everything else is literal text.
pub mod message_fixtures {
    use serde_json::{json, Value};

    fn key(key: &str) -> Value {
        if key == "*" {
            json!({ "type": "*" })
        } else {
            json!({ "type": "literal", "value": key })
        }
    }

    fn pattern(parts: &[&str]) -> Value {
        Value::Array(
            parts
                .iter()
                .map(|part| match part.strip_prefix('$') {
                    Some(name) => json!({
                        "type": "expression",
                        "arg": { "type": "variable", "name": name }
                    }),
                    None => Value::String((*part).to_string()),
                })
                .collect(),
        )
    }

    fn annotated_input(name: &str, function: &str) -> Value {
        json!({
            "type": "input",
            "name": name,
            "value": {
                "type": "expression",
                "arg": { "type": "variable", "name": name },
                "function": { "type": "function", "name": function }
            }
        })
    }

    /// A `.match` message whose selectors are all declared `.input {$x :number}`.
    pub fn number_select(selectors: &[&str], variants: &[(&[&str], &[&str])]) -> String {
        annotated_select("number", selectors, variants)
    }

    /// A `.match` message whose selectors are all annotated with `function`.
    pub fn annotated_select(
        function: &str,
        selectors: &[&str],
        variants: &[(&[&str], &[&str])],
    ) -> String {
        let declarations: Vec<Value> = selectors
            .iter()
            .map(|name| annotated_input(name, function))
            .collect();
        select_with_declarations(declarations, selectors, variants)
    }

    /// A `.match` message with explicit declarations.
    pub fn select_with_declarations(
        declarations: Vec<Value>,
        selectors: &[&str],
        variants: &[(&[&str], &[&str])],
    ) -> String {
        let selectors: Vec<Value> = selectors
            .iter()
            .map(|name| json!({ "type": "variable", "name": name }))
            .collect();
        let variants: Vec<Value> = variants
            .iter()
            .map(|(keys, parts)| {
                json!({
                    "keys": keys.iter().map(|k| key(k)).collect::<Vec<_>>(),
                    "value": pattern(parts)
                })
            })
            .collect();
        json!({
            "type": "select",
            "declarations": declarations,
            "selectors": selectors,
            "variants": variants
        })
        .to_string()
    }

    /// A plain pattern message with no `.match` construct.
    pub fn simple_message(parts: &[&str]) -> String {
        json!({
            "type": "message",
            "declarations": [],
            "pattern": pattern(parts)
        })
        .to_string()
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use proptest::prelude::*;

    /// The CLDR plural category keywords in canonical order.
    pub const CLDR_KEYWORDS: [&str; 6] = ["zero", "one", "two", "few", "many", "other"];

    /// Strategy for a locale-like category label set: a subset of the CLDR
    /// keywords that always contains `other`.
    pub fn category_labels_strategy() -> impl Strategy<Value = Vec<String>> {
        proptest::sample::subsequence(CLDR_KEYWORDS[..5].to_vec(), 0..=5).prop_map(|picked| {
            picked
                .into_iter()
                .map(str::to_string)
                .chain(std::iter::once("other".to_string()))
                .collect()
        })
    }

    /// Strategy for a realistic selector count.
    pub fn selector_count_strategy() -> impl Strategy<Value = usize> {
        1usize..=3
    }
}
