//! Key and category helpers shared by the matcher and the checker

use mf2_model::{Key, Variant, VariantKeySet};

/// The category every locale has.
pub const OTHER_CATEGORY: &str = "other";

/// Whether every label in a permutation is `other`.
pub fn labels_all_other(labels: &[String]) -> bool {
    labels.iter().all(|label| label == OTHER_CATEGORY)
}

/// Whether every key is the literal `other`. Any `*` makes this false.
pub fn keys_all_other(keys: &VariantKeySet) -> bool {
    keys.keys()
        .iter()
        .all(|key| key.as_literal() == Some(OTHER_CATEGORY))
}

/// Whether no variant spells out the all-`other` combination.
pub fn missing_other_variant(variants: &[Variant]) -> bool {
    !variants.iter().any(|variant| keys_all_other(&variant.keys))
}

/// Positional comparison of literal keys against a permutation. The lengths
/// must already agree.
pub fn keys_equal(keys: &VariantKeySet, permutation: &[String]) -> bool {
    keys.keys()
        .iter()
        .zip(permutation)
        .all(|(key, label)| match key {
            Key::Literal(value) => value == label,
            Key::Wildcard => false,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mf2_model::Pattern;

    fn keys(raw: &[&str]) -> VariantKeySet {
        raw.iter()
            .map(|k| if *k == "*" { Key::Wildcard } else { Key::literal(*k) })
            .collect()
    }

    fn labels(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_all_other() {
        assert!(labels_all_other(&labels(&["other", "other"])));
        assert!(!labels_all_other(&labels(&["other", "one"])));
        assert!(keys_all_other(&keys(&["other", "other"])));
        assert!(!keys_all_other(&keys(&["other", "*"])));
    }

    #[test]
    fn test_missing_other_variant() {
        let with_other = [
            Variant::new(keys(&["one"]), Pattern::default()),
            Variant::new(keys(&["other"]), Pattern::default()),
        ];
        let without = [
            Variant::new(keys(&["one"]), Pattern::default()),
            Variant::new(keys(&["*"]), Pattern::default()),
        ];
        assert!(!missing_other_variant(&with_other));
        assert!(missing_other_variant(&without));
    }

    #[test]
    fn test_keys_equal() {
        assert!(keys_equal(&keys(&["one", "few"]), &labels(&["one", "few"])));
        assert!(!keys_equal(&keys(&["few", "one"]), &labels(&["one", "few"])));
        assert!(!keys_equal(&keys(&["*"]), &labels(&["one"])));
    }
}
