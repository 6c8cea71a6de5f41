//! Permutations of plural category labels.
//!
//! Generates every ordered tuple of a given length drawn from a label set,
//! with repetition. Construction is recursive: each label is inserted at
//! every position of every shorter tuple, and the result is deduplicated.
//! Selector counts and category counts are both tiny, so this favours
//! readability over speed.

use std::collections::HashSet;

/// Copy of `tuple` with `label` inserted at `index`.
fn insert_at(tuple: &[String], label: &str, index: usize) -> Vec<String> {
    let mut result = Vec::with_capacity(tuple.len() + 1);
    result.extend_from_slice(&tuple[..index]);
    result.push(label.to_string());
    result.extend_from_slice(&tuple[index..]);
    result
}

/// Insert `label` at every position of every tuple in `tuples`.
fn insert_everywhere(label: &str, tuples: &[Vec<String>]) -> Vec<Vec<String>> {
    if tuples.is_empty() {
        return vec![vec![label.to_string()]];
    }
    tuples
        .iter()
        .flat_map(|tuple| (0..=tuple.len()).map(move |index| insert_at(tuple, label, index)))
        .collect()
}

/// Keep the first occurrence of each tuple.
fn dedup(tuples: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let mut seen = HashSet::with_capacity(tuples.len());
    tuples
        .into_iter()
        .filter(|tuple| seen.insert(tuple.clone()))
        .collect()
}

/// Every `len`-tuple over `labels`, with repetition, without duplicates.
///
/// Returns nothing for `len == 0`. Callers should treat the result as a set;
/// only its contents are meaningful.
pub fn generate_permutations(len: usize, labels: &[String]) -> Vec<Vec<String>> {
    if len == 0 {
        return Vec::new();
    }
    let shorter = generate_permutations(len - 1, labels);
    let all = labels
        .iter()
        .flat_map(|label| insert_everywhere(label, &shorter))
        .collect();
    dedup(all)
}

/// `|labels|^len`: how many tuples [`generate_permutations`] yields for
/// distinct labels.
pub fn permutation_count(label_count: usize, len: usize) -> usize {
    u32::try_from(len).map_or(usize::MAX, |exp| label_count.saturating_pow(exp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mf2_common::test_utils::property_testing::{
        category_labels_strategy, selector_count_strategy,
    };
    use proptest::prelude::*;

    fn labels(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    fn as_set(tuples: Vec<Vec<String>>) -> HashSet<Vec<String>> {
        tuples.into_iter().collect()
    }

    #[test]
    fn test_zero_length_is_empty() {
        assert!(generate_permutations(0, &labels(&["one", "other"])).is_empty());
    }

    #[test]
    fn test_single_selector() {
        let perms = as_set(generate_permutations(1, &labels(&["one", "other"])));
        assert_eq!(perms, as_set(vec![labels(&["one"]), labels(&["other"])]));
    }

    #[test]
    fn test_two_selectors() {
        let perms = as_set(generate_permutations(2, &labels(&["one", "other"])));
        let expected = as_set(vec![
            labels(&["one", "one"]),
            labels(&["one", "other"]),
            labels(&["other", "one"]),
            labels(&["other", "other"]),
        ]);
        assert_eq!(perms, expected);
    }

    #[test]
    fn test_duplicate_labels_collapse() {
        let perms = generate_permutations(2, &labels(&["one", "one"]));
        assert_eq!(perms, vec![labels(&["one", "one"])]);
    }

    #[test]
    fn test_insert_at() {
        let tuple = labels(&["a", "b"]);
        assert_eq!(insert_at(&tuple, "x", 0), labels(&["x", "a", "b"]));
        assert_eq!(insert_at(&tuple, "x", 1), labels(&["a", "x", "b"]));
        assert_eq!(insert_at(&tuple, "x", 2), labels(&["a", "b", "x"]));
    }

    #[test]
    fn test_permutation_count() {
        assert_eq!(permutation_count(4, 2), 16);
        assert_eq!(permutation_count(6, 0), 1);
    }

    proptest! {
        #[test]
        fn prop_size_is_power(labels in category_labels_strategy(), len in selector_count_strategy()) {
            let perms = generate_permutations(len, &labels);
            prop_assert_eq!(perms.len(), permutation_count(labels.len(), len));
        }

        #[test]
        fn prop_tuples_are_well_formed(labels in category_labels_strategy(), len in selector_count_strategy()) {
            let perms = generate_permutations(len, &labels);
            let unique = as_set(perms.clone());
            prop_assert_eq!(unique.len(), perms.len());
            for tuple in &perms {
                prop_assert_eq!(tuple.len(), len);
                prop_assert!(tuple.iter().all(|label| labels.contains(label)));
            }
        }
    }
}
