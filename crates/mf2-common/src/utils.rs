//! Shared utility functions.

/// Joins labels with single spaces, the way permutations and key sets are
/// rendered in diagnostics.
pub fn join_labels<I, S>(labels: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for (i, label) in labels.into_iter().enumerate() {
        if i > 0 {
            joined.push(' ');
        }
        joined.push_str(label.as_ref());
    }
    joined
}

/// Returns `input` with every line terminated by `\n`.
pub fn ensure_trailing_newline(input: &str) -> String {
    let mut normalized: String = input.lines().flat_map(|line| [line, "\n"]).collect();
    if input.is_empty() {
        normalized.clear();
    }
    normalized
}
