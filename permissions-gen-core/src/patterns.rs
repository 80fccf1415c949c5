//! Wildcard pattern expansion for OpenCode bash rules

use crate::ordered::OrderedSet;

/// Whether `value` contains a `*` or `?` wildcard.
pub fn contains_wildcard(value: &str) -> bool {
    value.contains(['*', '?'])
}

/// Normalize and dedupe patterns, following every wildcard-free pattern with
/// its `"<pattern> *"` variant so that arguments are matched too.
pub fn expand_patterns<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    let mut out = OrderedSet::new();
    for value in values {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        out.insert(trimmed);
        if !contains_wildcard(trimmed) {
            out.insert(format!("{} *", trimmed));
        }
    }
    out.into_vec()
}
