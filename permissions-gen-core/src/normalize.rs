//! List normalization and sentinel expansion for the Claude permission set

use crate::config::PolicyDocument;
use crate::ordered::OrderedSet;
use crate::types::{PermissionSet, BASH_SENTINEL};

/// Tool name used for derived shell patterns in the Claude permission set.
pub const BASH_TOOL: &str = "Bash";

/// Trim every entry and drop the blank ones, optionally removing duplicates.
pub fn normalize_list<S: AsRef<str>>(values: &[S], unique: bool) -> Vec<String> {
    let trimmed = values
        .iter()
        .map(|value| value.as_ref().trim())
        .filter(|value| !value.is_empty());

    if unique {
        trimmed.collect::<OrderedSet>().into_vec()
    } else {
        trimmed.map(str::to_string).collect()
    }
}

/// Wrap each normalized command as `Tool(command:*)`.
pub fn to_tool_patterns<S: AsRef<str>>(tool: &str, commands: &[S]) -> Vec<String> {
    normalize_list(commands, false)
        .into_iter()
        .map(|command| format!("{}({}:*)", tool, command))
        .collect()
}

/// Merge derived patterns into a list.
///
/// Every sentinel occurrence is replaced in place by the whole `derived`
/// sequence; without a sentinel the derived patterns are appended. Either way
/// the result is deduplicated. With no derived patterns the list is only
/// normalized, sentinel included.
pub fn expand_with_sentinel<S: AsRef<str>>(values: &[S], derived: &[String]) -> Vec<String> {
    let normalized = normalize_list(values, false);

    if derived.is_empty() {
        return normalized;
    }

    let mut out = OrderedSet::new();
    if !normalized.iter().any(|value| value == BASH_SENTINEL) {
        out.extend(normalized);
        out.extend(derived.iter().cloned());
        return out.into_vec();
    }

    for value in normalized {
        if value == BASH_SENTINEL {
            out.extend(derived.iter().cloned());
        } else {
            out.insert(value);
        }
    }
    out.into_vec()
}

/// Expand a Claude list with the `Bash(...)` patterns of the shared bash list.
pub fn expand_with_bash<S: AsRef<str>, B: AsRef<str>>(
    values: &[S],
    bash_values: &[B],
) -> Vec<String> {
    expand_with_sentinel(values, &to_tool_patterns(BASH_TOOL, bash_values))
}

/// Build the Claude permission set from the document.
pub fn build_permission_set(doc: &PolicyDocument) -> PermissionSet {
    PermissionSet {
        allow: expand_with_bash(&doc.claude.allow, &doc.bash.allow),
        ask: expand_with_bash(&doc.claude.ask, &doc.bash.ask),
        deny: expand_with_bash(&doc.claude.deny, &doc.bash.deny),
        additional_directories: normalize_list(&doc.claude.additional_directories, false),
    }
}
