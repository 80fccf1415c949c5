//! Renderers turning normalized data into artifact text
//!
//! Renderers are pure: they never look at the host file. The splicer decides
//! where their output lands.

mod claude;
mod codex;
mod opencode;

pub use claude::render_permission_set;
pub use codex::{render_codex_rules, render_rule, CODEX_HEADER};
pub use opencode::{render_section, render_section_map};

use crate::error::{PermissionsGenError, PermissionsGenResult};

/// A rendered JSON object together with its marker-splice form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    /// The full object, `{` to `}`, two-space indented.
    pub json: String,
    /// The object's lines without the braces, dedented one level.
    pub inner_lines: Vec<String>,
}

impl RenderedBlock {
    /// Wrap a pretty-printed object, deriving its marker-splice lines.
    pub fn from_json(json: String) -> PermissionsGenResult<Self> {
        let inner_lines = inner_json_lines(&json)?;
        Ok(Self { json, inner_lines })
    }
}

/// Strip the outer braces of a pretty-printed object and dedent the rest by one level.
pub fn inner_json_lines(data: &str) -> PermissionsGenResult<Vec<String>> {
    let lines: Vec<&str> = data.split('\n').collect();
    if lines.len() < 2 {
        return Err(PermissionsGenError::render(
            "unexpected json: too few lines",
        ));
    }

    Ok(lines[1..lines.len() - 1]
        .iter()
        .map(|line| line.strip_prefix("  ").unwrap_or(line).to_string())
        .collect())
}

/// Prefix every line after the first with `indent`.
///
/// The first line continues wherever the caller places it, so it is left alone.
pub fn indent_multiline_value(value: &str, indent: &str) -> String {
    value
        .split('\n')
        .enumerate()
        .map(|(index, line)| {
            if index == 0 {
                line.to_string()
            } else {
                format!("{}{}", indent, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Quote a value as a JSON string literal.
pub(crate) fn json_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("{:?}", value))
}
