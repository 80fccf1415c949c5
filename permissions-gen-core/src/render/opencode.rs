//! OpenCode `permission` object
//!
//! Rendered by hand rather than through a JSON map so that a pattern listed
//! under two decisions keeps both entries, in order.

use super::{indent_multiline_value, json_string};
use crate::types::{SectionBody, SectionRule, SectionSpec};

/// Render one rule-list section as a `{ pattern: decision, ... }` object.
pub fn render_section(rules: &[SectionRule]) -> String {
    let entries: Vec<String> = rules
        .iter()
        .map(|rule| format!("  {}: {}", json_string(&rule.pattern), json_string(&rule.decision)))
        .collect();
    wrap_object(&entries)
}

/// Render the full section map, one entry per section in order.
pub fn render_section_map(sections: &[SectionSpec]) -> String {
    let entries: Vec<String> = sections
        .iter()
        .map(|section| {
            let value = match &section.body {
                SectionBody::Scalar(decision) => json_string(decision),
                SectionBody::RuleList(rules) => {
                    indent_multiline_value(&render_section(rules), "  ")
                }
            };
            format!("  {}: {}", json_string(&section.name), value)
        })
        .collect();
    wrap_object(&entries)
}

fn wrap_object(entries: &[String]) -> String {
    if entries.is_empty() {
        return "{\n}".to_string();
    }
    format!("{{\n{}\n}}", entries.join(",\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_section_map_with_scalar() {
        let sections = vec![
            SectionSpec::rule_list("bash", vec![SectionRule::new("*", "ask")]),
            SectionSpec::scalar("webfetch", "allow"),
        ];
        assert_eq!(
            render_section_map(&sections),
            [
                "{",
                "  \"bash\": {",
                "    \"*\": \"ask\"",
                "  },",
                "  \"webfetch\": \"allow\"",
                "}",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_render_section_keeps_duplicate_patterns() {
        let rules = vec![
            SectionRule::new("*", "allow"),
            SectionRule::new("git push", "allow"),
            SectionRule::new("git push", "ask"),
        ];
        assert_eq!(
            render_section(&rules),
            "{\n  \"*\": \"allow\",\n  \"git push\": \"allow\",\n  \"git push\": \"ask\"\n}"
        );
    }
}
