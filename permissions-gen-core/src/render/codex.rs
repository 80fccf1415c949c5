//! Codex `default.rules` file

use super::json_string;
use crate::types::CommandRule;

/// Comment header at the top of the generated rules file.
pub const CODEX_HEADER: &str =
    "# ~/.codex/rules/default.rules\n# Generated by tools/permissions-gen. Do not edit by hand.\n\n";

/// Render the whole rules file: header, then blank-line separated `prefix_rule` blocks.
pub fn render_codex_rules(rules: &[CommandRule]) -> String {
    let blocks: Vec<String> = rules.iter().map(render_rule).collect();
    format!("{}{}", CODEX_HEADER, blocks.join("\n"))
}

/// Render one `prefix_rule(...)` block, ending with a newline.
pub fn render_rule(rule: &CommandRule) -> String {
    let mut out = String::from("prefix_rule(\n");
    out.push_str(&render_pattern(rule));
    out.push_str(&render_decision(&rule.decision));
    out.push_str(&render_match(&rule.match_text));
    out.push_str(")\n");
    out
}

fn render_pattern(rule: &CommandRule) -> String {
    if !rule.is_alternating() {
        return format!("  pattern = [{}],\n", join_quoted(&rule.prefix));
    }

    let alternatives: String = rule
        .alternatives
        .iter()
        .map(|alternative| format!("    {},\n", json_string(alternative)))
        .collect();
    format!("  pattern = [{}, [\n{}  ]],\n", join_quoted(&rule.prefix), alternatives)
}

fn render_decision(decision: &str) -> String {
    let decision = if decision.is_empty() { "allow" } else { decision };
    format!("  decision = {},\n", json_string(decision))
}

fn render_match(match_text: &str) -> String {
    if match_text.trim().is_empty() {
        return String::new();
    }
    format!("  match = [{}],\n", json_string(match_text))
}

fn join_quoted(tokens: &[String]) -> String {
    tokens
        .iter()
        .map(|token| json_string(token))
        .collect::<Vec<_>>()
        .join(", ")
}
