//! Normalized data handed from the builders to the renderers

use serde::Serialize;

/// Placeholder in a Claude list marking where the derived `Bash(...)` patterns go.
pub const BASH_SENTINEL: &str = "__BASH__";

/// One of the three decision tiers every list is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecisionTier {
    Allow,
    Ask,
    Deny,
}

impl DecisionTier {
    /// Every tier, in output order.
    pub const ALL: [DecisionTier; 3] = [DecisionTier::Allow, DecisionTier::Ask, DecisionTier::Deny];

    /// Decision name as written in OpenCode sections.
    pub fn as_str(self) -> &'static str {
        match self {
            DecisionTier::Allow => "allow",
            DecisionTier::Ask => "ask",
            DecisionTier::Deny => "deny",
        }
    }

    /// Decision tag in the Codex rule language.
    pub fn codex_tag(self) -> &'static str {
        match self {
            DecisionTier::Allow => "allow",
            DecisionTier::Ask => "prompt",
            DecisionTier::Deny => "forbidden",
        }
    }
}

/// The Claude `permissions` object. Field order is the serialized key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionSet {
    pub allow: Vec<String>,
    pub ask: Vec<String>,
    pub deny: Vec<String>,
    pub additional_directories: Vec<String>,
}

/// A Codex `prefix_rule`.
///
/// `alternatives` is either empty or holds at least two tokens; a group with a
/// single alternative is folded into `prefix`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandRule {
    pub prefix: Vec<String>,
    pub alternatives: Vec<String>,
    pub decision: String,
    pub match_text: String,
}

impl CommandRule {
    /// True when the rule ends in a list of alternatives.
    pub fn is_alternating(&self) -> bool {
        !self.alternatives.is_empty()
    }
}

/// One `pattern: decision` entry of an OpenCode section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRule {
    pub pattern: String,
    pub decision: String,
}

impl SectionRule {
    /// Pair a pattern with its decision.
    pub fn new(pattern: impl Into<String>, decision: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            decision: decision.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Scalar(String),
    /// Always starts with the `*` default entry.
    RuleList(Vec<SectionRule>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpec {
    pub name: String,
    pub body: SectionBody,
}

impl SectionSpec {
    /// A section with a single decision for everything.
    pub fn scalar(name: impl Into<String>, decision: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: SectionBody::Scalar(decision.into()),
        }
    }

    /// A section with per-pattern rules.
    pub fn rule_list(name: impl Into<String>, rules: Vec<SectionRule>) -> Self {
        Self {
            name: name.into(),
            body: SectionBody::RuleList(rules),
        }
    }
}
