//! Grouping of shell commands into Codex prefix rules

use indexmap::IndexMap;

use crate::config::PolicyDocument;
use crate::ordered::OrderedSet;
use crate::types::{CommandRule, DecisionTier};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum GroupKey {
    Single(String),
    Prefix { len: usize, prefix: Vec<String> },
}

#[derive(Debug)]
enum CommandGroup {
    Single(String),
    Alternation {
        prefix: Vec<String>,
        alternatives: OrderedSet,
    },
}

/// Group commands by everything but their last token, in first-occurrence order.
fn group_commands<S: AsRef<str>>(commands: &[S]) -> IndexMap<GroupKey, CommandGroup> {
    let mut groups = IndexMap::new();

    for command in commands {
        let mut tokens: Vec<String> = command
            .as_ref()
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let Some(last) = tokens.pop() else {
            continue;
        };

        if tokens.is_empty() {
            groups
                .entry(GroupKey::Single(last.clone()))
                .or_insert(CommandGroup::Single(last));
            continue;
        }

        let key = GroupKey::Prefix {
            len: tokens.len() + 1,
            prefix: tokens.clone(),
        };
        let group = groups.entry(key).or_insert_with(|| CommandGroup::Alternation {
            prefix: tokens,
            alternatives: OrderedSet::new(),
        });
        if let CommandGroup::Alternation { alternatives, .. } = group {
            alternatives.insert(last);
        }
    }

    groups
}

/// Build the rules of one decision tier.
///
/// A group with two or more final tokens becomes an alternating rule whose
/// `match` example uses only the first alternative.
pub fn build_decision_rules<S: AsRef<str>>(decision: &str, commands: &[S]) -> Vec<CommandRule> {
    group_commands(commands)
        .into_values()
        .map(|group| match group {
            CommandGroup::Single(token) => CommandRule {
                match_text: token.clone(),
                prefix: vec![token],
                alternatives: Vec::new(),
                decision: decision.to_string(),
            },
            CommandGroup::Alternation {
                prefix,
                alternatives,
            } if alternatives.len() == 1 => {
                let mut full = prefix;
                full.extend(alternatives.into_vec());
                CommandRule {
                    match_text: full.join(" "),
                    prefix: full,
                    alternatives: Vec::new(),
                    decision: decision.to_string(),
                }
            }
            CommandGroup::Alternation {
                prefix,
                alternatives,
            } => {
                let mut match_tokens = prefix.clone();
                match_tokens.extend(alternatives.first().map(str::to_string));
                CommandRule {
                    match_text: match_tokens.join(" "),
                    prefix,
                    alternatives: alternatives.into_vec(),
                    decision: decision.to_string(),
                }
            }
        })
        .collect()
}

/// Build every Codex rule: allow tier, then ask, then deny.
pub fn build_codex_rules(doc: &PolicyDocument) -> Vec<CommandRule> {
    DecisionTier::ALL
        .iter()
        .flat_map(|tier| {
            let commands = match tier {
                DecisionTier::Allow => &doc.bash.allow,
                DecisionTier::Ask => &doc.bash.ask,
                DecisionTier::Deny => &doc.bash.deny,
            };
            build_decision_rules(tier.codex_tag(), commands)
        })
        .collect()
}
