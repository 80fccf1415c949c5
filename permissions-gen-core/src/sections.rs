//! OpenCode permission sections built from the document

use crate::config::{PolicyDocument, SectionConfig, SectionRules};
use crate::normalize::normalize_list;
use crate::patterns::expand_patterns;
use crate::types::{DecisionTier, SectionRule, SectionSpec};

/// Section merged with the shared bash lists.
pub const BASH_SECTION: &str = "bash";

const DEFAULT_DECISION: &str = "allow";

/// Build all sections: `bash` first, then the others by ascending name.
pub fn build_sections(doc: &PolicyDocument) -> Vec<SectionSpec> {
    let mut sections = vec![build_bash_section(doc)];

    // BTreeMap iteration is already sorted by name.
    for (name, section) in &doc.opencode.others {
        if name == BASH_SECTION {
            continue;
        }
        sections.push(match section {
            SectionConfig::Scalar(decision) => SectionSpec::scalar(name, decision.trim()),
            SectionConfig::Rules(rules) => SectionSpec::rule_list(
                name,
                build_section_rules(
                    &rules.default,
                    [
                        rules.allow.as_slice(),
                        rules.ask.as_slice(),
                        rules.deny.as_slice(),
                    ],
                    false,
                ),
            ),
        });
    }

    sections
}

fn build_bash_section(doc: &PolicyDocument) -> SectionSpec {
    let own = match &doc.opencode.bash {
        SectionConfig::Scalar(decision) => {
            return SectionSpec::scalar(BASH_SECTION, decision.trim());
        }
        SectionConfig::Rules(rules) => rules,
    };

    let merged = |shared: &[String], extra: &[String]| -> Vec<String> {
        shared.iter().chain(extra).cloned().collect()
    };
    let SectionRules {
        default,
        allow,
        ask,
        deny,
    } = own;
    let allow = merged(&doc.bash.allow, allow);
    let ask = merged(&doc.bash.ask, ask);
    let deny = merged(&doc.bash.deny, deny);

    SectionSpec::rule_list(
        BASH_SECTION,
        build_section_rules(default, [&allow, &ask, &deny], true),
    )
}

/// The `*` default entry followed by the allow, ask and deny entries.
pub fn build_section_rules(
    default_decision: &str,
    tiers: [&[String]; 3],
    expand: bool,
) -> Vec<SectionRule> {
    let default_decision = match default_decision.trim() {
        "" => DEFAULT_DECISION,
        decision => decision,
    };

    let mut rules = vec![SectionRule::new("*", default_decision)];
    for (tier, values) in DecisionTier::ALL.iter().zip(tiers) {
        let patterns = if expand {
            expand_patterns(values)
        } else {
            normalize_list(values, true)
        };
        rules.extend(
            patterns
                .into_iter()
                .map(|pattern| SectionRule::new(pattern, tier.as_str())),
        );
    }
    rules
}
