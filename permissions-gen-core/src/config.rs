//! Permissions document model, decoded from `.chezmoidata/permissions.yaml`

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

use crate::error::PermissionsGenResult;

/// The canonical permissions document.
///
/// ```yaml
/// bash:
///   allow: [git status, ls]
///   deny: [rm -rf]
/// claude:
///   allow: [Read, __BASH__]
///   additionalDirectories: [~/src]
/// opencode:
///   bash: { default: ask }
///   webfetch: allow
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PolicyDocument {
    #[serde(default)]
    pub bash: BashConfig,
    #[serde(default)]
    pub claude: ClaudeConfig,
    #[serde(default)]
    pub opencode: OpencodeConfig,
}

impl PolicyDocument {
    /// Decode a permissions document from YAML text.
    pub fn from_yaml_str(input: &str) -> PermissionsGenResult<Self> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(input)?)
    }
}

/// Shell command lists shared by every artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BashConfig {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub allow: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ask: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub deny: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaudeConfig {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub allow: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ask: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub deny: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub additional_directories: Vec<String>,
}

/// OpenCode permission sections. `bash` is merged with the shared bash lists;
/// every other key is carried as its own section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OpencodeConfig {
    #[serde(default)]
    pub bash: SectionConfig,
    #[serde(flatten)]
    pub others: BTreeMap<String, SectionConfig>,
}

/// A section is either a bare decision (`webfetch: allow`) or a rule list.
///
/// A null section (`bash:` with every entry commented out) is an empty rule
/// list. Boolean and numeric scalars are kept in their textual form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionConfig {
    Scalar(String),
    Rules(SectionRules),
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self::Rules(SectionRules::default())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSection {
    Text(String),
    Flag(bool),
    Integer(i64),
    Float(f64),
    Rules(SectionRules),
}

impl<'de> Deserialize<'de> for SectionConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<RawSection>::deserialize(deserializer)? {
            None => Self::default(),
            Some(RawSection::Text(decision)) => Self::Scalar(decision),
            Some(RawSection::Flag(flag)) => Self::Scalar(flag.to_string()),
            Some(RawSection::Integer(number)) => Self::Scalar(number.to_string()),
            Some(RawSection::Float(number)) => Self::Scalar(number.to_string()),
            Some(RawSection::Rules(rules)) => Self::Rules(rules),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SectionRules {
    #[serde(default, deserialize_with = "null_as_empty_string")]
    pub default: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub allow: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ask: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub deny: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_empty_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
