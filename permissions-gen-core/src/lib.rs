//! This crate provides the core logic of permissions-gen:
//! - Decoding the list-based permissions document
//! - Normalizing and expanding command lists for each agent
//! - Rendering the Claude, Codex and OpenCode permission configurations
//! - Splicing rendered blocks into existing files, by markers or by key
//!

pub mod commands;
mod config;
mod error;
mod normalize;
mod ordered;
mod patterns;
pub mod providers;
pub mod render;
mod rules;
pub mod scanner;
mod sections;
pub mod splice;
mod types;

// Re-exports for a small, focused public API
pub use commands::{
    Artifact, ArtifactOutcome, PermissionsGenService, RunReport, TargetPaths,
    CLAUDE_PERMISSIONS_KEY, DEFAULT_CLAUDE_PATH, DEFAULT_CODEX_PATH, DEFAULT_DATA_PATH,
    DEFAULT_OPENCODE_PATH, OPENCODE_PERMISSION_KEY,
};
pub use config::{
    BashConfig, ClaudeConfig, OpencodeConfig, PolicyDocument, SectionConfig, SectionRules,
};
pub use error::{LocateError, PermissionsGenError, PermissionsGenResult};
pub use normalize::{
    build_permission_set, expand_with_bash, expand_with_sentinel, normalize_list,
    to_tool_patterns, BASH_TOOL,
};
pub use ordered::OrderedSet;
pub use patterns::{contains_wildcard, expand_patterns};
pub use providers::NativeFileSystemProvider;
pub use rules::{build_codex_rules, build_decision_rules};
pub use sections::{build_section_rules, build_sections, BASH_SECTION};
pub use types::{
    CommandRule, DecisionTier, PermissionSet, SectionBody, SectionRule, SectionSpec,
    BASH_SENTINEL,
};
