//! Commands module - the three-artifact pipeline

mod claude;
mod codex;
mod opencode;
pub(crate) mod service;

pub use claude::CLAUDE_PERMISSIONS_KEY;
pub use opencode::OPENCODE_PERMISSION_KEY;
pub use service::{
    Artifact, ArtifactOutcome, PermissionsGenService, RunReport, TargetPaths, DEFAULT_CLAUDE_PATH,
    DEFAULT_CODEX_PATH, DEFAULT_DATA_PATH, DEFAULT_OPENCODE_PATH,
};
